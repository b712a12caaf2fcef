use super::math::DAYS_IN_WEEK;
use super::{DayCell, MonthGrid, Phase, RangePicker, SelectMode, SelectionState};
use crate::theme::{
    BASE_STYLE, CURSOR_STYLE, DAILY_STYLE, HOVER_STYLE, MONTHLY_STYLE, MONTH_STYLE, STATUS_STYLE,
    UNAVAILABLE_STYLE, WEEKDAY_STYLE, WEEKLY_STYLE,
};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use std::iter::zip;
use time::Date;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 3;

/// Width of one month grid in columns, without trailing space after the last
/// day
const MONTH_WIDTH: u16 = DAY_WIDTH * 7 - 1;

/// Columns between adjacent months
const MONTH_GUTTER: u16 = 3;

/// Number of lines taken up by the status and hint lines and the space below
/// them
const HEADER_LINES: u16 = 3;

/// Lines per month: label, weekday header, six weeks, and a blank line
const MONTH_LINES: u16 = 9;

/// Renders a `RangePicker` with an optional keyboard cursor
#[derive(Clone, Copy, Debug)]
pub(crate) struct PickerView<'a> {
    picker: &'a RangePicker,
    cursor: Option<Date>,
}

impl<'a> PickerView<'a> {
    pub(crate) fn new(picker: &'a RangePicker) -> Self {
        PickerView {
            picker,
            cursor: None,
        }
    }

    pub(crate) fn cursor(mut self, date: Date) -> Self {
        self.cursor = Some(date);
        self
    }

    fn months_per_row(width: u16) -> u16 {
        ((width + MONTH_GUTTER) / (MONTH_WIDTH + MONTH_GUTTER)).max(1)
    }
}

impl Widget for PickerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.mvprint(
            0,
            0,
            format!("Selected: {}", show_selection(self.picker.committed())),
            STATUS_STYLE,
        );
        if !self.picker.is_open() {
            canvas.mvprint(1, 0, "Press o to pick dates", BASE_STYLE);
            return;
        }
        canvas.mvprint(1, 0, hint(self.picker.draft()), BASE_STYLE);
        let window = self.picker.window();
        let per_row = Self::months_per_row(area.width);
        let shown = u16::try_from(window.len()).unwrap_or(u16::MAX).min(per_row);
        let used_width = shown * (MONTH_WIDTH + MONTH_GUTTER) - MONTH_GUTTER;
        let left = area.width.saturating_sub(used_width) / 2;
        let weekdays = self.picker.weekday_labels();
        for (i, (grid, label)) in zip(0u16.., zip(window.months(), self.picker.month_labels())) {
            let top = HEADER_LINES + (i / per_row) * MONTH_LINES;
            let x = left + (i % per_row) * (MONTH_WIDTH + MONTH_GUTTER);
            canvas.draw_month(top, x, grid, label, &weekdays, self.cursor);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_month(
        &mut self,
        top: u16,
        x: u16,
        grid: &MonthGrid,
        label: &str,
        weekdays: &[&str],
        cursor: Option<Date>,
    ) {
        let label_width = u16::try_from(label.len()).unwrap_or(MONTH_WIDTH);
        let label_x = x + MONTH_WIDTH.saturating_sub(label_width) / 2;
        self.mvprint(top, label_x, label, MONTH_STYLE);
        for (col, wd) in zip(0u16.., weekdays) {
            self.mvprint(top + 1, x + col * DAY_WIDTH, wd, WEEKDAY_STYLE);
        }
        for (row, week) in zip(0u16.., grid.weeks()) {
            for (col, cell) in zip(0u16.., week.iter().take(DAYS_IN_WEEK)) {
                if let Some(date) = cell.date() {
                    self.mvprint(
                        top + 2 + row,
                        x + col * DAY_WIDTH,
                        format!("{:2}", date.day()),
                        day_style(cell, cursor == Some(date)),
                    );
                }
            }
        }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            self.buf.set_stringn(
                x + self.area.x,
                y + self.area.y,
                s.as_ref(),
                usize::from(self.area.width - x),
                style,
            );
        }
    }
}

fn day_style(cell: &DayCell, is_cursor: bool) -> Style {
    let mut style = match cell.select_mode() {
        SelectMode::None if cell.is_unavailable() => UNAVAILABLE_STYLE,
        SelectMode::None => BASE_STYLE,
        SelectMode::Daily => DAILY_STYLE,
        SelectMode::Weekly => WEEKLY_STYLE,
        SelectMode::Monthly => MONTHLY_STYLE,
    };
    if cell.is_hover() {
        style = style.patch(HOVER_STYLE);
    }
    if is_cursor {
        style = style.patch(CURSOR_STYLE);
    }
    style
}

fn show_selection(selection: &SelectionState) -> String {
    match (selection.anchor(), selection.end()) {
        (Some(start), Some(end)) => format!("{start} to {end}"),
        (Some(start), None) => start.to_string(),
        (None, _) => String::from("none"),
    }
}

fn hint(draft: &SelectionState) -> String {
    match (draft.phase(), draft.anchor()) {
        (Phase::StartSelected, Some(anchor)) => format!("From {anchor}: pick an end date"),
        (Phase::BothSelected, _) => {
            format!("{}: a to apply, c to cancel", show_selection(draft))
        }
        _ => String::from("Pick a start date"),
    }
}
