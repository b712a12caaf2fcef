use super::classify::RangeClassifier;
use super::grid::{DayCell, SelectMode};
use super::selection::SelectionState;
use super::window::Window;
use time::Date;

/// What to put on the cells of a week or month when spreading a highlight
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Paint {
    Hover(bool),
    Select(SelectMode),
}

impl Paint {
    fn apply(self, cell: &mut DayCell) {
        if !cell.is_paintable() {
            return;
        }
        match self {
            Paint::Hover(value) => cell.hover = value,
            Paint::Select(mode) => cell.select_mode = mode,
        }
    }
}

/// Resets every cell in the window to unhighlighted
pub(crate) fn clear(window: &mut Window) {
    for grid in window.months_mut() {
        grid.cells_mut().for_each(DayCell::clear);
    }
}

/// Sets the select mode of the single cell dated `date`, if visible
pub(crate) fn paint_day(window: &mut Window, date: Date, mode: SelectMode) {
    if let Some(cell) = window
        .position_of(date)
        .and_then(|pos| window.cell_mut(pos))
    {
        cell.select_mode = mode;
    }
}

/// Sets the hover flag of the single cell dated `date`, if visible
pub(crate) fn hover_day(window: &mut Window, date: Date, value: bool) {
    if let Some(cell) = window
        .position_of(date)
        .and_then(|pos| window.cell_mut(pos))
    {
        cell.hover = value;
    }
}

/// Applies `paint` across the grid row containing `date`
pub(crate) fn paint_week(window: &mut Window, date: Date, paint: Paint) {
    let Some(pos) = window.position_of(date) else {
        return;
    };
    if let Some(week) = window
        .month_mut(pos.month)
        .and_then(|grid| grid.weeks_mut().get_mut(pos.week))
    {
        week.iter_mut().for_each(|cell| paint.apply(cell));
    }
}

/// Applies `paint` across the whole month grid containing `date`
pub(crate) fn paint_month(window: &mut Window, date: Date, paint: Paint) {
    let Some(pos) = window.position_of(date) else {
        return;
    };
    if let Some(grid) = window.month_mut(pos.month) {
        grid.cells_mut().for_each(|cell| paint.apply(cell));
    }
}

/// Spreads `paint` over the week or month around `date` according to
/// `mode`; a daily mode touches nothing
pub(crate) fn paint_span(window: &mut Window, date: Date, mode: SelectMode, paint: Paint) {
    match mode {
        SelectMode::Weekly => paint_week(window, date, paint),
        SelectMode::Monthly => paint_month(window, date, paint),
        SelectMode::Daily | SelectMode::None => (),
    }
}

/// Clears the window and paints `selection` onto it.
///
/// Every visible date in `[anchor, end]` gets the range's mode.  For a
/// weekly or monthly range, the weeks (or months) holding each end are then
/// filled in as a whole.  A start-only selection paints its anchor as daily.
pub(crate) fn paint_selection(
    window: &mut Window,
    selection: &SelectionState,
    classifier: &RangeClassifier,
) {
    clear(window);
    match (selection.anchor(), selection.end()) {
        (Some(anchor), Some(end)) => {
            let mode = classifier.classify(anchor, end, false);
            for grid in window.months_mut() {
                for cell in grid.cells_mut() {
                    if cell.date().is_some_and(|d| anchor <= d && d <= end) {
                        cell.select_mode = mode;
                    }
                }
            }
            let paint = Paint::Select(mode);
            paint_span(window, anchor, mode, paint);
            paint_span(window, end, mode, paint);
        }
        (Some(anchor), None) => paint_day(window, anchor, SelectMode::Daily),
        (None, _) => (),
    }
}
