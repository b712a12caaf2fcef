use super::classify::RangeClassifier;
use super::grid::{CellPos, GridGenerator, SelectMode};
use super::math::{weekday_labels, WeekStart};
use super::paint::{self, Paint};
use super::selection::{SelectionState, Transition};
use super::window::{Step, Window};
use super::OutOfTimeError;
use crate::config::Settings;

/// The date range selection engine behind a multi-month picker.
///
/// All mutation happens through the `on_*` event handlers, each of which
/// leaves the window fully repainted before returning.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RangePicker {
    generator: GridGenerator,
    classifier: RangeClassifier,
    window: Window,
    draft: SelectionState,
    committed: SelectionState,
    open: bool,
}

impl RangePicker {
    pub(crate) fn new(settings: &Settings) -> Result<RangePicker, OutOfTimeError> {
        let window = Window::generate(
            &settings.generator,
            settings.base_year,
            settings.base_month,
            settings.backward_months,
            settings.forward_months,
        )?;
        Ok(RangePicker {
            generator: settings.generator,
            classifier: settings.classifier,
            window,
            draft: SelectionState::new(),
            committed: SelectionState::new(),
            open: false,
        })
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn month_labels(&self) -> impl Iterator<Item = &str> {
        self.window.labels()
    }

    pub(crate) fn weekday_labels(&self) -> Vec<&'static str> {
        weekday_labels(self.week_start())
    }

    pub(crate) fn week_start(&self) -> WeekStart {
        self.generator.week_start()
    }

    /// The last applied selection
    pub(crate) fn committed(&self) -> &SelectionState {
        &self.committed
    }

    /// The selection being edited
    pub(crate) fn draft(&self) -> &SelectionState {
        &self.draft
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn on_day_hover_enter(&mut self, pos: CellPos) {
        let Some(cell) = self.window.cell(pos).copied() else {
            return;
        };
        let Some(date) = cell.date() else {
            return;
        };
        match (self.draft.anchor(), self.draft.end()) {
            (None, _) => paint::hover_day(&mut self.window, date, true),
            (Some(anchor), None) => {
                let mode = self
                    .classifier
                    .classify(anchor, date, cell.is_unavailable());
                if mode != SelectMode::Daily {
                    paint::paint_span(&mut self.window, date, mode, Paint::Hover(true));
                } else if !cell.is_unavailable() {
                    paint::hover_day(&mut self.window, date, true);
                }
            }
            // The range is final until the next click
            (Some(_), Some(_)) => (),
        }
    }

    pub(crate) fn on_day_hover_leave(&mut self, pos: CellPos) {
        let Some(cell) = self.window.cell(pos).copied() else {
            return;
        };
        let Some(date) = cell.date() else {
            return;
        };
        if let (Some(anchor), None) = (self.draft.anchor(), self.draft.end()) {
            let mode = self
                .classifier
                .classify(anchor, date, cell.is_unavailable());
            if mode != SelectMode::Daily {
                paint::paint_span(&mut self.window, date, mode, Paint::Hover(false));
                return;
            }
        }
        paint::hover_day(&mut self.window, date, false);
    }

    /// Returns `false` if the click was ignored
    pub(crate) fn on_day_click(&mut self, pos: CellPos) -> bool {
        let Some(cell) = self.window.cell(pos).copied() else {
            return false;
        };
        let Some(date) = cell.date() else {
            return false;
        };
        if cell.is_unavailable() {
            log::debug!("Ignoring click on unavailable date {date}");
            return false;
        }
        let transition = self.draft.click(date);
        log::debug!(
            "Click on {date}: {transition:?}, selection now {:?}",
            self.draft
        );
        match transition {
            Transition::Started => {
                paint::paint_day(&mut self.window, date, SelectMode::Daily);
                true
            }
            Transition::Restarted => {
                paint::clear(&mut self.window);
                paint::paint_day(&mut self.window, date, SelectMode::Daily);
                true
            }
            Transition::Completed => {
                self.repaint();
                true
            }
            Transition::Unchanged => false,
        }
    }

    /// Makes the draft selection the committed one and closes the picker
    pub(crate) fn on_apply(&mut self) {
        self.committed = self.draft;
        self.open = false;
        log::debug!("Applied selection {:?}", self.committed);
    }

    /// Discards the draft, restores the committed selection, and closes the
    /// picker
    pub(crate) fn on_cancel(&mut self) {
        self.draft = self.committed;
        self.repaint();
        self.open = false;
        log::debug!("Cancelled; selection restored to {:?}", self.draft);
    }

    pub(crate) fn on_toggle_open(&mut self) {
        self.open = !self.open;
        log::debug!("Picker {}", if self.open { "opened" } else { "closed" });
    }

    pub(crate) fn on_next_month(&mut self) -> Result<(), OutOfTimeError> {
        self.navigate(Step::Forwards)
    }

    pub(crate) fn on_previous_month(&mut self) -> Result<(), OutOfTimeError> {
        self.navigate(Step::Backwards)
    }

    fn navigate(&mut self, step: Step) -> Result<(), OutOfTimeError> {
        self.window.advance(&self.generator, step)?;
        self.repaint();
        Ok(())
    }

    fn repaint(&mut self) {
        paint::paint_selection(&mut self.window, &self.draft, &self.classifier);
    }
}
