use time::Date;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Phase {
    NoneSelected,
    StartSelected,
    BothSelected,
}

/// A (possibly partial) date range.
///
/// Cells are identified by their dates: every date appears in at most one
/// cell of a `Window`, so the pair resolves back to cells through the
/// window's index.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
// Invariant: `end` is only set when `anchor` is, and then `anchor < end`.
pub(crate) struct SelectionState {
    anchor: Option<Date>,
    end: Option<Date>,
}

impl SelectionState {
    pub(crate) fn new() -> SelectionState {
        SelectionState::default()
    }

    pub(crate) fn anchor(&self) -> Option<Date> {
        self.anchor
    }

    pub(crate) fn end(&self) -> Option<Date> {
        self.end
    }

    /// The selected span when both ends are set
    pub(crate) fn range(&self) -> Option<(Date, Date)> {
        self.anchor.zip(self.end)
    }

    pub(crate) fn phase(&self) -> Phase {
        match (self.anchor, self.end) {
            (None, _) => Phase::NoneSelected,
            (Some(_), None) => Phase::StartSelected,
            (Some(_), Some(_)) => Phase::BothSelected,
        }
    }

    /// Applies a click on an available cell dated `date`
    pub(crate) fn click(&mut self, date: Date) -> Transition {
        match (self.anchor, self.end) {
            (None, _) => {
                self.anchor = Some(date);
                Transition::Started
            }
            (Some(anchor), None) => {
                if date < anchor {
                    self.anchor = Some(date);
                    self.end = Some(anchor);
                    Transition::Completed
                } else if date > anchor {
                    self.end = Some(date);
                    Transition::Completed
                } else {
                    Transition::Unchanged
                }
            }
            (Some(_), Some(_)) => {
                self.anchor = Some(date);
                self.end = None;
                Transition::Restarted
            }
        }
    }
}

/// What a click did to a `SelectionState`
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Transition {
    /// none-selected -> start-selected
    Started,
    /// start-selected -> both-selected
    Completed,
    /// both-selected -> start-selected
    Restarted,
    /// The anchor was clicked again
    Unchanged,
}
