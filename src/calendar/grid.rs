use super::availability::Availability;
use super::math::{
    chunk, first_grid_date, WeekStart, DAYS_IN_GRID, DAYS_IN_WEEK, WEEKS_IN_GRID,
};
use super::OutOfTimeError;
use std::iter::successors;
use time::{Date, Month};

/// The highlight classification currently applied to a cell
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum SelectMode {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
// Invariant: A cell without a date is never hovered and never has a select
// mode other than `None`.
pub(crate) struct DayCell {
    date: Option<Date>,
    pub(super) select_mode: SelectMode,
    pub(super) hover: bool,
    unavailable: bool,
}

impl DayCell {
    fn new(date: Date, availability: &Availability) -> DayCell {
        DayCell {
            date: Some(date),
            select_mode: SelectMode::None,
            hover: false,
            unavailable: availability.is_unavailable(date),
        }
    }

    fn placeholder() -> DayCell {
        DayCell::default()
    }

    /// `None` for spillover cells outside the displayed month
    pub(crate) fn date(&self) -> Option<Date> {
        self.date
    }

    pub(crate) fn select_mode(&self) -> SelectMode {
        self.select_mode
    }

    pub(crate) fn is_hover(&self) -> bool {
        self.hover
    }

    pub(crate) fn is_unavailable(&self) -> bool {
        self.unavailable
    }

    /// True if the painter may touch this cell when spreading a mode across a
    /// whole week or month
    pub(super) fn is_paintable(&self) -> bool {
        self.date.is_some() && !self.unavailable
    }

    pub(super) fn clear(&mut self) {
        self.select_mode = SelectMode::None;
        self.hover = false;
    }
}

pub(crate) type Week = [DayCell; DAYS_IN_WEEK];

/// Location of a cell within a `Window`
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct CellPos {
    pub(crate) month: usize,
    pub(crate) week: usize,
    pub(crate) day: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
// Invariant: `weeks` always has exactly `WEEKS_IN_GRID` elements.
pub(crate) struct MonthGrid {
    year: i32,
    month: Month,
    weeks: Vec<Week>,
}

impl MonthGrid {
    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn month(&self) -> Month {
        self.month
    }

    pub(crate) fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub(super) fn weeks_mut(&mut self) -> &mut [Week] {
        &mut self.weeks
    }

    pub(crate) fn cell(&self, week: usize, day: usize) -> Option<&DayCell> {
        self.weeks.get(week).and_then(|w| w.get(day))
    }

    pub(super) fn cell_mut(&mut self, week: usize, day: usize) -> Option<&mut DayCell> {
        self.weeks.get_mut(week).and_then(|w| w.get_mut(day))
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    pub(super) fn cells_mut(&mut self) -> impl Iterator<Item = &mut DayCell> {
        self.weeks.iter_mut().flatten()
    }

    /// The date in the last column of the middle week.  It always lies inside
    /// the grid's month, whatever the leading and trailing spillover.
    pub(super) fn middle_date(&self) -> Option<Date> {
        self.cell(WEEKS_IN_GRID / 2 - 1, DAYS_IN_WEEK - 1)
            .and_then(DayCell::date)
    }
}

/// Builds month grids, stamping each populated cell with its availability
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct GridGenerator {
    week_start: WeekStart,
    availability: Availability,
}

impl GridGenerator {
    pub(crate) fn new(week_start: WeekStart, availability: Availability) -> Self {
        GridGenerator {
            week_start,
            availability,
        }
    }

    pub(crate) fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub(crate) fn generate_month(
        &self,
        year: i32,
        month: Month,
    ) -> Result<MonthGrid, OutOfTimeError> {
        let first = first_grid_date(year, month, self.week_start)?;
        let mut days = successors(Some(first), |d| d.next_day())
            .take(DAYS_IN_GRID)
            .map(|d| {
                if d.month() == month {
                    DayCell::new(d, &self.availability)
                } else {
                    DayCell::placeholder()
                }
            })
            .collect::<Vec<_>>();
        // Only reached at the very end of time
        days.resize(DAYS_IN_GRID, DayCell::placeholder());
        Ok(MonthGrid {
            year,
            month,
            weeks: chunk(&days),
        })
    }
}
