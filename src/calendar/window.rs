use super::grid::{CellPos, DayCell, GridGenerator, MonthGrid};
use super::math::{month_label, roll_month};
use super::OutOfTimeError;
use std::collections::{HashMap, VecDeque};
use time::{Date, Month};

/// Which way to slide the window
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Step {
    Forwards,
    Backwards,
}

/// The contiguous run of month grids currently on display, oldest first,
/// together with their labels
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Window {
    months: VecDeque<MonthGrid>,
    labels: VecDeque<String>,
    // Rebuilt whenever `months` changes
    index: HashMap<Date, CellPos>,
}

impl Window {
    /// Builds the base month plus `backward` months before it and `forward`
    /// months after it
    pub(crate) fn generate(
        generator: &GridGenerator,
        base_year: i32,
        base_month: Month,
        backward: u8,
        forward: u8,
    ) -> Result<Window, OutOfTimeError> {
        let mut months =
            VecDeque::with_capacity(usize::from(backward) + usize::from(forward) + 1);
        let mut labels = VecDeque::with_capacity(months.capacity());
        let mut push = |delta: i32| -> Result<(), OutOfTimeError> {
            let (year, month) = roll_month(base_year, base_month, delta);
            months.push_back(generator.generate_month(year, month)?);
            labels.push_back(month_label(year, month));
            Ok(())
        };
        for delta in (1..=i32::from(backward)).rev() {
            push(-delta)?;
        }
        push(0)?;
        for delta in 1..=i32::from(forward) {
            push(delta)?;
        }
        let mut window = Window {
            months,
            labels,
            index: HashMap::new(),
        };
        window.reindex();
        Ok(window)
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (m, grid) in self.months.iter().enumerate() {
            for (w, week) in grid.weeks().iter().enumerate() {
                for (d, cell) in week.iter().enumerate() {
                    if let Some(date) = cell.date() {
                        self.index.insert(
                            date,
                            CellPos {
                                month: m,
                                week: w,
                                day: d,
                            },
                        );
                    }
                }
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.months.len()
    }

    pub(crate) fn months(&self) -> impl Iterator<Item = &MonthGrid> {
        self.months.iter()
    }

    pub(crate) fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub(crate) fn month(&self, i: usize) -> Option<&MonthGrid> {
        self.months.get(i)
    }

    pub(super) fn month_mut(&mut self, i: usize) -> Option<&mut MonthGrid> {
        self.months.get_mut(i)
    }

    pub(super) fn months_mut(&mut self) -> impl Iterator<Item = &mut MonthGrid> {
        self.months.iter_mut()
    }

    pub(crate) fn position_of(&self, date: Date) -> Option<CellPos> {
        self.index.get(&date).copied()
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        self.index.contains_key(&date)
    }

    pub(crate) fn cell(&self, pos: CellPos) -> Option<&DayCell> {
        self.month(pos.month)
            .and_then(|grid| grid.cell(pos.week, pos.day))
    }

    pub(super) fn cell_mut(&mut self, pos: CellPos) -> Option<&mut DayCell> {
        self.month_mut(pos.month)
            .and_then(|grid| grid.cell_mut(pos.week, pos.day))
    }

    pub(crate) fn first_date(&self) -> Option<Date> {
        self.months
            .front()
            .and_then(|grid| grid.cells().find_map(DayCell::date))
    }

    pub(crate) fn last_date(&self) -> Option<Date> {
        self.months
            .back()
            .and_then(|grid| grid.cells().filter_map(DayCell::date).last())
    }

    /// Slides the window by one month: the month adjacent to the boundary in
    /// the direction of travel is generated and appended on that side, and
    /// the month at the opposite boundary is evicted.  On error the window is
    /// left untouched.
    pub(crate) fn advance(
        &mut self,
        generator: &GridGenerator,
        step: Step,
    ) -> Result<(), OutOfTimeError> {
        let boundary = match step {
            Step::Forwards => self.months.back(),
            Step::Backwards => self.months.front(),
        };
        let Some(boundary) = boundary else {
            return Ok(());
        };
        let (year, month) = boundary
            .middle_date()
            .map_or_else(|| (boundary.year(), boundary.month()), |d| (d.year(), d.month()));
        let delta = match step {
            Step::Forwards => 1,
            Step::Backwards => -1,
        };
        let (year, month) = roll_month(year, month, delta);
        let grid = generator.generate_month(year, month)?;
        let label = month_label(year, month);
        match step {
            Step::Forwards => {
                self.months.pop_front();
                self.labels.pop_front();
                self.months.push_back(grid);
                self.labels.push_back(label);
            }
            Step::Backwards => {
                self.months.pop_back();
                self.labels.pop_back();
                self.months.push_front(grid);
                self.labels.push_front(label);
            }
        }
        self.reindex();
        log::debug!(
            "Window now spans {} to {}",
            self.labels.front().map_or("?", String::as_str),
            self.labels.back().map_or("?", String::as_str),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::math::{first_grid_date, WeekStart};
    use super::super::Availability;
    use super::*;
    use time::macros::date;
    use time::Month::*;
    use time::Weekday;

    fn monday_generator() -> GridGenerator {
        GridGenerator::new(WeekStart::Monday, Availability::default())
    }

    fn labels(window: &Window) -> Vec<&str> {
        window.labels().collect()
    }

    #[test]
    fn test_generate_window() {
        let window = Window::generate(&monday_generator(), 2013, September, 2, 2).unwrap();
        assert_eq!(window.len(), 5);
        assert_eq!(
            labels(&window),
            ["Jul 2013", "Aug 2013", "Sep 2013", "Oct 2013", "Nov 2013"]
        );
        for grid in window.months() {
            let start = first_grid_date(grid.year(), grid.month(), WeekStart::Monday).unwrap();
            assert_eq!(start.weekday(), Weekday::Monday);
            // The first dated cell sits in the column of its weekday
            let (col, first) = grid.weeks()[0]
                .iter()
                .enumerate()
                .find_map(|(i, c)| c.date().map(|d| (i, d)))
                .unwrap();
            assert_eq!(first.day(), 1);
            assert_eq!(
                usize::from(WeekStart::Monday.column_of(first.weekday())),
                col
            );
            assert_eq!(
                first - start,
                time::Duration::days(i64::try_from(col).unwrap())
            );
        }
    }

    #[test]
    fn test_generate_window_across_years() {
        let window = Window::generate(&GridGenerator::default(), 2014, January, 2, 1).unwrap();
        assert_eq!(
            labels(&window),
            ["Nov 2013", "Dec 2013", "Jan 2014", "Feb 2014"]
        );
        let window = Window::generate(&GridGenerator::default(), 2013, November, 0, 3).unwrap();
        assert_eq!(
            labels(&window),
            ["Nov 2013", "Dec 2013", "Jan 2014", "Feb 2014"]
        );
    }

    #[test]
    fn test_index() {
        let window = Window::generate(&GridGenerator::default(), 2013, September, 1, 1).unwrap();
        assert_eq!(
            window.position_of(date!(2013 - 09 - 01)),
            Some(CellPos {
                month: 1,
                week: 0,
                day: 0
            })
        );
        assert_eq!(
            window.position_of(date!(2013 - 10 - 31)),
            Some(CellPos {
                month: 2,
                week: 4,
                day: 4
            })
        );
        assert!(!window.contains(date!(2013 - 11 - 01)));
        assert_eq!(window.first_date(), Some(date!(2013 - 08 - 01)));
        assert_eq!(window.last_date(), Some(date!(2013 - 10 - 31)));
        for date in [date!(2013 - 08 - 15), date!(2013 - 09 - 30)] {
            let pos = window.position_of(date).unwrap();
            assert_eq!(window.cell(pos).and_then(DayCell::date), Some(date));
        }
    }

    #[test]
    fn test_advance_forwards() {
        let generator = GridGenerator::default();
        let mut window = Window::generate(&generator, 2013, November, 1, 1).unwrap();
        window.advance(&generator, Step::Forwards).unwrap();
        assert_eq!(labels(&window), ["Nov 2013", "Dec 2013", "Jan 2014"]);
        assert!(!window.contains(date!(2013 - 10 - 15)));
        assert!(window.contains(date!(2014 - 01 - 31)));
    }

    #[test]
    fn test_advance_backwards() {
        let generator = GridGenerator::default();
        let mut window = Window::generate(&generator, 2014, February, 1, 1).unwrap();
        window.advance(&generator, Step::Backwards).unwrap();
        assert_eq!(labels(&window), ["Dec 2013", "Jan 2014", "Feb 2014"]);
        assert!(!window.contains(date!(2014 - 03 - 01)));
    }

    #[test]
    fn test_advance_round_trip() {
        let generator = monday_generator();
        let mut window = Window::generate(&generator, 2013, September, 2, 2).unwrap();
        let before = window.clone();
        window.advance(&generator, Step::Forwards).unwrap();
        window.advance(&generator, Step::Backwards).unwrap();
        assert_eq!(window, before);
    }

    #[test]
    fn test_single_month_window() {
        let generator = GridGenerator::default();
        let mut window = Window::generate(&generator, 2013, September, 0, 0).unwrap();
        assert_eq!(labels(&window), ["Sep 2013"]);
        window.advance(&generator, Step::Forwards).unwrap();
        assert_eq!(labels(&window), ["Oct 2013"]);
    }

    #[test]
    fn test_advance_past_end_of_time() {
        let generator = GridGenerator::default();
        let mut window = Window::generate(&generator, 9999, December, 1, 0).unwrap();
        let before = window.clone();
        assert_eq!(
            window.advance(&generator, Step::Forwards),
            Err(OutOfTimeError)
        );
        assert_eq!(window, before);
    }
}
