use super::OutOfTimeError;
use time::{Date, Duration, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) const WEEKS_IN_GRID: usize = 6;

/// Number of cells in a month grid
pub(crate) const DAYS_IN_GRID: usize = DAYS_IN_WEEK * WEEKS_IN_GRID;

static MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

static WEEKDAY_LABELS: [&str; 6] = ["Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Which weekday occupies the leftmost column of a month grid
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub(crate) fn from_use_monday(use_monday: bool) -> WeekStart {
        if use_monday {
            WeekStart::Monday
        } else {
            WeekStart::Sunday
        }
    }

    /// Column of `wd` in a grid using this week start
    pub(crate) fn column_of(self, wd: Weekday) -> u8 {
        match self {
            WeekStart::Sunday => wd.number_days_from_sunday(),
            WeekStart::Monday => wd.number_days_from_monday(),
        }
    }
}

/// The two-letter weekday labels in grid column order
pub(crate) fn weekday_labels(week_start: WeekStart) -> Vec<&'static str> {
    let mut labels = WEEKDAY_LABELS.to_vec();
    match week_start {
        WeekStart::Monday => labels.push("Su"),
        WeekStart::Sunday => labels.insert(0, "Su"),
    }
    labels
}

/// Returns the date at week 0, day 0 of the grid for the given month: the
/// most recent `week_start` weekday on or before the first of the month
pub(crate) fn first_grid_date(
    year: i32,
    month: Month,
    week_start: WeekStart,
) -> Result<Date, OutOfTimeError> {
    let first = Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)?;
    let back = week_start.column_of(first.weekday());
    first
        .checked_sub(Duration::days(i64::from(back)))
        .ok_or(OutOfTimeError)
}

/// Splits a flat day sequence into consecutive weeks, preserving order.  A
/// trailing partial week is dropped.
pub(crate) fn chunk<T: Copy>(days: &[T]) -> Vec<[T; DAYS_IN_WEEK]> {
    days.chunks_exact(DAYS_IN_WEEK)
        .filter_map(|c| <[T; DAYS_IN_WEEK]>::try_from(c).ok())
        .collect()
}

/// Returns the `(year, month)` lying `delta` months away from the given one
pub(crate) fn roll_month(year: i32, month: Month, delta: i32) -> (i32, Month) {
    let total = i64::from(year) * 12 + i64::from(u8::from(month)) - 1 + i64::from(delta);
    let new_year = i32::try_from(total.div_euclid(12)).unwrap_or(if total < 0 {
        i32::MIN
    } else {
        i32::MAX
    });
    let new_month = u8::try_from(total.rem_euclid(12) + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .unwrap_or(Month::January);
    (new_year, new_month)
}

/// Human-readable label for a month, e.g., "Sep 2013"
pub(crate) fn month_label(year: i32, month: Month) -> String {
    let abbrev = MONTH_ABBREVS
        .get(usize::from(u8::from(month) - 1))
        .copied()
        .unwrap_or("???");
    format!("{abbrev} {year}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month::*;

    #[test]
    fn test_first_grid_date_sunday() {
        // 2013-09-01 is a Sunday, so no walk-back occurs
        assert_eq!(
            first_grid_date(2013, September, WeekStart::Sunday),
            Ok(date!(2013 - 09 - 01))
        );
        assert_eq!(
            first_grid_date(2013, October, WeekStart::Sunday),
            Ok(date!(2013 - 09 - 29))
        );
    }

    #[test]
    fn test_first_grid_date_monday() {
        assert_eq!(
            first_grid_date(2013, September, WeekStart::Monday),
            Ok(date!(2013 - 08 - 26))
        );
        // 2013-07-01 is a Monday
        assert_eq!(
            first_grid_date(2013, July, WeekStart::Monday),
            Ok(date!(2013 - 07 - 01))
        );
    }

    #[test]
    fn test_first_grid_date_weekday() {
        for year in [1999, 2000, 2013, 2024, 2100] {
            for m in 1..=12 {
                let month = Month::try_from(m).unwrap();
                let sun = first_grid_date(year, month, WeekStart::Sunday).unwrap();
                assert_eq!(sun.weekday(), Weekday::Sunday);
                let mon = first_grid_date(year, month, WeekStart::Monday).unwrap();
                assert_eq!(mon.weekday(), Weekday::Monday);
            }
        }
    }

    #[test]
    fn test_first_grid_date_end_of_time() {
        // -9999-01-01 is a Monday, so a Sunday grid would start before it
        assert_eq!(
            first_grid_date(-9999, January, WeekStart::Sunday),
            Err(OutOfTimeError)
        );
    }

    #[test]
    fn test_chunk() {
        let days = (0..42).collect::<Vec<u32>>();
        let weeks = chunk(&days);
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0], [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(weeks[5], [35, 36, 37, 38, 39, 40, 41]);
    }

    #[test]
    fn test_roll_month() {
        assert_eq!(roll_month(2013, September, 0), (2013, September));
        assert_eq!(roll_month(2013, September, 1), (2013, October));
        assert_eq!(roll_month(2013, December, 1), (2014, January));
        assert_eq!(roll_month(2013, January, -1), (2012, December));
        assert_eq!(roll_month(2013, November, 6), (2014, May));
        assert_eq!(roll_month(2013, March, -6), (2012, September));
    }

    #[test]
    fn test_roll_month_many_years() {
        assert_eq!(roll_month(2013, September, 25), (2015, October));
        assert_eq!(roll_month(2013, September, -25), (2011, August));
        assert_eq!(roll_month(2013, January, -12), (2012, January));
        assert_eq!(roll_month(2013, January, 24), (2015, January));
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2013, September), "Sep 2013");
        assert_eq!(month_label(2024, January), "Jan 2024");
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(
            weekday_labels(WeekStart::Monday),
            ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
        );
        assert_eq!(
            weekday_labels(WeekStart::Sunday),
            ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        );
    }
}
