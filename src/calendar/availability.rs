use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

static SLASH_FMT: &[BorrowedFormatItem<'_>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

static DASH_FMT: &[BorrowedFormatItem<'_>] =
    format_description!("[month padding:none]-[day padding:none]-[year]");

/// The selectable bounds of a picker.  A date equal to either bound is itself
/// unavailable; a missing bound leaves that side open.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Availability {
    min: Option<Date>,
    max: Option<Date>,
}

impl Availability {
    pub(crate) fn new(min: Option<Date>, max: Option<Date>) -> Availability {
        Availability { min, max }
    }

    /// Builds the bounds from user-supplied strings in month/day/year order.
    /// A string that fails to parse leaves its side unbounded.
    pub(crate) fn from_strs(min: Option<&str>, max: Option<&str>) -> Availability {
        Availability {
            min: min.and_then(|s| parse_bound("minimum", s)),
            max: max.and_then(|s| parse_bound("maximum", s)),
        }
    }

    pub(crate) fn is_unavailable(&self, date: Date) -> bool {
        self.min.is_some_and(|min| date <= min) || self.max.is_some_and(|max| date >= max)
    }
}

/// Parses a date in `MM/DD/YYYY` or `MM-DD-YYYY` form
pub(crate) fn parse_mdy(s: &str) -> Result<Date, time::error::Parse> {
    let s = s.trim();
    Date::parse(s, &SLASH_FMT).or_else(|_| Date::parse(s, &DASH_FMT))
}

fn parse_bound(which: &str, s: &str) -> Option<Date> {
    match parse_mdy(s) {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("Ignoring malformed {which} select date {s:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_mdy() {
        assert_eq!(parse_mdy("01/01/2024").ok(), Some(date!(2024 - 01 - 01)));
        assert_eq!(parse_mdy("9-5-2013").ok(), Some(date!(2013 - 09 - 05)));
        assert_eq!(parse_mdy(" 12/31/1999 ").ok(), Some(date!(1999 - 12 - 31)));
        assert!(parse_mdy("2024-01-01").is_err());
        assert!(parse_mdy("13/01/2024").is_err());
        assert!(parse_mdy("02/30/2024").is_err());
        assert!(parse_mdy("").is_err());
    }

    #[test]
    fn test_boundaries_unavailable() {
        let avail = Availability::from_strs(Some("01/01/2024"), Some("01/31/2024"));
        assert!(avail.is_unavailable(date!(2023 - 12 - 31)));
        assert!(avail.is_unavailable(date!(2024 - 01 - 01)));
        assert!(!avail.is_unavailable(date!(2024 - 01 - 02)));
        assert!(!avail.is_unavailable(date!(2024 - 01 - 30)));
        assert!(avail.is_unavailable(date!(2024 - 01 - 31)));
        assert!(avail.is_unavailable(date!(2024 - 02 - 01)));
    }

    #[test]
    fn test_unbounded() {
        let avail = Availability::default();
        assert!(!avail.is_unavailable(date!(1000 - 01 - 01)));
        assert!(!avail.is_unavailable(date!(9999 - 12 - 31)));
    }

    #[test]
    fn test_malformed_bound_is_open() {
        let avail = Availability::from_strs(Some("not a date"), Some("03/01/2024"));
        assert_eq!(avail, Availability::new(None, Some(date!(2024 - 03 - 01))));
        assert!(!avail.is_unavailable(date!(1900 - 01 - 01)));
        assert!(avail.is_unavailable(date!(2024 - 03 - 01)));
    }
}
