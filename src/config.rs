use crate::calendar::{Availability, GridGenerator, RangeClassifier, WeekStart};
use time::{Date, Month};

/// Fewest extra months that may be shown on either side of the base month
const MIN_EXTRA_MONTHS: i64 = 1;

/// Most extra months that may be shown on either side of the base month
const MAX_EXTRA_MONTHS: i64 = 6;

/// Earliest and latest years that `time::Date` can represent
const YEAR_RANGE: std::ops::RangeInclusive<i64> = -9999..=9999;

/// Picker options as handed over by the surrounding shell.
///
/// Values are kept as given and only checked by `resolve()`, where anything
/// out of range quietly falls back to its default.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct PickerConfig {
    starting_month: Option<i64>,
    starting_year: Option<i64>,
    backward_months: Option<i64>,
    forward_months: Option<i64>,
    use_monday: bool,
    min_select_date: Option<String>,
    max_select_date: Option<String>,
    weekly_select_range: Option<i64>,
    monthly_select_range: Option<i64>,
}

impl PickerConfig {
    pub(crate) fn new() -> PickerConfig {
        PickerConfig::default()
    }

    /// Zero-based month: 0 is January
    pub(crate) fn starting_month(mut self, month: i64) -> Self {
        self.starting_month = Some(month);
        self
    }

    pub(crate) fn starting_year(mut self, year: i64) -> Self {
        self.starting_year = Some(year);
        self
    }

    pub(crate) fn backward_months(mut self, qty: i64) -> Self {
        self.backward_months = Some(qty);
        self
    }

    pub(crate) fn forward_months(mut self, qty: i64) -> Self {
        self.forward_months = Some(qty);
        self
    }

    pub(crate) fn use_monday(mut self, flag: bool) -> Self {
        self.use_monday = flag;
        self
    }

    pub(crate) fn min_select_date<S: Into<String>>(mut self, date: S) -> Self {
        self.min_select_date = Some(date.into());
        self
    }

    pub(crate) fn max_select_date<S: Into<String>>(mut self, date: S) -> Self {
        self.max_select_date = Some(date.into());
        self
    }

    pub(crate) fn weekly_select_range(mut self, days: i64) -> Self {
        self.weekly_select_range = Some(days);
        self
    }

    pub(crate) fn monthly_select_range(mut self, days: i64) -> Self {
        self.monthly_select_range = Some(days);
        self
    }

    /// Validates the options, using `today` for whatever was left unset
    pub(crate) fn resolve(&self, today: Date) -> Settings {
        let base_month = self
            .starting_month
            .and_then(|m| {
                let month = u8::try_from(m)
                    .ok()
                    .and_then(|m| m.checked_add(1))
                    .and_then(|m| Month::try_from(m).ok());
                if month.is_none() {
                    log::warn!("Ignoring out-of-range starting month {m}");
                }
                month
            })
            .unwrap_or_else(|| today.month());
        let base_year = self
            .starting_year
            .and_then(|y| {
                let year = i32::try_from(y).ok().filter(|_| YEAR_RANGE.contains(&y));
                if year.is_none() {
                    log::warn!("Ignoring out-of-range starting year {y}");
                }
                year
            })
            .unwrap_or_else(|| today.year());
        let week_start = WeekStart::from_use_monday(self.use_monday);
        let availability = Availability::from_strs(
            self.min_select_date.as_deref(),
            self.max_select_date.as_deref(),
        );
        Settings {
            base_year,
            base_month,
            backward_months: extra_months("backward", self.backward_months),
            forward_months: extra_months("forward", self.forward_months),
            generator: GridGenerator::new(week_start, availability),
            classifier: RangeClassifier::new(
                select_range("weekly", self.weekly_select_range),
                select_range("monthly", self.monthly_select_range),
            ),
        }
    }
}

/// Fully validated picker options
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) base_year: i32,
    pub(crate) base_month: Month,
    pub(crate) backward_months: u8,
    pub(crate) forward_months: u8,
    pub(crate) generator: GridGenerator,
    pub(crate) classifier: RangeClassifier,
}

// A count outside the allowed range disables that side entirely rather than
// being clamped.
fn extra_months(side: &str, qty: Option<i64>) -> u8 {
    match qty {
        Some(n) if (MIN_EXTRA_MONTHS..=MAX_EXTRA_MONTHS).contains(&n) => {
            u8::try_from(n).unwrap_or(0)
        }
        Some(n) => {
            log::warn!(
                "Ignoring {side} month count {n}; must be from {MIN_EXTRA_MONTHS} to {MAX_EXTRA_MONTHS}"
            );
            0
        }
        None => 0,
    }
}

fn select_range(kind: &str, days: Option<i64>) -> Option<u32> {
    let days = days?;
    if days <= 0 {
        log::warn!("Ignoring non-positive {kind} select range {days}");
        return None;
    }
    // No two representable dates are this far apart anyway
    Some(u32::try_from(days).unwrap_or_else(|_| {
        log::warn!("Capping {kind} select range {days} at {}", u32::MAX);
        u32::MAX
    }))
}
