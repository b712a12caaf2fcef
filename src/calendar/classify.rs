use super::grid::SelectMode;
use time::{Date, Duration};

/// Decides whether a candidate date lies far enough from the anchor for the
/// selection to snap to whole weeks or whole months.
///
/// Each threshold is a day count.  When both are configured and the monthly
/// one is the wider, a candidate that clears the weekly threshold but not the
/// monthly one is weekly, and anything beyond the monthly threshold is
/// monthly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct RangeClassifier {
    weekly: Option<u32>,
    monthly: Option<u32>,
}

impl RangeClassifier {
    pub(crate) fn new(weekly: Option<u32>, monthly: Option<u32>) -> RangeClassifier {
        RangeClassifier {
            weekly: weekly.filter(|&n| n > 0),
            monthly: monthly.filter(|&n| n > 0),
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.weekly.is_some() || self.monthly.is_some()
    }

    pub(crate) fn is_weekly(&self, anchor: Date, candidate: Date, unavailable: bool) -> bool {
        exceeds_range(self.weekly, self.monthly, anchor, candidate, unavailable)
    }

    pub(crate) fn is_monthly(&self, anchor: Date, candidate: Date, unavailable: bool) -> bool {
        exceeds_range(self.monthly, self.weekly, anchor, candidate, unavailable)
    }

    /// Combines the weekly and monthly tests, weekly taking precedence.
    /// Returns `SelectMode::Daily` when neither threshold fires.
    pub(crate) fn classify(&self, anchor: Date, candidate: Date, unavailable: bool) -> SelectMode {
        if !self.is_enabled() {
            SelectMode::Daily
        } else if self.is_weekly(anchor, candidate, unavailable) {
            SelectMode::Weekly
        } else if self.is_monthly(anchor, candidate, unavailable) {
            SelectMode::Monthly
        } else {
            SelectMode::Daily
        }
    }
}

/// Tests `candidate` against the `select` threshold around `anchor`.  If a
/// wider `compare` threshold exists, only the band between the two cutoffs
/// (on either side of the anchor) counts.
fn exceeds_range(
    select: Option<u32>,
    compare: Option<u32>,
    anchor: Date,
    candidate: Date,
    unavailable: bool,
) -> bool {
    let Some(select) = select else {
        return false;
    };
    if unavailable {
        return false;
    }
    let (backward, forward) = bounds(anchor, select);
    // A bound that ran off the calendar can never be passed
    let past_forward = forward.is_some_and(|f| candidate > f);
    let past_backward = backward.is_some_and(|b| candidate < b);
    if let Some(compare) = compare.filter(|&c| c > select) {
        let (outer_backward, outer_forward) = bounds(anchor, compare);
        return (past_forward && outer_forward.is_none_or(|f| candidate < f))
            || (past_backward && outer_backward.is_none_or(|b| candidate > b));
    }
    past_forward || past_backward
}

/// Returns `anchor - days` and `anchor + days`.  A bound that falls off the
/// representable calendar is `None`.
fn bounds(anchor: Date, days: u32) -> (Option<Date>, Option<Date>) {
    let span = Duration::days(i64::from(days));
    (anchor.checked_sub(span), anchor.checked_add(span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_disabled_is_daily() {
        let classifier = RangeClassifier::default();
        assert!(!classifier.is_enabled());
        assert_eq!(
            classifier.classify(date!(2013 - 09 - 10), date!(2014 - 09 - 10), false),
            SelectMode::Daily
        );
    }

    #[test]
    fn test_zero_threshold_disabled() {
        let classifier = RangeClassifier::new(Some(0), None);
        assert!(!classifier.is_enabled());
    }

    #[test]
    fn test_weekly_only() {
        let classifier = RangeClassifier::new(Some(3), None);
        let anchor = date!(2013 - 09 - 10);
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 09 - 13), false),
            SelectMode::Daily
        );
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 09 - 14), false),
            SelectMode::Weekly
        );
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 09 - 07), false),
            SelectMode::Daily
        );
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 09 - 06), false),
            SelectMode::Weekly
        );
        assert_eq!(
            classifier.classify(anchor, date!(2014 - 09 - 06), false),
            SelectMode::Weekly
        );
    }

    #[test]
    fn test_monthly_only() {
        let classifier = RangeClassifier::new(None, Some(10));
        let anchor = date!(2013 - 09 - 10);
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 09 - 20), false),
            SelectMode::Daily
        );
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 09 - 21), false),
            SelectMode::Monthly
        );
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 08 - 30), false),
            SelectMode::Daily
        );
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 08 - 29), false),
            SelectMode::Monthly
        );
    }

    #[test]
    fn test_both_thresholds() {
        let classifier = RangeClassifier::new(Some(3), Some(10));
        let anchor = date!(2013 - 09 - 10);
        for (candidate, mode) in [
            (date!(2013 - 09 - 10), SelectMode::Daily),
            (date!(2013 - 09 - 13), SelectMode::Daily),
            (date!(2013 - 09 - 15), SelectMode::Weekly),
            (date!(2013 - 09 - 19), SelectMode::Weekly),
            // Exactly on the monthly cutoff falls in neither band
            (date!(2013 - 09 - 20), SelectMode::Daily),
            (date!(2013 - 09 - 21), SelectMode::Monthly),
            (date!(2013 - 12 - 25), SelectMode::Monthly),
            (date!(2013 - 09 - 07), SelectMode::Daily),
            (date!(2013 - 09 - 05), SelectMode::Weekly),
            (date!(2013 - 08 - 31), SelectMode::Daily),
            (date!(2013 - 08 - 30), SelectMode::Monthly),
        ] {
            assert_eq!(
                classifier.classify(anchor, candidate, false),
                mode,
                "candidate {candidate}"
            );
        }
    }

    #[test]
    fn test_both_tests_never_fire_together() {
        let classifier = RangeClassifier::new(Some(3), Some(10));
        let anchor = date!(2013 - 09 - 10);
        let mut candidate = date!(2013 - 07 - 01);
        while candidate < date!(2013 - 11 - 30) {
            assert!(
                !(classifier.is_weekly(anchor, candidate, false)
                    && classifier.is_monthly(anchor, candidate, false)),
                "candidate {candidate}"
            );
            candidate = candidate.next_day().unwrap();
        }
    }

    #[test]
    fn test_unavailable_never_snaps() {
        let classifier = RangeClassifier::new(Some(3), Some(10));
        let anchor = date!(2013 - 09 - 10);
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 09 - 15), true),
            SelectMode::Daily
        );
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 10 - 15), true),
            SelectMode::Daily
        );
    }

    #[test]
    fn test_weekly_wider_than_monthly() {
        // A misconfigured pair still yields disjoint buckets
        let classifier = RangeClassifier::new(Some(10), Some(3));
        let anchor = date!(2013 - 09 - 10);
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 09 - 15), false),
            SelectMode::Monthly
        );
        assert_eq!(
            classifier.classify(anchor, date!(2013 - 09 - 25), false),
            SelectMode::Weekly
        );
    }

    #[test]
    fn test_near_end_of_time() {
        let classifier = RangeClassifier::new(Some(3), None);
        let anchor = date!(9999 - 12 - 30);
        assert_eq!(
            classifier.classify(anchor, date!(9999 - 12 - 31), false),
            SelectMode::Daily
        );
        assert_eq!(
            classifier.classify(anchor, date!(9999 - 12 - 20), false),
            SelectMode::Weekly
        );
    }
}
