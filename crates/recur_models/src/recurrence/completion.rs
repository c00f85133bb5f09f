//! Completion evaluation.

use recur_core::types::Date;

use super::rule::RecurrenceRule;

/// Returns whether `rule` has ended as of `as_of`.
///
/// True if `end_count` is set and `occurrence_count >= end_count`, or if
/// `end_date` is set and `as_of` is on or after it. A rule with neither
/// end condition never completes.
///
/// # Examples
///
/// ```
/// use recur_models::recurrence::{is_completed_at, Frequency, RecurrenceRule};
/// use recur_core::types::Date;
///
/// let rule = RecurrenceRule::builder()
///     .frequency(Frequency::Monthly)
///     .end_count(5)
///     .end_date(Date::from_ymd(2024, 1, 31).unwrap())
///     .build()
///     .unwrap();
///
/// let before = Date::from_ymd(2024, 1, 30).unwrap();
/// assert!(!is_completed_at(&rule, 4, before));
/// assert!(is_completed_at(&rule, 5, before));
/// assert!(is_completed_at(&rule, 0, Date::from_ymd(2024, 1, 31).unwrap()));
/// ```
pub fn is_completed_at(rule: &RecurrenceRule, occurrence_count: u32, as_of: Date) -> bool {
    let count_reached = rule
        .end_count()
        .is_some_and(|end_count| occurrence_count >= end_count);
    let date_reached = rule.end_date().is_some_and(|end_date| as_of >= end_date);
    count_reached || date_reached
}

/// Returns whether `rule` has ended as of today's local date.
///
/// See [`is_completed_at`].
pub fn is_completed(rule: &RecurrenceRule, occurrence_count: u32) -> bool {
    is_completed_at(rule, occurrence_count, Date::today())
}

impl RecurrenceRule {
    /// Returns whether the rule has ended as of `as_of`, using its own
    /// `occurrence_count`.
    pub fn is_completed_at(&self, as_of: Date) -> bool {
        is_completed_at(self, self.occurrence_count(), as_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::Frequency;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_end_count_cutoff() {
        let rule = RecurrenceRule::builder()
            .frequency(Frequency::Weekly)
            .end_count(5)
            .build()
            .unwrap();

        assert!(is_completed(&rule, 5));
        assert!(is_completed(&rule, 6));
        assert!(!is_completed(&rule, 4));
        assert!(!is_completed(&rule, 0));
    }

    #[test]
    fn test_end_date_cutoff() {
        let rule = RecurrenceRule::builder()
            .frequency(Frequency::Daily)
            .end_date(date(2024, 1, 31))
            .build()
            .unwrap();

        assert!(!is_completed_at(&rule, 0, date(2024, 1, 30)));
        assert!(is_completed_at(&rule, 0, date(2024, 1, 31)));
        assert!(is_completed_at(&rule, 0, date(2024, 2, 1)));
    }

    #[test]
    fn test_end_date_in_the_past_is_completed_today() {
        let rule = RecurrenceRule::builder()
            .frequency(Frequency::Daily)
            .end_date(date(2000, 1, 1))
            .build()
            .unwrap();

        assert!(is_completed(&rule, 0));
    }

    #[test]
    fn test_no_end_condition_never_completes() {
        let rule = RecurrenceRule::new(Frequency::Yearly, 1).unwrap();

        assert!(!is_completed(&rule, u32::MAX));
        assert!(!is_completed_at(&rule, u32::MAX, date(9999, 12, 31)));
    }

    #[test]
    fn test_either_condition_completes() {
        let rule = RecurrenceRule::builder()
            .frequency(Frequency::Monthly)
            .end_count(3)
            .end_date(date(2024, 6, 1))
            .build()
            .unwrap();

        assert!(is_completed_at(&rule, 3, date(2024, 1, 1)));
        assert!(is_completed_at(&rule, 0, date(2024, 6, 1)));
        assert!(!is_completed_at(&rule, 2, date(2024, 5, 31)));
    }

    #[test]
    fn test_zero_end_count_is_completed_immediately() {
        let rule = RecurrenceRule::builder()
            .frequency(Frequency::Daily)
            .end_count(0)
            .build()
            .unwrap();

        assert!(is_completed_at(&rule, 0, date(2024, 1, 1)));
    }

    #[test]
    fn test_method_uses_own_occurrence_count() {
        let rule = RecurrenceRule::builder()
            .frequency(Frequency::Daily)
            .end_count(2)
            .occurrence_count(2)
            .build()
            .unwrap();

        assert!(rule.is_completed_at(date(2024, 1, 1)));
        assert!(!rule
            .with_occurrence_count(1)
            .is_completed_at(date(2024, 1, 1)));
    }
}
