//! Occurrence enumeration over a date window.

use std::iter::FusedIterator;

use recur_core::types::Date;
use tracing::debug;

use super::completion::is_completed_at;
use super::next::advance;
use super::rule::RecurrenceRule;

/// Lazy iterator over the occurrences of a rule, starting at its anchor.
///
/// The anchor date is the first occurrence. Every yielded date counts
/// towards `end_count`, so the iterator honours the rule's lifetime limit
/// regardless of where a caller starts collecting. Iteration ends when
/// the rule completes, or when the next step would leave the supported
/// calendar range.
///
/// # Examples
///
/// ```
/// use recur_models::recurrence::{Frequency, RecurrenceRule};
/// use recur_core::types::Date;
///
/// let rule = RecurrenceRule::builder()
///     .frequency(Frequency::Weekly)
///     .end_count(3)
///     .build()
///     .unwrap();
///
/// let dates: Vec<String> = rule
///     .occurrences(Date::from_ymd(2024, 1, 1).unwrap())
///     .map(|d| d.to_string())
///     .collect();
///
/// assert_eq!(dates, vec!["2024-01-01", "2024-01-08", "2024-01-15"]);
/// ```
#[derive(Debug, Clone)]
pub struct OccurrenceIter<'a> {
    rule: &'a RecurrenceRule,
    next: Option<Date>,
    produced: u32,
}

impl<'a> OccurrenceIter<'a> {
    /// Creates an iterator whose first candidate is `anchor_start`.
    pub fn new(rule: &'a RecurrenceRule, anchor_start: Date) -> Self {
        Self {
            rule,
            next: Some(anchor_start),
            produced: 0,
        }
    }

    /// Returns how many occurrences have been yielded so far.
    pub fn produced(&self) -> u32 {
        self.produced
    }
}

impl Iterator for OccurrenceIter<'_> {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let candidate = self.next.take()?;

        if is_completed_at(self.rule, self.produced, candidate) {
            debug!(%candidate, produced = self.produced, "recurrence completed");
            return None;
        }

        self.produced = self.produced.saturating_add(1);
        self.next = match advance(self.rule, candidate) {
            Ok(next) => Some(next),
            Err(error) => {
                debug!(%candidate, %error, "recurrence reached the end of the calendar");
                None
            }
        };

        Some(candidate)
    }
}

impl FusedIterator for OccurrenceIter<'_> {}

impl RecurrenceRule {
    /// Returns the lazy sequence of occurrences starting at `anchor_start`.
    ///
    /// See [`OccurrenceIter`].
    pub fn occurrences(&self, anchor_start: Date) -> OccurrenceIter<'_> {
        OccurrenceIter::new(self, anchor_start)
    }

    /// Returns the occurrences inside `[range_start, range_end]`.
    ///
    /// See [`occurrences_in_range`].
    pub fn occurrences_in_range(
        &self,
        anchor_start: Date,
        range_start: Date,
        range_end: Date,
        limit: Option<usize>,
    ) -> Vec<Date> {
        occurrences_in_range(self, anchor_start, range_start, range_end, limit)
    }
}

/// Returns the occurrences of `rule` inside `[range_start, range_end]`.
///
/// Occurrences are walked from `anchor_start`, the rule's first
/// occurrence. Those before `range_start` are skipped but still count
/// towards `end_count`. The result is ascending, every element lies in the
/// inclusive window, and its length never exceeds `limit` when one is
/// given.
///
/// Returns an empty vector when `anchor_start` is after `range_end` or
/// the window is inverted.
///
/// # Examples
///
/// ```
/// use recur_models::recurrence::{occurrences_in_range, Frequency, RecurrenceRule};
/// use recur_core::types::Date;
///
/// let rule = RecurrenceRule::new(Frequency::Monthly, 1).unwrap();
/// let anchor = Date::from_ymd(2024, 1, 15).unwrap();
///
/// let dates = occurrences_in_range(
///     &rule,
///     anchor,
///     Date::from_ymd(2024, 3, 1).unwrap(),
///     Date::from_ymd(2024, 12, 31).unwrap(),
///     Some(2),
/// );
///
/// assert_eq!(
///     dates,
///     vec![Date::from_ymd(2024, 3, 15).unwrap(), Date::from_ymd(2024, 4, 15).unwrap()]
/// );
/// ```
pub fn occurrences_in_range(
    rule: &RecurrenceRule,
    anchor_start: Date,
    range_start: Date,
    range_end: Date,
    limit: Option<usize>,
) -> Vec<Date> {
    if anchor_start > range_end || range_start > range_end || limit == Some(0) {
        return Vec::new();
    }

    let mut found = Vec::new();
    for date in rule.occurrences(anchor_start) {
        if date > range_end {
            break;
        }
        if date < range_start {
            continue;
        }
        found.push(date);
        if limit.is_some_and(|limit| found.len() >= limit) {
            debug!(limit = found.len(), "range limit reached");
            break;
        }
    }

    found
}
