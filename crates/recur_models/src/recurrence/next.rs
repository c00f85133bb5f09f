//! Next-occurrence calculation.

use recur_core::types::{Date, DateError};
use tracing::trace;

use super::completion::is_completed_at;
use super::error::RecurrenceError;
use super::frequency::Frequency;
use super::rule::{LeapDayPolicy, RecurrenceRule};

/// Returns the next occurrence of `rule` strictly after `from`.
///
/// Returns `Ok(None)` when the rule is finished: either the completion
/// check on the rule's own `occurrence_count` and `end_date` (evaluated
/// against `from`) already signals completion, or the computed date falls
/// on or after `end_date`.
///
/// # Errors
///
/// Returns [`RecurrenceError::Date`] only when the next date would lie
/// outside the supported calendar range.
///
/// # Examples
///
/// ```
/// use recur_models::recurrence::{next_occurrence, Frequency, RecurrenceRule};
/// use recur_core::types::Date;
///
/// let monthly = RecurrenceRule::new(Frequency::Monthly, 1).unwrap();
///
/// // Month-end never overflows into March
/// let leap = next_occurrence(&monthly, Date::from_ymd(2024, 1, 31).unwrap()).unwrap();
/// assert_eq!(leap, Some(Date::from_ymd(2024, 2, 29).unwrap()));
///
/// let common = next_occurrence(&monthly, Date::from_ymd(2025, 1, 31).unwrap()).unwrap();
/// assert_eq!(common, Some(Date::from_ymd(2025, 2, 28).unwrap()));
/// ```
pub fn next_occurrence(
    rule: &RecurrenceRule,
    from: Date,
) -> Result<Option<Date>, RecurrenceError> {
    if is_completed_at(rule, rule.occurrence_count(), from) {
        trace!(%from, "rule already completed");
        return Ok(None);
    }

    let candidate = advance(rule, from)?;

    if rule.end_date().is_some_and(|end| candidate >= end) {
        trace!(%from, %candidate, "candidate reaches end date");
        return Ok(None);
    }

    Ok(Some(candidate))
}

impl RecurrenceRule {
    /// Returns the next occurrence strictly after `from`.
    ///
    /// See [`next_occurrence`].
    pub fn next_after(&self, from: Date) -> Result<Option<Date>, RecurrenceError> {
        next_occurrence(self, from)
    }
}

/// Applies one step of `rule` to `from`, ignoring end conditions.
///
/// The result is always strictly after `from`.
pub(crate) fn advance(rule: &RecurrenceRule, from: Date) -> Result<Date, RecurrenceError> {
    let frequency = rule.frequency();
    let interval = rule.interval();

    let next = match frequency {
        Frequency::Daily | Frequency::Weekly | Frequency::Biweekly => {
            let days = u64::from(frequency.days_per_step()) * u64::from(interval);
            let landed = from.add_days(days)?;
            match rule.effective_day_of_week() {
                Some(weekday) => landed.next_on_or_after(weekday)?,
                None => landed,
            }
        }
        Frequency::Monthly | Frequency::Quarterly => {
            let months = frequency
                .months_per_step()
                .checked_mul(interval)
                .ok_or_else(|| DateError::Overflow {
                    reason: format!("{} x {} months", interval, frequency.months_per_step()),
                })?;
            let landed = from.add_months_clamped(months)?;
            pin_day_of_month(rule, landed)
        }
        Frequency::Yearly => {
            let landed = match rule.leap_day_policy() {
                LeapDayPolicy::Legacy => from.add_years_rolling(interval)?,
                LeapDayPolicy::Clamp => from.add_years_clamped(interval)?,
            };
            pin_day_of_month(rule, landed)
        }
    };

    trace!(%from, %next, frequency = %frequency, interval, "advanced");
    Ok(next)
}

fn pin_day_of_month(rule: &RecurrenceRule, landed: Date) -> Date {
    match rule.effective_day_of_month() {
        Some(anchor) => anchor.resolve(landed),
        None => landed,
    }
}
