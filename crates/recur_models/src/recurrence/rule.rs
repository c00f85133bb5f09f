//! RecurrenceRule and RecurrenceRuleBuilder implementation.

use chrono::Weekday;
use recur_core::types::{weekday_from_index, Date};
use tracing::debug;

use super::error::RecurrenceError;
use super::frequency::Frequency;

/// Day-of-month anchor for month based frequencies.
///
/// Persisted as an integer: 1-31 for a nominal day, `-1` for the last
/// day of the month.
///
/// # Examples
///
/// ```
/// use recur_models::recurrence::MonthDay;
/// use recur_core::types::Date;
///
/// let feb = Date::from_ymd(2025, 2, 10).unwrap();
///
/// assert_eq!(MonthDay::Day(31).resolve(feb), Date::from_ymd(2025, 2, 28).unwrap());
/// assert_eq!(MonthDay::Last.resolve(feb), Date::from_ymd(2025, 2, 28).unwrap());
/// assert_eq!(MonthDay::from_raw(-1).unwrap(), MonthDay::Last);
/// assert!(MonthDay::from_raw(32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthDay {
    /// A nominal day (1-31), clamped to the month's length.
    Day(u8),
    /// The last day of the month.
    Last,
}

impl MonthDay {
    /// Sentinel used for [`MonthDay::Last`] in persisted rules.
    pub const LAST_DAY_SENTINEL: i64 = -1;

    /// Validates a persisted day-of-month value.
    pub fn from_raw(raw: i64) -> Result<Self, RecurrenceError> {
        match raw {
            Self::LAST_DAY_SENTINEL => Ok(MonthDay::Last),
            // 1..=31 always fits u8
            1..=31 => Ok(MonthDay::Day(raw as u8)),
            _ => Err(RecurrenceError::InvalidDayOfMonth { day: raw }),
        }
    }

    /// Returns the persisted integer form.
    pub fn as_raw(&self) -> i64 {
        match self {
            MonthDay::Day(day) => i64::from(*day),
            MonthDay::Last => Self::LAST_DAY_SENTINEL,
        }
    }

    /// Pins `date` to this anchor within its own month.
    pub fn resolve(&self, date: Date) -> Date {
        match self {
            MonthDay::Day(day) => date.with_day_clamped(u32::from(*day)),
            MonthDay::Last => date.last_day_of_month(),
        }
    }
}

/// How yearly rules treat February 29th landing in a non-leap year.
///
/// `Legacy` (the default) rolls the date forward to March 1st, and a
/// day-of-month anchor is then applied to March: a leap-day rule with
/// `day_of_month = 29` lands on March 29th. Existing schedules depend on
/// these dates. `Clamp` lands on February 28th instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LeapDayPolicy {
    /// Roll Feb 29 forward to Mar 1 in non-leap years.
    #[default]
    Legacy,
    /// Clamp Feb 29 to Feb 28 in non-leap years.
    Clamp,
}

/// An immutable recurrence specification.
///
/// A rule is validated once, when it is built, and every calculation
/// trusts it afterwards. The engine never mutates a rule:
/// `occurrence_count` is owned by the caller, who produces an updated
/// copy with [`RecurrenceRule::with_occurrence_count`].
///
/// A rule may carry both a day-of-week and a day-of-month anchor (legacy
/// records do). Only the anchor matching the frequency is read; the other
/// is ignored.
///
/// # Examples
///
/// ```
/// use recur_models::recurrence::{Frequency, RecurrenceRule};
/// use chrono::Weekday;
///
/// let rule = RecurrenceRule::builder()
///     .frequency(Frequency::Weekly)
///     .day_of_week(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(rule.interval(), 1);
/// assert_eq!(rule.day_of_week(), Some(Weekday::Fri));
/// assert_eq!(rule.to_string(), "Weekly on Friday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRule", into = "RawRule"))]
pub struct RecurrenceRule {
    frequency: Frequency,
    interval: u32,
    day_of_week: Option<Weekday>,
    day_of_month: Option<MonthDay>,
    end_date: Option<Date>,
    end_count: Option<u32>,
    occurrence_count: u32,
    leap_day_policy: LeapDayPolicy,
}

impl RecurrenceRule {
    /// Creates a rule with the given frequency and interval and no anchor
    /// or end condition.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::InvalidInterval`] if `interval < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_models::recurrence::{Frequency, RecurrenceRule};
    ///
    /// let rule = RecurrenceRule::new(Frequency::Daily, 3).unwrap();
    /// assert_eq!(rule.to_string(), "Every 3 days");
    ///
    /// assert!(RecurrenceRule::new(Frequency::Daily, 0).is_err());
    /// ```
    pub fn new(frequency: Frequency, interval: i64) -> Result<Self, RecurrenceError> {
        RecurrenceRuleBuilder::new()
            .frequency(frequency)
            .interval(interval)
            .build()
    }

    /// Returns a builder for a rule.
    pub fn builder() -> RecurrenceRuleBuilder {
        RecurrenceRuleBuilder::new()
    }

    /// Returns the recurrence frequency.
    #[inline]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the interval multiplier (always at least 1).
    #[inline]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Returns the day-of-week anchor, if any.
    #[inline]
    pub fn day_of_week(&self) -> Option<Weekday> {
        self.day_of_week
    }

    /// Returns the day-of-month anchor, if any.
    #[inline]
    pub fn day_of_month(&self) -> Option<MonthDay> {
        self.day_of_month
    }

    /// Returns the exclusive end date, if any.
    #[inline]
    pub fn end_date(&self) -> Option<Date> {
        self.end_date
    }

    /// Returns the maximum number of occurrences, if any.
    #[inline]
    pub fn end_count(&self) -> Option<u32> {
        self.end_count
    }

    /// Returns the caller-maintained number of occurrences already produced.
    #[inline]
    pub fn occurrence_count(&self) -> u32 {
        self.occurrence_count
    }

    /// Returns the leap-day policy for yearly rules.
    #[inline]
    pub fn leap_day_policy(&self) -> LeapDayPolicy {
        self.leap_day_policy
    }

    /// Returns the day-of-week anchor if it applies to this frequency.
    pub(crate) fn effective_day_of_week(&self) -> Option<Weekday> {
        self.day_of_week
            .filter(|_| self.frequency.uses_day_of_week())
    }

    /// Returns the day-of-month anchor if it applies to this frequency.
    pub(crate) fn effective_day_of_month(&self) -> Option<MonthDay> {
        self.day_of_month
            .filter(|_| self.frequency.uses_day_of_month())
    }

    /// Returns a copy of this rule with an updated occurrence count.
    ///
    /// # Examples
    ///
    /// ```
    /// use recur_models::recurrence::{Frequency, RecurrenceRule};
    ///
    /// let rule = RecurrenceRule::new(Frequency::Monthly, 1).unwrap();
    /// let advanced = rule.with_occurrence_count(4);
    ///
    /// assert_eq!(rule.occurrence_count(), 0);
    /// assert_eq!(advanced.occurrence_count(), 4);
    /// ```
    #[must_use]
    pub fn with_occurrence_count(mut self, occurrence_count: u32) -> Self {
        self.occurrence_count = occurrence_count;
        self
    }

    /// Returns a copy of this rule with a different leap-day policy.
    #[must_use]
    pub fn with_leap_day_policy(mut self, policy: LeapDayPolicy) -> Self {
        self.leap_day_policy = policy;
        self
    }
}

/// Builder for constructing recurrence rules.
///
/// Accepts the raw integer forms used by persisted scheduled transactions
/// and validates them in [`build`](RecurrenceRuleBuilder::build).
///
/// # Examples
///
/// ```
/// use recur_models::recurrence::{Frequency, MonthDay, RecurrenceRuleBuilder};
/// use recur_core::types::Date;
///
/// let rule = RecurrenceRuleBuilder::new()
///     .frequency(Frequency::Monthly)
///     .day_of_month(15)
///     .end_date(Date::from_ymd(2025, 1, 1).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(rule.day_of_month(), Some(MonthDay::Day(15)));
///
/// // Invalid anchors are rejected
/// let invalid = RecurrenceRuleBuilder::new()
///     .frequency(Frequency::Monthly)
///     .day_of_month(0)
///     .build();
/// assert!(invalid.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RecurrenceRuleBuilder {
    frequency: Option<Frequency>,
    interval: i64,
    day_of_week: Option<i64>,
    day_of_month: Option<i64>,
    end_date: Option<Date>,
    end_count: Option<u32>,
    occurrence_count: u32,
    leap_day_policy: LeapDayPolicy,
}

impl Default for RecurrenceRuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecurrenceRuleBuilder {
    /// Creates a new builder. Interval defaults to 1.
    pub fn new() -> Self {
        Self {
            frequency: None,
            interval: 1,
            day_of_week: None,
            day_of_month: None,
            end_date: None,
            end_count: None,
            occurrence_count: 0,
            leap_day_policy: LeapDayPolicy::default(),
        }
    }

    /// Sets the frequency.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the interval multiplier.
    pub fn interval(mut self, interval: i64) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the day-of-week anchor (0 = Sunday ... 6 = Saturday).
    pub fn day_of_week(mut self, day: i64) -> Self {
        self.day_of_week = Some(day);
        self
    }

    /// Sets the day-of-month anchor (1-31, or -1 for the last day).
    pub fn day_of_month(mut self, day: i64) -> Self {
        self.day_of_month = Some(day);
        self
    }

    /// Sets the exclusive end date.
    pub fn end_date(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the maximum number of occurrences.
    pub fn end_count(mut self, count: u32) -> Self {
        self.end_count = Some(count);
        self
    }

    /// Sets the number of occurrences already produced.
    pub fn occurrence_count(mut self, count: u32) -> Self {
        self.occurrence_count = count;
        self
    }

    /// Sets the leap-day policy for yearly rules.
    pub fn leap_day_policy(mut self, policy: LeapDayPolicy) -> Self {
        self.leap_day_policy = policy;
        self
    }

    /// Builds the rule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Frequency is missing
    /// - Interval is less than 1
    /// - Day of week is outside 0-6
    /// - Day of month is outside 1-31 and not -1
    pub fn build(self) -> Result<RecurrenceRule, RecurrenceError> {
        let frequency = self
            .frequency
            .ok_or(RecurrenceError::MissingField { field: "frequency" })?;

        let interval = u32::try_from(self.interval)
            .ok()
            .filter(|interval| *interval >= 1)
            .ok_or(RecurrenceError::InvalidInterval {
                interval: self.interval,
            })?;

        let day_of_week = self
            .day_of_week
            .map(|day| {
                u8::try_from(day)
                    .ok()
                    .and_then(weekday_from_index)
                    .ok_or(RecurrenceError::InvalidDayOfWeek { day })
            })
            .transpose()?;

        let day_of_month = self.day_of_month.map(MonthDay::from_raw).transpose()?;

        if day_of_week.is_some() && day_of_month.is_some() {
            debug!(
                frequency = %frequency,
                "rule carries both day-of-week and day-of-month; only the {} anchor is used",
                if frequency.uses_day_of_week() { "day-of-week" } else { "day-of-month" }
            );
        }

        Ok(RecurrenceRule {
            frequency,
            interval,
            day_of_week,
            day_of_month,
            end_date: self.end_date,
            end_count: self.end_count,
            occurrence_count: self.occurrence_count,
            leap_day_policy: self.leap_day_policy,
        })
    }
}

/// Persisted form of a rule, as stored on scheduled-transaction records.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRule {
    frequency: Frequency,
    #[serde(default = "default_interval")]
    interval: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day_of_week: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    day_of_month: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_count: Option<u32>,
    #[serde(default)]
    occurrence_count: u32,
    #[serde(default)]
    leap_day_policy: LeapDayPolicy,
}

#[cfg(feature = "serde")]
fn default_interval() -> i64 {
    1
}

#[cfg(feature = "serde")]
impl TryFrom<RawRule> for RecurrenceRule {
    type Error = RecurrenceError;

    fn try_from(raw: RawRule) -> Result<Self, Self::Error> {
        let mut builder = RecurrenceRuleBuilder::new()
            .frequency(raw.frequency)
            .interval(raw.interval)
            .occurrence_count(raw.occurrence_count)
            .leap_day_policy(raw.leap_day_policy);
        builder.day_of_week = raw.day_of_week;
        builder.day_of_month = raw.day_of_month;
        builder.end_date = raw.end_date;
        builder.end_count = raw.end_count;
        builder.build()
    }
}

#[cfg(feature = "serde")]
impl From<RecurrenceRule> for RawRule {
    fn from(rule: RecurrenceRule) -> Self {
        RawRule {
            frequency: rule.frequency,
            interval: i64::from(rule.interval),
            day_of_week: rule
                .day_of_week
                .map(|day| i64::from(day.num_days_from_sunday())),
            day_of_month: rule.day_of_month.map(|day| day.as_raw()),
            end_date: rule.end_date,
            end_count: rule.end_count,
            occurrence_count: rule.occurrence_count,
            leap_day_policy: rule.leap_day_policy,
        }
    }
}
