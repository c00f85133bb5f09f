//! Human-readable rule labels.

use std::fmt;

use chrono::Weekday;

use super::frequency::Frequency;
use super::rule::{MonthDay, RecurrenceRule};

/// Returns the English name of a weekday.
///
/// # Examples
///
/// ```
/// use recur_models::recurrence::weekday_name;
/// use chrono::Weekday;
///
/// assert_eq!(weekday_name(Weekday::Sun), "Sunday");
/// ```
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Renders `rule` as a short label.
///
/// Weekly rules with an interval above 1 render as `"every N weeks"`, in
/// lower case. Monthly and quarterly labels do not mention the interval.
///
/// # Examples
///
/// ```
/// use recur_models::recurrence::{describe, Frequency, RecurrenceRule};
///
/// let rule = RecurrenceRule::new(Frequency::Weekly, 3).unwrap();
/// assert_eq!(describe(&rule), "every 3 weeks");
///
/// let rule = RecurrenceRule::new(Frequency::Yearly, 2).unwrap();
/// assert_eq!(describe(&rule), "Every 2 years");
/// ```
pub fn describe(rule: &RecurrenceRule) -> String {
    let interval = rule.interval();
    match rule.frequency() {
        Frequency::Daily if interval == 1 => "Daily".to_string(),
        Frequency::Daily => format!("Every {} days", interval),
        Frequency::Weekly if interval > 1 => format!("every {} weeks", interval),
        Frequency::Weekly => match rule.day_of_week() {
            Some(weekday) => format!("Weekly on {}", weekday_name(weekday)),
            None => "Weekly".to_string(),
        },
        Frequency::Biweekly => "Every 2 weeks".to_string(),
        Frequency::Monthly => match rule.day_of_month() {
            Some(MonthDay::Day(day)) => format!("Monthly on day {}", day),
            Some(MonthDay::Last) => "Monthly on last day".to_string(),
            None => "Monthly".to_string(),
        },
        Frequency::Quarterly => "Quarterly".to_string(),
        Frequency::Yearly if interval == 1 => "Yearly".to_string(),
        Frequency::Yearly => format!("Every {} years", interval),
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}
