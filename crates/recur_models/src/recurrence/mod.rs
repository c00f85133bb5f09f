//! Recurrence rule engine for scheduled transactions.
//!
//! This module provides:
//! - [`RecurrenceRule`]: An immutable, validated recurrence specification
//! - [`RecurrenceRuleBuilder`]: Builder pattern for constructing rules
//! - [`Frequency`]: Recurrence family (Daily, Weekly, Monthly, etc.)
//! - [`next_occurrence`]: The next occurrence strictly after a date
//! - [`occurrences_in_range`] / [`OccurrenceIter`]: Occurrences inside a window
//! - [`is_completed`] / [`is_completed_at`]: End count and end date evaluation
//! - [`describe`]: Short human-readable label
//!
//! # Examples
//!
//! ```
//! use recur_models::recurrence::{occurrences_in_range, Frequency, RecurrenceRule};
//! use recur_core::types::Date;
//!
//! // Rent on the last day of every month, five payments in total
//! let rule = RecurrenceRule::builder()
//!     .frequency(Frequency::Monthly)
//!     .day_of_month(-1)
//!     .end_count(5)
//!     .build()
//!     .unwrap();
//!
//! let start = Date::from_ymd(2024, 1, 31).unwrap();
//! let next = rule.next_after(start).unwrap();
//! assert_eq!(next, Some(Date::from_ymd(2024, 2, 29).unwrap()));
//!
//! let dates = occurrences_in_range(
//!     &rule,
//!     start,
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2024, 12, 31).unwrap(),
//!     None,
//! );
//! assert_eq!(dates.len(), 5);
//! assert_eq!(rule.to_string(), "Monthly on last day");
//! ```

mod completion;
mod describe;
mod error;
mod frequency;
mod next;
mod range;
mod rule;

pub use completion::{is_completed, is_completed_at};
pub use describe::{describe, weekday_name};
pub use error::RecurrenceError;
pub use frequency::Frequency;
pub use next::next_occurrence;
pub use range::{occurrences_in_range, OccurrenceIter};
pub use rule::{LeapDayPolicy, MonthDay, RecurrenceRule, RecurrenceRuleBuilder};
