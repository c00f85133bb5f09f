//! Recurrence error types.

use recur_core::types::DateError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a recurrence rule.
///
/// Validation errors are raised once, when a rule is constructed; a
/// constructed rule only fails at the edge of the supported calendar range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    /// Interval must be a positive integer.
    #[error("Interval must be at least 1, got {interval}")]
    InvalidInterval {
        /// The rejected interval.
        interval: i64,
    },

    /// Day of week outside 0 (Sunday) to 6 (Saturday).
    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday), got {day}")]
    InvalidDayOfWeek {
        /// The rejected day of week.
        day: i64,
    },

    /// Day of month outside 1-31 and not the last-day sentinel -1.
    #[error("Day of month must be between 1 and 31, or -1 for the last day, got {day}")]
    InvalidDayOfMonth {
        /// The rejected day of month.
        day: i64,
    },

    /// Missing required field in builder.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Frequency name not recognised.
    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),

    /// Calendar arithmetic failed.
    #[error(transparent)]
    Date(#[from] DateError),
}
