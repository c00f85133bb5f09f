//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing and calendar arithmetic

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction, parsing and
/// arithmetic with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
/// - `Overflow`: Arithmetic left the representable calendar range
///
/// # Examples
/// ```
/// use recur_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Date arithmetic overflowed the supported calendar range.
    #[error("Date arithmetic overflow: {reason}")]
    Overflow {
        /// Description of the operation that overflowed.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = DateError::InvalidDate {
            year: 2025,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "Invalid date: 2025-2-29");
    }

    #[test]
    fn test_parse_error_display() {
        let err = DateError::ParseError("input contains invalid characters".to_string());
        assert_eq!(
            err.to_string(),
            "Date parse error: input contains invalid characters"
        );
    }

    #[test]
    fn test_overflow_display() {
        let err = DateError::Overflow {
            reason: "adding 12 months".to_string(),
        };
        assert!(err.to_string().contains("adding 12 months"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&DateError::ParseError("x".to_string()));
    }
}
