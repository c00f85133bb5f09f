//! Core calendar types.
//!
//! This module provides:
//! - `time`: The immutable `Date` type and month-length arithmetic
//! - `error`: Structured error types for date construction and arithmetic
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`days_in_month`], [`is_leap_year`], [`weekday_from_index`] from `time`
//! - [`DateError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::DateError;
pub use time::{days_in_month, is_leap_year, weekday_from_index, Date};
