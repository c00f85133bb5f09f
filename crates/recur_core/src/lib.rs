//! # recur_core: Calendar Foundation for the Recurrence Engine
//!
//! ## Foundation Layer Role
//!
//! recur_core is the bottom layer of the workspace, providing:
//! - Immutable calendar date type: `Date` (`types::time`)
//! - Month-length helpers: `days_in_month`, `is_leap_year` (`types::time`)
//! - Error types: `DateError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other recur_* crates, with minimal external dependencies:
//! - chrono: Calendar storage and weekday arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use recur_core::types::{days_in_month, Date};
//!
//! let end_of_january = Date::from_ymd(2024, 1, 31).unwrap();
//! let next = end_of_january.add_months_clamped(1).unwrap();
//! assert_eq!(next, Date::from_ymd(2024, 2, 29).unwrap());
//! assert_eq!(days_in_month(2025, 2), 28);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable ISO 8601 serialisation for `Date`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
