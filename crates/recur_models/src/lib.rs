//! # Recur Models (Business Logic)
//!
//! Recurrence rules for scheduled transactions.
//!
//! This crate provides:
//! - Recurrence rule definition with validated construction
//! - Next-occurrence calculation with month-end clamping
//! - Window enumeration of occurrences, bounded by a limit
//! - Completion evaluation against end count and end date
//! - Short human-readable labels
//!
//! ## Design Principles
//!
//! - **Immutable rule values**: every calculation is a pure function of a rule and a date
//! - **Validate once**: rules are checked at construction and trusted afterwards
//! - **Builder pattern** for ergonomic API with sensible defaults

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod recurrence;
