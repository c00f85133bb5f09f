//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer.

pub mod check;
pub mod describe;
pub mod next;
pub mod range;
