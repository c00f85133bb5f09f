//! `recur check`: report whether a rule has ended.

use std::io::Write;
use std::path::Path;

use recur_core::types::Date;

use crate::rule_file::load_rule;
use crate::Result;

/// Prints `completed` or `active` for the rule at `rule_path`.
///
/// Uses the rule's stored occurrence count, evaluated at `as_of` or today.
pub fn run(rule_path: &Path, as_of: Option<&str>, out: &mut impl Write) -> Result<()> {
    let rule = load_rule(rule_path)?;
    let as_of = match as_of {
        Some(date) => Date::parse(date)?,
        None => Date::today(),
    };

    let status = if rule.is_completed_at(as_of) {
        "completed"
    } else {
        "active"
    };
    writeln!(out, "{}", status)?;
    Ok(())
}
