//! `recur next`: compute upcoming occurrences from a date.

use std::io::Write;
use std::path::Path;

use recur_core::types::Date;
use recur_models::recurrence::next_occurrence;
use tracing::info;

use crate::rule_file::load_rule;
use crate::Result;

/// Prints up to `count` successive occurrences after `from`.
///
/// Each produced occurrence increments the rule's occurrence count before
/// the next step, as a scheduler would. Prints `finished` and stops once
/// the rule has no further occurrence.
pub fn run(rule_path: &Path, from: &str, count: u32, out: &mut impl Write) -> Result<()> {
    let mut rule = load_rule(rule_path)?;
    let mut current = Date::parse(from)?;
    info!(%rule, %current, count, "computing next occurrences");

    for _ in 0..count {
        match next_occurrence(&rule, current)? {
            Some(next) => {
                writeln!(out, "{}", next)?;
                current = next;
                rule = rule.with_occurrence_count(rule.occurrence_count().saturating_add(1));
            }
            None => {
                writeln!(out, "finished")?;
                break;
            }
        }
    }

    Ok(())
}
