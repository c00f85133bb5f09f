//! `recur describe`: print a rule's label.

use std::io::Write;
use std::path::Path;

use recur_models::recurrence::describe;

use crate::rule_file::load_rule;
use crate::Result;

/// Prints the human-readable label of the rule at `rule_path`.
pub fn run(rule_path: &Path, out: &mut impl Write) -> Result<()> {
    let rule = load_rule(rule_path)?;
    writeln!(out, "{}", describe(&rule))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, rule_file};

    #[test]
    fn test_describe_weekly() {
        let file = rule_file(".json", r#"{"frequency": "WEEKLY", "dayOfWeek": 1}"#);
        let mut buf = Vec::new();

        run(file.path(), &mut buf).unwrap();
        assert_eq!(output(buf), "Weekly on Monday\n");
    }

    #[test]
    fn test_describe_last_day() {
        let file = rule_file(".toml", "frequency = \"MONTHLY\"\ndayOfMonth = -1\n");
        let mut buf = Vec::new();

        run(file.path(), &mut buf).unwrap();
        assert_eq!(output(buf), "Monthly on last day\n");
    }
}
