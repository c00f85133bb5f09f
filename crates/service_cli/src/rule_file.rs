//! Rule file loading.
//!
//! Rule files hold one serialized [`RecurrenceRule`]. Files ending in
//! `.json` are read as JSON; anything else is read as TOML.

use std::path::Path;

use recur_models::recurrence::RecurrenceRule;
use tracing::debug;

use crate::{CliError, Result};

/// Reads and validates the rule stored at `path`.
pub fn load_rule(path: &Path) -> Result<RecurrenceRule> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rule = parse_rule(path, &content)?;
    debug!(path = %path.display(), %rule, "loaded rule");
    Ok(rule)
}

fn parse_rule(path: &Path, content: &str) -> Result<RecurrenceRule> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        toml::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| CliError::RuleFile {
        path: path.to_path_buf(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::rule_file;
    use recur_models::recurrence::{Frequency, MonthDay};

    #[test]
    fn test_load_json_rule() {
        let file = rule_file(
            ".json",
            r#"{"frequency": "MONTHLY", "interval": 1, "dayOfMonth": -1, "endCount": 12}"#,
        );

        let rule = load_rule(file.path()).unwrap();
        assert_eq!(rule.frequency(), Frequency::Monthly);
        assert_eq!(rule.day_of_month(), Some(MonthDay::Last));
        assert_eq!(rule.end_count(), Some(12));
    }

    #[test]
    fn test_load_toml_rule() {
        let file = rule_file(
            ".toml",
            r#"
            frequency = "WEEKLY"
            interval = 2
            dayOfWeek = 5
            endDate = "2024-12-31"
            "#,
        );

        let rule = load_rule(file.path()).unwrap();
        assert_eq!(rule.frequency(), Frequency::Weekly);
        assert_eq!(rule.interval(), 2);
        assert_eq!(rule.end_date().map(|d| d.to_string()), Some("2024-12-31".to_string()));
    }

    #[test]
    fn test_invalid_rule_is_reported_with_path() {
        let file = rule_file(".json", r#"{"frequency": "DAILY", "interval": 0}"#);

        let err = load_rule(file.path()).unwrap_err();
        assert!(matches!(err, CliError::RuleFile { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rule(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
