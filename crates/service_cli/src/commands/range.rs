//! `recur range`: list occurrences inside a date window.

use std::io::Write;
use std::path::Path;

use recur_core::types::Date;
use recur_models::recurrence::{describe, occurrences_in_range, weekday_name};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::rule_file::load_rule;
use crate::Result;

/// Arguments of `recur range` after configuration defaults are applied.
#[derive(Debug, Clone)]
pub struct RangeArgs<'a> {
    /// Rule file path
    pub rule_path: &'a Path,
    /// First occurrence of the rule (YYYY-MM-DD)
    pub anchor: &'a str,
    /// Window start, inclusive (YYYY-MM-DD)
    pub start: &'a str,
    /// Window end, inclusive (YYYY-MM-DD)
    pub end: &'a str,
    /// Maximum number of dates listed
    pub limit: Option<usize>,
    /// Output format
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct RangeReport<'a> {
    description: String,
    anchor: Date,
    start: Date,
    end: Date,
    count: usize,
    dates: &'a [Date],
}

/// Prints the occurrences of a rule inside `[start, end]`.
pub fn run(args: &RangeArgs<'_>, out: &mut impl Write) -> Result<()> {
    let rule = load_rule(args.rule_path)?;
    let anchor = Date::parse(args.anchor)?;
    let start = Date::parse(args.start)?;
    let end = Date::parse(args.end)?;

    let dates = occurrences_in_range(&rule, anchor, start, end, args.limit);
    info!(%rule, %start, %end, found = dates.len(), "enumerated range");

    match args.format {
        OutputFormat::Table => {
            writeln!(out, "{:<6} {:<12} {:<10}", "#", "Date", "Weekday")?;
            writeln!(out, "{}", "-".repeat(30))?;
            for (index, date) in dates.iter().enumerate() {
                writeln!(
                    out,
                    "{:<6} {:<12} {:<10}",
                    index + 1,
                    date.to_string(),
                    weekday_name(date.weekday())
                )?;
            }
            writeln!(out, "{}", "-".repeat(30))?;
            writeln!(out, "{} occurrence(s), {}", dates.len(), describe(&rule))?;
        }
        OutputFormat::Json => {
            let report = RangeReport {
                description: describe(&rule),
                anchor,
                start,
                end,
                count: dates.len(),
                dates: &dates,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, rule_file};

    fn args<'a>(path: &'a Path, limit: Option<usize>, format: OutputFormat) -> RangeArgs<'a> {
        RangeArgs {
            rule_path: path,
            anchor: "2024-01-31",
            start: "2024-01-01",
            end: "2024-06-30",
            limit,
            format,
        }
    }

    #[test]
    fn test_json_output() {
        let file = rule_file(".json", r#"{"frequency": "MONTHLY", "dayOfMonth": -1}"#);
        let mut buf = Vec::new();

        run(&args(file.path(), Some(3), OutputFormat::Json), &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        assert_eq!(value["description"], "Monthly on last day");
        assert_eq!(value["count"], 3);
        assert_eq!(
            value["dates"],
            serde_json::json!(["2024-01-31", "2024-02-29", "2024-03-31"])
        );
    }

    #[test]
    fn test_table_output() {
        let file = rule_file(".toml", "frequency = \"MONTHLY\"\n");
        let mut buf = Vec::new();

        run(&args(file.path(), None, OutputFormat::Table), &mut buf).unwrap();

        let text = output(buf);
        assert!(text.contains("2024-02-29"));
        assert!(text.contains("2024-03-29"));
        assert!(text.contains("2024-06-29"));
        assert!(text.ends_with("6 occurrence(s), Monthly\n"));
    }

    #[test]
    fn test_anchor_after_window_is_empty() {
        let file = rule_file(".json", r#"{"frequency": "DAILY"}"#);
        let mut buf = Vec::new();
        let range = RangeArgs {
            anchor: "2025-01-01",
            ..args(file.path(), None, OutputFormat::Json)
        };

        run(&range, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output(buf)).unwrap();
        assert_eq!(value["count"], 0);
        assert_eq!(value["dates"], serde_json::json!([]));
    }
}
