//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

use chrono::Weekday;

/// Test that time module items are accessible via absolute path.
#[test]
fn test_time_module_exports() {
    use recur_core::types::time::days_in_month;
    use recur_core::types::time::is_leap_year;
    use recur_core::types::time::weekday_from_index;
    use recur_core::types::time::Date;

    let date = Date::from_ymd(2024, 1, 31).unwrap();
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), 1);
    assert_eq!(date.day(), 31);

    assert_eq!(days_in_month(2024, 2), 29);
    assert!(is_leap_year(2024));
    assert_eq!(weekday_from_index(3), Some(Weekday::Wed));
}

/// Test that types re-exports work at module level.
#[test]
fn test_types_reexports() {
    use recur_core::types::Date;
    use recur_core::types::DateError;

    let parsed: Result<Date, DateError> = "2024-02-30".parse();
    assert!(matches!(parsed, Err(DateError::ParseError(_))));

    let constructed = Date::from_ymd(2024, 2, 30);
    assert_eq!(
        constructed,
        Err(DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30
        })
    );
}

/// Month stepping across a whole year from a month end never carries over.
#[test]
fn test_month_end_walk_over_a_year() {
    use recur_core::types::Date;

    let start = Date::from_ymd(2024, 1, 31).unwrap();
    let walked: Vec<String> = (1..=12)
        .map(|n| start.add_months_clamped(n).unwrap().to_string())
        .collect();

    assert_eq!(
        walked,
        vec![
            "2024-02-29",
            "2024-03-31",
            "2024-04-30",
            "2024-05-31",
            "2024-06-30",
            "2024-07-31",
            "2024-08-31",
            "2024-09-30",
            "2024-10-31",
            "2024-11-30",
            "2024-12-31",
            "2025-01-31",
        ]
    );
}
