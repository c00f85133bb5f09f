//! Property-based tests for the recurrence engine.
//!
//! Random rules and dates across all frequencies and anchors, checking the
//! calendar invariants every caller relies on.

use proptest::prelude::*;
use recur_core::types::{days_in_month, Date};
use recur_models::recurrence::{
    describe, next_occurrence, occurrences_in_range, Frequency, LeapDayPolicy, RecurrenceRule,
};

fn date_strategy() -> impl Strategy<Value = Date> {
    (1950i32..2150, 1u32..=12, 1u32..=31).prop_map(|(y, m, d)| {
        Date::from_ymd(y, m, d.min(days_in_month(y, m))).unwrap()
    })
}

fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop::sample::select(Frequency::ALL.to_vec())
}

fn rule_strategy() -> impl Strategy<Value = RecurrenceRule> {
    (
        frequency_strategy(),
        1i64..=24,
        prop::option::of(0i64..=6),
        prop::option::of(prop_oneof![Just(-1i64), 1i64..=31]),
        prop::bool::ANY,
    )
        .prop_map(|(frequency, interval, day_of_week, day_of_month, clamp)| {
            let mut builder = RecurrenceRule::builder()
                .frequency(frequency)
                .interval(interval);
            if let Some(day) = day_of_week {
                builder = builder.day_of_week(day);
            }
            if let Some(day) = day_of_month {
                builder = builder.day_of_month(day);
            }
            if clamp {
                builder = builder.leap_day_policy(LeapDayPolicy::Clamp);
            }
            builder.build().unwrap()
        })
}

fn month_index(date: Date) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month()) - 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_next_is_strictly_after(rule in rule_strategy(), from in date_strategy()) {
        let next = next_occurrence(&rule, from).unwrap().unwrap();
        prop_assert!(next > from);
    }

    #[test]
    fn test_next_is_deterministic(rule in rule_strategy(), from in date_strategy()) {
        prop_assert_eq!(next_occurrence(&rule, from), next_occurrence(&rule, from));
    }

    #[test]
    fn test_month_steps_land_in_target_month(
        frequency in prop::sample::select(vec![Frequency::Monthly, Frequency::Quarterly]),
        interval in 1i64..=36,
        from in date_strategy(),
    ) {
        let rule = RecurrenceRule::new(frequency, interval).unwrap();
        let next = next_occurrence(&rule, from).unwrap().unwrap();
        let months = i64::from(frequency.months_per_step()) * interval;

        prop_assert_eq!(month_index(next), month_index(from) + months);
        prop_assert_eq!(next.day(), from.day().min(next.days_in_month()));
    }

    #[test]
    fn test_yearly_non_leap_day_keeps_month_and_day(
        interval in 1i64..=10,
        from in date_strategy().prop_filter("not Feb 29", |d| !(d.month() == 2 && d.day() == 29)),
    ) {
        let rule = RecurrenceRule::new(Frequency::Yearly, interval).unwrap();
        let next = next_occurrence(&rule, from).unwrap().unwrap();

        prop_assert_eq!(i64::from(next.year()), i64::from(from.year()) + interval);
        prop_assert_eq!(next.month(), from.month());
        prop_assert_eq!(next.day(), from.day());
    }

    #[test]
    fn test_day_of_month_anchor_is_honoured(
        day in prop_oneof![Just(-1i64), 1i64..=31],
        from in date_strategy(),
    ) {
        let rule = RecurrenceRule::builder()
            .frequency(Frequency::Monthly)
            .day_of_month(day)
            .build()
            .unwrap();
        let next = next_occurrence(&rule, from).unwrap().unwrap();

        let expected = if day == -1 {
            next.days_in_month()
        } else {
            (day as u32).min(next.days_in_month())
        };
        prop_assert_eq!(next.day(), expected);
        prop_assert_eq!(month_index(next), month_index(from) + 1);
    }

    #[test]
    fn test_weekly_anchor_lands_on_weekday(
        interval in 1i64..=8,
        day in 0i64..=6,
        biweekly in prop::bool::ANY,
        from in date_strategy(),
    ) {
        let frequency = if biweekly { Frequency::Biweekly } else { Frequency::Weekly };
        let rule = RecurrenceRule::builder()
            .frequency(frequency)
            .interval(interval)
            .day_of_week(day)
            .build()
            .unwrap();
        let next = next_occurrence(&rule, from).unwrap().unwrap();
        let base = i64::from(frequency.days_per_step()) * interval;

        prop_assert_eq!(i64::from(next.day_of_week()), day);
        prop_assert!((base..base + 7).contains(&(next - from)));
    }

    #[test]
    fn test_range_is_bounded_ordered_and_limited(
        rule in rule_strategy(),
        anchor in date_strategy(),
        start_offset in -400i64..400,
        span in 0u64..1500,
        limit in prop::option::of(0usize..40),
    ) {
        let range_start = if start_offset >= 0 {
            anchor.add_days(start_offset as u64).unwrap()
        } else {
            Date::from(anchor.into_inner() - chrono::Days::new(start_offset.unsigned_abs()))
        };
        let range_end = range_start.add_days(span).unwrap();

        let dates = occurrences_in_range(&rule, anchor, range_start, range_end, limit);

        for date in &dates {
            prop_assert!(range_start <= *date && *date <= range_end);
        }
        for pair in dates.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        if let Some(limit) = limit {
            prop_assert!(dates.len() <= limit);
        }
    }

    #[test]
    fn test_range_agrees_with_chained_next(
        rule in rule_strategy(),
        anchor in date_strategy(),
        span in 0u64..800,
    ) {
        let range_end = anchor.add_days(span).unwrap();
        let dates = occurrences_in_range(&rule, anchor, anchor, range_end, None);

        let mut expected = vec![anchor];
        let mut current = anchor;
        while let Some(next) = next_occurrence(&rule, current).unwrap() {
            if next > range_end {
                break;
            }
            expected.push(next);
            current = next;
        }
        prop_assert_eq!(dates, expected);
    }

    #[test]
    fn test_end_count_caps_lifetime(
        rule in rule_strategy(),
        anchor in date_strategy(),
        end_count in 0u32..20,
    ) {
        let mut builder = RecurrenceRule::builder()
            .frequency(rule.frequency())
            .interval(i64::from(rule.interval()))
            .end_count(end_count);
        if let Some(day) = rule.day_of_week() {
            builder = builder.day_of_week(i64::from(day.num_days_from_sunday()));
        }
        let capped = builder.build().unwrap();

        prop_assert_eq!(capped.occurrences(anchor).count(), end_count as usize);
    }

    #[test]
    fn test_describe_is_total(rule in rule_strategy()) {
        let label = describe(&rule);
        prop_assert!(!label.is_empty());
        prop_assert_eq!(label, rule.to_string());
    }
}
