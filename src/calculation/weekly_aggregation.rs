//! Weekly aggregation.
//!
//! Groups [`DailyTotal`]s into ISO weeks, runs the daily overtime split on
//! every day, tiers each week's accumulated overtime, and returns the weeks
//! newest first. Weeks without records are simply absent.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::OvertimePolicy;
use crate::models::{DailyAggregation, DailyTotal, JobRecord, WeekBucket, WeeklySummary, week_start_of};

use super::daily_aggregation::aggregate_daily;
use super::daily_overtime::split_daily_hours;
use super::weekly_overtime::tier_weekly_overtime;

/// Aggregates daily totals into week buckets, newest week first.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::{aggregate_daily, aggregate_weekly};
/// use hours_engine::config::OvertimePolicy;
/// use hours_engine::models::JobRecord;
/// use rust_decimal::Decimal;
///
/// let policy = OvertimePolicy::default();
/// let records = vec![
///     JobRecord::new("2026-01-12", Some("07:00"), Some("17:00")), // Monday, 10h
///     JobRecord::new("2026-01-13", Some("07:00"), Some("16:00")), // Tuesday, 9h
/// ];
///
/// let daily = aggregate_daily(&records, &policy);
/// let weeks = aggregate_weekly(daily.totals(), &policy);
///
/// assert_eq!(weeks.len(), 1);
/// assert_eq!(weeks[0].regular_hours, Decimal::from(16));
/// assert_eq!(weeks[0].overtime_15_hours, Decimal::from(1));
/// assert_eq!(weeks[0].overtime_20_hours, Decimal::from(2));
/// assert_eq!(weeks[0].total_hours, Decimal::from(19));
/// ```
pub fn aggregate_weekly<'a, I>(days: I, policy: &OvertimePolicy) -> Vec<WeekBucket>
where
    I: IntoIterator<Item = &'a DailyTotal>,
{
    let mut weeks: BTreeMap<NaiveDate, (WeekBucket, Decimal)> = BTreeMap::new();

    for day in days {
        let week_start = week_start_of(day.date);
        let (bucket, overtime) = weeks
            .entry(week_start)
            .or_insert_with(|| (WeekBucket::empty(day.date), Decimal::ZERO));

        let split = split_daily_hours(day.total_hours, policy.daily_threshold_hours);

        bucket.regular_hours += split.regular;
        *overtime += split.overtime;
        bucket.total_hours += day.total_hours.max(Decimal::ZERO);
        match bucket.total_distance.checked_add(day.total_distance) {
            Some(sum) => bucket.total_distance = sum,
            None => warn!(
                date = %day.date,
                "Daily distance overflows the weekly total, left out"
            ),
        }
        bucket.record_count += day.record_count;
        bucket.days_worked += 1;
    }

    let buckets: Vec<WeekBucket> = weeks
        .into_values()
        .rev()
        .map(|(mut bucket, overtime)| {
            let tiers = tier_weekly_overtime(overtime, policy.first_tier_threshold_hours);
            bucket.overtime_15_hours = tiers.tier_1;
            bucket.overtime_20_hours = tiers.tier_2;
            bucket
        })
        .collect();

    debug!(weeks = buckets.len(), "Weekly aggregation complete");

    buckets
}

/// Runs the full pipeline: records to daily totals to week buckets.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::{format_hours, summarize_weeks};
/// use hours_engine::config::OvertimePolicy;
/// use hours_engine::models::JobRecord;
///
/// let records = vec![JobRecord::new("2026-01-12", Some("07:00"), Some("16:00"))];
/// let summary = summarize_weeks(&records, &OvertimePolicy::default());
/// let week = summary.latest().unwrap();
///
/// assert_eq!(format_hours(week.overtime_15_hours), "1h00");
/// assert_eq!(format_hours(week.overtime_20_hours), "0h00");
/// assert_eq!(format_hours(week.total_hours), "9h00");
/// ```
pub fn summarize_weeks(records: &[JobRecord], policy: &OvertimePolicy) -> WeeklySummary {
    let DailyAggregation { days, rejected } = aggregate_daily(records, policy);
    let weeks = aggregate_weekly(days.values(), policy);
    WeeklySummary { weeks, rejected }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HourRounding;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn job(date: &str, depart: &str, end: &str) -> JobRecord {
        JobRecord::new(date, Some(depart), Some(end))
    }

    fn assert_bucket_balanced(bucket: &WeekBucket) {
        assert_eq!(
            bucket.total_hours,
            bucket.regular_hours + bucket.overtime_15_hours + bucket.overtime_20_hours,
            "bucket for {} does not balance",
            bucket.week_start
        );
    }

    #[test]
    fn test_single_nine_hour_monday() {
        let summary = summarize_weeks(&[job("2026-01-12", "07:00", "16:00")], &OvertimePolicy::default());

        assert_eq!(summary.weeks.len(), 1);
        let week = &summary.weeks[0];
        assert_eq!(week.week_start, date(2026, 1, 12));
        assert_eq!(week.week_end, date(2026, 1, 18));
        assert_eq!(week.regular_hours, dec("8"));
        assert_eq!(week.overtime_15_hours, dec("1"));
        assert_eq!(week.overtime_20_hours, Decimal::ZERO);
        assert_eq!(week.total_hours, dec("9"));
        assert_bucket_balanced(week);
    }

    #[test]
    fn test_accumulated_overtime_is_tiered_across_days() {
        let records = vec![
            job("2026-01-12", "07:00", "17:00"),
            job("2026-01-13", "07:00", "16:00"),
        ];
        let summary = summarize_weeks(&records, &OvertimePolicy::default());
        let week = &summary.weeks[0];

        assert_eq!(week.overtime_15_hours, dec("1"));
        assert_eq!(week.overtime_20_hours, dec("2"));
        assert_eq!(week.days_worked, 2);
        assert_bucket_balanced(week);
    }

    #[test]
    fn test_overtime_is_daily_not_averaged() {
        // 10h + 6h: 2h of daily overtime even though the average is 8h
        let records = vec![
            job("2026-01-12", "07:00", "17:00"),
            job("2026-01-13", "07:00", "13:00"),
        ];
        let week = summarize_weeks(&records, &OvertimePolicy::default()).weeks.remove(0);

        assert_eq!(week.regular_hours, dec("14"));
        assert_eq!(week.overtime_hours(), dec("2"));
    }

    #[test]
    fn test_multiple_records_same_day_sum_before_split() {
        // 5h + 5h on the same day is 10h, so 2h of overtime
        let records = vec![
            job("2026-01-12", "06:00", "11:00"),
            job("2026-01-12", "12:00", "17:00"),
        ];
        let week = summarize_weeks(&records, &OvertimePolicy::default()).weeks.remove(0);

        assert_eq!(week.regular_hours, dec("8"));
        assert_eq!(week.overtime_15_hours, dec("1"));
        assert_eq!(week.overtime_20_hours, dec("1"));
        assert_eq!(week.record_count, 2);
        assert_eq!(week.days_worked, 1);
    }

    #[test]
    fn test_missing_end_counts_distance_but_not_hours() {
        let records = vec![
            job("2026-01-12", "07:00", "16:00"),
            JobRecord::new("2026-01-14", Some("08:00"), None)
                .with_distances(Some(dec("42")), Some(dec("40"))),
        ];
        let week = summarize_weeks(&records, &OvertimePolicy::default()).weeks.remove(0);

        assert_eq!(week.total_hours, dec("9"));
        assert_eq!(week.overtime_hours(), dec("1"));
        assert_eq!(week.total_distance, dec("82"));
        assert_eq!(week.record_count, 2);
    }

    #[test]
    fn test_weeks_sorted_newest_first_and_sparse() {
        let records = vec![
            job("2026-01-05", "08:00", "16:00"),
            job("2026-01-26", "08:00", "16:00"),
            job("2026-01-14", "08:00", "16:00"),
        ];
        let summary = summarize_weeks(&records, &OvertimePolicy::default());
        let starts: Vec<NaiveDate> = summary.weeks.iter().map(|w| w.week_start).collect();

        // The week of 2026-01-19 has no records and is not zero-filled
        assert_eq!(starts, vec![date(2026, 1, 26), date(2026, 1, 12), date(2026, 1, 5)]);
    }

    #[test]
    fn test_sunday_belongs_to_the_preceding_monday() {
        let records = vec![
            job("2026-01-12", "07:00", "17:00"),
            job("2026-01-18", "07:00", "17:00"),
            job("2026-01-19", "07:00", "17:00"),
        ];
        let summary = summarize_weeks(&records, &OvertimePolicy::default());

        assert_eq!(summary.weeks.len(), 2);
        let earlier = summary.week_starting(date(2026, 1, 12)).unwrap();
        assert_eq!(earlier.overtime_hours(), dec("4"));
        let later = summary.week_starting(date(2026, 1, 19)).unwrap();
        assert_eq!(later.overtime_hours(), dec("2"));
    }

    #[test]
    fn test_week_with_only_zero_hour_records() {
        let records = vec![
            JobRecord::new("2026-01-12", None, None).with_distances(Some(dec("10")), None),
        ];
        let week = summarize_weeks(&records, &OvertimePolicy::default()).weeks.remove(0);

        assert_eq!(week.total_hours, Decimal::ZERO);
        assert_eq!(week.regular_hours, Decimal::ZERO);
        assert_eq!(week.overtime_15_hours, Decimal::ZERO);
        assert_eq!(week.overtime_20_hours, Decimal::ZERO);
        assert_eq!(week.total_distance, dec("10"));
    }

    #[test]
    fn test_custom_policy_thresholds() {
        let policy = OvertimePolicy {
            daily_threshold_hours: dec("7.5"),
            first_tier_threshold_hours: dec("2"),
            ..OvertimePolicy::default()
        };
        let records = vec![
            job("2026-01-12", "07:00", "17:00"),
            job("2026-01-13", "07:00", "17:00"),
        ];
        let week = summarize_weeks(&records, &policy).weeks.remove(0);

        assert_eq!(week.regular_hours, dec("15"));
        assert_eq!(week.overtime_15_hours, dec("2"));
        assert_eq!(week.overtime_20_hours, dec("3"));
    }

    #[test]
    fn test_rounding_applies_before_daily_cap() {
        // 8h07 rounds to 8h00 per record, so no overtime at all
        let policy = OvertimePolicy {
            rounding: HourRounding::QuarterHour,
            ..OvertimePolicy::default()
        };
        let week = summarize_weeks(&[job("2026-01-12", "07:00", "15:07")], &policy)
            .weeks
            .remove(0);

        assert_eq!(week.total_hours, dec("8"));
        assert_eq!(week.overtime_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_rejected_records_carried_into_summary() {
        let records = vec![job("not-a-date", "07:00", "16:00"), job("2026-01-12", "07:00", "16:00")];
        let summary = summarize_weeks(&records, &OvertimePolicy::default());

        assert_eq!(summary.weeks.len(), 1);
        assert_eq!(summary.rejected.len(), 1);
        assert_eq!(summary.weeks[0].total_hours, dec("9"));
    }

    #[test]
    fn test_empty_input_yields_no_weeks() {
        let summary = summarize_weeks(&[], &OvertimePolicy::default());
        assert!(summary.weeks.is_empty());
        assert!(summary.latest().is_none());
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let records = vec![
            job("2026-01-12", "07:00", "17:13"),
            job("2026-01-20", "06:41", "18:02"),
            job("2026-01-21", "06:00", "07:00"),
        ];
        let policy = OvertimePolicy::default();
        assert_eq!(summarize_weeks(&records, &policy), summarize_weeks(&records, &policy));
    }

    fn arb_record() -> impl Strategy<Value = JobRecord> {
        (0i64..120, 0u32..(12 * 60), 0u32..(12 * 60), 0u32..200).prop_map(
            |(day_offset, depart, length, km)| {
                let day = date(2025, 11, 3) + chrono::Days::new(day_offset as u64);
                let end = depart + length;
                JobRecord::new(
                    &day.format("%Y-%m-%d").to_string(),
                    Some(&format!("{:02}:{:02}", depart / 60, depart % 60)),
                    Some(&format!("{:02}:{:02}", end / 60, end % 60)),
                )
                .with_distances(Some(Decimal::from(km)), None)
            },
        )
    }

    proptest! {
        #[test]
        fn prop_weeks_balance_and_are_strictly_descending(
            records in prop::collection::vec(arb_record(), 0..40)
        ) {
            let policy = OvertimePolicy::default();
            let summary = summarize_weeks(&records, &policy);

            for bucket in &summary.weeks {
                let parts = bucket.regular_hours + bucket.overtime_15_hours + bucket.overtime_20_hours;
                prop_assert!((bucket.total_hours - parts).abs() < Decimal::new(1, 20));
                prop_assert!(bucket.overtime_15_hours <= policy.first_tier_threshold_hours);
            }
            for pair in summary.weeks.windows(2) {
                prop_assert!(pair[0].week_start > pair[1].week_start);
            }
            prop_assert_eq!(summary.clone(), summarize_weeks(&records, &policy));
        }
    }

    #[test]
    fn test_oversized_distances_do_not_abort_summary() {
        let records = vec![
            job("2026-01-12", "07:00", "16:00")
                .with_distances(Some(Decimal::MAX), Some(Decimal::MAX)),
            JobRecord::new("2026-01-13", None, None).with_distances(Some(Decimal::MAX), None),
            JobRecord::new("2026-01-14", None, None).with_distances(Some(dec("5")), None),
        ];
        let summary = summarize_weeks(&records, &OvertimePolicy::default());
        let week = &summary.weeks[0];

        assert_eq!(week.total_hours, dec("9"));
        assert_eq!(week.record_count, 3);
        // Tuesday fills the week to the maximum, Wednesday no longer fits
        assert_eq!(week.total_distance, Decimal::MAX);
    }
}
