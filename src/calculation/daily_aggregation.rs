//! Daily aggregation of job records.
//!
//! This module folds a list of [`JobRecord`]s into one [`DailyTotal`] per
//! calendar day. A bad time window degrades that record's duration to zero;
//! a bad date excludes the record and reports it back to the caller. Neither
//! ever aborts the pass.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::OvertimePolicy;
use crate::models::{DailyAggregation, DailyTotal, DateRange, JobRecord, RejectedRecord};

use super::time_parser::{instant_on, parse_date};

/// Returns the worked minutes for a record on the given day, after rounding.
///
/// The window runs from `depart_time` to `end_time`. A missing or
/// unparseable endpoint, or an end at or before the departure, yields zero.
pub fn record_duration_minutes(record: &JobRecord, date: NaiveDate, policy: &OvertimePolicy) -> i64 {
    let depart = instant_on(date, record.depart_time.as_deref());
    let end = instant_on(date, record.end_time.as_deref());

    let minutes = match (depart, end) {
        (Some(depart), Some(end)) => (end - depart).num_minutes(),
        _ => 0,
    };

    if minutes <= 0 {
        return 0;
    }

    policy.rounding.apply_minutes(minutes)
}

/// Returns the worked hours for a record on the given day.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::record_duration_hours;
/// use hours_engine::config::{HourRounding, OvertimePolicy};
/// use hours_engine::models::JobRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let record = JobRecord::new("2026-01-12", Some("07:00"), Some("09:50"));
///
/// let exact = OvertimePolicy::default();
/// assert_eq!(record_duration_hours(&record, date, &exact).round_dp(4), Decimal::new(28333, 4));
///
/// let quarter = OvertimePolicy { rounding: HourRounding::QuarterHour, ..OvertimePolicy::default() };
/// assert_eq!(record_duration_hours(&record, date, &quarter), Decimal::new(275, 2));
/// ```
pub fn record_duration_hours(record: &JobRecord, date: NaiveDate, policy: &OvertimePolicy) -> Decimal {
    minutes_to_hours(record_duration_minutes(record, date, policy))
}

/// Converts whole minutes to decimal hours.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Reduces job records into one total per calendar day.
///
/// Records whose date cannot be parsed are left out of every total and
/// returned in [`DailyAggregation::rejected`].
///
/// # Example
///
/// ```
/// use hours_engine::calculation::aggregate_daily;
/// use hours_engine::config::OvertimePolicy;
/// use hours_engine::models::JobRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     JobRecord::new("2026-01-12", Some("07:00"), Some("12:00")),
///     JobRecord::new("12/01/2026", Some("13:00"), Some("17:30")),
///     JobRecord::new("2026-01-12", Some("08:00"), None)
///         .with_distances(Some(Decimal::from(20)), Some(Decimal::from(20))),
///     JobRecord::new("someday", Some("08:00"), Some("09:00")),
/// ];
///
/// let result = aggregate_daily(&records, &OvertimePolicy::default());
/// let monday = result.get(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()).unwrap();
///
/// assert_eq!(monday.total_hours, Decimal::new(95, 1));
/// assert_eq!(monday.total_distance, Decimal::from(40));
/// assert_eq!(monday.record_count, 3);
/// assert_eq!(result.rejected.len(), 1);
/// ```
pub fn aggregate_daily(records: &[JobRecord], policy: &OvertimePolicy) -> DailyAggregation {
    // Minutes stay whole until the day is complete, so hours are divided once per day.
    let mut accumulated: BTreeMap<NaiveDate, (i64, Decimal, u32)> = BTreeMap::new();
    let mut rejected = Vec::new();

    for record in records {
        let Some(date) = parse_date(&record.date) else {
            warn!(
                record_id = record.label(),
                date = %record.date,
                "Excluding job record with unparseable date"
            );
            rejected.push(RejectedRecord {
                id: record.id.clone(),
                date: record.date.clone(),
                reason: if record.date.trim().is_empty() {
                    "missing date".to_string()
                } else {
                    format!("unparseable date '{}'", record.date)
                },
            });
            continue;
        };

        if record.has_negative_distance() {
            warn!(
                record_id = record.label(),
                %date,
                "Negative distance on job record counted as zero"
            );
        }

        let minutes = record_duration_minutes(record, date, policy);
        if minutes == 0 && (record.depart_time.is_some() || record.end_time.is_some()) {
            debug!(
                record_id = record.label(),
                %date,
                depart = ?record.depart_time,
                end = ?record.end_time,
                "Job record contributes no duration"
            );
        }

        let (day_minutes, distance, count) =
            accumulated.entry(date).or_insert((0, Decimal::ZERO, 0));
        *day_minutes += minutes;
        *count += 1;
        match record.total_distance().and_then(|d| distance.checked_add(d)) {
            Some(sum) => *distance = sum,
            None => warn!(
                record_id = record.label(),
                %date,
                "Distance on job record overflows the daily total, counted as zero"
            ),
        }
    }

    let days: BTreeMap<NaiveDate, DailyTotal> = accumulated
        .into_iter()
        .map(|(date, (minutes, total_distance, record_count))| {
            let total = DailyTotal {
                date,
                total_hours: minutes_to_hours(minutes),
                total_distance,
                record_count,
            };
            (date, total)
        })
        .collect();

    debug!(
        records = records.len(),
        days = days.len(),
        rejected = rejected.len(),
        "Daily aggregation complete"
    );

    DailyAggregation { days, rejected }
}

/// Drops the records whose date falls outside `range`.
///
/// Records with an unparseable date are kept so that the aggregation pass
/// still reports them as rejected.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::filter_by_range;
/// use hours_engine::models::{DateRange, JobRecord};
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// };
/// let records = vec![
///     JobRecord::new("2026-01-11", None, None),
///     JobRecord::new("2026-01-14", None, None),
///     JobRecord::new("bad", None, None),
/// ];
///
/// let kept = filter_by_range(&records, &range);
/// assert_eq!(kept.len(), 2);
/// assert_eq!(kept[0].date, "2026-01-14");
/// assert_eq!(kept[1].date, "bad");
/// ```
pub fn filter_by_range(records: &[JobRecord], range: &DateRange) -> Vec<JobRecord> {
    records
        .iter()
        .filter(|r| parse_date(&r.date).is_none_or(|d| range.contains_date(d)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HourRounding;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn quarter_hour_policy() -> OvertimePolicy {
        OvertimePolicy {
            rounding: HourRounding::QuarterHour,
            ..OvertimePolicy::default()
        }
    }

    #[test]
    fn test_nine_hour_record() {
        let record = JobRecord::new("2026-01-12", Some("07:00"), Some("16:00"));
        let hours = record_duration_hours(&record, date(2026, 1, 12), &OvertimePolicy::default());
        assert_eq!(hours, dec("9"));
    }

    #[test]
    fn test_seconds_are_ignored() {
        let record = JobRecord::new("2026-01-12", Some("07:00:59"), Some("07:45:01"));
        let minutes = record_duration_minutes(&record, date(2026, 1, 12), &OvertimePolicy::default());
        assert_eq!(minutes, 45);
    }

    #[test]
    fn test_missing_end_contributes_zero() {
        let record = JobRecord::new("2026-01-12", Some("07:00"), None);
        let hours = record_duration_hours(&record, date(2026, 1, 12), &OvertimePolicy::default());
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_missing_depart_contributes_zero() {
        let record = JobRecord::new("2026-01-12", None, Some("16:00"));
        let hours = record_duration_hours(&record, date(2026, 1, 12), &OvertimePolicy::default());
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_inverted_window_contributes_zero() {
        let record = JobRecord::new("2026-01-12", Some("16:00"), Some("07:00"));
        let hours = record_duration_hours(&record, date(2026, 1, 12), &OvertimePolicy::default());
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_zero_length_window_contributes_zero() {
        let record = JobRecord::new("2026-01-12", Some("09:00"), Some("09:00"));
        let hours = record_duration_hours(&record, date(2026, 1, 12), &OvertimePolicy::default());
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_garbage_time_contributes_zero() {
        let record = JobRecord::new("2026-01-12", Some("soon"), Some("16:00"));
        let hours = record_duration_hours(&record, date(2026, 1, 12), &OvertimePolicy::default());
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_quarter_hour_rounding_is_per_record() {
        // Two 7-minute jobs each round down to zero; summing first would give 15
        let records = vec![
            JobRecord::new("2026-01-12", Some("08:00"), Some("08:07")),
            JobRecord::new("2026-01-12", Some("09:00"), Some("09:07")),
        ];
        let result = aggregate_daily(&records, &quarter_hour_policy());
        assert_eq!(result.get(date(2026, 1, 12)).unwrap().total_hours, Decimal::ZERO);
    }

    #[test]
    fn test_quarter_hour_rounding_rounds_up_past_midpoint() {
        let record = JobRecord::new("2026-01-12", Some("07:00"), Some("15:53"));
        let hours = record_duration_hours(&record, date(2026, 1, 12), &quarter_hour_policy());
        assert_eq!(hours, dec("9"));
    }

    #[test]
    fn test_records_grouped_by_calendar_date_across_formats() {
        let records = vec![
            JobRecord::new("2026-01-12", Some("07:00"), Some("11:00")),
            JobRecord::new("2026-01-12T22:00:00-03:00", Some("12:00"), Some("14:00")),
            JobRecord::new("12/01/2026", Some("15:00"), Some("16:00")),
        ];
        let result = aggregate_daily(&records, &OvertimePolicy::default());

        assert_eq!(result.days.len(), 1);
        let day = result.get(date(2026, 1, 12)).unwrap();
        assert_eq!(day.total_hours, dec("7"));
        assert_eq!(day.record_count, 3);
    }

    #[test]
    fn test_distance_counted_even_without_duration() {
        let records = vec![
            JobRecord::new("2026-01-12", Some("07:00"), None)
                .with_distances(Some(dec("35.5")), Some(dec("34.5"))),
        ];
        let result = aggregate_daily(&records, &OvertimePolicy::default());
        let day = result.get(date(2026, 1, 12)).unwrap();

        assert_eq!(day.total_hours, Decimal::ZERO);
        assert_eq!(day.total_distance, dec("70"));
        assert_eq!(day.record_count, 1);
    }

    #[test]
    fn test_unparseable_date_is_rejected_not_fatal() {
        let mut bad = JobRecord::new("31/31/2026", Some("07:00"), Some("16:00"));
        bad.id = Some("job_bad".to_string());
        let records = vec![bad, JobRecord::new("2026-01-13", Some("07:00"), Some("15:00"))];

        let result = aggregate_daily(&records, &OvertimePolicy::default());

        assert_eq!(result.days.len(), 1);
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].id.as_deref(), Some("job_bad"));
        assert_eq!(result.rejected[0].date, "31/31/2026");
        assert!(result.rejected[0].reason.contains("unparseable"));
    }

    #[test]
    fn test_days_are_ordered_ascending() {
        let records = vec![
            JobRecord::new("2026-01-15", Some("07:00"), Some("08:00")),
            JobRecord::new("2026-01-12", Some("07:00"), Some("08:00")),
            JobRecord::new("2026-01-13", Some("07:00"), Some("08:00")),
        ];
        let result = aggregate_daily(&records, &OvertimePolicy::default());
        let dates: Vec<NaiveDate> = result.totals().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(2026, 1, 12), date(2026, 1, 13), date(2026, 1, 15)]);
    }

    #[test]
    fn test_empty_input_yields_empty_aggregation() {
        let result = aggregate_daily(&[], &OvertimePolicy::default());
        assert!(result.days.is_empty());
        assert!(result.rejected.is_empty());
    }

    #[test]
    fn test_filter_by_range_is_inclusive() {
        let range = DateRange {
            start_date: date(2026, 1, 12),
            end_date: date(2026, 1, 18),
        };
        let records = vec![
            JobRecord::new("2026-01-12", None, None),
            JobRecord::new("18/01/2026", None, None),
            JobRecord::new("2026-01-19", None, None),
        ];
        assert_eq!(filter_by_range(&records, &range).len(), 2);
    }

    #[test]
    fn test_missing_date_is_rejected_with_reason() {
        let records = vec![
            JobRecord::new("", Some("07:00"), Some("16:00")),
            JobRecord::new("2026-01-12", Some("07:00"), Some("16:00")),
        ];
        let result = aggregate_daily(&records, &OvertimePolicy::default());

        assert_eq!(result.days.len(), 1);
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].reason, "missing date");
    }

    #[test]
    fn test_overflowing_distance_counts_as_zero() {
        let records = vec![
            JobRecord::new("2026-01-12", Some("07:00"), Some("16:00"))
                .with_distances(Some(Decimal::MAX), Some(Decimal::MAX)),
            JobRecord::new("2026-01-12", None, None).with_distances(Some(dec("12")), None),
        ];
        let result = aggregate_daily(&records, &OvertimePolicy::default());
        let day = result.get(date(2026, 1, 12)).unwrap();

        assert_eq!(day.total_hours, dec("9"));
        assert_eq!(day.total_distance, dec("12"));
        assert_eq!(day.record_count, 2);
    }

    #[test]
    fn test_distance_overflowing_day_sum_is_left_out() {
        let records = vec![
            JobRecord::new("2026-01-12", None, None).with_distances(Some(Decimal::MAX), None),
            JobRecord::new("2026-01-12", None, None).with_distances(Some(dec("1")), None),
        ];
        let result = aggregate_daily(&records, &OvertimePolicy::default());
        assert_eq!(result.get(date(2026, 1, 12)).unwrap().total_distance, Decimal::MAX);
    }
}
