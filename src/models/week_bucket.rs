//! Weekly summary buckets.
//!
//! This module contains the [`WeekBucket`] type produced by the weekly
//! aggregator, one per ISO week that has at least one record.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours and distance for one ISO week (Monday to Sunday).
///
/// `total_hours` always equals `regular_hours + overtime_15_hours +
/// overtime_20_hours`.
///
/// # Example
///
/// ```
/// use hours_engine::models::WeekBucket;
/// use chrono::NaiveDate;
///
/// // 2026-01-14 is a Wednesday
/// let bucket = WeekBucket::empty(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// assert_eq!(bucket.week_start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(bucket.week_end, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// assert_eq!(bucket.iso_week, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// Monday of the ISO week.
    pub week_start: NaiveDate,
    /// Sunday of the ISO week.
    pub week_end: NaiveDate,
    /// ISO week-numbering year.
    pub iso_year: i32,
    /// ISO week number (1 to 53).
    pub iso_week: u32,
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Overtime hours in the first (1.5x) tier.
    pub overtime_15_hours: Decimal,
    /// Overtime hours in the second (2.0x) tier.
    pub overtime_20_hours: Decimal,
    /// All hours worked in the week.
    pub total_hours: Decimal,
    /// Sum of out and return distances.
    pub total_distance: Decimal,
    /// Number of records in the week.
    pub record_count: u32,
    /// Number of distinct days with at least one record.
    pub days_worked: u32,
}

impl WeekBucket {
    /// An all-zero bucket for the ISO week containing `date`.
    pub fn empty(date: NaiveDate) -> Self {
        let week_start = week_start_of(date);
        let iso = date.iso_week();
        Self {
            week_start,
            week_end: week_start + Days::new(6),
            iso_year: iso.year(),
            iso_week: iso.week(),
            regular_hours: Decimal::ZERO,
            overtime_15_hours: Decimal::ZERO,
            overtime_20_hours: Decimal::ZERO,
            total_hours: Decimal::ZERO,
            total_distance: Decimal::ZERO,
            record_count: 0,
            days_worked: 0,
        }
    }

    /// Total overtime across both tiers.
    pub fn overtime_hours(&self) -> Decimal {
        self.overtime_15_hours + self.overtime_20_hours
    }
}

/// Returns the Monday that starts the ISO week containing `date`.
///
/// ```
/// use hours_engine::models::week_start_of;
/// use chrono::NaiveDate;
///
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
/// assert_eq!(week_start_of(sunday), NaiveDate::from_ymd_opt(2025, 12, 29).unwrap());
/// ```
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    let iso = date.iso_week();
    NaiveDate::from_isoywd_opt(iso.year(), iso.week(), Weekday::Mon).unwrap_or(date)
}
