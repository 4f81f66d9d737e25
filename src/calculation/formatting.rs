//! Hour label formatting.
//!
//! Renders decimal hour quantities as compact `HhMM` labels (`2.75` becomes
//! `"2h45"`). Total minutes are rounded once, to the nearest whole minute,
//! so there is no drift from rounding hours and minutes separately.
//! Anything non-positive or non-finite renders as `"0h00"`.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{DailyTotal, WeekBucket};

/// The label rendered for zero, negative and non-finite quantities.
pub const ZERO_HOURS_LABEL: &str = "0h00";

fn label_from_minutes(minutes: i64) -> String {
    if minutes <= 0 {
        return ZERO_HOURS_LABEL.to_string();
    }
    format!("{}h{:02}", minutes / 60, minutes % 60)
}

/// Formats decimal hours as an `HhMM` label.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::format_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_hours(Decimal::new(275, 2)), "2h45");
/// assert_eq!(format_hours(Decimal::ZERO), "0h00");
/// assert_eq!(format_hours(Decimal::from(-1)), "0h00");
/// assert_eq!(format_hours(Decimal::from(38)), "38h00");
/// ```
pub fn format_hours(hours: Decimal) -> String {
    if hours <= Decimal::ZERO {
        return ZERO_HOURS_LABEL.to_string();
    }

    let minutes = hours
        .checked_mul(Decimal::from(60))
        .map(|m| m.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|m| m.to_i64());

    match minutes {
        Some(minutes) => label_from_minutes(minutes),
        None => ZERO_HOURS_LABEL.to_string(),
    }
}

/// Formats floating-point hours as an `HhMM` label.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::format_hours_f64;
///
/// assert_eq!(format_hours_f64(2.75), "2h45");
/// assert_eq!(format_hours_f64(f64::NAN), "0h00");
/// assert_eq!(format_hours_f64(f64::INFINITY), "0h00");
/// ```
pub fn format_hours_f64(hours: f64) -> String {
    if !hours.is_finite() || hours <= 0.0 {
        return ZERO_HOURS_LABEL.to_string();
    }
    label_from_minutes((hours * 60.0).round() as i64)
}

/// A [`WeekBucket`] with its hour fields rendered as labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedWeek {
    /// Monday of the ISO week.
    pub week_start: NaiveDate,
    /// Sunday of the ISO week.
    pub week_end: NaiveDate,
    /// ISO week number.
    pub iso_week: u32,
    /// Regular hours label.
    pub regular: String,
    /// First-tier overtime label.
    pub overtime_15: String,
    /// Second-tier overtime label.
    pub overtime_20: String,
    /// Total hours label.
    pub total: String,
    /// Total distance, unformatted.
    pub total_distance: Decimal,
}

impl FormattedWeek {
    /// Renders a week bucket for display.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_engine::calculation::{summarize_weeks, FormattedWeek};
    /// use hours_engine::config::OvertimePolicy;
    /// use hours_engine::models::JobRecord;
    ///
    /// let records = vec![JobRecord::new("2026-01-12", Some("07:00"), Some("17:30"))];
    /// let summary = summarize_weeks(&records, &OvertimePolicy::default());
    /// let view = FormattedWeek::from_bucket(&summary.weeks[0]);
    ///
    /// assert_eq!(view.regular, "8h00");
    /// assert_eq!(view.overtime_15, "1h00");
    /// assert_eq!(view.overtime_20, "1h30");
    /// assert_eq!(view.total, "10h30");
    /// ```
    pub fn from_bucket(bucket: &WeekBucket) -> Self {
        Self {
            week_start: bucket.week_start,
            week_end: bucket.week_end,
            iso_week: bucket.iso_week,
            regular: format_hours(bucket.regular_hours),
            overtime_15: format_hours(bucket.overtime_15_hours),
            overtime_20: format_hours(bucket.overtime_20_hours),
            total: format_hours(bucket.total_hours),
            total_distance: bucket.total_distance,
        }
    }
}

/// A [`DailyTotal`] with its hours rendered as a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedDay {
    /// The calendar day.
    pub date: NaiveDate,
    /// Total hours label.
    pub total: String,
    /// Total distance, unformatted.
    pub total_distance: Decimal,
    /// Number of records on the day.
    pub record_count: u32,
}

impl FormattedDay {
    /// Renders a daily total for display.
    pub fn from_total(total: &DailyTotal) -> Self {
        Self {
            date: total.date,
            total: format_hours(total.total_hours),
            total_distance: total.total_distance,
            record_count: total.record_count,
        }
    }
}
