//! Per-day totals derived from job records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The hours, distance and record count for one calendar day.
///
/// Computed once per aggregation pass and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// The calendar day.
    pub date: NaiveDate,
    /// Sum of the per-record durations, in hours. Never negative.
    pub total_hours: Decimal,
    /// Sum of out and return distances.
    pub total_distance: Decimal,
    /// Number of records assigned to this day.
    pub record_count: u32,
}
