//! Daily overtime detection.
//!
//! This module splits a day's total hours into regular and overtime portions.
//! Overtime is always determined per day first: a technician working 10h on
//! one day and 6h on another owes 2h of daily overtime, not an average.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default daily regular-hours threshold.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// A day's hours split at the daily threshold.
///
/// `regular + overtime` always equals the (non-negative) hours that were split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySplit {
    /// Hours up to the threshold.
    pub regular: Decimal,
    /// Hours beyond the threshold.
    pub overtime: Decimal,
}

/// Splits a day's hours into regular and overtime.
///
/// `regular = min(threshold, hours)` and `overtime = max(0, hours -
/// threshold)`. Negative hours are treated as zero.
///
/// # Examples
///
/// ## Day at threshold (no overtime)
///
/// ```
/// use hours_engine::calculation::{split_daily_hours, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let split = split_daily_hours(Decimal::from(8), DEFAULT_DAILY_OVERTIME_THRESHOLD);
/// assert_eq!(split.regular, Decimal::from(8));
/// assert_eq!(split.overtime, Decimal::ZERO);
/// ```
///
/// ## Day exceeding threshold
///
/// ```
/// use hours_engine::calculation::{split_daily_hours, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
///
/// let split = split_daily_hours(Decimal::from(10), DEFAULT_DAILY_OVERTIME_THRESHOLD);
/// assert_eq!(split.regular, Decimal::from(8));
/// assert_eq!(split.overtime, Decimal::from(2));
/// ```
pub fn split_daily_hours(hours: Decimal, threshold: Decimal) -> DailySplit {
    let hours = hours.max(Decimal::ZERO);
    let threshold = threshold.max(Decimal::ZERO);

    if hours <= threshold {
        DailySplit {
            regular: hours,
            overtime: Decimal::ZERO,
        }
    } else {
        DailySplit {
            regular: threshold,
            overtime: hours - threshold,
        }
    }
}
