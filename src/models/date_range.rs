//! Date range model.
//!
//! The aggregation pipeline never windows its input on its own. Callers that
//! want a bounded view restrict the record set with a [`DateRange`] first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar dates.
///
/// # Example
///
/// ```
/// use hours_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(),
/// };
///
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())); // start date
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2026, 1, 25).unwrap())); // end date
/// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first date of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Checks if a given date falls within this range, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of days in the range, or 0 if it is inverted.
    pub fn days(&self) -> i64 {
        let span = (self.end_date - self.start_date).num_days();
        if span < 0 { 0 } else { span + 1 }
    }
}
