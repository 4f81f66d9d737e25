//! Aggregation result models.
//!
//! These types carry the output of an aggregation pass back to the caller,
//! together with the records that had to be left out.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DailyTotal, WeekBucket};

/// A record excluded from aggregation because its date could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    /// The record's identifier, if it had one.
    pub id: Option<String>,
    /// The raw date value as received.
    pub date: String,
    /// Why the record was excluded.
    pub reason: String,
}

/// Per-day totals keyed by date, plus the rejected records.
///
/// Days are ordered ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAggregation {
    /// One total per calendar day that had at least one record.
    pub days: BTreeMap<NaiveDate, DailyTotal>,
    /// Records that could not be assigned to a day.
    pub rejected: Vec<RejectedRecord>,
}

impl DailyAggregation {
    /// Returns the daily totals in ascending date order.
    pub fn totals(&self) -> impl Iterator<Item = &DailyTotal> {
        self.days.values()
    }

    /// Returns the total for a given day, if any record fell on it.
    pub fn get(&self, date: NaiveDate) -> Option<&DailyTotal> {
        self.days.get(&date)
    }
}

/// The weekly summary for a record set: buckets newest first, plus rejections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Week buckets sorted descending by `week_start`.
    pub weeks: Vec<WeekBucket>,
    /// Records that could not be assigned to a week.
    pub rejected: Vec<RejectedRecord>,
}

impl WeeklySummary {
    /// Returns the most recent week, if any.
    pub fn latest(&self) -> Option<&WeekBucket> {
        self.weeks.first()
    }

    /// Returns the week starting on the given Monday.
    pub fn week_starting(&self, week_start: NaiveDate) -> Option<&WeekBucket> {
        self.weeks.iter().find(|w| w.week_start == week_start)
    }
}
