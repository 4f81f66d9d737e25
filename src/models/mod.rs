//! Core data models for the hours engine.
//!
//! This module contains the input record type, the derived daily and weekly
//! totals, and the containers returned by an aggregation pass.

mod daily_total;
mod date_range;
mod job_record;
mod summary;
mod week_bucket;

pub use daily_total::DailyTotal;
pub use date_range::DateRange;
pub use job_record::JobRecord;
pub use summary::{DailyAggregation, RejectedRecord, WeeklySummary};
pub use week_bucket::{WeekBucket, week_start_of};
