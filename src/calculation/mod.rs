//! Calculation logic for the hours engine.
//!
//! This module contains the aggregation pipeline: date and time parsing,
//! daily aggregation of job records, the daily overtime split, weekly
//! overtime tiering, weekly aggregation into ISO week buckets, hour label
//! formatting, and payable hours weighting.

mod daily_aggregation;
mod daily_overtime;
mod formatting;
mod payable_hours;
mod time_parser;
mod weekly_aggregation;
mod weekly_overtime;

pub use daily_aggregation::{
    aggregate_daily, filter_by_range, minutes_to_hours, record_duration_hours,
    record_duration_minutes,
};
pub use daily_overtime::{DEFAULT_DAILY_OVERTIME_THRESHOLD, DailySplit, split_daily_hours};
pub use formatting::{
    FormattedDay, FormattedWeek, ZERO_HOURS_LABEL, format_hours, format_hours_f64,
};
pub use payable_hours::{PayableHours, calculate_payable_hours};
pub use time_parser::{
    DATE_FORMATS, DateFormat, FALLBACK_DATE_FORMAT, instant_on, parse_date,
    parse_date_with_format, parse_instant, parse_time_of_day,
};
pub use weekly_aggregation::{aggregate_weekly, summarize_weeks};
pub use weekly_overtime::{
    DEFAULT_FIRST_TIER_THRESHOLD, DEFAULT_TIER_1_MULTIPLIER, DEFAULT_TIER_2_MULTIPLIER,
    OvertimeTiers, tier_weekly_overtime,
};
