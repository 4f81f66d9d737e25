//! Weekly hours aggregation and overtime tiering for field technicians.
//!
//! This crate turns raw job records into per-day totals and ISO-week
//! buckets, splitting each day's hours into regular and overtime and then
//! tiering the week's overtime into 1.5x and 2.0x bands.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
