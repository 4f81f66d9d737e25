//! HTTP API module for the hours engine.
//!
//! This module exposes the weekly summary and daily recap as JSON
//! endpoints over the aggregation pipeline.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SummaryRequest;
pub use response::{ApiError, DailyRecapResponse, WeeklySummaryResponse};
pub use state::AppState;
