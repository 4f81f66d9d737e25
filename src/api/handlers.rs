//! HTTP request handlers for the hours engine API.
//!
//! Both endpoints accept a [`SummaryRequest`], resolve the overtime policy
//! and optional date window, and run the aggregation pipeline.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    FormattedDay, FormattedWeek, aggregate_daily, calculate_payable_hours, filter_by_range,
    summarize_weeks,
};
use crate::config::OvertimePolicy;
use crate::models::JobRecord;

use super::request::SummaryRequest;
use super::response::{ApiError, ApiErrorResponse, DailyRecapResponse, WeeklySummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary/weekly", post(weekly_summary_handler))
        .route("/summary/daily", post(daily_recap_handler))
        .with_state(state)
}

/// Handler for POST /summary/weekly.
///
/// Returns week buckets newest first, with labels and payable hours.
async fn weekly_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing weekly summary request");

    let (records, policy) = match prepare(&state, payload, correlation_id) {
        Ok(prepared) => prepared,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let summary = summarize_weeks(&records, &policy);

    let formatted = summary.weeks.iter().map(FormattedWeek::from_bucket).collect();
    let payable = summary
        .weeks
        .iter()
        .map(|week| calculate_payable_hours(week, &policy))
        .collect();

    info!(
        correlation_id = %correlation_id,
        records_count = records.len(),
        weeks_count = summary.weeks.len(),
        rejected_count = summary.rejected.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Weekly summary completed successfully"
    );

    json_response(
        StatusCode::OK,
        WeeklySummaryResponse {
            policy,
            weeks: summary.weeks,
            formatted,
            payable,
            rejected: summary.rejected,
        },
    )
}

/// Handler for POST /summary/daily.
///
/// Returns one total per day in ascending date order.
async fn daily_recap_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily recap request");

    let (records, policy) = match prepare(&state, payload, correlation_id) {
        Ok(prepared) => prepared,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let aggregation = aggregate_daily(&records, &policy);

    let days: Vec<_> = aggregation.days.into_values().collect();
    let formatted = days.iter().map(FormattedDay::from_total).collect();

    info!(
        correlation_id = %correlation_id,
        records_count = records.len(),
        days_count = days.len(),
        rejected_count = aggregation.rejected.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Daily recap completed successfully"
    );

    json_response(
        StatusCode::OK,
        DailyRecapResponse {
            days,
            formatted,
            rejected: aggregation.rejected,
        },
    )
}

/// Unpacks the request body into the records to aggregate and the policy
/// to apply, or the error response to return.
fn prepare(
    state: &AppState,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<(Vec<JobRecord>, OvertimePolicy), Response> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_to_error(rejection, correlation_id),
            };
            return Err(error.into_response());
        }
    };

    let policy = match request.policy {
        Some(policy) => {
            if let Err(err) = policy.validate() {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Rejected policy override"
                );
                return Err(ApiErrorResponse::from(err).into_response());
            }
            policy
        }
        None => {
            let metadata = state.config().metadata();
            debug!(
                correlation_id = %correlation_id,
                policy = %metadata.name,
                version = %metadata.version,
                "Using server overtime policy"
            );
            state.policy().clone()
        }
    };

    let records = match request.range {
        Some(range) => filter_by_range(&request.records, &range),
        None => request.records,
    };

    Ok((records, policy))
}

fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}
