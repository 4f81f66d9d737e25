//! Response types for the hours engine API.
//!
//! This module defines the summary response bodies, the error response
//! structure, and the mapping from [`EngineError`] to HTTP errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::{FormattedDay, FormattedWeek, PayableHours};
use crate::config::OvertimePolicy;
use crate::error::EngineError;
use crate::models::{DailyTotal, RejectedRecord, WeekBucket};

/// Response body for `/summary/weekly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySummaryResponse {
    /// The policy the summary was computed with.
    pub policy: OvertimePolicy,
    /// Week buckets, newest first.
    pub weeks: Vec<WeekBucket>,
    /// The same weeks with `HhMM` labels, in the same order.
    pub formatted: Vec<FormattedWeek>,
    /// Payable-equivalent hours per week, in the same order.
    pub payable: Vec<PayableHours>,
    /// Records excluded because their date could not be parsed.
    pub rejected: Vec<RejectedRecord>,
}

/// Response body for `/summary/daily`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRecapResponse {
    /// Daily totals in ascending date order.
    pub days: Vec<DailyTotal>,
    /// The same days with `HhMM` labels, in the same order.
    pub formatted: Vec<FormattedDay>,
    /// Records excluded because their date could not be parsed.
    pub rejected: Vec<RejectedRecord>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_POLICY",
                    format!("Invalid policy field '{}': {}", field, message),
                    "The overtime policy override contains an out-of-range value",
                ),
            },
        }
    }
}
