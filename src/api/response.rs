//! Response types for the Workday Calendar API.
//!
//! This module defines the response envelopes, the error body, and the
//! mapping from [`CalendarError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::models::Holiday;

/// Envelope for a single holiday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayResponse {
    /// The holiday.
    pub result: Holiday,
}

/// Envelope for a list of holidays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayListResponse {
    /// The holidays, sorted by date.
    pub result: Vec<Holiday>,
    /// Number of holidays in `result`.
    pub count: usize,
}

impl From<Vec<Holiday>> for HolidayListResponse {
    fn from(result: Vec<Holiday>) -> Self {
        let count = result.len();
        Self { result, count }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details, one entry per problem.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Creates a new API error with a single detail line.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: vec![details.into()],
        }
    }

    /// Creates a validation error listing every failed check.
    pub fn validation_error(messages: Vec<String>) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: "Request validation failed".to_string(),
            details: messages,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid path parameter error response.
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_ID",
            "Holiday id must be a UUID",
            message,
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<CalendarError> for ApiErrorResponse {
    fn from(error: CalendarError) -> Self {
        match error {
            CalendarError::ConfigNotFound { .. }
            | CalendarError::ConfigParseError { .. }
            | CalendarError::InvalidConfig { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", error.to_string()),
            ),
            CalendarError::Validation { messages } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(messages),
            ),
            CalendarError::NoWorkingDayFound { .. }
            | CalendarError::IterationLimitExceeded { .. }
            | CalendarError::DateOutOfRange { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CALCULATION_ERROR",
                    "Calculation failed",
                    error.to_string(),
                ),
            ),
            CalendarError::HolidayNotFound { id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("HOLIDAY_NOT_FOUND", format!("Holiday not found: {}", id)),
            ),
            CalendarError::DuplicateHoliday { .. } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::new("DUPLICATE_HOLIDAY", error.to_string()),
            ),
            CalendarError::EmptyHoliday => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("EMPTY_HOLIDAY", error.to_string()),
            ),
        }
    }
}
