//! HTTP request handlers for the Workday Calendar API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, Utc};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calendar::{calculate_workday, validate_request};
use crate::error::CalendarError;
use crate::models::{Holiday, WorkdayCalculation, WorkdayCalculationResult};

use super::request::{HolidayRequest, WorkdayCalculationRequest};
use super::response::{ApiError, ApiErrorResponse, HolidayListResponse, HolidayResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/workday/calculate", post(calculate_handler))
        .route("/holidays", post(add_holiday_handler).get(list_holidays_handler))
        .route("/holidays/recurring", get(list_recurring_handler))
        .route("/holidays/fixed", get(list_fixed_handler))
        .route(
            "/holidays/:id",
            get(get_holiday_handler)
                .put(update_holiday_handler)
                .delete(delete_holiday_handler),
        )
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a body rejection to a 400 response, logging it against the request.
fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(vec![body_text])
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
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

fn holiday_id(
    correlation_id: Uuid,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Uuid, ApiErrorResponse> {
    id.map(|Path(id)| id).map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Invalid holiday id"
        );
        ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::invalid_id(rejection.body_text()),
        )
    })
}

/// Logs a failed holiday operation and converts it to a response.
fn holiday_failure(correlation_id: Uuid, err: CalendarError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Holiday request rejected"
    );
    err.into()
}

/// Handler for POST /workday/calculate.
///
/// Validates the request, runs the workday arithmetic, and returns the
/// resulting instant formatted with the configured date format.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkdayCalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing workday calculation request");

    let request: WorkdayCalculation = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let config = state.config();
    let now = Local::now().naive_local();
    if let Err(err) = validate_request(&request, config.default_working_hours(), now) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Calculation request failed validation"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    let start_time = Instant::now();
    match calculate_workday(&request, config.settings()) {
        Ok(result_date_time) => {
            let duration = start_time.elapsed();
            let result = WorkdayCalculationResult {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                start_date_time: request.start_date_time,
                working_days: request.working_days,
                working_hours: request.working_window(config.default_working_hours()),
                result: config.format_result(result_date_time),
                result_date_time,
                duration_us: duration.as_micros() as u64,
            };
            info!(
                correlation_id = %correlation_id,
                start = %result.start_date_time,
                working_days = result.working_days,
                result = %result.result,
                duration_us = result.duration_us,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /holidays.
async fn add_holiday_handler(
    State(state): State<AppState>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let holiday = state
        .holidays()
        .add(request.into())
        .await
        .map_err(|err| holiday_failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, id = %holiday.id, "Holiday created");
    Ok(json_response(StatusCode::CREATED, HolidayResponse { result: holiday }))
}

/// Handler for GET /holidays.
async fn list_holidays_handler(
    State(state): State<AppState>,
) -> Result<Response, ApiErrorResponse> {
    let holidays = state.holidays().list().await?;
    Ok(json_response(StatusCode::OK, HolidayListResponse::from(holidays)))
}

/// Handler for GET /holidays/recurring.
async fn list_recurring_handler(
    State(state): State<AppState>,
) -> Result<Response, ApiErrorResponse> {
    let holidays = state.holidays().list_recurring().await?;
    Ok(json_response(StatusCode::OK, HolidayListResponse::from(holidays)))
}

/// Handler for GET /holidays/fixed.
async fn list_fixed_handler(State(state): State<AppState>) -> Result<Response, ApiErrorResponse> {
    let holidays = state.holidays().list_fixed().await?;
    Ok(json_response(StatusCode::OK, HolidayListResponse::from(holidays)))
}

/// Handler for GET /holidays/:id.
async fn get_holiday_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = holiday_id(correlation_id, id)?;

    let holiday = state
        .holidays()
        .get(id)
        .await
        .map_err(|err| holiday_failure(correlation_id, err))?;
    Ok(json_response(StatusCode::OK, HolidayResponse { result: holiday }))
}

/// Handler for PUT /holidays/:id.
///
/// Replaces every field of the stored holiday; the id comes from the path.
async fn update_holiday_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<HolidayRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = holiday_id(correlation_id, id)?;
    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let holiday: Holiday = state
        .holidays()
        .update(id, request.into())
        .await
        .map_err(|err| holiday_failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, id = %holiday.id, "Holiday updated");
    Ok(json_response(StatusCode::OK, HolidayResponse { result: holiday }))
}

/// Handler for DELETE /holidays/:id.
async fn delete_holiday_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let id = holiday_id(correlation_id, id)?;

    state
        .holidays()
        .delete(id)
        .await
        .map_err(|err| holiday_failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, id = %id, "Holiday removed");
    Ok(StatusCode::NO_CONTENT)
}
