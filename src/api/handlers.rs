//! HTTP request handlers for the business-hours API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_deadline;
use crate::error::CalendarError;
use crate::models::{
    BusinessCalendar, DeadlineResult, format_day, format_time_of_day, format_timestamp,
};

use super::request::{DeadlineRequest, OpeningHoursQuery};
use super::response::{ApiError, ApiErrorResponse, DeadlineResponse, OpeningHoursResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/deadline", post(deadline_handler))
        .route("/opening-hours", get(opening_hours_handler))
        .with_state(state)
}

/// Handler for POST /deadline endpoint.
///
/// Accepts a start timestamp and a duration and returns the deadline.
async fn deadline_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeadlineRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing deadline request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let timer = Instant::now();
    match perform_calculation(state.calendar(), &request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                start = %result.start,
                deadline = %result.deadline,
                business_days = result.segments.len(),
                duration_us = timer.elapsed().as_micros(),
                "Deadline calculated successfully"
            );
            json_response(StatusCode::OK, build_response(state.name(), result))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Deadline calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /opening-hours endpoint.
///
/// Resolves the effective opening hours of one day.
async fn opening_hours_handler(
    State(state): State<AppState>,
    query: Result<Query<OpeningHoursQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(error = %rejection, "Invalid opening-hours query");
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            );
        }
    };

    let day = match query.day() {
        Ok(day) => day,
        Err(err) => {
            warn!(date = %query.date, error = %err, "Unparseable opening-hours date");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let hours = state.calendar().opening_hours_for(day);
    let body = OpeningHoursResponse {
        date: format_day(day),
        closed: hours.is_none(),
        open: hours.map(|h| format_time_of_day(h.open.time())),
        close: hours.map(|h| format_time_of_day(h.close.time())),
    };
    json_response(StatusCode::OK, body)
}

/// Validates the request and runs the deadline walk.
fn perform_calculation(
    calendar: &BusinessCalendar,
    request: &DeadlineRequest,
) -> Result<DeadlineResult, CalendarError> {
    let start = request.start_time()?;
    let duration = request.duration()?;
    calculate_deadline(calendar, duration, start)
}

fn build_response(calendar_name: &str, result: DeadlineResult) -> DeadlineResponse {
    DeadlineResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        calendar: calendar_name.to_string(),
        start: format_timestamp(result.start),
        deadline: format_timestamp(result.deadline),
        deadline_iso: result.deadline,
        total_hours: result.total_hours(),
        segments: result.segments,
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
