//! Response types for the business-hours API.
//!
//! This module defines the success bodies of both endpoints, the error
//! response structure, and the mapping from [`CalendarError`] to HTTP status
//! codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CalendarError;
use crate::models::DaySegment;

/// Response body of `POST /deadline`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Name of the calendar used.
    pub calendar: String,
    /// The start instant, formatted like `"Jun 7, 2010 9:10 AM"`.
    pub start: String,
    /// The deadline, formatted like `"Jun 7, 2010 11:10 AM"`.
    pub deadline: String,
    /// The deadline as an ISO-8601 local timestamp.
    pub deadline_iso: NaiveDateTime,
    /// Total business hours consumed.
    pub total_hours: Decimal,
    /// Open time consumed per business day.
    pub segments: Vec<DaySegment>,
}

/// Response body of `GET /opening-hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHoursResponse {
    /// The requested day, normalized like `"Dec 24, 2010"`.
    pub date: String,
    /// Whether the business is closed all day.
    pub closed: bool,
    /// Opening time, absent when closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    /// Closing time, absent when closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
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

impl From<CalendarError> for ApiErrorResponse {
    fn from(error: CalendarError) -> Self {
        let message = error.to_string();
        match error {
            CalendarError::ConfigNotFound { .. } | CalendarError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        message,
                    ),
                }
            }
            CalendarError::ParseError { expected, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PARSE_ERROR",
                    message,
                    format!("Expected {}", expected),
                ),
            },
            CalendarError::InvalidHours { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_HOURS", message),
            },
            CalendarError::InvalidDuration { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            CalendarError::NoBusinessDayFound { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "NO_BUSINESS_DAY",
                    message,
                    "The calendar has no open day within its search limit",
                ),
            },
        }
    }
}
