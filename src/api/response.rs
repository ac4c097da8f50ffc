//! Response types for the roster engine API.
//!
//! This module defines the error response structures and the mapping
//! from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

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
            EngineError::MalformedInput { path, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MALFORMED_INPUT",
                    format!("Failed to read schedule file '{}'", path),
                    message,
                ),
            },
            EngineError::NoDateColumnsFound => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "NO_DATE_COLUMNS",
                    "No date columns found in the schedule",
                    "Ensure the file contains dates in either the header row or first data row",
                ),
            },
            EngineError::EmployeeNotFound { name } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Could not find schedule for employee '{}'", name),
                ),
            },
            EngineError::Timeout {
                elapsed_ms,
                budget_ms,
            } => ApiErrorResponse {
                status: StatusCode::REQUEST_TIMEOUT,
                error: ApiError::with_details(
                    "TIMEOUT",
                    "Schedule processing exceeded the time budget",
                    format!("{}ms elapsed, {}ms allowed", elapsed_ms, budget_ms),
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Shift table configuration error",
                    format!("Shift table file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Shift table configuration error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidShiftTable { code, value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT_TABLE",
                    format!("Invalid shift table entry '{}'", code),
                    format!("'{}' is not \"OFF\" or \"HHMM-HHMM\"", value),
                ),
            },
        }
    }
}
