//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for both API endpoints:
//! employee listing and calendar generation. The handlers are thin glue:
//! they decode the request, call into the schedule engine and shape the
//! response, owning nothing of the parsing pipeline itself.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::ics::render_calendar;

use super::request::{CalendarFormat, GenerateCalendarRequest, ListEmployeesRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule/employees", post(list_employees_handler))
        .route("/schedule/calendar", post(generate_calendar_handler))
        .with_state(state)
}

/// Handler for POST /schedule/employees.
///
/// Accepts the path of an uploaded schedule file and returns the
/// employee listing with the schedule's start date.
async fn list_employees_handler(
    State(state): State<AppState>,
    payload: Result<Json<ListEmployeesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee listing request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.engine().list_employees(&request.file_path) {
        Ok(listing) => {
            info!(
                correlation_id = %correlation_id,
                employees = listing.employees.len(),
                start_date = %listing.start_date,
                "Employee listing completed"
            );
            (StatusCode::OK, Json(listing)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Employee listing failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /schedule/calendar.
///
/// Generates the calendar for one employee, returned either as the
/// structured JSON payload or as a downloadable `text/calendar` body.
async fn generate_calendar_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateCalendarRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let table_override = match request.table_override() {
        Ok(table) => table,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected custom shift table");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let result = state.engine().generate_calendar(
        &request.file_path,
        &request.employee,
        table_override.as_ref(),
    );

    match result {
        Ok(calendar) => {
            info!(
                correlation_id = %correlation_id,
                employee = %calendar.employee,
                events = calendar.events.len(),
                "Calendar generation completed"
            );
            match request.format {
                CalendarFormat::Json => (StatusCode::OK, Json(calendar)).into_response(),
                CalendarFormat::Ics => {
                    let body = render_calendar(&calendar);
                    let disposition = format!(
                        "attachment; filename=\"{}_schedule.ics\"",
                        sanitize_filename(&calendar.employee)
                    );
                    (
                        StatusCode::OK,
                        [
                            (header::CONTENT_TYPE, "text/calendar".to_string()),
                            (header::CONTENT_DISPOSITION, disposition),
                        ],
                        body,
                    )
                        .into_response()
                }
            }
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calendar generation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON extraction rejection to a 400 response.
fn json_rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Keeps download filenames to a conservative character set.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
