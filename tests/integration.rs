//! Integration tests for the roster engine.
//!
//! This test suite covers:
//! - The end-to-end pipeline from raw grid to calendar payload
//! - ICS rendering of generated calendars
//! - Per-call shift table overrides
//! - HTTP API error handling (malformed JSON, bad files, bad tables)
//!
//! HTTP happy paths need a real spreadsheet on disk; the workspace
//! carries no binary fixtures, so those flows are exercised at the
//! grid level through the engine's public entry points and the HTTP
//! layer is exercised through its error paths.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tower::ServiceExt;

use roster_engine::api::{AppState, create_router};
use roster_engine::config::ShiftCodeTable;
use roster_engine::ics::render_calendar;
use roster_engine::models::{CellValue, EventKind, EventTime, RawGrid};
use roster_engine::parsing::ScheduleEngine;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::default())
}

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A small but representative schedule: anchor year in the corner,
/// December dates in the header row, two employees with mixed codes.
fn sample_grid() -> RawGrid {
    RawGrid::from_rows(vec![
        vec![
            text("2026"),
            text("2025-12-01"),
            text("2025-12-02"),
            text("2025-12-03"),
            text("2025-12-04"),
        ],
        vec![text("Alice"), text("A"), text("13"), text("V"), text("ZZZ")],
        vec![text("Bob"), text("-"), text("A"), text("nan"), text("A")],
    ])
    .unwrap()
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// =============================================================================
// End-to-End Pipeline Tests (grid level)
// =============================================================================

#[test]
fn test_employee_listing_from_sample_grid() {
    let engine = ScheduleEngine::with_defaults();
    let listing = engine.list_employees_in_grid(&sample_grid()).unwrap();

    assert_eq!(
        listing.employees,
        vec!["Alice".to_string(), "Bob".to_string()]
    );
    // December rolls back to the year before the anchor.
    assert_eq!(listing.start_date, date(2025, 12, 1));
}

#[test]
fn test_calendar_covers_work_off_and_unknown() {
    let engine = ScheduleEngine::with_defaults();
    let payload = engine
        .generate_calendar_in_grid(&sample_grid(), "Alice", None)
        .unwrap();

    assert_eq!(payload.employee, "Alice");
    assert_eq!(payload.schedule_year, 2026);
    assert_eq!(payload.events.len(), 4);

    // Day shift: 0700-1500 on the event date.
    assert_eq!(payload.events[0].kind, EventKind::Work);
    assert_eq!(payload.events[0].title, "Work Shift: A");
    assert_eq!(
        payload.events[0].time,
        EventTime::Timed {
            start: date(2025, 12, 1).and_hms_opt(7, 0, 0).unwrap(),
            end: date(2025, 12, 1).and_hms_opt(15, 0, 0).unwrap(),
        }
    );

    // Night shift "13" (2300-0700) crosses into the next day.
    assert_eq!(payload.events[1].kind, EventKind::Work);
    assert_eq!(
        payload.events[1].time,
        EventTime::Timed {
            start: date(2025, 12, 2).and_hms_opt(23, 0, 0).unwrap(),
            end: date(2025, 12, 3).and_hms_opt(7, 0, 0).unwrap(),
        }
    );

    // "V" is vacation in the baseline table.
    assert_eq!(payload.events[2].kind, EventKind::Off);
    assert_eq!(payload.events[2].title, "OFF");

    // "ZZZ" is not in the table and becomes an all-day placeholder.
    assert_eq!(payload.events[3].kind, EventKind::Unknown);
    assert_eq!(payload.events[3].title, "Unknown Shift: ZZZ");
    assert_eq!(
        payload.events[3].time,
        EventTime::AllDay {
            date: date(2025, 12, 4)
        }
    );
}

#[test]
fn test_blank_and_nan_cells_produce_no_events() {
    let engine = ScheduleEngine::with_defaults();
    let payload = engine
        .generate_calendar_in_grid(&sample_grid(), "Bob", None)
        .unwrap();

    // Dec 3 is "nan" and yields nothing; the other three days survive.
    assert_eq!(payload.events.len(), 3);
    let skipped = date(2025, 12, 3);
    assert!(
        payload
            .events
            .iter()
            .all(|e| !matches!(e.time, EventTime::AllDay { date } if date == skipped))
    );
}

#[test]
fn test_unknown_employee_is_an_error() {
    let engine = ScheduleEngine::with_defaults();
    let result = engine.generate_calendar_in_grid(&sample_grid(), "Mallory", None);
    assert!(matches!(
        result,
        Err(roster_engine::EngineError::EmployeeNotFound { .. })
    ));
}

#[test]
fn test_per_call_table_override() {
    let engine = ScheduleEngine::with_defaults();
    let mut codes = std::collections::HashMap::new();
    codes.insert("A".to_string(), "0900-1700".to_string());
    let table = ShiftCodeTable::new(codes);
    table.validate().unwrap();

    let payload = engine
        .generate_calendar_in_grid(&sample_grid(), "Alice", Some(&table))
        .unwrap();

    // "A" now follows the override; "13" and "V" are no longer known.
    assert_eq!(
        payload.events[0].time,
        EventTime::Timed {
            start: date(2025, 12, 1).and_hms_opt(9, 0, 0).unwrap(),
            end: date(2025, 12, 1).and_hms_opt(17, 0, 0).unwrap(),
        }
    );
    assert_eq!(payload.events[1].kind, EventKind::Unknown);
    assert_eq!(payload.events[1].title, "Unknown Shift: 13");
}

#[test]
fn test_payload_json_shape() {
    let engine = ScheduleEngine::with_defaults();
    let payload = engine
        .generate_calendar_in_grid(&sample_grid(), "Alice", None)
        .unwrap();
    let value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["employee"], "Alice");
    assert_eq!(value["schedule_year"], 2026);
    assert_eq!(value["events"][0]["kind"], "work");
    assert_eq!(value["events"][0]["time"]["type"], "timed");
    assert_eq!(value["events"][2]["time"]["type"], "all_day");
    assert_eq!(value["events"][2]["time"]["date"], "2025-12-03");
}

// =============================================================================
// ICS Rendering Tests
// =============================================================================

#[test]
fn test_ics_rendering_of_generated_calendar() {
    let engine = ScheduleEngine::with_defaults();
    let payload = engine
        .generate_calendar_in_grid(&sample_grid(), "Alice", None)
        .unwrap();
    let ics = render_calendar(&payload);

    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 4);
    assert!(ics.contains("X-WR-CALNAME:Alice\r\n"));
    assert!(ics.contains("SUMMARY:Work Shift: A\r\n"));
    assert!(ics.contains("DTSTART:20251201T070000\r\n"));
    // The overnight shift ends on the following day.
    assert!(ics.contains("DTEND:20251203T070000\r\n"));
    // OFF days are all-day with an exclusive end.
    assert!(ics.contains("DTSTART;VALUE=DATE:20251203\r\n"));
    assert!(ics.contains("DTEND;VALUE=DATE:20251204\r\n"));
}

// =============================================================================
// HTTP API Tests
// =============================================================================

#[tokio::test]
async fn test_employees_endpoint_rejects_missing_file() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/schedule/employees",
        json!({"file_path": "/nonexistent/schedule.xlsx"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_INPUT");
}

#[tokio::test]
async fn test_calendar_endpoint_rejects_missing_file() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/schedule/calendar",
        json!({"file_path": "/nonexistent/schedule.xlsx", "employee": "Alice"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_INPUT");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/schedule/employees")
                .header("Content-Type", "application/json")
                .body(Body::from("{not valid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/schedule/calendar",
        json!({"file_path": "/tmp/schedule.xlsx"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("employee"));
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/schedule/employees")
                .body(Body::from(
                    json!({"file_path": "/tmp/s.xlsx"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}

#[tokio::test]
async fn test_invalid_shift_table_rejected_before_parsing() {
    // The file does not exist, but table validation runs first.
    let (status, body) = post_json(
        create_router_for_test(),
        "/schedule/calendar",
        json!({
            "file_path": "/nonexistent/schedule.xlsx",
            "employee": "Alice",
            "shift_codes": {"A": "morning"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_SHIFT_TABLE");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (status, _) = post_json(
        create_router_for_test(),
        "/schedule/unknown",
        json!({"file_path": "/tmp/s.xlsx"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
