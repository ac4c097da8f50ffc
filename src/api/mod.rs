//! HTTP API layer for the roster engine.
//!
//! Exposes the schedule conversion pipeline over two endpoints:
//! `POST /schedule/employees` and `POST /schedule/calendar`.

pub mod handlers;
pub mod request;
pub mod response;
pub mod state;

pub use handlers::create_router;
pub use request::{CalendarFormat, GenerateCalendarRequest, ListEmployeesRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
