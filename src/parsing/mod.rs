//! Schedule parsing and calendar synthesis for the roster engine.
//!
//! This module contains the pipeline stages that recover a reliable
//! (date, employee, shift-code) grid from an untyped spreadsheet and turn
//! it into calendar events: year resolution, date-column location,
//! employee location, schedule extraction and event synthesis, plus the
//! [`ScheduleEngine`] that runs them end to end.

pub(crate) mod dates;
mod employees;
mod extract;
mod pipeline;
mod synthesize;
mod year;

pub use dates::{locate_date_axis, try_parse_date};
pub use employees::{is_name_like, locate_employees};
pub use extract::{employee_name_column, extract_entries, extract_schedule, locate_employee_row};
pub use pipeline::ScheduleEngine;
pub use synthesize::{synthesize_event, synthesize_events};
pub use year::resolve_schedule_year;
