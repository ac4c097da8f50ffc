//! Core data models for the roster calendar engine.
//!
//! This module contains all the domain models used throughout the engine.

mod event;
mod grid;
mod schedule;

pub use event::{CalendarEvent, CalendarPayload, EmployeeListing, EventKind, EventTime};
pub use grid::{CellValue, RawGrid};
pub use schedule::{DateAxis, DateAxisEntry, ScheduleEntry, ScheduleYear};
