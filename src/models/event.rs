//! Calendar event models produced by event synthesis.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The kind of calendar event a schedule cell produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A day off (the OFF sentinel in the shift table).
    Off,
    /// A timed work shift.
    Work,
    /// A shift code that was not found in the table; surfaced to the user
    /// as an all-day placeholder instead of being dropped.
    Unknown,
}

/// When an event occurs: a whole day, or a concrete interval.
///
/// Timed events carry floating local datetimes (the scheduling
/// organization's local zone, zero seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventTime {
    /// An all-day event on a single date.
    AllDay {
        /// The date of the event.
        date: NaiveDate,
    },
    /// A timed event spanning `[start, end)`. Overnight shifts end on the
    /// day after they start.
    Timed {
        /// The start instant.
        start: NaiveDateTime,
        /// The end instant (exclusive).
        end: NaiveDateTime,
    },
}

/// A single calendar event for one schedule day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The event title (e.g. "Work Shift: A", "OFF", "Unknown Shift: ZZZ").
    pub title: String,
    /// The kind of event.
    pub kind: EventKind,
    /// When the event occurs.
    pub time: EventTime,
}

/// The finished calendar for one employee, ordered by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarPayload {
    /// The employee the calendar was generated for.
    pub employee: String,
    /// The resolved schedule-year anchor the dates were mapped with.
    pub schedule_year: i32,
    /// The events, in ascending date order.
    pub events: Vec<CalendarEvent>,
}

/// The result of listing the employees found in a schedule grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListing {
    /// The deduplicated employee names, sorted ascending.
    pub employees: Vec<String>,
    /// The earliest date on the schedule's date axis.
    pub start_date: NaiveDate,
}
