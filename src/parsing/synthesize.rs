//! Calendar event synthesis.
//!
//! Turns each (date, shift-code) fact into a calendar event: an all-day
//! OFF event, a timed work interval (spanning midnight when the shift is
//! overnight), or an all-day "Unknown Shift" placeholder for codes missing
//! from the table. Synthesis is a pure function of (date, code, table);
//! a malformed table value drops that one event with a warning instead of
//! failing the whole calendar.

use chrono::{Duration, NaiveDate, Timelike};
use tracing::warn;

use crate::config::{OFF_SENTINEL, ShiftCodeTable, parse_interval};
use crate::models::{CalendarEvent, EventKind, EventTime, ScheduleEntry};

/// Synthesizes the calendar event for one schedule day.
///
/// Returns `None` only when a known code's interval text fails to parse;
/// that day is dropped and logged, never propagated as an error.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::config::ShiftCodeTable;
/// use roster_engine::models::EventKind;
/// use roster_engine::parsing::synthesize_event;
///
/// let table = ShiftCodeTable::default();
/// let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
///
/// let event = synthesize_event(date, "A", &table).unwrap();
/// assert_eq!(event.kind, EventKind::Work);
/// assert_eq!(event.title, "Work Shift: A");
/// ```
pub fn synthesize_event(
    date: NaiveDate,
    code: &str,
    table: &ShiftCodeTable,
) -> Option<CalendarEvent> {
    let Some(value) = table.get(code) else {
        return Some(CalendarEvent {
            title: format!("Unknown Shift: {}", code),
            kind: EventKind::Unknown,
            time: EventTime::AllDay { date },
        });
    };

    if value == OFF_SENTINEL {
        return Some(CalendarEvent {
            title: "OFF".to_string(),
            kind: EventKind::Off,
            time: EventTime::AllDay { date },
        });
    }

    let Some((start, end)) = parse_interval(value) else {
        warn!(code, value, %date, "Shift interval failed to parse; dropping event");
        return None;
    };

    // Overnight when the end hour is numerically earlier than the start
    // hour: the shift wraps into the next calendar date.
    let end_date = if end.hour() < start.hour() {
        date + Duration::days(1)
    } else {
        date
    };

    Some(CalendarEvent {
        title: format!("Work Shift: {}", code),
        kind: EventKind::Work,
        time: EventTime::Timed {
            start: date.and_time(start),
            end: end_date.and_time(end),
        },
    })
}

/// Synthesizes events for a whole entry sequence, preserving order and
/// dropping only the entries whose interval text is malformed.
pub fn synthesize_events(entries: &[ScheduleEntry], table: &ShiftCodeTable) -> Vec<CalendarEvent> {
    entries
        .iter()
        .filter_map(|entry| synthesize_event(entry.date, &entry.code, table))
        .collect()
}
