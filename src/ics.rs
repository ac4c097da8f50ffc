//! iCalendar (RFC 5545) rendering of calendar payloads.
//!
//! The engine returns structured [`CalendarPayload`] data; this module
//! serializes it into the downloadable `.ics` body the request layer
//! ships to the user. Timed events are written as floating local times
//! (the scheduling organization's local zone); all-day events use
//! `VALUE=DATE` with an exclusive next-day `DTEND`.

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::models::{CalendarPayload, EventTime};

const PRODID: &str = "-//roster-engine//schedule-converter//EN";

/// Renders a calendar payload as an iCalendar document.
///
/// Every event receives a fresh UUID as its `UID` and the current UTC
/// instant as `DTSTAMP`. Lines are CRLF-terminated per RFC 5545.
///
/// # Example
///
/// ```
/// use roster_engine::ics::render_calendar;
/// use roster_engine::models::CalendarPayload;
///
/// let payload = CalendarPayload {
///     employee: "Alice".to_string(),
///     schedule_year: 2026,
///     events: vec![],
/// };
/// let body = render_calendar(&payload);
/// assert!(body.starts_with("BEGIN:VCALENDAR\r\n"));
/// assert!(body.ends_with("END:VCALENDAR\r\n"));
/// ```
pub fn render_calendar(payload: &CalendarPayload) -> String {
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{}", PRODID));
    push_line(
        &mut out,
        &format!("X-WR-CALNAME:{}", escape_text(&payload.employee)),
    );

    for event in &payload.events {
        push_line(&mut out, "BEGIN:VEVENT");
        push_line(&mut out, &format!("UID:{}", Uuid::new_v4()));
        push_line(&mut out, &format!("DTSTAMP:{}", dtstamp));
        push_line(
            &mut out,
            &format!("SUMMARY:{}", escape_text(&event.title)),
        );
        match event.time {
            EventTime::AllDay { date } => {
                push_line(
                    &mut out,
                    &format!("DTSTART;VALUE=DATE:{}", format_date(date)),
                );
                push_line(
                    &mut out,
                    &format!("DTEND;VALUE=DATE:{}", format_date(date + Duration::days(1))),
                );
            }
            EventTime::Timed { start, end } => {
                push_line(&mut out, &format!("DTSTART:{}", format_datetime(start)));
                push_line(&mut out, &format!("DTEND:{}", format_datetime(end)));
            }
        }
        push_line(&mut out, "END:VEVENT");
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Escapes TEXT values per RFC 5545 section 3.3.11.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarEvent, EventKind};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payload_with(events: Vec<CalendarEvent>) -> CalendarPayload {
        CalendarPayload {
            employee: "Alice".to_string(),
            schedule_year: 2026,
            events,
        }
    }

    #[test]
    fn test_empty_calendar_structure() {
        let body = render_calendar(&payload_with(vec![]));
        assert!(body.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(body.contains("VERSION:2.0\r\n"));
        assert!(body.contains("X-WR-CALNAME:Alice\r\n"));
        assert!(body.ends_with("END:VCALENDAR\r\n"));
        assert!(!body.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_all_day_event_uses_date_values() {
        let body = render_calendar(&payload_with(vec![CalendarEvent {
            title: "OFF".to_string(),
            kind: EventKind::Off,
            time: EventTime::AllDay {
                date: date(2025, 12, 2),
            },
        }]));

        assert!(body.contains("DTSTART;VALUE=DATE:20251202\r\n"));
        // Exclusive end: the next day.
        assert!(body.contains("DTEND;VALUE=DATE:20251203\r\n"));
        assert!(body.contains("SUMMARY:OFF\r\n"));
    }

    #[test]
    fn test_timed_event_uses_floating_local_times() {
        let body = render_calendar(&payload_with(vec![CalendarEvent {
            title: "Work Shift: 13".to_string(),
            kind: EventKind::Work,
            time: EventTime::Timed {
                start: date(2025, 12, 1).and_hms_opt(23, 0, 0).unwrap(),
                end: date(2025, 12, 2).and_hms_opt(7, 0, 0).unwrap(),
            },
        }]));

        assert!(body.contains("DTSTART:20251201T230000\r\n"));
        assert!(body.contains("DTEND:20251202T070000\r\n"));
        // Floating times: no Z suffix, no TZID.
        assert!(!body.contains("DTSTART:20251201T230000Z"));
        assert!(!body.contains("TZID"));
    }

    #[test]
    fn test_event_count_matches_payload() {
        let events: Vec<CalendarEvent> = (1..=3)
            .map(|d| CalendarEvent {
                title: "OFF".to_string(),
                kind: EventKind::Off,
                time: EventTime::AllDay {
                    date: date(2025, 12, d),
                },
            })
            .collect();
        let body = render_calendar(&payload_with(events));
        assert_eq!(body.matches("BEGIN:VEVENT").count(), 3);
        assert_eq!(body.matches("END:VEVENT").count(), 3);
        assert_eq!(body.matches("UID:").count(), 3);
    }

    #[test]
    fn test_summary_text_is_escaped() {
        let body = render_calendar(&payload_with(vec![CalendarEvent {
            title: "Unknown Shift: A;B,C".to_string(),
            kind: EventKind::Unknown,
            time: EventTime::AllDay {
                date: date(2025, 12, 2),
            },
        }]));
        assert!(body.contains("SUMMARY:Unknown Shift: A\\;B\\,C\r\n"));
    }

    #[test]
    fn test_escape_text_handles_newlines_and_backslashes() {
        assert_eq!(escape_text("a\nb"), "a\\nb");
        assert_eq!(escape_text("a\\b"), "a\\\\b");
        assert_eq!(escape_text("plain"), "plain");
    }
}
