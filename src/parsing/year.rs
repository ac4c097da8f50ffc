//! Schedule-year resolution from the grid's anchor cell.
//!
//! The top-left cell of a schedule grid carries the operational year the
//! roster belongs to. Resolution never fails; when the cell is unusable
//! the engine falls back to next year and logs a warning, so an odd
//! anchor cell degrades the year mapping instead of aborting the upload.

use chrono::{Datelike, Local};
use tracing::warn;

use crate::models::{CellValue, ScheduleYear};

/// Resolves the schedule-year anchor from cell (0,0).
///
/// - A numeric cell inside [`ScheduleYear::VALID_RANGE`] is used directly.
/// - A string cell contributes its first embedded 4-digit year inside the
///   valid range (so "Roster 2026" works).
/// - A date-formatted cell contributes its year component.
/// - Anything else falls back to the current year plus one.
///
/// # Example
///
/// ```
/// use roster_engine::models::{CellValue, ScheduleYear};
/// use roster_engine::parsing::resolve_schedule_year;
///
/// let year = resolve_schedule_year(&CellValue::Number(2026.0));
/// assert_eq!(year, ScheduleYear(2026));
/// ```
pub fn resolve_schedule_year(cell00: &CellValue) -> ScheduleYear {
    let candidate = match cell00 {
        CellValue::Number(n) if n.fract() == 0.0 => in_valid_range(*n as i32),
        CellValue::Text(s) => extract_year_from_text(s),
        CellValue::Date(dt) => in_valid_range(dt.year()),
        _ => None,
    };

    match candidate {
        Some(year) => ScheduleYear(year),
        None => {
            let fallback = Local::now().year() + 1;
            warn!(
                cell = %cell00.to_display_string(),
                fallback,
                "Anchor cell did not yield a usable schedule year; falling back"
            );
            ScheduleYear(fallback)
        }
    }
}

fn in_valid_range(year: i32) -> Option<i32> {
    ScheduleYear::VALID_RANGE.contains(&year).then_some(year)
}

/// Scans a string for its first 4-digit-run reading as a valid year.
fn extract_year_from_text(s: &str) -> Option<i32> {
    let bytes = s.as_bytes();
    for window_start in 0..bytes.len().saturating_sub(3) {
        let window = &bytes[window_start..window_start + 4];
        if window.iter().all(u8::is_ascii_digit) {
            // A longer digit run (e.g. "20260") is not a year.
            let preceded_by_digit =
                window_start > 0 && bytes[window_start - 1].is_ascii_digit();
            let followed_by_digit = bytes
                .get(window_start + 4)
                .is_some_and(u8::is_ascii_digit);
            if preceded_by_digit || followed_by_digit {
                continue;
            }
            let year: i32 = s[window_start..window_start + 4].parse().ok()?;
            if let Some(year) = in_valid_range(year) {
                return Some(year);
            }
        }
    }
    None
}
