//! Date-column location.
//!
//! Recovers the schedule's date axis from the raw grid using a two-pass
//! strategy: date headers first, then the first data row. The result is
//! the canonical [`DateAxis`] every downstream stage consumes, so the
//! "dates were actually in row 1" case is normalized exactly once.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{CellValue, DateAxis, DateAxisEntry, RawGrid, ScheduleYear};

/// Date formats carrying their own year.
const FULL_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y"];

/// Datetime string formats; the time component is discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Day-month formats without a year. A placeholder year is appended for
/// parsing; it is replaced by the rollback rule afterwards.
const DAY_MONTH_FORMATS: &[&str] = &["%d/%m %Y", "%d.%m %Y", "%d-%m %Y", "%d %b %Y", "%b %d %Y"];

/// Placeholder year used when parsing day-month strings. Leap, so that
/// "29.02" survives parsing and fails (if at all) at re-anchoring.
const PLACEHOLDER_YEAR: &str = "2000";

/// Attempts to read a cell as a calendar date.
///
/// Native date cells are taken as-is; string cells are matched against a
/// fixed list of date, datetime and day-month formats. The year of the
/// result is raw: callers re-anchor it onto the schedule year.
pub fn try_parse_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Date(dt) => Some(dt.date()),
        CellValue::Text(s) => parse_date_str(s),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in FULL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    // "01.12." style trailing dots are common in day-month headers.
    let padded = format!("{} {}", s.trim_end_matches('.'), PLACEHOLDER_YEAR);
    for fmt in DAY_MONTH_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&padded, fmt) {
            return Some(date);
        }
    }
    None
}

/// Locates the date columns of a grid and resolves them into a [`DateAxis`].
///
/// Pass 1 scans the header row (row 0); if no header cell parses as a
/// date, pass 2 scans the first data row (row 1), in which case the data
/// region starts one row later. Every parsed date is re-anchored onto the
/// schedule year via the December-rollback rule, deduplicated by exact
/// date (first occurrence wins) and sorted ascending.
///
/// # Errors
///
/// Returns [`EngineError::NoDateColumnsFound`] when neither pass yields a
/// single usable date.
pub fn locate_date_axis(grid: &RawGrid, year: ScheduleYear) -> EngineResult<DateAxis> {
    let (raw_hits, data_start_row) = scan_for_dates(grid);

    if raw_hits.is_empty() {
        return Err(EngineError::NoDateColumnsFound);
    }

    // Month of the first date in encounter order, before any sorting.
    let first_month = raw_hits[0].1.month();

    let mut entries: Vec<DateAxisEntry> = Vec::with_capacity(raw_hits.len());
    for (column, raw) in raw_hits {
        let Some(date) = year.apply_to(raw) else {
            warn!(
                column,
                raw = %raw,
                anchor = year.0,
                "Date does not exist in the resolved year; skipping column"
            );
            continue;
        };
        if entries.iter().any(|e| e.date == date) {
            continue;
        }
        entries.push(DateAxisEntry { date, column });
    }

    if entries.is_empty() {
        return Err(EngineError::NoDateColumnsFound);
    }

    entries.sort_by_key(|e| e.date);

    debug!(
        dates = entries.len(),
        data_start_row,
        first_month,
        "Resolved date axis"
    );

    Ok(DateAxis::new(data_start_row, first_month, entries))
}

/// Runs the two scan passes, returning raw (column, date) hits and the
/// row index where schedule data begins.
fn scan_for_dates(grid: &RawGrid) -> (Vec<(usize, NaiveDate)>, usize) {
    let header_hits = scan_row(grid, 0);
    if !header_hits.is_empty() {
        return (header_hits, 1);
    }

    let first_row_hits = scan_row(grid, 1);
    if !first_row_hits.is_empty() {
        debug!("Found dates in first data row instead of header");
        return (first_row_hits, 2);
    }

    (Vec::new(), 1)
}

fn scan_row(grid: &RawGrid, row: usize) -> Vec<(usize, NaiveDate)> {
    let Some(cells) = grid.row(row) else {
        return Vec::new();
    };
    cells
        .iter()
        .enumerate()
        .filter_map(|(col, cell)| try_parse_date(cell).map(|date| (col, date)))
        .collect()
}
