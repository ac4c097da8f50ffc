//! Employee-name location.
//!
//! Scans the non-date columns of a schedule grid for cells that look like
//! employee names. The heuristics are deliberately conservative: schedule
//! sheets mix names with shift codes, header labels and stray numbers, and
//! a false positive here surfaces as a phantom employee in the UI.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::{ScanLimits, ShiftCodeTable};
use crate::models::{DateAxis, RawGrid};

/// Words that mark a cell as a header label rather than a name.
const HEADER_WORDS: &[&str] = &[
    "shift", "code", "codes", "hour", "hours", "date", "name", "employee", "schedule", "time",
    "day", "week", "nan", "none", "null", "",
];

/// Returns true when a trimmed cell value passes the name heuristic.
///
/// A name-like token contains at least one lowercase letter, is not fully
/// uppercase, is not purely numeric, is at least two characters long, and
/// its uppercased form is not itself a shift code.
pub fn is_name_like(value: &str, table: &ShiftCodeTable) -> bool {
    if value.chars().count() < 2 {
        return false;
    }
    if !value.chars().any(char::is_lowercase) {
        return false;
    }
    if value == value.to_uppercase() {
        return false;
    }
    if value.parse::<f64>().is_ok() {
        return false;
    }
    !table.contains(value)
}

/// Returns true when a cell value should be skipped before the name
/// heuristic even runs: header labels and spreadsheet NaN artifacts.
fn is_skippable(value: &str) -> bool {
    let lowered = value.to_lowercase();
    if HEADER_WORDS.contains(&lowered.as_str()) {
        return true;
    }
    if lowered
        .split_whitespace()
        .any(|token| HEADER_WORDS.contains(&token))
    {
        return true;
    }
    lowered.contains("nan")
}

/// Locates plausible employee names in the grid's non-date columns.
///
/// Candidate columns are the grid columns not on the date axis, capped at
/// the configured shortlist (the first two by default); when the shortlist
/// finds nothing, all non-date columns are scanned. Rows are scanned from
/// the data-start row up to the configured cap.
///
/// An empty result is a legitimate outcome (a sheet with no name column),
/// not an error.
pub fn locate_employees(
    grid: &RawGrid,
    axis: &DateAxis,
    table: &ShiftCodeTable,
    limits: &ScanLimits,
) -> Vec<String> {
    let candidates: Vec<usize> = (0..grid.column_count())
        .filter(|col| !axis.is_date_column(*col))
        .collect();

    let shortlist: Vec<usize> = candidates
        .iter()
        .copied()
        .take(limits.candidate_column_shortlist)
        .collect();

    let mut names = scan_columns(grid, axis, table, limits, &shortlist);
    if names.is_empty() && shortlist.len() < candidates.len() {
        debug!("Shortlisted columns held no names; scanning all non-date columns");
        names = scan_columns(grid, axis, table, limits, &candidates);
    }

    debug!(count = names.len(), "Located employee names");
    names.into_iter().collect()
}

fn scan_columns(
    grid: &RawGrid,
    axis: &DateAxis,
    table: &ShiftCodeTable,
    limits: &ScanLimits,
    columns: &[usize],
) -> BTreeSet<String> {
    let row_end = grid.row_count().min(limits.employee_row_scan);
    let mut names = BTreeSet::new();

    for row in axis.data_start_row..row_end {
        for &col in columns {
            let Some(cell) = grid.cell(row, col) else {
                continue;
            };
            let value = cell.to_display_string();
            let trimmed = value.trim();
            if trimmed.is_empty() || is_skippable(trimmed) {
                continue;
            }
            if is_name_like(trimmed, table) {
                names.insert(trimmed.to_string());
            }
        }
    }

    names
}
