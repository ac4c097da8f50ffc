//! Per-employee schedule extraction.
//!
//! Given the canonical date axis and an employee name, reads the
//! employee's row and emits the (date, shift-code) facts it holds.

use tracing::{debug, warn};

use crate::config::ScanLimits;
use crate::error::{EngineError, EngineResult};
use crate::models::{DateAxis, RawGrid, ScheduleEntry};

/// Returns the employee-name column: the first grid column that is not a
/// date column. `None` only when every column carries dates.
pub fn employee_name_column(grid: &RawGrid, axis: &DateAxis) -> Option<usize> {
    (0..grid.column_count()).find(|col| !axis.is_date_column(*col))
}

/// Locates the employee's row by exact trimmed match in the name column.
///
/// Scans from the data-start row up to the configured row cap; the first
/// match wins.
///
/// # Errors
///
/// Returns [`EngineError::EmployeeNotFound`] when no row matches within
/// the cap, or when the grid has no non-date column at all.
pub fn locate_employee_row(
    grid: &RawGrid,
    axis: &DateAxis,
    employee: &str,
    limits: &ScanLimits,
) -> EngineResult<usize> {
    let not_found = || EngineError::EmployeeNotFound {
        name: employee.to_string(),
    };

    let name_col = employee_name_column(grid, axis).ok_or_else(not_found)?;
    let row_end = grid.row_count().min(limits.employee_row_scan);

    (axis.data_start_row..row_end)
        .find(|&row| {
            grid.cell(row, name_col)
                .is_some_and(|cell| cell.to_display_string().trim() == employee)
        })
        .ok_or_else(not_found)
}

/// Reads the (date, shift-code) sequence from one employee row.
///
/// Cells are trimmed and uppercased; empty cells and the literal "NAN"
/// denote a day with no recorded entry and emit nothing.
pub fn extract_entries(grid: &RawGrid, axis: &DateAxis, row: usize) -> Vec<ScheduleEntry> {
    let mut entries = Vec::with_capacity(axis.len());

    for axis_entry in axis.entries() {
        let Some(cell) = grid.cell(row, axis_entry.column) else {
            continue;
        };
        let code = cell.to_display_string().trim().to_uppercase();
        if code.is_empty() || code == "NAN" {
            continue;
        }
        entries.push(ScheduleEntry {
            date: axis_entry.date,
            code,
        });
    }

    debug!(row, entries = entries.len(), "Extracted schedule entries");
    entries
}

/// Locates an employee and extracts their schedule in one call.
pub fn extract_schedule(
    grid: &RawGrid,
    axis: &DateAxis,
    employee: &str,
    limits: &ScanLimits,
) -> EngineResult<Vec<ScheduleEntry>> {
    let row = locate_employee_row(grid, axis, employee, limits)?;
    let entries = extract_entries(grid, axis, row);
    if entries.is_empty() {
        warn!(employee, "Employee row holds no schedule entries");
    }
    Ok(entries)
}
