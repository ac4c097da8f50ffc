//! End-to-end schedule processing.
//!
//! [`ScheduleEngine`] wires the pipeline stages together: load grid,
//! resolve year, locate dates, then either list employees or extract one
//! employee's schedule and synthesize their calendar. Each call runs the
//! pipeline to completion on read-only data; an optional wall-clock
//! budget is checked cooperatively before the loop-heavy stages.

use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::config::{ScanLimits, ShiftCodeTable};
use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarPayload, EmployeeListing, RawGrid};

use super::dates::locate_date_axis;
use super::employees::locate_employees;
use super::extract::extract_schedule;
use super::synthesize::synthesize_events;
use super::year::resolve_schedule_year;

/// Cooperative deadline for one pipeline call.
struct Deadline {
    started: Instant,
    budget: Option<std::time::Duration>,
}

impl Deadline {
    fn start(limits: &ScanLimits) -> Self {
        Self {
            started: Instant::now(),
            budget: limits.time_budget,
        }
    }

    /// Fails with `Timeout` once the budget is spent. A no-op without one.
    fn check(&self) -> EngineResult<()> {
        let Some(budget) = self.budget else {
            return Ok(());
        };
        let elapsed = self.started.elapsed();
        if elapsed >= budget {
            return Err(EngineError::Timeout {
                elapsed_ms: elapsed.as_millis() as u64,
                budget_ms: budget.as_millis() as u64,
            });
        }
        Ok(())
    }
}

/// The schedule-to-calendar engine.
///
/// Holds the default shift table and the scan limits; both may be
/// overridden per call. The engine itself is stateless across calls and
/// safe to share behind an `Arc`.
///
/// # Example
///
/// ```no_run
/// use roster_engine::parsing::ScheduleEngine;
///
/// let engine = ScheduleEngine::with_defaults();
/// let listing = engine.list_employees("/tmp/schedule.xlsx")?;
/// for name in &listing.employees {
///     let payload = engine.generate_calendar("/tmp/schedule.xlsx", name, None)?;
///     println!("{}: {} events", name, payload.events.len());
/// }
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleEngine {
    table: ShiftCodeTable,
    limits: ScanLimits,
}

impl ScheduleEngine {
    /// Creates an engine with an explicit table and limits.
    pub fn new(table: ShiftCodeTable, limits: ScanLimits) -> Self {
        Self { table, limits }
    }

    /// Creates an engine with the baseline table and default limits.
    pub fn with_defaults() -> Self {
        Self::new(ShiftCodeTable::default(), ScanLimits::default())
    }

    /// Returns the engine's default shift table.
    pub fn table(&self) -> &ShiftCodeTable {
        &self.table
    }

    /// Lists the employees found in a schedule file.
    ///
    /// # Errors
    ///
    /// `MalformedInput` when the file cannot be read, `NoDateColumnsFound`
    /// when the grid has no date axis, `Timeout` past the budget.
    pub fn list_employees<P: AsRef<Path>>(&self, path: P) -> EngineResult<EmployeeListing> {
        let grid = RawGrid::from_path(&path)?;
        info!(
            path = %path.as_ref().display(),
            rows = grid.row_count(),
            columns = grid.column_count(),
            "Loaded schedule grid"
        );
        self.list_employees_in_grid(&grid)
    }

    /// Lists the employees found in an already-loaded grid.
    pub fn list_employees_in_grid(&self, grid: &RawGrid) -> EngineResult<EmployeeListing> {
        let deadline = Deadline::start(&self.limits);

        let year = resolve_schedule_year(grid.anchor_cell());
        let axis = locate_date_axis(grid, year)?;
        info!(anchor = year.0, dates = axis.len(), "Resolved date axis");

        deadline.check()?;
        let employees = locate_employees(grid, &axis, &self.table, &self.limits);
        info!(count = employees.len(), "Employee listing complete");

        Ok(EmployeeListing {
            employees,
            start_date: axis.earliest(),
        })
    }

    /// Generates the calendar payload for one employee of a schedule file.
    ///
    /// `table_override` replaces the engine's default shift table for this
    /// call only (a session-scoped custom table).
    ///
    /// # Errors
    ///
    /// `MalformedInput`, `NoDateColumnsFound`, `EmployeeNotFound` and
    /// `Timeout` abort the call; unknown codes and malformed cells degrade
    /// into placeholder events or skipped entries instead.
    pub fn generate_calendar<P: AsRef<Path>>(
        &self,
        path: P,
        employee: &str,
        table_override: Option<&ShiftCodeTable>,
    ) -> EngineResult<CalendarPayload> {
        let grid = RawGrid::from_path(&path)?;
        self.generate_calendar_in_grid(&grid, employee, table_override)
    }

    /// Generates the calendar payload for one employee of a loaded grid.
    pub fn generate_calendar_in_grid(
        &self,
        grid: &RawGrid,
        employee: &str,
        table_override: Option<&ShiftCodeTable>,
    ) -> EngineResult<CalendarPayload> {
        let deadline = Deadline::start(&self.limits);
        let table = table_override.unwrap_or(&self.table);

        let year = resolve_schedule_year(grid.anchor_cell());
        let axis = locate_date_axis(grid, year)?;

        deadline.check()?;
        let entries = extract_schedule(grid, &axis, employee, &self.limits)?;

        deadline.check()?;
        let events = synthesize_events(&entries, table);
        info!(
            employee,
            entries = entries.len(),
            events = events.len(),
            "Calendar generation complete"
        );

        Ok(CalendarPayload {
            employee: employee.to_string(),
            schedule_year: year.0,
            events,
        })
    }
}
