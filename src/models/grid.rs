//! Raw spreadsheet grid model.
//!
//! This module defines the [`RawGrid`] loaded from an uploaded schedule
//! spreadsheet and the typed [`CellValue`] it stores. The grid is immutable
//! once loaded and is rebuilt per request; every downstream parsing stage
//! reads it without copying.

use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use chrono::NaiveDateTime;

use crate::error::{EngineError, EngineResult};

/// A single untyped spreadsheet cell, narrowed to the value kinds the
/// schedule parser distinguishes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// An empty cell (also covers error cells such as `#DIV/0!`).
    Empty,
    /// A string cell, stored as read (untrimmed).
    Text(String),
    /// A numeric cell. Shift codes like "13" arrive as numbers.
    Number(f64),
    /// A boolean cell.
    Bool(bool),
    /// A date-formatted cell, carried with its time component.
    Date(NaiveDateTime),
}

impl CellValue {
    /// Returns true for cells that carry no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Renders the cell the way the schedule parser reads it.
    ///
    /// Integral numbers are rendered without a fractional part so that
    /// numeric shift codes ("5", "13") match their table keys.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => format!("{}", n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Date(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// The raw grid read from one schedule spreadsheet.
///
/// Rows and columns are positional; row 0 is the sheet's first row (the
/// header row in most schedule layouts). Cell (0,0) is the schedule-year
/// anchor cell.
#[derive(Debug, Clone)]
pub struct RawGrid {
    rows: Vec<Vec<CellValue>>,
}

impl RawGrid {
    /// Builds a grid from in-memory rows.
    ///
    /// Returns `MalformedInput` for a zero-row grid; every other shape is
    /// accepted (ragged rows read as empty cells past their end).
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> EngineResult<Self> {
        if rows.is_empty() {
            return Err(EngineError::MalformedInput {
                path: "<memory>".to_string(),
                message: "grid contains no rows".to_string(),
            });
        }
        Ok(Self { rows })
    }

    /// Loads the first worksheet of a spreadsheet file into a grid.
    ///
    /// The format is detected from the file contents (`.xlsx`, `.xls` and
    /// `.ods` are supported via calamine). An unreadable file, a workbook
    /// with no sheets, or an empty first sheet all fail with
    /// [`EngineError::MalformedInput`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_engine::models::RawGrid;
    ///
    /// let grid = RawGrid::from_path("/tmp/schedule.xlsx")?;
    /// println!("{} rows", grid.row_count());
    /// # Ok::<(), roster_engine::error::EngineError>(())
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let mut workbook = open_workbook_auto(path).map_err(|e| EngineError::MalformedInput {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| EngineError::MalformedInput {
                path: path_str.clone(),
                message: "workbook contains no sheets".to_string(),
            })?;

        let range =
            workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| EngineError::MalformedInput {
                    path: path_str.clone(),
                    message: format!("failed to read sheet '{}': {}", sheet_name, e),
                })?;

        let rows: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();

        if rows.is_empty() {
            return Err(EngineError::MalformedInput {
                path: path_str,
                message: format!("sheet '{}' is empty", sheet_name),
            });
        }

        Ok(Self { rows })
    }

    /// Returns the cell at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Returns the literal value of cell (0,0), the schedule-year anchor.
    pub fn anchor_cell(&self) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.cell(0, 0).unwrap_or(&EMPTY)
    }

    /// Returns the number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the widest row length, used as the column count.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns one row of the grid, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(Vec::as_slice)
    }
}

/// Narrows a calamine cell to the parser's [`CellValue`].
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        // DateTime, DateTimeIso and DurationIso: let calamine interpret;
        // anything without a datetime reading is treated as empty.
        other => other
            .as_datetime()
            .map(CellValue::Date)
            .unwrap_or(CellValue::Empty),
    }
}
