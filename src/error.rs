//! Error types for the roster calendar engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all fatal conditions that can abort a schedule conversion. Non-fatal
//! irregularities (unknown shift codes, malformed cells) never surface here;
//! they degrade into placeholder events or skipped entries and are logged.

use thiserror::Error;

/// The main error type for the roster calendar engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     name: "Bob".to_string(),
/// };
/// assert_eq!(error.to_string(), "Could not find schedule for employee 'Bob'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The schedule file could not be read or contained no usable grid.
    #[error("Failed to read schedule file '{path}': {message}")]
    MalformedInput {
        /// The path to the file that could not be read.
        path: String,
        /// A description of what went wrong.
        message: String,
    },

    /// Neither the header row nor the first data row contained any
    /// parseable dates.
    #[error("No date columns found in the schedule (checked header row and first data row)")]
    NoDateColumnsFound,

    /// The requested employee was not present in the schedule grid.
    #[error("Could not find schedule for employee '{name}'")]
    EmployeeNotFound {
        /// The employee name that was requested.
        name: String,
    },

    /// The processing-time budget for a call was exceeded.
    #[error("Schedule processing exceeded the time budget ({elapsed_ms}ms elapsed, {budget_ms}ms allowed)")]
    Timeout {
        /// Milliseconds elapsed when the budget check fired.
        elapsed_ms: u64,
        /// The configured budget in milliseconds.
        budget_ms: u64,
    },

    /// A shift table file was not found at the specified path.
    #[error("Shift table file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A shift table file could not be parsed.
    #[error("Failed to parse shift table file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift table entry was neither the OFF sentinel nor a valid
    /// `HHMM-HHMM` interval.
    #[error("Invalid shift table entry '{code}': '{value}' is not \"OFF\" or \"HHMM-HHMM\"")]
    InvalidShiftTable {
        /// The shift code whose value was rejected.
        code: String,
        /// The rejected value.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
