//! Request types for the roster engine API.
//!
//! The request layer owns receiving and persisting uploaded bytes;
//! requests therefore carry the path of an already-persisted schedule
//! file, never the file contents themselves.

use std::collections::HashMap;

use serde::Deserialize;

use crate::config::ShiftCodeTable;
use crate::error::EngineResult;

/// Request body for `POST /schedule/employees`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEmployeesRequest {
    /// Path to the uploaded schedule file.
    pub file_path: String,
}

/// Output format for a generated calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarFormat {
    /// The structured JSON payload.
    #[default]
    Json,
    /// A downloadable `text/calendar` body.
    Ics,
}

/// Request body for `POST /schedule/calendar`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateCalendarRequest {
    /// Path to the uploaded schedule file.
    pub file_path: String,
    /// The employee to generate a calendar for.
    pub employee: String,
    /// Optional session-scoped shift table overriding the default
    /// (`{ code: "OFF" | "HHMM-HHMM" }`).
    #[serde(default)]
    pub shift_codes: Option<HashMap<String, String>>,
    /// Requested output format (defaults to JSON).
    #[serde(default)]
    pub format: CalendarFormat,
}

impl GenerateCalendarRequest {
    /// Builds and validates the per-call shift table override, if any.
    pub fn table_override(&self) -> EngineResult<Option<ShiftCodeTable>> {
        match &self.shift_codes {
            None => Ok(None),
            Some(codes) => {
                let table = ShiftCodeTable::new(codes.clone());
                table.validate()?;
                Ok(Some(table))
            }
        }
    }
}
