//! Configuration types for the roster calendar engine.
//!
//! The shift table and the heuristic scan limits are explicit configuration
//! values passed into every entry point; there is no process-wide mutable
//! default beyond the constant baseline table.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveTime;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The shift-table value meaning "no work, all-day".
pub const OFF_SENTINEL: &str = "OFF";

/// A mapping from uppercase shift code to its table value: either the
/// OFF sentinel or a `HHMM-HHMM` interval string.
///
/// Keys are uppercased on construction because schedule cells are
/// uppercased before lookup; a mixed-case code like "HDmix" would
/// otherwise never match its own cells.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use roster_engine::config::ShiftCodeTable;
///
/// let table = ShiftCodeTable::new(HashMap::from([
///     ("A".to_string(), "0700-1500".to_string()),
///     ("V".to_string(), "OFF".to_string()),
/// ]));
/// assert!(table.contains("a"));
/// assert_eq!(table.get("A"), Some("0700-1500"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCodeTable {
    codes: HashMap<String, String>,
}

impl ShiftCodeTable {
    /// Builds a table from raw code/value pairs, uppercasing the keys.
    pub fn new(codes: HashMap<String, String>) -> Self {
        let codes = codes
            .into_iter()
            .map(|(code, value)| (code.to_uppercase(), value))
            .collect();
        Self { codes }
    }

    /// Returns true when `code` (matched case-insensitively) is in the table.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains_key(&code.to_uppercase())
    }

    /// Looks up the raw table value for `code`.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.codes.get(&code.to_uppercase()).map(String::as_str)
    }

    /// Returns the number of codes in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true when the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Checks that every non-OFF value parses as a `HHMM-HHMM` interval.
    ///
    /// This is the only validation the engine performs on a table; it does
    /// not judge whether the shifts themselves are legal.
    pub fn validate(&self) -> EngineResult<()> {
        for (code, value) in &self.codes {
            if value != OFF_SENTINEL && parse_interval(value).is_none() {
                return Err(EngineError::InvalidShiftTable {
                    code: code.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ShiftCodeTable {
    /// The constant baseline table of the scheduling organization.
    fn default() -> Self {
        let codes = [
            ("IV", "0600-1400"),
            ("A", "0700-1500"),
            ("BH", "0700-1500"),
            ("C", "0700-1500"),
            ("D", "0700-1500"),
            ("HDMIX", "0700-1500"),
            ("W", "0700-1500"),
            ("R", "0700-1500"),
            ("B", "0700-1500"),
            ("F", "0700-1500"),
            ("G", "0700-1500"),
            ("YC", "0700-1500"),
            ("2ED", "0800-1600"),
            ("CF", "0800-1600"),
            ("6", "0900-1700"),
            ("9", "0900-2100"),
            ("E1", "1300-2100"),
            ("E", "1500-2300"),
            ("EC", "1500-2300"),
            ("EIV", "1500-2300"),
            ("ED", "1600-0000"),
            ("N", "2100-0700"),
            ("13", "2300-0700"),
            ("5", "0700-1700"),
            ("7", "0700-1900"),
            ("IP", "0800-1600"),
            ("IH", "0800-1600"),
            ("T", "0800-1400"),
            ("V", "OFF"),
            ("-", "OFF"),
            ("CL", "0800-1600"),
            ("HD", "0800-1600"),
            ("IM", "0800-1400"),
            ("PJ", "0700-1300"),
        ];
        Self {
            codes: codes
                .into_iter()
                .map(|(c, v)| (c.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Parses a `HHMM-HHMM` table value into a (start, end) pair.
///
/// Both sides must be exactly four digits with a valid 24-hour reading.
/// An end before the start is accepted; it denotes an overnight shift.
pub fn parse_interval(value: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (start, end) = value.split_once('-')?;
    Some((parse_shift_time(start)?, parse_shift_time(end)?))
}

/// Parses one `HHMM` token into a time-of-day with zero seconds.
pub fn parse_shift_time(token: &str) -> Option<NaiveTime> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: u32 = token[..2].parse().ok()?;
    let minutes: u32 = token[2..].parse().ok()?;
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

/// Heuristic scan limits for grid parsing.
///
/// The defaults reproduce the conventions the engine was tuned on
/// (rosters fit in the first 50 rows, names sit in the first couple of
/// non-date columns); they are configuration, not hard constants.
#[derive(Debug, Clone)]
pub struct ScanLimits {
    /// Highest row index (exclusive) scanned for employee rows.
    pub employee_row_scan: usize,
    /// Number of non-date columns shortlisted for the employee search
    /// before falling back to all non-date columns.
    pub candidate_column_shortlist: usize,
    /// Optional wall-clock budget per call, checked cooperatively before
    /// expensive loop stages.
    pub time_budget: Option<Duration>,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            employee_row_scan: 50,
            candidate_column_shortlist: 2,
            time_budget: None,
        }
    }
}

/// On-disk shape of a custom shift table file.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftTableFile {
    /// Map of shift code to "OFF" or "HHMM-HHMM".
    pub codes: HashMap<String, String>,
}
