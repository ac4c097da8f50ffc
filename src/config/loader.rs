//! Shift table loading functionality.
//!
//! Custom shift tables are YAML files mapping codes to "OFF" or
//! `HHMM-HHMM` strings:
//!
//! ```yaml
//! codes:
//!   A: "0700-1500"
//!   N: "2100-0700"
//!   V: "OFF"
//! ```

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ShiftCodeTable, ShiftTableFile};

/// Loads and validates a custom shift table from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the YAML file
///
/// # Returns
///
/// Returns the table on success, or an error if:
/// - The file is missing (`ConfigNotFound`)
/// - The file is not valid YAML of the expected shape (`ConfigParseError`)
/// - Any non-OFF value does not parse as `HHMM-HHMM` (`InvalidShiftTable`)
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::load_shift_table;
///
/// let table = load_shift_table("./shift_table.yaml")?;
/// assert!(table.contains("A"));
/// # Ok::<(), roster_engine::error::EngineError>(())
/// ```
pub fn load_shift_table<P: AsRef<Path>>(path: P) -> EngineResult<ShiftCodeTable> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let file: ShiftTableFile =
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    let table = ShiftCodeTable::new(file.codes);
    table.validate()?;
    Ok(table)
}
