//! Configuration for the roster calendar engine.
//!
//! The shift-code table (code to OFF/interval mapping) and the heuristic
//! scan limits are the engine's only configuration. Both are injected
//! explicitly; callers may load a custom table from YAML per session.

mod loader;
mod types;

pub use loader::load_shift_table;
pub use types::{OFF_SENTINEL, ScanLimits, ShiftCodeTable, ShiftTableFile, parse_interval, parse_shift_time};
