//! Roster engine: work-schedule spreadsheet to calendar converter.
//!
//! This crate converts messy work-schedule spreadsheets into clean
//! per-employee calendars. It locates the date columns and employee rows
//! in an untyped grid, extracts each employee's shift codes, and turns
//! them into calendar events (timed work shifts, all-day OFF markers and
//! all-day unknown-code placeholders), with overnight shifts rolling
//! into the next day.
//!
//! The library exposes:
//! - [`parsing::ScheduleEngine`]: the end-to-end conversion pipeline.
//! - [`config`]: the shift-code table and its YAML loader.
//! - [`ics`]: RFC 5545 rendering of generated calendars.
//! - [`api`]: an axum router serving the pipeline over HTTP.
//!
//! # Example
//!
//! ```
//! use roster_engine::parsing::ScheduleEngine;
//!
//! let engine = ScheduleEngine::with_defaults();
//! // Codes like "A" come from the baseline shift table.
//! assert_eq!(engine.table().get("A"), Some("0700-1500"));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod ics;
pub mod models;
pub mod parsing;

pub use error::{EngineError, EngineResult};
