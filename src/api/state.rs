//! Application state for the roster engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::parsing::ScheduleEngine;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// schedule engine with its default shift table and scan limits.
#[derive(Clone)]
pub struct AppState {
    /// The shared schedule engine.
    engine: Arc<ScheduleEngine>,
}

impl AppState {
    /// Creates a new application state with the given engine.
    pub fn new(engine: ScheduleEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the schedule engine.
    pub fn engine(&self) -> &ScheduleEngine {
        &self.engine
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScheduleEngine::with_defaults())
    }
}
