//! Violations found when validating a process definition.

use thiserror::Error;

/// Structural problem in a process definition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionViolation {
    #[error("Initial state '{name}' is not defined")]
    UnknownInitialState { name: String },

    #[error("Event '{event}' in state '{state}' targets undefined state '{target}'")]
    DanglingTarget {
        state: String,
        event: String,
        target: String,
    },
}
