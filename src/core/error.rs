//! Errors raised by the state/event core.

use std::fmt;
use thiserror::Error;

/// Kind of element a name-keyed collection holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Event,
    Flag,
    State,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Event => "event",
            Self::Flag => "flag",
            Self::State => "state",
        };
        f.write_str(kind)
    }
}

/// Errors that can occur when building or querying states.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateError {
    #[error("Invalid state name, can not be empty string")]
    InvalidName,

    #[error("Duplicate {kind} name '{name}'")]
    DuplicateName { kind: ElementKind, name: String },

    #[error("No {kind} named '{name}'")]
    NotFound { kind: ElementKind, name: String },
}

impl StateError {
    /// True when the error reports a failed lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
