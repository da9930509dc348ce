//! Build errors for state and process builders.

use crate::core::StateError;
use thiserror::Error;

/// Errors that can occur when building states and process definitions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error(transparent)]
    State(#[from] StateError),
}
