//! Builder for constructing process definitions.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::State;
use crate::definition::ProcessDefinition;
use serde_json::Value;

/// Builder for process definitions with a fluent API.
pub struct ProcessBuilder<P = Value> {
    name: String,
    initial: Option<String>,
    states: Vec<State<P>>,
}

impl<P> ProcessBuilder<P> {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state name (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add a state using a builder.
    /// Returns an error if the builder fails validation.
    pub fn state(mut self, builder: StateBuilder<P>) -> Result<Self, BuildError> {
        let state = builder.build()?;
        self.states.push(state);
        Ok(self)
    }

    /// Add a pre-built state.
    pub fn add_state(mut self, state: State<P>) -> Self {
        self.states.push(state);
        self
    }

    /// Build the definition.
    /// Returns an error if required fields are missing or state names collide.
    pub fn build(self) -> Result<ProcessDefinition<P>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(ProcessDefinition::new(self.name, initial, self.states)?)
    }
}
