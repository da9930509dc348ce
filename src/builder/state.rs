//! Builder for constructing states.

use crate::builder::error::BuildError;
use crate::core::{AttributeBag, BoxedEvent, Event, Flag, State};
use serde_json::Value;

/// Fluent builder collecting the events, flags and attributes of one state.
///
/// All invariants are checked once, in [`StateBuilder::build`].
pub struct StateBuilder<P = Value> {
    name: String,
    events: Vec<BoxedEvent<P>>,
    flags: Vec<Flag>,
    attributes: AttributeBag,
}

impl<P> StateBuilder<P> {
    /// Create a builder for the state called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
            flags: Vec::new(),
            attributes: AttributeBag::new(),
        }
    }

    /// Add an event.
    pub fn event<E>(mut self, event: E) -> Self
    where
        E: Event<P> + Send + Sync + 'static,
    {
        self.events.push(Box::new(event));
        self
    }

    /// Add an already boxed event.
    pub fn boxed_event(mut self, event: BoxedEvent<P>) -> Self {
        self.events.push(event);
        self
    }

    /// Add a flag.
    pub fn flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    /// Set an attribute, replacing any earlier value under the same key.
    pub fn attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Build the state.
    /// Returns an error for an empty name or duplicate event/flag names.
    pub fn build(self) -> Result<State<P>, BuildError> {
        Ok(State::new(self.name, self.events, self.flags, self.attributes)?)
    }
}
