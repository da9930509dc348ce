//! Process states: a name plus the events, flags and attributes it owns.
//!
//! A state never tracks whether it is "current". Drivers keep their own
//! current-state reference and advance it with the names returned from
//! [`State::trigger_event`], so a fully built state can be shared read-only.

use super::attributes::AttributeBag;
use super::collection::{Named, NamedCollection};
use super::error::{ElementKind, StateError};
use super::event::{BoxedEvent, Event};
use super::flag::Flag;
use serde_json::Value;
use std::fmt;

/// A named node in the process graph.
///
/// # Example
///
/// ```rust
/// use stateflow::core::{AttributeBag, Flag, State, Transition};
/// use serde_json::json;
///
/// let idle = State::new(
///     "idle",
///     vec![Transition::new("start", "running").boxed()],
///     vec![Flag::new("initial")],
///     AttributeBag::new(),
/// )
/// .unwrap();
///
/// assert_eq!(idle.trigger_event("start", &json!({})).unwrap(), Some("running".to_string()));
/// assert!(idle.trigger_event("missing", &json!({})).is_err());
/// assert_eq!(idle.to_string(), "idle");
/// ```
pub struct State<P = Value> {
    name: String,
    events: NamedCollection<BoxedEvent<P>>,
    flags: NamedCollection<Flag>,
    attributes: AttributeBag,
}

impl<P> State<P> {
    /// Build a state with its full set of events, flags and attributes.
    ///
    /// Fails on an empty name or when event or flag names collide.
    pub fn new(
        name: impl Into<String>,
        events: Vec<BoxedEvent<P>>,
        flags: Vec<Flag>,
        attributes: AttributeBag,
    ) -> Result<Self, StateError> {
        let name = name.into();
        if name.is_empty() {
            return Err(StateError::InvalidName);
        }

        Ok(Self {
            name,
            events: NamedCollection::new(ElementKind::Event, events)?,
            flags: NamedCollection::new(ElementKind::Flag, flags)?,
            attributes,
        })
    }

    /// State with no events, flags or attributes.
    pub fn named(name: impl Into<String>) -> Result<Self, StateError> {
        Self::new(name, Vec::new(), Vec::new(), AttributeBag::new())
    }

    /// Unique, non-empty state name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Events in declaration order.
    pub fn events(&self) -> &[BoxedEvent<P>] {
        self.events.all()
    }

    /// True if an event with exactly this name exists.
    pub fn has_event(&self, name: &str) -> bool {
        self.events.has(name)
    }

    /// Look up an event by name.
    pub fn event(&self, name: &str) -> Result<&BoxedEvent<P>, StateError> {
        self.events.get(name)
    }

    /// Flags in declaration order.
    pub fn flags(&self) -> &[Flag] {
        self.flags.all()
    }

    /// True if a flag with exactly this name exists.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.has(name)
    }

    /// Look up a flag by name.
    pub fn flag(&self, name: &str) -> Result<&Flag, StateError> {
        self.flags.get(name)
    }

    /// Metadata attached to this state.
    pub fn attributes(&self) -> &AttributeBag {
        &self.attributes
    }

    /// Mutable access to metadata. Events and flags stay fixed.
    pub fn attributes_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }

    /// Trigger the named event and return the next state name, if any.
    ///
    /// The returned name is passed through verbatim; it is not checked
    /// against any known set of states.
    pub fn trigger_event(&self, name: &str, payload: &P) -> Result<Option<String>, StateError> {
        let event = self.event(name)?;
        let next = event.trigger(payload);
        tracing::trace!(state = %self.name, event = name, next = ?next, "event triggered");
        Ok(next)
    }
}

impl<P> Named for State<P> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<P> fmt::Display for State<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl<P> fmt::Debug for State<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("events", &self.events.names().collect::<Vec<_>>())
            .field("flags", &self.flags.all())
            .field("attributes", &self.attributes)
            .finish()
    }
}
