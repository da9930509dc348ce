//! Process definitions: the set of states making up one process.
//!
//! A definition exclusively owns its states and records which one a driver
//! should start from. It offers lookup and trigger helpers but never tracks
//! a current state. Cross-references between states are only checked by
//! [`ProcessDefinition::validate`], which reports ALL violations at once
//! using Stillwater's `Validation` instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use stateflow::builder::{ProcessBuilder, StateBuilder};
//! use stateflow::core::Transition;
//! use serde_json::{json, Value};
//!
//! let process = ProcessBuilder::<Value>::new("order")
//!     .initial("new")
//!     .state(StateBuilder::new("new").event(Transition::new("pay", "paid")))
//!     .unwrap()
//!     .state(StateBuilder::new("paid"))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert!(process.validate().is_success());
//! assert_eq!(
//!     process.trigger("new", "pay", &json!({})).unwrap(),
//!     Some("paid".to_string())
//! );
//! ```

pub mod violations;

pub use violations::DefinitionViolation;

use crate::core::{ElementKind, Event, Named, NamedCollection, State, StateError};
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Named set of states plus the name of the initial one.
#[derive(Debug)]
pub struct ProcessDefinition<P = Value> {
    name: String,
    initial: String,
    states: NamedCollection<State<P>>,
}

impl<P> ProcessDefinition<P> {
    /// Create a definition, rejecting duplicate state names.
    ///
    /// The initial state is not required to exist here; see [`Self::validate`].
    pub fn new(
        name: impl Into<String>,
        initial: impl Into<String>,
        states: Vec<State<P>>,
    ) -> Result<Self, StateError> {
        Ok(Self {
            name: name.into(),
            initial: initial.into(),
            states: NamedCollection::new(ElementKind::State, states)?,
        })
    }

    /// Process name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the state a driver starts from.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// The initial state, if it is defined.
    pub fn initial_state(&self) -> Result<&State<P>, StateError> {
        self.states.get(&self.initial)
    }

    /// States in definition order.
    pub fn states(&self) -> &[State<P>] {
        self.states.all()
    }

    /// True if a state with exactly this name exists.
    pub fn has_state(&self, name: &str) -> bool {
        self.states.has(name)
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Result<&State<P>, StateError> {
        self.states.get(name)
    }

    /// Trigger `event` on the state called `state`.
    ///
    /// Fails with `NotFound` when either the state or the event is unknown.
    pub fn trigger(
        &self,
        state: &str,
        event: &str,
        payload: &P,
    ) -> Result<Option<String>, StateError> {
        self.state(state)?.trigger_event(event, payload)
    }

    /// Check every cross-reference, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<DefinitionViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionViolation>>> = Vec::new();

        // Initial state must exist
        checks.push(if self.states.has(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(DefinitionViolation::UnknownInitialState {
                name: self.initial.clone(),
            })
        });

        // Every statically known target must exist
        for state in self.states.iter() {
            for event in state.events() {
                for target in event.targets() {
                    if !self.states.has(target) {
                        checks.push(Validation::fail(DefinitionViolation::DanglingTarget {
                            state: state.name().to_string(),
                            event: event.name().to_string(),
                            target: target.to_string(),
                        }));
                    }
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
