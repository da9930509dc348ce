//! Stateflow: named states, triggerable events and process diagrams
//!
//! Stateflow models a finite-state process as plain data. A state owns its
//! events, flags and metadata; triggering an event with a payload yields the
//! name of the next state, or nothing. No entity here tracks the current
//! state, so a built process can be shared read-only by any number of
//! drivers, each keeping its own position.
//!
//! # Core Concepts
//!
//! - **State**: a unique name plus its events, flags and attributes
//! - **Event**: the `trigger(payload) -> Option<next state>` contract
//! - **NamedCollection**: append-only, name-unique, insertion-ordered storage
//! - **ProcessDefinition**: the states of one process, with validation
//! - **Document**: Graphviz output assembled from node and edge fragments
//!
//! # Example
//!
//! ```rust
//! use stateflow::builder::{ProcessBuilder, StateBuilder};
//! use stateflow::core::{Flag, Guard, Transition};
//! use stateflow::renderer::{render_process, DocumentOptions};
//! use serde_json::{json, Value};
//!
//! let process = ProcessBuilder::<Value>::new("payment")
//!     .initial("new")
//!     .state(
//!         StateBuilder::new("new")
//!             .event(
//!                 Transition::new("pay", "paid")
//!                     .when(Guard::new(|p: &Value| p["amount"].as_u64() > Some(0))),
//!             )
//!             .event(Transition::new("cancel", "cancelled")),
//!     )?
//!     .state(StateBuilder::new("paid").flag(Flag::new("final")))?
//!     .state(StateBuilder::new("cancelled").flag(Flag::new("final")))?
//!     .build()?;
//!
//! let new = process.initial_state()?;
//! assert_eq!(new.trigger_event("pay", &json!({"amount": 0}))?, None);
//! assert_eq!(new.trigger_event("pay", &json!({"amount": 10}))?, Some("paid".to_string()));
//!
//! let dot = render_process(&process, DocumentOptions::default()).render();
//! assert!(dot.contains(r#""new"->"cancelled"[label="cancel"];"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod renderer;

// Re-export commonly used types
pub use builder::{BuildError, ProcessBuilder, StateBuilder};
pub use self::core::{
    AttributeBag, Event, Flag, Guard, Named, NamedCollection, State, StateError, Transition,
};
pub use definition::{DefinitionViolation, ProcessDefinition};
pub use renderer::{render_process, Document, DocumentOptions, Dot};
