//! Core state/event types.
//!
//! This module contains the in-memory process model:
//! - Name-keyed collections via the `Named` trait and `NamedCollection`
//! - States owning their events, flags and attributes
//! - The `Event` trigger contract plus the guarded `Transition` event
//!
//! Nothing here tracks a "current state"; that belongs to the caller.

mod attributes;
mod collection;
mod error;
mod event;
mod flag;
mod guard;
mod state;

pub use attributes::AttributeBag;
pub use collection::{Named, NamedCollection};
pub use error::{ElementKind, StateError};
pub use event::{BoxedEvent, Event, Transition};
pub use flag::Flag;
pub use guard::Guard;
pub use state::State;
