//! Builder API for ergonomic state and process construction.
//!
//! Builders collect parts with a fluent API and defer every invariant check
//! to `build()`, which returns a [`BuildError`] instead of panicking.

pub mod error;
pub mod process;
pub mod state;

pub use error::BuildError;
pub use process::ProcessBuilder;
pub use state::StateBuilder;
