//! Event trigger contract and a guarded transition implementation.

use super::collection::Named;
use super::guard::Guard;

/// Boxed event as stored by a state.
pub type BoxedEvent<P> = Box<dyn Event<P> + Send + Sync>;

/// A named, triggerable unit attached to a state.
///
/// `trigger` maps a payload to the name of the next state, or `None` when
/// the event causes no transition. Implementations may have side effects;
/// the state that owns the event never inspects the returned name.
pub trait Event<P>: Named {
    /// Name of the next state, or `None` for no transition.
    fn trigger(&self, payload: &P) -> Option<String>;

    /// State names this event can lead to, for diagram rendering.
    fn targets(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Event that moves to a fixed target state, optionally behind a guard.
///
/// # Example
///
/// ```rust
/// use stateflow::core::{Event, Guard, Transition};
///
/// let start: Transition<u32> = Transition::new("start", "running");
/// assert_eq!(start.trigger(&0), Some("running".to_string()));
///
/// let pay = Transition::new("pay", "paid").when(Guard::new(|amount: &u32| *amount > 0));
/// assert_eq!(pay.trigger(&0), None);
/// assert_eq!(pay.trigger(&10), Some("paid".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Transition<P> {
    name: String,
    target: Option<String>,
    guard: Option<Guard<P>>,
}

impl<P> Transition<P> {
    /// Unconditional transition to `target`.
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: Some(target.into()),
            guard: None,
        }
    }

    /// Event that is accepted but never changes state.
    pub fn noop(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: None,
            guard: None,
        }
    }

    /// Only fire when the guard passes.
    pub fn when(mut self, guard: Guard<P>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Target state name, `None` for a no-op event.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

impl<P: 'static> Transition<P> {
    /// Box for storage in a state.
    pub fn boxed(self) -> BoxedEvent<P> {
        Box::new(self)
    }
}

impl<P> Named for Transition<P> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<P> Event<P> for Transition<P> {
    fn trigger(&self, payload: &P) -> Option<String> {
        if self.guard.as_ref().is_some_and(|g| !g.check(payload)) {
            return None;
        }
        self.target.clone()
    }

    fn targets(&self) -> Vec<&str> {
        self.target.as_deref().into_iter().collect()
    }
}
