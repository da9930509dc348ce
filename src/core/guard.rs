//! Guard predicates for controlling event transitions.
//!
//! Guards are pure boolean functions over the trigger payload that decide
//! whether a transition fires.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over a payload that determines if a transition can fire.
///
/// # Example
///
/// ```rust
/// use stateflow::core::Guard;
///
/// let only_paid = Guard::new(|amount: &u32| *amount > 0);
///
/// assert!(only_paid.check(&10));
/// assert!(!only_paid.check(&0));
/// ```
pub struct Guard<P> {
    predicate: Arc<dyn Fn(&P) -> bool + Send + Sync>,
}

impl<P> Guard<P> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows a transition for this payload.
    pub fn check(&self, payload: &P) -> bool {
        (self.predicate)(payload)
    }
}

impl<P> Clone for Guard<P> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<P> fmt::Debug for Guard<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn guard_allows_matching_payloads() {
        let guard = Guard::new(|p: &Value| p["approved"] == json!(true));

        assert!(guard.check(&json!({"approved": true})));
        assert!(!guard.check(&json!({"approved": false})));
        assert!(!guard.check(&json!({})));
    }

    #[test]
    fn guard_is_deterministic() {
        let payload = json!({"amount": 5});
        let guard = Guard::new(|p: &Value| p["amount"].as_u64().unwrap_or(0) > 3);

        assert_eq!(guard.check(&payload), guard.check(&payload));
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|n: &i32| n % 2 == 0);
        let cloned = guard.clone();

        assert!(cloned.check(&4));
        assert!(!cloned.check(&3));
    }
}
