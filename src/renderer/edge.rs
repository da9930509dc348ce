//! Edge fragment for one event transition.

use super::{quote, Dot};

/// Directed edge from the owning state to a target, labelled with the event.
///
/// The target is not checked against the rendered states; unknown targets
/// show up as dangling identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEdge {
    from: String,
    to: String,
    label: String,
}

impl EventEdge {
    /// Edge from `from` to `to`, labelled with the event name.
    pub fn new(from: impl Into<String>, to: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: label.into(),
        }
    }

    /// Name of the state owning the event.
    pub fn source(&self) -> &str {
        &self.from
    }

    /// Name of the state the event leads to.
    pub fn target(&self) -> &str {
        &self.to
    }
}

impl Dot for EventEdge {
    fn to_dot(&self) -> String {
        format!(
            "{}->{}[label={}];",
            quote(&self.from),
            quote(&self.to),
            quote(&self.label)
        )
    }
}
