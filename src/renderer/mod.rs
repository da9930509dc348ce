//! Graphviz rendering of process graphs.
//!
//! [`Document`] only aggregates fragments produced through the [`Dot`]
//! capability and knows nothing about states. [`render_process`] is the
//! glue mapping a [`ProcessDefinition`] onto it: one [`StateNode`] per state
//! and one [`EventEdge`] per statically known event target.

mod document;
mod edge;
mod node;

pub use document::{Document, DocumentOptions, DEFAULT_DPI, DEFAULT_FONT};
pub use edge::EventEdge;
pub use node::StateNode;

use crate::core::{Event, Named};
use crate::definition::ProcessDefinition;

/// Capability of rendering to a self-contained Graphviz fragment.
pub trait Dot {
    fn to_dot(&self) -> String;
}

impl Dot for String {
    fn to_dot(&self) -> String {
        self.clone()
    }
}

impl Dot for &'static str {
    fn to_dot(&self) -> String {
        (*self).to_string()
    }
}

/// Escape backslashes and double quotes for a quoted Graphviz string.
pub(crate) fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Wrap a value in double quotes, escaped.
pub(crate) fn quote(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

/// Render a whole process: states in definition order, then their edges.
///
/// # Example
///
/// ```rust
/// use stateflow::builder::{ProcessBuilder, StateBuilder};
/// use stateflow::core::Transition;
/// use stateflow::renderer::{render_process, DocumentOptions};
/// use serde_json::Value;
///
/// let process = ProcessBuilder::<Value>::new("door")
///     .initial("closed")
///     .state(StateBuilder::new("closed").event(Transition::new("open", "opened")))
///     .unwrap()
///     .state(StateBuilder::new("opened"))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let dot = render_process(&process, DocumentOptions::default()).render();
/// assert!(dot.starts_with("digraph door {"));
/// assert!(dot.contains(r#""closed"->"opened"[label="open"];"#));
/// ```
pub fn render_process<P>(process: &ProcessDefinition<P>, options: DocumentOptions) -> Document {
    let mut document = Document::with_options(process.name(), options);

    for state in process.states() {
        document.add_state(StateNode::from_state(state));
    }
    for state in process.states() {
        for event in state.events() {
            for target in event.targets() {
                document.add_edge(EventEdge::new(state.name(), target, event.name()));
            }
        }
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_escapes_double_quotes() {
        assert_eq!(quote("plain"), r#""plain""#);
        assert_eq!(quote(r#"a"b"#), r#""a\"b""#);
    }

    #[test]
    fn quote_escapes_backslashes_before_quotes() {
        assert_eq!(quote(r"dir\"), r#""dir\\""#);
        assert_eq!(quote(r#"a\"b"#), r#""a\\\"b""#);
    }

    #[test]
    fn trailing_backslash_keeps_fragments_balanced() {
        let mut document = Document::new("p");
        document.add_state(StateNode::new(r"dir\"));
        document.add_edge(EventEdge::new(r"dir\", "b", "go"));

        let dot = document.render();
        assert!(dot.ends_with(
            r#""dir\\"[shape="box",style="rounded",label="dir\\"];"dir\\"->"b"[label="go"];}"#
        ));

        let unescaped_quotes = dot
            .char_indices()
            .filter(|&(i, c)| {
                c == '"' && dot[..i].chars().rev().take_while(|&p| p == '\\').count() % 2 == 0
            })
            .count();
        assert_eq!(unescaped_quotes % 2, 0);
    }

    #[test]
    fn string_fragments_render_verbatim() {
        assert_eq!("N".to_dot(), "N");
        assert_eq!(String::from("E").to_dot(), "E");
    }
}
