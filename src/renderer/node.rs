//! Node fragment for one state.

use super::{escape, quote, Dot};
use crate::core::{Named, State};

/// Box node labelled with the state name, with flags listed underneath.
///
/// A string `label` attribute replaces the state name in the label and a
/// string `color` attribute sets the border color. The node identifier is
/// always the state name.
#[derive(Debug, Clone, PartialEq)]
pub struct StateNode {
    id: String,
    label: String,
    flags: Vec<String>,
    color: Option<String>,
}

impl StateNode {
    /// Node labelled with its own identifier.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            flags: Vec::new(),
            color: None,
        }
    }

    /// Map a state onto a node, honouring its `label` and `color` attributes.
    pub fn from_state<P>(state: &State<P>) -> Self {
        let attributes = state.attributes();
        Self {
            id: state.name().to_string(),
            label: attributes
                .get_str("label")
                .unwrap_or_else(|| state.name())
                .to_string(),
            flags: state.flags().iter().map(|f| f.name().to_string()).collect(),
            color: attributes.get_str("color").map(str::to_string),
        }
    }

    /// Replace the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Flag names listed on a second label line.
    pub fn with_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the border color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Graphviz node identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    // User text is escaped; the `\n` line break before the flags is not.
    fn label_dot(&self) -> String {
        let mut label = format!("\"{}", escape(&self.label));
        if !self.flags.is_empty() {
            let flags: Vec<String> = self.flags.iter().map(|f| escape(f)).collect();
            label.push_str("\\n[");
            label.push_str(&flags.join(", "));
            label.push(']');
        }
        label.push('"');
        label
    }
}

impl Dot for StateNode {
    fn to_dot(&self) -> String {
        let mut out = format!(
            r#"{}[shape="box",style="rounded",label={}"#,
            quote(&self.id),
            self.label_dot()
        );
        if let Some(color) = &self.color {
            out.push_str(",color=");
            out.push_str(&quote(color));
        }
        out.push_str("];");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateBuilder;
    use crate::core::Flag;
    use serde_json::{json, Value};

    #[test]
    fn plain_node() {
        assert_eq!(
            StateNode::new("idle").to_dot(),
            r#""idle"[shape="box",style="rounded",label="idle"];"#
        );
    }

    #[test]
    fn node_from_state_lists_flags() {
        let state = StateBuilder::<Value>::new("done")
            .flag(Flag::new("final"))
            .flag(Flag::new("archived"))
            .build()
            .unwrap();

        assert_eq!(
            StateNode::from_state(&state).to_dot(),
            r#""done"[shape="box",style="rounded",label="done\n[final, archived]"];"#
        );
    }

    #[test]
    fn node_uses_label_and_color_attributes() {
        let state = StateBuilder::<Value>::new("wait")
            .attribute("label", json!("Waiting"))
            .attribute("color", json!("red"))
            .build()
            .unwrap();

        let node = StateNode::from_state(&state);

        assert_eq!(node.id(), "wait");
        assert_eq!(
            node.to_dot(),
            r#""wait"[shape="box",style="rounded",label="Waiting",color="red"];"#
        );
    }

    #[test]
    fn backslashes_in_label_and_flags_are_escaped() {
        let node = StateNode::new(r"dir\")
            .with_label(r"C:\tmp")
            .with_flags([r"a\", "b"]);

        assert_eq!(
            node.to_dot(),
            r#""dir\\"[shape="box",style="rounded",label="C:\\tmp\n[a\\, b]"];"#
        );
    }

    #[test]
    fn quotes_are_escaped() {
        let node = StateNode::new("say").with_label(r#"say "hi""#);
        assert_eq!(
            node.to_dot(),
            r#""say"[shape="box",style="rounded",label="say \"hi\""];"#
        );
    }
}
