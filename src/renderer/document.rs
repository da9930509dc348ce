//! Graphviz document aggregating node and edge fragments.

use super::Dot;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_DPI: u32 = 75;
pub const DEFAULT_FONT: &str = "Courier";

/// Global rendering options, loadable from any serde source.
///
/// Missing fields fall back to a density of 75 and the Courier font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    pub dpi: u32,
    pub font: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            font: DEFAULT_FONT.to_string(),
        }
    }
}

/// A single named directed graph.
///
/// Nodes and edges are append-only and rendered in append order, nodes
/// first. The document name is emitted verbatim, so it must already be a
/// legal Graphviz identifier.
///
/// # Example
///
/// ```rust
/// use stateflow::renderer::Document;
///
/// let mut document = Document::new("p");
/// document.add_state("N");
/// document.add_edge("E");
///
/// assert_eq!(
///     document.render(),
///     r#"digraph p {dpi="75";pad="1";fontname="Courier";nodesep="1";rankdir="TD";ranksep="0.5";NE}"#
/// );
/// ```
pub struct Document {
    name: String,
    options: DocumentOptions,
    states: Vec<Box<dyn Dot>>,
    edges: Vec<Box<dyn Dot>>,
}

impl Document {
    /// Create an empty document with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, DocumentOptions::default())
    }

    /// Create an empty document with explicit options.
    pub fn with_options(name: impl Into<String>, options: DocumentOptions) -> Self {
        Self {
            name: name.into(),
            options,
            states: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Set the output density.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.options.dpi = dpi;
        self
    }

    /// Set the font family.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.options.font = font.into();
        self
    }

    /// Graph name, emitted verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current rendering options.
    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    /// Append a node fragment.
    pub fn add_state(&mut self, node: impl Dot + 'static) {
        self.states.push(Box::new(node));
    }

    /// Append an edge fragment.
    pub fn add_edge(&mut self, edge: impl Dot + 'static) {
        self.edges.push(Box::new(edge));
    }

    /// Number of node fragments appended.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of edge fragments appended.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Serialize the whole graph.
    pub fn render(&self) -> String {
        let mut out = format!(
            r#"digraph {} {{dpi="{}";pad="1";fontname="{}";nodesep="1";rankdir="TD";ranksep="0.5";"#,
            self.name, self.options.dpi, self.options.font
        );
        for state in &self.states {
            out.push_str(&state.to_dot());
        }
        for edge in &self.edges {
            out.push_str(&edge.to_dot());
        }
        out.push('}');

        tracing::debug!(
            document = %self.name,
            states = self.states.len(),
            edges = self.edges.len(),
            "document rendered"
        );
        out
    }
}

impl Dot for Document {
    fn to_dot(&self) -> String {
        self.render()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("states", &self.states.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}
