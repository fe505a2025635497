//! Passage model: the annotated semantic graph an oracle sequence is derived from

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Format assumed when a passage carries no `format` entry in `extra`.
pub const DEFAULT_FORMAT: &str = "ucca";

/// Edge tags that belong to the linkage layer.
pub const LINKAGE_TAGS: &[&str] = &["LK", "LR", "LA"];

/// An annotated passage: ordered terminals plus a DAG of units over them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub id: String,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
    #[serde(default)]
    pub terminals: Vec<Terminal>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Id of the root unit (one of `nodes`).
    pub root: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Terminal {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub punct: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub implicit: bool,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
}

/// Outgoing edge; `child` is the id of a terminal or a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub tag: String,
    pub child: String,
    #[serde(default)]
    pub remote: bool,
}

impl Edge {
    pub fn new(tag: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            child: child.into(),
            remote: false,
        }
    }

    pub fn remote(tag: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            remote: true,
            ..Self::new(tag, child)
        }
    }

    pub fn is_linkage(&self) -> bool {
        LINKAGE_TAGS.contains(&self.tag.as_str())
    }
}

impl Terminal {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            punct: false,
            attrs: BTreeMap::new(),
        }
    }
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            implicit: false,
            edges: Vec::new(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Passage {
    pub fn new(id: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: BTreeMap::new(),
            terminals: Vec::new(),
            nodes: Vec::new(),
            root: root.into(),
        }
    }

    /// Source format, falling back to [`DEFAULT_FORMAT`].
    pub fn format(&self) -> &str {
        self.extra
            .get("format")
            .map(String::as_str)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FORMAT)
    }

    pub fn terminal(&self, id: &str) -> Option<&Terminal> {
        self.terminals.iter().find(|t| t.id == id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_terminal(&self, id: &str) -> bool {
        self.terminal(id).is_some()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Total number of graph elements: terminals, units and edges.
    pub fn size(&self) -> usize {
        self.terminals.len() + self.nodes.len() + self.edge_count()
    }

    fn render_unit(&self, id: &str, visited: &mut HashSet<String>, out: &mut String) {
        let Some(node) = self.node(id) else { return };
        if !visited.insert(node.id.clone()) {
            return;
        }
        let mut first = true;
        for edge in &node.edges {
            if !first {
                out.push(' ');
            }
            first = false;
            if edge.remote {
                out.push_str(&format!("[{}* {}]", edge.tag, edge.child));
            } else if let Some(t) = self.terminal(&edge.child) {
                if edge.tag == "Terminal" {
                    out.push_str(&t.text);
                } else {
                    out.push_str(&format!("[{} {}]", edge.tag, t.text));
                }
            } else if self.node(&edge.child).is_some_and(|c| c.implicit) {
                out.push_str(&format!("[{} IMPLICIT]", edge.tag));
            } else {
                out.push_str(&format!("[{} ", edge.tag));
                self.render_unit(&edge.child, visited, out);
                out.push(']');
            }
        }
    }
}

/// Single-line bracketed rendering of the primary tree under the root.
impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render_unit(&self.root, &mut HashSet::new(), &mut out);
        f.write_str(&out)
    }
}
