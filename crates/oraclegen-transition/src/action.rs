//! Transition actions and the action vocabulary of a run

use oraclegen_core::{ParserConfig, LINKAGE_TAGS};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Shift,
    /// Create a parent of s0 over an edge with this tag.
    Node(String),
    /// Create an implicit child of s0.
    Implicit(String),
    /// Edge s0 → s1.
    LeftEdge(String),
    /// Edge s1 → s0.
    RightEdge(String),
    LeftRemote(String),
    RightRemote(String),
    Reduce,
    /// Move s1 back to the front of the buffer.
    Swap,
    Finish,
}

impl ActionKind {
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Node(t)
            | Self::Implicit(t)
            | Self::LeftEdge(t)
            | Self::RightEdge(t)
            | Self::LeftRemote(t)
            | Self::RightRemote(t) => Some(t),
            Self::Shift | Self::Reduce | Self::Swap | Self::Finish => None,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shift => f.write_str("SHIFT"),
            Self::Node(t) => write!(f, "NODE-{}", t),
            Self::Implicit(t) => write!(f, "IMPLICIT-{}", t),
            Self::LeftEdge(t) => write!(f, "LEFT-EDGE-{}", t),
            Self::RightEdge(t) => write!(f, "RIGHT-EDGE-{}", t),
            Self::LeftRemote(t) => write!(f, "LEFT-REMOTE-{}", t),
            Self::RightRemote(t) => write!(f, "RIGHT-REMOTE-{}", t),
            Self::Reduce => f.write_str("REDUCE"),
            Self::Swap => f.write_str("SWAP"),
            Self::Finish => f.write_str("FINISH"),
        }
    }
}

/// An action plus the gold unit it realizes, if it creates one.
/// Only `kind` is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    pub kind: ActionKind,
    pub orig: Option<String>,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self { kind, orig: None }
    }

    pub fn shift() -> Self {
        Self::new(ActionKind::Shift)
    }

    pub fn reduce() -> Self {
        Self::new(ActionKind::Reduce)
    }

    pub fn swap() -> Self {
        Self::new(ActionKind::Swap)
    }

    pub fn finish() -> Self {
        Self::new(ActionKind::Finish)
    }

    pub fn node(tag: impl Into<String>, orig: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Node(tag.into()),
            orig: Some(orig.into()),
        }
    }

    pub fn implicit(tag: impl Into<String>, orig: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Implicit(tag.into()),
            orig: Some(orig.into()),
        }
    }

    /// Edge between s0 and s1; `left` means s0 is the parent.
    pub fn edge(tag: impl Into<String>, left: bool, remote: bool) -> Self {
        let tag = tag.into();
        Self::new(match (left, remote) {
            (true, false) => ActionKind::LeftEdge(tag),
            (false, false) => ActionKind::RightEdge(tag),
            (true, true) => ActionKind::LeftRemote(tag),
            (false, true) => ActionKind::RightRemote(tag),
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// The actions available under one parser configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSet {
    implicit: bool,
    linkage: bool,
    labels_required: bool,
    format: String,
}

impl ActionSet {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            implicit: config.implicit,
            linkage: config.linkage,
            labels_required: config.labels_required(),
            format: config.format().to_string(),
        }
    }

    pub fn allows(&self, kind: &ActionKind) -> bool {
        if matches!(kind, ActionKind::Implicit(_)) && !self.implicit {
            return false;
        }
        kind.tag().map_or(true, |t| self.tag_allowed(t))
    }

    /// Whether a gold edge with this tag, into an implicit unit or not,
    /// can be produced by some action in this set.
    pub fn edge_allowed(&self, tag: &str, to_implicit: bool) -> bool {
        (self.implicit || !to_implicit) && self.tag_allowed(tag)
    }

    fn tag_allowed(&self, tag: &str) -> bool {
        self.linkage || !LINKAGE_TAGS.contains(&tag)
    }

    pub fn labels_required(&self) -> bool {
        self.labels_required
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}
