//! Parser state machine
//!
//! [`TransitionState`] is a bottom-up stack/buffer system. The root unit
//! starts on the stack and the terminals fill the buffer in order. Units
//! created by `NODE`/`IMPLICIT` are pushed to the front of the buffer.

use crate::action::{Action, ActionKind};
use oraclegen_core::{Error, Passage, Result};
use std::collections::VecDeque;
use std::fmt;

/// The contract the oracle runner drives.
pub trait ParserState {
    type Action: fmt::Display;
    type Label: fmt::Display;

    fn transition(&mut self, action: &Self::Action) -> Result<()>;

    /// Label the unit created by the last transition.
    fn label_node(&mut self, label: Self::Label) -> Result<()>;

    fn need_label(&self) -> bool;

    fn finished(&self) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateNode {
    pub index: usize,
    /// Id of the gold terminal or unit this node stands for.
    pub orig: Option<String>,
    pub text: Option<String>,
    pub label: Option<String>,
    pub implicit: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateEdge {
    pub parent: usize,
    pub child: usize,
    pub tag: String,
    pub remote: bool,
}

#[derive(Clone, Debug)]
pub struct TransitionState {
    nodes: Vec<StateNode>,
    edges: Vec<StateEdge>,
    stack: Vec<usize>,
    buffer: VecDeque<usize>,
    labels_required: bool,
    pending_label: Option<usize>,
    finished: bool,
}

impl TransitionState {
    pub fn new(passage: &Passage, labels_required: bool) -> Self {
        let mut nodes = vec![StateNode {
            index: 0,
            orig: Some(passage.root.clone()),
            text: None,
            label: None,
            implicit: false,
        }];
        nodes.extend(passage.terminals.iter().enumerate().map(|(i, t)| StateNode {
            index: i + 1,
            orig: Some(t.id.clone()),
            text: Some(t.text.clone()),
            label: None,
            implicit: false,
        }));
        let buffer = (1..nodes.len()).collect();
        Self {
            nodes,
            edges: Vec::new(),
            stack: vec![0],
            buffer,
            labels_required,
            pending_label: None,
            finished: false,
        }
    }

    pub fn nodes(&self) -> &[StateNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&StateNode> {
        self.nodes.get(index)
    }

    pub fn edges(&self) -> &[StateEdge] {
        &self.edges
    }

    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    pub fn buffer(&self) -> &VecDeque<usize> {
        &self.buffer
    }

    /// Stack element `depth` positions below the top (s0, s1, ...).
    pub fn stack_node(&self, depth: usize) -> Option<&StateNode> {
        let len = self.stack.len();
        if depth >= len {
            return None;
        }
        self.nodes.get(self.stack[len - 1 - depth])
    }

    /// The unit awaiting a label, if any.
    pub fn pending_label(&self) -> Option<&StateNode> {
        self.pending_label.and_then(|i| self.nodes.get(i))
    }

    fn top(&self, action: &Action, depth: usize) -> Result<usize> {
        let len = self.stack.len();
        if depth >= len {
            return Err(Error::invalid_transition(
                action,
                format!("stack has {} element(s)", len),
            ));
        }
        Ok(self.stack[len - 1 - depth])
    }

    fn create(&mut self, orig: Option<String>, implicit: bool) -> usize {
        let index = self.nodes.len();
        self.nodes.push(StateNode {
            index,
            orig,
            text: None,
            label: None,
            implicit,
        });
        self.buffer.push_front(index);
        if self.labels_required {
            self.pending_label = Some(index);
        }
        index
    }

    fn add_edge(&mut self, action: &Action, parent: usize, child: usize, tag: &str, remote: bool) -> Result<()> {
        let edge = StateEdge {
            parent,
            child,
            tag: tag.to_string(),
            remote,
        };
        if self.edges.contains(&edge) {
            return Err(Error::invalid_transition(action, "edge already exists"));
        }
        self.edges.push(edge);
        Ok(())
    }
}

impl ParserState for TransitionState {
    type Action = Action;
    type Label = String;

    fn transition(&mut self, action: &Action) -> Result<()> {
        if self.finished {
            return Err(Error::invalid_transition(action, "parser already finished"));
        }
        if self.pending_label.is_some() {
            return Err(Error::invalid_transition(action, "a node label is pending"));
        }
        match &action.kind {
            ActionKind::Shift => {
                let next = self
                    .buffer
                    .pop_front()
                    .ok_or_else(|| Error::invalid_transition(action, "buffer is empty"))?;
                self.stack.push(next);
            }
            ActionKind::Node(tag) => {
                let s0 = self.top(action, 0)?;
                let parent = self.create(action.orig.clone(), false);
                self.add_edge(action, parent, s0, tag, false)?;
            }
            ActionKind::Implicit(tag) => {
                let s0 = self.top(action, 0)?;
                let child = self.create(action.orig.clone(), true);
                self.add_edge(action, s0, child, tag, false)?;
            }
            ActionKind::LeftEdge(tag) | ActionKind::LeftRemote(tag) => {
                let (s0, s1) = (self.top(action, 0)?, self.top(action, 1)?);
                let remote = matches!(action.kind, ActionKind::LeftRemote(_));
                self.add_edge(action, s0, s1, tag, remote)?;
            }
            ActionKind::RightEdge(tag) | ActionKind::RightRemote(tag) => {
                let (s0, s1) = (self.top(action, 0)?, self.top(action, 1)?);
                let remote = matches!(action.kind, ActionKind::RightRemote(_));
                self.add_edge(action, s1, s0, tag, remote)?;
            }
            ActionKind::Reduce => {
                self.top(action, 0)?;
                self.stack.pop();
            }
            ActionKind::Swap => {
                let s1 = self.top(action, 1)?;
                let len = self.stack.len();
                self.stack.remove(len - 2);
                self.buffer.push_front(s1);
            }
            ActionKind::Finish => self.finished = true,
        }
        Ok(())
    }

    fn label_node(&mut self, label: String) -> Result<()> {
        let index = self
            .pending_label
            .take()
            .ok_or_else(|| Error::invalid_transition(&label, "no node awaits a label"))?;
        self.nodes[index].label = Some(label);
        Ok(())
    }

    fn need_label(&self) -> bool {
        self.pending_label.is_some()
    }

    fn finished(&self) -> bool {
        self.finished
    }
}
