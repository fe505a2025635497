//! Oracles: the policy that knows which actions lead to the gold passage

use crate::action::{Action, ActionSet};
use crate::state::{ParserState, StateNode, TransitionState};
use oraclegen_core::{Error, Passage, Result};
use std::collections::{BTreeMap, HashSet};

/// Extra information returned alongside a label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelInfo {
    /// Gold unit the label was read from.
    pub node: Option<String>,
}

pub trait Oracle<S: ParserState> {
    type Key: Ord;
    type Actions;

    /// All actions consistent with reaching the gold passage from `state`.
    fn get_actions(&self, state: &S, actions: &Self::Actions) -> Result<BTreeMap<Self::Key, S::Action>>;

    /// Correct label for the unit `action` just created.
    fn get_label(&self, state: &S, action: &S::Action) -> Result<(S::Label, LabelInfo)>;
}

#[derive(Clone, Debug)]
struct GoldEdge<'a> {
    parent: &'a str,
    child: &'a str,
    tag: &'a str,
    remote: bool,
    to_implicit: bool,
}

/// Static oracle over a gold [`Passage`] for [`TransitionState`].
///
/// Constructive actions (`NODE`, `IMPLICIT`, edges between s0 and s1) are
/// offered first, all at once. Otherwise s1 is swapped out when s0 still
/// owes an edge to a unit deeper in the stack, s0 is reduced when none of
/// its missing edges can still be built, and the next buffer item is
/// shifted as a last resort.
pub struct GoldOracle<'a> {
    passage: &'a Passage,
    edges: Vec<GoldEdge<'a>>,
}

/// What the state has realized so far, in gold ids.
struct Progress<'s> {
    created: HashSet<&'s str>,
    buffered: HashSet<&'s str>,
    built: HashSet<(&'s str, &'s str, &'s str, bool)>,
}

impl<'s> Progress<'s> {
    fn new(state: &'s TransitionState) -> Self {
        let orig = move |i: usize| state.node(i).and_then(|n| n.orig.as_deref());
        Self {
            created: state.nodes().iter().filter_map(|n| n.orig.as_deref()).collect(),
            buffered: state.buffer().iter().filter_map(|&i| orig(i)).collect(),
            built: state
                .edges()
                .iter()
                .filter_map(|e| Some((orig(e.parent)?, orig(e.child)?, e.tag.as_str(), e.remote)))
                .collect(),
        }
    }

    fn is_built(&self, e: &GoldEdge<'_>) -> bool {
        self.built.contains(&(e.parent, e.child, e.tag, e.remote))
    }

    fn is_pending(&self, id: &str) -> bool {
        self.buffered.contains(id) || !self.created.contains(id)
    }
}

impl<'a> GoldOracle<'a> {
    pub fn new(passage: &'a Passage) -> Self {
        let implicit: HashSet<&str> = passage
            .nodes
            .iter()
            .filter(|n| n.implicit)
            .map(|n| n.id.as_str())
            .collect();
        let edges = passage
            .nodes
            .iter()
            .flat_map(|n| {
                let implicit = &implicit;
                n.edges.iter().map(move |e| GoldEdge {
                    parent: n.id.as_str(),
                    child: e.child.as_str(),
                    tag: e.tag.as_str(),
                    remote: e.remote,
                    to_implicit: implicit.contains(e.child.as_str()),
                })
            })
            .collect();
        Self { passage, edges }
    }

    pub fn passage(&self) -> &'a Passage {
        self.passage
    }

    fn relevant<'o>(&'o self, actions: &'o ActionSet) -> impl Iterator<Item = &'o GoldEdge<'a>> + 'o {
        self.edges
            .iter()
            .filter(move |e| actions.edge_allowed(e.tag, e.to_implicit))
    }

    fn constructive(
        &self,
        s0: &StateNode,
        s1: Option<&StateNode>,
        actions: &ActionSet,
        progress: &Progress<'_>,
        found: &mut BTreeMap<String, Action>,
    ) {
        let Some(g0) = s0.orig.as_deref() else { return };
        let g1 = s1.and_then(|n| n.orig.as_deref());
        for e in self.relevant(actions) {
            let action = if e.child == g0 && !e.remote && !progress.created.contains(e.parent) {
                Action::node(e.tag, e.parent)
            } else if e.parent == g0 && e.to_implicit && !e.remote && !progress.created.contains(e.child) {
                Action::implicit(e.tag, e.child)
            } else if progress.is_built(e) {
                continue;
            } else if Some(e.child) == g1 && e.parent == g0 {
                Action::edge(e.tag, true, e.remote)
            } else if Some(e.parent) == g1 && e.child == g0 {
                Action::edge(e.tag, false, e.remote)
            } else {
                continue;
            };
            if actions.allows(&action.kind) {
                let key = format!("{}:{}", action, action.orig.as_deref().unwrap_or(""));
                found.entry(key).or_insert(action);
            }
        }
    }

    /// Far ends of the edges at `g0` that are still missing.
    fn incident(&self, g0: &str, actions: &ActionSet, progress: &Progress<'_>) -> Vec<&'a str> {
        self.relevant(actions)
            .filter(|e| !progress.is_built(e))
            .filter_map(|e| {
                if e.parent == g0 {
                    Some(e.child)
                } else if e.child == g0 {
                    Some(e.parent)
                } else {
                    None
                }
            })
            .collect()
    }

    /// s0 owes an edge to a unit below s1.
    fn buried(&self, state: &TransitionState, actions: &ActionSet, progress: &Progress<'_>) -> bool {
        let Some(g0) = state.stack_node(0).and_then(|n| n.orig.as_deref()) else { return false };
        let deeper: HashSet<&str> = (2..state.stack().len())
            .filter_map(|d| state.stack_node(d).and_then(|n| n.orig.as_deref()))
            .collect();
        !deeper.is_empty() && self.incident(g0, actions, progress).iter().any(|o| deeper.contains(*o))
    }

    fn reducible(&self, s0: &StateNode, actions: &ActionSet, progress: &Progress<'_>) -> bool {
        let Some(g0) = s0.orig.as_deref() else { return true };
        !self.incident(g0, actions, progress).iter().any(|o| progress.is_pending(o))
    }
}

impl<'a> Oracle<TransitionState> for GoldOracle<'a> {
    type Key = String;
    type Actions = ActionSet;

    fn get_actions(&self, state: &TransitionState, actions: &ActionSet) -> Result<BTreeMap<String, Action>> {
        let mut found = BTreeMap::new();
        let single = |action: Action| BTreeMap::from([(action.to_string(), action)]);

        if state.buffer().is_empty() && state.stack().len() <= 1 {
            return Ok(single(Action::finish()));
        }
        let progress = Progress::new(state);
        let Some(s0) = state.stack_node(0) else {
            return Ok(single(Action::shift()));
        };
        self.constructive(s0, state.stack_node(1), actions, &progress, &mut found);
        if !found.is_empty() {
            return Ok(found);
        }
        if self.buried(state, actions, &progress) {
            return Ok(single(Action::swap()));
        }
        if self.reducible(s0, actions, &progress) || state.buffer().is_empty() {
            Ok(single(Action::reduce()))
        } else {
            Ok(single(Action::shift()))
        }
    }

    fn get_label(&self, state: &TransitionState, action: &Action) -> Result<(String, LabelInfo)> {
        let orig = state
            .pending_label()
            .and_then(|n| n.orig.clone())
            .or_else(|| action.orig.clone())
            .ok_or_else(|| Error::missing_label(action.to_string()))?;
        let label = self
            .passage
            .node(&orig)
            .and_then(|n| n.label.clone())
            .ok_or_else(|| Error::missing_label(orig.as_str()))?;
        Ok((label, LabelInfo { node: Some(orig) }))
    }
}
