//! Oracle-driven generation of action sequences
//!
//! [`OracleRun`] owns its state machine and yields one token per transition:
//! the rendering of the lexicographically smallest correct action, followed
//! by `" <label>"` when the transition left a unit awaiting a label. The
//! token of the step that finishes the state is the last one.

use crate::action::ActionSet;
use crate::oracle::{GoldOracle, Oracle};
use crate::state::{ParserState, TransitionState};
use oraclegen_core::{Error, ParserConfig, Passage, Result};
use std::iter::FusedIterator;
use tracing::{debug, trace};

pub struct OracleRun<S, O>
where
    S: ParserState,
    O: Oracle<S>,
{
    state: S,
    oracle: O,
    actions: O::Actions,
    step_limit: usize,
    steps: usize,
    done: bool,
}

impl<S, O> OracleRun<S, O>
where
    S: ParserState,
    O: Oracle<S>,
{
    pub fn new(state: S, oracle: O, actions: O::Actions, step_limit: usize) -> Self {
        Self {
            state,
            oracle,
            actions,
            step_limit,
            steps: 0,
            done: false,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    fn step(&mut self) -> Result<String> {
        if self.steps >= self.step_limit {
            return Err(Error::StepLimitExceeded {
                limit: self.step_limit,
            });
        }
        self.steps += 1;

        let (mut token, action) = self
            .oracle
            .get_actions(&self.state, &self.actions)?
            .into_values()
            .map(|action| (action.to_string(), action))
            .min_by(|a, b| a.0.cmp(&b.0))
            .ok_or(Error::NoCorrectAction { step: self.steps })?;

        self.state.transition(&action)?;
        if self.state.need_label() {
            let (label, _) = self.oracle.get_label(&self.state, &action)?;
            token.push(' ');
            token.push_str(&label.to_string());
            self.state.label_node(label)?;
        }
        trace!(step = self.steps, %token, "transition");
        Ok(token)
    }
}

impl<S, O> Iterator for OracleRun<S, O>
where
    S: ParserState,
    O: Oracle<S>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.step();
        if result.is_err() || self.state.finished() {
            self.done = true;
        }
        Some(result)
    }
}

impl<S, O> FusedIterator for OracleRun<S, O>
where
    S: ParserState,
    O: Oracle<S>,
{
}

/// Generate the gold action sequence for `passage` under `config`.
pub fn gen_actions(passage: &Passage, config: &ParserConfig) -> Result<Vec<String>> {
    let actions = ActionSet::new(config);
    let state = TransitionState::new(passage, actions.labels_required());
    let limit = config.step_limit(passage);
    let tokens: Vec<String> =
        OracleRun::new(state, GoldOracle::new(passage), actions, limit).collect::<Result<_>>()?;
    debug!(
        passage = %passage.id,
        format = config.format(),
        steps = tokens.len(),
        "generated oracle sequence"
    );
    Ok(tokens)
}
