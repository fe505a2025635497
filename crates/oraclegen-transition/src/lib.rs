//! Oraclegen Transition: transition system, gold oracle and the oracle-driven runner
//!
//! The runner only knows the [`ParserState`] and [`Oracle`] traits.
//! [`TransitionState`] and [`GoldOracle`] are the bundled implementations
//! used by [`gen_actions`].

pub mod action;
pub mod oracle;
pub mod runner;
pub mod state;

pub use action::{Action, ActionKind, ActionSet};
pub use oracle::{GoldOracle, LabelInfo, Oracle};
pub use runner::{gen_actions, OracleRun};
pub use state::{ParserState, StateEdge, StateNode, TransitionState};
