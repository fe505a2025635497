//! Oraclegen: gold transition oracles for annotated passages
//!
//! Every input passage is simulated through a transition system under a
//! gold oracle, and the resulting action sequence is written next to the
//! passage's rendering, one artifact per settings combination.

pub mod config;
pub mod driver;

pub use config::{OracleConfig, PathsConfig};
pub use driver::{passage_files, produce_oracle, run, DriverConfig, RunSummary};

#[cfg(test)]
mod tests;
