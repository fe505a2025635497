//! Error types for Oraclegen

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown setting: {0}")]
    UnknownSetting(String),

    #[error("incompatible settings: {first} and {second} cannot both be enabled")]
    IncompatibleSettings {
        first: &'static str,
        second: &'static str,
    },

    #[error("parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid transition {action}: {reason}")]
    InvalidTransition { action: String, reason: String },

    #[error("oracle reported no correct action at step {step}")]
    NoCorrectAction { step: usize },

    #[error("missing label for node {node}")]
    MissingLabel { node: String },

    #[error("step limit of {limit} exceeded before the parser finished")]
    StepLimitExceeded { limit: usize },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn invalid_transition(action: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidTransition {
            action: action.to_string(),
            reason: reason.into(),
        }
    }

    pub fn missing_label(node: impl Into<String>) -> Self {
        Self::MissingLabel { node: node.into() }
    }
}
