//! Oraclegen Core: Passage model, settings space, parser configuration and errors

pub mod config;
pub mod error;
pub mod passage;
pub mod settings;

pub use config::{ParserConfig, ParserOptions};
pub use error::{Error, Result};
pub use passage::*;
pub use settings::{Overrides, SettingValue, Settings};
