//! Oraclegen configuration
//!
//! Loaded from TOML at startup, falls back to defaults if no config file
//! exists. CLI flags override individual values afterwards.

use oraclegen_core::ParserOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Where inputs are discovered and artifacts written.
    pub paths: PathsConfig,
    /// Parser tunables shared by every settings combination.
    pub parser: ParserOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root holding one directory per split.
    pub data_dir: PathBuf,
    /// Directory receiving the oracle artifacts.
    pub output_dir: PathBuf,
    /// Split directories under `data_dir`, processed in this order.
    pub splits: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/raw"),
            output_dir: PathBuf::from("data/oracles"),
            splits: vec!["dev-xml".into(), "train-xml".into()],
        }
    }
}

impl OracleConfig {
    /// Load from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// The current config as TOML (for generating a default config file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
