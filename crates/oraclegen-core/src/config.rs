//! Parser configuration
//!
//! A [`ParserConfig`] is a plain value built per passage: file-level
//! [`ParserOptions`], then the overrides of one [`Settings`](crate::Settings),
//! then the passage's own format. It is passed explicitly to the transition
//! system; nothing here is process-wide.

use crate::error::{Error, Result};
use crate::passage::{Passage, DEFAULT_FORMAT};
use crate::settings::{Overrides, SettingValue};
use serde::{Deserialize, Serialize};

/// Tunables read from the `[parser]` section of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Formats whose units carry node labels that must be predicted.
    pub labeled_formats: Vec<String>,
    /// Multiplier on passage size bounding the number of transitions.
    pub step_factor: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            labeled_formats: vec!["amr".into()],
            step_factor: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub implicit: bool,
    pub linkage: bool,
    pub node_labels: Option<Vec<String>>,
    format: String,
    options: ParserOptions,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl ParserConfig {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            implicit: false,
            linkage: false,
            node_labels: None,
            format: DEFAULT_FORMAT.to_string(),
            options,
        }
    }

    /// Apply setting overrides. Every key must be a known setting carrying
    /// the value kind that setting uses.
    pub fn update(&mut self, overrides: &Overrides) -> Result<()> {
        for (name, value) in overrides {
            match (*name, value) {
                ("implicit", SettingValue::Flag(on)) => self.implicit = *on,
                ("linkage", SettingValue::Flag(on)) => self.linkage = *on,
                ("unlabeled", SettingValue::Labels(labels)) => self.node_labels = labels.clone(),
                ("implicit" | "linkage" | "unlabeled", other) => {
                    return Err(Error::ConfigError(format!(
                        "unexpected value {:?} for setting {}",
                        other, name
                    )))
                }
                (other, _) => return Err(Error::UnknownSetting(other.to_string())),
            }
        }
        Ok(())
    }

    pub fn set_format(&mut self, name: &str) {
        self.format = if name.is_empty() {
            DEFAULT_FORMAT.to_string()
        } else {
            name.to_string()
        };
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Whether newly created units need a label under the active format.
    pub fn labels_required(&self) -> bool {
        let tracked = self.node_labels.as_ref().map_or(true, |l| !l.is_empty());
        tracked && self.options.labeled_formats.iter().any(|f| *f == self.format)
    }

    pub fn step_limit(&self, passage: &Passage) -> usize {
        self.options.step_factor.max(1) * passage.size() + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn update_applies_settings() {
        let mut config = ParserConfig::default();
        let settings = Settings::new(["implicit", "unlabeled"]).unwrap();
        config.update(&settings.to_overrides()).unwrap();
        assert!(config.implicit);
        assert!(!config.linkage);
        assert_eq!(config.node_labels, Some(vec![]));
    }

    #[test]
    fn update_rejects_mismatched_value() {
        let mut config = ParserConfig::default();
        let mut overrides = Overrides::new();
        overrides.insert("implicit", SettingValue::Labels(None));
        assert!(matches!(config.update(&overrides), Err(Error::ConfigError(_))));
    }

    #[test]
    fn labels_follow_format_and_unlabeled() {
        let mut config = ParserConfig::default();
        assert!(!config.labels_required());
        config.set_format("amr");
        assert!(config.labels_required());
        config.node_labels = Some(vec![]);
        assert!(!config.labels_required());
    }

    #[test]
    fn empty_format_falls_back() {
        let mut config = ParserConfig::default();
        config.set_format("amr");
        config.set_format("");
        assert_eq!(config.format(), "ucca");
    }
}
