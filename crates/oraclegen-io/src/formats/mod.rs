//! Passage converters, keyed by source format

pub mod json;
pub mod xml;

use oraclegen_core::{Error, Passage, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Node attribute added by the entity-linking service.
pub const WIKI_ATTR: &str = "wiki";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Add `norm` and `position` attributes to every terminal.
    pub annotate: bool,
    /// Keep entity-linking attributes on units.
    pub entity_linking: bool,
}

/// Parses the raw contents of `path` into a passage.
pub type FormatConverter = fn(&Path, &str) -> Result<Passage>;

/// Converter table with its options bound.
#[derive(Clone)]
pub struct Converters {
    table: BTreeMap<&'static str, FormatConverter>,
    options: ConvertOptions,
}

impl Converters {
    pub fn new(options: ConvertOptions) -> Self {
        let mut table: BTreeMap<&'static str, FormatConverter> = BTreeMap::new();
        table.insert("xml", xml::from_xml);
        table.insert("json", json::from_json);
        Self { table, options }
    }

    pub fn register(&mut self, format: &'static str, converter: FormatConverter) {
        self.table.insert(format, converter);
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    pub fn formats(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }

    /// Converter for `path`, chosen by its extension.
    pub fn for_path(&self, path: &Path) -> Result<FormatConverter> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.table
            .get(ext.as_str())
            .copied()
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))
    }

    pub fn convert(&self, path: &Path, raw: &str) -> Result<Passage> {
        let mut passage = (self.for_path(path)?)(path, raw)?;
        if self.options.annotate {
            annotate(&mut passage);
        }
        if !self.options.entity_linking {
            for node in &mut passage.nodes {
                node.attrs.remove(WIKI_ATTR);
            }
        }
        Ok(passage)
    }
}

impl Default for Converters {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

fn annotate(passage: &mut Passage) {
    for (i, terminal) in passage.terminals.iter_mut().enumerate() {
        terminal.attrs.insert("norm".into(), terminal.text.to_lowercase());
        terminal.attrs.insert("position".into(), (i + 1).to_string());
    }
}
