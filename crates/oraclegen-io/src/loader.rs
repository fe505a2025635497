//! Loading the single passage of an input file

use crate::formats::{ConvertOptions, Converters};
use crate::reader::read_files_and_dirs;
use oraclegen_core::{Passage, Result};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub annotate: bool,
}

/// First passage found at `path` (a file or a directory), or `None` when
/// the path yields no passage. Entity linking is always off for the load
/// and the read is attempted once.
pub fn load_passage(path: &Path, options: &LoadOptions) -> Result<Option<Passage>> {
    let converters = Converters::new(ConvertOptions {
        annotate: options.annotate,
        entity_linking: false,
    });
    let mut passages = read_files_and_dirs(&[path.to_path_buf()], &converters, 1, Duration::ZERO)?;
    match passages.next() {
        Some(passage) => passage.map(Some),
        None => {
            debug!(path = %path.display(), "no passage found");
            Ok(None)
        }
    }
}
