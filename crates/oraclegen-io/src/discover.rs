//! Input discovery under the data directory

use globset::{Glob, GlobSet, GlobSetBuilder};
use oraclegen_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

fn split_matcher(split: &str) -> Result<GlobSet> {
    let glob = Glob::new(&format!("{}/*", split))
        .map_err(|e| Error::ConfigError(format!("invalid split {}: {}", split, e)))?;
    GlobSetBuilder::new()
        .add(glob)
        .build()
        .map_err(|e| Error::ConfigError(format!("invalid split {}: {}", split, e)))
}

/// Files directly inside `<data_dir>/<split>` for each split: sorted within
/// a split, splits in the given order. Missing split directories contribute
/// nothing.
pub fn split_files(data_dir: &Path, splits: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for split in splits {
        let matcher = split_matcher(split)?;
        let mut found: Vec<PathBuf> = WalkDir::new(data_dir)
            .min_depth(2)
            .max_depth(2)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                let rel = e.path().strip_prefix(data_dir).unwrap_or(e.path());
                matcher.is_match(rel)
            })
            .map(|e| e.into_path())
            .collect();
        found.sort();
        debug!(split = %split, files = found.len(), "discovered inputs");
        files.extend(found);
    }
    Ok(files)
}
