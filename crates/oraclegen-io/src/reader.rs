//! Reading passages from files and directories

use crate::formats::Converters;
use oraclegen_core::{Passage, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};
use walkdir::WalkDir;

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with('.'))
}

/// Files named by `paths`, with each directory replaced by its direct
/// children (sorted, hidden entries skipped).
pub fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}

/// Lazily converts each file, in order.
pub struct PassageReader<'c> {
    files: std::vec::IntoIter<PathBuf>,
    converters: &'c Converters,
    attempts: u32,
    delay: Duration,
}

impl PassageReader<'_> {
    fn read(&self, path: &Path) -> Result<String> {
        let mut attempt = 1;
        loop {
            match std::fs::read_to_string(path) {
                Ok(raw) => return Ok(raw),
                Err(e) if attempt < self.attempts => {
                    warn!(path = %path.display(), attempt, error = %e, "read failed, retrying");
                    std::thread::sleep(self.delay);
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn load(&self, path: &Path) -> Result<Passage> {
        self.converters.for_path(path)?;
        let raw = self.read(path)?;
        let passage = self.converters.convert(path, &raw)?;
        debug!(path = %path.display(), passage = %passage.id, "read passage");
        Ok(passage)
    }
}

impl Iterator for PassageReader<'_> {
    type Item = Result<Passage>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.files.next()?;
        Some(self.load(&path))
    }
}

/// Read every passage under `paths`. I/O failures are retried up to
/// `attempts` times, `delay` apart; conversion failures are not.
pub fn read_files_and_dirs<'c>(
    paths: &[PathBuf],
    converters: &'c Converters,
    attempts: u32,
    delay: Duration,
) -> Result<PassageReader<'c>> {
    Ok(PassageReader {
        files: expand_paths(paths)?.into_iter(),
        converters,
        attempts: attempts.max(1),
        delay,
    })
}
