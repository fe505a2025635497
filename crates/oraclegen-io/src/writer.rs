//! Oracle artifacts: the passage rendering, then one action token per line

use oraclegen_core::{Passage, Result, Settings};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// `<output_dir>/<input stem><settings suffix>.txt`
pub fn oracle_path(output_dir: &Path, input: &Path, settings: &Settings) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    output_dir.join(format!("{}{}.txt", stem, settings.suffix()))
}

/// Create or overwrite `dest`. Its parent directory must exist.
pub fn write_oracle<T: AsRef<str>>(passage: &Passage, tokens: &[T], dest: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(dest)?);
    writeln!(out, "{}", passage)?;
    for token in tokens {
        writeln!(out, "{}", token.as_ref())?;
    }
    out.flush()?;
    info!(path = %dest.display(), passage = %passage.id, tokens = tokens.len(), "wrote oracle");
    Ok(())
}
