//! The batch driver: discover inputs, then load, simulate and write one
//! oracle per input file and settings combination

use crate::config::{OracleConfig, PathsConfig};
use oraclegen_core::{ParserConfig, ParserOptions, Result, Settings};
use oraclegen_io::{expand_paths, load_passage, oracle_path, split_files, write_oracle, LoadOptions};
use oraclegen_transition::gen_actions;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverConfig {
    pub paths: PathsConfig,
    pub parser: ParserOptions,
    pub load: LoadOptions,
    /// Files or directories to process. Empty means discover the splits
    /// under `paths.data_dir`.
    pub inputs: Vec<PathBuf>,
}

impl From<OracleConfig> for DriverConfig {
    fn from(config: OracleConfig) -> Self {
        Self {
            paths: config.paths,
            parser: config.parser,
            load: LoadOptions::default(),
            inputs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Artifacts written.
    pub written: usize,
    /// (file, settings) pairs whose input held no passage.
    pub skipped: usize,
}

/// Input files in processing order.
pub fn passage_files(config: &DriverConfig) -> Result<Vec<PathBuf>> {
    if config.inputs.is_empty() {
        split_files(&config.paths.data_dir, &config.paths.splits)
    } else {
        expand_paths(&config.inputs)
    }
}

/// Generate and write the oracle of `file` under `settings`. Returns the
/// artifact path, or `None` when the file holds no passage.
pub fn produce_oracle(file: &Path, settings: &Settings, config: &DriverConfig) -> Result<Option<PathBuf>> {
    let Some(passage) = load_passage(file, &config.load)? else {
        debug!(file = %file.display(), "skipping input without a passage");
        return Ok(None);
    };

    let mut parser = ParserConfig::new(config.parser.clone());
    parser.update(&settings.to_overrides())?;
    parser.set_format(passage.format());

    let tokens = gen_actions(&passage, &parser)?;
    std::fs::create_dir_all(&config.paths.output_dir)?;
    let dest = oracle_path(&config.paths.output_dir, file, settings);
    write_oracle(&passage, &tokens, &dest)?;
    Ok(Some(dest))
}

/// Process every input under every settings combination, stopping at the
/// first error.
pub fn run(config: &DriverConfig, settings: &[Settings]) -> Result<RunSummary> {
    let files = passage_files(config)?;
    debug!(files = files.len(), settings = settings.len(), "starting run");

    let mut summary = RunSummary::default();
    for file in &files {
        for s in settings {
            match produce_oracle(file, s, config)? {
                Some(_) => summary.written += 1,
                None => summary.skipped += 1,
            }
        }
    }
    info!(written = summary.written, skipped = summary.skipped, "run complete");
    Ok(summary)
}
