//! Oraclegen I/O: passage readers, oracle artifact writer, input discovery

pub mod discover;
pub mod formats;
pub mod loader;
pub mod reader;
pub mod writer;

pub use discover::split_files;
pub use formats::{ConvertOptions, Converters, FormatConverter};
pub use loader::{load_passage, LoadOptions};
pub use reader::{expand_paths, read_files_and_dirs, PassageReader};
pub use writer::{oracle_path, write_oracle};
