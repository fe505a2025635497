//! JSON passages: the serde form of [`Passage`]

use oraclegen_core::{Error, Passage, Result};
use std::path::Path;

pub fn from_json(path: &Path, raw: &str) -> Result<Passage> {
    let passage: Passage =
        serde_json::from_str(raw).map_err(|e| Error::parse(path.display().to_string(), e.to_string()))?;
    if passage.node(&passage.root).is_none() && !passage.nodes.is_empty() {
        return Err(Error::parse(
            path.display().to_string(),
            format!("root {} is not a unit of the passage", passage.root),
        ));
    }
    Ok(passage)
}

pub fn to_json(passage: &Passage) -> Result<String> {
    Ok(serde_json::to_string_pretty(passage)?)
}
