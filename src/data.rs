// src/data.rs
use anyhow::{Context, Result};
use std::path::Path;

/// Load a CV data file into a generic YAML tree. The template decides which
/// keys it needs; no schema is enforced here.
pub fn load_cv_data(path: &Path) -> Result<serde_yaml::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse data file: {}", path.display()))
}
