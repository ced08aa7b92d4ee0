pub mod cleanup;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod data;
pub mod generator;
pub mod render;

pub use compiler::LatexCompiler;
pub use config::{Config, ResolvedProfile};
pub use generator::CvGenerator;
pub use render::TemplateRenderer;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Convenience function: generate one named CV from a config file.
pub fn generate_cv(config_path: &Path, name: &str) -> Result<PathBuf> {
    let config = Config::load(config_path)?;
    let profile = config.resolve(name)?;
    CvGenerator::new(LatexCompiler::from_env()).generate(&profile)
}
