// src/generator.rs
use crate::cleanup;
use crate::compiler::LatexCompiler;
use crate::config::ResolvedProfile;
use crate::data::load_cv_data;
use crate::render::TemplateRenderer;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Drives the per-profile pipeline: load data, render the template, write
/// the `.tex` source, compile it and clean up the engine's leftovers.
pub struct CvGenerator {
    compiler: LatexCompiler,
}

impl CvGenerator {
    pub fn new(compiler: LatexCompiler) -> Self {
        Self { compiler }
    }

    /// Generate one profile's PDF, returning its path.
    pub fn generate(&self, profile: &ResolvedProfile) -> Result<PathBuf> {
        let data = load_cv_data(&profile.data_path)?;

        let template_dir = profile
            .template_path
            .parent()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Template path has no parent directory: {}",
                    profile.template_path.display()
                )
            })?;
        let template_name = profile
            .template_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid template file name: {}",
                    profile.template_path.display()
                )
            })?;

        let renderer = TemplateRenderer::new(template_dir)?;
        let rendered = renderer.render(template_name, &data)?;

        let output_dir = profile
            .output_path
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .to_path_buf();
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;

        let tex_path = profile.output_path.with_extension("tex");
        fs::write(&tex_path, &rendered)
            .with_context(|| format!("Failed to write tex file: {}", tex_path.display()))?;

        self.compiler.compile(&tex_path, &profile.output_path)?;

        let stem = profile
            .output_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        cleanup::remove_artifacts(&output_dir, stem);

        info!(
            profile = %profile.name,
            output = %profile.output_path.display(),
            "Generated CV"
        );
        Ok(profile.output_path.clone())
    }
}
