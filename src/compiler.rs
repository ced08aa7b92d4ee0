// src/compiler.rs
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use std::{fs, io};
use tracing::debug;

const DEFAULT_PROGRAM: &str = "pdflatex";

/// Adapter around the external LaTeX engine. The engine is an opaque
/// collaborator: it reads a `.tex` file and drops a `.pdf` (plus auxiliary
/// files) into the output directory.
pub struct LatexCompiler {
    program: String,
}

impl LatexCompiler {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the engine binary from `CVFORGE_LATEX`, defaulting to
    /// `pdflatex`.
    pub fn from_env() -> Self {
        let program =
            std::env::var("CVFORGE_LATEX").unwrap_or_else(|_| DEFAULT_PROGRAM.to_string());
        Self::new(program)
    }

    /// Compile `tex_path` and leave the PDF at `output_path`. The engine
    /// writes `<tex stem>.pdf` into the output directory; when that differs
    /// from the requested name the file is renamed into place.
    pub fn compile(&self, tex_path: &Path, output_path: &Path) -> Result<()> {
        let output_dir = output_path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;

        debug!(
            program = %self.program,
            tex = %tex_path.display(),
            "Invoking LaTeX engine"
        );

        let output = match Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg(format!("-output-directory={}", output_dir.display()))
            .arg(tex_path)
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                anyhow::bail!(
                    "{} not found. Install a LaTeX distribution or point CVFORGE_LATEX at one.",
                    self.program
                );
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to execute {}", self.program));
            }
        };

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            anyhow::bail!("{} error ({}):\n{}", self.program, output.status, stdout);
        }

        let stem = tex_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid tex file name: {}", tex_path.display()))?;
        let produced = output_dir.join(format!("{}.pdf", stem));

        if produced != output_path {
            fs::rename(&produced, output_path).with_context(|| {
                format!(
                    "Failed to move {} to {}",
                    produced.display(),
                    output_path.display()
                )
            })?;
        }

        Ok(())
    }
}
