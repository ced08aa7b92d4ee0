// src/cleanup.rs
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Everything the engine leaves behind besides the PDF, plus the rendered
/// `.tex` source itself.
pub const ARTIFACT_EXTENSIONS: &[&str] = &[
    ".aux",
    ".log",
    ".out",
    ".fls",
    ".fdb_latexmk",
    ".synctex.gz",
    ".tex",
];

/// Delete intermediate compiler artifacts for the given document stem.
/// Idempotent; absent files are skipped and removal failures only warn, so
/// cleanup can never fail a generation run.
pub fn remove_artifacts(output_dir: &Path, stem: &str) {
    for ext in ARTIFACT_EXTENSIONS {
        let artifact = output_dir.join(format!("{}{}", stem, ext));
        if !artifact.exists() {
            continue;
        }
        match fs::remove_file(&artifact) {
            Ok(()) => debug!(file = %artifact.display(), "Removed artifact"),
            Err(e) => warn!(file = %artifact.display(), error = %e, "Failed to remove artifact"),
        }
    }
}
