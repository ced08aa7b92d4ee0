// src/config.rs
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Top-level `config.yaml`: defaults plus the named CV profiles.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub cvs: IndexMap<String, ProfileEntry>,
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    pub template: Option<PathBuf>,
}

/// One `cvs.<name>` entry as written in the file. `template` falls back to
/// `defaults.template` at resolution time.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileEntry {
    pub data: PathBuf,
    pub template: Option<PathBuf>,
    pub output: PathBuf,
}

/// A profile with its paths resolved against the config file's directory.
#[derive(Debug, Clone)]
pub struct ResolvedProfile {
    pub name: String,
    pub data_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    /// Load and parse the configuration file. Relative paths inside it are
    /// later resolved against the file's parent directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.base_dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();

        info!(
            config = %path.display(),
            profiles = config.cvs.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Profile names in file order.
    pub fn profile_names(&self) -> Vec<&str> {
        self.cvs.keys().map(String::as_str).collect()
    }

    /// Resolve a named profile, applying the default template and anchoring
    /// relative paths at the config directory.
    pub fn resolve(&self, name: &str) -> Result<ResolvedProfile> {
        let entry = self
            .cvs
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown CV profile: {}", name))?;

        let template = entry
            .template
            .as_ref()
            .or(self.defaults.template.as_ref())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Profile '{}' has no template and no default template is configured",
                    name
                )
            })?;

        Ok(ResolvedProfile {
            name: name.to_string(),
            data_path: self.anchor(&entry.data),
            template_path: self.anchor(template),
            output_path: self.anchor(&entry.output),
        })
    }

    /// Resolve every profile in configuration order.
    pub fn resolve_all(&self) -> Result<Vec<ResolvedProfile>> {
        self.cvs.keys().map(|name| self.resolve(name)).collect()
    }

    fn anchor(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CONFIG: &str = "\
defaults:
  template: templates/cv.tex.j2
cvs:
  english:
    data: data/english.yaml
    output: out/english.pdf
  french:
    data: data/french.yaml
    template: templates/fr.tex.j2
    output: out/french.pdf
  german:
    data: data/german.yaml
    output: out/german.pdf
";

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("config.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn profiles_keep_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&write_config(dir.path(), CONFIG)).unwrap();
        assert_eq!(config.profile_names(), vec!["english", "french", "german"]);
    }

    #[test]
    fn template_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&write_config(dir.path(), CONFIG)).unwrap();

        let english = config.resolve("english").unwrap();
        assert_eq!(
            english.template_path,
            dir.path().join("templates/cv.tex.j2")
        );

        let french = config.resolve("french").unwrap();
        assert_eq!(french.template_path, dir.path().join("templates/fr.tex.j2"));
    }

    #[test]
    fn relative_paths_anchor_at_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&write_config(dir.path(), CONFIG)).unwrap();

        let profile = config.resolve("english").unwrap();
        assert_eq!(profile.data_path, dir.path().join("data/english.yaml"));
        assert_eq!(profile.output_path, dir.path().join("out/english.pdf"));
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&write_config(dir.path(), CONFIG)).unwrap();
        let err = config.resolve("spanish").unwrap_err();
        assert!(err.to_string().contains("spanish"));
    }

    #[test]
    fn missing_template_everywhere_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&write_config(
            dir.path(),
            "cvs:\n  bare:\n    data: d.yaml\n    output: o.pdf\n",
        ))
        .unwrap();
        assert!(config.resolve("bare").is_err());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "cvs: [not, a, mapping");
        assert!(Config::load(&path).is_err());
    }
}
