// src/render.rs
//! Template rendering with LaTeX-safe delimiters.
//!
//! LaTeX owns `%` and `{}`, so the default Jinja delimiters are swapped for
//! `<% %>` (blocks), `<< >>` (variables) and `<# #>` (comments).

use anyhow::{Context, Result};
use minijinja::syntax::SyntaxConfig;
use minijinja::{path_loader, Environment, Value};
use std::path::Path;
use tracing::debug;

pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Create a renderer loading templates from the given directory.
    pub fn new(template_dir: &Path) -> Result<Self> {
        let syntax = SyntaxConfig::builder()
            .block_delimiters("<%", "%>")
            .variable_delimiters("<<", ">>")
            .comment_delimiters("<#", "#>")
            .build()
            .context("Failed to build template syntax configuration")?;

        let mut env = Environment::new();
        env.set_syntax(syntax);
        env.set_loader(path_loader(template_dir));

        Ok(Self { env })
    }

    /// Render the named template with the CV data tree. Undefined variables
    /// follow minijinja's lenient default and render as empty.
    pub fn render(&self, template_name: &str, data: &serde_yaml::Value) -> Result<String> {
        let template = self
            .env
            .get_template(template_name)
            .with_context(|| format!("Failed to load template: {}", template_name))?;

        debug!(template = template_name, "Rendering template");

        template
            .render(Value::from_serialize(data))
            .with_context(|| format!("Failed to render template: {}", template_name))
    }
}
