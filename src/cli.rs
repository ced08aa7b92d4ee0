// src/cli.rs
use crate::compiler::LatexCompiler;
use crate::config::Config;
use crate::generator::CvGenerator;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvforge")]
#[command(about = "Generate CV PDFs from YAML data and LaTeX templates")]
pub struct Cli {
    /// Name of the CV to generate (generates all if not specified)
    pub cv_name: Option<String>,

    /// List available CVs
    #[arg(long, short = 'l')]
    pub list: bool,

    /// Configuration file
    #[arg(long, short = 'c', default_value = "config.yaml")]
    pub config: PathBuf,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    if cli.list {
        return list_cvs(&config);
    }

    let generator = CvGenerator::new(LatexCompiler::from_env());

    match &cli.cv_name {
        Some(name) => {
            if !config.cvs.contains_key(name) {
                anyhow::bail!(
                    "CV '{}' not found in {}. Available CVs: {}",
                    name,
                    cli.config.display(),
                    config.profile_names().join(", ")
                );
            }
            generate_one(&config, &generator, name)
        }
        None => generate_all(&config, &generator),
    }
}

fn generate_one(config: &Config, generator: &CvGenerator, name: &str) -> Result<()> {
    let profile = config.resolve(name)?;
    println!("Generating {}...", name);

    let output = generator
        .generate(&profile)
        .with_context(|| format!("Failed to generate {}", name))?;

    println!("  -> {}", output.display());
    Ok(())
}

fn generate_all(config: &Config, generator: &CvGenerator) -> Result<()> {
    let mut failed = Vec::new();

    for name in config.cvs.keys() {
        println!("Generating {}...", name);
        match config.resolve(name).and_then(|p| generator.generate(&p)) {
            Ok(output) => println!("  -> {}", output.display()),
            Err(e) => {
                eprintln!("Failed to generate {}: {:#}", name, e);
                failed.push(name.clone());
            }
        }
    }

    if !failed.is_empty() {
        anyhow::bail!("Failed to generate: {}", failed.join(", "));
    }

    println!("\nSuccessfully generated {} CV(s)", config.cvs.len());
    Ok(())
}

/// Print every configured profile with its resolved paths. Read-only.
fn list_cvs(config: &Config) -> Result<()> {
    println!("Available CVs:");
    for name in config.cvs.keys() {
        let profile = config.resolve(name)?;
        println!("  {}", name);
        println!("    data: {}", profile.data_path.display());
        println!("    template: {}", profile.template_path.display());
        println!("    output: {}", profile.output_path.display());
    }
    Ok(())
}
