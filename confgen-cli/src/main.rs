//! confgen — OpenTelemetry Collector configuration generator.
//!
//! # Usage
//!
//! ```text
//! confgen [--template-dir <PATH>] [-o <FILE>]
//! ```
//!
//! Reads `OTLP_*`, `ELASTICSEARCH_*`, `MONITORING_*` and `NUM_INSTANCES`
//! from the environment, validates them, renders the collector template and
//! writes the document to stdout (or `--output`). Any validation or template
//! failure prints to stderr and exits with status 1; nothing partial is ever
//! emitted.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use confgen_core::{validate_environment, EnvVars};
use confgen_renderer::generate_config;

#[derive(Parser, Debug)]
#[command(
    name = "confgen",
    version,
    about = "Generate an OpenTelemetry Collector configuration from environment variables",
    long_about = None,
)]
struct Cli {
    /// Directory containing collector-config.yaml.tera.
    /// Defaults to the directory the confgen binary lives in.
    #[arg(long, value_name = "PATH")]
    template_dir: Option<PathBuf>,

    /// Write the rendered configuration to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let template_dir = match cli.template_dir {
        Some(dir) => dir,
        None => default_template_dir()?,
    };

    // Snapshot once; validation and rendering see the same environment.
    let env = EnvVars::from_process();
    validate_environment(&env)?;
    let document = generate_config(&template_dir, &env)?;

    match cli.output {
        Some(path) => std::fs::write(&path, &document)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{document}"),
    }
    Ok(())
}

/// The template ships alongside the binary by default.
fn default_template_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("could not determine executable path")?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
