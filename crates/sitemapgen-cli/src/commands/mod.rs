//! Command implementations for the sitemapgen CLI

mod index;
mod urls;

pub use index::execute as generate_index;
pub use urls::execute as generate_urls;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use sitemapgen_core::GeneratorConfig;
use tracing::debug;

use crate::cli::OutputArgs;

/// Config file (explicit or platform default), then environment, then flags.
pub fn resolve_config(
    config_path: Option<&Path>,
    args: &OutputArgs,
) -> Result<GeneratorConfig> {
    let mut config = match config_path {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::load()?,
    };
    config
        .apply_env_overrides()
        .context("Invalid SITEMAPGEN_* environment override")?;
    args.apply_to(&mut config);

    debug!(
        format = ?config.output.format,
        spaceless = config.output.spaceless,
        output = ?config.output.path,
        "Resolved configuration"
    );
    Ok(config)
}

/// Truncate (or create) the output file so each run writes a fresh document.
pub fn prepare_output(path: &Path) -> Result<()> {
    File::create(path).with_context(|| format!("Failed to create output {}", path.display()))?;
    Ok(())
}

pub fn write_stdout(document: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(document.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")
}
