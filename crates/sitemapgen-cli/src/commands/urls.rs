//! `urls` command implementation

use std::path::Path;

use anyhow::{Context, Result};
use sitemapgen_core::sink::{FileSink, MemorySink};
use sitemapgen_core::{ChangeFrequency, DefaultValues, Sitemap, Url};
use tracing::info;

use super::{prepare_output, resolve_config, write_stdout};
use crate::cli::OutputArgs;
use crate::input;

/// Execute the urls command
pub fn execute(
    config_path: Option<&Path>,
    args: &OutputArgs,
    priority: Option<f64>,
    changefreq: Option<ChangeFrequency>,
) -> Result<()> {
    let mut config = resolve_config(config_path, args)?;
    if priority.is_some() {
        config.defaults.priority = priority;
    }
    if changefreq.is_some() {
        config.defaults.changefreq = changefreq;
    }
    let defaults: DefaultValues = config.default_values()?;

    let reader = input::open(args.input_path())?;
    let entries = input::read_entries(reader, |loc| Url::new(loc))?;
    let count = entries.len();

    let formatter = config.output.format.sitemap_formatter(config.output.spaceless);

    match config.output.path.as_deref() {
        Some(path) => {
            prepare_output(path)?;
            let mut sitemap = Sitemap::new(FileSink::new(path), formatter);
            sitemap.add_provider(entries, defaults);
            sitemap
                .build()
                .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
            info!(entries = count, path = %path.display(), "Wrote sitemap");
        },
        None => {
            let mut sitemap = Sitemap::new(MemorySink::new(), formatter);
            sitemap.add_provider(entries, defaults);
            write_stdout(&sitemap.build()?)?;
        },
    }

    Ok(())
}
