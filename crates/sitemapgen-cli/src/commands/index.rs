//! `index` command implementation

use std::path::Path;

use anyhow::{Context, Result};
use sitemapgen_core::sink::{FileSink, MemorySink};
use sitemapgen_core::{SitemapIndex, SitemapIndexEntry};
use tracing::info;

use super::{prepare_output, resolve_config, write_stdout};
use crate::cli::OutputArgs;
use crate::input;

/// Execute the index command
pub fn execute(config_path: Option<&Path>, args: &OutputArgs) -> Result<()> {
    let config = resolve_config(config_path, args)?;

    let reader = input::open(args.input_path())?;
    let entries = input::read_entries(reader, |loc| Ok(SitemapIndexEntry::new(loc, None)))?;
    let count = entries.len();

    let formatter = config
        .output
        .format
        .sitemap_index_formatter(config.output.spaceless);

    match config.output.path.as_deref() {
        Some(path) => {
            prepare_output(path)?;
            let mut index = SitemapIndex::new(FileSink::new(path), formatter);
            index.add_provider(entries);
            index
                .build()
                .with_context(|| format!("Failed to write sitemap index to {}", path.display()))?;
            info!(entries = count, path = %path.display(), "Wrote sitemap index");
        },
        None => {
            let mut index = SitemapIndex::new(MemorySink::new(), formatter);
            index.add_provider(entries);
            write_stdout(&index.build()?)?;
        },
    }

    Ok(())
}
