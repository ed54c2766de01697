//! sitemapgen CLI - Sitemap and sitemap index generation
//!
//! This is the main entry point for the sitemapgen command-line interface.
//! Command implementations live in the `commands` module.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod input;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(&cli)
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Documents may go to stdout; logs never do.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = cli.config.as_deref();

    match &cli.command {
        Commands::Urls {
            output,
            priority,
            changefreq,
        } => {
            commands::generate_urls(config, output, *priority, *changefreq)?;
        },

        Commands::Index { output } => {
            commands::generate_index(config, output)?;
        },
    }

    Ok(())
}
