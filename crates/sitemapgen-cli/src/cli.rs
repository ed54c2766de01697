//! # CLI Structure and Argument Parsing
//!
//! `sitemapgen` reads entries line by line and writes one document:
//!
//! ```bash
//! # Sitemap from a file of locations or JSON objects
//! sitemapgen urls pages.txt --output public/sitemap.xml
//!
//! # Sitemap index from stdin, compact output
//! cat sitemaps.txt | sitemapgen index --spaceless
//!
//! # Fallback values for entries that omit them
//! sitemapgen urls pages.txt --priority 0.5 --changefreq weekly
//! ```
//!
//! Settings are resolved in order: config file, `SITEMAPGEN_*` environment
//! variables, then command-line flags.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use sitemapgen_core::{ChangeFrequency, GeneratorConfig, OutputFormat};

/// Main CLI structure for the `sitemapgen` command
#[derive(Parser, Clone, Debug)]
#[command(name = "sitemapgen")]
#[command(version)]
#[command(about = "sitemapgen - Generate sitemap and sitemap index documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Generate a sitemap (`<urlset>`) document
    ///
    /// Each input line is a JSON object (`{"loc": ..., "priority": ...}`) or a
    /// bare location. Blank lines and lines starting with `#` are skipped.
    Urls {
        #[command(flatten)]
        output: OutputArgs,

        /// Priority for entries that do not set one (0.0 to 1.0)
        #[arg(long, value_name = "P")]
        priority: Option<f64>,

        /// Change frequency for entries that do not set one
        #[arg(long, value_name = "FREQ", value_parser = parse_changefreq)]
        changefreq: Option<ChangeFrequency>,
    },

    /// Generate a sitemap index (`<sitemapindex>`) document
    ///
    /// Each input line is a JSON object (`{"loc": ..., "lastmod": ...}`) or a
    /// bare location.
    Index {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Arguments shared by every generating command.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputArgs {
    /// Input file; standard input when omitted or `-`
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// File to write the document to; standard output when omitted
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output dialect
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<FormatArg>,

    /// Strip tabs and newlines from the document
    #[arg(long)]
    pub spaceless: bool,
}

impl OutputArgs {
    /// Input path, with `-` meaning standard input.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| *path != Path::new("-"))
    }

    /// Merge flags over the loaded configuration.
    pub fn apply_to(&self, config: &mut GeneratorConfig) {
        if let Some(format) = self.format {
            config.output.format = format.into();
        }
        if self.spaceless {
            config.output.spaceless = true;
        }
        if let Some(path) = &self.output {
            config.output.path = Some(path.clone());
        }
    }
}

/// `--format` values.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Xml,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Xml => Self::Xml,
            FormatArg::Text => Self::Text,
        }
    }
}

fn parse_changefreq(value: &str) -> Result<ChangeFrequency, String> {
    value.parse().map_err(|e: sitemapgen_core::Error| e.to_string())
}
