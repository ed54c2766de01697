//! Configuration for sitemap generation.
//!
//! Configuration is stored in TOML and supports environment variable overrides.
//!
//! ## Configuration Sources
//!
//! 1. **Config file**: an explicit path, or the platform config directory
//!    (`sitemapgen/config.toml`, see [`GeneratorConfig::default_path`])
//! 2. **Environment variables**: `SITEMAPGEN_*` prefix
//! 3. **Command-line flags**: applied by the CLI on top of both
//!
//! ## Example Configuration File
//!
//! ```toml
//! [defaults]
//! priority = 0.5
//! changefreq = "weekly"
//!
//! [output]
//! format = "xml"
//! spaceless = false
//! path = "public/sitemap.xml"
//! ```
//!
//! ```rust
//! use sitemapgen_core::{ChangeFrequency, GeneratorConfig};
//!
//! let config: GeneratorConfig = toml::from_str("[defaults]\nchangefreq = \"daily\"\n")?;
//! let defaults = config.default_values()?;
//! assert_eq!(defaults.changefreq(), Some(ChangeFrequency::Daily));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::defaults::DefaultValues;
use crate::entity::ChangeFrequency;
use crate::formatter::OutputFormat;
use crate::{Error, Result};

/// Environment variable overriding `defaults.priority`.
pub const ENV_PRIORITY: &str = "SITEMAPGEN_PRIORITY";
/// Environment variable overriding `defaults.changefreq`.
pub const ENV_CHANGEFREQ: &str = "SITEMAPGEN_CHANGEFREQ";
/// Environment variable overriding `output.format`.
pub const ENV_FORMAT: &str = "SITEMAPGEN_FORMAT";
/// Environment variable overriding `output.path`.
pub const ENV_OUTPUT: &str = "SITEMAPGEN_OUTPUT";

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Values applied to entries that omit them
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Where and how documents are written
    #[serde(default)]
    pub output: OutputConfig,
}

/// Fallback `priority` and `changefreq`.
///
/// Validated when converted into [`DefaultValues`]; an out-of-range priority
/// is reported as [`Error::Config`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Priority for entries without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f64>,
    /// Change frequency for entries without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFrequency>,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output dialect
    #[serde(default)]
    pub format: OutputFormat,
    /// Strip tabs and newlines from the rendered document
    #[serde(default)]
    pub spaceless: bool,
    /// File to append the document to; standard output when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Read configuration from an explicit TOML file.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when the file cannot be read or is not valid configuration.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config {}: {e}", path.display()))
        })?;
        config.default_values()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from the platform config directory, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write configuration as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    /// Platform location of the configuration file.
    ///
    /// - Linux: `~/.config/sitemapgen/config.toml`
    /// - macOS: `~/Library/Application Support/dev.sitemapgen.sitemapgen/config.toml`
    /// - Windows: `%APPDATA%\sitemapgen\sitemapgen\config\config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("dev", "sitemapgen", "sitemapgen")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply `SITEMAPGEN_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply `SITEMAPGEN_*` overrides from an arbitrary lookup.
    ///
    /// Empty values are ignored. Every value is validated before any is
    /// applied, so on error the configuration is left unchanged.
    pub fn apply_overrides_from<L>(&mut self, lookup: L) -> Result<()>
    where
        L: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let priority = get(ENV_PRIORITY)
            .map(|value| {
                value.trim().parse::<f64>().map_err(|e| {
                    Error::Config(format!("Invalid {ENV_PRIORITY} value {value:?}: {e}"))
                })
            })
            .transpose()?;
        let changefreq = get(ENV_CHANGEFREQ)
            .map(|value| {
                value
                    .trim()
                    .parse::<ChangeFrequency>()
                    .map_err(|e| Error::Config(format!("Invalid {ENV_CHANGEFREQ} value: {e}")))
            })
            .transpose()?;
        let format = get(ENV_FORMAT)
            .map(|value| value.trim().parse::<OutputFormat>())
            .transpose()?;

        DefaultValues::new(
            priority.or(self.defaults.priority),
            changefreq.or(self.defaults.changefreq),
        )
        .map_err(|e| Error::Config(format!("Invalid {ENV_PRIORITY} value: {e}")))?;

        if priority.is_some() {
            self.defaults.priority = priority;
        }
        if changefreq.is_some() {
            self.defaults.changefreq = changefreq;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        if let Some(value) = get(ENV_OUTPUT) {
            self.output.path = Some(PathBuf::from(value));
        }
        Ok(())
    }

    /// The validated default-value policy described by `[defaults]`.
    pub fn default_values(&self) -> Result<DefaultValues> {
        DefaultValues::new(self.defaults.priority, self.defaults.changefreq)
            .map_err(|e| Error::Config(e.to_string()))
    }
}
