//! # sitemapgen-core
//!
//! Generates [sitemaps.org](https://www.sitemaps.org/protocol.html) sitemap
//! and sitemap index documents, with the Google video and image extensions.
//!
//! ## Architecture
//!
//! Data flows one way, synchronously:
//!
//! ```text
//! providers ──> Sitemap (apply defaults) ──> formatter (render) ──> sink
//! ```
//!
//! - **Entities** ([`entity`]): validated value objects ([`Url`], [`Video`],
//!   [`Image`], [`SitemapIndexEntry`], [`ChangeFrequency`])
//! - **Defaults** ([`DefaultValues`]): fallback priority / change frequency
//!   per provider
//! - **Formatters** ([`formatter`]): [`Xml`](formatter::Xml),
//!   [`Text`](formatter::Text) and the [`Spaceless`](formatter::Spaceless)
//!   decorator
//! - **Sinks** ([`sink`]): in-memory and append-to-file destinations
//! - **Orchestrators** ([`Sitemap`], [`SitemapIndex`]): drain providers into
//!   a sink
//! - **Configuration** ([`GeneratorConfig`]): TOML file plus `SITEMAPGEN_*`
//!   environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use sitemapgen_core::formatter::Xml;
//! use sitemapgen_core::sink::MemorySink;
//! use sitemapgen_core::{ChangeFrequency, DefaultValues, Image, Sitemap, Url};
//!
//! let mut home = Url::new("http://www.example.com/")?;
//! home.set_lastmod_str("2016-02-28T14:51:22+01:00")?
//!     .add_image(Image::new("http://www.example.com/logo.png"));
//!
//! let defaults = DefaultValues::new(Some(0.5), Some(ChangeFrequency::Weekly))?;
//!
//! let mut sitemap = Sitemap::new(MemorySink::new(), Xml);
//! sitemap.add_provider(vec![home], defaults);
//! let xml = sitemap.build()?;
//!
//! assert!(xml.contains("\t<lastmod>2016-02-28</lastmod>\n"));
//! assert!(xml.ends_with("</url>\n</urlset>"));
//! # Ok::<(), sitemapgen_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Validation happens when a value is assigned, so rendering never fails;
//! only sinks can fail during a build.
//!
//! ```rust
//! use sitemapgen_core::{Error, Url};
//!
//! let mut url = Url::new("/")?;
//! match url.set_priority(4.2) {
//!     Err(Error::Validation(msg)) => assert!(msg.contains("between 0 and 1")),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! # Ok::<(), Error>(())
//! ```

/// Configuration file and environment overrides
pub mod config;
/// Default-value policy applied per provider
pub mod defaults;
pub mod entity;
/// Error types and result aliases
pub mod error;
pub mod formatter;
pub mod sink;
mod sitemap;

pub use config::{DefaultsConfig, GeneratorConfig, OutputConfig};
pub use defaults::DefaultValues;
pub use entity::{
    ChangeFrequency, Image, Platform, Relationship, SitemapIndexEntry, Timestamp, Url, Video,
};
pub use error::{Error, Result};
pub use formatter::OutputFormat;
pub use sitemap::{Sitemap, SitemapIndex};
