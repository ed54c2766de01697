//! # Output Formatting
//!
//! Formatters turn entities into their exact textual representation. They
//! are pure: no I/O, and rendering the same entity twice yields identical
//! bytes.
//!
//! ## Architecture
//!
//! - [`SitemapFormatter`] renders `<urlset>` documents one [`Url`] at a time
//! - [`SitemapIndexFormatter`] renders `<sitemapindex>` documents
//! - Dialects: [`Xml`] (protocol markup), [`Text`] (one `loc` per line)
//! - [`Spaceless`] wraps any formatter and strips layout whitespace
//!
//! The dialect is chosen when the orchestrator is constructed; nothing
//! inspects formatter types at runtime.
//!
//! ## Example
//!
//! ```rust
//! use sitemapgen_core::formatter::{SitemapFormatter, Text, Xml};
//! use sitemapgen_core::Url;
//!
//! let url = Url::new("http://www.example.com/?q=\"rust\"")?;
//!
//! assert_eq!(
//!     Xml.format_url(&url),
//!     "<url>\n\t<loc>http://www.example.com/?q=&quot;rust&quot;</loc>\n</url>\n"
//! );
//! assert_eq!(Text.format_url(&url), "http://www.example.com/?q=\"rust\"\n");
//! # Ok::<(), sitemapgen_core::Error>(())
//! ```

mod spaceless;
mod text;
mod xml;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::entity::{SitemapIndexEntry, Url};

pub use spaceless::Spaceless;
pub use text::Text;
pub use xml::Xml;

/// Renders sitemap (`<urlset>`) documents.
pub trait SitemapFormatter {
    /// Text written once before the first entry.
    fn sitemap_start(&self) -> String;

    /// Text written once after the last entry.
    fn sitemap_end(&self) -> String;

    /// Render one entry, including its trailing newline.
    fn format_url(&self, url: &Url) -> String;
}

/// Renders sitemap index (`<sitemapindex>`) documents.
pub trait SitemapIndexFormatter {
    /// Text written once before the first entry.
    fn sitemap_index_start(&self) -> String;

    /// Text written once after the last entry.
    fn sitemap_index_end(&self) -> String;

    /// Render one index entry, including its trailing newline.
    fn format_sitemap_index(&self, entry: &SitemapIndexEntry) -> String;
}

impl<F: SitemapFormatter + ?Sized> SitemapFormatter for &F {
    fn sitemap_start(&self) -> String {
        (**self).sitemap_start()
    }

    fn sitemap_end(&self) -> String {
        (**self).sitemap_end()
    }

    fn format_url(&self, url: &Url) -> String {
        (**self).format_url(url)
    }
}

impl<F: SitemapIndexFormatter + ?Sized> SitemapIndexFormatter for &F {
    fn sitemap_index_start(&self) -> String {
        (**self).sitemap_index_start()
    }

    fn sitemap_index_end(&self) -> String {
        (**self).sitemap_index_end()
    }

    fn format_sitemap_index(&self, entry: &SitemapIndexEntry) -> String {
        (**self).format_sitemap_index(entry)
    }
}

impl<F: SitemapFormatter + ?Sized> SitemapFormatter for Box<F> {
    fn sitemap_start(&self) -> String {
        (**self).sitemap_start()
    }

    fn sitemap_end(&self) -> String {
        (**self).sitemap_end()
    }

    fn format_url(&self, url: &Url) -> String {
        (**self).format_url(url)
    }
}

impl<F: SitemapIndexFormatter + ?Sized> SitemapIndexFormatter for Box<F> {
    fn sitemap_index_start(&self) -> String {
        (**self).sitemap_index_start()
    }

    fn sitemap_index_end(&self) -> String {
        (**self).sitemap_index_end()
    }

    fn format_sitemap_index(&self, entry: &SitemapIndexEntry) -> String {
        (**self).format_sitemap_index(entry)
    }
}

/// Output dialects selectable from configuration or the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Protocol-compliant XML markup (default)
    #[default]
    Xml,
    /// One `loc` per line, for debugging
    Text,
}

impl OutputFormat {
    /// Boxed sitemap formatter for this dialect, optionally wrapped in [`Spaceless`].
    #[must_use]
    pub fn sitemap_formatter(self, spaceless: bool) -> Box<dyn SitemapFormatter> {
        match (self, spaceless) {
            (Self::Xml, false) => Box::new(Xml),
            (Self::Xml, true) => Box::new(Spaceless::new(Xml)),
            (Self::Text, false) => Box::new(Text),
            (Self::Text, true) => Box::new(Spaceless::new(Text)),
        }
    }

    /// Boxed sitemap index formatter for this dialect, optionally wrapped in [`Spaceless`].
    #[must_use]
    pub fn sitemap_index_formatter(self, spaceless: bool) -> Box<dyn SitemapIndexFormatter> {
        match (self, spaceless) {
            (Self::Xml, false) => Box::new(Xml),
            (Self::Xml, true) => Box::new(Spaceless::new(Xml)),
            (Self::Text, false) => Box::new(Text),
            (Self::Text, true) => Box::new(Spaceless::new(Text)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(crate::Error::Config(format!(
                "Unknown output format: {s} (expected xml or text)"
            ))),
        }
    }
}

/// Escape `&`, `<`, `>` and `"` for use in element bodies and attribute values.
///
/// Single quotes are left alone; every attribute is written double-quoted.
pub fn escape(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}
