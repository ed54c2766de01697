use serde::{Deserialize, Serialize};

use super::timestamp::{Timestamp, deserialize_optional_timestamp};

/// Reference to one sitemap file inside a sitemap index document.
///
/// ```rust
/// use sitemapgen_core::SitemapIndexEntry;
/// use sitemapgen_core::entity::parse_timestamp;
///
/// let entry = SitemapIndexEntry::new(
///     "http://www.example.com/sitemap-1.xml",
///     Some(parse_timestamp("2016-02-28T23:42:00+01:00")?),
/// );
/// assert!(entry.lastmod().is_some());
/// # Ok::<(), sitemapgen_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapIndexEntry {
    loc: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_timestamp"
    )]
    lastmod: Option<Timestamp>,
}

impl SitemapIndexEntry {
    /// Reference the sitemap at `loc`, optionally with its modification time.
    #[must_use]
    pub fn new(loc: impl Into<String>, lastmod: Option<Timestamp>) -> Self {
        Self {
            loc: loc.into(),
            lastmod,
        }
    }

    /// Location of the referenced sitemap.
    pub fn loc(&self) -> &str {
        &self.loc
    }

    /// When the referenced sitemap last changed.
    pub const fn lastmod(&self) -> Option<&Timestamp> {
        self.lastmod.as_ref()
    }
}
