use super::{SitemapFormatter, SitemapIndexFormatter};
use crate::entity::{SitemapIndexEntry, Url};

/// Decorator that removes tabs, carriage returns and newlines from everything
/// the wrapped formatter produces, yielding single-line documents.
///
/// Whitespace inside values is stripped too; values that must keep line
/// breaks should not go through this decorator.
///
/// ```rust
/// use sitemapgen_core::formatter::{SitemapFormatter, Spaceless, Xml};
/// use sitemapgen_core::Url;
///
/// let url = Url::new("/a")?;
/// assert_eq!(Spaceless::new(Xml).format_url(&url), "<url><loc>/a</loc></url>");
/// # Ok::<(), sitemapgen_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spaceless<F> {
    inner: F,
}

impl<F> Spaceless<F> {
    /// Wrap `inner`.
    pub const fn new(inner: F) -> Self {
        Self { inner }
    }

    /// Unwrap the decorated formatter.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

fn strip(text: String) -> String {
    if text.contains(&['\t', '\r', '\n'][..]) {
        text.chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect()
    } else {
        text
    }
}

impl<F: SitemapFormatter> SitemapFormatter for Spaceless<F> {
    fn sitemap_start(&self) -> String {
        strip(self.inner.sitemap_start())
    }

    fn sitemap_end(&self) -> String {
        strip(self.inner.sitemap_end())
    }

    fn format_url(&self, url: &Url) -> String {
        strip(self.inner.format_url(url))
    }
}

impl<F: SitemapIndexFormatter> SitemapIndexFormatter for Spaceless<F> {
    fn sitemap_index_start(&self) -> String {
        strip(self.inner.sitemap_index_start())
    }

    fn sitemap_index_end(&self) -> String {
        strip(self.inner.sitemap_index_end())
    }

    fn format_sitemap_index(&self, entry: &SitemapIndexEntry) -> String {
        strip(self.inner.format_sitemap_index(entry))
    }
}
