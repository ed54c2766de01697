use super::{SitemapFormatter, SitemapIndexFormatter};
use crate::entity::{SitemapIndexEntry, Url};

/// Plain-text dialect: one `loc` per line, no framing, all other fields ignored.
///
/// Not a protocol-compliant sitemap; useful for debugging and low-ceremony tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Text;

impl SitemapFormatter for Text {
    fn sitemap_start(&self) -> String {
        String::new()
    }

    fn sitemap_end(&self) -> String {
        String::new()
    }

    fn format_url(&self, url: &Url) -> String {
        format!("{}\n", url.loc())
    }
}

impl SitemapIndexFormatter for Text {
    fn sitemap_index_start(&self) -> String {
        String::new()
    }

    fn sitemap_index_end(&self) -> String {
        String::new()
    }

    fn format_sitemap_index(&self, entry: &SitemapIndexEntry) -> String {
        format!("{}\n", entry.loc())
    }
}
