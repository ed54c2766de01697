//! Orchestrators that drain entry providers through a formatter into a sink.
//!
//! A provider is any [`IntoIterator`] of entries: a `Vec`, a lazy database
//! cursor, a line reader. Providers are registered first and only consumed
//! by `build`, in registration order, each in its own yield order.
//!
//! `build` takes the orchestrator by value. Providers are drained exactly
//! once and the built state is terminal, so a second build over the same
//! (already exhausted) providers cannot be written.
//!
//! ## Example
//!
//! ```rust
//! use sitemapgen_core::formatter::Text;
//! use sitemapgen_core::sink::MemorySink;
//! use sitemapgen_core::{DefaultValues, Sitemap, Url};
//!
//! let mut sitemap = Sitemap::new(MemorySink::new(), Text);
//! sitemap.add_provider(vec![Url::new("http://www.google.fr/search")?], DefaultValues::none());
//!
//! assert_eq!(sitemap.build()?, "http://www.google.fr/search\n");
//! # Ok::<(), sitemapgen_core::Error>(())
//! ```

use tracing::{debug, instrument};

use crate::Result;
use crate::defaults::DefaultValues;
use crate::entity::{SitemapIndexEntry, Url};
use crate::formatter::{SitemapFormatter, SitemapIndexFormatter};
use crate::sink::Sink;

type UrlProvider<'a> = Box<dyn Iterator<Item = Url> + 'a>;
type IndexProvider<'a> = Box<dyn Iterator<Item = SitemapIndexEntry> + 'a>;

/// Builds a sitemap (`<urlset>`) document.
pub struct Sitemap<'a, S, F> {
    sink: S,
    formatter: F,
    providers: Vec<(UrlProvider<'a>, DefaultValues)>,
}

impl<'a, S, F> Sitemap<'a, S, F>
where
    S: Sink,
    F: SitemapFormatter,
{
    /// Orchestrator writing to `sink` through `formatter`, with no providers yet.
    pub fn new(sink: S, formatter: F) -> Self {
        Self {
            sink,
            formatter,
            providers: Vec::new(),
        }
    }

    /// Register a provider and the defaults applied to its entries.
    ///
    /// Nothing is pulled from the provider until [`build`](Self::build).
    pub fn add_provider<P>(&mut self, provider: P, defaults: DefaultValues) -> &mut Self
    where
        P: IntoIterator<Item = Url>,
        P::IntoIter: 'a,
    {
        self.providers.push((Box::new(provider.into_iter()), defaults));
        self
    }

    /// Number of registered providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Drain every provider and write the document to the sink.
    ///
    /// Writes the preamble, one rendered entry per yielded `Url` (after
    /// filling unset fields from the provider's defaults), then the
    /// postamble. Returns the sink's output.
    ///
    /// # Errors
    ///
    /// The first sink error is returned unchanged. Text already appended
    /// stays in the sink; nothing is rolled back.
    #[instrument(skip_all, fields(providers = self.providers.len()))]
    pub fn build(self) -> Result<S::Output> {
        let Self {
            mut sink,
            formatter,
            providers,
        } = self;

        sink.append(&formatter.sitemap_start())?;

        let mut total = 0usize;
        for (index, (provider, defaults)) in providers.into_iter().enumerate() {
            let mut count = 0usize;
            for mut url in provider {
                defaults.apply(&mut url);
                sink.append(&formatter.format_url(&url))?;
                count += 1;
            }
            debug!(provider = index, entries = count, "Drained sitemap provider");
            total += count;
        }

        sink.append(&formatter.sitemap_end())?;
        debug!(entries = total, "Built sitemap");

        Ok(sink.output())
    }
}

/// Builds a sitemap index (`<sitemapindex>`) document.
///
/// ```rust
/// use sitemapgen_core::formatter::Xml;
/// use sitemapgen_core::sink::MemorySink;
/// use sitemapgen_core::{SitemapIndex, SitemapIndexEntry};
///
/// let mut index = SitemapIndex::new(MemorySink::new(), Xml);
/// index.add_provider([SitemapIndexEntry::new("http://example.com/s1.xml", None)]);
///
/// let xml = index.build()?;
/// assert!(xml.contains("<sitemap>\n\t<loc>http://example.com/s1.xml</loc>\n</sitemap>\n"));
/// # Ok::<(), sitemapgen_core::Error>(())
/// ```
pub struct SitemapIndex<'a, S, F> {
    sink: S,
    formatter: F,
    providers: Vec<IndexProvider<'a>>,
}

impl<'a, S, F> SitemapIndex<'a, S, F>
where
    S: Sink,
    F: SitemapIndexFormatter,
{
    /// Orchestrator writing to `sink` through `formatter`, with no providers yet.
    pub fn new(sink: S, formatter: F) -> Self {
        Self {
            sink,
            formatter,
            providers: Vec::new(),
        }
    }

    /// Register a provider of index entries.
    pub fn add_provider<P>(&mut self, provider: P) -> &mut Self
    where
        P: IntoIterator<Item = SitemapIndexEntry>,
        P::IntoIter: 'a,
    {
        self.providers.push(Box::new(provider.into_iter()));
        self
    }

    /// Number of registered providers.
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Drain every provider and write the index document to the sink.
    ///
    /// # Errors
    ///
    /// The first sink error, unchanged.
    #[instrument(skip_all, fields(providers = self.providers.len()))]
    pub fn build(self) -> Result<S::Output> {
        let Self {
            mut sink,
            formatter,
            providers,
        } = self;

        sink.append(&formatter.sitemap_index_start())?;

        let mut total = 0usize;
        for entry in providers.into_iter().flatten() {
            sink.append(&formatter.format_sitemap_index(&entry))?;
            total += 1;
        }

        sink.append(&formatter.sitemap_index_end())?;
        debug!(entries = total, "Built sitemap index");

        Ok(sink.output())
    }
}
