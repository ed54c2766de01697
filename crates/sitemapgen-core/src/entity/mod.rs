//! Sitemap entity model.
//!
//! Plain value objects with field-level validation:
//!
//! - [`Url`]: one `<url>` entry, owning its videos and images
//! - [`Video`] / [`Image`]: extension metadata attached to a `Url`
//! - [`SitemapIndexEntry`]: one `<sitemap>` reference in an index document
//! - [`ChangeFrequency`]: the closed set of `<changefreq>` tokens
//!
//! Only `Url::loc`, `Url::priority`, `Url::changefreq` (when given as text)
//! and textual timestamps are validated. Everything else accepts any value
//! of its type, empty strings included.

mod change_frequency;
mod image;
mod sitemap_index_entry;
mod timestamp;
mod url;
mod video;

pub use change_frequency::ChangeFrequency;
pub use image::Image;
pub use sitemap_index_entry::SitemapIndexEntry;
pub use timestamp::{Timestamp, format_date, format_w3c, parse_timestamp};
pub use url::{MAX_LOC_LENGTH, PriorityValue, Url};
pub use video::{GalleryLoc, Platform, PlayerLoc, Relationship, Restriction, Uploader, Video};
