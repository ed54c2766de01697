use std::fmt;

use serde::{Deserialize, Serialize};

use super::timestamp::{Timestamp, deserialize_optional_timestamp};

/// Whether a restriction or platform entry allows or denies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// Listed values are permitted.
    Allow,
    /// Listed values are excluded.
    Deny,
}

impl Relationship {
    /// Attribute value, `allow` or `deny`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform identifiers understood by the video extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Television devices.
    Tv,
    /// Desktop browsers.
    Web,
    /// Mobile devices.
    Mobile,
}

impl Platform {
    /// Element value, e.g. `tv`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tv => "tv",
            Self::Web => "web",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of an embeddable player plus its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLoc {
    /// Player URL
    pub loc: String,
    /// Rendered as `allow_embed="yes|no"`
    pub allow_embed: bool,
    /// Autoplay query string, e.g. `ap=1`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<String>,
}

/// Country codes a video is (or is not) available in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    /// ISO 3166 country codes
    pub countries: Vec<String>,
    /// Whether `countries` is an allow or deny list
    pub relationship: Relationship,
}

/// Gallery page the video belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryLoc {
    /// Gallery page URL
    pub loc: String,
    /// Gallery title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Uploader name and optional info page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uploader {
    /// Uploader display name
    pub name: String,
    /// Page with more about the uploader
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

/// Video metadata attached to a [`Url`](super::Url).
///
/// `title`, `description` and `thumbnail_loc` are required; every other
/// field is optional and omitted from output when unset. Boolean fields
/// that were explicitly set to `false` are still rendered.
///
/// ```rust
/// use sitemapgen_core::{Platform, Relationship, Video};
///
/// let mut video = Video::new(
///     "Grilling steaks for summer",
///     "Alkis shows you how to get perfectly done steaks every time",
///     "http://www.example.com/thumbs/123.jpg",
/// );
/// video
///     .set_duration(600)
///     .set_family_friendly(false)
///     .add_platform(Platform::Tv, Relationship::Allow);
/// assert_eq!(video.family_friendly(), Some(false));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    title: String,
    description: String,
    thumbnail_loc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_loc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    player_loc: Option<PlayerLoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_timestamp"
    )]
    expiration_date: Option<Timestamp>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_timestamp"
    )]
    publication_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    view_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    family_friendly: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    restriction: Option<Restriction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gallery_loc: Option<GalleryLoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    requires_subscription: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    uploader: Option<Uploader>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    platforms: Vec<(Platform, Relationship)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    live: Option<bool>,
}

impl Video {
    /// Create a video entry with its three required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        thumbnail_loc: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            thumbnail_loc: thumbnail_loc.into(),
            content_loc: None,
            player_loc: None,
            duration: None,
            expiration_date: None,
            publication_date: None,
            rating: None,
            view_count: None,
            family_friendly: None,
            tags: Vec::new(),
            category: None,
            restriction: None,
            gallery_loc: None,
            requires_subscription: None,
            uploader: None,
            platforms: Vec::new(),
            live: None,
        }
    }

    /// Video title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Video description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Thumbnail image location.
    pub fn thumbnail_loc(&self) -> &str {
        &self.thumbnail_loc
    }

    /// Replace the thumbnail location.
    pub fn set_thumbnail_loc(&mut self, thumbnail_loc: impl Into<String>) -> &mut Self {
        self.thumbnail_loc = thumbnail_loc.into();
        self
    }

    /// Location of the raw video file, if set.
    pub fn content_loc(&self) -> Option<&str> {
        self.content_loc.as_deref()
    }

    /// Set the raw video file location.
    pub fn set_content_loc(&mut self, content_loc: impl Into<String>) -> &mut Self {
        self.content_loc = Some(content_loc.into());
        self
    }

    /// Embeddable player, if set.
    pub const fn player_loc(&self) -> Option<&PlayerLoc> {
        self.player_loc.as_ref()
    }

    /// Set the player location, its `allow_embed` flag and optional `autoplay` string.
    pub fn set_player_loc(
        &mut self,
        loc: impl Into<String>,
        allow_embed: bool,
        autoplay: Option<String>,
    ) -> &mut Self {
        self.player_loc = Some(PlayerLoc {
            loc: loc.into(),
            allow_embed,
            autoplay,
        });
        self
    }

    /// Duration in seconds.
    pub const fn duration(&self) -> Option<u32> {
        self.duration
    }

    /// Set the duration in seconds.
    pub const fn set_duration(&mut self, seconds: u32) -> &mut Self {
        self.duration = Some(seconds);
        self
    }

    /// When the video stops being available, if set.
    pub const fn expiration_date(&self) -> Option<&Timestamp> {
        self.expiration_date.as_ref()
    }

    /// Set the expiration date.
    pub const fn set_expiration_date(&mut self, date: Timestamp) -> &mut Self {
        self.expiration_date = Some(date);
        self
    }

    /// When the video was first published, if set.
    pub const fn publication_date(&self) -> Option<&Timestamp> {
        self.publication_date.as_ref()
    }

    /// Set the publication date.
    pub const fn set_publication_date(&mut self, date: Timestamp) -> &mut Self {
        self.publication_date = Some(date);
        self
    }

    /// Rating, if set.
    pub const fn rating(&self) -> Option<f64> {
        self.rating
    }

    /// Set the rating.
    pub const fn set_rating(&mut self, rating: f64) -> &mut Self {
        self.rating = Some(rating);
        self
    }

    /// View count, if set.
    pub const fn view_count(&self) -> Option<u64> {
        self.view_count
    }

    /// Set the view count.
    pub const fn set_view_count(&mut self, count: u64) -> &mut Self {
        self.view_count = Some(count);
        self
    }

    /// Family-friendly flag, if set.
    pub const fn family_friendly(&self) -> Option<bool> {
        self.family_friendly
    }

    /// Set the family-friendly flag.
    pub const fn set_family_friendly(&mut self, family_friendly: bool) -> &mut Self {
        self.family_friendly = Some(family_friendly);
        self
    }

    /// Tags, in insertion order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replace all tags. Order is kept as given.
    pub fn set_tags<I, T>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Append a tag.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.push(tag.into());
        self
    }

    /// Category, if set.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Set the category.
    pub fn set_category(&mut self, category: impl Into<String>) -> &mut Self {
        self.category = Some(category.into());
        self
    }

    /// Country restriction, if set.
    pub const fn restriction(&self) -> Option<&Restriction> {
        self.restriction.as_ref()
    }

    /// Restrict (or explicitly allow) the video in the given country codes.
    pub fn set_restrictions<I, T>(&mut self, countries: I, relationship: Relationship) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.restriction = Some(Restriction {
            countries: countries.into_iter().map(Into::into).collect(),
            relationship,
        });
        self
    }

    /// Gallery, if set.
    pub const fn gallery_loc(&self) -> Option<&GalleryLoc> {
        self.gallery_loc.as_ref()
    }

    /// Set the gallery location and optional title.
    pub fn set_gallery_loc(&mut self, loc: impl Into<String>, title: Option<String>) -> &mut Self {
        self.gallery_loc = Some(GalleryLoc {
            loc: loc.into(),
            title,
        });
        self
    }

    /// Subscription flag, if set.
    pub const fn requires_subscription(&self) -> Option<bool> {
        self.requires_subscription
    }

    /// Set the subscription flag.
    pub const fn set_requires_subscription(&mut self, requires: bool) -> &mut Self {
        self.requires_subscription = Some(requires);
        self
    }

    /// Uploader, if set.
    pub const fn uploader(&self) -> Option<&Uploader> {
        self.uploader.as_ref()
    }

    /// Set the uploader name and optional info page.
    pub fn set_uploader(&mut self, name: impl Into<String>, info: Option<String>) -> &mut Self {
        self.uploader = Some(Uploader {
            name: name.into(),
            info,
        });
        self
    }

    /// Platform entries in first-insertion order.
    pub fn platforms(&self) -> &[(Platform, Relationship)] {
        &self.platforms
    }

    /// Replace the platform mapping.
    pub fn set_platforms<I>(&mut self, platforms: I) -> &mut Self
    where
        I: IntoIterator<Item = (Platform, Relationship)>,
    {
        self.platforms.clear();
        for (platform, relationship) in platforms {
            self.add_platform(platform, relationship);
        }
        self
    }

    /// Add a platform entry. A platform already present keeps its position
    /// and takes the new relationship.
    pub fn add_platform(&mut self, platform: Platform, relationship: Relationship) -> &mut Self {
        match self.platforms.iter_mut().find(|(p, _)| *p == platform) {
            Some(entry) => entry.1 = relationship,
            None => self.platforms.push((platform, relationship)),
        }
        self
    }

    /// Live-stream flag, if set.
    pub const fn live(&self) -> Option<bool> {
        self.live
    }

    /// Set the live-stream flag.
    pub const fn set_live(&mut self, live: bool) -> &mut Self {
        self.live = Some(live);
        self
    }
}
