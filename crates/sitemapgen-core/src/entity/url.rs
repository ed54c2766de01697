use serde::{Deserialize, Serialize};

use super::change_frequency::ChangeFrequency;
use super::image::Image;
use super::timestamp::{Timestamp, format_date, format_w3c, parse_timestamp};
use super::video::Video;
use crate::{Error, Result};

/// Maximum length of a `loc` value, in characters.
pub const MAX_LOC_LENGTH: usize = 2048;

/// A single sitemap entry.
///
/// `loc` and `priority` are validated when assigned, so an existing `Url`
/// is always renderable. No scheme or host normalization is applied to
/// `loc`: relative paths such as `/search` are kept verbatim.
///
/// ```rust
/// use sitemapgen_core::{ChangeFrequency, Url};
///
/// let mut url = Url::new("http://www.example.com/")?;
/// url.set_priority(0.8)?
///     .set_changefreq(Some(ChangeFrequency::Weekly))
///     .set_lastmod_str("2016-02-28T14:51:22+01:00")?;
///
/// assert_eq!(url.formatted_lastmod().as_deref(), Some("2016-02-28"));
/// assert!(url.set_priority(1.5).is_err());
/// # Ok::<(), sitemapgen_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UrlRecord")]
pub struct Url {
    loc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    lastmod: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changefreq: Option<ChangeFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    videos: Vec<Video>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<Image>,
}

/// Unvalidated wire shape of a [`Url`]; every field goes through the setters.
#[derive(Deserialize)]
struct UrlRecord {
    loc: String,
    #[serde(default)]
    lastmod: Option<String>,
    #[serde(default)]
    changefreq: Option<String>,
    #[serde(default)]
    priority: Option<f64>,
    #[serde(default)]
    videos: Vec<Video>,
    #[serde(default)]
    images: Vec<Image>,
}

impl TryFrom<UrlRecord> for Url {
    type Error = Error;

    fn try_from(record: UrlRecord) -> Result<Self> {
        let mut url = Self::new(record.loc)?;
        if let Some(lastmod) = record.lastmod {
            url.set_lastmod_str(&lastmod)?;
        }
        url.set_changefreq_str(record.changefreq.as_deref())?;
        if let Some(priority) = record.priority {
            url.set_priority(priority)?;
        }
        url.set_videos(record.videos).set_images(record.images);
        Ok(url)
    }
}

/// Numeric types accepted by [`Url::set_priority`].
///
/// `f32` goes through its shortest decimal form, so `0.7f32` becomes `0.7`
/// rather than the widened `0.699999988079071`.
pub trait PriorityValue {
    /// The value as an `f64` priority.
    fn into_priority(self) -> f64;
}

impl PriorityValue for f64 {
    fn into_priority(self) -> f64 {
        self
    }
}

impl PriorityValue for f32 {
    fn into_priority(self) -> f64 {
        self.to_string()
            .parse()
            .unwrap_or_else(|_| f64::from(self))
    }
}

impl PriorityValue for i32 {
    fn into_priority(self) -> f64 {
        f64::from(self)
    }
}

impl PriorityValue for u8 {
    fn into_priority(self) -> f64 {
        f64::from(self)
    }
}

impl Url {
    /// Create an entry for `loc`, failing if it exceeds [`MAX_LOC_LENGTH`].
    pub fn new(loc: impl Into<String>) -> Result<Self> {
        let mut url = Self {
            loc: String::new(),
            lastmod: None,
            changefreq: None,
            priority: None,
            videos: Vec::new(),
            images: Vec::new(),
        };
        url.set_loc(loc)?;
        Ok(url)
    }

    /// The entry location, exactly as given.
    pub fn loc(&self) -> &str {
        &self.loc
    }

    /// Replace the location.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if `loc` is longer than 2,048 characters; the
    /// previous value is left untouched.
    pub fn set_loc(&mut self, loc: impl Into<String>) -> Result<&mut Self> {
        let loc = loc.into();
        let length = loc.chars().count();
        if length > MAX_LOC_LENGTH {
            return Err(Error::Validation(format!(
                "The loc value must be less than 2,048 characters (got {length})"
            )));
        }
        self.loc = loc;
        Ok(self)
    }

    /// The raw last-modification timestamp.
    pub const fn lastmod(&self) -> Option<&Timestamp> {
        self.lastmod.as_ref()
    }

    /// Assign or clear the last-modification timestamp.
    pub const fn set_lastmod(&mut self, lastmod: Option<Timestamp>) -> &mut Self {
        self.lastmod = lastmod;
        self
    }

    /// Parse and assign a textual timestamp.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] when the text is not a recognized timestamp.
    pub fn set_lastmod_str(&mut self, lastmod: &str) -> Result<&mut Self> {
        self.lastmod = Some(parse_timestamp(lastmod)?);
        Ok(self)
    }

    /// `lastmod` as it appears in a sitemap.
    ///
    /// Full timestamp with offset when `changefreq` is unset, `always` or
    /// `hourly`; `YYYY-MM-DD` for every other frequency.
    pub fn formatted_lastmod(&self) -> Option<String> {
        let lastmod = self.lastmod.as_ref()?;
        let keep_time = self.changefreq.is_none_or(ChangeFrequency::keeps_time_of_day);
        Some(if keep_time {
            format_w3c(lastmod)
        } else {
            format_date(lastmod)
        })
    }

    /// Change frequency, if set.
    pub const fn changefreq(&self) -> Option<ChangeFrequency> {
        self.changefreq
    }

    /// Assign or clear the change frequency.
    pub const fn set_changefreq(&mut self, changefreq: Option<ChangeFrequency>) -> &mut Self {
        self.changefreq = changefreq;
        self
    }

    /// Assign the change frequency from its protocol token, or clear it with `None`.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for anything other than the seven exact tokens.
    pub fn set_changefreq_str(&mut self, changefreq: Option<&str>) -> Result<&mut Self> {
        self.changefreq = changefreq.map(str::parse).transpose()?;
        Ok(self)
    }

    /// Priority, if set.
    pub const fn priority(&self) -> Option<f64> {
        self.priority
    }

    /// Assign the priority.
    ///
    /// Takes `f64`, `f32` or small integers (see [`PriorityValue`]).
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] when the value is outside `[0.0, 1.0]` or NaN.
    pub fn set_priority(&mut self, priority: impl PriorityValue) -> Result<&mut Self> {
        let priority = priority.into_priority();
        if !(0.0..=1.0).contains(&priority) {
            return Err(Error::Validation(format!(
                "The priority must be between 0 and 1 (got {priority})"
            )));
        }
        self.priority = Some(priority);
        Ok(self)
    }

    /// Fill unset `priority`/`changefreq` from an already validated policy.
    pub(crate) fn fill_missing(
        &mut self,
        priority: Option<f64>,
        changefreq: Option<ChangeFrequency>,
    ) {
        if self.priority.is_none() {
            self.priority = priority;
        }
        if self.changefreq.is_none() {
            self.changefreq = changefreq;
        }
    }

    /// Attached videos, in insertion order.
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Append a video.
    pub fn add_video(&mut self, video: Video) -> &mut Self {
        self.videos.push(video);
        self
    }

    /// Replace all videos.
    pub fn set_videos(&mut self, videos: Vec<Video>) -> &mut Self {
        self.videos = videos;
        self
    }

    /// Attached images, in insertion order.
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// Append an image.
    pub fn add_image(&mut self, image: Image) -> &mut Self {
        self.images.push(image);
        self
    }

    /// Replace all images.
    pub fn set_images(&mut self, images: Vec<Image>) -> &mut Self {
        self.images = images;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_relative_loc_is_kept() {
        let url = Url::new("/search").unwrap();
        assert_eq!(url.loc(), "/search");
    }

    #[test]
    fn test_loc_boundary() {
        assert!(Url::new("a".repeat(MAX_LOC_LENGTH)).is_ok());
        let err = Url::new("a".repeat(MAX_LOC_LENGTH + 1)).unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn test_loc_length_counts_characters_not_bytes() {
        let accented = "\u{e9}".repeat(MAX_LOC_LENGTH);
        assert_eq!(accented.len(), 2 * MAX_LOC_LENGTH);
        assert!(Url::new(accented.as_str()).is_ok());

        let err = Url::new(format!("{accented}\u{e9}")).unwrap_err();
        assert!(err.to_string().contains("(got 2049)"));
    }

    #[test]
    fn test_failed_set_loc_keeps_previous_value() {
        let mut url = Url::new("/a").unwrap();
        assert!(url.set_loc("b".repeat(3000)).is_err());
        assert_eq!(url.loc(), "/a");
    }

    #[test]
    fn test_priority_accepts_integers_and_bounds() {
        let mut url = Url::new("/").unwrap();
        url.set_priority(1).unwrap();
        assert_eq!(url.priority(), Some(1.0));
        url.set_priority(0.0).unwrap();
        assert_eq!(url.priority(), Some(0.0));
        assert!(url.set_priority(f64::NAN).is_err());
        assert!(url.set_priority(-0.01).is_err());
        assert_eq!(url.priority(), Some(0.0));
    }

    #[test]
    fn test_f32_priority_keeps_its_decimal_form() {
        let mut url = Url::new("/").unwrap();
        url.set_priority(0.7f32).unwrap();
        assert_eq!(url.priority(), Some(0.7));
        url.set_priority(0.1f32).unwrap();
        assert_eq!(url.priority(), Some(0.1));
        assert!(url.set_priority(1.5f32).is_err());
        assert!(url.set_priority(f32::NAN).is_err());
        assert_eq!(url.priority(), Some(0.1));
    }

    #[test]
    fn test_changefreq_str_accepts_none_and_tokens() {
        let mut url = Url::new("/").unwrap();
        url.set_changefreq_str(Some("daily")).unwrap();
        assert_eq!(url.changefreq(), Some(ChangeFrequency::Daily));
        url.set_changefreq_str(None).unwrap();
        assert_eq!(url.changefreq(), None);
        assert!(url.set_changefreq_str(Some("fortnightly")).is_err());
    }

    #[test]
    fn test_lastmod_str_parse_failure() {
        let mut url = Url::new("/").unwrap();
        let err = url.set_lastmod_str("not a date").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(url.lastmod().is_none());
    }

    #[test]
    fn test_formatted_lastmod_depends_on_changefreq() {
        let mut url = Url::new("/").unwrap();
        url.set_lastmod_str("2016-02-28T14:51:22+01:00").unwrap();

        for freq in ChangeFrequency::ALL {
            url.set_changefreq(Some(freq));
            let expected = if freq.keeps_time_of_day() {
                "2016-02-28T14:51:22+01:00"
            } else {
                "2016-02-28"
            };
            assert_eq!(url.formatted_lastmod().as_deref(), Some(expected), "{freq}");
        }

        url.set_changefreq(None);
        assert_eq!(
            url.formatted_lastmod().as_deref(),
            Some("2016-02-28T14:51:22+01:00")
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let url: Url = serde_json::from_str(
            r#"{"loc":"/a","lastmod":"2016-02-28","changefreq":"never","priority":0.3}"#,
        )
        .unwrap();
        assert_eq!(url.changefreq(), Some(ChangeFrequency::Never));
        assert_eq!(url.priority(), Some(0.3));

        assert!(serde_json::from_str::<Url>(r#"{"loc":"/a","priority":2}"#).is_err());
        assert!(serde_json::from_str::<Url>(r#"{"loc":"/a","changefreq":"Daily"}"#).is_err());
        assert!(serde_json::from_str::<Url>(r#"{"loc":"/a","lastmod":"soon"}"#).is_err());
    }

    #[test]
    fn test_serialize_then_deserialize_is_identity() {
        let mut url = Url::new("http://example.com/").unwrap();
        url.set_lastmod_str("2016-02-28T14:51:22+01:00")
            .unwrap()
            .set_changefreq(Some(ChangeFrequency::Hourly))
            .add_image(Image::new("http://example.com/a.png"));

        let json = serde_json::to_string(&url).unwrap();
        let back: Url = serde_json::from_str(&json).unwrap();
        assert_eq!(back, url);
    }

    proptest! {
        #[test]
        fn test_priority_in_range_is_stored(p in 0.0f64..=1.0) {
            let mut url = Url::new("/").unwrap();
            url.set_priority(p).unwrap();
            prop_assert_eq!(url.priority(), Some(p));
        }

        #[test]
        fn test_priority_out_of_range_fails(p in prop_oneof![-1.0e6f64..-1.0e-9, 1.000_000_001f64..1.0e6]) {
            let mut url = Url::new("/").unwrap();
            prop_assert!(url.set_priority(p).is_err());
            prop_assert_eq!(url.priority(), None);
        }

        #[test]
        fn test_loc_up_to_limit_roundtrips(loc in "[a-z/:.?=&]{0,2048}") {
            let url = Url::new(loc.clone()).unwrap();
            prop_assert_eq!(url.loc(), loc.as_str());
        }

        #[test]
        fn test_loc_over_limit_fails(extra in 1usize..512) {
            prop_assert!(Url::new("x".repeat(MAX_LOC_LENGTH + extra)).is_err());
        }

        #[test]
        fn test_changefreq_rejects_non_tokens(token in "[A-Za-z]{1,12}") {
            let mut url = Url::new("/").unwrap();
            let valid = ChangeFrequency::ALL.iter().any(|f| f.as_str() == token);
            prop_assert_eq!(url.set_changefreq_str(Some(&token)).is_ok(), valid);
        }
    }
}
