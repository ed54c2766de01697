use serde::{Deserialize, Serialize};

/// Image metadata attached to a [`Url`](super::Url).
///
/// Only `loc` is required. Optional fields left as `None` are never rendered.
///
/// ```rust
/// use sitemapgen_core::Image;
///
/// let image = Image::new("http://www.example.com/thumbs/123.jpg")
///     .with_title("Grilling steaks for summer");
/// assert_eq!(image.title(), Some("Grilling steaks for summer"));
/// assert!(image.caption().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    loc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    geo_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    license: Option<String>,
}

impl Image {
    /// Create an image entry for the given location.
    #[must_use]
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            caption: None,
            geo_location: None,
            title: None,
            license: None,
        }
    }

    /// Image location.
    pub fn loc(&self) -> &str {
        &self.loc
    }

    /// Replace the image location.
    pub fn set_loc(&mut self, loc: impl Into<String>) -> &mut Self {
        self.loc = loc.into();
        self
    }

    /// Caption, if set.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Set the caption.
    pub fn set_caption(&mut self, caption: impl Into<String>) -> &mut Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the caption using builder pattern.
    #[must_use]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.set_caption(caption);
        self
    }

    /// Free-form geographic location, e.g. `"Limerick, Ireland"`.
    pub fn geo_location(&self) -> Option<&str> {
        self.geo_location.as_deref()
    }

    /// Set the geographic location, e.g. `Limerick, Ireland`.
    pub fn set_geo_location(&mut self, geo_location: impl Into<String>) -> &mut Self {
        self.geo_location = Some(geo_location.into());
        self
    }

    /// Set the geographic location using builder pattern.
    #[must_use]
    pub fn with_geo_location(mut self, geo_location: impl Into<String>) -> Self {
        self.set_geo_location(geo_location);
        self
    }

    /// Title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title using builder pattern.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// URL of the image license.
    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    /// Set the license URL.
    pub fn set_license(&mut self, license: impl Into<String>) -> &mut Self {
        self.license = Some(license.into());
        self
    }

    /// Set the license URL using builder pattern.
    #[must_use]
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.set_license(license);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image_has_only_loc() {
        let image = Image::new("http://example.com/a.jpg");
        assert_eq!(image.loc(), "http://example.com/a.jpg");
        assert!(image.caption().is_none());
        assert!(image.geo_location().is_none());
        assert!(image.title().is_none());
        assert!(image.license().is_none());
    }

    #[test]
    fn test_empty_strings_are_kept() {
        let mut image = Image::new("");
        image.set_caption("");
        assert_eq!(image.loc(), "");
        assert_eq!(image.caption(), Some(""));
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let image: Image =
            serde_json::from_str(r#"{"loc":"http://example.com/a.jpg","geoLocation":"France"}"#)
                .unwrap();
        assert_eq!(image.geo_location(), Some("France"));
        assert!(image.title().is_none());
    }
}
