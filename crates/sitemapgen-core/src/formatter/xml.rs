//! Sitemap protocol markup with the Google video and image extensions.
//!
//! Layout is fixed: one element per line, children of `<url>`/`<sitemap>`
//! indented by one tab, children of `<video:video>`/`<image:image>` by two.
//! Optional fields are emitted only when set, in a fixed order.

use std::fmt::Write as _;

use super::{SitemapFormatter, SitemapIndexFormatter, escape};
use crate::entity::{Image, SitemapIndexEntry, Url, Video, format_w3c};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const VIDEO_NS: &str = "http://www.google.com/schemas/sitemap-video/1.1";
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// XML dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xml;

/// Append `<indent><name attrs>value</name>\n`, escaping the value.
fn push_element(buf: &mut String, indent: &str, name: &str, attrs: &str, value: &str) {
    let _ = writeln!(buf, "{indent}<{name}{attrs}>{}</{name}>", escape(value));
}

/// Append ` name="value"`, escaping the value.
fn push_attr(attrs: &mut String, name: &str, value: &str) {
    let _ = write!(attrs, " {name}=\"{}\"", escape(value));
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl Xml {
    /// Render a single `<video:video>` block, indented for placement inside `<url>`.
    #[must_use]
    pub fn format_video(&self, video: &Video) -> String {
        const IN: &str = "\t\t";
        let mut buf = String::from("\t<video:video>\n");

        push_element(&mut buf, IN, "video:title", "", video.title());
        push_element(&mut buf, IN, "video:description", "", video.description());
        push_element(&mut buf, IN, "video:thumbnail_loc", "", video.thumbnail_loc());

        if let Some(content_loc) = video.content_loc() {
            push_element(&mut buf, IN, "video:content_loc", "", content_loc);
        }

        if let Some(player) = video.player_loc() {
            let mut attrs = String::new();
            push_attr(&mut attrs, "allow_embed", yes_no(player.allow_embed));
            if let Some(autoplay) = &player.autoplay {
                push_attr(&mut attrs, "autoplay", autoplay);
            }
            push_element(&mut buf, IN, "video:player_loc", &attrs, &player.loc);
        }

        if let Some(duration) = video.duration() {
            push_element(&mut buf, IN, "video:duration", "", &duration.to_string());
        }

        // Both dates always keep their time component, whatever the changefreq.
        if let Some(date) = video.expiration_date() {
            push_element(&mut buf, IN, "video:expiration_date", "", &format_w3c(date));
        }
        if let Some(date) = video.publication_date() {
            push_element(&mut buf, IN, "video:publication_date", "", &format_w3c(date));
        }

        if let Some(rating) = video.rating() {
            push_element(&mut buf, IN, "video:rating", "", &rating.to_string());
        }

        if let Some(view_count) = video.view_count() {
            push_element(&mut buf, IN, "video:view_count", "", &view_count.to_string());
        }

        if let Some(family_friendly) = video.family_friendly() {
            push_element(&mut buf, IN, "video:family_friendly", "", yes_no(family_friendly));
        }

        for tag in video.tags() {
            push_element(&mut buf, IN, "video:tag", "", tag);
        }

        if let Some(category) = video.category() {
            push_element(&mut buf, IN, "video:category", "", category);
        }

        if let Some(restriction) = video.restriction() {
            let mut attrs = String::new();
            push_attr(&mut attrs, "relationship", restriction.relationship.as_str());
            push_element(
                &mut buf,
                IN,
                "video:restriction",
                &attrs,
                &restriction.countries.join(" "),
            );
        }

        if let Some(gallery) = video.gallery_loc() {
            let mut attrs = String::new();
            if let Some(title) = &gallery.title {
                push_attr(&mut attrs, "title", title);
            }
            push_element(&mut buf, IN, "video:gallery_loc", &attrs, &gallery.loc);
        }

        if let Some(requires) = video.requires_subscription() {
            push_element(&mut buf, IN, "video:requires_subscription", "", yes_no(requires));
        }

        if let Some(uploader) = video.uploader() {
            let mut attrs = String::new();
            if let Some(info) = &uploader.info {
                push_attr(&mut attrs, "info", info);
            }
            push_element(&mut buf, IN, "video:uploader", &attrs, &uploader.name);
        }

        for (platform, relationship) in video.platforms() {
            let mut attrs = String::new();
            push_attr(&mut attrs, "relationship", relationship.as_str());
            push_element(&mut buf, IN, "video:platform", &attrs, platform.as_str());
        }

        if let Some(live) = video.live() {
            push_element(&mut buf, IN, "video:live", "", yes_no(live));
        }

        buf.push_str("\t</video:video>\n");
        buf
    }

    /// Render a single `<image:image>` block, indented for placement inside `<url>`.
    #[must_use]
    pub fn format_image(&self, image: &Image) -> String {
        const IN: &str = "\t\t";
        let mut buf = String::from("\t<image:image>\n");

        push_element(&mut buf, IN, "image:loc", "", image.loc());
        if let Some(caption) = image.caption() {
            push_element(&mut buf, IN, "image:caption", "", caption);
        }
        if let Some(geo_location) = image.geo_location() {
            push_element(&mut buf, IN, "image:geo_location", "", geo_location);
        }
        if let Some(title) = image.title() {
            push_element(&mut buf, IN, "image:title", "", title);
        }
        if let Some(license) = image.license() {
            push_element(&mut buf, IN, "image:license", "", license);
        }

        buf.push_str("\t</image:image>\n");
        buf
    }
}

impl SitemapFormatter for Xml {
    fn sitemap_start(&self) -> String {
        format!(
            "{XML_DECLARATION}\n<urlset xmlns=\"{SITEMAP_NS}\" xmlns:video=\"{VIDEO_NS}\" xmlns:image=\"{IMAGE_NS}\">\n"
        )
    }

    fn sitemap_end(&self) -> String {
        "</urlset>".to_string()
    }

    fn format_url(&self, url: &Url) -> String {
        let mut buf = String::from("<url>\n");

        push_element(&mut buf, "\t", "loc", "", url.loc());

        if let Some(lastmod) = url.formatted_lastmod() {
            push_element(&mut buf, "\t", "lastmod", "", &lastmod);
        }
        if let Some(changefreq) = url.changefreq() {
            push_element(&mut buf, "\t", "changefreq", "", changefreq.as_str());
        }
        if let Some(priority) = url.priority() {
            push_element(&mut buf, "\t", "priority", "", &priority.to_string());
        }

        for video in url.videos() {
            buf.push_str(&self.format_video(video));
        }
        for image in url.images() {
            buf.push_str(&self.format_image(image));
        }

        buf.push_str("</url>\n");
        buf
    }
}

impl SitemapIndexFormatter for Xml {
    fn sitemap_index_start(&self) -> String {
        format!("{XML_DECLARATION}\n<sitemapindex xmlns=\"{SITEMAP_NS}\">\n")
    }

    fn sitemap_index_end(&self) -> String {
        "</sitemapindex>".to_string()
    }

    fn format_sitemap_index(&self, entry: &SitemapIndexEntry) -> String {
        let mut buf = String::from("<sitemap>\n");

        push_element(&mut buf, "\t", "loc", "", entry.loc());
        // Index entries never use the date-only form.
        if let Some(lastmod) = entry.lastmod() {
            push_element(&mut buf, "\t", "lastmod", "", &format_w3c(lastmod));
        }

        buf.push_str("</sitemap>\n");
        buf
    }
}
