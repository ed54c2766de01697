//! Timestamp parsing and W3C Datetime rendering.
//!
//! Timestamps keep the offset they were created with: a value built in
//! `+01:00` renders as `...+01:00`, never normalized to UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::{Error, Result};

/// A calendar timestamp with a fixed UTC offset.
pub type Timestamp = DateTime<FixedOffset>;

const W3C_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse timestamp text into a [`Timestamp`].
///
/// Accepted forms:
/// - `2016-02-28T14:51:22+01:00` / `2016-02-28T14:51:22Z` (RFC 3339)
/// - `2016-02-28 14:51:22+01:00` (space separator with offset)
/// - `2016-02-28T14:51:22` / `2016-02-28 14:51:22` (UTC assumed)
/// - `2016-02-28` (midnight UTC)
///
/// ```rust
/// use sitemapgen_core::entity::parse_timestamp;
///
/// let ts = parse_timestamp("2016-02-28").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2016-02-28T00:00:00+00:00");
/// ```
pub fn parse_timestamp(text: &str) -> Result<Timestamp> {
    let s = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%:z") {
        return Ok(dt);
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    if let Some(midnight) = NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc().fixed_offset());
    }

    Err(Error::Parse(format!("Could not parse timestamp: {text:?}")))
}

/// Serde adapter for optional timestamp fields, accepting every form
/// [`parse_timestamp`] does.
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|text| parse_timestamp(&text).map_err(serde::de::Error::custom))
        .transpose()
}

/// Full W3C Datetime with seconds and numeric offset, e.g. `2016-02-28T14:51:22+01:00`.
#[must_use]
pub fn format_w3c(ts: &Timestamp) -> String {
    ts.format(W3C_FORMAT).to_string()
}

/// Date-only W3C form, e.g. `2016-02-28`.
#[must_use]
pub fn format_date(ts: &Timestamp) -> String {
    ts.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_keeps_offset() {
        let ts = parse_timestamp("2016-02-28T14:51:22+01:00").unwrap();
        assert_eq!(format_w3c(&ts), "2016-02-28T14:51:22+01:00");
    }

    #[test]
    fn test_zulu_renders_as_numeric_offset() {
        let ts = parse_timestamp("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(format_w3c(&ts), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn test_space_separated_with_offset() {
        let ts = parse_timestamp("2016-02-28 23:42:00-05:00").unwrap();
        assert_eq!(format_w3c(&ts), "2016-02-28T23:42:00-05:00");
    }

    #[test]
    fn test_naive_forms_assume_utc() {
        for text in ["2016-02-28T14:51:22", "2016-02-28 14:51:22", " 2016-02-28 14:51:22 "] {
            let ts = parse_timestamp(text).unwrap();
            assert_eq!(format_w3c(&ts), "2016-02-28T14:51:22+00:00");
        }
    }

    #[test]
    fn test_date_only_is_midnight() {
        let ts = parse_timestamp("2016-02-28").unwrap();
        assert_eq!(format_w3c(&ts), "2016-02-28T00:00:00+00:00");
        assert_eq!(format_date(&ts), "2016-02-28");
    }

    #[test]
    fn test_garbage_is_parse_error() {
        for text in ["", "yesterday", "2016-13-45", "28/02/2016"] {
            let err = parse_timestamp(text).unwrap_err();
            assert_eq!(err.category(), "parse", "{text}");
        }
    }
}
