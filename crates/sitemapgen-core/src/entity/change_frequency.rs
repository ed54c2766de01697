use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How frequently a page is likely to change.
///
/// Search engines treat this as a hint only. The value also decides how a
/// `<lastmod>` is rendered: `always` and `hourly` keep the time component,
/// every other frequency is rendered date-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// The page changes every time it is accessed.
    Always,
    /// The page changes hourly.
    Hourly,
    /// The page changes daily.
    Daily,
    /// The page changes weekly.
    Weekly,
    /// The page changes monthly.
    Monthly,
    /// The page changes yearly.
    Yearly,
    /// The page is archived and will not change.
    Never,
}

impl ChangeFrequency {
    /// All variants in protocol order.
    pub const ALL: [Self; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    /// The literal token written into `<changefreq>`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }

    /// Whether a `<lastmod>` next to this frequency keeps its time component.
    #[must_use]
    pub const fn keeps_time_of_day(self) -> bool {
        matches!(self, Self::Always | Self::Hourly)
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = Error;

    /// Tokens are matched exactly; `"Daily"` is rejected.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                Error::Validation(format!(
                    "Invalid changefreq given. Valid values are: {}",
                    valid.join(", ")
                ))
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_every_protocol_token() {
        for freq in ChangeFrequency::ALL {
            assert_eq!(freq.as_str().parse::<ChangeFrequency>().unwrap(), freq);
        }
    }

    #[test]
    fn test_rejects_unknown_and_miscased_tokens() {
        for token in ["", "Daily", "sometimes", "ALWAYS", " weekly"] {
            let err = token.parse::<ChangeFrequency>().unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
            assert!(err.to_string().contains("always, hourly, daily"));
        }
    }

    #[test]
    fn test_only_always_and_hourly_keep_time() {
        let keeping: Vec<_> = ChangeFrequency::ALL
            .into_iter()
            .filter(|f| f.keeps_time_of_day())
            .collect();
        assert_eq!(keeping, vec![ChangeFrequency::Always, ChangeFrequency::Hourly]);
    }

    #[test]
    fn test_serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&ChangeFrequency::Monthly).unwrap();
        assert_eq!(json, "\"monthly\"");
        let back: ChangeFrequency = serde_json::from_str("\"never\"").unwrap();
        assert_eq!(back, ChangeFrequency::Never);
    }
}
