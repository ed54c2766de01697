//! Fallback `priority`/`changefreq` applied to entries that omit them.

use serde::{Deserialize, Serialize};

use crate::entity::{ChangeFrequency, Url};
use crate::{Error, Result};

/// Immutable default-value policy attached to a provider.
///
/// Defaults only fill gaps: a `Url` that already carries a priority or a
/// change frequency keeps it.
///
/// ```rust
/// use sitemapgen_core::{ChangeFrequency, DefaultValues, Url};
///
/// let defaults = DefaultValues::new(Some(0.7), Some(ChangeFrequency::Always))?;
///
/// let mut url = Url::new("/a")?;
/// url.set_priority(0.2)?;
/// defaults.apply(&mut url);
///
/// assert_eq!(url.priority(), Some(0.2));
/// assert_eq!(url.changefreq(), Some(ChangeFrequency::Always));
/// # Ok::<(), sitemapgen_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DefaultValuesRecord")]
pub struct DefaultValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changefreq: Option<ChangeFrequency>,
}

#[derive(Deserialize)]
struct DefaultValuesRecord {
    #[serde(default)]
    priority: Option<f64>,
    #[serde(default)]
    changefreq: Option<ChangeFrequency>,
}

impl TryFrom<DefaultValuesRecord> for DefaultValues {
    type Error = Error;

    fn try_from(record: DefaultValuesRecord) -> Result<Self> {
        Self::new(record.priority, record.changefreq)
    }
}

impl DefaultValues {
    /// The empty policy: nothing is filled in.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            priority: None,
            changefreq: None,
        }
    }

    /// Build a policy, validating `priority` the same way [`Url::set_priority`] does.
    pub fn new(priority: Option<f64>, changefreq: Option<ChangeFrequency>) -> Result<Self> {
        if let Some(p) = priority {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::Validation(format!(
                    "The default priority must be between 0 and 1 (got {p})"
                )));
            }
        }
        Ok(Self {
            priority,
            changefreq,
        })
    }

    /// Fallback priority, if any.
    pub const fn priority(&self) -> Option<f64> {
        self.priority
    }

    /// Fallback change frequency, if any.
    pub const fn changefreq(&self) -> Option<ChangeFrequency> {
        self.changefreq
    }

    /// True when applying the policy can never change an entry.
    pub const fn is_empty(&self) -> bool {
        self.priority.is_none() && self.changefreq.is_none()
    }

    /// Fill the entry's unset fields from this policy.
    pub fn apply(&self, url: &mut Url) {
        url.fill_missing(self.priority, self.changefreq);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_none_policy_changes_nothing() {
        let mut url = Url::new("/").unwrap();
        DefaultValues::none().apply(&mut url);
        assert!(url.priority().is_none());
        assert!(url.changefreq().is_none());
        assert!(DefaultValues::none().is_empty());
    }

    #[test]
    fn test_fills_only_missing_fields() {
        let defaults = DefaultValues::new(Some(0.7), Some(ChangeFrequency::Always)).unwrap();

        let mut bare = Url::new("/bare").unwrap();
        defaults.apply(&mut bare);
        assert_eq!(bare.priority(), Some(0.7));
        assert_eq!(bare.changefreq(), Some(ChangeFrequency::Always));

        let mut set = Url::new("/set").unwrap();
        set.set_priority(0.2)
            .unwrap()
            .set_changefreq(Some(ChangeFrequency::Never));
        defaults.apply(&mut set);
        assert_eq!(set.priority(), Some(0.2));
        assert_eq!(set.changefreq(), Some(ChangeFrequency::Never));
    }

    #[test]
    fn test_rejects_out_of_range_priority() {
        let err = DefaultValues::new(Some(1.2), None).unwrap_err();
        assert_eq!(err.category(), "validation");
    }

    #[test]
    fn test_deserialize_validates() {
        let defaults: DefaultValues =
            toml::from_str("priority = 0.5\nchangefreq = \"weekly\"").unwrap();
        assert_eq!(defaults.priority(), Some(0.5));
        assert_eq!(defaults.changefreq(), Some(ChangeFrequency::Weekly));

        assert!(toml::from_str::<DefaultValues>("priority = 3.0").is_err());
    }
}
