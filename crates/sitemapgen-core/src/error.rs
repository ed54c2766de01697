//! Error types and handling for sitemapgen-core operations.
//!
//! Every fallible operation in the crate returns [`Result<T>`]. Errors are
//! raised at the point where the bad value enters the system: an oversized
//! `loc` fails when it is assigned, not when the entry is rendered.
//!
//! ## Error Categories
//!
//! - **Validation Errors**: domain or range violations on entity fields
//! - **Parse Errors**: timestamp text that cannot be understood
//! - **I/O Errors**: sink write failures, passed through unchanged
//! - **Configuration Errors**: unreadable or invalid configuration files
//! - **Serialization Errors**: TOML/JSON conversion failures
//!
//! ```rust
//! use sitemapgen_core::{Error, Url};
//!
//! let err = Url::new("x".repeat(2049)).unwrap_err();
//! assert_eq!(err.category(), "validation");
//! assert!(!err.is_recoverable());
//! ```

use thiserror::Error;

/// The main error type for sitemapgen-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A value violated a domain constraint when it was assigned.
    ///
    /// ## Common Causes
    ///
    /// - `loc` longer than 2,048 characters
    /// - `priority` outside `[0.0, 1.0]`
    /// - `changefreq` text that is not one of the seven protocol tokens
    #[error("Validation error: {0}")]
    Validation(String),

    /// Timestamp text could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O operation failed.
    ///
    /// Sinks surface the underlying `std::io::Error` unchanged so callers can
    /// inspect its kind (permission denied, missing parent directory, ...).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// Only interrupted or timed-out I/O qualifies. Validation and parse
    /// failures require the caller to fix the input.
    ///
    /// ```rust
    /// use sitemapgen_core::Error;
    /// use std::io;
    ///
    /// assert!(Error::Io(io::Error::new(io::ErrorKind::Interrupted, "eintr")).is_recoverable());
    /// assert!(!Error::Validation("priority".into()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Useful as a structured logging field:
    ///
    /// ```rust
    /// use sitemapgen_core::Error;
    ///
    /// let err = Error::Parse("bad date".into());
    /// tracing::warn!(category = err.category(), error = %err, "entry rejected");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Parse(_) => "parse",
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io;

    #[test]
    fn test_error_display_formatting() {
        let cases = vec![
            (Error::Validation("loc too long".to_string()), "Validation error"),
            (Error::Parse("bad timestamp".to_string()), "Parse error"),
            (Error::Config("missing field".to_string()), "Configuration error"),
            (Error::Serialization("eof".to_string()), "Serialization error"),
        ];

        for (error, prefix) in cases {
            let rendered = error.to_string();
            assert!(rendered.starts_with(prefix), "{rendered}");
        }
    }

    #[test]
    fn test_error_from_io_error_keeps_kind() {
        let error: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();

        match error {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("Expected IO error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_err.into();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_error_categories() {
        let cases = vec![
            (Error::Validation("x".into()), "validation"),
            (Error::Parse("x".into()), "parse"),
            (Error::Io(io::Error::other("x")), "io"),
            (Error::Config("x".into()), "config"),
            (Error::Serialization("x".into()), "serialization"),
        ];

        for (error, category) in cases {
            assert_eq!(error.category(), category);
        }
    }

    #[test]
    fn test_recoverable_io_kinds() {
        assert!(Error::Io(io::Error::new(io::ErrorKind::TimedOut, "t")).is_recoverable());
        assert!(Error::Io(io::Error::new(io::ErrorKind::Interrupted, "i")).is_recoverable());
        assert!(!Error::Io(io::Error::new(io::ErrorKind::NotFound, "n")).is_recoverable());
        assert!(!Error::Config("x".into()).is_recoverable());
    }

    proptest! {
        #[test]
        fn test_validation_error_with_arbitrary_messages(msg in r".{0,500}") {
            let error = Error::Validation(msg.clone());
            let rendered = error.to_string();

            prop_assert!(rendered.contains(&msg));
            prop_assert_eq!(error.category(), "validation");
            prop_assert!(!error.is_recoverable());
        }
    }
}
