use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Sink;
use crate::Result;

/// Appends to a file, creating it on first write.
///
/// Existing content is never truncated: pointing two builds at the same path
/// concatenates their documents. Parent directories are not created; a
/// missing directory or read-only file surfaces as
/// [`Error::Io`](crate::Error::Io) with the original `std::io::Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink appending to `path`. Nothing is opened until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    type Output = PathBuf;

    fn append(&mut self, text: &str) -> Result<()> {
        let created = !self.path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if created {
            debug!(path = %self.path.display(), "Created sitemap output file");
        }
        file.write_all(text.as_bytes())?;
        Ok(())
    }

    fn output(&self) -> PathBuf {
        self.path.clone()
    }
}
