//! Write destinations for formatted output.
//!
//! A [`Sink`] receives text chunks in order and exposes whatever it
//! accumulated once the orchestrator is done. Two implementations ship with
//! the crate:
//!
//! - [`MemorySink`]: accumulates into a `String`, for tests and small outputs
//! - [`FileSink`]: appends to a path, creating the file on first write
//!
//! Sinks are not synchronized. One build owns a sink for its whole duration.

mod file;
mod memory;

pub use file::FileSink;
pub use memory::MemorySink;

use crate::Result;

/// Append-only destination for formatted text.
pub trait Sink {
    /// What the sink exposes after a build (accumulated text, a path, ...).
    type Output;

    /// Append a chunk of text.
    ///
    /// # Errors
    ///
    /// [`Error::Io`](crate::Error::Io) when the underlying medium is not writable.
    fn append(&mut self, text: &str) -> Result<()>;

    /// Expose the sink's result.
    fn output(&self) -> Self::Output;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Output = S::Output;

    fn append(&mut self, text: &str) -> Result<()> {
        (**self).append(text)
    }

    fn output(&self) -> Self::Output {
        (**self).output()
    }
}
