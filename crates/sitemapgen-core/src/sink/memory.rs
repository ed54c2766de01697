use super::Sink;
use crate::Result;

/// In-memory accumulator.
///
/// ```rust
/// use sitemapgen_core::sink::{MemorySink, Sink};
///
/// let mut sink = MemorySink::new();
/// sink.append("joe")?;
/// sink.append("-hell yeah!")?;
/// assert_eq!(sink.buffer(), "joe-hell yeah!");
/// # Ok::<(), sitemapgen_core::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    buffer: String,
}

impl MemorySink {
    /// Empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Everything appended so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Take the accumulated text.
    pub fn into_buffer(self) -> String {
        self.buffer
    }
}

impl Sink for MemorySink {
    type Output = String;

    fn append(&mut self, text: &str) -> Result<()> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn output(&self) -> String {
        self.buffer.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(MemorySink::new().buffer(), "");
    }

    #[test]
    fn test_borrowed_sink_appends_to_owner() {
        fn write_twice<S: Sink<Output = String>>(mut sink: S) -> String {
            sink.append("a").unwrap();
            sink.append("b").unwrap();
            sink.output()
        }

        let mut sink = MemorySink::new();
        assert_eq!(write_twice(&mut sink), "ab");
        assert_eq!(sink.into_buffer(), "ab");
    }
}
