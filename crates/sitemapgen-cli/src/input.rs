//! Line-oriented entry input.
//!
//! Each non-blank line is either a JSON object, deserialized into the entry
//! type, or a bare location. Lines whose first non-space character is `#`
//! are comments.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Open `path`, or standard input when `None`.
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        },
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Read every entry from `reader`.
///
/// All lines are parsed before anything is returned, so a bad line aborts
/// before any output is produced. Errors name the 1-based line number.
pub fn read_entries<T, R, F>(reader: R, from_loc: F) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: BufRead,
    F: Fn(&str) -> sitemapgen_core::Result<T>,
{
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.with_context(|| format!("Failed to read line {number}"))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let entry = if line.starts_with('{') {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid entry on line {number}"))?
        } else {
            from_loc(line).with_context(|| format!("Invalid entry on line {number}"))?
        };
        entries.push(entry);
    }

    debug!(entries = entries.len(), "Read input");
    Ok(entries)
}
