//! Boot-side blacklist file parsing.
//!
//! The IOC reads the generated blacklist at startup. The format is
//! deliberately forgiving: everything after the first space of a line is
//! a comment, and lines that are empty after comment stripping are
//! skipped. The generated header line starts with a space, so it parses
//! to nothing. Duplicates are kept; the consumer's hash table makes the
//! second insert harmless.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::BuildResult;

/// Parse a blacklist file into the PV names it lists.
///
/// # Errors
///
/// Returns `BuildError::Io` if the file cannot be read.
pub fn load_blacklist(path: &Path) -> BuildResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let names: Vec<String> = content
        .lines()
        .filter_map(|line| {
            // Text after the first space is a comment.
            let entry = line.split(' ').next().unwrap_or("");
            (!entry.is_empty()).then(|| entry.to_string())
        })
        .collect();
    info!(
        file = %path.display(),
        count = names.len(),
        "loaded PV log blacklist"
    );
    Ok(names)
}
