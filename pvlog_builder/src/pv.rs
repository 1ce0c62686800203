//! Validated PV names.
//!
//! A PV name ends up as one line of the generated blacklist file, which
//! the IOC parses at boot with first-space-starts-a-comment syntax. The
//! validation here rejects anything that would not survive that round
//! trip verbatim.

use std::fmt;

use crate::error::{BuildError, BuildResult};

/// A validated process-variable name.
///
/// Guaranteed non-empty and free of whitespace and control characters.
/// No uniqueness is implied; the same name may appear in the blacklist
/// any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PvName(String);

impl PvName {
    /// Validate a PV name.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidPvName` if the name is empty, contains
    /// whitespace (the boot loader truncates each line at the first
    /// space), or contains control characters (an embedded newline would
    /// split one entry into two).
    pub fn new(name: &str) -> BuildResult<Self> {
        if name.is_empty() {
            return Err(BuildError::InvalidPvName {
                name: name.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(BuildError::InvalidPvName {
                name: name.to_string(),
                reason: "name contains whitespace".to_string(),
            });
        }
        if name.chars().any(char::is_control) {
            return Err(BuildError::InvalidPvName {
                name: name.to_string(),
                reason: "name contains control characters".to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PvName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PvName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
