//! Boot-script emission.
//!
//! The build phase ends with a short list of IOC shell directives, one
//! per line, installed into the startup script. Paths are quoted with
//! the IOC shell's double-quote syntax.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::BuildResult;

/// Quote a string for the IOC shell: double quotes around the value,
/// backslash-escaping embedded `"` and `\`.
pub fn quote_ioc_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Ordered list of boot directives produced by `BuildContext::finalize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootScript {
    lines: Vec<String>,
}

impl BootScript {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Directives in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write the directives to a startup-script fragment.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Io` on write failure.
    pub fn write_to(&self, path: &Path) -> BuildResult<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for BootScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
