//! Generated output files.
//!
//! `GeneratedFile` is the generic open-once / append / finalize text
//! file; `BlacklistSink` wraps it as the auto-generated blacklist
//! variant, which writes a fixed header line on open. Lines are never
//! reordered, rewritten or deduplicated - the file is human-auditable
//! and its body must match the append sequence exactly.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::BuildResult;
use crate::pv::PvName;

/// First line of every generated blacklist file.
///
/// The leading space is deliberate: the boot-time loader treats text
/// after the first space of a line as a comment, so this line parses as
/// an empty entry and is skipped.
pub const BLACKLIST_HEADER: &str = " Automatically generated, do not edit";

// ─── GeneratedFile ──────────────────────────────────────────────────

/// An append-only, order-preserving generated text file.
///
/// Opened once at creation; `finalize` flushes and closes and is
/// idempotent. A `Drop` backstop flushes whatever was written if the
/// build aborts before `finalize` runs.
pub struct GeneratedFile {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl GeneratedFile {
    /// Create (or truncate) the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Io` if the file cannot be created.
    pub fn create(path: impl Into<PathBuf>) -> BuildResult<Self> {
        let path = path.into();
        let file = File::create(&path)?;
        debug!(file = %path.display(), "opened generated file");
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Append one line, newline-terminated.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Io` on write failure or if the file was
    /// already finalized.
    pub fn append_line(&mut self, line: &str) -> BuildResult<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            io::Error::other(format!(
                "append to {} after finalize",
                self.path.display()
            ))
        })?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush and close. Calling twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Io` if the final flush fails.
    pub fn finalize(&mut self) -> BuildResult<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
            debug!(file = %self.path.display(), "finalized generated file");
        }
        Ok(())
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for GeneratedFile {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                warn!(file = %self.path.display(), "flush on drop failed: {e}");
            }
        }
    }
}

// ─── BlacklistSink ──────────────────────────────────────────────────

/// The auto-generated blacklist file: a `GeneratedFile` whose first line
/// is always [`BLACKLIST_HEADER`], followed by one PV name per line in
/// append order.
pub struct BlacklistSink {
    file: GeneratedFile,
}

impl BlacklistSink {
    /// Open the sink and immediately write the header line.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Io` if the destination cannot be created or
    /// the header cannot be written.
    pub fn create(path: impl Into<PathBuf>) -> BuildResult<Self> {
        let mut file = GeneratedFile::create(path)?;
        file.append_line(BLACKLIST_HEADER)?;
        Ok(Self { file })
    }

    /// Append one PV name. Duplicates are written as-is.
    pub fn append(&mut self, name: &PvName) -> BuildResult<()> {
        self.file.append_line(name.as_str())
    }

    /// Flush and close; idempotent.
    pub fn finalize(&mut self) -> BuildResult<()> {
        self.file.finalize()
    }

    /// Destination path of the generated file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn header_written_on_create() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blacklist");
        let mut sink = BlacklistSink::create(&path).unwrap();
        sink.finalize().unwrap();
        assert_eq!(read(&path), format!("{BLACKLIST_HEADER}\n"));
    }

    #[test]
    fn append_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blacklist");
        let mut sink = BlacklistSink::create(&path).unwrap();
        for name in ["B", "A", "C", "A"] {
            sink.append(&PvName::new(name).unwrap()).unwrap();
        }
        sink.finalize().unwrap();
        let contents = read(&path);
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, [BLACKLIST_HEADER, "B", "A", "C", "A"]);
    }

    #[test]
    fn finalize_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blacklist");
        let mut sink = BlacklistSink::create(&path).unwrap();
        sink.finalize().unwrap();
        sink.finalize().unwrap();
    }

    #[test]
    fn append_after_finalize_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = GeneratedFile::create(dir.path().join("out")).unwrap();
        file.finalize().unwrap();
        assert!(file.append_line("X").is_err());
    }

    #[test]
    fn drop_flushes_pending_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blacklist");
        {
            let mut sink = BlacklistSink::create(&path).unwrap();
            sink.append(&PvName::new("TEST").unwrap()).unwrap();
            // No finalize - simulate an aborted build.
        }
        let contents = read(&path);
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, [BLACKLIST_HEADER, "TEST"]);
    }
}
