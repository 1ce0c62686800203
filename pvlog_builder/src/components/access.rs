//! Access-security policy declaration.

use std::any::Any;
use std::fs;
use std::path::{Path, PathBuf};

use crate::boot::quote_ioc_string;
use crate::context::{BuildContext, Component};
use crate::error::BuildResult;

/// Bundled default policy, installed when no explicit file is given.
/// Grants reads everywhere and routes writes through the trap-write
/// listener so the put-logging module sees them.
const DEFAULT_ACCESS_ACF: &str = include_str!("../../data/access.acf");

/// Declares the access-security policy file the IOC installs at boot.
///
/// With an explicit path the file is assumed to exist; without one the
/// bundled default policy is materialized into the output directory when
/// the build phase ends. Either way the boot script gains one
/// `asSetFilename` directive. Activating the write-audit mechanism
/// itself is the runtime module's registrar concern, not this
/// component's.
pub struct PvLogging {
    access_file: PathBuf,
    bundled: bool,
}

impl PvLogging {
    /// Install into `ctx`. `access_file = None` selects the bundled
    /// default policy, written to `<out_dir>/access.acf` at finalize.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::DuplicateComponent` if already installed.
    pub fn install(
        ctx: &mut BuildContext,
        access_file: Option<PathBuf>,
        out_dir: &Path,
    ) -> BuildResult<()> {
        let (access_file, bundled) = match access_file {
            Some(path) => (path, false),
            None => (out_dir.join("access.acf"), true),
        };
        ctx.install(PvLogging {
            access_file,
            bundled,
        })
    }

    /// Path the boot directive will reference.
    pub fn access_file(&self) -> &Path {
        &self.access_file
    }
}

impl Component for PvLogging {
    fn kind(&self) -> &'static str {
        "PvLogging"
    }

    fn boot_lines(&self, out: &mut Vec<String>) {
        out.push(format!(
            "asSetFilename {}",
            quote_ioc_string(&self.access_file.display().to_string())
        ));
    }

    fn finalize(&mut self) -> BuildResult<()> {
        if self.bundled {
            fs::write(&self.access_file, DEFAULT_ACCESS_ACF)?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
