//! The blacklist registry component and its one-shot adder.

use std::any::Any;
use std::path::PathBuf;

use tracing::debug;

use crate::boot::quote_ioc_string;
use crate::context::{BuildContext, Component};
use crate::error::{BuildError, BuildResult};
use crate::pv::PvName;
use crate::sink::BlacklistSink;

/// Marker annotation that opts a record into the blacklist hook.
pub const BLACKLIST_MARKER: &str = "blacklist";

// ─── BlacklistPvs ───────────────────────────────────────────────────

/// The blacklist registry: exclusive owner of the generated blacklist
/// sink.
///
/// Installing it opens the sink (writing the header line) and registers
/// the [`BLACKLIST_MARKER`] hook, so every record declared with the
/// marker afterwards is appended to the sink in declaration order.
/// Names can also be added explicitly via [`BlacklistPvs::blacklist_pv`]
/// or a [`BlacklistPv`] declaration.
///
/// At most one `BlacklistPvs` may exist per build; a second install
/// fails with `DuplicateComponent` before touching the existing sink.
pub struct BlacklistPvs {
    sink: BlacklistSink,
}

impl BlacklistPvs {
    /// Install the registry into `ctx`, writing the generated file to
    /// `path`.
    ///
    /// # Errors
    ///
    /// - `BuildError::DuplicateComponent` if a registry is already
    ///   installed. The existing sink is left untouched.
    /// - `BuildError::Io` if the sink cannot be opened.
    pub fn install(ctx: &mut BuildContext, path: impl Into<PathBuf>) -> BuildResult<()> {
        // Check before opening the sink: a failed second install must
        // not truncate the first instance's output.
        if ctx.components().contains::<BlacklistPvs>() {
            return Err(BuildError::DuplicateComponent {
                component: "BlacklistPvs".to_string(),
            });
        }
        let sink = BlacklistSink::create(path)?;
        ctx.install(BlacklistPvs { sink })?;
        ctx.add_metadata_hook(
            BLACKLIST_MARKER,
            Box::new(|components, record| {
                let registry = components
                    .get_mut::<BlacklistPvs>()
                    .ok_or(BuildError::NoActiveRegistry)?;
                registry.add_blacklist(record.name())
            }),
        );
        Ok(())
    }

    /// Add a name to the blacklist of the registry installed in `ctx`.
    ///
    /// This is the declaration-site entry point: callers do not hold the
    /// registry, they reach it through the context.
    ///
    /// # Errors
    ///
    /// - `BuildError::InvalidPvName` if `name` fails validation; nothing
    ///   is written.
    /// - `BuildError::NoActiveRegistry` if no registry is installed;
    ///   nothing is written.
    pub fn blacklist_pv(ctx: &mut BuildContext, name: &str) -> BuildResult<()> {
        let pv = PvName::new(name)?;
        Self::forward(ctx, &pv)
    }

    fn forward(ctx: &mut BuildContext, name: &PvName) -> BuildResult<()> {
        let registry = ctx
            .components_mut()
            .get_mut::<BlacklistPvs>()
            .ok_or(BuildError::NoActiveRegistry)?;
        registry.add_blacklist(name)
    }

    /// Append one name to the owned sink. No filtering, no
    /// deduplication.
    pub fn add_blacklist(&mut self, name: &PvName) -> BuildResult<()> {
        debug!(pv = %name, "blacklisting PV");
        self.sink.append(name)
    }

    /// Destination of the generated blacklist file.
    pub fn blacklist_path(&self) -> &std::path::Path {
        self.sink.path()
    }
}

impl Component for BlacklistPvs {
    fn kind(&self) -> &'static str {
        "BlacklistPvs"
    }

    fn boot_lines(&self, out: &mut Vec<String>) {
        out.push(format!(
            "load_logging_blacklist {}",
            quote_ioc_string(&self.sink.path().display().to_string())
        ));
    }

    fn finalize(&mut self) -> BuildResult<()> {
        self.sink.finalize()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ─── BlacklistPv ────────────────────────────────────────────────────

/// One-shot declaration blacklisting a single literal PV name,
/// independent of whether a record of that name carries the marker.
///
/// Holds no live state; the name is forwarded to the installed
/// [`BlacklistPvs`] at declaration time. Declaring it before the
/// registry is installed fails with `NoActiveRegistry`.
#[derive(Debug)]
pub struct BlacklistPv {
    name: PvName,
}

impl BlacklistPv {
    /// Forward `name` to the installed registry.
    ///
    /// # Errors
    ///
    /// Fails with whatever [`BlacklistPvs::blacklist_pv`] fails with.
    pub fn declare(ctx: &mut BuildContext, name: &str) -> BuildResult<Self> {
        let name = PvName::new(name)?;
        BlacklistPvs::forward(ctx, &name)?;
        Ok(Self { name })
    }

    /// The blacklisted name.
    pub fn name(&self) -> &PvName {
        &self.name
    }
}
