//! # pvlog Builder
//!
//! Build-description core for EPICS IOC PV-logging configuration. During
//! a single-pass declaration phase it accumulates the PV names exempted
//! from write-audit logging, writes them to a generated blacklist file
//! in declaration order, and emits the boot directives that install the
//! access-security policy and load the blacklist at IOC startup.
//!
//! # Module Structure
//!
//! - [`context`] - `BuildContext`, the explicit per-build state, and the
//!   `Component` registry
//! - [`components`] - `BlacklistPvs`, `BlacklistPv`, `PvLogging`
//! - [`sink`] - generated-file plumbing and the blacklist sink
//! - [`hooks`] - marker-annotation hook dispatch
//! - [`boot`] - boot-script emission and IOC shell quoting
//! - [`loader`] - boot-side parser for the generated file format
//!
//! # Usage
//!
//! ```rust,no_run
//! use pvlog_builder::{BlacklistPv, BlacklistPvs, BuildContext, PvLogging, RecordDecl};
//! use pvlog_builder::BLACKLIST_MARKER;
//! use std::path::Path;
//!
//! fn main() -> pvlog_builder::BuildResult<()> {
//!     let out = Path::new("iocBoot");
//!     let mut ctx = BuildContext::new();
//!     PvLogging::install(&mut ctx, None, out)?;
//!     BlacklistPvs::install(&mut ctx, out.join("blacklist"))?;
//!
//!     ctx.declare_record(RecordDecl::new("ao", "TEST")?)?;
//!     ctx.declare_record(RecordDecl::new("ao", "TEST2")?.with_marker(BLACKLIST_MARKER))?;
//!     BlacklistPv::declare(&mut ctx, "FOO")?;
//!
//!     let boot = ctx.finalize()?;
//!     boot.write_to(&out.join("st.cmd.pvlog"))?;
//!     Ok(())
//! }
//! ```

pub mod boot;
pub mod components;
pub mod context;
pub mod error;
pub mod hooks;
pub mod loader;
pub mod pv;
pub mod record;
pub mod sink;

pub use boot::{BootScript, quote_ioc_string};
pub use components::{BLACKLIST_MARKER, BlacklistPv, BlacklistPvs, PvLogging};
pub use context::{BuildContext, Component, ComponentSet};
pub use error::{BuildError, BuildResult};
pub use loader::load_blacklist;
pub use pv::PvName;
pub use record::RecordDecl;
pub use sink::{BLACKLIST_HEADER, BlacklistSink, GeneratedFile};
