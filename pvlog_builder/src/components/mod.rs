//! Build-description components.
//!
//! - [`BlacklistPvs`] - owns the generated blacklist sink and the marker
//!   hook feeding it; at most one per build.
//! - [`BlacklistPv`] - one-shot declaration adding a single literal PV
//!   name to the blacklist.
//! - [`PvLogging`] - declares the access-security policy file and its
//!   install directive.

mod access;
mod blacklist;

pub use access::PvLogging;
pub use blacklist::{BLACKLIST_MARKER, BlacklistPv, BlacklistPvs};
