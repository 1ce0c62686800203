//! Marker-annotation hooks.
//!
//! A hook pairs a marker string with a handler. When a record is
//! declared, every hook whose marker the record carries fires exactly
//! once, immediately after the declaration, in hook-registration order.
//! Records without the marker fire nothing.

use crate::context::ComponentSet;
use crate::error::BuildResult;
use crate::record::RecordDecl;

/// Handler invoked per annotated record. Receives the component set so
/// it can reach the component it forwards to.
pub type HookFn = Box<dyn Fn(&mut ComponentSet, &RecordDecl) -> BuildResult<()>>;

/// One registered marker hook.
pub struct MarkerHook {
    pub(crate) marker: String,
    pub(crate) handler: HookFn,
}

impl MarkerHook {
    pub fn new(marker: impl Into<String>, handler: HookFn) -> Self {
        Self {
            marker: marker.into(),
            handler,
        }
    }

    /// The marker annotation this hook listens for.
    pub fn marker(&self) -> &str {
        &self.marker
    }
}
