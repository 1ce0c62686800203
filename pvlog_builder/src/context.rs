//! Build context - the explicit state of one build-description phase.
//!
//! The context replaces any process-global registry: a single
//! `BuildContext` is threaded through the declaration phase, owns the
//! installed components (at most one per component type) and the marker
//! hooks, and is consumed by `finalize` which produces the boot script.
//!
//! Single-threaded, single-pass: ordering comes entirely from
//! declaration order, never from synchronization.

use std::any::{Any, TypeId};

use tracing::debug;

use crate::boot::BootScript;
use crate::error::{BuildError, BuildResult};
use crate::hooks::{HookFn, MarkerHook};
use crate::record::RecordDecl;

// ─── Component ──────────────────────────────────────────────────────

/// A build-description component.
///
/// Components are installed into a [`BuildContext`] at most once per
/// type. At the end of the declaration phase each component may emit
/// boot directives and must release whatever resources it holds.
pub trait Component: Any {
    /// Stable kind name, used in errors and logs.
    fn kind(&self) -> &'static str;

    /// Append this component's once-per-build boot directives.
    fn boot_lines(&self, _out: &mut Vec<String>) {}

    /// Close owned resources. Called once, in install order, at the end
    /// of the declaration phase.
    fn finalize(&mut self) -> BuildResult<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ─── ComponentSet ───────────────────────────────────────────────────

/// Insertion-ordered component registry keyed by component type.
///
/// Carries the single-instance invariant: inserting a second component
/// of the same type fails with `DuplicateComponent`.
#[derive(Default)]
pub struct ComponentSet {
    entries: Vec<(TypeId, Box<dyn Component>)>,
}

impl ComponentSet {
    /// Insert a component, rejecting duplicates of the same type.
    pub fn insert<C: Component>(&mut self, component: C) -> BuildResult<()> {
        let id = TypeId::of::<C>();
        if self.entries.iter().any(|(tid, _)| *tid == id) {
            return Err(BuildError::DuplicateComponent {
                component: component.kind().to_string(),
            });
        }
        debug!(component = component.kind(), "installed component");
        self.entries.push((id, Box::new(component)));
        Ok(())
    }

    /// Whether a component of type `C` is installed.
    pub fn contains<C: Component>(&self) -> bool {
        let id = TypeId::of::<C>();
        self.entries.iter().any(|(tid, _)| *tid == id)
    }

    /// Look up the installed component of type `C`.
    pub fn get<C: Component>(&self) -> Option<&C> {
        let id = TypeId::of::<C>();
        self.entries
            .iter()
            .find(|(tid, _)| *tid == id)
            .and_then(|(_, c)| c.as_any().downcast_ref::<C>())
    }

    /// Mutable lookup of the installed component of type `C`.
    pub fn get_mut<C: Component>(&mut self) -> Option<&mut C> {
        let id = TypeId::of::<C>();
        self.entries
            .iter_mut()
            .find(|(tid, _)| *tid == id)
            .and_then(|(_, c)| c.as_any_mut().downcast_mut::<C>())
    }

    /// Number of installed components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no components are installed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ─── BuildContext ───────────────────────────────────────────────────

/// State of one build-description phase.
pub struct BuildContext {
    components: ComponentSet,
    hooks: Vec<MarkerHook>,
    records: Vec<RecordDecl>,
}

impl BuildContext {
    /// An empty context: no components, no hooks, no records.
    pub fn new() -> Self {
        Self {
            components: ComponentSet::default(),
            hooks: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Install a component. Fails with `DuplicateComponent` if a
    /// component of the same type is already installed.
    pub fn install<C: Component>(&mut self, component: C) -> BuildResult<()> {
        self.components.insert(component)
    }

    /// Shared access to the component set.
    pub fn components(&self) -> &ComponentSet {
        &self.components
    }

    /// Mutable access to the component set.
    pub fn components_mut(&mut self) -> &mut ComponentSet {
        &mut self.components
    }

    /// Register a hook fired for every subsequently declared record that
    /// carries `marker`. Unmarked records fire nothing.
    pub fn add_metadata_hook(&mut self, marker: impl Into<String>, handler: HookFn) {
        let hook = MarkerHook::new(marker, handler);
        debug!(marker = hook.marker(), "registered metadata hook");
        self.hooks.push(hook);
    }

    /// Declare a record.
    ///
    /// Fires every matching marker hook in registration order, then
    /// retains the record. A hook failure aborts the declaration.
    pub fn declare_record(&mut self, record: RecordDecl) -> BuildResult<()> {
        for hook in &self.hooks {
            if record.has_marker(&hook.marker) {
                (hook.handler)(&mut self.components, &record)?;
            }
        }
        debug!(record = %record.name(), rtype = record.rtype(), "declared record");
        self.records.push(record);
        Ok(())
    }

    /// Records declared so far, in declaration order.
    pub fn records(&self) -> &[RecordDecl] {
        &self.records
    }

    /// End the declaration phase.
    ///
    /// Collects boot directives from every component in install order,
    /// then finalizes each component (closing generated files). Consumes
    /// the context; a fresh build starts from a fresh context.
    pub fn finalize(mut self) -> BuildResult<BootScript> {
        let mut lines = Vec::new();
        for (_, component) in &self.components.entries {
            component.boot_lines(&mut lines);
        }
        for (_, component) in &mut self.components.entries {
            component.finalize()?;
        }
        debug!(directives = lines.len(), "build phase finalized");
        Ok(BootScript::new(lines))
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new()
    }
}
