//! Record declarations.
//!
//! A `RecordDecl` stands for one database record declared by the build
//! description. Records may carry marker annotations; declaring a record
//! fires every registered hook whose marker it carries (see
//! [`crate::context::BuildContext::declare_record`]).

use crate::error::BuildResult;
use crate::pv::PvName;

/// One declared record: a validated name, a record type and the marker
/// annotations attached at the declaration site.
#[derive(Debug, Clone)]
pub struct RecordDecl {
    name: PvName,
    rtype: String,
    markers: Vec<String>,
}

impl RecordDecl {
    /// Declare a record of type `rtype` (e.g. `"ao"`) named `name`.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidPvName` if the name fails validation.
    pub fn new(rtype: impl Into<String>, name: &str) -> BuildResult<Self> {
        Ok(Self {
            name: PvName::new(name)?,
            rtype: rtype.into(),
            markers: Vec::new(),
        })
    }

    /// Attach a marker annotation. Attaching the same marker twice is a
    /// no-op.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        if !self.markers.contains(&marker) {
            self.markers.push(marker);
        }
        self
    }

    /// Whether this record carries the given marker.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Record name.
    pub fn name(&self) -> &PvName {
        &self.name
    }

    /// Record type.
    pub fn rtype(&self) -> &str {
        &self.rtype
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_membership() {
        let rec = RecordDecl::new("ao", "TEST").unwrap().with_marker("blacklist");
        assert!(rec.has_marker("blacklist"));
        assert!(!rec.has_marker("archive"));
        assert_eq!(rec.rtype(), "ao");
        assert_eq!(rec.name().as_str(), "TEST");
    }

    #[test]
    fn duplicate_marker_is_noop() {
        let rec = RecordDecl::new("ai", "TEST")
            .unwrap()
            .with_marker("blacklist")
            .with_marker("blacklist");
        assert_eq!(rec.markers.len(), 1);
    }

    #[test]
    fn invalid_name_is_rejected() {
        assert!(RecordDecl::new("ao", "").is_err());
    }
}
