//! Error types for the build-description phase

use thiserror::Error;

/// Errors raised while assembling the build description or writing
/// generated files.
///
/// Every variant is fatal: the build description is inconsistent or the
/// output cannot be produced, so the surrounding build aborts. There is
/// no retry and no partial output.
#[derive(Error, Debug)]
pub enum BuildError {
    /// A second registration of a single-instance component
    #[error("Component already installed: {component}")]
    DuplicateComponent {
        /// Component kind name
        component: String,
    },

    /// Blacklist entry requested while no blacklist registry is installed
    #[error("No active blacklist registry - install BlacklistPvs first")]
    NoActiveRegistry,

    /// PV name failed validation
    #[error("Invalid PV name {name:?}: {reason}")]
    InvalidPvName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// IO error on a generated file
    #[error("IO error: {source}")]
    Io {
        /// Source IO error
        #[from]
        source: std::io::Error,
    },
}

/// Result type for build-description operations
pub type BuildResult<T> = Result<T, BuildError>;
