//! Build-description loading.
//!
//! The generator is driven by one TOML file describing the IOC build:
//! which records exist, which carry the blacklist marker, which extra
//! names to blacklist explicitly, and where the artifacts go.
//!
//! # TOML Example
//!
//! ```toml
//! ioc_name = "TS-XX-IOC-99"
//! # access_file = "/site/security/ioc.acf"   # omit for the bundled default
//! blacklist = ["TS-XX-IOC-99:HEARTBEAT"]
//!
//! [output]
//! dir = "iocBoot"
//!
//! [[record]]
//! name = "TS-XX-IOC-99:TEST"
//! rtype = "ao"
//!
//! [[record]]
//! name = "TS-XX-IOC-99:TEST2"
//! rtype = "ao"
//! blacklist = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for build-description loading.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Build description not found at the specified path.
    #[error("Build description not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse build description: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Build description validation failed: {0}")]
    ValidationError(String),
}

/// One record declaration in the build description.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordCfg {
    /// Record (PV) name.
    pub name: String,
    /// Record type, e.g. `"ao"`.
    pub rtype: String,
    /// Whether the record carries the blacklist marker.
    #[serde(default)]
    pub blacklist: bool,
}

/// Output locations.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputCfg {
    /// Directory receiving the generated artifacts.
    pub dir: PathBuf,
}

/// The full build description.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// IOC instance name; used in the blacklist file name.
    pub ioc_name: String,

    /// Explicit access-security policy file. `None` selects the bundled
    /// default policy.
    #[serde(default)]
    pub access_file: Option<PathBuf>,

    /// Literal PV names blacklisted independent of record declarations.
    #[serde(default)]
    pub blacklist: Vec<String>,

    /// Declared records.
    #[serde(default, rename = "record")]
    pub records: Vec<RecordCfg>,

    /// Output locations.
    pub output: OutputCfg,
}

impl BuildConfig {
    /// Load a build description from a TOML file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::FileNotFound` if the file does not exist
    /// - `ConfigError::ParseError` if TOML syntax is invalid
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validate the build description.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `ioc_name` is empty or
    /// any record name is empty. PV-name syntax beyond that is the
    /// library's concern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ioc_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "ioc_name cannot be empty".to_string(),
            ));
        }
        for record in &self.records {
            if record.name.is_empty() {
                return Err(ConfigError::ValidationError(
                    "record name cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const EXAMPLE: &str = r#"ioc_name = "TS-XX-IOC-99"
blacklist = ["TS-XX-IOC-99:HEARTBEAT"]

[output]
dir = "iocBoot"

[[record]]
name = "TS-XX-IOC-99:TEST"
rtype = "ao"

[[record]]
name = "TS-XX-IOC-99:TEST2"
rtype = "ao"
blacklist = true
"#;

    #[test]
    fn parses_example_description() {
        let config: BuildConfig = toml::from_str(EXAMPLE).unwrap();
        assert_eq!(config.ioc_name, "TS-XX-IOC-99");
        assert_eq!(config.access_file, None);
        assert_eq!(config.blacklist, ["TS-XX-IOC-99:HEARTBEAT"]);
        assert_eq!(config.records.len(), 2);
        assert!(!config.records[0].blacklist);
        assert!(config.records[1].blacklist);
        assert_eq!(config.output.dir, PathBuf::from("iocBoot"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{EXAMPLE}").unwrap();
        file.flush().unwrap();
        let config = BuildConfig::load(file.path()).unwrap();
        assert_eq!(config.ioc_name, "TS-XX-IOC-99");
    }

    #[test]
    fn missing_file() {
        let result = BuildConfig::load(Path::new("/nonexistent/pvlog.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound)));
    }

    #[test]
    fn parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();
        file.flush().unwrap();
        let result = BuildConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn empty_ioc_name_rejected() {
        let config: BuildConfig =
            toml::from_str("ioc_name = \"\"\n[output]\ndir = \"out\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
