//! Schema version gate
//!
//! The root Taskfile's version is read once and picks a [`SchemaBehavior`].
//! Included Taskfiles are always read under the root's behaviour.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Taskfile does not declare a version")]
    Missing,

    #[error("Could not parse Taskfile version \"{0}\"")]
    Invalid(String),
}

/// A declared schema version, compared as a decimal number
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SchemaVersion(f64);

impl SchemaVersion {
    /// First version with includes and dotenv support
    pub const V3: SchemaVersion = SchemaVersion(3.0);

    /// Parses `"3"`, `"3.0"`, `"2.6"` and the like
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let trimmed = raw.trim();
        let well_formed = !trimmed.is_empty()
            && trimmed.chars().all(|c| c.is_ascii_digit() || c == '.')
            && trimmed.matches('.').count() <= 1
            && !trimmed.starts_with('.')
            && !trimmed.ends_with('.');

        if !well_formed {
            return Err(VersionError::Invalid(raw.to_string()));
        }

        trimmed
            .parse::<f64>()
            .map(SchemaVersion)
            .map_err(|_| VersionError::Invalid(raw.to_string()))
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a root Taskfile is resolved, chosen once from its version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaBehavior {
    /// Before v3: no includes, no dotenv, merge `Taskfile_<os>.yml` flatly
    Legacy,
    /// v3 and later: dotenv overlay and namespaced includes
    Current,
}

impl SchemaBehavior {
    pub fn for_version(version: SchemaVersion) -> Self {
        if version >= SchemaVersion::V3 {
            SchemaBehavior::Current
        } else {
            SchemaBehavior::Legacy
        }
    }

    /// Whether `dotenv:` entries are honoured
    pub fn reads_dotenv(self) -> bool {
        matches!(self, SchemaBehavior::Current)
    }

    /// Whether `includes:` entries are honoured
    pub fn resolves_includes(self) -> bool {
        matches!(self, SchemaBehavior::Current)
    }

    /// Whether the per-platform sibling Taskfile is merged
    pub fn merges_platform_taskfile(self) -> bool {
        matches!(self, SchemaBehavior::Legacy)
    }
}
