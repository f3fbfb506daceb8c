//! Version literal parsing

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::identifier::{Identifier, IdentifierError};
use crate::version::MAX_COMPONENT;
use crate::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Invalid version string \"{version}\": {component} is out of range")]
    InvalidComponent { version: String, component: &'static str },
    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),
}

lazy_static! {
    // major[.minor[.patch]][-pre][+build], each part optional after major
    static ref VERSION_RE: Regex = Regex::new(
        r"^[vV]?(\d+)(?:\.(\d+)(?:\.(\d+))?)?(?:-([0-9A-Za-z.-]*))?(?:\+([0-9A-Za-z.-]*))?$"
    ).unwrap();
}

/// Parser for version literals.
///
/// Accepts fully specified versions (`1.2.3-beta.1+build`) as well as
/// partial ones (`1`, `1.2`), whose missing numeric parts default to 0.
/// A single leading `v`/`V` and surrounding whitespace are tolerated.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        let trimmed = version.trim();
        let caps = VERSION_RE
            .captures(trimmed)
            .ok_or_else(|| VersionParserError::InvalidVersion(version.to_string()))?;

        let major = parse_numeric(&caps, 1, trimmed, "major")?;
        let minor = parse_numeric(&caps, 2, trimmed, "minor")?;
        let patch = parse_numeric(&caps, 3, trimmed, "patch")?;
        let pre_release = parse_identifiers(caps.get(4).map(|m| m.as_str()))?;
        let build = parse_identifiers(caps.get(5).map(|m| m.as_str()))?;

        Ok(Version::from_parts(major, minor, patch, pre_release, build))
    }
}

fn parse_numeric(
    caps: &Captures,
    index: usize,
    version: &str,
    component: &'static str,
) -> Result<u64, VersionParserError> {
    let Some(m) = caps.get(index) else {
        return Ok(0);
    };
    match m.as_str().parse::<u64>() {
        Ok(n) if n <= MAX_COMPONENT => Ok(n),
        _ => Err(VersionParserError::InvalidComponent {
            version: version.to_string(),
            component,
        }),
    }
}

/// Split a dot-separated identifier list; `None` means the suffix is absent
pub(crate) fn parse_identifiers(list: Option<&str>) -> Result<Vec<Identifier>, IdentifierError> {
    match list {
        Some(list) => list.split('.').map(Identifier::new).collect(),
        None => Ok(Vec::new()),
    }
}
