//! The semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::identifier::{self, Identifier};
use crate::range::RangeSet;
use crate::{VersionParser, VersionParserError};

/// An immutable semantic version.
///
/// `PartialEq`/`Hash` are structural and include build metadata, while
/// [`Version::cmp_precedence`] implements semver precedence and ignores it.
/// `1.0.0+a` and `1.0.0+b` are therefore unequal but of equal precedence,
/// so `Version` does not implement `Ord`.
/// Largest value the parsers accept for major, minor or patch, so that
/// incrementing a parsed component never overflows
pub const MAX_COMPONENT: u64 = u64::MAX - 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<Identifier>,
    build: Vec<Identifier>,
}

impl Version {
    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Vec<Identifier>,
        build: Vec<Identifier>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release,
            build,
        }
    }

    fn release(major: u64, minor: u64, patch: u64) -> Self {
        Self::from_parts(major, minor, patch, Vec::new(), Vec::new())
    }

    /// Parse a version string such as `1.0.3-beta.4+build.1` or `1.2`
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> &[Identifier] {
        &self.pre_release
    }

    pub fn build(&self) -> &[Identifier] {
        &self.build
    }

    /// Check if the version carries pre-release identifiers
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Check if major, minor and patch are the same, ignoring identifiers
    pub fn same_release(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }

    /// Next major version, `1.2.3-beta+b` becomes `2.0.0`
    pub fn increment_major(&self) -> Version {
        Self::release(self.major.saturating_add(1), 0, 0)
    }

    /// Next minor version, `1.2.3-beta+b` becomes `1.3.0`
    pub fn increment_minor(&self) -> Version {
        Self::release(self.major, self.minor.saturating_add(1), 0)
    }

    /// Next patch version, `1.2.3-beta+b` becomes `1.2.4`
    pub fn increment_patch(&self) -> Version {
        Self::release(self.major, self.minor, self.patch.saturating_add(1))
    }

    /// Compare two versions by semver precedence.
    ///
    /// Major, minor and patch are compared numerically. A release has higher
    /// precedence than any of its pre-releases; pre-release lists are
    /// compared identifier by identifier and a longer list wins when all
    /// shared identifiers are equal. Build metadata is ignored.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_release(&self.pre_release, &other.pre_release))
    }

    /// Check if this version satisfies an already parsed range
    pub fn satisfies(&self, range: &RangeSet) -> bool {
        range.is_satisfied_by(self)
    }
}

fn compare_pre_release(a: &[Identifier], b: &[Identifier]) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    match (a.is_empty(), b.is_empty()) {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        _ => {}
    }

    a.iter()
        .zip(b)
        .map(|(left, right)| left.cmp_precedence(right))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", identifier::join(&self.pre_release))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", identifier::join(&self.build))?;
        }
        Ok(())
    }
}
