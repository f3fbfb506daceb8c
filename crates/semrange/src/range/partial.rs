//! Partial versions as written inside range expressions

use std::fmt;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::identifier::{Identifier, IdentifierError};
use crate::version_parser::parse_identifiers;
use crate::version::MAX_COMPONENT;
use crate::Version;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartialVersionError {
    #[error("\"{0}\" is not a partial version")]
    Malformed(String),
    #[error("\"{partial}\": {component} is out of range")]
    OutOfRange { partial: String, component: &'static str },
    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),
}

lazy_static! {
    static ref PARTIAL_RE: Regex = Regex::new(
        r"^[vV]?(\d+|[xX*])(?:\.(\d+|[xX*])(?:\.(\d+|[xX*]))?)?(?:-([0-9A-Za-z.-]*))?(?:\+([0-9A-Za-z.-]*))?$"
    ).unwrap();
}

/// One of major, minor or patch in a partial version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Number(u64),
    /// `x`, `X` or `*`
    Wildcard,
    /// Not written at all
    Absent,
}

impl Component {
    /// Check if the component constrains nothing (wildcard or absent)
    pub fn is_unconstrained(&self) -> bool {
        !matches!(self, Component::Number(_))
    }

    pub fn number(&self) -> Option<u64> {
        match self {
            Component::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// A version that may omit or wildcard trailing components, e.g. `1.2`,
/// `1.x`, `*` or `v2.0.0-rc.1`.
///
/// Once a component is a wildcard, every later component that is written
/// is treated as a wildcard as well, so `1.x.3` means `1.x.x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartialVersion {
    major: Component,
    minor: Component,
    patch: Component,
    pre_release: Vec<Identifier>,
    build: Vec<Identifier>,
    text: String,
}

impl PartialVersion {
    /// Parse a single partial version token
    pub fn parse(token: &str) -> Result<Self, PartialVersionError> {
        let caps = PARTIAL_RE
            .captures(token)
            .ok_or_else(|| PartialVersionError::Malformed(token.to_string()))?;

        let major = parse_component(&caps, 1, token, "major")?;
        let mut minor = parse_component(&caps, 2, token, "minor")?;
        let mut patch = parse_component(&caps, 3, token, "patch")?;

        if major == Component::Wildcard && minor != Component::Absent {
            minor = Component::Wildcard;
        }
        if minor == Component::Wildcard && patch != Component::Absent {
            patch = Component::Wildcard;
        }

        let text = token.strip_prefix(['v', 'V']).unwrap_or(token).to_string();

        Ok(PartialVersion {
            major,
            minor,
            patch,
            pre_release: parse_identifiers(caps.get(4).map(|m| m.as_str()))?,
            build: parse_identifiers(caps.get(5).map(|m| m.as_str()))?,
            text,
        })
    }

    pub fn major(&self) -> Component {
        self.major
    }

    pub fn minor(&self) -> Component {
        self.minor
    }

    pub fn patch(&self) -> Component {
        self.patch
    }

    pub fn pre_release(&self) -> &[Identifier] {
        &self.pre_release
    }

    /// The literal as written, without a leading `v`
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if any of major, minor or patch is a wildcard marker
    pub fn has_wildcard(&self) -> bool {
        [self.major, self.minor, self.patch].contains(&Component::Wildcard)
    }

    /// Check if the partial is a lone wildcard such as `*` or `x`
    pub fn is_any(&self) -> bool {
        self.major == Component::Wildcard
    }

    /// Check if minor is absent or a wildcard (and with it, patch)
    pub fn minor_omitted(&self) -> bool {
        self.minor.is_unconstrained()
    }

    /// Check if patch is absent or a wildcard
    pub fn patch_omitted(&self) -> bool {
        self.patch.is_unconstrained()
    }

    /// Concrete version with 0 substituted for every unconstrained component
    pub fn to_version(&self) -> Version {
        Version::from_parts(
            self.major.number().unwrap_or(0),
            self.minor.number().unwrap_or(0),
            self.patch.number().unwrap_or(0),
            self.pre_release.clone(),
            self.build.clone(),
        )
    }
}

fn parse_component(
    caps: &Captures,
    index: usize,
    token: &str,
    component: &'static str,
) -> Result<Component, PartialVersionError> {
    let Some(m) = caps.get(index) else {
        return Ok(Component::Absent);
    };
    match m.as_str() {
        "x" | "X" | "*" => Ok(Component::Wildcard),
        digits => match digits.parse::<u64>() {
            Ok(n) if n <= MAX_COMPONENT => Ok(Component::Number(n)),
            _ => Err(PartialVersionError::OutOfRange {
                partial: token.to_string(),
                component,
            }),
        },
    }
}

impl fmt::Display for PartialVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
