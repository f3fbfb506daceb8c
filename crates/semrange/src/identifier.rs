//! Pre-release and build metadata identifiers

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Invalid identifier \"{0}\", identifiers must match [-A-Za-z0-9]+")]
    InvalidIdentifier(String),
}

/// A single dot-separated segment of a pre-release or build suffix.
///
/// Identifiers are validated once at construction and never change
/// afterwards. Two identifiers are equal iff their raw text is equal;
/// precedence is a separate, coarser relation (see [`Identifier::cmp_precedence`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    text: String,
    is_numeric: bool,
}

impl Identifier {
    /// Create an identifier, validating it against `[-A-Za-z0-9]+`
    pub fn new(text: impl Into<String>) -> Result<Self, IdentifierError> {
        let text = text.into();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(IdentifierError::InvalidIdentifier(text));
        }
        let is_numeric = text.bytes().all(|b| b.is_ascii_digit());
        Ok(Identifier { text, is_numeric })
    }

    /// Get the raw text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check if the identifier consists only of decimal digits
    pub fn is_numeric(&self) -> bool {
        self.is_numeric
    }

    /// Compare two identifiers by semver precedence.
    ///
    /// Numeric identifiers sort before alphanumeric ones. Two numeric
    /// identifiers compare as unsigned integers of any length, so `"01"` and
    /// `"1"` have equal precedence while not being equal identifiers.
    /// Alphanumeric identifiers compare byte-wise.
    pub fn cmp_precedence(&self, other: &Identifier) -> Ordering {
        match (self.is_numeric, other.is_numeric) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) => compare_numeric(&self.text, &other.text),
            (false, false) => self.text.as_bytes().cmp(other.text.as_bytes()),
        }
    }
}

/// Compare two digit strings by numeric value without parsing them
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Identifier::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join identifiers with dots, as they appear in a version string
pub(crate) fn join(identifiers: &[Identifier]) -> String {
    identifiers
        .iter()
        .map(Identifier::as_str)
        .collect::<Vec<_>>()
        .join(".")
}
