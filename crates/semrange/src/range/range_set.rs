//! Parsed range expressions: an OR of AND clauses over atoms

use std::fmt;
use std::str::FromStr;

use super::evaluator::Evaluator;
use super::{Operator, PartialVersion, RangeParseError, RangeParser};
use crate::Version;

/// A single range term
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// The empty range, matches every version
    Any,
    /// `op partial`, e.g. `>=1.2`
    Comparator { operator: Operator, partial: PartialVersion },
    /// `from - to`
    Hyphen { from: PartialVersion, to: PartialVersion },
    /// `~partial`
    Tilde(PartialVersion),
    /// `^partial`
    Caret(PartialVersion),
    /// A partial version without operator or wildcard markers, e.g. `1.2`
    Bare(PartialVersion),
    /// A partial version with wildcard markers, e.g. `1.2.x` or `*`
    Wildcard(PartialVersion),
}

/// Whitespace separated atoms which must all match
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    atoms: Vec<Atom>,
}

impl Clause {
    pub(crate) fn new(atoms: Vec<Atom>) -> Self {
        Clause { atoms }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }
}

/// A parsed range expression: clauses separated by `||`, at least one of
/// which must match.
///
/// A `RangeSet` holds no reference to any candidate version, so one parsed
/// range can be evaluated against any number of versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeSet {
    clauses: Vec<Clause>,
}

impl RangeSet {
    pub(crate) fn new(clauses: Vec<Clause>) -> Self {
        RangeSet { clauses }
    }

    /// The range that matches every version
    pub fn any() -> Self {
        RangeSet::new(vec![Clause::new(vec![Atom::Any])])
    }

    /// Parse a range expression such as `>=1.2.3 <2 || ^3.1`
    pub fn parse(range: &str) -> Result<Self, RangeParseError> {
        RangeParser::new().parse(range)
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Check if the given version satisfies the range
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        Evaluator::new(version).range_set(self)
    }
}

impl FromStr for RangeSet {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeSet::parse(s)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Written as nothing, which parses back to `Any`
            Atom::Any => Ok(()),
            Atom::Comparator { operator, partial } => write!(f, "{}{}", operator, partial),
            Atom::Hyphen { from, to } => write!(f, "{} - {}", from, to),
            Atom::Tilde(partial) => write!(f, "~{}", partial),
            Atom::Caret(partial) => write!(f, "^{}", partial),
            Atom::Bare(partial) | Atom::Wildcard(partial) => write!(f, "{}", partial),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let atoms: Vec<String> = self.atoms.iter().map(|a| a.to_string()).collect();
        write!(f, "{}", atoms.join(" "))
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clauses: Vec<String> = self.clauses.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", clauses.join(" || "))
    }
}
