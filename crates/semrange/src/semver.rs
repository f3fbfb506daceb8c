//! Semver facade providing high-level version operations
//!
//! Everything here is infallible: unparsable versions are treated as
//! invalid or skipped, and an unparsable range is satisfied by nothing.

use std::cmp::Ordering;

use crate::{RangeParseError, RangeSet, Version};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a string is a valid (possibly partial) version
    pub fn valid(version: &str) -> bool {
        Version::parse(version).is_ok()
    }

    /// Check if a version satisfies a range
    pub fn satisfies(version: &str, range: &str) -> bool {
        let Some(version) = parse_version(version) else {
            return false;
        };
        match parse_range(range) {
            Some(range) => range.is_satisfied_by(&version),
            None => false,
        }
    }

    /// Parse a range once and return a reusable representation
    pub fn parse_range(range: &str) -> Result<RangeSet, RangeParseError> {
        RangeSet::parse(range)
    }

    /// Check a version against a pre-parsed range
    pub fn satisfies_parsed(version: &str, range: &RangeSet) -> bool {
        parse_version(version).is_some_and(|v| range.is_satisfied_by(&v))
    }

    /// Return the canonical form of the highest version satisfying the range.
    ///
    /// The range is parsed once and evaluated against every candidate;
    /// candidates that are not valid versions are skipped.
    pub fn max_satisfying<S: AsRef<str>>(versions: &[S], range: &str) -> Option<String> {
        Self::max_satisfying_parsed(versions, &parse_range(range)?)
    }

    /// Same as [`Semver::max_satisfying`] with an already parsed range
    pub fn max_satisfying_parsed<S: AsRef<str>>(versions: &[S], range: &RangeSet) -> Option<String> {
        best_satisfying(versions, range, Ordering::Greater)
    }

    /// Return the canonical form of the lowest version satisfying the range
    pub fn min_satisfying<S: AsRef<str>>(versions: &[S], range: &str) -> Option<String> {
        Self::min_satisfying_parsed(versions, &parse_range(range)?)
    }

    /// Same as [`Semver::min_satisfying`] with an already parsed range
    pub fn min_satisfying_parsed<S: AsRef<str>>(versions: &[S], range: &RangeSet) -> Option<String> {
        best_satisfying(versions, range, Ordering::Less)
    }

    /// Return the highest of already parsed versions satisfying the range
    pub fn max_version_satisfying(versions: &[Version], range: &str) -> Option<Version> {
        let range = parse_range(range)?;
        pick(versions.iter().filter(|v| range.is_satisfied_by(v)), Ordering::Greater).cloned()
    }

    /// Return all versions that satisfy the range, in input order
    pub fn satisfied_by<S: AsRef<str>>(versions: &[S], range: &str) -> Vec<String> {
        match parse_range(range) {
            Some(range) => Self::satisfied_by_parsed(versions, &range),
            None => Vec::new(),
        }
    }

    /// Same as [`Semver::satisfied_by`] with an already parsed range
    pub fn satisfied_by_parsed<S: AsRef<str>>(versions: &[S], range: &RangeSet) -> Vec<String> {
        versions
            .iter()
            .map(AsRef::as_ref)
            .filter(|v| parse_version(v).is_some_and(|parsed| satisfies_logged(range, &parsed)))
            .map(str::to_string)
            .collect()
    }

    /// Sort versions in ascending order, dropping invalid ones
    pub fn sort<S: AsRef<str>>(versions: &[S]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort), dropping invalid ones
    pub fn rsort<S: AsRef<str>>(versions: &[S]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort<S: AsRef<str>>(versions: &[S], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, &str)> = versions
            .iter()
            .map(AsRef::as_ref)
            .filter_map(|v| Some((parse_version(v)?, v)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = a.cmp_precedence(b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed.into_iter().map(|(_, original)| original.to_string()).collect()
    }
}

fn best_satisfying<S: AsRef<str>>(versions: &[S], range: &RangeSet, wanted: Ordering) -> Option<String> {
    let matching: Vec<Version> = versions
        .iter()
        .filter_map(|v| parse_version(v.as_ref()))
        .filter(|v| satisfies_logged(range, v))
        .collect();

    pick(matching.iter(), wanted).map(Version::to_string)
}

/// First version in iteration order that no later version beats in the
/// `wanted` direction
fn pick<'a>(versions: impl Iterator<Item = &'a Version>, wanted: Ordering) -> Option<&'a Version> {
    versions.fold(None, |best, candidate| match best {
        Some(best) if candidate.cmp_precedence(best) != wanted => Some(best),
        _ => Some(candidate),
    })
}

fn parse_version(version: &str) -> Option<Version> {
    match Version::parse(version) {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("Ignoring invalid version: {}", e);
            None
        }
    }
}

fn parse_range(range: &str) -> Option<RangeSet> {
    match RangeSet::parse(range) {
        Ok(r) => Some(r),
        Err(e) => {
            log::debug!("Range matches nothing: {}", e);
            None
        }
    }
}

fn satisfies_logged(range: &RangeSet, version: &Version) -> bool {
    let result = range.is_satisfied_by(version);
    log::trace!("{} satisfies \"{}\": {}", version, range, result);
    result
}
