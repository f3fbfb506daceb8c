//! Evaluation of a parsed range against one candidate version

use std::cmp::Ordering;

use super::partial::{Component, PartialVersion};
use super::range_set::{Atom, Clause, RangeSet};
use super::Operator;
use crate::Version;

/// Evaluates range trees against a fixed candidate version.
///
/// Every atom is a pure function of the candidate and the atom itself; the
/// evaluator keeps no state between atoms.
pub(crate) struct Evaluator<'a> {
    candidate: &'a Version,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(candidate: &'a Version) -> Self {
        Evaluator { candidate }
    }

    pub(crate) fn range_set(&self, range: &RangeSet) -> bool {
        range.clauses().iter().any(|clause| self.clause(clause))
    }

    fn clause(&self, clause: &Clause) -> bool {
        clause.atoms().iter().all(|atom| self.atom(atom))
    }

    fn atom(&self, atom: &Atom) -> bool {
        match atom {
            Atom::Any => true,
            Atom::Comparator { operator, partial } => self.comparator(*operator, partial),
            Atom::Hyphen { from, to } => self.hyphen(from, to),
            Atom::Tilde(partial) => self.tilde(partial),
            Atom::Caret(partial) => self.caret(partial),
            Atom::Bare(partial) => self.bare(partial),
            Atom::Wildcard(partial) => self.matches_wildcard(partial),
        }
    }

    fn cmp(&self, other: &Version) -> Ordering {
        self.candidate.cmp_precedence(other)
    }

    fn comparator(&self, operator: Operator, partial: &PartialVersion) -> bool {
        let mut bound = partial.to_version();
        let result = match operator {
            Operator::GreaterThan => {
                // `>1.2` means "above every 1.2.*", i.e. `>=1.3.0`
                if partial.patch_omitted() || partial.minor_omitted() {
                    if partial.patch_omitted() {
                        bound = bound.increment_minor();
                    }
                    if partial.minor_omitted() {
                        bound = bound.increment_major();
                    }
                    self.cmp(&bound).is_ge()
                } else {
                    self.cmp(&bound).is_gt()
                }
            }
            Operator::GreaterThanOrEqual => self.cmp(&bound).is_ge() || self.matches_wildcard(partial),
            Operator::LessThan => self.cmp(&bound).is_lt(),
            Operator::LessThanOrEqual => self.cmp(&bound).is_le() || self.matches_wildcard(partial),
            Operator::Equal => self.cmp(&bound).is_eq() || self.matches_wildcard(partial),
        };

        // a pre-release only matches comparators pinned to its own release
        if self.candidate.is_pre_release() {
            result && bound.same_release(self.candidate) && bound.is_pre_release()
        } else {
            result
        }
    }

    fn matches_wildcard(&self, partial: &PartialVersion) -> bool {
        let candidate = self.candidate;
        if candidate.to_string() == partial.text() {
            return true;
        }
        if candidate.is_pre_release() {
            return false;
        }
        if partial.is_any() {
            return true;
        }

        let matches = |component: Component, actual: u64| component.number().map_or(true, |n| n == actual);
        matches(partial.major(), candidate.major())
            && matches(partial.minor(), candidate.minor())
            && matches(partial.patch(), candidate.patch())
    }

    fn bare(&self, partial: &PartialVersion) -> bool {
        let version = partial.to_version();
        let candidate = self.candidate;
        if partial.minor_omitted() {
            version.major() == candidate.major() && !candidate.is_pre_release()
        } else if partial.patch_omitted() {
            version.major() == candidate.major()
                && version.minor() == candidate.minor()
                && !candidate.is_pre_release()
        } else {
            self.cmp(&version).is_eq()
        }
    }

    fn tilde(&self, partial: &PartialVersion) -> bool {
        let lower = partial.to_version();
        // once minor is given, tilde caps at the next minor even with an explicit patch
        let upper = if partial.minor_omitted() {
            lower.increment_major()
        } else {
            lower.increment_minor()
        };
        self.gated_half_open(&lower, &upper)
    }

    fn caret(&self, partial: &PartialVersion) -> bool {
        let lower = partial.to_version();
        let upper = if lower.major() == 0 && lower.minor() == 0 {
            lower.increment_patch()
        } else if lower.major() == 0 {
            lower.increment_minor()
        } else {
            lower.increment_major()
        };
        self.gated_half_open(&lower, &upper)
    }

    /// `lower <= candidate < upper`, where a pre-release candidate is only
    /// admitted when `lower` is a pre-release of the same release.
    fn gated_half_open(&self, lower: &Version, upper: &Version) -> bool {
        let in_range = || self.cmp(lower).is_ge() && self.cmp(upper).is_lt();

        if lower.is_pre_release() && lower.same_release(self.candidate) {
            return in_range();
        }
        if self.candidate.is_pre_release() {
            return false;
        }
        in_range()
    }

    fn hyphen(&self, from: &PartialVersion, to: &PartialVersion) -> bool {
        let lower = from.to_version();
        let upper = to.to_version();
        let above_lower = self.cmp(&lower).is_ge();

        let result = if to.minor_omitted() {
            above_lower && self.cmp(&upper.increment_major()).is_lt()
        } else if to.patch_omitted() {
            above_lower && self.cmp(&upper.increment_minor()).is_lt()
        } else {
            above_lower && self.cmp(&upper).is_le()
        };

        if !self.candidate.is_pre_release() {
            return result;
        }
        let pinned = |bound: &Version| bound.is_pre_release() && bound.same_release(self.candidate);
        if pinned(&lower) || pinned(&upper) {
            result
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn satisfies(version: &str, range: &str) -> bool {
        let version = Version::parse(version).unwrap();
        let range = RangeSet::parse(range).unwrap();
        Evaluator::new(&version).range_set(&range)
    }

    #[test]
    fn test_greater_than_bumps_partial_bounds() {
        assert!(satisfies("1.3.0", ">1.2"));
        assert!(!satisfies("1.2.8", ">1.2"));
        assert!(satisfies("2.0.0", ">1"));
        assert!(!satisfies("1.9.9", ">1"));
        assert!(satisfies("1.3.0", ">1.2.x"));
        assert!(!satisfies("1.2.3", ">1.2.3"));
        assert!(satisfies("1.2.4", ">1.2.3"));
    }

    #[test]
    fn test_comparator_wildcard_leniency() {
        assert!(satisfies("0.7.2", ">=0.7.x"));
        assert!(!satisfies("0.6.2", ">=0.7.x"));
        assert!(satisfies("0.7.9", "<=0.7.x"));
        assert!(!satisfies("0.7.2", "<0.7.x"));
        assert!(satisfies("0.7.5", "=0.7.x"));
        assert!(!satisfies("0.8.2", "=0.7.x"));
    }

    #[test]
    fn test_comparator_pre_release_gating() {
        assert!(satisfies("1.2.3-beta", ">=1.2.3-alpha"));
        assert!(!satisfies("1.2.4-beta", ">=1.2.3-alpha"));
        assert!(!satisfies("1.2.3-beta", "<1.2.3"));
        assert!(!satisfies("1.2.3-beta", "<=1.2.3"));
        assert!(!satisfies("1.2.3-beta", "=1.2.3"));
        assert!(satisfies("1.2.3-beta", "=1.2.3-beta"));
        assert!(!satisfies("0.7.0-asdf", ">=0.7.x"));
    }

    #[test]
    fn test_wildcard_star_comparators() {
        assert!(satisfies("1.2.3", ">=*"));
        assert!(satisfies("1.2.3", "<=*"));
        assert!(!satisfies("1.2.3-beta", ">=*"));
    }

    #[test]
    fn test_wildcard_matching() {
        assert!(satisfies("1.2.3", "*"));
        assert!(satisfies("1.2.3", "x"));
        assert!(satisfies("2.1.3", "2.x.x"));
        assert!(!satisfies("3.1.3", "2.x.x"));
        assert!(satisfies("1.2.3", "1.2.*"));
        assert!(!satisfies("1.3.3", "1.2.*"));
        assert!(satisfies("1.9.3", "1.x.3"));
        assert!(!satisfies("1.2.3-foo", "*"));
        assert!(!satisfies("0.7.0-asdf", "0.7.x"));
    }

    #[test]
    fn test_bare_partials() {
        assert!(satisfies("1.2.3", "1.2"));
        assert!(!satisfies("2.4.1", "2.3"));
        assert!(satisfies("1.9.3", "1"));
        assert!(!satisfies("1.1.2", "2"));
        assert!(!satisfies("1.2.0-pre", "1.2"));
        assert!(satisfies("1.2.3+build", "1.2.3"));
        assert!(satisfies("1.0.2-1.2.3", "1.0.2-1.2.3"));
        assert!(!satisfies("1.2.3", "1.2.3-beta"));
    }

    #[test]
    fn test_tilde() {
        assert!(satisfies("2.4.5", "~2.4"));
        assert!(!satisfies("2.5.0", "~2.4"));
        assert!(!satisfies("2.3.9", "~2.4"));
        assert!(satisfies("1.9.9", "~1"));
        assert!(!satisfies("2.0.0", "~1"));
        assert!(satisfies("3.2.5", "~>3.2.1"));
        assert!(!satisfies("3.3.0", "~>3.2.1"));
        assert!(!satisfies("3.2.0", "~>3.2.1"));
        assert!(satisfies("0.10.31", "~0.10.x"));
        assert!(!satisfies("0.11.0", "~0.10.x"));
    }

    #[test]
    fn test_tilde_pre_release() {
        assert!(satisfies("0.5.4-beta.2", "~v0.5.4-beta"));
        assert!(!satisfies("0.5.4-alpha", "~v0.5.4-beta"));
        assert!(!satisfies("0.5.5-beta", "~0.5.4-beta"));
        assert!(!satisfies("1.2.4-beta", "~1.2.3"));
    }

    #[test]
    fn test_caret() {
        assert!(satisfies("1.8.1", "^1.2.3"));
        assert!(!satisfies("2.0.0", "^1.2.3"));
        assert!(!satisfies("1.2.2", "^1.2.3"));
        assert!(satisfies("0.1.9", "^0.1.2"));
        assert!(!satisfies("0.2.0", "^0.1.2"));
        assert!(satisfies("0.0.3", "^0.0.3"));
        assert!(!satisfies("0.0.4", "^0.0.3"));
        assert!(satisfies("0.0.1-beta", "^0.0.1-alpha"));
        assert!(!satisfies("1.2.3-beta", "^1.2.3"));
        assert!(!satisfies("2.0.0-alpha", "^1.2.3"));
    }

    #[test]
    fn test_hyphen() {
        assert!(satisfies("1.2.3", "1.0.0 - 2.0.0"));
        assert!(satisfies("2.0.0", "1.0.0 - 2.0.0"));
        assert!(!satisfies("2.2.3", "1.0.0 - 2.0.0"));
        assert!(satisfies("1.2.3", "1.1 - 4.0"));
        assert!(satisfies("4.0.9", "1.1 - 4.0"));
        assert!(!satisfies("4.1.0", "1.1 - 4.0"));
        assert!(satisfies("4.9.9", "1 - 4"));
        assert!(!satisfies("5.0.0", "1 - 4"));
        assert!(!satisfies("1.2.3", "1.1 - 1.2.0"));
    }

    #[test]
    fn test_hyphen_pre_release() {
        assert!(satisfies("2.4.3-alpha", "1.2.3 - 2.4.3-beta"));
        assert!(satisfies("1.2.3-pre.2", "1.2.3-pre.1 - 2.0.0"));
        assert!(!satisfies("1.2.3-pre.2", "1.2.3+asdf - 2.4.3+asdf"));
        assert!(!satisfies("2.4.3-alpha", "1.2.3+asdf - 2.4.3+asdf"));
    }

    #[test]
    fn test_and_or() {
        assert!(satisfies("1.2.3", "~1.2.1 >=1.2.3 1.2.3"));
        assert!(!satisfies("1.2.2", "~1.2.1 >=1.2.3"));
        assert!(satisfies("0.0.0", ">=0.2.3 || <0.0.1"));
        assert!(!satisfies("0.0.3", ">=0.2.3 || <0.0.1"));
    }

    #[test]
    fn test_bounds_at_largest_component() {
        assert!(!satisfies("18446744073709551614.0.0", ">18446744073709551614"));
        assert!(!satisfies("18446744073709551614.3.0", ">18446744073709551614.3"));
        assert!(satisfies("18446744073709551614.0.5", "~18446744073709551614"));
        assert!(satisfies("18446744073709551614.7.1", "^18446744073709551614.2"));
        assert!(satisfies("1.18446744073709551614.9", "~1.18446744073709551614"));
        assert!(satisfies("18446744073709551614.1.0", "1 - 18446744073709551614"));
    }

    #[test]
    fn test_empty_range() {
        assert!(satisfies("1.2.3", ""));
        assert!(satisfies("1.2.3-beta", "  "));
    }
}
