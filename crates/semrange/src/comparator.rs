//! Version comparison utilities

use crate::{Operator, Version};

/// Comparator for comparing version strings by semver precedence.
///
/// If either string is not a valid version, every comparison is false.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<=", version2)
    }

    /// Check if version1 == version2 (build metadata ignored)
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "==", version2)
    }

    /// Check if version1 != version2 (build metadata ignored)
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        let (Ok(left), Ok(right)) = (Version::parse(version1), Version::parse(version2)) else {
            return false;
        };
        let ordering = left.cmp_precedence(&right);

        match operator {
            "==" => ordering.is_eq(),
            "!=" | "<>" => ordering.is_ne(),
            other => other.parse::<Operator>().is_ok_and(|op| op.matches(ordering)),
        }
    }
}
