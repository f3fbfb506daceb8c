/// Integration tests for picking the best version out of a candidate list

use semrange::{Semver, Version};

fn max_satisfying_cases() -> Vec<(Vec<&'static str>, &'static str, &'static str)> {
    vec![
        (vec!["1.2.3", "1.2.4"], "1.2", "1.2.4"),
        (vec!["1.2.4", "1.2.3"], "1.2", "1.2.4"),
        (vec!["1.2.3", "1.2.4", "1.2.5", "1.2.6", "1.3.0"], "~1.2.3", "1.2.6"),
        (vec!["1.2.3", "1.2.4", "1.2.5", "1.2.6", "1.3.0"], "1.2.*", "1.2.6"),
        (
            vec!["0.0.0", "0.0.1", "0.10.24", "0.11.10", "0.10.25", "0.11.10-1", "0.10.25-1", "0.10.31"],
            "~0.10.x",
            "0.10.31",
        ),
        (
            vec![
                "0.9.0-1.2.3",
                "1.0.0-1.2.3",
                "1.0.1-1.2.3",
                "1.0.2-1.2.3",
                "1.0.3-1.2.3",
                "1.0.4-1.2.3",
                "1.0.5-1.2.3",
                "1.0.6-1.2.3",
                "1.0.7-1.2.3",
                "1.0.8-1.2.3",
                "1.0.8",
                "1.0.9",
                "1.0.10",
                "1.0.11",
                "1.0.12",
            ],
            "1.0.2-1.2.3",
            "1.0.2-1.2.3",
        ),
    ]
}

#[test]
fn test_max_satisfying_strings() {
    for (versions, range, expected) in max_satisfying_cases() {
        assert_eq!(
            Semver::max_satisfying(&versions, range).as_deref(),
            Some(expected),
            "max of {:?} in {}",
            versions,
            range
        );
    }
}

#[test]
fn test_max_satisfying_versions() {
    for (versions, range, expected) in max_satisfying_cases() {
        let parsed: Vec<Version> = versions.iter().map(|v| Version::parse(v).unwrap()).collect();
        assert_eq!(
            Semver::max_version_satisfying(&parsed, range),
            Some(Version::parse(expected).unwrap()),
            "max of {:?} in {}",
            versions,
            range
        );
    }
}

#[test]
fn test_max_satisfying_none() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(Semver::max_satisfying(&empty, "1.2.3"), None);
    assert_eq!(Semver::max_satisfying(&["1.2.3", "1.2.4"], ">2"), None);
    assert_eq!(Semver::max_satisfying(&["1.2.3", "1.2.4"], "blerg"), None);
    assert_eq!(Semver::max_satisfying(&["junk", "a.b.c"], "*"), None);
}

#[test]
fn test_max_satisfying_accepts_owned_strings() {
    let versions: Vec<String> = (0..10).map(|patch| format!("2.1.{}", patch)).collect();
    assert_eq!(Semver::max_satisfying(&versions, "^2.1.3 <2.1.8"), Some("2.1.7".to_string()));
    assert_eq!(Semver::min_satisfying(&versions, "^2.1.3 <2.1.8"), Some("2.1.3".to_string()));
}

#[test]
fn test_sorting_is_consistent_with_max() {
    let versions = ["1.0.0-alpha", "1.0.0", "1.0.0-beta.2", "1.0.0-alpha.1", "1.0.0-beta.11", "1.0.0-rc.1"];
    let sorted = Semver::sort(&versions);
    assert_eq!(
        sorted,
        vec!["1.0.0-alpha", "1.0.0-alpha.1", "1.0.0-beta.2", "1.0.0-beta.11", "1.0.0-rc.1", "1.0.0"]
    );
    assert_eq!(
        Semver::max_satisfying(&versions, "").as_deref(),
        sorted.last().map(String::as_str)
    );
}
