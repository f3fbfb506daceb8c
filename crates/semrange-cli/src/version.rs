//! Version commands - valid, sort and inc.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use semrange::{Semver, Version};

#[derive(Args, Debug)]
pub struct ValidArgs {
    /// Versions to validate
    #[arg(required = true)]
    pub versions: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Sort from highest to lowest
    #[arg(short, long)]
    pub reverse: bool,

    /// Versions to sort
    pub versions: Vec<String>,
}

#[derive(Args, Debug)]
pub struct IncArgs {
    /// Component to increment
    #[arg(value_enum)]
    pub level: Level,

    /// Version to increment
    pub version: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Major,
    Minor,
    Patch,
}

pub fn valid(args: ValidArgs) -> Result<i32> {
    let mut code = 0;
    for version in &args.versions {
        match Version::parse(version) {
            Ok(parsed) => println!("{}", parsed),
            Err(e) => {
                eprintln!("{}", e);
                code = 1;
            }
        }
    }
    Ok(code)
}

pub fn sort(args: SortArgs) -> Result<i32> {
    let sorted = if args.reverse {
        Semver::rsort(&args.versions)
    } else {
        Semver::sort(&args.versions)
    };
    for version in sorted {
        println!("{}", version);
    }
    Ok(0)
}

pub fn inc(args: IncArgs) -> Result<i32> {
    let version = Version::parse(&args.version).context("Cannot increment an invalid version")?;
    println!("{}", increment(&version, args.level));
    Ok(0)
}

fn increment(version: &Version, level: Level) -> Version {
    match level {
        Level::Major => version.increment_major(),
        Level::Minor => version.increment_minor(),
        Level::Patch => version.increment_patch(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment() {
        let version = Version::parse("1.2.3-beta+build").unwrap();
        assert_eq!(increment(&version, Level::Major).to_string(), "2.0.0");
        assert_eq!(increment(&version, Level::Minor).to_string(), "1.3.0");
        assert_eq!(increment(&version, Level::Patch).to_string(), "1.2.4");
    }
}
