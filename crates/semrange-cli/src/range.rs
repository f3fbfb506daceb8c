//! Range commands - satisfies, max-satisfying, min-satisfying and filter.

use anyhow::{Context, Result};
use clap::Args;
use semrange::{RangeSet, Semver};

#[derive(Args, Debug)]
pub struct SatisfiesArgs {
    /// Version to check
    pub version: String,

    /// Range expression, e.g. ">=1.2.3 <2 || ^3"
    pub range: String,
}

#[derive(Args, Debug)]
pub struct PickArgs {
    /// Range expression to match against
    #[arg(short, long)]
    pub range: String,

    /// Candidate versions
    #[arg(required = true)]
    pub versions: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Range expression to match against
    #[arg(short, long)]
    pub range: String,

    /// Candidate versions
    pub versions: Vec<String>,
}

/// Parse the range once per command, reporting a typo instead of matching nothing
fn parse_range(range: &str) -> Result<RangeSet> {
    Semver::parse_range(range).with_context(|| format!("Invalid range \"{}\"", range))
}

pub fn satisfies(args: SatisfiesArgs) -> Result<i32> {
    let range = parse_range(&args.range)?;
    let result = Semver::satisfies_parsed(&args.version, &range);
    println!("{}", result);
    Ok(if result { 0 } else { 1 })
}

pub fn max_satisfying(args: PickArgs) -> Result<i32> {
    let range = parse_range(&args.range)?;
    print_pick(Semver::max_satisfying_parsed(&args.versions, &range))
}

pub fn min_satisfying(args: PickArgs) -> Result<i32> {
    let range = parse_range(&args.range)?;
    print_pick(Semver::min_satisfying_parsed(&args.versions, &range))
}

fn print_pick(picked: Option<String>) -> Result<i32> {
    match picked {
        Some(version) => {
            println!("{}", version);
            Ok(0)
        }
        None => {
            log::info!("No version satisfies the range");
            Ok(1)
        }
    }
}

pub fn filter(args: FilterArgs) -> Result<i32> {
    let range = parse_range(&args.range)?;
    for version in Semver::satisfied_by_parsed(&args.versions, &range) {
        println!("{}", version);
    }
    Ok(0)
}
