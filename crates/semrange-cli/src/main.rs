mod range;
mod version;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "semrange")]
#[command(about = "Check versions against node-style semver ranges")]
#[command(version)]
struct Args {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical form of each version, failing if any is invalid
    Valid(version::ValidArgs),

    /// Check whether a version satisfies a range
    Satisfies(range::SatisfiesArgs),

    /// Print the highest version that satisfies a range
    MaxSatisfying(range::PickArgs),

    /// Print the lowest version that satisfies a range
    MinSatisfying(range::PickArgs),

    /// Print every version that satisfies a range
    Filter(range::FilterArgs),

    /// Sort versions by precedence, dropping invalid ones
    Sort(version::SortArgs),

    /// Increment one component of a version
    Inc(version::IncArgs),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose);
    log::debug!("Running {:?}", args.command);

    match args.command {
        Commands::Valid(args) => version::valid(args),
        Commands::Satisfies(args) => range::satisfies(args),
        Commands::MaxSatisfying(args) => range::max_satisfying(args),
        Commands::MinSatisfying(args) => range::min_satisfying(args),
        Commands::Filter(args) => range::filter(args),
        Commands::Sort(args) => version::sort(args),
        Commands::Inc(args) => version::inc(args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
