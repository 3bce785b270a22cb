//! CLI argument definitions using clap derive

use crate::config::OutputFormat;
use crate::error::{PrimeListError, PrimeListResult};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// primelist - prime number generator and primality checker
///
/// Lists the first N primes or every prime up to a bound, finds the
/// next primes after a number, and checks numbers for primality.
#[derive(Parser, Debug)]
#[command(name = "primelist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PRIMELIST_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the first N primes
    First(FirstArgs),

    /// List every prime up to and including a bound
    Upto(UptoArgs),

    /// Show the N-th prime (1-based)
    Nth(NthArgs),

    /// Find the primes that follow a number
    Next(NextArgs),

    /// Check numbers or ranges for primality
    Check(CheckArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the first command
#[derive(Parser, Debug)]
pub struct FirstArgs {
    /// How many primes to list
    pub count: u64,

    /// Initial list capacity (default: from config)
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Output format (default: from config)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the upto command
#[derive(Parser, Debug)]
pub struct UptoArgs {
    /// Largest value to consider
    pub bound: u64,

    /// Initial list capacity (default: from config)
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Output format (default: from config)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the nth command
#[derive(Parser, Debug)]
pub struct NthArgs {
    /// Position of the prime, starting at 1
    pub position: u64,
}

/// Arguments for the next command
#[derive(Parser, Debug)]
pub struct NextArgs {
    /// Number to search after
    pub number: u64,

    /// How many primes to find
    #[arg(short = 'n', long, default_value = "1")]
    pub count: u32,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Numbers or inclusive ranges (e.g. 97 10-20)
    #[arg(required = true, value_parser = parse_number_spec)]
    pub numbers: Vec<NumberSpec>,

    /// Always use trial division instead of a sieved list
    #[arg(long)]
    pub no_cache: bool,

    /// Output format (default: from config)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Most numbers a single check invocation will expand to
pub const MAX_CHECK_NUMBERS: u64 = 10_000_000;

impl CheckArgs {
    /// Flatten all specs into a sorted list without duplicates
    ///
    /// Fails before allocating when the specs name more than
    /// `MAX_CHECK_NUMBERS` values in total.
    pub fn expanded(&self) -> PrimeListResult<Vec<u64>> {
        let total = self
            .numbers
            .iter()
            .map(|spec| match *spec {
                NumberSpec::Single(_) => 1,
                NumberSpec::Range(start, end) => (end - start).saturating_add(1),
            })
            .fold(0u64, u64::saturating_add);
        if total > MAX_CHECK_NUMBERS {
            return Err(PrimeListError::invalid_argument(
                "numbers",
                format!(
                    "{} values requested, at most {} can be checked at once",
                    total, MAX_CHECK_NUMBERS
                ),
            ));
        }

        let mut numbers: Vec<u64> = self
            .numbers
            .iter()
            .flat_map(|spec| match *spec {
                NumberSpec::Single(n) => n..=n,
                NumberSpec::Range(start, end) => start..=end,
            })
            .collect();
        numbers.sort_unstable();
        numbers.dedup();
        Ok(numbers)
    }
}

/// A single number or an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSpec {
    Single(u64),
    Range(u64, u64),
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., check.sieve_limit)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Parse a number (`97`) or an inclusive range (`10-20`)
fn parse_number_spec(s: &str) -> Result<NumberSpec, String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<u64>()
            .map_err(|_| format!("'{s}' is not a valid integer or range"))
    };

    match s.split_once('-') {
        Some((start, end)) => {
            let (start, end) = (parse(start)?, parse(end)?);
            if start > end {
                return Err(format!("range '{s}' is empty: {start} is greater than {end}"));
            }
            Ok(NumberSpec::Range(start, end))
        }
        None => Ok(NumberSpec::Single(parse(s)?)),
    }
}
