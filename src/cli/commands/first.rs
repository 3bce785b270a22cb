//! First command - list the first N primes

use crate::cli::args::FirstArgs;
use crate::cli::report;
use crate::config::Config;
use crate::error::PrimeListResult;
use crate::primes::{GenerationMode, PrimeList};

/// Execute the first command
pub fn execute(args: FirstArgs, config: &Config) -> PrimeListResult<()> {
    let capacity = args
        .capacity
        .unwrap_or(config.generation.initial_capacity);
    let list = PrimeList::with_capacity(args.count, GenerationMode::Count, capacity)?;

    let format = args.format.unwrap_or(config.output.format);
    report::print_listing(&list, GenerationMode::Count, args.count, format)
}
