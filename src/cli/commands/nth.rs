//! Nth command - show the prime at a 1-based position

use crate::cli::args::NthArgs;
use crate::config::Config;
use crate::error::PrimeListResult;
use crate::primes::{GenerationMode, PrimeList};

/// Execute the nth command
pub fn execute(args: NthArgs, config: &Config) -> PrimeListResult<()> {
    let capacity = config.generation.initial_capacity;
    let list = PrimeList::with_capacity(args.position, GenerationMode::Count, capacity)?;

    // Position 0 is rejected by construction above
    let prime = list.value(args.position - 1)?;
    println!("{}", prime);
    Ok(())
}
