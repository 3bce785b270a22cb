//! Check command - primality of numbers and ranges

use crate::cli::args::CheckArgs;
use crate::cli::report::{self, CheckResult};
use crate::config::Config;
use crate::error::PrimeListResult;
use crate::primes::{self, GenerationMode, PrimeList};
use tracing::{debug, info};

/// Execute the check command
pub fn execute(args: CheckArgs, config: &Config) -> PrimeListResult<()> {
    let numbers = args.expanded()?;
    let results = check_numbers(
        &numbers,
        config.check.sieve_limit,
        config.generation.initial_capacity,
        args.no_cache,
    )?;

    let format = args.format.unwrap_or(config.output.format);
    report::print_checks(&results, format)
}

/// Check every number, sieving once when the largest fits under `sieve_limit`
fn check_numbers(
    numbers: &[u64],
    sieve_limit: u64,
    capacity: usize,
    no_cache: bool,
) -> PrimeListResult<Vec<CheckResult>> {
    let largest = numbers.iter().copied().max().unwrap_or(0);

    let cache = if no_cache || largest < 2 || largest > sieve_limit {
        debug!("Checking {} number(s) by trial division", numbers.len());
        None
    } else {
        let list = PrimeList::with_capacity(largest, GenerationMode::Bound, capacity)?;
        info!("Sieved {} primes up to {}", list.count(), largest);
        Some(list)
    };

    let results = numbers
        .iter()
        .map(|&number| CheckResult {
            number,
            prime: match &cache {
                Some(list) => list.is_prime(number),
                None => primes::is_prime(number),
            },
        })
        .collect();
    Ok(results)
}
