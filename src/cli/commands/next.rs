//! Next command - find the primes that follow a number

use crate::cli::args::NextArgs;
use crate::config::Config;
use crate::error::{PrimeListError, PrimeListResult};
use crate::primes::{self, GenerationMode, PrimeList};
use tracing::debug;

/// Execute the next command
pub fn execute(args: NextArgs, config: &Config) -> PrimeListResult<()> {
    let found = if args.number <= config.check.sieve_limit {
        let capacity = config.generation.initial_capacity;
        next_from_sieve(args.number, args.count, capacity)?
    } else {
        debug!(
            "{} exceeds sieve limit {}, scanning with trial division",
            args.number, config.check.sieve_limit
        );
        next_by_scan(args.number, args.count)?
    };

    for prime in found {
        println!("{}", prime);
    }
    Ok(())
}

/// Sieve up to `number`, then extend the list one prime at a time
///
/// The list is complete up to `number`, so each extension is the next
/// prime after it.
fn next_from_sieve(number: u64, count: u32, capacity: usize) -> PrimeListResult<Vec<u64>> {
    let mut list = PrimeList::with_capacity(number.max(2), GenerationMode::Bound, capacity)?;
    let mut found = Vec::new();

    // Below 2 the sieve already holds the answer
    if number < 2 && count > 0 {
        found.push(list.highest());
    }
    while found.len() < count as usize {
        found.push(list.gen_next()?);
    }
    Ok(found)
}

/// Scan odd candidates past `number` with the standalone check
fn next_by_scan(number: u64, count: u32) -> PrimeListResult<Vec<u64>> {
    let mut found = Vec::new();
    let mut candidate = number;

    while found.len() < count as usize {
        candidate = candidate
            .checked_add(1)
            .ok_or_else(|| PrimeListError::Overflow {
                after: candidate.to_string(),
            })?;
        if primes::is_prime(candidate) {
            found.push(candidate);
        }
    }
    Ok(found)
}
