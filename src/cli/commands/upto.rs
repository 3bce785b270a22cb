//! Upto command - list every prime up to a bound

use crate::cli::args::UptoArgs;
use crate::cli::report;
use crate::config::Config;
use crate::error::{PrimeListError, PrimeListResult};
use crate::primes::{GenerationMode, PrimeList};

/// Execute the upto command
pub fn execute(args: UptoArgs, config: &Config) -> PrimeListResult<()> {
    check_sieve_limit(args.bound, config.check.sieve_limit)?;

    let capacity = args
        .capacity
        .unwrap_or(config.generation.initial_capacity);
    let list = PrimeList::with_capacity(args.bound, GenerationMode::Bound, capacity)?;

    let format = args.format.unwrap_or(config.output.format);
    report::print_listing(&list, GenerationMode::Bound, args.bound, format)
}

/// Refuse bounds whose sieve would exceed the configured limit
fn check_sieve_limit(bound: u64, sieve_limit: u64) -> PrimeListResult<()> {
    if bound > sieve_limit {
        return Err(PrimeListError::invalid_argument(
            "bound",
            format!("{} exceeds check.sieve_limit ({})", bound, sieve_limit),
        ));
    }
    Ok(())
}
