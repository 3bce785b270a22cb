//! Rendering of prime listings and check results

use crate::config::OutputFormat;
use crate::error::PrimeListResult;
use crate::primes::{GenerationMode, PrimeList};
use crate::ui::{self, Column, UiContext};
use serde::Serialize;

const LISTING_COLUMNS: [Column; 2] = [Column::new("#", 8), Column::new("PRIME", 20)];
const CHECK_COLUMNS: [Column; 2] = [Column::new("NUMBER", 22), Column::new("PRIME", 5)];

/// JSON shape of a prime listing
#[derive(Debug, Serialize)]
struct ListingReport<'a> {
    mode: GenerationMode,
    value: u64,
    count: usize,
    highest: u64,
    primes: &'a [u64],
}

/// Outcome of a single primality check
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CheckResult {
    pub number: u64,
    pub prime: bool,
}

/// Print a prime list in the requested format
pub fn print_listing(
    list: &PrimeList<u64>,
    mode: GenerationMode,
    value: u64,
    format: OutputFormat,
) -> PrimeListResult<()> {
    match format {
        OutputFormat::Plain => println!("{}", list.render()),
        OutputFormat::Json => {
            let report = ListingReport {
                mode,
                value,
                count: list.count(),
                highest: list.highest(),
                primes: list.as_slice(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => print_listing_table(list, mode, value),
    }
    Ok(())
}

fn print_listing_table(list: &PrimeList<u64>, mode: GenerationMode, value: u64) {
    let ctx = UiContext::detect();
    let title = match mode {
        GenerationMode::Count => format!("First {} primes", value),
        GenerationMode::Bound => format!("Primes up to {}", value),
    };
    ui::heading(&ctx, &title);

    ui::table_header(&LISTING_COLUMNS);
    for (idx, prime) in list.iter().enumerate() {
        ui::table_row(&LISTING_COLUMNS, &[(idx + 1).to_string(), prime.to_string()]);
    }

    ui::summary(
        &ctx,
        &format!("{} prime(s), highest {}", list.count(), list.highest()),
    );
}

/// Print primality results in the requested format
pub fn print_checks(results: &[CheckResult], format: OutputFormat) -> PrimeListResult<()> {
    match format {
        OutputFormat::Plain => {
            for result in results {
                let verdict = if result.prime { "prime" } else { "composite" };
                println!("{} {}", result.number, verdict);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(results)?),
        OutputFormat::Table => {
            let ctx = UiContext::detect();
            ui::heading(&ctx, "Primality");

            ui::table_header(&CHECK_COLUMNS);
            for result in results {
                ui::table_row(
                    &CHECK_COLUMNS,
                    &[result.number.to_string(), ui::verdict(result.prime)],
                );
            }

            let primes = results.iter().filter(|r| r.prime).count();
            ui::summary(
                &ctx,
                &format!("{} of {} number(s) prime", primes, results.len()),
            );
        }
    }
    Ok(())
}
