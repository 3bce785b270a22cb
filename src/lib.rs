//! primelist - prime number generation and primality queries
//!
//! Keeps an ordered, growable list of primes built either from the first
//! N primes or from every prime up to a bound, and answers primality
//! queries against the list or by trial division.
//!
//! ```
//! use primelist::PrimeList;
//!
//! let mut primes = PrimeList::<u64>::up_to(30)?;
//! assert_eq!(primes.render(), "2, 3, 5, 7, 11, 13, 17, 19, 23, 29");
//! assert_eq!(primes.gen_next()?, 31);
//! assert!(primelist::is_prime(97u64));
//! # Ok::<(), primelist::PrimeListError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod primes;
pub mod ui;

pub use error::{PrimeListError, PrimeListResult};
pub use primes::{is_prime, GenerationMode, PrimeInt, PrimeList};
