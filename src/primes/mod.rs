//! Prime generation, caching and primality queries
//!
//! - [`PrimeList`]: ascending list built by count or by bound, extendable
//!   one prime at a time
//! - [`is_prime`]: trial division without a cache
//! - [`PrimeInt`]: the unsigned widths a list can be built over

mod int;
mod list;
mod standalone;

pub use int::PrimeInt;
pub use list::{GenerationMode, PrimeList};
pub use standalone::is_prime;
