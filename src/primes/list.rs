//! Ordered, growable list of primes
//!
//! A `PrimeList` is built either from the first N primes (trial division)
//! or from every prime up to a bound (sieve of Eratosthenes over odd
//! numbers). Afterwards it only grows, one prime at a time, through
//! [`PrimeList::gen_next`].
//!
//! # Completeness
//!
//! The list always holds every prime up to [`PrimeList::complete_to`].
//! For a count-mode list that is the highest prime, since the first N
//! primes are exactly the primes up to the N-th one. For a bound-mode
//! list it is the bound. Membership answers at or below that value are
//! therefore exact.

use super::int::PrimeInt;
use crate::error::{PrimeListError, PrimeListResult};
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

/// How the initial primes are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// The smallest `val` primes
    Count,
    /// Every prime less than or equal to `val`
    Bound,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count => write!(f, "count"),
            Self::Bound => write!(f, "bound"),
        }
    }
}

/// Strictly ascending list of primes, starting at 2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeList<T: PrimeInt = u64> {
    primes: Vec<T>,
    complete_to: T,
}

impl<T: PrimeInt> PrimeList<T> {
    /// Initial capacity of the backing storage
    pub const DEFAULT_CAPACITY: usize = 128;

    /// Build a list in the given mode with the default capacity
    pub fn new(val: T, mode: GenerationMode) -> PrimeListResult<Self> {
        Self::with_capacity(val, mode, Self::DEFAULT_CAPACITY)
    }

    /// The first `count` primes
    pub fn first(count: T) -> PrimeListResult<Self> {
        Self::new(count, GenerationMode::Count)
    }

    /// Every prime up to and including `bound`
    pub fn up_to(bound: T) -> PrimeListResult<Self> {
        Self::new(bound, GenerationMode::Bound)
    }

    /// Build a list in the given mode, reserving `capacity` slots up front
    ///
    /// Fails with `InvalidArgument` when `capacity` is 0 or cannot be
    /// allocated, when `val` is 0, when `val` is 1 in bound mode, or when
    /// the sieve for a bound cannot be allocated.
    pub fn with_capacity(val: T, mode: GenerationMode, capacity: usize) -> PrimeListResult<Self> {
        if capacity < 1 {
            return Err(PrimeListError::invalid_argument(
                "capacity",
                "must be at least 1",
            ));
        }

        let mut primes = Vec::new();
        primes.try_reserve_exact(capacity).map_err(|e| {
            PrimeListError::invalid_argument(
                "capacity",
                format!("cannot reserve {} slots: {}", capacity, e),
            )
        })?;

        let mut list = Self {
            primes,
            complete_to: T::TWO,
        };

        match mode {
            GenerationMode::Count => {
                if val < T::ONE {
                    return Err(PrimeListError::invalid_argument(
                        "count",
                        format!("must be at least 1, got {}", val),
                    ));
                }
                let count = val.to_usize().ok_or_else(|| {
                    PrimeListError::invalid_argument(
                        "count",
                        format!("{} primes cannot be held in memory", val),
                    )
                })?;
                list.generate_count(count)?;
            }
            GenerationMode::Bound => {
                if val < T::TWO {
                    return Err(PrimeListError::invalid_argument(
                        "bound",
                        format!("must be at least 2, got {}", val),
                    ));
                }
                list.sieve(val)?;
            }
        }

        debug!(
            "Generated {} primes ({} mode, val = {}, highest = {})",
            list.count(),
            mode,
            val,
            list.highest()
        );
        Ok(list)
    }

    /// Fill with the first `count` primes by trial division of odd candidates
    fn generate_count(&mut self, count: usize) -> PrimeListResult<()> {
        self.insert(T::TWO);

        let mut candidate = T::THREE;
        while self.primes.len() < count {
            if self.passes_trial_division(candidate) {
                self.insert(candidate);
                if self.primes.len() == count {
                    break;
                }
            }
            candidate = candidate
                .checked_add(T::TWO)
                .ok_or_else(|| PrimeListError::Overflow {
                    after: candidate.to_string(),
                })?;
        }

        self.complete_to = self.highest();
        Ok(())
    }

    /// Fill with every prime up to `bound` using an odd-only sieve
    ///
    /// Index `i` of the sieve stands for the odd value `2i + 3`.
    fn sieve(&mut self, bound: T) -> PrimeListResult<()> {
        let limit = bound.to_usize().ok_or_else(|| {
            PrimeListError::invalid_argument(
                "bound",
                format!("{} is too large to sieve on this platform", bound),
            )
        })?;

        let range = (limit - 1) / 2;
        let mut sieve = Vec::new();
        sieve.try_reserve_exact(range).map_err(|e| {
            PrimeListError::invalid_argument(
                "bound",
                format!("cannot allocate a sieve up to {}: {}", bound, e),
            )
        })?;
        sieve.resize(range, true);

        self.insert(T::TWO);
        let root = bound.floor_sqrt().to_usize().unwrap_or(0);

        for i in (3..=root).step_by(2) {
            if !sieve[(i - 3) / 2] {
                continue;
            }
            // Odd multiples only, starting from the square
            for j in (i * i..=limit).step_by(2 * i) {
                sieve[(j - 3) / 2] = false;
            }
        }

        for (idx, &marked) in sieve.iter().enumerate() {
            if !marked {
                continue;
            }
            let value = T::from_usize(2 * idx + 3).ok_or_else(|| PrimeListError::Overflow {
                after: self.highest().to_string(),
            })?;
            self.insert(value);
        }

        self.complete_to = bound;
        Ok(())
    }

    /// Number of primes in the list
    pub fn count(&self) -> usize {
        self.primes.len()
    }

    /// Largest prime in the list, or 0 if the list is empty
    pub fn highest(&self) -> T {
        self.primes.last().copied().unwrap_or(T::ZERO)
    }

    /// Largest value up to which the list holds every prime
    pub fn complete_to(&self) -> T {
        self.complete_to
    }

    /// The prime at position `idx` (0-based)
    ///
    /// Any integer index type is accepted; negative indices and indices
    /// past the end fail with `IndexOutOfRange`.
    pub fn value<I>(&self, idx: I) -> PrimeListResult<T>
    where
        I: TryInto<usize> + fmt::Display + Copy,
    {
        idx.try_into()
            .ok()
            .and_then(|i| self.primes.get(i).copied())
            .ok_or_else(|| PrimeListError::IndexOutOfRange {
                index: idx.to_string(),
                len: self.primes.len(),
            })
    }

    /// Append the next prime after the current highest and return it
    ///
    /// The search is unbounded; it only fails if the next odd candidate
    /// does not fit in `T`.
    pub fn gen_next(&mut self) -> PrimeListResult<T> {
        let highest = self.highest();
        let overflow = || PrimeListError::Overflow {
            after: highest.to_string(),
        };

        let mut candidate = if highest < T::TWO {
            T::TWO
        } else if highest == T::TWO {
            T::THREE
        } else {
            highest.checked_add(T::TWO).ok_or_else(overflow)?
        };

        while !self.passes_trial_division(candidate) {
            candidate = candidate.checked_add(T::TWO).ok_or_else(overflow)?;
        }

        self.insert(candidate);
        if self.complete_to < candidate {
            self.complete_to = candidate;
        }
        trace!("Extended prime list with {}", candidate);
        Ok(candidate)
    }

    /// Check whether `num` is prime
    ///
    /// Values the list is complete for are answered by binary search;
    /// larger values by trial division.
    pub fn is_prime(&self, num: T) -> bool {
        if num < T::TWO {
            return false;
        }
        if num == T::TWO {
            return true;
        }
        if num.is_even() {
            return false;
        }
        if num <= self.complete_to {
            self.contains(num)
        } else {
            self.passes_trial_division(num)
        }
    }

    /// Binary search for `num` in the list
    pub fn contains(&self, num: T) -> bool {
        self.primes.binary_search(&num).is_ok()
    }

    /// Trial division of an odd `num > 2`
    ///
    /// Divides by cached primes up to the root, then by odd numbers past
    /// the highest cached prime if the cache stops short of the root.
    fn passes_trial_division(&self, num: T) -> bool {
        let root = num.floor_sqrt();

        for &prime in &self.primes {
            if prime > root {
                return true;
            }
            if num % prime == T::ZERO {
                return false;
            }
        }

        let mut divisor = match self.highest() {
            h if h < T::THREE => T::THREE,
            h => h + T::TWO,
        };
        while divisor <= root {
            if num % divisor == T::ZERO {
                return false;
            }
            divisor = divisor + T::TWO;
        }
        true
    }

    /// Append a prime; callers keep the list ascending
    fn insert(&mut self, prime: T) {
        debug_assert!(self.primes.last().map_or(true, |&last| last < prime));
        self.primes.push(prime);
    }

    /// Primes in ascending order
    pub fn as_slice(&self) -> &[T] {
        &self.primes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.primes.iter()
    }

    /// Comma-separated listing of every prime, e.g. `2, 3, 5, 7`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: PrimeInt> fmt::Display for PrimeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.primes.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for prime in iter {
                write!(f, ", {}", prime)?;
            }
        }
        Ok(())
    }
}

impl<'a, T: PrimeInt> IntoIterator for &'a PrimeList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.iter()
    }
}
