//! Numeric width abstraction for prime lists
//!
//! `PrimeInt` is implemented for the unsigned widths a prime list can be
//! built over. All arithmetic that could leave the width goes through
//! checked or widening operations.

use std::fmt;
use std::ops::{Add, Rem};

/// Unsigned integer type usable as the element type of a `PrimeList`
pub trait PrimeInt:
    Copy + Ord + fmt::Debug + fmt::Display + Add<Output = Self> + Rem<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const THREE: Self;

    /// Widen to `u128` (lossless for every implementor)
    fn to_u128(self) -> u128;

    /// Narrow from `u128`, `None` if the value does not fit
    fn from_u128(value: u128) -> Option<Self>;

    /// Addition that reports overflow instead of wrapping
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Integer square root, rounded down
    fn floor_sqrt(self) -> Self;

    /// Convert to a sieve index, `None` if the value exceeds `usize`
    fn to_usize(self) -> Option<usize> {
        usize::try_from(self.to_u128()).ok()
    }

    /// Convert from a sieve index, `None` if the index exceeds the width
    fn from_usize(value: usize) -> Option<Self> {
        Self::from_u128(value as u128)
    }

    fn is_even(self) -> bool {
        self.to_u128() & 1 == 0
    }
}

/// Floor square root by Newton iteration, starting above the root so
/// `x + n / x` never exceeds twice the starting point.
pub(crate) fn isqrt_u128(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let shift = (128 - n.leading_zeros()).div_ceil(2);
    let mut x = 1u128 << shift;
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

macro_rules! impl_prime_int {
    ($($t:ty),*) => {
        $(
            impl PrimeInt for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;
                const THREE: Self = 3;

                fn to_u128(self) -> u128 {
                    self as u128
                }

                fn from_u128(value: u128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                // The root of a value never exceeds the value itself
                fn floor_sqrt(self) -> Self {
                    isqrt_u128(self as u128) as $t
                }
            }
        )*
    };
}

impl_prime_int!(u32, u64, u128, usize);
