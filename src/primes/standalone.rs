//! Cache-free primality check for one-off queries

use super::int::PrimeInt;

/// Check a single number by trial division with odd divisors
///
/// 0 and 1 are not prime, 2 is, every other even number is not.
pub fn is_prime<T: PrimeInt>(num: T) -> bool {
    if num < T::TWO {
        return false;
    }
    if num == T::TWO {
        return true;
    }
    if num.is_even() {
        return false;
    }

    let root = num.floor_sqrt();
    let mut divisor = T::THREE;
    while divisor <= root {
        if num % divisor == T::ZERO {
            return false;
        }
        divisor = divisor + T::TWO;
    }
    true
}
