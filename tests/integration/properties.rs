//! Property-based tests for prime list construction and queries

use primelist::{is_prime, GenerationMode, PrimeList, PrimeListError};
use proptest::prelude::*;

/// Primes up to `bound` by plain trial division
fn reference_primes(bound: u64) -> Vec<u64> {
    (2..=bound)
        .filter(|&n| (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0))
        .collect()
}

#[test]
fn construction_errors() {
    assert!(matches!(
        PrimeList::<u64>::new(0, GenerationMode::Count),
        Err(PrimeListError::InvalidArgument { .. })
    ));
    assert!(matches!(
        PrimeList::<u64>::new(1, GenerationMode::Bound),
        Err(PrimeListError::InvalidArgument { .. })
    ));
}

#[test]
fn standalone_examples() {
    assert!(is_prime(97u64));
    assert!(!is_prime(100u64));
    let list = PrimeList::<u64>::up_to(200).unwrap();
    assert!(list.is_prime(97));
    assert!(!list.is_prime(100));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn count_mode_yields_first_n(n in 1u64..600) {
        let list = PrimeList::<u64>::first(n).unwrap();
        prop_assert_eq!(list.count() as u64, n);
        prop_assert!(list.as_slice().windows(2).all(|w| w[0] < w[1]));
        prop_assert!(list.iter().all(|&p| is_prime(p)));
        prop_assert_eq!(list.value(0).unwrap(), 2);
    }

    #[test]
    fn bound_mode_yields_exact_set(bound in 2u64..5_000) {
        let list = PrimeList::<u64>::up_to(bound).unwrap();
        let expected = reference_primes(bound);
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn highest_is_prime(n in 1u64..400, bound in 2u64..4_000) {
        let by_count = PrimeList::<u64>::first(n).unwrap();
        prop_assert!(by_count.is_prime(by_count.highest()));
        let by_bound = PrimeList::<u64>::up_to(bound).unwrap();
        prop_assert!(by_bound.is_prime(by_bound.highest()));
    }

    #[test]
    fn gen_next_reproduces_first_primes(k in 0u64..300) {
        let mut list = PrimeList::<u64>::first(1).unwrap();
        for _ in 0..k {
            list.gen_next().unwrap();
        }
        let expected = PrimeList::<u64>::first(k + 1).unwrap();
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn contains_exactly_the_members(bound in 2u64..3_000) {
        let list = PrimeList::<u64>::up_to(bound).unwrap();
        for pair in list.as_slice().windows(2) {
            prop_assert!(list.contains(pair[0]));
            prop_assert!(list.contains(pair[1]));
            for between in pair[0] + 1..pair[1] {
                prop_assert!(!list.contains(between));
            }
        }
    }

    #[test]
    fn value_rejects_out_of_range(n in 1u64..200) {
        let list = PrimeList::<u64>::first(n).unwrap();
        let is_out_of_range = |r: Result<u64, PrimeListError>| {
            matches!(r, Err(PrimeListError::IndexOutOfRange { .. }))
        };
        prop_assert!(is_out_of_range(list.value(-1)));
        prop_assert!(is_out_of_range(list.value(list.count())));
        prop_assert!(list.value(list.count() - 1).is_ok());
    }

    #[test]
    fn cached_and_standalone_agree(n in 0u64..200_000, len in 1u64..100) {
        let list = PrimeList::<u64>::first(len).unwrap();
        prop_assert_eq!(list.is_prime(n), is_prime(n));
    }

    #[test]
    fn render_lists_every_prime(bound in 2u64..500) {
        let list = PrimeList::<u64>::up_to(bound).unwrap();
        let rendered = list.render();
        prop_assert!(!rendered.ends_with(", "));
        let parsed: Vec<u64> = rendered.split(", ").map(|p| p.parse().unwrap()).collect();
        prop_assert_eq!(parsed.as_slice(), list.as_slice());
    }
}
