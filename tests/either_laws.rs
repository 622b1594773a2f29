#![cfg(feature = "control")]
//! Property-based tests for Either laws.
//!
//! ## Monad Laws (right-biased)
//! - Left Identity: `Right(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(Right) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! `Left` and `None` short-circuit every bind.

use proptest::prelude::*;
use resultant::control::{Either, EitherIteratorExt};

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        Just(Either::None),
        "[a-z]{1,8}".prop_map(Either::left),
        any::<i32>().prop_map(Either::right),
    ]
}

fn checked_double(x: i32) -> Either<String, i32> {
    x.checked_mul(2).map_or_else(|| Either::left("overflow".to_string()), Either::right)
}

fn non_negative(x: i32) -> Either<String, i32> {
    if x >= 0 { Either::right(x) } else { Either::left(format!("negative: {x}")) }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Either::<String, i32>::right(value).bind(checked_double), checked_double(value));
    }

    #[test]
    fn prop_either_right_identity(either in either_strategy()) {
        prop_assert_eq!(either.clone().bind(Either::right), either);
    }

    #[test]
    fn prop_either_associativity(either in either_strategy()) {
        let left = either.clone().bind(checked_double).bind(non_negative);
        let right = either.bind(|x| checked_double(x).bind(non_negative));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_left_short_circuits(message in "[a-z]{1,8}") {
        let left: Either<String, i32> = Either::left(message.clone());
        prop_assert_eq!(left.bind(checked_double), Either::Left(message));
    }
}

// =============================================================================
// Fold, coalescing and projections
// =============================================================================

proptest! {
    #[test]
    fn prop_fold_fails_only_on_none(either in either_strategy()) {
        let folded = either.clone().fold(|_| 0, |_| 1);
        prop_assert_eq!(folded.is_err(), either.is_none());
    }

    #[test]
    fn prop_coalesce_never_loses_a_right(first in either_strategy(), second in either_strategy()) {
        let result = first.clone() | second.clone();
        if first.is_right() {
            prop_assert_eq!(result, first);
        } else if first.is_left() && !second.is_none() {
            prop_assert_eq!(result, second);
        } else {
            prop_assert_eq!(result, first);
        }
    }

    #[test]
    fn prop_projections_partition(values in proptest::collection::vec(either_strategy(), 0..20)) {
        let rights = values.iter().cloned().rights().count();
        let lefts = values.iter().cloned().lefts().count();
        let nones = values.iter().filter(|value| value.is_none()).count();
        prop_assert_eq!(rights + lefts + nones, values.len());
    }
}
