#![cfg(feature = "control")]
//! Property-based tests for Maybe laws.
//!
//! ## Monad Laws
//! - Left Identity: `Some(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(Some) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! ## Functor Laws
//! - Identity and composition through the `Functor` instance

use proptest::prelude::*;
use resultant::control::Maybe;
use resultant::typeclass::Functor;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn half(x: i32) -> Maybe<i32> {
    if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() }
}

fn positive(x: i32) -> Maybe<i32> {
    if x > 0 { Maybe::some(x) } else { Maybe::none() }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::some(value).bind(half), half(value));
    }

    #[test]
    fn prop_maybe_right_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.bind(Maybe::some), maybe);
    }

    #[test]
    fn prop_maybe_associativity(maybe in maybe_strategy()) {
        let left = maybe.bind(half).bind(positive);
        let right = maybe.bind(|x| half(x).bind(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_none_bind_is_none(_value in any::<i32>()) {
        prop_assert_eq!(Maybe::<i32>::none().bind(half), Maybe::None);
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_functor_identity(maybe in maybe_strategy()) {
        prop_assert_eq!(maybe.fmap(|x| x), maybe);
    }

    #[test]
    fn prop_maybe_functor_composition(maybe in maybe_strategy()) {
        let function1 = |x: i32| x.wrapping_add(1);
        let function2 = |x: i32| x.wrapping_mul(2);
        prop_assert_eq!(maybe.fmap(function1).fmap(function2), maybe.fmap(move |x| function2(function1(x))));
    }

    #[test]
    fn prop_maybe_coalesce_prefers_value(maybe in maybe_strategy(), fallback in any::<i32>()) {
        let expected = maybe.into_option().unwrap_or(fallback);
        prop_assert_eq!(maybe | fallback, expected);
    }
}
