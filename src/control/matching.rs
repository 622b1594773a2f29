//! Total matching over a fixed list of matchers.
//!
//! A matcher inspects a value and either claims it (`Maybe::Some(result)`)
//! or passes (`Maybe::None`). [`match_first`] tries matchers in order and
//! returns the first claimed result; when nothing claims the value it fails
//! with [`FunctionalError::InvalidState`].
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::{as_equal, match_first, Maybe};
//!
//! let label = match_first(
//!     &3,
//!     &[
//!         &as_equal(1, |_| "one"),
//!         &as_equal(3, |_| "three"),
//!         &|_: &i32| Maybe::some("other"),
//!     ],
//! );
//! assert_eq!(label, Ok("three"));
//! ```

use super::maybe::Maybe;
use crate::error::FunctionalError;

/// Returns the result of the first matcher that claims `value`.
///
/// # Errors
///
/// Returns [`FunctionalError::InvalidState`] when no matcher claims `value`.
pub fn match_first<T, R>(
    value: &T,
    matchers: &[&dyn Fn(&T) -> Maybe<R>],
) -> Result<R, FunctionalError> {
    matchers
        .iter()
        .find_map(|matcher| matcher(value).into_option())
        .ok_or_else(|| FunctionalError::invalid_state("No match was found"))
}

/// Builds a matcher that claims values equal to `expected`.
///
/// The claimed result is `map(&expected)`.
pub fn as_equal<T, R, F>(expected: T, map: F) -> impl Fn(&T) -> Maybe<R>
where
    T: PartialEq,
    F: Fn(&T) -> R,
{
    move |candidate| {
        if *candidate == expected {
            Maybe::some(map(&expected))
        } else {
            Maybe::none()
        }
    }
}

/// Builds a matcher that claims values different from `expected`.
///
/// The claimed result is `map(&expected)`.
pub fn not_equal<T, R, F>(expected: T, map: F) -> impl Fn(&T) -> Maybe<R>
where
    T: PartialEq,
    F: Fn(&T) -> R,
{
    move |candidate| {
        if *candidate == expected {
            Maybe::none()
        } else {
            Maybe::some(map(&expected))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_falls_through_to_later_matcher() {
        let result = match_first(
            &false,
            &[&as_equal(true, |_| true), &|value: &bool| Maybe::some(*value)],
        );
        assert_eq!(result, Ok(false));
    }

    #[rstest]
    fn test_first_claim_wins() {
        let result = match_first(
            &true,
            &[&as_equal(true, |_| "first"), &as_equal(true, |_| "second")],
        );
        assert_eq!(result, Ok("first"));
    }

    #[rstest]
    fn test_no_match_is_invalid_state() {
        let result = match_first(&false, &[&as_equal(true, |_| true)]);
        assert_eq!(
            result,
            Err(FunctionalError::invalid_state("No match was found"))
        );
    }

    #[rstest]
    fn test_not_equal_claims_other_values() {
        let matcher = not_equal(0, |expected| expected + 1);
        assert_eq!(matcher(&5), Maybe::Some(1));
        assert_eq!(matcher(&0), Maybe::None);
    }
}
