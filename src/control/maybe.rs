//! Maybe type - an optional value.
//!
//! `Maybe<T>` is either `Some(T)` or `None`. It makes absence explicit in
//! a signature and composes through [`Maybe::bind`], [`Maybe::map`] and
//! [`Maybe::fold`].
//!
//! # Laws
//!
//! - Left Identity: `Maybe::some(x).bind(f) == f(x)`
//! - Right Identity: `m.bind(Maybe::some) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::Maybe;
//!
//! let greeting = Maybe::some("start")
//!     .bind(|start| Maybe::some(format!("{start} end")))
//!     .fold(|value| value, || "none".to_string());
//! assert_eq!(greeting, "start end");
//!
//! // Coalescing with a literal fallback yields the bare value.
//! assert_eq!(Maybe::some("x") | "y", "x");
//! assert_eq!(Maybe::none() | "y", "y");
//! ```

use std::fmt;
use std::ops::BitOr;

use crate::error::FunctionalError;

/// An optional value.
///
/// # Type Parameters
///
/// * `T` - The type of the wrapped value
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// The absent value.
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Maybe;
    ///
    /// assert!(Maybe::some(42).is_some());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns the absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::InvalidArgument`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Maybe;
    /// use resultant::error::FunctionalError;
    ///
    /// assert_eq!(Maybe::try_some(Some(1)), Ok(Maybe::Some(1)));
    /// assert_eq!(
    ///     Maybe::<i32>::try_some(None),
    ///     Err(FunctionalError::invalid_argument("value"))
    /// );
    /// ```
    #[inline]
    pub fn try_some(value: Option<T>) -> Result<Self, FunctionalError> {
        value
            .map(Self::Some)
            .ok_or(FunctionalError::invalid_argument("value"))
    }

    /// Wraps a value that may be absent; absence becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Maybe;
    ///
    /// assert_eq!(Maybe::possible(Some("string")), Maybe::Some("string"));
    /// assert_eq!(Maybe::<&str>::possible(None), Maybe::None);
    /// ```
    #[inline]
    pub fn possible(value: Option<T>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the wrapped value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Runs `action` on the value if one is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// Maybe::some(1).if_some(|value| seen.push(*value));
    /// Maybe::<i32>::none().if_some(|value| seen.push(*value));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn if_some<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = self {
            action(value);
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Sequences a computation that may itself produce no value.
    ///
    /// `None` short-circuits: `binder` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).bind(half), Maybe::Some(4));
    /// assert_eq!(Maybe::some(3).bind(half), Maybe::None);
    /// assert_eq!(Maybe::none().bind(half), Maybe::None);
    /// ```
    #[inline]
    pub fn bind<R, F>(self, binder: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Self::Some(value) => binder(value),
            Self::None => Maybe::None,
        }
    }

    /// Alias for [`Maybe::bind`].
    #[inline]
    pub fn flat_map<R, F>(self, binder: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        self.bind(binder)
    }

    /// Applies `mapper` to a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(21).map(|x| x * 2), Maybe::Some(42));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 2), Maybe::None);
    /// ```
    #[inline]
    pub fn map<R, F>(self, mapper: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Some(value) => Maybe::Some(mapper(value)),
            Self::None => Maybe::None,
        }
    }

    /// Combines two values: `None` stays `None`, otherwise `other` wins.
    ///
    /// A present value in `self` is discarded in favour of `other`. This is
    /// not the usual left-biased fallback; use the `|` operator for that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).append(Maybe::some(2)), Maybe::Some(2));
    /// assert_eq!(Maybe::some(1).append(Maybe::none()), Maybe::None);
    /// assert_eq!(Maybe::none().append(Maybe::some(2)), Maybe::None);
    /// ```
    #[inline]
    #[must_use]
    pub fn append(self, other: Self) -> Self {
        match self {
            Self::None => self,
            Self::Some(_) => other,
        }
    }

    /// Resolves the value by supplying one handler per variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|x| format!("some {x}"), || "none".to_string());
    /// assert_eq!(describe(Maybe::some(1)), "some 1");
    /// assert_eq!(describe(Maybe::none()), "none");
    /// ```
    #[inline]
    pub fn fold<R, S, N>(self, some_function: S, none_function: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_function(),
        }
    }

    /// Returns the value, or `fallback` when absent.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the value, or computes one when absent.
    #[inline]
    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => fallback(),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Coalescing
// =============================================================================

impl<T> BitOr<T> for Maybe<T> {
    type Output = T;

    /// `maybe | fallback` yields the wrapped value, or `fallback` if absent.
    #[inline]
    fn bitor(self, fallback: T) -> T {
        self.value_or(fallback)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::possible(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "{value}"),
            Self::None => write!(formatter, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_is_none() {
        assert_eq!(Maybe::<String>::default(), Maybe::None);
    }

    #[rstest]
    #[case(Maybe::some(1), Maybe::some(1), true)]
    #[case(Maybe::some(1), Maybe::some(2), false)]
    #[case(Maybe::some(1), Maybe::none(), false)]
    #[case(Maybe::none(), Maybe::none(), true)]
    fn test_equality(#[case] left: Maybe<i32>, #[case] right: Maybe<i32>, #[case] equal: bool) {
        assert_eq!(left == right, equal);
    }

    #[rstest]
    fn test_try_some_rejects_absent_value() {
        assert_eq!(
            Maybe::<()>::try_some(None),
            Err(FunctionalError::InvalidArgument { parameter: "value" })
        );
    }

    #[rstest]
    fn test_none_bind_does_not_invoke_binder() {
        let mut invoked = false;
        let result: Maybe<i32> = Maybe::<i32>::none().bind(|x| {
            invoked = true;
            Maybe::some(x)
        });
        assert_eq!(result, Maybe::None);
        assert!(!invoked);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Maybe::some(5).to_string(), "5");
        assert_eq!(Maybe::<i32>::none().to_string(), "None");
    }

    #[rstest]
    fn test_option_roundtrip() {
        let option: Option<i32> = Maybe::from(Some(3)).into();
        assert_eq!(option, Some(3));
        assert_eq!(Maybe::<i32>::from(None).into_option(), None);
    }
}
