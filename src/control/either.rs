//! Either type - a disjoint two-sided result.
//!
//! This module provides the `Either<L, R>` type, which is `Left(L)`,
//! `Right(R)`, or the inert `None` state produced by default construction.
//! By convention:
//!
//! - `Left` carries failure or the first alternative
//! - `Right` carries success or the second alternative
//!
//! Combinators are right-biased: [`Either::bind`] and [`Either::map`] act on
//! `Right` and pass `Left` through. `None` is tolerated by every combinator
//! except [`Either::fold`] (and the one-sided mappers built on it), which
//! fails with [`FunctionalError::InvalidState`].
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::Either;
//!
//! let right: Either<String, i32> = Either::right(1);
//! let left: Either<String, i32> = Either::left("e".to_string());
//!
//! // Coalescing prefers the first Right.
//! assert_eq!(right.clone() | left.clone(), right);
//! assert_eq!(left.clone() | right.clone(), right);
//!
//! // Pattern matching through fold.
//! let described = left.fold(|e| format!("error: {e}"), |n| n.to_string());
//! assert_eq!(described, Ok("error: e".to_string()));
//! ```

use std::any::type_name;
use std::ops::BitOr;

use crate::error::FunctionalError;

/// A value that is one of two types, or neither.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use resultant::control::Either;
///
/// let success: Either<String, i32> = Either::right(42);
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
///
/// let uninitialized: Either<String, i32> = Either::default();
/// assert!(uninitialized.is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Either<L, R> {
    /// The inert, uninitialized state.
    None,
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Creates a `Left` from a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::InvalidArgument`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Either;
    ///
    /// assert!(Either::<&str, i32>::try_left(None).is_err());
    /// assert_eq!(Either::<&str, i32>::try_left(Some("e")), Ok(Either::Left("e")));
    /// ```
    #[inline]
    pub fn try_left(value: Option<L>) -> Result<Self, FunctionalError> {
        value
            .map(Self::Left)
            .ok_or(FunctionalError::invalid_argument("left"))
    }

    /// Creates a `Right` from a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::InvalidArgument`] when `value` is `None`.
    #[inline]
    pub fn try_right(value: Option<R>) -> Result<Self, FunctionalError> {
        value
            .map(Self::Right)
            .ok_or(FunctionalError::invalid_argument("right"))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is the uninitialized `None` state.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value, if any.
    #[inline]
    pub fn left_value(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) | Self::None => None,
        }
    }

    /// Returns the right value, if any.
    #[inline]
    pub fn right_value(self) -> Option<R> {
        match self {
            Self::Right(value) => Some(value),
            Self::Left(_) | Self::None => None,
        }
    }

    /// Returns a reference to the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) | Self::None => None,
        }
    }

    /// Returns a reference to the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Right(value) => Some(value),
            Self::Left(_) | Self::None => None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Sequences a computation on the right value.
    ///
    /// `None` stays `None`; `Left(l)` passes through re-typed and `binder`
    /// is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Either;
    ///
    /// let positive = |x: i32| if x > 0 { Either::right(x) } else { Either::left("negative") };
    /// assert_eq!(Either::right(5).bind(positive), Either::Right(5));
    /// assert_eq!(Either::right(-5).bind(positive), Either::Left("negative"));
    /// assert_eq!(Either::left("earlier").bind(positive), Either::Left("earlier"));
    /// ```
    #[inline]
    pub fn bind<T, F>(self, binder: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::None => Either::None,
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => binder(value),
        }
    }

    /// Sequences a computation on the left value.
    ///
    /// The mirror image of [`Either::bind`]: `Right(r)` passes through and
    /// `binder` only sees left values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Either;
    ///
    /// let recover = |e: &str| Either::<usize, i32>::left(e.len());
    /// assert_eq!(Either::<&str, i32>::left("oops").bind_left(recover), Either::Left(4));
    /// assert_eq!(Either::<&str, i32>::right(1).bind_left(recover), Either::Right(1));
    /// ```
    #[inline]
    pub fn bind_left<T, F>(self, binder: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::None => Either::None,
            Self::Left(value) => binder(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `mapper` to the right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Either;
    ///
    /// assert_eq!(Either::<&str, i32>::right(2).map(|x| x + 1), Either::Right(3));
    /// assert_eq!(Either::<&str, i32>::left("e").map(|x| x + 1), Either::Left("e"));
    /// assert_eq!(Either::<&str, i32>::None.map(|x| x + 1), Either::None);
    /// ```
    #[inline]
    pub fn map<T, F>(self, mapper: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::None => Either::None,
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(mapper(value)),
        }
    }

    /// Chains a step where only the last `Right` matters.
    ///
    /// - `None` yields `None`
    /// - `Left` short-circuits and is returned unchanged
    /// - `Right` is discarded in favour of `other`, whatever its kind
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(1);
    /// let left: Either<&str, i32> = Either::left("e");
    /// assert_eq!(right.append(left), left);
    /// assert_eq!(left.append(right), left);
    /// assert_eq!(right.append(Either::right(2)), Either::Right(2));
    /// assert_eq!(Either::None.append(right), Either::None);
    /// ```
    #[inline]
    #[must_use]
    pub fn append(self, other: Self) -> Self {
        match self {
            Self::None | Self::Left(_) => self,
            Self::Right(_) => other,
        }
    }

    /// Resolves the value by supplying one handler per side.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::InvalidState`] when called on `None`; an
    /// uninitialized `Either` has no valid match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Either;
    ///
    /// let resolve = |e: Either<&str, i32>| e.fold(|_| "left", |_| "right");
    /// assert_eq!(resolve(Either::right(1)), Ok("right"));
    /// assert_eq!(resolve(Either::left("")), Ok("left"));
    /// assert!(resolve(Either::None).is_err());
    /// ```
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> Result<T, FunctionalError>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::None => Err(FunctionalError::invalid_state(format!(
                "Either<{}, {}> of state None does not match Left or Right",
                type_name::<L>(),
                type_name::<R>()
            ))),
            Self::Left(value) => Ok(left_function(value)),
            Self::Right(value) => Ok(right_function(value)),
        }
    }

    /// Maps the left value, resolving through [`Either::fold`].
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::InvalidState`] when called on `None`.
    pub fn map_left<T, F>(self, mapper: F) -> Result<Either<T, R>, FunctionalError>
    where
        F: FnOnce(L) -> T,
    {
        self.fold(|value| Either::Left(mapper(value)), Either::Right)
    }

    /// Maps the right value, resolving through [`Either::fold`].
    ///
    /// Unlike [`Either::map`], `None` is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionalError::InvalidState`] when called on `None`.
    pub fn map_right<T, F>(self, mapper: F) -> Result<Either<L, T>, FunctionalError>
    where
        F: FnOnce(R) -> T,
    {
        self.fold(Either::Left, |value| Either::Right(mapper(value)))
    }
}

impl<L, R> Default for Either<L, R> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Coalescing
// =============================================================================

impl<L, R> BitOr for Either<L, R> {
    type Output = Self;

    /// Prefers the first operand's `Right`, falling back to the second only
    /// when the first is `Left`. If either operand is `None` the first
    /// operand is returned unchanged.
    #[inline]
    fn bitor(self, other: Self) -> Self {
        if self.is_none() || other.is_none() || self.is_right() {
            self
        } else {
            other
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> TryFrom<Either<L, R>> for Result<R, L> {
    type Error = FunctionalError;

    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    ///
    /// The `None` state has no `Result` counterpart and fails.
    #[inline]
    fn try_from(either: Either<L, R>) -> Result<Self, Self::Error> {
        either.fold(Err, Ok)
    }
}
