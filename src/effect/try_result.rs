//! The outcome of resolving a `Try` or `TryAsync`.
//!
//! `TryResult<T>` is either `Value(T)` or `Failure(Exception)`. It is
//! isomorphic to `Either<Exception, T>` (`Value` ↔ `Right`, `Failure` ↔
//! `Left`) and to `Result<T, Exception>`, with explicit conversions for both.
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::Either;
//! use resultant::effect::TryResult;
//! use resultant::error::Exception;
//!
//! let value: TryResult<i32> = TryResult::Value(1);
//! let either: Either<Exception, i32> = value.into();
//! assert_eq!(either, Either::Right(1));
//!
//! // The uninitialized Either has no value and becomes a failure.
//! let none: TryResult<i32> = Either::<Exception, i32>::None.into();
//! assert!(none.is_failure());
//! ```

use crate::control::Either;
use crate::error::Exception;

/// The resolved outcome of a deferred, failable computation.
#[derive(Clone, PartialEq, Debug)]
pub enum TryResult<T> {
    /// The computation produced a value.
    Value(T),
    /// The computation failed.
    Failure(Exception),
}

impl<T> TryResult<T> {
    /// Returns `true` if the computation produced a value.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the value, if any.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the captured failure, if any.
    #[inline]
    pub fn failure(self) -> Option<Exception> {
        match self {
            Self::Value(_) => None,
            Self::Failure(exception) => Some(exception),
        }
    }

    /// Applies `mapper` to the value, keeping a failure as is.
    #[inline]
    pub fn map<R, F>(self, mapper: F) -> TryResult<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Value(value) => TryResult::Value(mapper(value)),
            Self::Failure(exception) => TryResult::Failure(exception),
        }
    }

    /// Resolves the outcome by supplying one handler per variant.
    #[inline]
    pub fn fold<R, S, F>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Exception) -> R,
    {
        match self {
            Self::Value(value) => success(value),
            Self::Failure(exception) => failure(exception),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Exception> {
        self.into()
    }

    /// Returns the value, re-raising a captured failure.
    ///
    /// # Panics
    ///
    /// Panics with the captured [`Exception`] as payload when this is a
    /// `Failure`; an enclosing `Try` resolution recovers it unchanged.
    #[inline]
    pub fn value_or_raise(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Failure(exception) => exception.raise(),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Result<T, Exception>> for TryResult<T> {
    #[inline]
    fn from(result: Result<T, Exception>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(exception) => Self::Failure(exception),
        }
    }
}

impl<T> From<TryResult<T>> for Result<T, Exception> {
    #[inline]
    fn from(outcome: TryResult<T>) -> Self {
        match outcome {
            TryResult::Value(value) => Ok(value),
            TryResult::Failure(exception) => Err(exception),
        }
    }
}

impl<T> From<TryResult<T>> for Either<Exception, T> {
    /// `Value` becomes `Right`, `Failure` becomes `Left`.
    #[inline]
    fn from(outcome: TryResult<T>) -> Self {
        match outcome {
            TryResult::Value(value) => Self::Right(value),
            TryResult::Failure(exception) => Self::Left(exception),
        }
    }
}

impl<T> From<Either<Exception, T>> for TryResult<T> {
    /// `Right` becomes `Value`, `Left` becomes `Failure`.
    ///
    /// The `None` state becomes a `Failure` carrying the `InvalidState`
    /// error that resolving it would have raised.
    #[inline]
    fn from(either: Either<Exception, T>) -> Self {
        either
            .fold(Self::Failure, Self::Value)
            .unwrap_or_else(|error| Self::Failure(error.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FunctionalError;
    use rstest::rstest;

    #[rstest]
    fn test_failure_converts_to_left() {
        let exception = Exception::new("fail");
        let either: Either<Exception, i32> = TryResult::Failure(exception.clone()).into();
        assert_eq!(either, Either::Left(exception));
    }

    #[rstest]
    fn test_right_converts_to_value() {
        let outcome: TryResult<&str> = Either::right("ok").into();
        assert_eq!(outcome, TryResult::Value("ok"));
    }

    #[rstest]
    fn test_none_converts_to_invalid_state_failure() {
        let outcome: TryResult<i32> = Either::None.into();
        let exception = outcome.failure().unwrap();
        assert!(matches!(
            exception.downcast_ref::<FunctionalError>(),
            Some(FunctionalError::InvalidState { .. })
        ));
    }

    #[rstest]
    fn test_result_roundtrip() {
        let outcome = TryResult::from(Ok::<_, Exception>(5));
        assert_eq!(outcome.into_result().ok(), Some(5));
    }
}
