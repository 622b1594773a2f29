//! Error taxonomy.
//!
//! Two kinds of error live here:
//!
//! - [`FunctionalError`]: programmer errors raised by the combinators
//!   themselves (absent payloads, resolving an uninitialized `Either`,
//!   a total match with no matching case, cancellation).
//! - [`Exception`]: the captured failure carried by `Try`, `TryAsync` and
//!   `TryResult`. Any `std::error::Error`, plain message, or panic payload
//!   can become an `Exception`.
//!
//! # Examples
//!
//! ```rust
//! use resultant::error::{Exception, FunctionalError};
//!
//! let exception = Exception::new("boom");
//! assert_eq!(exception.message(), "boom");
//!
//! let from_error: Exception = FunctionalError::Cancelled.into();
//! assert!(from_error.downcast_ref::<FunctionalError>().is_some());
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Errors raised by the combinators when they are used incorrectly.
///
/// These never come from user data; they signal a misuse at the call site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FunctionalError {
    /// A `Some`, `Left` or `Right` payload was absent.
    #[error("{parameter} cannot be absent")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
    /// A value was resolved in a state that has no valid resolution.
    #[error("{message}")]
    InvalidState {
        /// What went wrong.
        message: String,
    },
    /// A cooperative cancellation request aborted the remaining steps.
    #[error("operation was cancelled")]
    Cancelled,
}

impl FunctionalError {
    /// Creates an `InvalidArgument` error for the named parameter.
    #[must_use]
    pub const fn invalid_argument(parameter: &'static str) -> Self {
        Self::InvalidArgument { parameter }
    }

    /// Creates an `InvalidState` error with the given message.
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Message(String);

/// A captured failure.
///
/// `Exception` is a shared handle: cloning it is cheap and every clone
/// refers to the same underlying error. Two exceptions compare equal only
/// when they are clones of the same capture.
///
/// Any `E: std::error::Error + Send + Sync + 'static` converts into an
/// `Exception`, so `?` works inside `Try` computations.
///
/// # Examples
///
/// ```rust
/// use resultant::error::Exception;
///
/// fn parse(input: &str) -> Result<i32, Exception> {
///     Ok(input.parse::<i32>()?)
/// }
///
/// assert_eq!(parse("42").ok(), Some(42));
/// assert_eq!(parse("x").unwrap_err().message(), "invalid digit found in string");
/// ```
#[derive(Clone)]
pub struct Exception {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

impl Exception {
    /// Creates an exception carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Message(message.into())),
        }
    }

    /// Wraps an arbitrary error.
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Converts a panic payload into an exception.
    ///
    /// A payload that already is an `Exception` (see [`Exception::raise`])
    /// is returned as is, so re-raised failures keep their identity.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(exception) => return *exception,
            Err(payload) => payload,
        };
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "Unknown panic".to_string()
        };
        tracing::debug!(%message, "converted panic into exception");
        Self::new(message)
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Returns the underlying error.
    #[must_use]
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Attempts to view the underlying error as a concrete type.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Re-raises this exception.
    ///
    /// The exception unwinds as a panic payload; the nearest `Try` or
    /// `TryAsync` resolution recovers it unchanged.
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl<E> From<E> for Exception
where
    E: Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::from_error(error)
    }
}

impl AsRef<dyn Error + Send + Sync + 'static> for Exception {
    fn as_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.as_error()
    }
}

impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.inner)
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Exception")
            .field(&self.message())
            .finish()
    }
}

/// Runs a computation, converting a panic into an `Err`.
#[cfg_attr(not(feature = "effect"), allow(dead_code))]
pub(crate) fn capture<T, F>(computation: F) -> Result<T, Exception>
where
    F: FnOnce() -> Result<T, Exception>,
{
    catch_unwind(AssertUnwindSafe(computation))
        .unwrap_or_else(|payload| Err(Exception::from_panic(payload)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn invalid_argument_names_parameter() {
        let error = FunctionalError::invalid_argument("value");
        assert_eq!(error.to_string(), "value cannot be absent");
    }

    #[rstest]
    fn exception_clones_are_equal() {
        let exception = Exception::new("fail");
        assert_eq!(exception.clone(), exception);
        assert_ne!(Exception::new("fail"), exception);
    }

    #[rstest]
    fn exception_from_std_error_keeps_type() {
        let parse_error = "x".parse::<i32>().unwrap_err();
        let exception: Exception = parse_error.clone().into();
        assert_eq!(
            exception.downcast_ref::<std::num::ParseIntError>(),
            Some(&parse_error)
        );
    }

    #[rstest]
    #[case(Box::new("static") as Box<dyn Any + Send>, "static")]
    #[case(Box::new(String::from("owned")) as Box<dyn Any + Send>, "owned")]
    #[case(Box::new(42_u8) as Box<dyn Any + Send>, "Unknown panic")]
    fn exception_from_panic_payload(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
        assert_eq!(Exception::from_panic(payload).message(), expected);
    }

    #[rstest]
    fn raised_exception_keeps_identity() {
        let exception = Exception::new("raised");
        let raised = exception.clone();
        let captured: Result<(), Exception> = capture(move || raised.raise());
        assert_eq!(captured.unwrap_err(), exception);
    }

    #[rstest]
    fn capture_converts_panic_message() {
        let captured: Result<i32, Exception> = capture(|| panic!("boom"));
        assert_eq!(captured.unwrap_err().message(), "boom");
    }
}
