//! Try - a deferred computation whose failures are captured as values.
//!
//! A `Try<T>` wraps a computation producing `T` that may fail. Nothing runs
//! until [`Try::resolve`] is called; resolution never panics. An `Err`
//! returned by the computation and a panic raised inside it both become a
//! [`TryResult::Failure`].
//!
//! Every combinator produces a new `Try` that, when resolved, resolves its
//! source first. A failure short-circuits the rest of the chain.
//!
//! Resolution is not memoized: each call to `resolve` re-runs the whole
//! chain, including any side effects.
//!
//! # Examples
//!
//! ```rust
//! use resultant::effect::{Try, TryResult};
//!
//! let parsed = Try::new(|| Ok("21".parse::<i32>()?)).map(|x| x * 2);
//! assert_eq!(parsed.resolve(), TryResult::Value(42));
//!
//! let failed = Try::new(|| Ok("x".parse::<i32>()?)).map(|x| x * 2);
//! assert!(failed.resolve().is_failure());
//! ```

use std::fmt;
use std::sync::Arc;

use super::try_result::TryResult;
use crate::control::{Either, Unit};
use crate::error::{Exception, capture};

#[cfg(feature = "async")]
use super::try_async::TryAsync;
#[cfg(feature = "async")]
use std::future::Future;

type Computation<T> = Arc<dyn Fn() -> Result<T, Exception> + Send + Sync>;

/// A deferred, failable computation.
///
/// Cloning a `Try` shares the underlying computation.
pub struct Try<T> {
    computation: Computation<T>,
}

impl<T: 'static> Try<T> {
    /// Creates a `Try` from a computation that reports failure through `Err`.
    ///
    /// Panics raised by `computation` are captured as well.
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn() -> Result<T, Exception> + Send + Sync + 'static,
    {
        Self {
            computation: Arc::new(computation),
        }
    }

    /// Creates a `Try` from a plain computation.
    ///
    /// The computation can only fail by panicking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::effect::Try;
    ///
    /// let answer = Try::of(|| 6 * 7);
    /// assert_eq!(answer.resolve().value(), Some(42));
    ///
    /// let boom: Try<i32> = Try::of(|| panic!("boom"));
    /// assert_eq!(boom.resolve().failure().unwrap().message(), "boom");
    /// ```
    pub fn of<F>(computation: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::new(move || Ok(computation()))
    }

    /// Creates a `Try` that always succeeds with `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(move || Ok(value.clone()))
    }

    /// Creates a `Try` that always succeeds with `T::default()`.
    #[must_use]
    pub fn default_value() -> Self
    where
        T: Default,
    {
        Self::new(|| Ok(T::default()))
    }

    /// Creates a `Try` that always fails with `exception`.
    #[must_use]
    pub fn fail(exception: Exception) -> Self {
        Self::new(move || Err(exception.clone()))
    }

    /// Creates a `Try` that always fails with a fresh message-only exception.
    ///
    /// The failure is the same `Exception` on every resolution.
    pub fn fail_with(message: impl Into<String>) -> Self {
        Self::fail(Exception::new(message))
    }

    /// Runs the computation inside a capture boundary.
    pub(crate) fn run(&self) -> Result<T, Exception> {
        capture(|| (self.computation)())
    }

    /// Runs the computation and returns its outcome.
    ///
    /// Never panics. A failure is logged at `debug` level.
    pub fn resolve(&self) -> TryResult<T> {
        let outcome = self.run();
        if let Err(exception) = &outcome {
            tracing::debug!(message = %exception, "try resolved to failure");
        }
        outcome.into()
    }

    /// Chains a computation that depends on the value.
    ///
    /// `binder` only runs when this `Try` succeeds; its own failures and
    /// panics are captured.
    pub fn bind<R, F>(self, binder: F) -> Try<R>
    where
        R: 'static,
        F: Fn(T) -> Try<R> + Send + Sync + 'static,
    {
        Try::new(move || {
            let value = self.run()?;
            binder(value).run()
        })
    }

    /// Alias for [`Try::bind`].
    pub fn flat_map<R, F>(self, binder: F) -> Try<R>
    where
        R: 'static,
        F: Fn(T) -> Try<R> + Send + Sync + 'static,
    {
        self.bind(binder)
    }

    /// Transforms the value with a plain function.
    ///
    /// A panic inside `mapper` becomes a failure.
    pub fn map<R, F>(self, mapper: F) -> Try<R>
    where
        R: 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Try::new(move || self.run().map(&mapper))
    }

    /// Chains a function that returns an already-resolved outcome.
    pub fn bind_result<R, F>(self, binder: F) -> Try<R>
    where
        R: 'static,
        F: Fn(T) -> TryResult<R> + Send + Sync + 'static,
    {
        Try::new(move || {
            let value = self.run()?;
            binder(value).into_result()
        })
    }

    /// Runs a unit step after a success and keeps this `Try`'s value.
    ///
    /// A failure of `step` fails the combined `Try`.
    #[must_use]
    pub fn and_also(self, step: Try<Unit>) -> Self {
        Self::new(move || {
            let value = self.run()?;
            step.run()?;
            Ok(value)
        })
    }

    /// Chains an asynchronous computation.
    ///
    /// This `Try` resolves synchronously when the returned `TryAsync` is
    /// resolved; `binder` then runs on its value.
    #[cfg(feature = "async")]
    pub fn bind_async<R, F>(self, binder: F) -> TryAsync<R>
    where
        T: Send,
        R: Send + 'static,
        F: Fn(T) -> TryAsync<R> + Send + Sync + 'static,
    {
        let binder = Arc::new(binder);
        TryAsync::new(move || {
            let outcome = self.run();
            let binder = Arc::clone(&binder);
            async move {
                let value = outcome?;
                binder(value).run().await
            }
        })
    }

    /// Converts into a `TryAsync` that resolves this `Try` when awaited.
    #[cfg(feature = "async")]
    pub fn into_async(self) -> TryAsync<T>
    where
        T: Send,
    {
        TryAsync::new(move || std::future::ready(self.run()))
    }

    /// Always resolves `binder`, and keeps this `Try`'s value.
    ///
    /// Both computations run on every resolution. When this `Try` fails its
    /// failure is reported; otherwise a failure of `binder` is reported;
    /// otherwise the result is this `Try`'s value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicBool, Ordering};
    /// use resultant::effect::Try;
    ///
    /// let cleaned = Arc::new(AtomicBool::new(false));
    /// let flag = Arc::clone(&cleaned);
    /// let cleanup = Try::of(move || flag.store(true, Ordering::SeqCst));
    ///
    /// let outcome = Try::<i32>::fail_with("failed").regardless(cleanup).resolve();
    /// assert_eq!(outcome.failure().unwrap().message(), "failed");
    /// assert!(cleaned.load(Ordering::SeqCst));
    /// ```
    #[must_use]
    pub fn regardless<R>(self, binder: Try<R>) -> Self
    where
        R: 'static,
    {
        Self::new(move || {
            let outcome = self.run();
            let finalizer = binder.run();
            let value = outcome?;
            finalizer?;
            Ok(value)
        })
    }

    /// Binds conditionally on the bound result.
    ///
    /// On success, `binder` runs on the value. When its result satisfies
    /// `predicate` that result is kept; otherwise the original value is
    /// passed through `fallback_map` instead.
    pub fn bind_if<R, B, P, M>(self, binder: B, predicate: P, fallback_map: M) -> Try<R>
    where
        T: Clone,
        R: 'static,
        B: Fn(T) -> Try<R> + Send + Sync + 'static,
        P: Fn(&R) -> bool + Send + Sync + 'static,
        M: Fn(T) -> R + Send + Sync + 'static,
    {
        Try::new(move || {
            let value = self.run()?;
            let bound = binder(value.clone()).run()?;
            if predicate(&bound) {
                Ok(bound)
            } else {
                Ok(fallback_map(value))
            }
        })
    }

    /// Sequences `other` after this `Try`, discarding this value.
    ///
    /// When this `Try` fails its failure is reported and `other` never runs.
    #[must_use]
    pub fn append(self, other: Self) -> Self {
        Self::new(move || {
            self.run()?;
            other.run()
        })
    }

    /// Resolves and handles both outcomes.
    pub fn fold<R, S, F>(&self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Exception) -> R,
    {
        self.resolve().fold(success, failure)
    }

    /// Resolves, handles both outcomes, and post-processes the handled result.
    pub fn fold_with<R, Q, S, F, E>(&self, success: S, failure: F, on_either: E) -> Q
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Exception) -> R,
        E: FnOnce(R) -> Q,
    {
        on_either(self.fold(success, failure))
    }

    /// Resolves into an `Either`, with the failure on the left.
    pub fn to_either(&self) -> Either<Exception, T> {
        self.resolve().into()
    }
}

impl Try<Unit> {
    /// Creates a `Try` from a side effect.
    pub fn action<F>(action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::of(move || {
            action();
            Unit
        })
    }
}

#[cfg(feature = "async")]
impl<Fut> Try<Fut>
where
    Fut: Future + Send + 'static,
    Fut::Output: Send + 'static,
{
    /// Converts a `Try` that produces a future into a `TryAsync` awaiting it.
    ///
    /// Failures and panics while producing or awaiting the future are both
    /// captured.
    pub fn flatten_async(self) -> TryAsync<Fut::Output> {
        TryAsync::new(move || {
            let outcome = self.run();
            async move { Ok(outcome?.await) }
        })
    }

    /// Resolves, awaits the produced future, and returns an `Either`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::control::Either;
    /// use resultant::effect::Try;
    ///
    /// # futures::executor::block_on(async {
    /// let pending = Try::of(|| async { 21 * 2 });
    /// assert_eq!(pending.to_either_async().await, Either::Right(42));
    /// # });
    /// ```
    pub async fn to_either_async(&self) -> Either<Exception, Fut::Output> {
        self.clone().flatten_async().to_either().await
    }
}

impl<T> Clone for Try<T> {
    fn clone(&self) -> Self {
        Self {
            computation: Arc::clone(&self.computation),
        }
    }
}

impl<T> fmt::Display for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Try>")
    }
}

// =============================================================================
// Either<Exception, R> helpers
// =============================================================================

impl<R> Either<Exception, R> {
    /// Wraps a successful value.
    #[inline]
    pub const fn ok(value: R) -> Self {
        Self::Right(value)
    }

    /// Wraps a message-only failure.
    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Left(Exception::new(message))
    }

    /// Wraps an existing failure.
    #[inline]
    pub const fn from_exception(exception: Exception) -> Self {
        Self::Left(exception)
    }

    /// Chains a `Try` on the right value.
    ///
    /// The returned `Try` is deferred. When resolved, `Left` fails with its
    /// exception, `None` fails with `InvalidState`, and `Right` runs
    /// `binder`.
    pub fn bind_try<T, F>(self, binder: F) -> Try<T>
    where
        R: Clone + Send + Sync + 'static,
        T: 'static,
        F: Fn(R) -> Try<T> + Send + Sync + 'static,
    {
        Try::new(move || {
            let value = TryResult::from(self.clone()).into_result()?;
            binder(value).run()
        })
    }

    /// Chains a `TryAsync` on the right value.
    #[cfg(feature = "async")]
    pub fn bind_try_async<T, F>(self, binder: F) -> TryAsync<T>
    where
        R: Clone + Send + Sync + 'static,
        T: Send + 'static,
        F: Fn(R) -> TryAsync<T> + Send + Sync + 'static,
    {
        let binder = Arc::new(binder);
        TryAsync::new(move || {
            let outcome = TryResult::from(self.clone()).into_result();
            let binder = Arc::clone(&binder);
            async move {
                let value = outcome?;
                binder(value).run().await
            }
        })
    }
}
