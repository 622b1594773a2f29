//! `TryAsync` - the asynchronous counterpart of `Try`.
//!
//! A `TryAsync<T>` wraps a factory of futures producing `Result<T, Exception>`.
//! Nothing runs until [`TryAsync::resolve`] is awaited. The capture boundary
//! covers both phases of a resolution:
//!
//! - the synchronous call that builds the future,
//! - polling the future to completion.
//!
//! A panic in either phase becomes a [`TryResult::Failure`], as does an `Err`.
//!
//! Each resolution builds a fresh future, so side effects re-run.
//!
//! # Examples
//!
//! ```rust
//! use resultant::effect::{TryAsync, TryResult};
//!
//! # futures::executor::block_on(async {
//! let doubled = TryAsync::of(|| async { 21 }).map(|x| x * 2);
//! assert_eq!(doubled.resolve().await, TryResult::Value(42));
//! # });
//! ```

use std::fmt;
use std::future::{Future, ready};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::try_result::TryResult;
use crate::control::{Either, Unit};
use crate::error::Exception;

type AsyncComputation<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, Exception>> + Send + Sync>;

/// A deferred, failable asynchronous computation.
///
/// Cloning a `TryAsync` shares the underlying future factory.
pub struct TryAsync<T> {
    computation: AsyncComputation<T>,
}

impl<T: Send + 'static> TryAsync<T> {
    /// Creates a `TryAsync` from a factory of fallible futures.
    pub fn new<F, Fut>(computation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, Exception>> + Send + 'static,
    {
        Self {
            computation: Arc::new(move || computation().boxed()),
        }
    }

    /// Creates a `TryAsync` from a factory of plain futures.
    pub fn of<F, Fut>(computation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::new(move || computation().map(Ok))
    }

    /// Creates a `TryAsync` that always succeeds with `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::new(move || ready(Ok(value.clone())))
    }

    /// Creates a `TryAsync` that always succeeds with `T::default()`.
    #[must_use]
    pub fn default_value() -> Self
    where
        T: Default,
    {
        Self::new(|| ready(Ok(T::default())))
    }

    /// Creates a `TryAsync` that always fails with `exception`.
    #[must_use]
    pub fn fail(exception: Exception) -> Self {
        Self::new(move || ready(Err(exception.clone())))
    }

    /// Creates a `TryAsync` that always fails with a message-only exception.
    pub fn fail_with(message: impl Into<String>) -> Self {
        Self::fail(Exception::new(message))
    }

    /// Creates a `TryAsync` from a factory of futures yielding `Either`.
    ///
    /// `Left` becomes a failure; so does the `None` state, with
    /// `InvalidState`.
    pub fn from_either_future<F, Fut>(computation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Either<Exception, T>> + Send + 'static,
    {
        Self::new(move || computation().map(|either| TryResult::from(either).into_result()))
    }

    pub(crate) async fn run(&self) -> Result<T, Exception> {
        let future = match catch_unwind(AssertUnwindSafe(|| (self.computation)())) {
            Ok(future) => future,
            Err(payload) => return Err(Exception::from_panic(payload)),
        };
        AssertUnwindSafe(future)
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(Exception::from_panic(payload)))
    }

    /// Runs the computation to completion and returns its outcome.
    ///
    /// Never panics. A failure is logged at `debug` level.
    pub async fn resolve(&self) -> TryResult<T> {
        let outcome = self.run().await;
        if let Err(exception) = &outcome {
            tracing::debug!(message = %exception, "async try resolved to failure");
        }
        outcome.into()
    }

    /// Chains an asynchronous computation that depends on the value.
    pub fn bind<R, F>(self, binder: F) -> TryAsync<R>
    where
        R: Send + 'static,
        F: Fn(T) -> TryAsync<R> + Send + Sync + 'static,
    {
        let binder = Arc::new(binder);
        TryAsync::new(move || {
            let source = self.clone();
            let binder = Arc::clone(&binder);
            async move {
                let value = source.run().await?;
                binder(value).run().await
            }
        })
    }

    /// Alias for [`TryAsync::bind`].
    pub fn flat_map<R, F>(self, binder: F) -> TryAsync<R>
    where
        R: Send + 'static,
        F: Fn(T) -> TryAsync<R> + Send + Sync + 'static,
    {
        self.bind(binder)
    }

    /// Transforms the value with a plain function.
    pub fn map<R, F>(self, mapper: F) -> TryAsync<R>
    where
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let mapper = Arc::new(mapper);
        TryAsync::new(move || {
            let source = self.clone();
            let mapper = Arc::clone(&mapper);
            async move { source.run().await.map(|value| mapper(value)) }
        })
    }

    /// Chains a function returning a plain future.
    pub fn bind_future<R, F, Fut>(self, binder: F) -> TryAsync<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let binder = Arc::new(binder);
        TryAsync::new(move || {
            let source = self.clone();
            let binder = Arc::clone(&binder);
            async move {
                let value = source.run().await?;
                Ok(binder(value).await)
            }
        })
    }

    /// Chains a function returning a future of `Either`.
    ///
    /// `Left` and the `None` state become failures.
    pub fn bind_either<R, F, Fut>(self, binder: F) -> TryAsync<R>
    where
        R: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Either<Exception, R>> + Send + 'static,
    {
        let binder = Arc::new(binder);
        TryAsync::new(move || {
            let source = self.clone();
            let binder = Arc::clone(&binder);
            async move {
                let value = source.run().await?;
                TryResult::from(binder(value).await).into_result()
            }
        })
    }

    /// Runs a unit step after a success and keeps this value.
    #[must_use]
    pub fn and_also(self, step: TryAsync<Unit>) -> Self {
        Self::new(move || {
            let source = self.clone();
            let step = step.clone();
            async move {
                let value = source.run().await?;
                step.run().await?;
                Ok(value)
            }
        })
    }

    /// Always resolves `binder` after this computation, keeping this value.
    ///
    /// Failure precedence matches [`Try::regardless`](super::Try::regardless):
    /// this computation's failure first, then `binder`'s.
    #[must_use]
    pub fn regardless<R>(self, binder: TryAsync<R>) -> Self
    where
        R: Send + 'static,
    {
        Self::new(move || {
            let source = self.clone();
            let binder = binder.clone();
            async move {
                let outcome = source.run().await;
                let finalizer = binder.run().await;
                let value = outcome?;
                finalizer?;
                Ok(value)
            }
        })
    }

    /// Binds conditionally on the bound result.
    ///
    /// When the bound result fails `predicate`, the original value is passed
    /// through `fallback_map` instead.
    pub fn bind_if<R, B, P, M>(self, binder: B, predicate: P, fallback_map: M) -> TryAsync<R>
    where
        T: Clone,
        R: Send + 'static,
        B: Fn(T) -> TryAsync<R> + Send + Sync + 'static,
        P: Fn(&R) -> bool + Send + Sync + 'static,
        M: Fn(T) -> R + Send + Sync + 'static,
    {
        let binder = Arc::new(binder);
        let predicate = Arc::new(predicate);
        let fallback_map = Arc::new(fallback_map);
        TryAsync::new(move || {
            let source = self.clone();
            let binder = Arc::clone(&binder);
            let predicate = Arc::clone(&predicate);
            let fallback_map = Arc::clone(&fallback_map);
            async move {
                let value = source.run().await?;
                let bound = binder(value.clone()).run().await?;
                if predicate(&bound) {
                    Ok(bound)
                } else {
                    Ok(fallback_map(value))
                }
            }
        })
    }

    /// Sequences `other` after this computation, discarding this value.
    #[must_use]
    pub fn append(self, other: Self) -> Self {
        Self::new(move || {
            let source = self.clone();
            let other = other.clone();
            async move {
                source.run().await?;
                other.run().await
            }
        })
    }

    /// Resolves and handles both outcomes.
    pub async fn fold<R, S, F>(&self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Exception) -> R,
    {
        self.resolve().await.fold(success, failure)
    }

    /// Resolves, handles both outcomes, and post-processes the handled result.
    pub async fn fold_with<R, Q, S, F, E>(&self, success: S, failure: F, on_either: E) -> Q
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Exception) -> R,
        E: FnOnce(R) -> Q,
    {
        on_either(self.fold(success, failure).await)
    }

    /// Resolves into an `Either`, with the failure on the left.
    pub async fn to_either(&self) -> Either<Exception, T> {
        self.resolve().await.into()
    }
}

impl TryAsync<Unit> {
    /// Creates a `TryAsync` from an asynchronous side effect.
    pub fn action<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::of(move || action().map(|()| Unit))
    }
}

impl<T> Clone for TryAsync<T> {
    fn clone(&self) -> Self {
        Self {
            computation: Arc::clone(&self.computation),
        }
    }
}

impl<T> fmt::Display for TryAsync<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<TryAsync>")
    }
}

impl<T: Send + 'static> From<super::try_effect::Try<T>> for TryAsync<T> {
    fn from(attempt: super::try_effect::Try<T>) -> Self {
        attempt.into_async()
    }
}
