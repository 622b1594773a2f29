//! Scoped use of releasable resources.
//!
//! A resource implements [`Release`]. The helpers here hand a resource to a
//! user function and release it afterwards, whether the user function
//! returns or panics:
//!
//! - [`using`] / [`using_async`]: plain scoped use.
//! - [`try_use`], [`try_use_try`]: acquire through a fallible factory and
//!   produce a deferred [`Try`].
//! - [`try_use_async`], [`try_use_try_async`]: the same for [`TryAsync`].
//!
//! When both the user function and the release panic, the user's panic is
//! kept and the release panic is logged at `warn` level.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use resultant::effect::{Release, using};
//!
//! struct Connection<'a> {
//!     open: &'a Cell<bool>,
//! }
//!
//! impl Release for Connection<'_> {
//!     fn release(self) {
//!         self.open.set(false);
//!     }
//! }
//!
//! let open = Cell::new(true);
//! let was_open = using(Connection { open: &open }, |connection| connection.open.get());
//! assert!(was_open);
//! assert!(!open.get());
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};
use std::thread;

use super::try_effect::Try;
use crate::error::Exception;

#[cfg(feature = "async")]
use super::try_async::TryAsync;
#[cfg(feature = "async")]
use futures::FutureExt;
#[cfg(feature = "async")]
use std::future::Future;
#[cfg(feature = "async")]
use std::sync::Arc;

/// A resource that must be released after use.
///
/// `release` consumes the resource, so it runs at most once.
pub trait Release {
    /// Releases the resource.
    fn release(self);
}

fn settle<T>(outcome: thread::Result<T>, released: thread::Result<()>) -> T {
    match (outcome, released) {
        (Ok(value), Ok(())) => value,
        (Err(original_panic), Ok(())) => resume_unwind(original_panic),
        (Ok(_), Err(release_panic)) => resume_unwind(release_panic),
        (Err(original_panic), Err(_)) => {
            tracing::warn!("release panicked while a failure was pending; keeping the original failure");
            resume_unwind(original_panic)
        }
    }
}

/// Runs `user` on `resource`, then releases it.
///
/// The resource is released even when `user` panics; the panic then
/// continues after the release.
pub fn using<R, T, F>(resource: R, user: F) -> T
where
    R: Release,
    F: FnOnce(&R) -> T,
{
    let outcome = catch_unwind(AssertUnwindSafe(|| user(&resource)));
    let released = catch_unwind(AssertUnwindSafe(|| resource.release()));
    settle(outcome, released)
}

/// Runs the future built by `user`, then releases the resource.
///
/// `user` receives a shared handle to the resource. The resource is
/// released only after the user's future has completed, even when it
/// panics. A handle kept alive beyond that point prevents the release,
/// which is then skipped with a `warn` event.
#[cfg(feature = "async")]
pub async fn using_async<R, T, F, Fut>(resource: R, user: F) -> T
where
    R: Release,
    F: FnOnce(Arc<R>) -> Fut,
    Fut: Future<Output = T>,
{
    let shared = Arc::new(resource);
    let outcome = match catch_unwind(AssertUnwindSafe(|| user(Arc::clone(&shared)))) {
        Ok(future) => AssertUnwindSafe(future).catch_unwind().await,
        Err(panic) => Err(panic),
    };
    let released = match Arc::try_unwrap(shared) {
        Ok(resource) => catch_unwind(AssertUnwindSafe(|| resource.release())),
        Err(_) => {
            tracing::warn!("resource still shared after use; release skipped");
            Ok(())
        }
    };
    settle(outcome, released)
}

/// Acquires a resource from `factory`, uses it, and releases it.
///
/// The returned `Try` is deferred: every resolution acquires a fresh
/// resource. A failing factory fails the `Try` without calling `user`.
///
/// # Examples
///
/// ```rust
/// use resultant::effect::{Release, TryResult, try_use};
///
/// #[derive(Clone)]
/// struct Buffer(Vec<u8>);
///
/// impl Release for Buffer {
///     fn release(self) {}
/// }
///
/// let length = try_use(|| Ok(Buffer(vec![1, 2, 3])), |buffer| buffer.0.len());
/// assert_eq!(length.resolve(), TryResult::Value(3));
/// ```
pub fn try_use<R, T, A, U>(factory: A, user: U) -> Try<T>
where
    R: Release,
    T: 'static,
    A: Fn() -> Result<R, Exception> + Send + Sync + 'static,
    U: Fn(&R) -> T + Send + Sync + 'static,
{
    Try::new(move || {
        let resource = factory()?;
        Ok(using(resource, &user))
    })
}

/// Like [`try_use`], for a user function that itself returns a `Try`.
pub fn try_use_try<R, T, A, U>(factory: A, user: U) -> Try<T>
where
    R: Release,
    T: 'static,
    A: Fn() -> Result<R, Exception> + Send + Sync + 'static,
    U: Fn(&R) -> Try<T> + Send + Sync + 'static,
{
    Try::new(move || {
        let resource = factory()?;
        using(resource, |shared| user(shared).run())
    })
}

/// Acquires a resource, awaits the user's future, and releases it.
///
/// The factory runs when the returned `TryAsync` starts resolving. Release
/// happens strictly after the user's future has completed.
#[cfg(feature = "async")]
pub fn try_use_async<R, T, A, U, Fut>(factory: A, user: U) -> TryAsync<T>
where
    R: Release + Send + Sync + 'static,
    T: Send + 'static,
    A: Fn() -> Result<R, Exception> + Send + Sync + 'static,
    U: Fn(Arc<R>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = T> + Send + 'static,
{
    let user = Arc::new(user);
    TryAsync::new(move || {
        let acquired = factory();
        let user = Arc::clone(&user);
        async move {
            let resource = acquired?;
            Ok(using_async(resource, move |shared| user(shared)).await)
        }
    })
}

/// Like [`try_use_async`], for a user function that returns a `TryAsync`.
#[cfg(feature = "async")]
pub fn try_use_try_async<R, T, A, U>(factory: A, user: U) -> TryAsync<T>
where
    R: Release + Send + Sync + 'static,
    T: Send + 'static,
    A: Fn() -> Result<R, Exception> + Send + Sync + 'static,
    U: Fn(Arc<R>) -> TryAsync<T> + Send + Sync + 'static,
{
    let user = Arc::new(user);
    TryAsync::new(move || {
        let acquired = factory();
        let user = Arc::clone(&user);
        async move {
            let resource = acquired?;
            using_async(resource, move |shared| {
                let attempt = user(shared);
                async move { attempt.run().await }
            })
            .await
        }
    })
}
