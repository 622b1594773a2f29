//! Deferred computations, state threading and scoped resources.
//!
//! This module provides:
//!
//! - [`Try`]: a deferred synchronous computation that captures failures
//! - [`TryResult`]: the resolved outcome of a `Try` or `TryAsync`
//! - [`TryAsync`]: the asynchronous counterpart of `Try` (requires `async`)
//! - [`State`]: a computation that threads a state value
//! - [`Release`] and the `using` / `try_use` family: scoped resources
//! - [`tap`]: pass-through side effects
//!
//! # Capture boundary
//!
//! `Try::resolve` and `TryAsync::resolve` never panic. Errors returned by
//! the computation and panics raised inside it (including inside binders
//! and async continuations) are both reported as
//! [`TryResult::Failure`].
//!
//! # Examples
//!
//! ```rust
//! use resultant::effect::{Try, TryResult};
//!
//! let computation = Try::pure(5)
//!     .bind(|x| Try::of(move || x * 2))
//!     .map(|x| x + 1);
//!
//! assert_eq!(computation.resolve(), TryResult::Value(11));
//! ```

// =============================================================================
// Try
// =============================================================================

mod try_effect;
mod try_result;

pub use try_effect::Try;
pub use try_result::TryResult;

#[cfg(feature = "async")]
mod try_async;

#[cfg(feature = "async")]
pub use try_async::TryAsync;

// =============================================================================
// State
// =============================================================================

mod state;

pub use state::State;

// =============================================================================
// Resources
// =============================================================================

mod resource;

pub use resource::{Release, try_use, try_use_try, using};

#[cfg(feature = "async")]
pub use resource::{try_use_async, try_use_try_async, using_async};

// =============================================================================
// Tap and cancellation
// =============================================================================

mod tap;

pub use tap::{tap, tap_some};

#[cfg(feature = "async")]
mod cancellation;

#[cfg(feature = "async")]
pub use cancellation::CancellationToken;

#[cfg(feature = "async")]
pub use tap::tap_async;
