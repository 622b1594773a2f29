//! # resultant
//!
//! Explicit, composable result types: computations report absence, failure
//! and state through return values instead of ambient control flow.
//!
//! ## Overview
//!
//! - **Control**: [`Unit`](control::Unit), [`Maybe`](control::Maybe),
//!   [`Either`](control::Either) and total matching helpers
//! - **Effect**: [`Try`](effect::Try) and [`TryAsync`](effect::TryAsync)
//!   deferred computations that capture failures as
//!   [`TryResult`](effect::TryResult) values, [`State`](effect::State),
//!   and scoped resource helpers
//! - **Type classes**: `Functor`, `Applicative` and `Monad` for the sum types
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `control`: Sum types and matching helpers
//! - `effect`: `Try`, `State`, resources and `tap`
//! - `async`: `TryAsync`, async resources, `tap_async` (pulls in `tokio` and `futures`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use resultant::prelude::*;
//!
//! let parsed = Try::new(|| Ok("20".parse::<i32>()?))
//!     .map(|x| x + 1)
//!     .to_either();
//! assert_eq!(parsed.right_value(), Some(21));
//!
//! let fallback = Maybe::<i32>::none() | 7;
//! assert_eq!(fallback, 7);
//! ```
//!
//! ## Logging
//!
//! Capture boundaries emit `tracing` events. The library never installs a
//! subscriber.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use resultant::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Exception, FunctionalError};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
