//! Type class traits over the sum types.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through a GAT
//! - [`Functor`]: mapping over the contained value
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing dependent computations
//!
//! `Maybe` and `Either` implement all three. `Either` is right-biased, and
//! both its `Left` and `None` states short-circuit.
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::{Either, Maybe};
//! use resultant::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_all<F: Functor<Inner = i32>>(functor: F) -> F::WithType<i32> {
//!     functor.fmap(|x| x * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::some(4)), Maybe::some(8));
//! assert_eq!(double_all(Either::<&str, i32>::right(4)), Either::right(8));
//!
//! let paired = Maybe::some(1).product(Maybe::some("a"));
//! assert_eq!(paired, Maybe::some((1, "a")));
//!
//! let chained = Either::<&str, i32>::right(1).then(Either::<&str, i32>::left("stop"));
//! assert_eq!(chained, Either::left("stop"));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
#[cfg(feature = "control")]
pub use functor::void;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
