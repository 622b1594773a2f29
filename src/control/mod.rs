//! Pure sum types.
//!
//! This module provides the value-level building blocks:
//!
//! - [`Unit`]: the zero-information value
//! - [`Maybe`]: an optional value
//! - [`Either`]: a disjoint two-sided result with an inert `None` state
//! - [`match_first`]: total matching over a list of matchers
//!
//! None of these types catch panics or errors; they only encode absence
//! and duality that the caller constructs explicitly.
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::{Either, Maybe};
//!
//! let maybe = Maybe::some(20).map(|x| x + 1);
//! assert_eq!(maybe | 0, 21);
//!
//! let either: Either<String, i32> = Either::right(20);
//! let doubled = either.bind(|x| Either::right(x * 2));
//! assert_eq!(doubled, Either::Right(40));
//! ```

mod either;
mod either_iter;
mod matching;
mod maybe;
mod unit;

pub use either::Either;
pub use either_iter::{EitherIteratorExt, Lefts, Rights, lefts, rights};
pub use matching::{as_equal, match_first, not_equal};
pub use maybe::Maybe;
pub use unit::{UNIT, Unit};
