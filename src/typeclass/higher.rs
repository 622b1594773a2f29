//! Higher-kinded type emulation.
//!
//! Rust has no higher-kinded types. A `TypeConstructor` names its element
//! type through `Inner` and can be rebuilt around another element type
//! through the generic associated type `WithType<B>`.
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::Maybe;
//! use resultant::typeclass::TypeConstructor;
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//! assert_inner::<Maybe<i32>>();
//! ```

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A type that is parameterized over one element type.
pub trait TypeConstructor {
    /// The element type.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(feature = "control")]
impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// `Either` is a constructor over its right side; the left type is fixed.
#[cfg(feature = "control")]
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}
