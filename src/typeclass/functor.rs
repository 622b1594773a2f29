//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::Maybe;
//! use resultant::typeclass::Functor;
//!
//! let transformed = Maybe::some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::some("5".to_string()));
//! ```

use super::higher::TypeConstructor;

#[cfg(feature = "control")]
use crate::control::{Either, Maybe, Unit};

/// A type class for types that can have a function mapped over their contents.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the inner value, keeping the structure.
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(move |_| value)
    }
}

#[cfg(feature = "control")]
impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B + 'static,
        B: 'static,
    {
        self.as_ref().map(function)
    }
}

/// Maps the right side; `Left` and `None` pass through.
///
/// `L: Clone` is required by `fmap_ref`, which copies a borrowed `Left`.
#[cfg(feature = "control")]
impl<L, R> Functor for Either<L, R>
where
    L: Clone,
{
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Right(value) => Either::Right(function(value)),
            Self::Left(value) => Either::Left(value.clone()),
            Self::None => Either::None,
        }
    }
}

/// Discards the inner value of a functor.
///
/// # Examples
///
/// ```rust
/// use resultant::control::{Maybe, Unit};
/// use resultant::typeclass::void;
///
/// assert_eq!(void(Maybe::some(3)), Maybe::some(Unit));
/// ```
#[cfg(feature = "control")]
pub fn void<F>(functor: F) -> F::WithType<Unit>
where
    F: Functor,
{
    functor.replace(Unit)
}
