//! Applicative type class - lifting values and combining independent contexts.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::Maybe;
//! use resultant::typeclass::Applicative;
//!
//! let sum = Maybe::some(1).map2(Maybe::some(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::some(3));
//!
//! let missing = Maybe::some(1).map2(Maybe::<i32>::none(), |a, b| a + b);
//! assert_eq!(missing, Maybe::None);
//! ```

use super::functor::Functor;

#[cfg(feature = "control")]
use crate::control::{Either, Maybe};

/// A functor that can lift plain values and combine independent contexts.
pub trait Applicative: Functor {
    /// Lifts a value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three contexts with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two contexts.
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value of two contexts.
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value of two contexts.
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function held in the context to a value held in another.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

#[cfg(feature = "control")]
impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Maybe::Some(b), Maybe::Some(c)) => Maybe::Some(function(a, b, c)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}

/// The first `None` or `Left`, in argument order, short-circuits.
#[cfg(feature = "control")]
impl<L, R> Applicative for Either<L, R>
where
    L: Clone,
{
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        self.bind(|a| other.map(|b| function(a, b)))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Either<L, B>, third: Either<L, C>, function: F) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        self.bind(|a| second.bind(|b| third.map(|c| function(a, b, c))))
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
