//! Projections over sequences of `Either`.
//!
//! [`EitherIteratorExt::rights`] and [`EitherIteratorExt::lefts`] lazily
//! keep one side of each element, skipping the opposite side and the
//! `None` state. The adapters are `Clone` whenever the source iterator is,
//! so a projection can be restarted from a saved copy.
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::{Either, EitherIteratorExt};
//!
//! let values: Vec<Either<&str, i32>> = vec![
//!     Either::right(1),
//!     Either::left("skip"),
//!     Either::None,
//!     Either::right(2),
//! ];
//!
//! let rights: Vec<i32> = values.iter().cloned().rights().collect();
//! assert_eq!(rights, vec![1, 2]);
//!
//! let lefts: Vec<&str> = values.into_iter().lefts().collect();
//! assert_eq!(lefts, vec!["skip"]);
//! ```

use std::iter::FusedIterator;

use super::either::Either;

/// Iterator over the right payloads of a sequence of `Either`.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Rights<I> {
    source: I,
}

/// Iterator over the left payloads of a sequence of `Either`.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Lefts<I> {
    source: I,
}

impl<I, L, R> Iterator for Rights<I>
where
    I: Iterator<Item = Either<L, R>>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.source.find_map(Either::right_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, L, R> Iterator for Lefts<I>
where
    I: Iterator<Item = Either<L, R>>,
{
    type Item = L;

    fn next(&mut self) -> Option<L> {
        self.source.find_map(Either::left_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, L, R> FusedIterator for Rights<I> where I: FusedIterator<Item = Either<L, R>> {}

impl<I, L, R> FusedIterator for Lefts<I> where I: FusedIterator<Item = Either<L, R>> {}

/// Extension methods for iterators of `Either`.
pub trait EitherIteratorExt<L, R>: Iterator<Item = Either<L, R>> + Sized {
    /// Keeps only the right payloads.
    fn rights(self) -> Rights<Self> {
        Rights { source: self }
    }

    /// Keeps only the left payloads.
    fn lefts(self) -> Lefts<Self> {
        Lefts { source: self }
    }
}

impl<I, L, R> EitherIteratorExt<L, R> for I where I: Iterator<Item = Either<L, R>> {}

/// Keeps only the right payloads of `eithers`.
///
/// # Examples
///
/// ```rust
/// use resultant::control::{rights, Either};
///
/// let values = [Either::<&str, i32>::right(3), Either::left("e")];
/// assert_eq!(rights(values).collect::<Vec<_>>(), vec![3]);
/// ```
pub fn rights<I, L, R>(eithers: I) -> Rights<I::IntoIter>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers.into_iter().rights()
}

/// Keeps only the left payloads of `eithers`.
pub fn lefts<I, L, R>(eithers: I) -> Lefts<I::IntoIter>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers.into_iter().lefts()
}
