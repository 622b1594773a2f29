//! Unit - the zero-information value.
//!
//! `Unit` stands in for "no meaningful result" wherever a side-effecting
//! step must still produce a value, such as `Try::action` or
//! `State::effect`.
//!
//! # Examples
//!
//! ```rust
//! use resultant::control::{Unit, UNIT};
//!
//! assert_eq!(Unit, UNIT);
//! assert_eq!(UNIT.to_string(), "()");
//! ```

use std::fmt;

/// The single value carrying no information.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Unit;

/// The `Unit` value.
pub const UNIT: Unit = Unit;

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
