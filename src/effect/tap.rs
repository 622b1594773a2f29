//! Side effects on a value that is then passed through.
//!
//! [`tap`] runs each action on a borrowed value and returns the value.
//! `tap_async` does the same one step at a time, yielding to the scheduler
//! between steps and honouring a [`CancellationToken`].

use crate::control::Maybe;

#[cfg(feature = "async")]
use super::cancellation::CancellationToken;
#[cfg(feature = "async")]
use crate::error::FunctionalError;

/// Runs every action on `value`, in order, and returns `value`.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use resultant::effect::tap;
///
/// let log = RefCell::new(Vec::new());
/// let value = tap(3, &[&|x: &i32| log.borrow_mut().push(*x), &|x: &i32| log.borrow_mut().push(x * 2)]);
/// assert_eq!(value, 3);
/// assert_eq!(*log.borrow(), vec![3, 6]);
/// ```
pub fn tap<T>(value: T, actions: &[&dyn Fn(&T)]) -> T {
    for action in actions {
        action(&value);
    }
    value
}

/// Runs `action` on the payload of a `Maybe`, if any, and returns it.
pub fn tap_some<T, F>(maybe: Maybe<T>, action: F) -> Maybe<T>
where
    F: FnOnce(&T),
{
    maybe.if_some(action);
    maybe
}

/// Runs every action on `value`, one per scheduler turn, and returns `value`.
///
/// The token is checked before the first action and after every action.
///
/// # Errors
///
/// Returns [`FunctionalError::Cancelled`] as soon as the token is observed
/// cancelled; the remaining actions are skipped.
#[cfg(feature = "async")]
pub async fn tap_async<T>(
    value: T,
    token: &CancellationToken,
    actions: &[&(dyn Fn(&T) + Sync)],
) -> Result<T, FunctionalError> {
    let check = |completed: usize| {
        if token.is_cancelled() {
            tracing::debug!(completed, remaining = actions.len() - completed, "tap cancelled");
            Err(FunctionalError::Cancelled)
        } else {
            Ok(())
        }
    };
    check(0)?;
    for (index, action) in actions.iter().enumerate() {
        action(&value);
        check(index + 1)?;
        tokio::task::yield_now().await;
    }
    Ok(value)
}
