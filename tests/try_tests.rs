#![cfg(feature = "effect")]
//! Unit tests for Try.
//!
//! - Resolution of successful, failing and panicking computations
//! - Bind, map and their short-circuit behaviour
//! - Regardless, `and_also`, `bind_if` and append
//! - Either helpers and conversions

use resultant::control::{Either, Unit};
use resultant::effect::{Try, TryResult};
use resultant::error::{Exception, FunctionalError};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const OK_VAL: &str = "ok";
const FAIL_VAL: &str = "fail";

fn succeeding() -> Try<&'static str> {
    Try::of(|| OK_VAL)
}

fn failing() -> Try<&'static str> {
    Try::new(|| Err(Exception::new(FAIL_VAL)))
}

fn panicking() -> Try<&'static str> {
    Try::of(|| panic!("{}", FAIL_VAL))
}

fn message_or_value(attempt: &Try<&'static str>) -> String {
    attempt.fold(|value| value.to_string(), |exception| exception.message())
}

fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    (Arc::clone(&count), count)
}

// =============================================================================
// Resolution
// =============================================================================

#[rstest]
fn no_failure_returns_value() {
    assert_eq!(message_or_value(&succeeding()), OK_VAL);
}

#[rstest]
#[case(failing())]
#[case(panicking())]
fn failure_returns_exception_message(#[case] attempt: Try<&'static str>) {
    assert_eq!(message_or_value(&attempt), FAIL_VAL);
}

#[rstest]
fn unit_action_returns_unit() {
    let (count, observed) = counter();
    let action = Try::action(move || {
        count.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(action.resolve(), TryResult::Value(Unit));
    assert_eq!(observed.load(Ordering::SeqCst), 1);
}

#[rstest]
fn failing_unit_action_returns_exception() {
    let action = Try::action(|| panic!("{}", FAIL_VAL));
    assert_eq!(action.resolve().failure().map(|e| e.message()), Some(FAIL_VAL.to_string()));
}

#[rstest]
fn question_mark_converts_std_errors() {
    let parsed: Try<i32> = Try::new(|| Ok("x".parse::<i32>()?));
    let exception = parsed.resolve().failure().unwrap();
    assert!(exception.downcast_ref::<std::num::ParseIntError>().is_some());
}

#[rstest]
fn pure_and_default_value() {
    assert_eq!(Try::pure(3).resolve(), TryResult::Value(3));
    assert_eq!(Try::<String>::default_value().resolve(), TryResult::Value(String::new()));
}

#[rstest]
fn resolution_reruns_side_effects() {
    let (count, observed) = counter();
    let attempt = Try::of(move || count.fetch_add(1, Ordering::SeqCst) + 1);
    assert_eq!(attempt.resolve(), TryResult::Value(1));
    assert_eq!(attempt.resolve(), TryResult::Value(2));
    assert_eq!(observed.load(Ordering::SeqCst), 2);
}

// =============================================================================
// Bind and Map
// =============================================================================

#[rstest]
fn binding_success_with_success_runs_both() {
    let chained = succeeding().bind(|value| Try::of(move || format!("{value}{value}")));
    assert_eq!(chained.resolve(), TryResult::Value("okok".to_string()));
}

#[rstest]
fn binding_failure_keeps_first_exception_and_skips_binder() {
    let (count, observed) = counter();
    let chained = failing().bind(move |_| {
        count.fetch_add(1, Ordering::SeqCst);
        succeeding()
    });
    assert_eq!(message_or_value(&chained), FAIL_VAL);
    assert_eq!(observed.load(Ordering::SeqCst), 0);
}

#[rstest]
fn binding_success_with_failure_returns_binder_exception() {
    let chained = succeeding().bind(|_| failing());
    assert_eq!(message_or_value(&chained), FAIL_VAL);
}

#[rstest]
fn panic_inside_binder_is_captured() {
    let chained: Try<i32> = Try::pure(1).bind(|_| panic!("binder panicked"));
    assert_eq!(
        chained.resolve().failure().map(|e| e.message()),
        Some("binder panicked".to_string())
    );
}

#[rstest]
fn map_and_bind_result() {
    let mapped = Try::pure(20).map(|x| x + 1);
    assert_eq!(mapped.resolve(), TryResult::Value(21));

    let exception = Exception::new("rejected");
    let rejected = exception.clone();
    let bound = Try::pure(20).bind_result(move |_| TryResult::<i32>::Failure(rejected.clone()));
    assert_eq!(bound.resolve(), TryResult::Failure(exception));
}

#[rstest]
fn failure_identity_is_preserved_through_chain() {
    let exception = Exception::new("original");
    let chained = Try::<i32>::fail(exception.clone())
        .map(|x| x + 1)
        .bind(|x| Try::pure(x * 2));
    assert_eq!(chained.resolve().failure(), Some(exception));
}

// =============================================================================
// Regardless, and_also, bind_if, append
// =============================================================================

#[rstest]
#[case(succeeding(), succeeding(), OK_VAL)]
#[case(succeeding(), Try::fail_with("binder"), "binder")]
#[case(Try::fail_with("self"), Try::fail_with("binder"), "self")]
#[case(Try::fail_with("self"), succeeding(), "self")]
fn regardless_precedence(
    #[case] attempt: Try<&'static str>,
    #[case] binder: Try<&'static str>,
    #[case] expected: &str,
) {
    assert_eq!(message_or_value(&attempt.regardless(binder)), expected);
}

#[rstest]
fn regardless_runs_binder_after_failure() {
    let (count, observed) = counter();
    let cleanup = Try::action(move || {
        count.fetch_add(1, Ordering::SeqCst);
    });
    failing().regardless(cleanup).resolve();
    assert_eq!(observed.load(Ordering::SeqCst), 1);
}

#[rstest]
fn and_also_keeps_value_and_propagates_step_failure() {
    let (count, observed) = counter();
    let step = Try::action(move || {
        count.fetch_add(1, Ordering::SeqCst);
    });
    assert_eq!(succeeding().and_also(step).resolve(), TryResult::Value(OK_VAL));
    assert_eq!(observed.load(Ordering::SeqCst), 1);

    let failed_step: Try<Unit> = Try::fail_with("step");
    assert_eq!(message_or_value(&succeeding().and_also(failed_step)), "step");
}

#[rstest]
#[case(5, 50)]
#[case(-5, -4)]
fn bind_if_falls_back_when_predicate_rejects(#[case] input: i32, #[case] expected: i32) {
    let attempt = Try::pure(input).bind_if(|x| Try::pure(x * 10), |bound| *bound > 0, |x| x + 1);
    assert_eq!(attempt.resolve(), TryResult::Value(expected));
}

#[rstest]
fn append_sequences_unless_first_fails() {
    assert_eq!(succeeding().append(Try::pure("next")).resolve(), TryResult::Value("next"));
    assert_eq!(message_or_value(&failing().append(Try::pure("next"))), FAIL_VAL);
}

#[rstest]
fn fold_with_post_processes() {
    let length = succeeding().fold_with(|value| value.to_string(), |e| e.message(), |text| text.len());
    assert_eq!(length, 2);
}

// =============================================================================
// Either interplay
// =============================================================================

#[rstest]
fn to_either_maps_value_right_and_failure_left() {
    assert_eq!(succeeding().to_either(), Either::Right(OK_VAL));
    let either = failing().to_either();
    assert_eq!(either.left_value().map(|e| e.message()), Some(FAIL_VAL.to_string()));
}

#[rstest]
fn either_helpers() {
    assert_eq!(Either::<Exception, i32>::ok(1), Either::Right(1));
    let error = Either::<Exception, i32>::error("bad");
    assert_eq!(error.left_value().map(|e| e.message()), Some("bad".to_string()));
    let exception = Exception::new("kept");
    assert_eq!(
        Either::<Exception, i32>::from_exception(exception.clone()),
        Either::Left(exception)
    );
}

#[rstest]
fn bind_try_from_either() {
    let from_right = Either::<Exception, i32>::ok(2).bind_try(|x| Try::pure(x * 2));
    assert_eq!(from_right.resolve(), TryResult::Value(4));

    let from_left = Either::<Exception, i32>::error("left").bind_try(|x| Try::pure(x * 2));
    assert_eq!(message_or_value(&from_left.map(|_| "unused")), "left");

    let from_none = Either::<Exception, i32>::None.bind_try(Try::pure);
    let exception = from_none.resolve().failure().unwrap();
    assert!(matches!(
        exception.downcast_ref::<FunctionalError>(),
        Some(FunctionalError::InvalidState { .. })
    ));
}
