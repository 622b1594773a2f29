#![cfg(feature = "effect")]
//! Unit tests for State.
//!
//! - Construction and execution (run, eval, exec)
//! - Chaining (bind, map, select_many, then)
//! - State access (get, set, modify, gets, effect)

use resultant::control::Unit;
use resultant::effect::State;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

fn push(value: i32) -> State<Vec<i32>, i32> {
    State::new(move |mut stack: Vec<i32>| {
        stack.push(value);
        (value, stack)
    })
}

fn pop() -> State<Vec<i32>, i32> {
    State::new(|mut stack: Vec<i32>| {
        let first = stack.remove(0);
        (first, stack)
    })
}

// =============================================================================
// Construction and Execution
// =============================================================================

#[rstest]
fn new_and_run_basic() {
    let state: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    assert_eq!(state.run(10), (20, 11));
    assert_eq!(state.eval(10), 20);
    assert_eq!(state.exec(10), 11);
}

#[rstest]
fn nothing_runs_until_run_is_called() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let state: State<i32, Unit> = State::effect(move || counter.set(counter.get() + 1));
    let chained = state.then(State::<i32, i32>::get());
    assert_eq!(calls.get(), 0);
    assert_eq!(chained.run(4), (4, 4));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn pure_with_state_and_default_value() {
    assert_eq!(State::<i32, &str>::pure("value").run(1), ("value", 1));
    assert_eq!(State::with_state("value", |s: i32| s * 3).run(2), ("value", 6));
    assert_eq!(State::<i32, String>::default_value().run(5), (String::new(), 5));
    assert_eq!(State::<i32, Unit>::unit().run(5), (Unit, 5));
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn state_should_be_updatable() {
    let query = push(1)
        .select_many(|_| push(3), |_, second| second)
        .select_many(|_| pop(), |_, popped| popped)
        .select_many(|_| push(2), |_, pushed| pushed);

    let query2 = query.select_many(|_| push(5), |_, pushed| pushed);

    let (value, stack) = query2.run(Vec::new());
    assert_eq!(stack, vec![3, 2, 5]);
    assert_eq!(value, 5);
}

#[rstest]
fn state_should_be_chainable() {
    let initial = State::<Vec<i32>, i32>::default_value()
        .bind(|value| {
            State::new(move |mut stack: Vec<i32>| {
                stack.push(1);
                (value + 1, stack)
            })
        })
        .bind(|value| {
            State::new(move |mut stack: Vec<i32>| {
                stack.push(2);
                (value + 2, stack)
            })
        });

    let (value, stack) = initial.run(Vec::new());
    assert_eq!(stack, vec![1, 2]);
    assert_eq!(value, 3);
}

#[rstest]
fn map_select_and_fmap_agree() {
    let base = || State::<i32, i32>::get();
    assert_eq!(base().map(|x| x + 1).run(1), base().select(|x| x + 1).run(1));
    assert_eq!(base().fmap(|x| x + 1).run(1), (2, 1));
}

#[rstest]
fn map2_and_product_thread_state_in_order() {
    let tick = || State::new(|s: i32| (s, s + 1));
    assert_eq!(tick().map2(tick(), |a, b| a * 10 + b).run(1), (12, 3));
    assert_eq!(tick().product(tick()).run(0), ((0, 1), 2));
}

#[rstest]
fn flat_map_continuation_sees_intermediate_state() {
    let state = State::<i32, Unit>::modify(|s| s + 5).flat_map(|_| State::get());
    assert_eq!(state.run(1), (6, 6));
}

// =============================================================================
// State Access
// =============================================================================

#[rstest]
fn set_returns_previous_state() {
    let state = State::set(10).then(State::get());
    assert_eq!(state.run(3), (10, 10));
    assert_eq!(State::set(10).run(3), (3, 10));
}

#[rstest]
fn modify_yields_unit() {
    assert_eq!(State::modify(|s: i32| s * 2).run(4), (Unit, 8));
}

#[rstest]
fn gets_projects_without_changing_state() {
    let state = State::gets(|stack: &Vec<i32>| stack.len());
    assert_eq!(state.run(vec![1, 2, 3]), (3, vec![1, 2, 3]));
}

#[rstest]
fn effect_runs_once_per_run() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let state: State<i32, Unit> = State::effect(move || counter.set(counter.get() + 1));
    state.run(0);
    state.run(0);
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn display() {
    assert_eq!(State::<i32, Unit>::unit().to_string(), "<State>");
}
