//! State - computations that thread a state value.
//!
//! A `State<S, A>` encapsulates a function `S -> (A, S)`, where `S` is the
//! state type and `A` is the value type. Running it with an initial state
//! produces the value and the final state. Nothing happens until
//! [`State::run`] is called, and running the same `State` twice with the
//! same initial state produces the same pair (as long as the functions
//! inside are pure).
//!
//! # Laws
//!
//! ## Monad Laws
//!
//! - Left Identity: `State::pure(a).bind(f) == f(a)`
//! - Right Identity: `m.bind(State::pure) == m`
//! - Associativity: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! ## State Laws
//!
//! - Get Set: `get().bind(set)` leaves the state unchanged
//! - Set Get: `set(s).then(get())` returns `s`
//! - Modify Composition: `modify(f).then(modify(g)) == modify(|s| g(f(s)))`
//!
//! # Examples
//!
//! A stack threaded through pushes and pops:
//!
//! ```rust
//! use resultant::control::Unit;
//! use resultant::effect::State;
//!
//! fn push(value: i32) -> State<Vec<i32>, Unit> {
//!     State::modify(move |mut stack: Vec<i32>| {
//!         stack.insert(0, value);
//!         stack
//!     })
//! }
//!
//! fn pop() -> State<Vec<i32>, i32> {
//!     State::new(|mut stack: Vec<i32>| {
//!         let top = stack.remove(0);
//!         (top, stack)
//!     })
//! }
//!
//! let program = push(3).then(pop()).then(push(5));
//! let (_, stack) = program.run(vec![1, 2]);
//! assert_eq!(stack, vec![5, 1, 2]);
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

use crate::control::Unit;

/// A computation that threads a state of type `S` and produces an `A`.
///
/// # Type Parameters
///
/// - `S`: The state type.
/// - `A`: The value type.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a `State` from a transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::effect::State;
    ///
    /// let state: State<i32, String> = State::new(|s: i32| (s.to_string(), s + 1));
    /// assert_eq!(state.run(41), ("41".to_string(), 42));
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation, returning the value and the final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.run_function)(initial_state)
    }

    /// Runs the computation and returns only the value.
    pub fn eval(&self, initial_state: S) -> A {
        let (result, _) = self.run(initial_state);
        result
    }

    /// Runs the computation and returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        let (_, final_state) = self.run(initial_state);
        final_state
    }

    /// Creates a `State` that yields `value` and leaves the state unchanged.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Creates a `State` that yields `value` and transforms the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::effect::State;
    ///
    /// let state = State::with_state("tick", |count: u32| count + 1);
    /// assert_eq!(state.run(0), ("tick", 1));
    /// ```
    pub fn with_state<F>(value: A, transition: F) -> Self
    where
        A: Clone,
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| (value.clone(), transition(state)))
    }

    /// Creates a `State` that yields `A::default()` and leaves the state unchanged.
    #[must_use]
    pub fn default_value() -> Self
    where
        A: Default,
    {
        Self::new(|state| (A::default(), state))
    }

    /// Creates a `State` that projects a value out of the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let result = projection(&state);
            (result, state)
        })
    }

    /// Transforms the value, leaving the state threading unchanged.
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, new_state) = (original_function)(state);
            (function(result), new_state)
        })
    }

    /// Alias for [`State::map`].
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }

    /// Alias for [`State::map`].
    pub fn select<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }

    /// Chains a computation that depends on the value.
    ///
    /// The continuation runs on the intermediate state.
    pub fn bind<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        State::new(move |state| {
            let (result, intermediate_state) = (original_function)(state);
            let next_state = function(result);
            next_state.run(intermediate_state)
        })
    }

    /// Alias for [`State::bind`].
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.bind(function)
    }

    /// Binds and then combines the two values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::effect::State;
    ///
    /// let state = State::<i32, i32>::get()
    ///     .select_many(|x| State::with_state(x * 10, |s| s + 1), |x, y| x + y);
    /// assert_eq!(state.run(2), (22, 3));
    /// ```
    pub fn select_many<B, C, F, G>(self, selector: F, result_selector: G) -> State<S, C>
    where
        A: Clone,
        F: Fn(A) -> State<S, B> + 'static,
        G: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let result_selector = Rc::new(result_selector);
        self.bind(move |first| {
            let result_selector = Rc::clone(&result_selector);
            let kept = first.clone();
            selector(first).map(move |second| result_selector(kept.clone(), second))
        })
    }

    /// Runs `next` after this computation, discarding this value.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.bind(move |_| next.clone())
    }

    /// Runs both computations in sequence and combines their values.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let self_function = self.run_function;
        let other_function = other.run_function;
        State::new(move |state| {
            let (result_a, intermediate_state) = (self_function)(state);
            let (result_b, final_state) = (other_function)(intermediate_state);
            (function(result_a, result_b), final_state)
        })
    }

    /// Runs both computations in sequence and pairs their values.
    #[must_use]
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// State access
// =============================================================================

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Yields the current state as the value.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }

    /// Replaces the state, yielding the previous state as the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use resultant::effect::State;
    ///
    /// assert_eq!(State::set(9).run(1), (1, 9));
    /// ```
    pub fn set(new_state: S) -> Self {
        Self::new(move |previous| (previous, new_state.clone()))
    }
}

impl<S> State<S, Unit>
where
    S: 'static,
{
    /// Transforms the state, yielding `Unit`.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| (Unit, modifier(state)))
    }

    /// Runs a side effect once per run, yielding `Unit`.
    pub fn effect<F>(action: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self::new(move |state| {
            action();
            (Unit, state)
        })
    }

    /// Yields `Unit` and leaves the state unchanged.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(|state| (Unit, state))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

impl<S, A> std::fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<State>")
    }
}
