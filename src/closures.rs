// Copyright 2025 Cowboy AI, LLC.

//! Closure and function-pointer material: declaration forms, method
//! references, the `Fn` family as functional interfaces, lazy suppliers, and
//! composition.

use crate::domain::User;
use crate::errors::{PrimerError, PrimerResult};

/// Apply a caller-supplied binary operation to two operands.
///
/// This is the single-method functional-interface seam: any closure, fn item,
/// or method path with the right shape slots in.
pub fn calculate<T>(a: T, b: T, op: impl Fn(T, T) -> T) -> T {
    op(a, b)
}

/// Addition as a plain fn item, usable wherever `calculate` wants an operation.
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// A pair of operands bundled with the operation applied to them late.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandPair {
    /// Left operand
    pub val1: i32,
    /// Right operand
    pub val2: i32,
}

impl OperandPair {
    /// Bundle two operands
    pub fn new(val1: i32, val2: i32) -> Self {
        Self { val1, val2 }
    }

    /// Apply an operation to the bundled operands
    pub fn apply(&self, op: impl Fn(i32, i32) -> i32) -> i32 {
        op(self.val1, self.val2)
    }
}

/// Parse each string and take its magnitude, written with method paths
/// (`i32::abs`) where an explicit closure would be noise.
pub fn parsed_magnitudes(raw: &[&str]) -> PrimerResult<Vec<i32>> {
    let parsed: Vec<i32> = raw
        .iter()
        .map(|s| s.parse::<i32>())
        .collect::<Result<_, _>>()?;
    Ok(parsed.into_iter().map(i32::abs).collect())
}

/// Compose two functions left to right: `compose(f, g)(x) == g(f(x))`.
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |a| g(f(a))
}

/// Double a value, render it, and prefix it — built out of [`compose`].
pub fn labeled_double(n: i32) -> String {
    let double = |i: i32| i * 2;
    let render = compose(double, |i: i32| i.to_string());
    compose(render, |s: String| format!("value is {s}"))(n)
}

/// Chain two consumers: narrate each value, then append it to the sink.
pub fn narrate_and_append(values: &[i32], sink: &mut String) {
    for value in values {
        tracing::info!(value, "consumed");
        sink.push_str(&value.to_string());
    }
}

/// Conjoin two predicates.
pub fn both<T>(p: impl Fn(&T) -> bool, q: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |t| p(t) && q(t)
}

/// Keep a user only when present and named, otherwise fail — the predicate
/// conjunction guarding an extraction.
pub fn named_user(user: Option<User>) -> PrimerResult<User> {
    let has_name = both(
        |u: &User| u.name.is_some(),
        |u: &User| u.name.as_deref() != Some(""),
    );
    user.filter(has_name)
        .ok_or_else(|| PrimerError::missing("user with a name"))
}

/// Log at debug level, invoking the message supplier only when the level is
/// enabled. The supplier side stays free when debug logging is off.
pub fn debug_lazily(message: impl FnOnce() -> String) {
    if tracing::enabled!(tracing::Level::DEBUG) {
        tracing::debug!("{}", message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn declaration_forms() {
        // single expression
        let square = |i: i32| i * i;
        // block body needs an explicit return expression
        let cube = |i: i32| {
            let squared = i * i;
            squared * i
        };
        assert_eq!(square(3), 9);
        assert_eq!(cube(3), 27);

        // moved into another thread
        let greeting = String::from("worker thread is running");
        let handle = std::thread::spawn(move || greeting.len());
        assert_eq!(handle.join().unwrap(), 24);
    }

    #[test]
    fn operations_slot_in_as_closures_variables_or_paths() {
        let pair = OperandPair::new(3, 4);

        // inline closure: addition
        assert_eq!(pair.apply(|a, b| a + b), 7);

        // bound to a variable: subtraction
        let minus = |a: i32, b: i32| a - b;
        assert_eq!(pair.apply(minus), -1);

        // method path: larger of the two
        assert_eq!(pair.apply(i32::max), 4);

        // fn item through the free-function seam
        assert_eq!(calculate(3, 4, add), 7);
    }

    #[test]
    fn method_paths_replace_trivial_closures() {
        let magnitudes = parsed_magnitudes(&["111", "-222", "333"]).unwrap();
        assert_eq!(magnitudes, vec![111, 222, 333]);

        // the explicit-closure spelling does the same thing
        let explicit: Vec<usize> = ["a", "ab"].iter().map(|s| s.len()).collect();
        let by_path: Vec<usize> = ["a", "ab"].iter().copied().map(str::len).collect();
        assert_eq!(explicit, by_path);

        let err = parsed_magnitudes(&["111", "oops"]).unwrap_err();
        assert!(matches!(err, PrimerError::IntParse(_)));
    }

    #[test]
    fn composed_function_runs_left_to_right() {
        assert_eq!(labeled_double(5), "value is 10");

        let f = compose(|i: i32| i + 1, |i: i32| i * 10);
        assert_eq!(f(2), 30);
    }

    #[test]
    fn chained_consumer_feeds_the_sink() {
        let mut sink = String::new();
        narrate_and_append(&[1, 2, 3, 4], &mut sink);
        assert_eq!(sink, "1234");
    }

    #[test]
    fn predicate_conjunction_guards_extraction() {
        let user = User::new(1).name("Clark");
        let extracted = named_user(Some(user)).unwrap();
        assert_eq!(extracted.name.as_deref(), Some("Clark"));

        let anonymous = User::new(2);
        let err = named_user(Some(anonymous)).unwrap_err();
        assert_eq!(err.to_string(), "missing value: user with a name");
    }

    #[test]
    fn lazy_supplier_is_not_evaluated_when_debug_is_off() {
        // no subscriber is installed in unit tests, so DEBUG is disabled
        let evaluations = Cell::new(0);
        debug_lazily(|| {
            evaluations.set(evaluations.get() + 1);
            String::from("some debug messages")
        });
        assert_eq!(evaluations.get(), 0);
    }
}
