//! Compose goals using combinators to build more complex goals
//!

use crate::core::goal::{DynGoal, Goal};
use crate::goals::primitive::{both, either, fail, succeed};

/// Creates a goal that succeeds if all of `goals` succeed.
///
/// The empty conjunction succeeds.
pub fn conj_all(goals: impl IntoIterator<Item = DynGoal>) -> DynGoal {
    let mut goals: Vec<DynGoal> = goals.into_iter().collect();
    match goals.pop() {
        None => DynGoal::new(succeed()),
        Some(last) => goals
            .into_iter()
            .rev()
            .fold(last, |rest, g| DynGoal::new(both(g, rest))),
    }
}

/// Creates a goal that succeeds if any of `goals` succeeds.
///
/// The empty disjunction fails.
pub fn disj_all(goals: impl IntoIterator<Item = DynGoal>) -> DynGoal {
    let mut goals: Vec<DynGoal> = goals.into_iter().collect();
    match goals.pop() {
        None => DynGoal::new(fail()),
        Some(last) => goals
            .into_iter()
            .rev()
            .fold(last, |rest, g| DynGoal::new(either(g, rest))),
    }
}

/// Creates a goal that succeeds if `goalfn` succeeds for every item.
pub fn everyg<T, G: Goal>(goalfn: impl Fn(T) -> G, items: impl IntoIterator<Item = T>) -> DynGoal {
    conj_all(items.into_iter().map(|item| DynGoal::new(goalfn(item))))
}

/// Creates a goal that succeeds if `goalfn` succeeds for any item.
pub fn anyg<T, G: Goal>(goalfn: impl Fn(T) -> G, items: impl IntoIterator<Item = T>) -> DynGoal {
    disj_all(items.into_iter().map(|item| DynGoal::new(goalfn(item))))
}
