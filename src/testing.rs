use crate::core::goal::Goal;
use crate::core::term::Term;

/// Assert that a goal fails
pub fn fails(goal: impl Goal) {
    let result = run!(1, q, goal);
    assert!(result.is_empty());
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: impl Goal) {
    let result = run!(1, q, goal);
    assert!(!result.is_empty());
}

pub fn has_unique_solution(mut solutions: impl Iterator<Item = Term>, expected: impl Into<Term>) {
    assert_eq!(solutions.next(), Some(expected.into()));
    assert_eq!(solutions.next(), None);
}
