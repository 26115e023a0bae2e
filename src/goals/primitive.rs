use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use std::sync::Arc;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal {
    let u = u.into();
    let v = v.into();
    move |s: State| match s.unify(&u, &v) {
        Some(s) => Stream::singleton(s),
        None => Stream::empty(),
    }
}

pub use self::eq as unify_goal;

/// Creates a goal that succeeds exactly once without binding anything.
pub fn succeed() -> impl Goal {
    |s: State| Stream::singleton(s)
}

/// Creates a goal that never succeeds.
pub fn fail() -> impl Goal {
    |_: State| Stream::empty()
}

/// Creates a goal that succeeds if either of its subgoals succeeds.
///
/// Both subgoals see the same state; their streams are interleaved.
pub fn either(g1: impl Goal, g2: impl Goal) -> impl Goal {
    move |s: State| g1.apply(s.clone()).merge(g2.apply(s))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
///
/// Every solution of `g1` is extended by every solution of `g2`.
pub fn both(g1: impl Goal, g2: impl Goal) -> impl Goal {
    let g2 = Arc::new(g2);
    move |s: State| {
        let g2 = g2.clone();
        g1.apply(s).bind(move |s| g2.apply(s))
    }
}

/// Creates a goal that introduces a variable no other part of the search
/// uses and runs the goal `builder` makes from it.
pub fn fresh<G: Goal>(builder: impl 'static + Fn(Var) -> G) -> impl Goal {
    move |s: State| {
        let (var, s) = s.fresh_var();
        builder(var).apply(s)
    }
}

/// Creates a goal that suspends before running `g`.
///
/// Recursive relations must pass through a suspension, otherwise the search
/// recurses without yielding.
pub fn delayed(g: impl Goal) -> impl Goal {
    let g = Arc::new(g);
    move |s: State| {
        let g = g.clone();
        Stream::suspension(move || g.apply(s))
    }
}

/// Creates a goal that never succeeds and never finishes.
pub fn nevero() -> impl Goal {
    |s: State| Stream::suspension(move || nevero().apply(s))
}

/// Creates a goal that succeeds an unbounded number of times.
pub fn alwayso() -> impl Goal {
    |s: State| Stream::suspension(move || either(succeed(), alwayso()).apply(s))
}
