pub use crate::{
    config::SearchConfig,
    core::{
        goal::{DynGoal, Goal, Solutions},
        logic_variable::Var,
        state::State,
        stream::Stream,
        substitution::Substitution,
        term::{Atomic, Compound, Constant, Shape, Term},
    },
    error::{Error, Result},
    goals::{combinators::*, list::*, primitive::*},
};
