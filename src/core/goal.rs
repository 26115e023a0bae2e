use super::state::State;
use super::stream::Stream;
use super::substitution::Substitution;
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// A goal maps a search state to the stream of states in which it holds.
///
/// Any `Fn(State) -> Stream<State>` is a goal.
pub trait Goal: 'static {
    fn apply(&self, state: State) -> Stream<State>;

    /// Run the goal from the empty state.
    fn solve(&self) -> Solutions {
        self.solve_with(SearchConfig::default())
    }

    /// Run the goal from an empty state carrying `config`.
    fn solve_with(&self, config: SearchConfig) -> Solutions {
        Solutions::new(self.apply(State::with_config(config)), config.step_limit)
    }

    /// Collect at most `n` solutions.
    fn run(&self, n: usize) -> Vec<Substitution> {
        self.solve().take(n).collect()
    }
}

impl<F: 'static + Fn(State) -> Stream<State>> Goal for F {
    fn apply(&self, state: State) -> Stream<State> {
        self(state)
    }
}

/// Shared, type-erased goal.
#[derive(Clone)]
pub struct DynGoal(Arc<dyn Goal>);

impl DynGoal {
    pub fn new(goal: impl Goal) -> Self {
        DynGoal(Arc::new(goal))
    }
}

impl Goal for DynGoal {
    fn apply(&self, state: State) -> Stream<State> {
        self.0.apply(state)
    }
}

/// The substitutions of a stream of states, pulled one at a time.
pub struct Solutions {
    stream: Stream<State>,
    step_limit: Option<usize>,
    pulled: usize,
}

impl Solutions {
    pub fn new(stream: Stream<State>, step_limit: Option<usize>) -> Self {
        Solutions {
            stream,
            step_limit,
            pulled: 0,
        }
    }

    /// Pull the next solution.
    ///
    /// Fails with `StepLimitExceeded` if the configured number of
    /// suspensions was forced without reaching a solution. The search can be
    /// resumed by calling `try_next` again.
    pub fn try_next(&mut self) -> Result<Option<Substitution>> {
        let stream = std::mem::replace(&mut self.stream, Stream::Empty);
        let realized = match self.step_limit {
            None => stream.realize(),
            Some(limit) => match stream.realize_within(limit) {
                Ok(realized) => realized,
                Err(suspended) => {
                    self.stream = suspended;
                    return Err(Error::StepLimitExceeded { limit });
                }
            },
        };
        match realized {
            Stream::Mature(state, rest) => {
                self.stream = rest.into_inner();
                self.pulled += 1;
                debug!(solution = self.pulled, "pulled solution");
                Ok(Some(state.into_substitution()))
            }
            _ => Ok(None),
        }
    }
}

impl Iterator for Solutions {
    type Item = Substitution;

    /// Ends the sequence when the step limit is hit.
    fn next(&mut self) -> Option<Substitution> {
        match self.try_next() {
            Ok(next) => next,
            Err(err) => {
                warn!(%err, solutions = self.pulled, "abandoning search");
                self.stream = Stream::Empty;
                None
            }
        }
    }
}
