use crate::config::SearchConfig;
use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use tracing::trace;

/// A point in the search: the bindings made so far and the counter that
/// names the next fresh variable.
///
/// States are never modified; every step produces a new state. Cloning is
/// cheap because the substitution is persistent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    substitution: Substitution,
    next_id: usize,
    config: SearchConfig,
}

impl State {
    /// Empty substitution, counter at zero, default configuration.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        State {
            config,
            ..Self::default()
        }
    }

    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    pub fn into_substitution(self) -> Substitution {
        self.substitution
    }

    pub fn next_id(&self) -> usize {
        self.next_id
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Hand out a variable that no earlier step of this search has used,
    /// together with the state that follows.
    pub fn fresh_var(self) -> (Var, State) {
        let var = Var::fresh(self.next_id);
        trace!(%var, "introduced fresh variable");
        let state = State {
            next_id: self.next_id + 1,
            ..self
        };
        (var, state)
    }

    pub fn with_substitution(&self, substitution: Substitution) -> State {
        State {
            substitution,
            next_id: self.next_id,
            config: self.config,
        }
    }

    /// Unify `u` and `v`, honouring the occurs-check setting.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<State> {
        let substitution = if self.config.occurs_check {
            self.substitution.unify_checked(u, v)?
        } else {
            self.substitution.unify(u, v)?
        };
        Some(self.with_substitution(substitution))
    }

    /// `term` with all bindings applied and free variables unassigned.
    pub fn reify(&self, term: &Term) -> Term {
        self.substitution.reify_term(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_starts_at_zero() {
        let state = State::empty();
        assert!(state.substitution().is_empty());
        assert_eq!(state.next_id(), 0);
    }

    #[test]
    fn fresh_vars_advance_the_counter() {
        let (a, state) = State::empty().fresh_var();
        let (b, state) = state.fresh_var();
        assert_ne!(a, b);
        assert_eq!(a.fresh_id(), Some(0));
        assert_eq!(b.fresh_id(), Some(1));
        assert_eq!(state.next_id(), 2);
    }

    #[test]
    fn unify_keeps_counter_and_config() {
        let config = SearchConfig::new().with_step_limit(3);
        let (x, state) = State::with_config(config).fresh_var();
        let state = state.unify(&x.into(), &Term::new(1)).unwrap();
        assert_eq!(state.next_id(), 1);
        assert_eq!(state.config(), &config);
        assert_eq!(state.reify(&x.into()), 1);
    }

    #[test]
    fn occurs_check_follows_config() {
        let x = Var::named("x");
        let cyclic = Term::cons(x, ());
        assert!(State::empty().unify(&x.into(), &cyclic).is_some());

        let checked = State::with_config(SearchConfig::new().with_occurs_check(true));
        assert!(checked.unify(&x.into(), &cyclic).is_none());
    }
}
