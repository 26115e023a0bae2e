//! Substitutions map variables to terms.
//!
//! A substitution is persistent: extending it returns a new substitution that
//! shares all unchanged bindings with its parent, so branches of a search can
//! keep their own copy for free.

use crate::core::logic_variable::Var;
use crate::core::term::{Compound, Term};
use rpds::{HashTrieMapSync, VectorSync};
use std::fmt::Formatter;
use tracing::trace;

/// Mapping of variables to terms.
#[derive(Clone)]
pub struct Substitution {
    bindings: HashTrieMapSync<Var, Term>,
    /// Keys in the order they were bound.
    order: VectorSync<Var>,
}

impl Default for Substitution {
    fn default() -> Self {
        Self::empty()
    }
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution {
            bindings: HashTrieMapSync::new_sync(),
            order: VectorSync::new_sync(),
        }
    }

    /// Get number of substituted variables
    pub fn len(&self) -> usize {
        self.bindings.size()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn contains(&self, var: &Var) -> bool {
        self.bindings.contains_key(var)
    }

    /// The term stored for `var`, without resolving it.
    pub fn get(&self, var: &Var) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Follow variable-to-variable bindings until reaching an unbound
    /// variable or a non-variable term. Compound children are left alone.
    pub fn resolve<'a>(&'a self, mut term: &'a Term) -> &'a Term {
        while let Term::Var(var) = term {
            match self.bindings.get(var) {
                Some(next) => term = next,
                None => break,
            }
        }
        term
    }

    /// Resolve `term` and, if it is a compound, every child in turn.
    ///
    /// The result contains only unbound variables. Walking a term that
    /// reaches a cyclic binding does not terminate.
    pub fn walk(&self, term: &Term) -> Term {
        enum Frame<'a> {
            Visit(&'a Term),
            Build(&'a Compound),
        }

        let mut work = vec![Frame::Visit(term)];
        let mut done: Vec<Term> = Vec::new();
        while let Some(frame) = work.pop() {
            match frame {
                Frame::Visit(t) => match self.resolve(t) {
                    Term::Compound(c) => {
                        work.push(Frame::Build(c));
                        work.extend(c.children().iter().rev().map(Frame::Visit));
                    }
                    resolved => done.push(resolved.clone()),
                },
                Frame::Build(c) => {
                    // the last `arity` results are this node's children
                    let children = done.split_off(done.len() - c.arity());
                    done.push(Term::Compound(Compound::new(c.shape(), children)));
                }
            }
        }
        done.pop().unwrap_or_else(|| term.clone())
    }

    /// Extend substitution with a variable => term mapping.
    ///
    /// `var` must not be bound yet. No cycle check is made; see
    /// `extend_checked`.
    pub fn extend(&self, var: Var, term: Term) -> Self {
        debug_assert!(!self.contains(&var), "{} is already bound", var);
        Substitution {
            bindings: self.bindings.insert(var, term),
            order: self.order.push_back(var),
        }
    }

    /// Like `extend`, but returns `None` if the binding would make `var`
    /// part of its own value.
    pub fn extend_checked(&self, var: Var, term: Term) -> Option<Self> {
        if self.occurs(&var, &term) {
            trace!(%var, %term, "occurs check rejected binding");
            None
        } else {
            Some(self.extend(var, term))
        }
    }

    /// Returns `true` if `var` appears in `term` under this substitution.
    pub fn occurs(&self, var: &Var, term: &Term) -> bool {
        let mut pending = vec![term];
        while let Some(t) = pending.pop() {
            match self.resolve(t) {
                Term::Var(v) if v == var => return true,
                Term::Compound(c) => pending.extend(c.children()),
                _ => {}
            }
        }
        false
    }

    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// Returns the extended substitution, or `None` if the terms cannot be
    /// made equal.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<Self> {
        self.unify_with(u, v, |s, var, term| Some(s.extend(var, term)))
    }

    /// Unification that refuses cyclic bindings.
    pub fn unify_checked(&self, u: &Term, v: &Term) -> Option<Self> {
        self.unify_with(u, v, Substitution::extend_checked)
    }

    fn unify_with(
        &self,
        u: &Term,
        v: &Term,
        extend: fn(&Substitution, Var, Term) -> Option<Substitution>,
    ) -> Option<Self> {
        let mut s = self.clone();
        // popped left to right, so later children see earlier bindings
        let mut pending = vec![(u.clone(), v.clone())];
        while let Some((u, v)) = pending.pop() {
            let u = s.resolve(&u).clone();
            let v = s.resolve(&v).clone();
            match (u, v) {
                (Term::Var(x), Term::Var(y)) if x == y => {}
                (Term::Var(x), v) => {
                    let v = s.walk(&v);
                    s = extend(&s, x, v)?;
                }
                (u, Term::Var(y)) => {
                    let u = s.walk(&u);
                    s = extend(&s, y, u)?;
                }
                (Term::Compound(a), Term::Compound(b)) if a.same_kind(&b) => {
                    if !a.ptr_eq(&b) {
                        pending.extend(
                            a.children()
                                .iter()
                                .cloned()
                                .zip(b.children().iter().cloned())
                                .rev(),
                        );
                    }
                }
                (u, v) if u == v => {}
                (u, v) => {
                    trace!(%u, %v, "unification failed");
                    return None;
                }
            }
        }
        Some(s)
    }

    /// Bind every still-free variable reachable from `term` to
    /// `Term::Unassigned`.
    pub fn reify(&self, term: &Term) -> Self {
        self.clone().reify_walked(&self.walk(term))
    }

    fn reify_walked(self, term: &Term) -> Self {
        let mut s = self;
        let mut pending = vec![term];
        while let Some(t) = pending.pop() {
            match t {
                // a variable can occur more than once in the same term
                Term::Var(var) if !s.contains(var) => s = s.extend(*var, Term::Unassigned),
                Term::Compound(c) => pending.extend(c.children().iter().rev()),
                _ => {}
            }
        }
        s
    }

    /// Reify the value of every bound variable, so that every variable
    /// reachable from any binding becomes a key.
    pub fn reify_all(&self) -> Self {
        self.order
            .iter()
            .fold(self.clone(), |s, var| s.reify(&Term::Var(*var)))
    }

    /// Replace all variables contained in `term` with their substituted
    /// values and free variables with `Term::Unassigned`.
    pub fn reify_term(&self, term: &Term) -> Term {
        self.reify(term).walk(term)
    }

    /// Bindings in insertion order, with each value fully walked.
    pub fn iter(&self) -> impl Iterator<Item = (&Var, Term)> + '_ {
        self.order.iter().filter_map(move |var| {
            self.bindings
                .get(var)
                .map(|term| (var, self.walk(term)))
        })
    }
}

impl PartialEq for Substitution {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl FromIterator<(Var, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Var, Term)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Substitution::empty(), |s, (var, term)| s.extend(var, term))
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self
            .order
            .iter()
            .filter_map(|var| self.bindings.get(var).map(|term| (var, term)));
        if let Some((var, term)) = iter.next() {
            write!(f, "{:?}: {:?}", var, term)?;
        }
        for (var, term) in iter {
            write!(f, ", {:?}: {:?}", var, term)?;
        }
        write!(f, "}}")
    }
}
