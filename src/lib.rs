//! A small relational programming kernel in the miniKanren tradition.
//!
//! Programs are built from goals. A goal takes a search [`State`](crate::core::state::State)
//! and produces a lazy [`Stream`](crate::core::stream::Stream) of states in which it
//! holds. Unification binds logic variables in a persistent
//! [`Substitution`](crate::core::substitution::Substitution); disjunctions interleave
//! their alternatives, so a branch with infinitely many answers does not starve
//! its siblings.
//!
//! ```
//! use kanren_kernel::prelude::*;
//! use kanren_kernel::{list, run};
//!
//! let answers = run!(*, q, membero(q, list![1, 2, 3]));
//! assert_eq!(answers, vec![Term::new(1), Term::new(2), Term::new(3)]);
//! ```

#[macro_use]
pub mod macros;
pub mod config;
pub mod core;
pub mod error;
pub mod goals;
pub mod prelude;

#[cfg(test)]
mod testing;

#[doc(hidden)]
pub use tracing;

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    fn walk(v: Var, s: &Substitution) -> Term {
        s.walk(&Term::var(v))
    }

    #[test]
    fn walking_follows_variable_chains() {
        let v = Var::named("v");
        let w = Var::named("w");
        let x = Var::named("x");
        let y = Var::named("y");
        let z = Var::named("z");

        assert_eq!(walk(z, &substitution! {z: "a", x: w, y: z}), "a");
        assert_eq!(walk(y, &substitution! {z: "a", x: w, y: z}), "a");
        assert_eq!(walk(x, &substitution! {z: "a", x: w, y: z}), w);
        assert_eq!(walk(x, &substitution! {x: y, v: x, w: x}), y);
        assert_eq!(walk(v, &substitution! {x: y, v: x, w: x}), y);
        assert_eq!(walk(w, &substitution! {x: y, v: x, w: x}), y);
    }

    #[test]
    fn walking_substitutes_inside_lists() {
        let w = Var::named("w");
        let x = Var::named("x");
        let y = Var::named("y");
        let z = Var::named("z");

        assert_eq!(
            walk(w, &substitution! {x: "b", z: y, w: list![x, "e", z]}),
            list!["b", "e", y]
        );
    }

    #[test]
    fn reification_leaves_free_variables_unassigned() {
        let u = Var::named("u");
        let v = Var::named("v");
        let w = Var::named("w");
        let x = Var::named("x");
        let y = Var::named("y");
        let z = Var::named("z");

        let s = substitution! {
            x: list![u, w, y, z, list!["ice", z]],
            y: "corn",
            w: list![v, u],
        };
        assert_eq!(
            s.reify_term(&x.into()),
            list![
                Term::Unassigned,
                list![Term::Unassigned, Term::Unassigned],
                "corn",
                Term::Unassigned,
                list!["ice", Term::Unassigned]
            ]
        );
    }

    #[test]
    fn disj_macro_keeps_order_of_finite_alternatives() {
        let x = Var::named("x");
        assert_eq!(
            disj!(eq("virgin", x); eq("olive", x); eq("oil", x)).run(5),
            vec![
                substitution! {x: "virgin"},
                substitution! {x: "olive"},
                substitution! {x: "oil"},
            ]
        );
    }

    #[test]
    fn conj_macro_requires_every_goal() {
        let x = Var::named("x");
        let y = Var::named("y");
        assert_eq!(
            conj!(eq(x, 1), eq(y, x), eq(1, y)).run(5),
            vec![substitution! {x: 1, y: 1}]
        );
        assert!(conj!(eq(x, 1), eq(x, 2)).run(5).is_empty());
    }

    #[test]
    fn relations_defined_with_defrel() {
        defrel! {
            teacup(t) {
                disj!(eq("tea", t.clone()); eq("cup", t))
            }
        }

        let x = Var::named("x");
        assert_eq!(
            teacup(x).run(5),
            vec![substitution! {x: "tea"}, substitution! {x: "cup"}]
        );
    }

    #[test]
    fn relation_arguments_are_cloned_into_fresh_blocks() {
        defrel! {
            firsto(l, a) {
                fresh!{ (d),
                    eq(Term::cons(a.clone(), d), l.clone())
                }
            }
        }

        assert_eq!(run!(*, q, firsto(list![1, 2], q)), vec![Term::new(1)]);
    }

    #[test]
    fn traced_relations_behave_like_plain_ones() {
        defrel! {
            trace teacup(t) {
                disj!(eq("tea", t.clone()); eq("cup", t))
            }
        }

        assert_eq!(run!(*, q, teacup(q)), vec![Term::new("tea"), Term::new("cup")]);
    }

    #[test]
    fn fresh_macro_introduces_variables() {
        let solutions = fresh!((x, y), eq(x, y)).run(1);
        assert_eq!(format!("{:?}", solutions), "[{_.0: _.1}]");
    }

    #[test]
    fn run_macro_reifies_query_variables() {
        assert_eq!(run!(1, x,), vec![Term::Unassigned]);
        assert_eq!(run!(1, x, eq(x, 42)), vec![Term::new(42)]);
        assert_eq!(
            run!(1, (x, y),),
            vec![list![Term::Unassigned, Term::Unassigned]]
        );
        assert_eq!(
            run!(1, (x, y), eq(x, 42)),
            vec![list![42, Term::Unassigned]]
        );
    }

    #[test]
    fn run_macro_limits_answers() {
        assert_eq!(run!(5, q, eq(q, "onion")), vec![Term::new("onion")]);
        assert_eq!(
            run!(5, q, eq(q, "onion"), alwayso(),),
            vec![Term::new("onion"); 5]
        );
    }

    #[test]
    fn conso_from_every_side() {
        assert_eq!(run!(*, x, conso(1, 2, x)), vec![Term::cons(1, 2)]);
        assert_eq!(run!(*, x, conso(1, x, list![1, 2])), vec![list![2]]);
        assert_eq!(run!(*, x, conso(x, list![2], list![1, 2])), vec![Term::new(1)]);
        assert!(run!(*, x, conso(x, x, list![1, 2])).is_empty());
        assert_eq!(run!(*, x, conso(x, x, Term::cons(3, 3))), vec![Term::new(3)]);
    }
}
