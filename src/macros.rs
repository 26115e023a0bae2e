//! Macros for embedding relational programs as DSL in Rust

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr) => { $g };
    ($g0:expr; $($g:expr);*) => { $crate::prelude::either($g0, $crate::disj!($($g);*)) }
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr) => { $g };
    ($g0:expr, $($g:expr),*) => { $crate::prelude::both($g0, $crate::conj!($($g),*)) }
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Every successful *line* contributes one or more values.
///
/// A *line* (separated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conde {
    ( $($($g:expr),*;)* ) => {
        $crate::disj!($($crate::conj!( $($g),*));*)
    }
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// Each variable is drawn from the search state's counter when the goal
/// runs, so every run of the goal gets variables of its own.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),*), $($g:expr),* $(,)?) => {
        move |state: $crate::prelude::State| {
            $( let ($x, state) = state.fresh_var(); )*
            $crate::prelude::Goal::apply(&$crate::conj!($($g),*), state)
        }
    };
}

/// Define a relation.
/// A relation is a function that creates a goal.
///
/// Arguments are converted to `Term`s. The body is only built when the goal
/// runs, behind a suspension, so relations may call themselves. A `fresh!`
/// block runs once per state, so inside it pass arguments as `arg.clone()`.
///
/// The `trace` form logs every application with its reified arguments at
/// debug level.
#[macro_export]
macro_rules! defrel {

    ($(#[$outer:meta])* $vis:vis trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        $vis fn $name($($args: impl Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* $vis:vis $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        $vis fn $name($($args: impl Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    // alternate syntax: separate goals with ;
    ($(#[$outer:meta])* $vis:vis $name:ident($($args:ident),*) { $($g:expr);* $(;)? }) => {
        $crate::defrel!{$(#[$outer])* $vis $name($($args),*) { $($g),* }}
    };

    (@body: $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        move |s: $crate::prelude::State| {
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};

    (@tracebody: $name:ident, $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term = $args.into();
        )*
        move |s: $crate::prelude::State| {
            $(
                let $args = $args.clone();
            )*
            $crate::tracing::debug!(
                relation = stringify!($name),
                $($args = %s.reify(&$args),)*
                "apply"
            );
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};
}

/// Run one or more goals.
///
/// The syntax `run!(n, var(s), goal1, goal2, ...)` produces at most n
/// reified answers, `run!(*, var(s), goal1, goal2, ...)` produces all of
/// them. The latter never returns if the goals have infinitely many
/// solutions.
///
/// `run!(var(s), goal1, goal2, ...)` returns a (possibly infinite) iterator
/// over the answers.
///
/// With a single query variable each answer is its reified value; with a
/// tuple of variables each answer is the list of their values.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@iter ($($x),*), $($g),*).collect::<Vec<_>>()
    };

    (*, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@iter $q, $($g),*).collect::<Vec<_>>()
    };

    ($n:tt, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@iter ($($x),*), $($g),*).take($n).collect::<Vec<_>>()
    };

    ($n:tt, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@iter $q, $($g),*).take($n).collect::<Vec<_>>()
    };

    (($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@iter ($($x),*), $($g),*)
    };

    ($q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@iter $q, $($g),*)
    };

    (@iter ($($x:ident),*), $($g:expr),*) => {{
        $( let $x = $crate::prelude::Var::named(stringify!($x)); )*
        let query = $crate::prelude::Term::list(vec![$($crate::prelude::Term::from($x)),*]);
        let goal = $crate::conj!($($g),*);
        $crate::prelude::Goal::solve(&goal).map(move |s| s.reify_term(&query))
    }};

    (@iter $q:ident, $($g:expr),*) => {{
        let $q = $crate::prelude::Var::named(stringify!($q));
        let query = $crate::prelude::Term::from($q);
        let goal = $crate::conj!($($g),*);
        $crate::prelude::Goal::solve(&goal).map(move |s| s.reify_term(&query))
    }};
}

/// Build a list term.
///
/// `list![a, b, c]` is a proper list, `list![a, b ; tail]` ends in `tail`.
#[macro_export]
macro_rules! list {
    () => { $crate::prelude::Term::nil() };

    ($($item:expr),+ ; $tail:expr) => {
        $crate::prelude::Term::list_with_tail(
            vec![$($crate::prelude::Term::from($item)),+],
            $crate::prelude::Term::from($tail),
        )
    };

    ($($item:expr),+ $(,)?) => {
        $crate::prelude::Term::list(vec![$($crate::prelude::Term::from($item)),+])
    };
}

/// Construct a substitution from `var: value` pairs, bound in order.
#[macro_export]
macro_rules! substitution {
    () => { $crate::prelude::Substitution::empty() };

    ($($var:ident : $val:expr),* $(,)?) => {
        vec![$(($var, $crate::prelude::Term::from($val))),*]
            .into_iter()
            .collect::<$crate::prelude::Substitution>()
    };
}
