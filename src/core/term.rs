//! Terms are the values that take part in unification.
//!
//! A term is a logic variable, an opaque constant, a compound node with an
//! ordered list of children, or the `Unassigned` marker that reification uses
//! for variables that are still free.

use crate::core::logic_variable::Var;
use crate::error::{Error, Result};
use downcast_rs::{impl_downcast, Downcast};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub enum Term {
    Var(Var),
    Constant(Constant),
    Compound(Compound),
    /// Stands for a variable that is still free in a reified answer.
    Unassigned,
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    pub fn var(v: impl Into<Var>) -> Self {
        Term::Var(v.into())
    }

    pub fn constant(val: impl Atomic) -> Self {
        Term::Constant(Constant::new(val))
    }

    pub fn compound(shape: Shape, children: impl IntoIterator<Item = Term>) -> Self {
        Term::Compound(Compound::new(shape, children))
    }

    /// The empty list.
    pub fn nil() -> Self {
        Term::constant(())
    }

    /// A list cell with head `car` and tail `cdr`.
    pub fn cons(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Term::compound(Shape::CONS, [car.into(), cdr.into()])
    }

    /// A proper list of `items`.
    pub fn list(items: impl IntoIterator<Item = Term>) -> Self {
        Term::list_with_tail(items, Term::nil())
    }

    /// A list of `items` whose final tail is `tail` instead of the empty list.
    pub fn list_with_tail(items: impl IntoIterator<Item = Term>, tail: Term) -> Self {
        let items: Vec<Term> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(tail, |list, item| Term::cons(item, list))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn is_nil(&self) -> bool {
        self.downcast_ref::<()>().is_some()
    }

    pub fn as_var(&self) -> Option<&Var> {
        match self {
            Term::Var(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Term::Compound(c) => Some(c),
            _ => None,
        }
    }

    /// Split a list cell into head and tail.
    pub fn as_cons(&self) -> Option<(&Term, &Term)> {
        match self {
            Term::Compound(c) if c.shape == Shape::CONS => match &*c.children {
                [car, cdr] => Some((car, cdr)),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn downcast_ref<T: Atomic>(&self) -> Option<&T> {
        match self {
            Term::Constant(c) => c.downcast_ref(),
            _ => None,
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Term::Var(a), Term::Var(b)) if a == b => {}
                (Term::Constant(a), Term::Constant(b)) if a == b => {}
                (Term::Unassigned, Term::Unassigned) => {}
                (Term::Compound(a), Term::Compound(b)) if a.same_kind(b) => {
                    if !a.ptr_eq(b) {
                        pending.extend(a.children().iter().zip(b.children()));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl PartialEq<Var> for Term {
    fn eq(&self, v: &Var) -> bool {
        self.as_var().map(|sv| sv == v).unwrap_or(false)
    }
}

impl<T: Atomic> PartialEq<T> for Term {
    fn eq(&self, other: &T) -> bool {
        self.downcast_ref::<T>().map(|x| x == other).unwrap_or(false)
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<&Var> for Term {
    fn from(v: &Var) -> Self {
        Term::Var(*v)
    }
}

impl From<&Term> for Term {
    fn from(t: &Term) -> Self {
        t.clone()
    }
}

impl From<Constant> for Term {
    fn from(c: Constant) -> Self {
        Term::Constant(c)
    }
}

impl From<Compound> for Term {
    fn from(c: Compound) -> Self {
        Term::Compound(c)
    }
}

impl<T: Atomic> From<T> for Term {
    fn from(val: T) -> Self {
        Term::constant(val)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Term::list(items)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{:?}", c),
            Term::Compound(c) => write!(f, "{}", c),
            Term::Unassigned => write!(f, "_"),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Identity of a kind of compound term.
///
/// Compounds only unify with compounds of the same shape and arity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Shape(&'static str);

impl Shape {
    /// List cell: head and tail.
    pub const CONS: Shape = Shape("cons");

    pub const fn new(name: &'static str) -> Self {
        Shape(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A shaped node with an ordered list of child terms.
#[derive(Clone)]
pub struct Compound {
    shape: Shape,
    children: Arc<[Term]>,
}

impl Compound {
    pub fn new(shape: Shape, children: impl IntoIterator<Item = Term>) -> Self {
        Compound {
            shape,
            children: children.into_iter().collect(),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn arity(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self) -> &[Term] {
        &self.children
    }

    /// Build a compound of the same shape from a replacement list of children.
    pub fn with_children(&self, children: Vec<Term>) -> Result<Compound> {
        if children.len() != self.arity() {
            return Err(Error::ArityMismatch {
                shape: self.shape,
                expected: self.arity(),
                found: children.len(),
            });
        }
        Ok(Compound::new(self.shape, children))
    }

    /// Shape and arity agree, so children can be compared positionally.
    pub fn same_kind(&self, other: &Compound) -> bool {
        self.shape == other.shape && self.arity() == other.arity()
    }

    /// Same shape and the very same children, without comparing them.
    pub(crate) fn ptr_eq(&self, other: &Compound) -> bool {
        self.shape == other.shape && Arc::ptr_eq(&self.children, &other.children)
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || self.same_kind(other)
                && self
                    .children()
                    .iter()
                    .zip(other.children())
                    .all(|(a, b)| a == b)
    }
}

// Long lists nest one compound per cell; unlink them in a loop.
impl Drop for Compound {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_unique_children(&mut self.children, &mut pending);
        while let Some(mut term) = pending.pop() {
            if let Term::Compound(c) = &mut term {
                take_unique_children(&mut c.children, &mut pending);
            }
        }
    }
}

/// Move the compound children out of `children` if no other term shares them.
fn take_unique_children(children: &mut Arc<[Term]>, out: &mut Vec<Term>) {
    if let Some(children) = Arc::get_mut(children) {
        out.extend(
            children
                .iter_mut()
                .filter(|child| matches!(child, Term::Compound(_)))
                .map(|child| std::mem::replace(child, Term::Unassigned)),
        );
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.shape == Shape::CONS && self.arity() == 2 {
            write!(f, "({}", self.children[0])?;
            let mut rest = &self.children[1];
            loop {
                match rest.as_cons() {
                    Some((car, cdr)) => {
                        write!(f, " {}", car)?;
                        rest = cdr;
                    }
                    None if rest.is_nil() => break,
                    None => {
                        write!(f, " . {}", rest)?;
                        break;
                    }
                }
            }
            return write!(f, ")");
        }

        write!(f, "{}(", self.shape)?;
        let mut iter = self.children.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for child in iter {
            write!(f, ", {}", child)?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Compound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// An opaque value wrapped as a term.
///
/// Equality delegates to the wrapped type; constants of different types are
/// never equal.
#[derive(Clone)]
pub struct Constant(Arc<dyn Atom>);

impl Constant {
    pub fn new(val: impl Atomic) -> Self {
        Constant(Arc::new(val))
    }

    pub fn downcast_ref<T: Atomic>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.eqv(&*other.0)
    }
}

impl fmt::Debug for Constant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Object-safe view of an `Atomic` value.
pub trait Atom: Downcast + fmt::Debug + Send + Sync {
    fn eqv(&self, other: &dyn Atom) -> bool;
}
impl_downcast!(Atom);

impl<T: Atomic> Atom for T {
    fn eqv(&self, other: &dyn Atom) -> bool {
        other
            .downcast_ref::<T>()
            .map(|o| o == self)
            .unwrap_or(false)
    }
}

/// Types whose values can be wrapped in a `Constant`.
pub trait Atomic: fmt::Debug + PartialEq + Send + Sync + 'static {}

impl Atomic for () {}

impl Atomic for bool {}

impl Atomic for u8 {}

impl Atomic for u16 {}

impl Atomic for u32 {}

impl Atomic for u64 {}

impl Atomic for u128 {}

impl Atomic for usize {}

impl Atomic for i8 {}

impl Atomic for i16 {}

impl Atomic for i32 {}

impl Atomic for i64 {}

impl Atomic for i128 {}

impl Atomic for isize {}

impl Atomic for char {}

impl Atomic for f64 {}

impl Atomic for f32 {}

impl Atomic for String {}

impl Atomic for &'static str {}

impl<T: Atomic> Atomic for Box<T> {}

impl<T: Atomic> Atomic for Arc<T> {}
