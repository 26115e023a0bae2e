use std::fmt;

/// Named logic variable.
///
/// Two variables are the same variable exactly when their names are equal.
/// Variables come from two disjoint name spaces: names chosen by the caller
/// (`Var::named`) and names generated from a search state's counter
/// (`Var::fresh`). A named variable can therefore never collide with a fresh
/// one, whatever its name.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Var(VarName);

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
enum VarName {
    Named(&'static str),
    Fresh(usize),
}

impl Var {
    /// Create a variable with a caller-chosen name.
    pub fn named(name: &'static str) -> Self {
        Var(VarName::Named(name))
    }

    /// Create the variable a search state hands out for counter value `id`.
    pub fn fresh(id: usize) -> Self {
        Var(VarName::Fresh(id))
    }

    /// Return the caller-chosen name, if this is not a fresh variable.
    pub fn name(&self) -> Option<&'static str> {
        match self.0 {
            VarName::Named(name) => Some(name),
            VarName::Fresh(_) => None,
        }
    }

    /// Return the counter value this variable was generated from.
    pub fn fresh_id(&self) -> Option<usize> {
        match self.0 {
            VarName::Named(_) => None,
            VarName::Fresh(id) => Some(id),
        }
    }
}

impl From<&'static str> for Var {
    fn from(name: &'static str) -> Self {
        Var::named(name)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            VarName::Named(name) => write!(f, "{}", name),
            VarName::Fresh(id) => write!(f, "_.{}", id),
        }
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
