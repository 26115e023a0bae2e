//! Search configuration.

/// Options that control how a search runs.
///
/// The configuration travels inside every search state, so all goals of one
/// search agree on it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Refuse bindings that would make a variable contain itself.
    ///
    /// Off by default. Without it, unifying `x` with `f(x)` succeeds and later
    /// walks of `x` do not terminate.
    pub occurs_check: bool,

    /// Maximum number of suspensions forced while pulling one solution.
    ///
    /// `None` lets a pull run until it finds a solution or exhausts the
    /// search, which never happens for goals like `nevero`.
    pub step_limit: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_occurs_check(mut self, enabled: bool) -> Self {
        self.occurs_check = enabled;
        self
    }

    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }
}
