//! Error types for the kanren kernel.
//!
//! Unification failure is not an error: it is the absence of solutions and is
//! reported as `None` or as an empty stream. The variants here cover misuse of
//! the term API and searches that exceed a configured budget.

use thiserror::Error;

use crate::core::term::Shape;

/// A specialized `Result` type for kernel operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A compound was rebuilt from a child list of the wrong length.
    #[error("cannot rebuild {shape} with {found} children, expected {expected}")]
    ArityMismatch {
        shape: Shape,
        expected: usize,
        found: usize,
    },

    /// Pulling the next solution forced more suspensions than allowed.
    #[error("step limit of {limit} suspensions exceeded before the next solution")]
    StepLimitExceeded { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_mismatch_names_the_shape() {
        let err = Error::ArityMismatch {
            shape: Shape::CONS,
            expected: 2,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot rebuild cons with 3 children, expected 2"
        );
    }

    #[test]
    fn step_limit_reports_the_limit() {
        let err = Error::StepLimitExceeded { limit: 10 };
        assert!(err.to_string().contains("10"));
    }
}
