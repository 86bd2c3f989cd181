//! Error types for relq queries.

use crate::clause::Clause;
use core::fmt;

/// Result type alias for relq operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for query construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A once-only clause was registered a second time on the same query.
    DuplicateClause {
        clause: Clause,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateClause { clause } => write!(f, "Duplicate {}", clause),
        }
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates a duplicate clause error.
    pub fn duplicate_clause(clause: Clause) -> Self {
        Error::DuplicateClause { clause }
    }

    /// Returns the clause this error is about.
    pub fn clause(&self) -> Clause {
        match self {
            Error::DuplicateClause { clause } => *clause,
        }
    }
}
