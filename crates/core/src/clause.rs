//! Clause kinds of a query.

use core::fmt;

/// A configuration call on a query builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Clause {
    /// Projection.
    Select,
    /// Source tables.
    From,
    /// Row filter (repeatable).
    Where,
    /// Grouping functions.
    GroupBy,
    /// Group filter (repeatable).
    Having,
    /// Result ordering.
    OrderBy,
}

impl Clause {
    /// Returns the SQL-style name of the clause.
    pub fn as_str(&self) -> &'static str {
        match self {
            Clause::Select => "SELECT",
            Clause::From => "FROM",
            Clause::Where => "WHERE",
            Clause::GroupBy => "GROUPBY",
            Clause::Having => "HAVING",
            Clause::OrderBy => "ORDERBY",
        }
    }

    /// Returns true if the clause may be registered at most once per query.
    #[inline]
    pub fn is_once_only(&self) -> bool {
        !matches!(self, Clause::Where | Clause::Having)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
