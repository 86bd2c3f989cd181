//! Query configuration and the once-only clause guard.

use crate::clause::{Comparator, GroupPredicate, KeyFn, Predicate, Selector};
use crate::entry::Entry;
use alloc::boxed::Box;
use alloc::vec::Vec;
use relq_core::{Clause, Error, Result};

/// Tracks which once-only clauses have been registered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClauseGuard {
    select: bool,
    from: bool,
    group_by: bool,
    order_by: bool,
}

impl ClauseGuard {
    /// Creates a guard with nothing registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a registration of `clause`.
    ///
    /// Fails with `DuplicateClause` if a once-only clause is already
    /// registered. Repeatable clauses always succeed.
    pub fn register(&mut self, clause: Clause) -> Result<()> {
        let Some(done) = self.flag_mut(clause) else {
            return Ok(());
        };
        if *done {
            debug_log!(clause = clause.as_str(), "duplicate clause rejected");
            return Err(Error::duplicate_clause(clause));
        }
        *done = true;
        Ok(())
    }

    /// Returns true if a once-only clause has been registered.
    pub fn is_registered(&self, clause: Clause) -> bool {
        match clause {
            Clause::Select => self.select,
            Clause::From => self.from,
            Clause::GroupBy => self.group_by,
            Clause::OrderBy => self.order_by,
            Clause::Where | Clause::Having => false,
        }
    }

    fn flag_mut(&mut self, clause: Clause) -> Option<&mut bool> {
        match clause {
            Clause::Select => Some(&mut self.select),
            Clause::From => Some(&mut self.from),
            Clause::GroupBy => Some(&mut self.group_by),
            Clause::OrderBy => Some(&mut self.order_by),
            Clause::Where | Clause::Having => None,
        }
    }
}

/// Everything a query has been configured with.
pub(crate) struct QueryState<'a, R, K, O> {
    pub(crate) rows: Vec<R>,
    /// Row counts of the tables given to `from`.
    pub(crate) table_sizes: Vec<usize>,
    /// One disjunction per `where` call.
    pub(crate) filters: Vec<Vec<Predicate<'a, R>>>,
    pub(crate) key_fns: Vec<KeyFn<'a, R, K>>,
    pub(crate) having: Vec<GroupPredicate<'a, R, K>>,
    pub(crate) comparator: Option<Comparator<'a, R, K>>,
    pub(crate) selector: Selector<'a, R, K, O>,
    pub(crate) guard: ClauseGuard,
}

impl<'a, R, K> QueryState<'a, R, K, Entry<R, K>> {
    /// Creates an empty state whose projection is the identity.
    pub(crate) fn new() -> Self {
        Self {
            rows: Vec::new(),
            table_sizes: Vec::new(),
            filters: Vec::new(),
            key_fns: Vec::new(),
            having: Vec::new(),
            comparator: None,
            selector: Box::new(|entry: Entry<R, K>| entry),
            guard: ClauseGuard::new(),
        }
    }
}

impl<'a, R, K, O> QueryState<'a, R, K, O> {
    /// Replaces the projection, keeping every other setting.
    pub(crate) fn with_selector<P>(self, selector: Selector<'a, R, K, P>) -> QueryState<'a, R, K, P> {
        QueryState {
            rows: self.rows,
            table_sizes: self.table_sizes,
            filters: self.filters,
            key_fns: self.key_fns,
            having: self.having,
            comparator: self.comparator,
            selector,
            guard: self.guard,
        }
    }
}
