//! Fluent query builder.
//!
//! Clauses may be registered in any order; they only record configuration.
//! `execute` always runs the stages in the same order:
//! filter, group, having, order, select.
//!
//! # Example
//!
//! ```rust
//! use relq_query::{by, Entry, Group, Query};
//!
//! let groups = Query::new()
//!     .from((1..=9).collect::<Vec<i32>>())?
//!     .group_by([by(|n: &i32| if n % 2 == 0 { "even" } else { "odd" })])?
//!     .execute();
//!
//! assert_eq!(
//!     groups,
//!     vec![
//!         Entry::Group(Group::leaf("odd", vec![1, 3, 5, 7, 9])),
//!         Entry::Group(Group::leaf("even", vec![2, 4, 6, 8])),
//!     ]
//! );
//! # Ok::<(), relq_query::Error>(())
//! ```

use crate::clause::{KeyFn, Predicate};
use crate::entry::{Entry, Group};
use crate::executor::PipelineRunner;
use crate::planner::LogicalPlan;
use crate::source::Source;
use crate::state::QueryState;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use relq_core::{Clause, Key, Result};

/// An in-memory query over rows of type `R`.
///
/// `K` is the grouping key type and `O` the type of the produced items:
/// `Entry<R, K>` until a selector is registered.
pub struct Query<'a, R, K = Key, O = Entry<R, K>> {
    state: QueryState<'a, R, K, O>,
}

impl<'a, R> Query<'a, R> {
    /// Creates an empty query grouping by dynamic `Key` values.
    pub fn new() -> Self {
        Self {
            state: QueryState::new(),
        }
    }
}

impl<'a, R> Default for Query<'a, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R, K> Query<'a, R, K> {
    /// Creates an empty query with a caller-chosen key type.
    pub fn keyed() -> Self {
        Self {
            state: QueryState::new(),
        }
    }
}

impl<'a, R, K, O> Query<'a, R, K, O> {
    /// Registers a projection applied to every final row or group.
    ///
    /// Fails with `DuplicateClause(SELECT)` if a projection was already
    /// registered, including through [`Query::select_all`].
    pub fn select<P, F>(mut self, selector: F) -> Result<Query<'a, R, K, P>>
    where
        F: Fn(Entry<R, K>) -> P + 'a,
    {
        self.state.guard.register(Clause::Select)?;
        Ok(Query {
            state: self.state.with_selector(Box::new(selector)),
        })
    }

    /// Registers the identity projection (`SELECT *`).
    pub fn select_all(mut self) -> Result<Self> {
        self.state.guard.register(Clause::Select)?;
        Ok(self)
    }

    /// Sets the rows the query reads.
    ///
    /// A single table is read as is; several tables are cross joined.
    /// Fails with `DuplicateClause(FROM)` on a second call.
    pub fn from<S>(mut self, source: S) -> Result<Self>
    where
        S: Source<Row = R>,
    {
        self.state.guard.register(Clause::From)?;
        self.state.table_sizes = source.table_sizes();
        self.state.rows = source.into_rows();
        Ok(self)
    }

    /// Adds a filter with a single predicate.
    pub fn where_<F>(self, predicate: F) -> Self
    where
        F: Fn(&R) -> bool + 'a,
    {
        self.where_any([Box::new(predicate) as Predicate<'a, R>])
    }

    /// Adds a filter keeping rows for which any of `predicates` holds.
    ///
    /// Separate calls must all pass. An empty predicate list rejects every
    /// row.
    pub fn where_any<I>(mut self, predicates: I) -> Self
    where
        I: IntoIterator<Item = Predicate<'a, R>>,
    {
        self.state.filters.push(predicates.into_iter().collect());
        self
    }

    /// Registers the grouping functions, outermost level first.
    ///
    /// Fails with `DuplicateClause(GROUPBY)` on a second call. An empty
    /// list registers the clause without grouping anything.
    pub fn group_by<I>(mut self, key_fns: I) -> Result<Self>
    where
        I: IntoIterator<Item = KeyFn<'a, R, K>>,
    {
        self.state.guard.register(Clause::GroupBy)?;
        self.state.key_fns = key_fns.into_iter().collect();
        Ok(self)
    }

    /// Adds a filter over top-level groups. Separate calls must all pass.
    ///
    /// Without `group_by` there are no groups and the predicate is never
    /// evaluated.
    pub fn having<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Group<R, K>) -> bool + 'a,
    {
        self.state.having.push(Box::new(predicate));
        self
    }

    /// Registers the comparator used to order rows, or groups when grouped.
    ///
    /// The sort is stable. Fails with `DuplicateClause(ORDERBY)` on a
    /// second call.
    pub fn order_by<F>(mut self, comparator: F) -> Result<Self>
    where
        F: Fn(&Entry<R, K>, &Entry<R, K>) -> Ordering + 'a,
    {
        self.state.guard.register(Clause::OrderBy)?;
        self.state.comparator = Some(Box::new(comparator));
        Ok(self)
    }

    /// Orders by a key extracted from each row or group.
    ///
    /// Shares the ORDERBY registration with [`Query::order_by`].
    pub fn order_by_key<V, F>(self, key_fn: F) -> Result<Self>
    where
        V: Ord,
        F: Fn(&Entry<R, K>) -> V + 'a,
    {
        self.order_by(move |a, b| key_fn(a).cmp(&key_fn(b)))
    }

    /// Describes the stages this query will run.
    pub fn plan(&self) -> LogicalPlan {
        LogicalPlan::from_state(&self.state)
    }

    /// Runs the query, consuming the builder.
    pub fn execute(self) -> Vec<O>
    where
        K: Eq + Hash + Clone,
    {
        PipelineRunner::new(self.state).run()
    }
}

impl<'a, R, K, O> fmt::Debug for Query<'a, R, K, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("rows", &self.state.rows.len())
            .field("plan", &self.plan())
            .finish()
    }
}
