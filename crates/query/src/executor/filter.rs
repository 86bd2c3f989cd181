//! Filter executors for rows (WHERE) and groups (HAVING).

use crate::clause::{GroupPredicate, Predicate};
use crate::entry::Group;
use alloc::vec::Vec;

/// Filter executor - keeps rows passing every registered `where` group.
///
/// Each group is a disjunction: a row passes a group if any predicate in it
/// returns true. A group with no predicates therefore rejects every row.
pub struct FilterExecutor<'q, 'a, R> {
    clauses: &'q [Vec<Predicate<'a, R>>],
}

impl<'q, 'a, R> FilterExecutor<'q, 'a, R> {
    /// Creates a new filter executor.
    pub fn new(clauses: &'q [Vec<Predicate<'a, R>>]) -> Self {
        Self { clauses }
    }

    /// Executes the filter, one full pass per group in registration order.
    pub fn execute(&self, mut rows: Vec<R>) -> Vec<R> {
        for any_of in self.clauses {
            rows.retain(|row| any_of.iter().any(|predicate| predicate(row)));
        }
        rows
    }
}

/// Having executor - keeps groups passing every registered `having` predicate.
pub struct HavingExecutor<'q, 'a, R, K> {
    predicates: &'q [GroupPredicate<'a, R, K>],
}

impl<'q, 'a, R, K> HavingExecutor<'q, 'a, R, K> {
    /// Creates a new having executor.
    pub fn new(predicates: &'q [GroupPredicate<'a, R, K>]) -> Self {
        Self { predicates }
    }

    /// Executes the filter on top-level groups.
    pub fn execute(&self, mut groups: Vec<Group<R, K>>) -> Vec<Group<R, K>> {
        for predicate in self.predicates {
            groups.retain(|group| predicate(group));
        }
        groups
    }
}
