//! Sort executor.

use crate::clause::Comparator;
use crate::entry::Entry;
use alloc::vec::Vec;

/// Sort executor - orders rows or top-level groups with a user comparator.
///
/// The sort is stable: entries the comparator reports as equal keep their
/// pipeline order.
pub struct SortExecutor<'q, 'a, R, K> {
    comparator: &'q Comparator<'a, R, K>,
}

impl<'q, 'a, R, K> SortExecutor<'q, 'a, R, K> {
    /// Creates a new sort executor.
    pub fn new(comparator: &'q Comparator<'a, R, K>) -> Self {
        Self { comparator }
    }

    /// Executes the sort on the pipeline's working entries.
    pub fn execute(&self, mut entries: Vec<Entry<R, K>>) -> Vec<Entry<R, K>> {
        entries.sort_by(|a, b| (self.comparator)(a, b));
        entries
    }
}
