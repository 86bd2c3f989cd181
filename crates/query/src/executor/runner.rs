//! Pipeline runner - executes a configured query.
//!
//! Stages always run in the same order, whatever order the clauses were
//! registered in:
//!
//! ```text
//! source -> filter -> group -> having -> sort -> project
//! ```

use crate::entry::Entry;
use crate::executor::{FilterExecutor, GroupExecutor, HavingExecutor, ProjectExecutor, SortExecutor};
use crate::state::QueryState;
use alloc::vec::Vec;
use core::hash::Hash;

/// Runs the fixed pipeline over a query's configuration, consuming it.
pub(crate) struct PipelineRunner<'a, R, K, O> {
    state: QueryState<'a, R, K, O>,
}

impl<'a, R, K, O> PipelineRunner<'a, R, K, O>
where
    K: Eq + Hash + Clone,
{
    pub(crate) fn new(state: QueryState<'a, R, K, O>) -> Self {
        Self { state }
    }

    pub(crate) fn run(self) -> Vec<O> {
        let QueryState {
            rows,
            filters,
            key_fns,
            having,
            comparator,
            selector,
            ..
        } = self.state;

        debug_log!(stage = "source", rows = rows.len());

        let rows = FilterExecutor::new(&filters).execute(rows);
        debug_log!(stage = "filter", clauses = filters.len(), rows = rows.len());

        let entries: Vec<Entry<R, K>> = if key_fns.is_empty() {
            if !having.is_empty() {
                debug_log!(predicates = having.len(), "having without group by is ignored");
            }
            rows.into_iter().map(Entry::Row).collect()
        } else {
            let groups = GroupExecutor::new(&key_fns).execute(rows);
            debug_log!(stage = "group", levels = key_fns.len(), groups = groups.len());

            let groups = HavingExecutor::new(&having).execute(groups);
            debug_log!(stage = "having", predicates = having.len(), groups = groups.len());

            groups.into_iter().map(Entry::Group).collect()
        };

        let entries = match &comparator {
            Some(comparator) => SortExecutor::new(comparator).execute(entries),
            None => entries,
        };

        debug_log!(stage = "project", entries = entries.len());
        ProjectExecutor::new(&selector).execute(entries)
    }
}
