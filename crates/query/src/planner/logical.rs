//! Logical query plan definitions.

use crate::state::QueryState;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use relq_core::Clause;

/// Logical query plan node.
///
/// Describes the stages a query will run, innermost first. The plan is
/// derived from the registered clauses and never reorders them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogicalPlan {
    /// No `from` clause: the query reads nothing.
    Empty,

    /// Single table scan.
    Scan { rows: usize },

    /// Cartesian product of several tables, with their row counts.
    CrossProduct { tables: Vec<usize> },

    /// One `where` call: a disjunction of `any_of` predicates.
    Filter {
        input: Box<LogicalPlan>,
        any_of: usize,
    },

    /// Grouping (GROUP BY) nested `levels` deep.
    Group {
        input: Box<LogicalPlan>,
        levels: usize,
    },

    /// Group filter (HAVING). `inert` when there is no grouping to filter.
    Having {
        input: Box<LogicalPlan>,
        predicates: usize,
        inert: bool,
    },

    /// Sort (ORDER BY).
    Sort { input: Box<LogicalPlan> },

    /// Projection (SELECT).
    Project { input: Box<LogicalPlan> },
}

impl LogicalPlan {
    /// Creates a filter plan.
    pub fn filter(input: LogicalPlan, any_of: usize) -> Self {
        LogicalPlan::Filter {
            input: Box::new(input),
            any_of,
        }
    }

    /// Creates a grouping plan.
    pub fn group(input: LogicalPlan, levels: usize) -> Self {
        LogicalPlan::Group {
            input: Box::new(input),
            levels,
        }
    }

    /// Creates a having plan.
    pub fn having(input: LogicalPlan, predicates: usize, inert: bool) -> Self {
        LogicalPlan::Having {
            input: Box::new(input),
            predicates,
            inert,
        }
    }

    /// Creates a sort plan.
    pub fn sort(input: LogicalPlan) -> Self {
        LogicalPlan::Sort {
            input: Box::new(input),
        }
    }

    /// Creates a projection plan.
    pub fn project(input: LogicalPlan) -> Self {
        LogicalPlan::Project {
            input: Box::new(input),
        }
    }

    /// Builds the plan of a configured query.
    pub(crate) fn from_state<R, K, O>(state: &QueryState<'_, R, K, O>) -> Self {
        let mut plan = if !state.guard.is_registered(Clause::From) {
            LogicalPlan::Empty
        } else if let [rows] = state.table_sizes.as_slice() {
            LogicalPlan::Scan { rows: *rows }
        } else {
            LogicalPlan::CrossProduct {
                tables: state.table_sizes.clone(),
            }
        };

        for any_of in &state.filters {
            plan = LogicalPlan::filter(plan, any_of.len());
        }
        if !state.key_fns.is_empty() {
            plan = LogicalPlan::group(plan, state.key_fns.len());
        }
        if !state.having.is_empty() {
            plan = LogicalPlan::having(plan, state.having.len(), state.key_fns.is_empty());
        }
        if state.comparator.is_some() {
            plan = LogicalPlan::sort(plan);
        }
        if state.guard.is_registered(Clause::Select) {
            plan = LogicalPlan::project(plan);
        }
        plan
    }

    /// Returns the input plan(s) of this node.
    pub fn inputs(&self) -> Vec<&LogicalPlan> {
        match self {
            LogicalPlan::Empty | LogicalPlan::Scan { .. } | LogicalPlan::CrossProduct { .. } => {
                alloc::vec![]
            }
            LogicalPlan::Filter { input, .. }
            | LogicalPlan::Group { input, .. }
            | LogicalPlan::Having { input, .. }
            | LogicalPlan::Sort { input }
            | LogicalPlan::Project { input } => alloc::vec![input.as_ref()],
        }
    }

    /// Returns the number of nodes from this one down to the source.
    pub fn depth(&self) -> usize {
        1 + self.inputs().first().map_or(0, |input| input.depth())
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalPlan::Empty => f.write_str("Empty"),
            LogicalPlan::Scan { rows } => write!(f, "Scan(rows={})", rows),
            LogicalPlan::CrossProduct { tables } => write!(f, "CrossProduct(tables={:?})", tables),
            LogicalPlan::Filter { any_of, .. } => write!(f, "Filter(any_of={})", any_of),
            LogicalPlan::Group { levels, .. } => write!(f, "Group(levels={})", levels),
            LogicalPlan::Having {
                predicates, inert, ..
            } => {
                write!(f, "Having(predicates={})", predicates)?;
                if *inert {
                    f.write_str(" [inert]")?;
                }
                Ok(())
            }
            LogicalPlan::Sort { .. } => f.write_str("Sort"),
            LogicalPlan::Project { .. } => f.write_str("Project"),
        }
    }
}

impl fmt::Display for LogicalPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut node = Some(self);
        let mut indent = 0;
        while let Some(plan) = node {
            if indent > 0 {
                f.write_str("\n")?;
            }
            for _ in 0..indent {
                f.write_str("  ")?;
            }
            plan.fmt_node(f)?;
            node = plan.inputs().into_iter().next();
            indent += 1;
        }
        Ok(())
    }
}
