//! relq Query - In-memory relational query builder.
//!
//! This crate provides a fluent builder applying SQL-like operators to plain
//! in-memory rows:
//!
//! - `builder`: The `Query` builder (select, from, where, group by, having, order by)
//! - `source`: Query sources and the n-ary cross join
//! - `entry`: Result rows and nested groups
//! - `executor`: Pipeline operators (filter, group, having, sort, project)
//! - `planner`: Logical plan describing a configured query
//! - `state`: Query configuration and the once-only clause guard
//!
//! # Example
//!
//! ```rust
//! use relq_query::{Entry, Query};
//!
//! type Teacher = (i32, &'static str);
//! type Student = (&'static str, i32);
//!
//! let teachers: Vec<Teacher> = vec![(1, "Peter"), (2, "Anna")];
//! let students: Vec<Student> = vec![("Michael", 1), ("Rose", 2)];
//!
//! let pairs = Query::new()
//!     .from((teachers, students))?
//!     .where_(|(teacher, student): &(Teacher, Student)| teacher.0 == student.1)
//!     .select(|e: Entry<(Teacher, Student)>| e.into_row().map(|(t, s)| (s.0, t.1)))?
//!     .execute();
//!
//! assert_eq!(pairs, vec![Some(("Michael", "Peter")), Some(("Rose", "Anna"))]);
//! # Ok::<(), relq_query::Error>(())
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "debug-log")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-log"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod builder;
pub mod clause;
pub mod entry;
pub mod executor;
pub mod planner;
pub mod source;
pub mod state;

pub use builder::Query;
pub use clause::{by, pred, Comparator, GroupPredicate, KeyFn, Predicate, Selector};
pub use entry::{Entry, Group, Members};
pub use planner::LogicalPlan;
pub use source::{cross_join, Source, Tables};
pub use relq_core::{Clause, Error, Key, Result};
