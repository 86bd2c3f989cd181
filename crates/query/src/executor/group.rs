//! Group executor.

use crate::clause::KeyFn;
use crate::entry::{Group, Members};
use alloc::vec::Vec;
use core::hash::Hash;
use hashbrown::HashMap;

/// Group executor - partitions rows into nested groups.
///
/// The first key function splits the input; every following function
/// regroups the members of each group produced by the previous one. Groups
/// appear in the order their key is first seen and rows keep their relative
/// input order.
pub struct GroupExecutor<'q, 'a, R, K> {
    key_fns: &'q [KeyFn<'a, R, K>],
}

impl<'q, 'a, R, K> GroupExecutor<'q, 'a, R, K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a new group executor.
    pub fn new(key_fns: &'q [KeyFn<'a, R, K>]) -> Self {
        Self { key_fns }
    }

    /// Executes the grouping. Returns no groups when no key function is set.
    pub fn execute(&self, rows: Vec<R>) -> Vec<Group<R, K>> {
        group_rows(rows, self.key_fns)
    }
}

fn group_rows<R, K>(rows: Vec<R>, key_fns: &[KeyFn<'_, R, K>]) -> Vec<Group<R, K>>
where
    K: Eq + Hash + Clone,
{
    let Some((key_fn, rest)) = key_fns.split_first() else {
        return Vec::new();
    };

    partition(rows, key_fn)
        .into_iter()
        .map(|(key, members)| {
            let members = if rest.is_empty() {
                Members::Rows(members)
            } else {
                Members::Groups(group_rows(members, rest))
            };
            Group::from_parts(key, members)
        })
        .collect()
}

/// Splits rows by key, preserving first-occurrence order of keys.
fn partition<R, K, F>(rows: Vec<R>, key_fn: F) -> Vec<(K, Vec<R>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&R) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut partitions: Vec<(K, Vec<R>)> = Vec::new();

    for row in rows {
        let key = key_fn(&row);
        match slots.get(&key) {
            Some(&slot) => partitions[slot].1.push(row),
            None => {
                slots.insert(key.clone(), partitions.len());
                partitions.push((key, alloc::vec![row]));
            }
        }
    }

    partitions
}
