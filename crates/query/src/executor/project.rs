//! Project executor.

use crate::clause::Selector;
use crate::entry::Entry;
use alloc::vec::Vec;

/// Project executor - maps every final entry through the selector.
pub struct ProjectExecutor<'q, 'a, R, K, O> {
    selector: &'q Selector<'a, R, K, O>,
}

impl<'q, 'a, R, K, O> ProjectExecutor<'q, 'a, R, K, O> {
    /// Creates a new project executor.
    pub fn new(selector: &'q Selector<'a, R, K, O>) -> Self {
        Self { selector }
    }

    /// Executes the projection.
    pub fn execute(&self, entries: Vec<Entry<R, K>>) -> Vec<O> {
        entries.into_iter().map(|entry| (self.selector)(entry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Group;
    use alloc::boxed::Box;
    use alloc::vec;
    use relq_core::Key;

    #[test]
    fn test_project_rows() {
        let selector: Selector<'_, (i32, i32), Key, i32> =
            Box::new(|entry: Entry<(i32, i32)>| entry.into_row().map_or(0, |(a, b)| a + b));
        let input = vec![Entry::Row((1, 2)), Entry::Row((10, 20))];

        let result = ProjectExecutor::new(&selector).execute(input);
        assert_eq!(result, vec![3, 30]);
    }

    #[test]
    fn test_project_group_count() {
        let selector: Selector<'_, i32, Key, (Key, usize)> = Box::new(|entry: Entry<i32>| {
            let group = entry.into_group().unwrap_or_else(|| Group::leaf(Key::Null, Vec::new()));
            (group.key().clone(), group.len())
        });
        let input = vec![
            Entry::Group(Group::leaf("teacher", vec![1, 2, 3])),
            Entry::Group(Group::leaf("politician", vec![4])),
        ];

        let result = ProjectExecutor::new(&selector).execute(input);
        assert_eq!(result, vec![(Key::from("teacher"), 3), (Key::from("politician"), 1)]);
    }
}
