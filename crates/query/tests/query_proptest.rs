//! Property-based tests for the query pipeline.
//!
//! These tests compare query results against straightforward hand-written
//! equivalents for randomly generated inputs.

use proptest::prelude::*;
use relq_query::{by, cross_join, pred, Clause, Entry, Group, Key, Query, Tables};
use std::collections::HashMap;

/// Strategy for generating a table of small integers.
fn rows_strategy(max_rows: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50i64, 0..max_rows)
}

/// Strategy for generating up to four small tables.
fn tables_strategy() -> impl Strategy<Value = Vec<Vec<i64>>> {
    prop::collection::vec(rows_strategy(5), 0..5)
}

fn expect_rows<R>(entries: Vec<Entry<R>>) -> Vec<R> {
    entries
        .into_iter()
        .map(|e| e.into_row().expect("ungrouped query yields rows"))
        .collect()
}

fn expect_groups<R>(entries: Vec<Entry<R>>) -> Vec<Group<R>> {
    entries
        .into_iter()
        .map(|e| e.into_group().expect("grouped query yields groups"))
        .collect()
}

/// Groups `rows` by `key_fn` keeping first-occurrence order, as a reference.
fn reference_groups(rows: &[i64], key_fn: impl Fn(i64) -> i64) -> Vec<(i64, Vec<i64>)> {
    let mut groups: Vec<(i64, Vec<i64>)> = Vec::new();
    for &row in rows {
        let key = key_fn(row);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(row),
            None => groups.push((key, vec![row])),
        }
    }
    groups
}

proptest! {
    /// Property: from with a single table returns it unchanged.
    #[test]
    fn single_table_is_identity(rows in rows_strategy(100)) {
        let result = Query::new().from(rows.clone()).unwrap().execute();
        prop_assert_eq!(expect_rows(result), rows);
    }

    /// Property: the cross join has one tuple per combination, in row-major order.
    #[test]
    fn cross_join_is_row_major(tables in tables_strategy()) {
        let joined = cross_join(&tables);
        let expected_len = if tables.is_empty() {
            0
        } else {
            tables.iter().map(Vec::len).product()
        };
        prop_assert_eq!(joined.len(), expected_len);

        for (index, tuple) in joined.iter().enumerate() {
            prop_assert_eq!(tuple.len(), tables.len());
            let mut rest = index;
            for (position, table) in tables.iter().enumerate().rev() {
                prop_assert_eq!(tuple[position], table[rest % table.len()]);
                rest /= table.len();
            }
        }

        let from_query = Query::new().from(Tables::new(tables)).unwrap().execute();
        prop_assert_eq!(expect_rows(from_query), joined);
    }

    /// Property: a two-table join agrees with nested loops.
    #[test]
    fn pair_join_equals_nested_loops(left in rows_strategy(20), right in rows_strategy(20)) {
        let mut expected = Vec::new();
        for l in &left {
            for r in &right {
                expected.push((*l, *r));
            }
        }
        let result = Query::new().from((left, right)).unwrap().execute();
        prop_assert_eq!(expect_rows(result), expected);
    }

    /// Property: predicates in one call are ORed, separate calls are ANDed.
    #[test]
    fn where_matches_manual_filter(
        rows in rows_strategy(100),
        low in -50i64..50i64,
        high in -50i64..50i64,
        modulus in 1i64..5i64,
    ) {
        let result = Query::new()
            .from(rows.clone())
            .unwrap()
            .where_any([pred(move |n: &i64| *n < low), pred(move |n: &i64| *n > high)])
            .where_(move |n: &i64| n.rem_euclid(modulus) == 0)
            .execute();

        let expected: Vec<i64> = rows
            .into_iter()
            .filter(|n| (*n < low || *n > high) && n.rem_euclid(modulus) == 0)
            .collect();
        prop_assert_eq!(expect_rows(result), expected);
    }

    /// Property: groups appear in first-occurrence order and keep row order.
    #[test]
    fn grouping_preserves_first_occurrence(rows in rows_strategy(100), modulus in 1i64..8i64) {
        let result = Query::new()
            .from(rows.clone())
            .unwrap()
            .group_by([by(move |n: &i64| n.rem_euclid(modulus))])
            .unwrap()
            .execute();

        let actual: Vec<(Key, Vec<i64>)> = expect_groups(result)
            .into_iter()
            .map(|group| {
                let members = group.rows().into_iter().copied().collect();
                (group.key().clone(), members)
            })
            .collect();
        let expected: Vec<(Key, Vec<i64>)> = reference_groups(&rows, |n| n.rem_euclid(modulus))
            .into_iter()
            .map(|(key, members)| (Key::from(key), members))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// Property: nested grouping neither loses nor duplicates rows.
    #[test]
    fn nested_grouping_keeps_every_row(rows in rows_strategy(100)) {
        let result = Query::new()
            .from(rows.clone())
            .unwrap()
            .group_by([by(|n: &i64| *n < 0), by(|n: &i64| n.rem_euclid(3))])
            .unwrap()
            .execute();
        let groups = expect_groups(result);

        let mut counts: HashMap<i64, usize> = HashMap::new();
        for group in &groups {
            prop_assert!(!group.is_leaf());
            for row in group.rows() {
                *counts.entry(*row).or_default() += 1;
            }
        }
        let mut expected: HashMap<i64, usize> = HashMap::new();
        for row in &rows {
            *expected.entry(*row).or_default() += 1;
        }
        prop_assert_eq!(counts, expected);
        prop_assert_eq!(groups.iter().map(Group::row_count).sum::<usize>(), rows.len());
    }

    /// Property: having keeps exactly the groups its predicates accept.
    #[test]
    fn having_matches_manual_group_filter(rows in rows_strategy(100), min_size in 0usize..4usize) {
        let result = Query::new()
            .from(rows.clone())
            .unwrap()
            .group_by([by(|n: &i64| n.rem_euclid(5))])
            .unwrap()
            .having(move |g| g.len() > min_size)
            .select(|e: Entry<i64>| e.into_group().map(|g| g.len()))
            .unwrap()
            .execute();

        let expected: Vec<Option<usize>> = reference_groups(&rows, |n| n.rem_euclid(5))
            .into_iter()
            .filter(|(_, members)| members.len() > min_size)
            .map(|(_, members)| Some(members.len()))
            .collect();
        prop_assert_eq!(result, expected);
    }

    /// Property: ordering is a stable sort.
    #[test]
    fn order_by_is_stable(rows in prop::collection::vec((0i64..5i64, any::<u8>()), 0..100)) {
        let result = Query::new()
            .from(rows.clone())
            .unwrap()
            .order_by_key(|e| e.as_row().map(|row| row.0))
            .unwrap()
            .execute();

        let mut expected = rows;
        expected.sort_by_key(|row| row.0);
        prop_assert_eq!(expect_rows(result), expected);
    }

    /// Property: clause registration order never changes the result.
    #[test]
    fn registration_order_is_irrelevant(rows in rows_strategy(60)) {
        let forward = Query::new()
            .from(rows.clone())
            .unwrap()
            .where_(|n: &i64| *n != 0)
            .group_by([by(|n: &i64| n.signum())])
            .unwrap()
            .order_by_key(|e| e.key().cloned())
            .unwrap()
            .select(|e: Entry<i64>| e.into_group().map(|g| g.len()))
            .unwrap()
            .execute();
        let backward = Query::new()
            .select(|e: Entry<i64>| e.into_group().map(|g| g.len()))
            .unwrap()
            .order_by_key(|e| e.key().cloned())
            .unwrap()
            .group_by([by(|n: &i64| n.signum())])
            .unwrap()
            .where_(|n: &i64| *n != 0)
            .from(rows)
            .unwrap()
            .execute();
        prop_assert_eq!(forward, backward);
    }

    /// Property: a second FROM always fails, whatever came in between.
    #[test]
    fn duplicate_from_always_fails(first in rows_strategy(10), second in rows_strategy(10), filters in 0usize..4usize) {
        let mut query = Query::new().from(first).unwrap();
        for _ in 0..filters {
            query = query.where_(|n: &i64| *n > 0);
        }
        let err = query.from(second).unwrap_err();
        prop_assert_eq!(err.clause(), Clause::From);
    }
}
