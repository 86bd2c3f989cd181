//! Callback types accepted by query clauses.

use crate::entry::{Entry, Group};
use alloc::boxed::Box;
use core::cmp::Ordering;

/// Row filter used by `where`.
pub type Predicate<'a, R> = Box<dyn Fn(&R) -> bool + 'a>;

/// Grouping function used by `group_by`.
pub type KeyFn<'a, R, K> = Box<dyn Fn(&R) -> K + 'a>;

/// Group filter used by `having`.
pub type GroupPredicate<'a, R, K> = Box<dyn Fn(&Group<R, K>) -> bool + 'a>;

/// Ordering used by `order_by`.
pub type Comparator<'a, R, K> = Box<dyn Fn(&Entry<R, K>, &Entry<R, K>) -> Ordering + 'a>;

/// Projection used by `select`.
pub type Selector<'a, R, K, O> = Box<dyn Fn(Entry<R, K>) -> O + 'a>;

/// Boxes a closure into a row predicate.
///
/// ```rust
/// use relq_query::{pred, Query};
///
/// let rows = Query::new()
///     .from(vec![1, 2, 3, 4, 5, 6, 7, 8, 9])?
///     .where_any([pred(|n: &i32| *n < 3), pred(|n: &i32| *n > 4)])
///     .execute();
/// assert_eq!(rows.len(), 7);
/// # Ok::<(), relq_query::Error>(())
/// ```
pub fn pred<'a, R, F>(predicate: F) -> Predicate<'a, R>
where
    F: Fn(&R) -> bool + 'a,
{
    Box::new(predicate)
}

/// Boxes a closure into a grouping function.
///
/// The closure may return anything convertible into the query's key type.
pub fn by<'a, R, K, V, F>(key_fn: F) -> KeyFn<'a, R, K>
where
    F: Fn(&R) -> V + 'a,
    V: Into<K>,
{
    Box::new(move |row: &R| key_fn(row).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relq_core::Key;

    #[test]
    fn test_pred_boxes_closure() {
        let limit = 3;
        let p: Predicate<'_, i32> = pred(|n: &i32| *n < limit);
        assert!(p(&2));
        assert!(!p(&3));
    }

    #[test]
    fn test_by_converts_key() {
        let parity: KeyFn<'_, i32, Key> = by(|n: &i32| if n % 2 == 0 { "even" } else { "odd" });
        assert_eq!(parity(&4), Key::from("even"));
        assert_eq!(parity(&7), Key::from("odd"));

        let raw: KeyFn<'_, i32, i32> = by(|n: &i32| n % 3);
        assert_eq!(raw(&7), 1);
    }
}
