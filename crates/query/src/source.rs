//! Query sources and the cross join.
//!
//! A single table is passed through untouched. Two or more tables are combined
//! into join tuples in nested-loop order: the first table varies slowest.
//!
//! ```text
//! [1, 2] x [4, 5]  =>  [(1, 4), (1, 5), (2, 4), (2, 5)]
//! ```

use alloc::vec;
use alloc::vec::Vec;

/// Something a query can read its rows from.
pub trait Source {
    /// The row type produced by this source.
    type Row;

    /// Returns the number of rows of each input table.
    fn table_sizes(&self) -> Vec<usize>;

    /// Materializes the rows.
    fn into_rows(self) -> Vec<Self::Row>;
}

impl<T> Source for Vec<T> {
    type Row = T;

    fn table_sizes(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn into_rows(self) -> Vec<T> {
        self
    }
}

impl<'s, T: Clone> Source for &'s [T] {
    type Row = T;

    fn table_sizes(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn into_rows(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<'s, T: Clone> Source for &'s Vec<T> {
    type Row = T;

    fn table_sizes(&self) -> Vec<usize> {
        vec![self.len()]
    }

    fn into_rows(self) -> Vec<T> {
        self.clone()
    }
}

impl<A: Clone, B: Clone> Source for (Vec<A>, Vec<B>) {
    type Row = (A, B);

    fn table_sizes(&self) -> Vec<usize> {
        vec![self.0.len(), self.1.len()]
    }

    fn into_rows(self) -> Vec<(A, B)> {
        let (left, right) = self;
        cross_product(&left, &right, |a, b| (a.clone(), b.clone()))
    }
}

impl<A: Clone, B: Clone, C: Clone> Source for (Vec<A>, Vec<B>, Vec<C>) {
    type Row = (A, B, C);

    fn table_sizes(&self) -> Vec<usize> {
        vec![self.0.len(), self.1.len(), self.2.len()]
    }

    fn into_rows(self) -> Vec<(A, B, C)> {
        let (a, b, c) = self;
        let ab = cross_product(&a, &b, |x, y| (x.clone(), y.clone()));
        cross_product(&ab, &c, |(x, y), z| (x.clone(), y.clone(), z.clone()))
    }
}

impl<A: Clone, B: Clone, C: Clone, D: Clone> Source for (Vec<A>, Vec<B>, Vec<C>, Vec<D>) {
    type Row = (A, B, C, D);

    fn table_sizes(&self) -> Vec<usize> {
        vec![self.0.len(), self.1.len(), self.2.len(), self.3.len()]
    }

    fn into_rows(self) -> Vec<(A, B, C, D)> {
        let (a, b, c, d) = self;
        let ab = cross_product(&a, &b, |x, y| (x.clone(), y.clone()));
        let abc = cross_product(&ab, &c, |(x, y), z| (x.clone(), y.clone(), z.clone()));
        cross_product(&abc, &d, |(x, y, z), w| {
            (x.clone(), y.clone(), z.clone(), w.clone())
        })
    }
}

/// Any number of tables of the same row type.
///
/// Rows are `Vec<T>` join tuples holding one value per table. Use a plain
/// `Vec<T>` source to read a single table without tuple wrapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tables<T>(pub Vec<Vec<T>>);

impl<T> Tables<T> {
    pub fn new(tables: Vec<Vec<T>>) -> Self {
        Self(tables)
    }
}

impl<T: Clone> Source for Tables<T> {
    type Row = Vec<T>;

    fn table_sizes(&self) -> Vec<usize> {
        self.0.iter().map(Vec::len).collect()
    }

    fn into_rows(self) -> Vec<Vec<T>> {
        cross_join(&self.0)
    }
}

/// Pairs every left row with every right row, left varying slowest.
pub fn cross_product<L, R, O, F>(left: &[L], right: &[R], output_fn: F) -> Vec<O>
where
    F: Fn(&L, &R) -> O,
{
    let mut results = Vec::with_capacity(left.len().saturating_mul(right.len()));

    for l in left {
        for r in right {
            results.push(output_fn(l, r));
        }
    }

    results
}

/// Computes the n-ary cartesian product of `tables` as join tuples.
///
/// No tables yields no tuples.
pub fn cross_join<T: Clone>(tables: &[Vec<T>]) -> Vec<Vec<T>> {
    let Some((first, rest)) = tables.split_first() else {
        return Vec::new();
    };

    let seed: Vec<Vec<T>> = first.iter().map(|row| vec![row.clone()]).collect();
    rest.iter().fold(seed, |tuples, table| {
        cross_product(&tuples, table, |tuple, row| {
            let mut next = Vec::with_capacity(tuple.len() + 1);
            next.extend(tuple.iter().cloned());
            next.push(row.clone());
            next
        })
    })
}
