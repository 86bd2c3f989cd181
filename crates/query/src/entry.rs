//! Result elements: rows and (possibly nested) groups.

use alloc::vec::Vec;
use relq_core::Key;

/// Members of a group.
///
/// The deepest grouping level holds the original rows; every shallower level
/// holds the groups produced by the next grouping function.
#[derive(Clone, Debug, PartialEq)]
pub enum Members<R, K = Key> {
    /// Leaf level: rows in input order.
    Rows(Vec<R>),
    /// Intermediate level: sub-groups in first-occurrence order.
    Groups(Vec<Group<R, K>>),
}

impl<R, K> Members<R, K> {
    /// Returns the number of direct members.
    pub fn len(&self) -> usize {
        match self {
            Members::Rows(rows) => rows.len(),
            Members::Groups(groups) => groups.len(),
        }
    }

    /// Returns true if there are no direct members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the rows if this is a leaf level.
    pub fn as_rows(&self) -> Option<&[R]> {
        match self {
            Members::Rows(rows) => Some(rows),
            Members::Groups(_) => None,
        }
    }

    /// Returns the sub-groups if this is an intermediate level.
    pub fn as_groups(&self) -> Option<&[Group<R, K>]> {
        match self {
            Members::Rows(_) => None,
            Members::Groups(groups) => Some(groups),
        }
    }
}

/// A (key, members) pair produced by grouping.
#[derive(Clone, Debug, PartialEq)]
pub struct Group<R, K = Key> {
    key: K,
    members: Members<R, K>,
}

impl<R, K> Group<R, K> {
    /// Creates a leaf group holding rows.
    pub fn leaf(key: impl Into<K>, rows: Vec<R>) -> Self {
        Self {
            key: key.into(),
            members: Members::Rows(rows),
        }
    }

    /// Creates an intermediate group holding sub-groups.
    pub fn nested(key: impl Into<K>, groups: Vec<Group<R, K>>) -> Self {
        Self {
            key: key.into(),
            members: Members::Groups(groups),
        }
    }

    pub(crate) fn from_parts(key: K, members: Members<R, K>) -> Self {
        Self { key, members }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn members(&self) -> &Members<R, K> {
        &self.members
    }

    /// Returns the number of direct members (rows or sub-groups).
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns true if the members are rows rather than sub-groups.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.members, Members::Rows(_))
    }

    /// Returns every row below this group, depth-first in group order.
    pub fn rows(&self) -> Vec<&R> {
        let mut out = Vec::new();
        self.collect_rows(&mut out);
        out
    }

    fn collect_rows<'g>(&'g self, out: &mut Vec<&'g R>) {
        match &self.members {
            Members::Rows(rows) => out.extend(rows.iter()),
            Members::Groups(groups) => {
                for group in groups {
                    group.collect_rows(out);
                }
            }
        }
    }

    /// Returns the number of rows below this group at any depth.
    pub fn row_count(&self) -> usize {
        match &self.members {
            Members::Rows(rows) => rows.len(),
            Members::Groups(groups) => groups.iter().map(Group::row_count).sum(),
        }
    }

    /// Consumes the group, returning its key and members.
    pub fn into_parts(self) -> (K, Members<R, K>) {
        (self.key, self.members)
    }
}

/// One element of the working result.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry<R, K = Key> {
    /// A row (or join tuple) when no grouping was registered.
    Row(R),
    /// A top-level group.
    Group(Group<R, K>),
}

impl<R, K> Entry<R, K> {
    pub fn as_row(&self) -> Option<&R> {
        match self {
            Entry::Row(row) => Some(row),
            Entry::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group<R, K>> {
        match self {
            Entry::Row(_) => None,
            Entry::Group(group) => Some(group),
        }
    }

    pub fn into_row(self) -> Option<R> {
        match self {
            Entry::Row(row) => Some(row),
            Entry::Group(_) => None,
        }
    }

    pub fn into_group(self) -> Option<Group<R, K>> {
        match self {
            Entry::Row(_) => None,
            Entry::Group(group) => Some(group),
        }
    }

    #[inline]
    pub fn is_group(&self) -> bool {
        matches!(self, Entry::Group(_))
    }

    /// Returns the group key, if this entry is a group.
    pub fn key(&self) -> Option<&K> {
        self.as_group().map(Group::key)
    }
}
