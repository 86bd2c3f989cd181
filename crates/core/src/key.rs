//! Grouping key values.
//!
//! `Key` is the default key type of a query. Grouping functions of different
//! levels usually produce different primitive kinds (a profession string, then
//! an age number), so the key is a small dynamic value compared by value.

use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A primitive value produced by a grouping function.
#[derive(Clone, Debug)]
pub enum Key {
    /// Null key
    Null,
    /// Boolean key
    Boolean(bool),
    /// 64-bit signed integer key
    Int64(i64),
    /// 64-bit floating point key
    Float64(f64),
    /// UTF-8 string key
    String(String),
}

impl Key {
    /// Returns true if this key is Null.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Key::Null)
    }

    /// Returns the boolean value if this is a Boolean, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Key::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the i64 value if this is an Int64, None otherwise.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Key::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the f64 value if this is a Float64, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Key::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Returns a type ordering value for comparing different kinds.
    fn type_order(&self) -> u8 {
        match self {
            Key::Null => 0,
            Key::Boolean(_) => 1,
            Key::Int64(_) => 2,
            Key::Float64(_) => 3,
            Key::String(_) => 4,
        }
    }
}

/// Maps every zero to the bits of `0.0` and every NaN to one canonical NaN,
/// so that equal floats hash equally.
#[inline]
fn canonical_bits(f: f64) -> u64 {
    if f.is_nan() {
        f64::NAN.to_bits()
    } else if f == 0.0 {
        0.0f64.to_bits()
    } else {
        f.to_bits()
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    // NaN sorts after every other float
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Null, Key::Null) => true,
            (Key::Boolean(a), Key::Boolean(b)) => a == b,
            (Key::Int64(a), Key::Int64(b)) => a == b,
            (Key::Float64(a), Key::Float64(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Key::String(a), Key::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Key::Null => {}
            Key::Boolean(b) => b.hash(state),
            Key::Int64(i) => i.hash(state),
            Key::Float64(f) => canonical_bits(*f).hash(state),
            Key::String(s) => s.hash(state),
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Null, Key::Null) => Ordering::Equal,
            (Key::Boolean(a), Key::Boolean(b)) => a.cmp(b),
            (Key::Int64(a), Key::Int64(b)) => a.cmp(b),
            (Key::Float64(a), Key::Float64(b)) => cmp_f64(*a, *b),
            // Mixed numerics compare by value; ties keep integers first so
            // that ordering stays consistent with equality.
            (Key::Int64(a), Key::Float64(b)) => {
                cmp_f64(*a as f64, *b).then(Ordering::Less)
            }
            (Key::Float64(a), Key::Int64(b)) => {
                cmp_f64(*a, *b as f64).then(Ordering::Greater)
            }
            (Key::String(a), Key::String(b)) => a.cmp(b),
            _ => self.type_order().cmp(&other.type_order()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => f.write_str("null"),
            Key::Boolean(b) => write!(f, "{}", b),
            Key::Int64(i) => write!(f, "{}", i),
            Key::Float64(v) => write!(f, "{}", v),
            Key::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Key {
    fn from(v: bool) -> Self {
        Key::Boolean(v)
    }
}

impl From<i32> for Key {
    fn from(v: i32) -> Self {
        Key::Int64(v as i64)
    }
}

impl From<u32> for Key {
    fn from(v: u32) -> Self {
        Key::Int64(v as i64)
    }
}

impl From<i64> for Key {
    fn from(v: i64) -> Self {
        Key::Int64(v)
    }
}

impl From<f64> for Key {
    fn from(v: f64) -> Self {
        Key::Float64(v)
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::String(v)
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::String(v.to_string())
    }
}

impl<T> From<Option<T>> for Key
where
    T: Into<Key>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Key::Null,
        }
    }
}
