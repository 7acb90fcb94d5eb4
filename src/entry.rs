//! Key-value pairs ordered by key.

use serde_derive::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A key-value pair whose ordering and equality only consider the key.
///
/// The key cannot change once the entry is constructed, but the value can be replaced.
///
/// # Examples
///
/// ```
/// use keyed_collections::entry::Entry;
///
/// let mut entry = Entry::new(1, "a");
/// assert_eq!(entry.set_value("b"), "a");
/// assert_eq!(entry.value(), &"b");
///
/// assert_eq!(Entry::new(1, "x"), Entry::new(1, "y"));
/// assert!(Entry::new(0, "x") < Entry::new(1, "x"));
/// assert_eq!(entry.to_string(), "(1, b)");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Constructs a new `Entry<K, V>`.
    pub fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value of the entry and returns the previous value.
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the entry and returns its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> Ord for Entry<K, V>
where
    K: Ord,
{
    fn cmp(&self, other: &Entry<K, V>) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, V> PartialOrd for Entry<K, V>
where
    K: Ord,
{
    fn partial_cmp(&self, other: &Entry<K, V>) -> Option<Ordering> {
        Some(self.key.cmp(&other.key))
    }
}

impl<K, V> PartialEq for Entry<K, V>
where
    K: Ord,
{
    fn eq(&self, other: &Entry<K, V>) -> bool {
        self.key == other.key
    }
}

impl<K, V> Eq for Entry<K, V> where K: Ord {}

impl<K, V> fmt::Display for Entry<K, V>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}
