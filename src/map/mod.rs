//! Key-value maps over `Entry<K, V>`: a linear-scan list, a sorted array and a chained hash table.
//!
//! Every map holds at most one entry per key. Putting a key that is already present replaces the
//! old entry and hands it back, so the three variants agree on contents for any sequence of
//! operations.

mod hash;
mod sorted;
mod unsorted;

pub use self::hash::HashMap;
pub use self::sorted::SortedMap;
pub use self::unsorted::UnsortedMap;

use crate::entry::Entry;

/// The operations shared by every map in this module.
pub trait Map<K, V> {
    /// Returns the entry stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &K) -> Option<&Entry<K, V>>;

    /// Returns a mutable reference to the value stored under `key`.
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Inserts a key-value pair into the map. If the key already exists, its entry is replaced
    /// and the old entry is returned.
    fn put(&mut self, key: K, value: V) -> Option<Entry<K, V>>;

    /// Removes and returns the entry stored under `key`, or `None` if the key is absent.
    fn remove(&mut self, key: &K) -> Option<Entry<K, V>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}
