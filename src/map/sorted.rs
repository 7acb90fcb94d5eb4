use crate::entry::Entry;
use crate::map::Map;
use crate::sequence::{ArrayList, Sequence};
use std::cmp::Ordering;
use std::fmt;

/// A map that keeps its entries in an `ArrayList` sorted by key.
///
/// Lookups binary search the array and take logarithmic time. Insertions and removals shift the
/// entries after the affected position, so they take linear time.
///
/// # Examples
///
/// ```
/// use keyed_collections::map::{Map, SortedMap};
///
/// let mut map = SortedMap::new();
/// map.put(3, "c");
/// map.put(1, "a");
/// map.put(2, "b");
///
/// let keys: Vec<u32> = map.iter().map(|entry| *entry.key()).collect();
/// assert_eq!(keys, vec![1, 2, 3]);
/// assert_eq!(map.min().map(|entry| *entry.value()), Some("a"));
/// assert_eq!(map.remove(&2).map(|entry| entry.into_parts()), Some((2, "b")));
/// ```
pub struct SortedMap<K, V> {
    list: ArrayList<Entry<K, V>>,
}

impl<K, V> SortedMap<K, V>
where
    K: Ord,
{
    /// Constructs a new, empty `SortedMap<K, V>`.
    pub fn new() -> Self {
        SortedMap {
            list: ArrayList::new(),
        }
    }

    /// Returns an iterator over the entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.list.iter()
    }

    /// Returns the entry with the least key.
    pub fn min(&self) -> Option<&Entry<K, V>> {
        self.list.first()
    }

    /// Returns the entry with the greatest key.
    pub fn max(&self) -> Option<&Entry<K, V>> {
        self.list.last()
    }

    pub fn clear(&mut self) {
        while self.list.pop_back().is_some() {}
    }

    // Returns `Ok` with the position of `key`, or `Err` with the position at which it would have
    // to be inserted to keep the array sorted.
    fn search(&self, key: &K) -> Result<usize, usize> {
        let entries = self.list.as_slice();
        let mut low = 0;
        let mut high = entries.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match entries[mid].key().cmp(key) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(low)
    }
}

impl<K, V> Map<K, V> for SortedMap<K, V>
where
    K: Ord,
{
    fn get(&self, key: &K) -> Option<&Entry<K, V>> {
        let index = self.search(key).ok()?;
        Some(&self.list[index])
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.search(key).ok()?;
        Some(self.list[index].value_mut())
    }

    fn put(&mut self, key: K, value: V) -> Option<Entry<K, V>> {
        match self.search(&key) {
            Ok(index) => self.list.replace(index, Entry::new(key, value)).ok(),
            Err(index) => {
                self.list
                    .insert(index, Entry::new(key, value))
                    .expect("Expected insertion index within bounds");
                None
            },
        }
    }

    fn remove(&mut self, key: &K) -> Option<Entry<K, V>> {
        let index = self.search(key).ok()?;
        self.list.remove(index).ok()
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<K, V> Default for SortedMap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for SortedMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("SortedMap").field(&self.list).finish()
    }
}
