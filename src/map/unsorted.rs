use crate::entry::Entry;
use crate::map::Map;
use crate::sequence::{LinkedList, Sequence};
use std::fmt;

/// A map that keeps its entries in a linked list in no particular order.
///
/// New keys are linked at the front of the list, and every lookup scans the list, so `get`,
/// `put` and `remove` all run in linear time. Keys only need to be comparable for equality.
///
/// # Examples
///
/// ```
/// use keyed_collections::map::{Map, UnsortedMap};
///
/// let mut map = UnsortedMap::new();
/// map.put("b", 2);
/// map.put("a", 1);
///
/// assert_eq!(map.get(&"a").map(|entry| *entry.value()), Some(1));
/// assert_eq!(map.remove(&"b").map(|entry| entry.into_parts()), Some(("b", 2)));
/// assert_eq!(map.len(), 1);
/// ```
pub struct UnsortedMap<K, V> {
    list: LinkedList<Entry<K, V>>,
}

impl<K, V> UnsortedMap<K, V>
where
    K: Eq,
{
    /// Constructs a new, empty `UnsortedMap<K, V>`.
    pub fn new() -> Self {
        UnsortedMap {
            list: LinkedList::new(),
        }
    }

    /// Returns an iterator over the entries, most recently added key first.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.list.iter()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    fn position_of(&self, key: &K) -> Option<usize> {
        self.list.iter().position(|entry| entry.key() == key)
    }
}

impl<K, V> Map<K, V> for UnsortedMap<K, V>
where
    K: Eq,
{
    fn get(&self, key: &K) -> Option<&Entry<K, V>> {
        self.list.iter().find(|entry| entry.key() == key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.position_of(key)?;
        self.list.get_mut(index).ok().map(Entry::value_mut)
    }

    fn put(&mut self, key: K, value: V) -> Option<Entry<K, V>> {
        match self.position_of(&key) {
            Some(index) => self.list.replace(index, Entry::new(key, value)).ok(),
            None => {
                self.list.push_front(Entry::new(key, value));
                None
            },
        }
    }

    fn remove(&mut self, key: &K) -> Option<Entry<K, V>> {
        let index = self.position_of(key)?;
        self.list.remove(index).ok()
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<K, V> Default for UnsortedMap<K, V>
where
    K: Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for UnsortedMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("UnsortedMap").field(&self.list).finish()
    }
}
