use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::map::Map;
use crate::sequence::{LinkedList, Sequence};
use log::trace;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

const DEFAULT_TABLE_SIZE: usize = 10;

fn gen_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// A hash map with a fixed number of buckets that chains colliding entries in linked lists.
///
/// The table never grows, so operations run in time proportional to the length of a bucket,
/// which is `len / table_size` on average.
///
/// # Examples
///
/// ```
/// use keyed_collections::map::{HashMap, Map};
///
/// let mut map = HashMap::with_table_size(4).unwrap();
/// for key in 0..10 {
///     map.put(key, key * key);
/// }
///
/// assert_eq!(map.table_size(), 4);
/// assert_eq!(map.len(), 10);
/// assert_eq!(map.get(&3).map(|entry| *entry.value()), Some(9));
/// assert_eq!(map.remove(&3).map(|entry| entry.into_parts()), Some((3, 9)));
/// assert!(!map.contains_key(&3));
/// ```
pub struct HashMap<K, V> {
    table: Vec<LinkedList<Entry<K, V>>>,
    len: usize,
}

impl<K, V> HashMap<K, V>
where
    K: Hash + Eq,
{
    /// Constructs a new, empty `HashMap<K, V>` with the default table size.
    pub fn new() -> Self {
        HashMap {
            table: Self::empty_table(DEFAULT_TABLE_SIZE),
            len: 0,
        }
    }

    /// Constructs a new, empty `HashMap<K, V>` with `table_size` buckets. Returns
    /// `Error::InvalidCapacity` if `table_size` is zero.
    pub fn with_table_size(table_size: usize) -> Result<Self> {
        if table_size == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(HashMap {
            table: Self::empty_table(table_size),
            len: 0,
        })
    }

    /// Returns the number of buckets in the table.
    pub fn table_size(&self) -> usize {
        self.table.len()
    }

    /// Returns an iterator over the entries, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.table.iter().flat_map(|bucket| bucket.iter())
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.table {
            bucket.clear();
        }
        self.len = 0;
    }

    fn empty_table(table_size: usize) -> Vec<LinkedList<Entry<K, V>>> {
        (0..table_size).map(|_| LinkedList::new()).collect()
    }

    fn bucket_of(&self, key: &K) -> usize {
        (gen_hash(key) % self.table.len() as u64) as usize
    }

    fn locate(&self, key: &K) -> (usize, Option<usize>) {
        let bucket = self.bucket_of(key);
        let index = self.table[bucket]
            .iter()
            .position(|entry| entry.key() == key);
        (bucket, index)
    }
}

impl<K, V> Map<K, V> for HashMap<K, V>
where
    K: Hash + Eq,
{
    fn get(&self, key: &K) -> Option<&Entry<K, V>> {
        self.table[self.bucket_of(key)]
            .iter()
            .find(|entry| entry.key() == key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let (bucket, index) = self.locate(key);
        self.table[bucket]
            .get_mut(index?)
            .ok()
            .map(Entry::value_mut)
    }

    fn put(&mut self, key: K, value: V) -> Option<Entry<K, V>> {
        let (bucket, index) = self.locate(&key);
        trace!("putting key into bucket {} of {}", bucket, self.table.len());
        match index {
            Some(index) => self.table[bucket].replace(index, Entry::new(key, value)).ok(),
            None => {
                self.table[bucket].push_front(Entry::new(key, value));
                self.len += 1;
                None
            },
        }
    }

    fn remove(&mut self, key: &K) -> Option<Entry<K, V>> {
        let (bucket, index) = self.locate(key);
        let entry = self.table[bucket].remove(index?).ok()?;
        self.len -= 1;
        Some(entry)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<K, V> Default for HashMap<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for HashMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("len", &self.len)
            .field("table", &self.table)
            .finish()
    }
}
