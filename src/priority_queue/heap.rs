use crate::entry::Entry;
use crate::priority_queue::{Priority, PriorityQueue};
use crate::sequence::{ArrayList, GrowthPolicy, Sequence};
use log::trace;
use std::ops::Deref;
use std::slice;

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// An entry stored in a `Heap<K, V>` together with its current position in the heap.
///
/// The position is updated every time the heap moves the entry, so `heap.iter().nth(i)` always
/// yields the entry whose `index()` is `i`.
#[derive(Debug)]
pub struct HeapEntry<K, V> {
    entry: Entry<K, V>,
    index: usize,
}

impl<K, V> HeapEntry<K, V> {
    /// Returns the position of the entry in the backing array of the heap.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entry(&self) -> &Entry<K, V> {
        &self.entry
    }

    pub fn into_entry(self) -> Entry<K, V> {
        self.entry
    }
}

impl<K, V> Deref for HeapEntry<K, V> {
    type Target = Entry<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.entry
    }
}

/// A priority queue implemented as a binary heap stored in an `ArrayList`.
///
/// The parent of the entry at position `i` is at `(i - 1) / 2` and its children are at `2i + 1`
/// and `2i + 2`. Every entry is never preceded by its children in priority order, so the root at
/// position 0 is always the entry with the lowest key in a min heap and the highest key in a max
/// heap. Each entry tracks its own position, which is kept in sync with the array on every swap.
///
/// Insertion and removal run in O(log n) and peeking at the root runs in O(1).
///
/// # Examples
///
/// ```
/// use keyed_collections::priority_queue::{Heap, Priority, PriorityQueue};
///
/// let mut heap = Heap::new(Priority::Min);
/// heap.insert(5, "five");
/// heap.insert(1, "one");
/// heap.insert(3, "three");
///
/// assert_eq!(heap.len(), 3);
/// assert_eq!(heap.get_priority().map(|entry| *entry.key()), Some(1));
///
/// let entry = heap.remove_priority().unwrap();
/// assert_eq!(entry.into_parts(), (1, "one"));
/// assert_eq!(heap.remove_priority().map(|entry| *entry.key()), Some(3));
/// ```
pub struct Heap<K, V> {
    list: ArrayList<HeapEntry<K, V>>,
    priority: Priority,
}

impl<K, V> Heap<K, V>
where
    K: Ord,
{
    /// Constructs a new, empty `Heap<K, V>` ordered by `priority`.
    pub fn new(priority: Priority) -> Self {
        Self::with_capacity(priority, 1)
    }

    /// Constructs a new, empty min heap.
    pub fn min() -> Self {
        Self::new(Priority::Min)
    }

    /// Constructs a new, empty max heap.
    pub fn max() -> Self {
        Self::new(Priority::Max)
    }

    /// Constructs a new, empty `Heap<K, V>` with room for `capacity` entries before resizing.
    pub fn with_capacity(priority: Priority, capacity: usize) -> Self {
        Heap {
            list: ArrayList::with_capacity(capacity, GrowthPolicy::Double),
            priority,
        }
    }

    /// Returns an iterator over the entries of the heap in array order.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_collections::priority_queue::{Heap, PriorityQueue};
    ///
    /// let mut heap = Heap::max();
    /// heap.insert(1, ());
    /// heap.insert(2, ());
    ///
    /// let keys: Vec<(usize, u32)> = heap.iter().map(|entry| (entry.index(), *entry.key())).collect();
    /// assert_eq!(keys, vec![(0, 2), (1, 1)]);
    /// ```
    pub fn iter(&self) -> slice::Iter<'_, HeapEntry<K, V>> {
        self.list.iter()
    }

    /// Removes every entry from the heap.
    pub fn clear(&mut self) {
        while self.list.pop_back().is_some() {}
    }

    fn is_out_of_bounds(&self, index: usize) -> bool {
        index >= self.list.len()
    }

    fn has_priority_at(&self, a: usize, b: usize) -> bool {
        PriorityQueue::has_priority(self, &self.list[a].entry, &self.list[b].entry)
    }

    fn has_same_key_at(&self, a: usize, b: usize) -> bool {
        self.list[a].entry.key() == self.list[b].entry.key()
    }

    // Exchanges the entries tracked at positions `a` and `b`. Both the array slots and the
    // positions recorded in the entries change together.
    fn swap(&mut self, a: usize, b: usize) {
        if self.is_out_of_bounds(a) || self.is_out_of_bounds(b) {
            panic!("Error: cannot swap heap entries that are out of bounds.");
        }
        let index_a = self.list[a].index;
        let index_b = self.list[b].index;
        if index_a != a || index_b != b {
            panic!("Error: heap entry index is stale.");
        }
        self.list[a].index = index_b;
        self.list[b].index = index_a;
        self.list
            .swap(a, b)
            .expect("Error: cannot swap heap entries that are out of bounds.");
    }

    fn up_heap(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.has_priority_at(index, parent) {
                break;
            }
            trace!("moving heap entry up from {} to {}", index, parent);
            self.swap(index, parent);
            index = parent;
        }
    }

    fn down_heap(&mut self, mut index: usize) {
        loop {
            let left = left_child(index);
            let right = right_child(index);
            let has_left = !self.is_out_of_bounds(left);
            let has_right = !self.is_out_of_bounds(right);

            let child = match (has_left, has_right) {
                (false, false) => break,
                (true, false) if self.has_priority_at(left, index) => left,
                (false, true) if self.has_priority_at(right, index) => right,
                (true, true) => {
                    // The left child wins ties between the two children.
                    if self.has_priority_at(left, index)
                        && (self.has_priority_at(left, right) || self.has_same_key_at(left, right))
                    {
                        left
                    } else if self.has_priority_at(right, index) && self.has_priority_at(right, left) {
                        right
                    } else {
                        break;
                    }
                },
                _ => break,
            };

            trace!("moving heap entry down from {} to {}", index, child);
            self.swap(index, child);
            index = child;
        }
    }
}

impl<K, V> PriorityQueue<K, V> for Heap<K, V>
where
    K: Ord,
{
    fn priority(&self) -> Priority {
        self.priority
    }

    fn insert_entry(&mut self, entry: Entry<K, V>) {
        let index = self.list.len();
        self.list.push_back(HeapEntry { entry, index });
        self.up_heap(index);
    }

    fn get_priority(&self) -> Option<&Entry<K, V>> {
        self.list.first().map(|heap_entry| &heap_entry.entry)
    }

    fn remove_priority(&mut self) -> Option<Entry<K, V>> {
        match self.list.len() {
            0 => None,
            1 => self.list.pop_back().map(HeapEntry::into_entry),
            len => {
                self.swap(0, len - 1);
                let root = self.list.pop_back().map(HeapEntry::into_entry);
                self.down_heap(0);
                root
            },
        }
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<K, V> Default for Heap<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::min()
    }
}

impl<'a, K, V> IntoIterator for &'a Heap<K, V>
where
    K: Ord,
{
    type IntoIter = slice::Iter<'a, HeapEntry<K, V>>;
    type Item = &'a HeapEntry<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
