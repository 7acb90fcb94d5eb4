use crate::entry::Entry;
use crate::priority_queue::{Priority, PriorityQueue};
use crate::sequence::{LinkedList, Sequence};
use std::fmt;

/// A priority queue that stores its entries in insertion order in a `LinkedList`.
///
/// Insertion runs in O(1) while peeking and removal scan every entry in O(n). Among entries with
/// equal keys, the one inserted first is extracted first.
///
/// # Examples
///
/// ```
/// use keyed_collections::priority_queue::{Priority, PriorityQueue, UnsortedPriorityQueue};
///
/// let mut queue = UnsortedPriorityQueue::new(Priority::Min);
/// queue.insert(2, 'b');
/// queue.insert(1, 'a');
///
/// assert_eq!(queue.get_priority().map(|entry| *entry.value()), Some('a'));
/// assert_eq!(queue.len(), 2);
/// ```
pub struct UnsortedPriorityQueue<K, V> {
    list: LinkedList<Entry<K, V>>,
    priority: Priority,
}

impl<K, V> UnsortedPriorityQueue<K, V>
where
    K: Ord,
{
    /// Constructs a new, empty `UnsortedPriorityQueue<K, V>` ordered by `priority`.
    pub fn new(priority: Priority) -> Self {
        UnsortedPriorityQueue {
            list: LinkedList::new(),
            priority,
        }
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.list.iter()
    }

    fn find_priority(&self) -> Option<(usize, &Entry<K, V>)> {
        let mut entries = self.list.iter().enumerate();
        let mut best = entries.next()?;
        for (index, entry) in entries {
            if self.has_priority(entry, best.1) {
                best = (index, entry);
            }
        }
        Some(best)
    }
}

impl<K, V> PriorityQueue<K, V> for UnsortedPriorityQueue<K, V>
where
    K: Ord,
{
    fn priority(&self) -> Priority {
        self.priority
    }

    fn insert_entry(&mut self, entry: Entry<K, V>) {
        self.list.push_back(entry);
    }

    fn get_priority(&self) -> Option<&Entry<K, V>> {
        self.find_priority().map(|(_, entry)| entry)
    }

    fn remove_priority(&mut self) -> Option<Entry<K, V>> {
        let index = self.find_priority()?.0;
        self.list.remove(index).ok()
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<K, V> Default for UnsortedPriorityQueue<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new(Priority::Min)
    }
}

impl<K, V> fmt::Debug for UnsortedPriorityQueue<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UnsortedPriorityQueue")
            .field("priority", &self.priority)
            .field("entries", &self.list)
            .finish()
    }
}
