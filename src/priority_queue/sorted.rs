use crate::entry::Entry;
use crate::priority_queue::{Priority, PriorityQueue};
use crate::sequence::{LinkedList, Sequence};
use std::fmt;

/// A priority queue that keeps its entries sorted by priority in a `LinkedList`.
///
/// Insertion runs in O(n) while peeking and removal run in O(1). Entries with equal keys are
/// extracted in the order they were inserted.
///
/// # Examples
///
/// ```
/// use keyed_collections::priority_queue::{Priority, PriorityQueue, SortedPriorityQueue};
///
/// let mut queue = SortedPriorityQueue::new(Priority::Max);
/// queue.insert(1, 'a');
/// queue.insert(3, 'c');
/// queue.insert(2, 'b');
///
/// assert_eq!(queue.remove_priority().map(|entry| *entry.value()), Some('c'));
/// assert_eq!(queue.remove_priority().map(|entry| *entry.value()), Some('b'));
/// ```
pub struct SortedPriorityQueue<K, V> {
    list: LinkedList<Entry<K, V>>,
    priority: Priority,
}

impl<K, V> SortedPriorityQueue<K, V>
where
    K: Ord,
{
    /// Constructs a new, empty `SortedPriorityQueue<K, V>` ordered by `priority`.
    pub fn new(priority: Priority) -> Self {
        SortedPriorityQueue {
            list: LinkedList::new(),
            priority,
        }
    }

    /// Returns an iterator over the entries in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.list.iter()
    }
}

impl<K, V> PriorityQueue<K, V> for SortedPriorityQueue<K, V>
where
    K: Ord,
{
    fn priority(&self) -> Priority {
        self.priority
    }

    fn insert_entry(&mut self, entry: Entry<K, V>) {
        let priority = self.priority;
        let goes_last = self
            .list
            .last()
            .map_or(true, |last| !priority.has_priority(entry.key(), last.key()));
        if goes_last {
            self.list.push_back(entry);
            return;
        }

        let index = self
            .list
            .iter()
            .position(|other| priority.has_priority(entry.key(), other.key()))
            .expect("Expected an entry with lower priority");
        self.list
            .insert(index, entry)
            .expect("Expected insertion index within bounds");
    }

    fn get_priority(&self) -> Option<&Entry<K, V>> {
        self.list.first()
    }

    fn remove_priority(&mut self) -> Option<Entry<K, V>> {
        self.list.pop_front()
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<K, V> Default for SortedPriorityQueue<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new(Priority::Min)
    }
}

impl<K, V> fmt::Debug for SortedPriorityQueue<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SortedPriorityQueue")
            .field("priority", &self.priority)
            .field("entries", &self.list)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SortedPriorityQueue;
    use crate::priority_queue::{Priority, PriorityQueue};

    #[test]
    fn test_kept_sorted() {
        let mut queue = SortedPriorityQueue::new(Priority::Min);
        for &key in &[4, 1, 3, 5, 2] {
            queue.insert(key, ());
        }
        let keys: Vec<u32> = queue.iter().map(|entry| *entry.key()).collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_equal_keys_fifo() {
        let mut queue = SortedPriorityQueue::new(Priority::Max);
        queue.insert(1, 'a');
        queue.insert(2, 'b');
        queue.insert(1, 'c');
        queue.insert(2, 'd');
        let values: Vec<char> = queue.iter().map(|entry| *entry.value()).collect();
        assert_eq!(values, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_empty_returns_none() {
        let mut queue: SortedPriorityQueue<u32, u32> = SortedPriorityQueue::default();
        assert!(queue.get_priority().is_none());
        assert!(queue.remove_priority().is_none());
        assert!(queue.is_empty());
    }
}
