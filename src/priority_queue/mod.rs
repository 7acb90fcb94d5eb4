//! Priority queues over key-value entries: a binary heap and two list-backed variants.
//!
//! Every priority queue is either a min or a max priority queue, fixed when the queue is
//! constructed. All variants decide which entry comes first through `Priority::has_priority`, so
//! they agree on ordering. Entries with equal keys never have priority over each other and the
//! order in which they are extracted is not specified.

mod heap;
mod sorted;
mod unsorted;

pub use self::heap::{Heap, HeapEntry};
pub use self::sorted::SortedPriorityQueue;
pub use self::unsorted::UnsortedPriorityQueue;

use crate::entry::Entry;
use serde_derive::{Deserialize, Serialize};

/// The direction in which a priority queue orders its keys.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Priority {
    /// Lesser keys are extracted first.
    Min,
    /// Greater keys are extracted first.
    Max,
}

impl Priority {
    /// Returns `true` if `a` must be extracted before `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_collections::priority_queue::Priority;
    ///
    /// assert!(Priority::Min.has_priority(&1, &2));
    /// assert!(Priority::Max.has_priority(&2, &1));
    /// assert!(!Priority::Min.has_priority(&1, &1));
    /// assert!(!Priority::Max.has_priority(&1, &1));
    /// ```
    pub fn has_priority<T>(self, a: &T, b: &T) -> bool
    where
        T: Ord + ?Sized,
    {
        match self {
            Priority::Min => a < b,
            Priority::Max => a > b,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Min
    }
}

/// The operations shared by every priority queue in this module.
pub trait PriorityQueue<K, V>
where
    K: Ord,
{
    /// Returns whether this is a min or a max priority queue.
    fn priority(&self) -> Priority;

    /// Inserts a key-value pair into the priority queue.
    fn insert(&mut self, key: K, value: V) {
        self.insert_entry(Entry::new(key, value));
    }

    /// Inserts an entry into the priority queue.
    fn insert_entry(&mut self, entry: Entry<K, V>);

    /// Returns the entry that would be removed next without removing it, or `None` if the queue
    /// is empty.
    fn get_priority(&self) -> Option<&Entry<K, V>>;

    /// Removes and returns the entry with the lowest key in a min priority queue or the highest
    /// key in a max priority queue. Returns `None` if the queue is empty.
    fn remove_priority(&mut self) -> Option<Entry<K, V>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `a` must be extracted before `b` in this priority queue.
    fn has_priority(&self, a: &Entry<K, V>, b: &Entry<K, V>) -> bool {
        self.priority().has_priority(a.key(), b.key())
    }
}

#[cfg(test)]
mod tests {
    use super::{Heap, Priority, PriorityQueue, SortedPriorityQueue, UnsortedPriorityQueue};
    use crate::entry::Entry;
    use serde_test::{assert_tokens, Token};

    fn drain<Q>(mut queue: Q) -> Vec<u32>
    where
        Q: PriorityQueue<u32, char>,
    {
        let mut keys = Vec::new();
        while let Some(entry) = queue.remove_priority() {
            keys.push(*entry.key());
        }
        keys
    }

    fn fill<Q>(queue: &mut Q)
    where
        Q: PriorityQueue<u32, char>,
    {
        for &key in &[5, 3, 8, 1, 4] {
            queue.insert(key, 'a');
        }
    }

    #[test]
    fn test_variants_agree_min() {
        let mut heap = Heap::new(Priority::Min);
        let mut sorted = SortedPriorityQueue::new(Priority::Min);
        let mut unsorted = UnsortedPriorityQueue::new(Priority::Min);
        fill(&mut heap);
        fill(&mut sorted);
        fill(&mut unsorted);

        assert_eq!(drain(heap), vec![1, 3, 4, 5, 8]);
        assert_eq!(drain(sorted), vec![1, 3, 4, 5, 8]);
        assert_eq!(drain(unsorted), vec![1, 3, 4, 5, 8]);
    }

    #[test]
    fn test_variants_agree_max() {
        let mut heap = Heap::new(Priority::Max);
        let mut sorted = SortedPriorityQueue::new(Priority::Max);
        let mut unsorted = UnsortedPriorityQueue::new(Priority::Max);
        fill(&mut heap);
        fill(&mut sorted);
        fill(&mut unsorted);

        assert_eq!(drain(heap), vec![8, 5, 4, 3, 1]);
        assert_eq!(drain(sorted), vec![8, 5, 4, 3, 1]);
        assert_eq!(drain(unsorted), vec![8, 5, 4, 3, 1]);
    }

    #[test]
    fn test_trait_object() {
        let mut queues: Vec<Box<dyn PriorityQueue<u32, char>>> = vec![
            Box::new(Heap::new(Priority::Max)),
            Box::new(SortedPriorityQueue::new(Priority::Max)),
            Box::new(UnsortedPriorityQueue::new(Priority::Max)),
        ];
        for queue in &mut queues {
            queue.insert(1, 'a');
            queue.insert(2, 'b');
            assert_eq!(queue.priority(), Priority::Max);
            assert_eq!(queue.get_priority().map(|entry| *entry.value()), Some('b'));
            assert_eq!(queue.len(), 2);
        }
    }

    #[test]
    fn test_has_priority_by_entry() {
        let min: Box<dyn PriorityQueue<u32, char>> = Box::new(Heap::new(Priority::Min));
        let max: Box<dyn PriorityQueue<u32, char>> = Box::new(Heap::new(Priority::Max));
        let low = Entry::new(1, 'z');
        let high = Entry::new(2, 'a');

        assert!(min.has_priority(&low, &high));
        assert!(!min.has_priority(&high, &low));
        assert!(max.has_priority(&high, &low));
        assert!(!max.has_priority(&low, &Entry::new(1, 'b')));
    }

    #[test]
    fn test_default_is_min() {
        assert_eq!(Priority::default(), Priority::Min);
    }

    #[test]
    fn test_priority_serde_tokens() {
        assert_tokens(
            &Priority::Max,
            &[Token::UnitVariant {
                name: "Priority",
                variant: "Max",
            }],
        );
    }
}
