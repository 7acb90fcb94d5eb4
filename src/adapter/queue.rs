use crate::adapter::{check_capacity, DEFAULT_CAPACITY};
use crate::error::{Error, Result};
use crate::sequence::{AnySequence, Sequence, SequenceKind};
use log::debug;
use std::fmt;

/// A first-in, first-out queue backed by a sequence.
///
/// Items enter at the front of the backing sequence and leave from its back.
///
/// # Examples
///
/// ```
/// use keyed_collections::adapter::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(0);
/// queue.enqueue(1);
///
/// assert_eq!(queue.peek_front(), Some(&0));
/// assert_eq!(queue.peek_back(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(0));
/// assert_eq!(queue.len(), 1);
/// ```
pub struct Queue<T> {
    list: AnySequence<T>,
}

impl<T> Queue<T> {
    /// Constructs a new, empty `Queue<T>` backed by a doubly linked list.
    pub fn new() -> Self {
        Self::with_kind(SequenceKind::default())
    }

    /// Constructs a new, empty `Queue<T>` backed by a sequence of the given kind.
    pub fn with_kind(kind: SequenceKind) -> Self {
        Queue { list: kind.build() }
    }

    pub fn kind(&self) -> SequenceKind {
        self.list.kind()
    }

    pub fn enqueue(&mut self, item: T) {
        self.list.push_front(item);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Returns the item that would be dequeued next.
    pub fn peek_front(&self) -> Option<&T> {
        self.list.last()
    }

    /// Returns the item that was enqueued most recently.
    pub fn peek_back(&self) -> Option<&T> {
        self.list.first()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for Queue<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Queue<T>) -> bool {
        self.list == other.list
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.list).finish()
    }
}

/// A `Queue<T>` that holds at most a fixed number of items.
///
/// # Examples
///
/// ```
/// use keyed_collections::adapter::BoundedQueue;
/// use keyed_collections::error::Error;
///
/// let mut queue = BoundedQueue::with_capacity(2).unwrap();
/// queue.enqueue('a').unwrap();
/// queue.enqueue('b').unwrap();
/// assert_eq!(queue.enqueue('c'), Err(Error::Full { capacity: 2 }));
/// assert_eq!(queue.dequeue(), Some('a'));
/// ```
pub struct BoundedQueue<T> {
    queue: Queue<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Constructs a new, empty `BoundedQueue<T>` with the default capacity.
    pub fn new() -> Self {
        BoundedQueue {
            queue: Queue::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Constructs a new, empty `BoundedQueue<T>` that holds at most `capacity` items. Returns
    /// `Error::InvalidCapacity` if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_kind_and_capacity(SequenceKind::default(), capacity)
    }

    /// Constructs a new, empty `BoundedQueue<T>` backed by a sequence of the given kind.
    pub fn with_kind_and_capacity(kind: SequenceKind, capacity: usize) -> Result<Self> {
        Ok(BoundedQueue {
            queue: Queue::with_kind(kind),
            capacity: check_capacity(capacity)?,
        })
    }

    /// Adds an item to the queue. Returns `Error::Full` if the queue is already full.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            debug!("rejected enqueue onto full queue of capacity {}", self.capacity);
            return Err(Error::Full {
                capacity: self.capacity,
            });
        }
        self.queue.enqueue(item);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.queue.peek_front()
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.queue.peek_back()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.queue.len() == self.capacity
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for BoundedQueue<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &BoundedQueue<T>) -> bool {
        self.capacity == other.capacity && self.queue == other.queue
    }
}

impl<T> fmt::Debug for BoundedQueue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("items", &self.queue.list)
            .finish()
    }
}
