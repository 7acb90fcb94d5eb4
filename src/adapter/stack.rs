use crate::adapter::{check_capacity, DEFAULT_CAPACITY};
use crate::error::{Error, Result};
use crate::sequence::{AnySequence, Sequence, SequenceKind};
use log::debug;
use std::fmt;

/// A last-in, first-out stack backed by a sequence.
///
/// Items are pushed onto and popped from the front of the backing sequence.
///
/// # Examples
///
/// ```
/// use keyed_collections::adapter::Stack;
/// use keyed_collections::sequence::SequenceKind;
///
/// let mut stack = Stack::with_kind(SequenceKind::SinglyLinkedList);
/// stack.push(0);
/// stack.push(1);
///
/// assert_eq!(stack.peek(), Some(&1));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), Some(0));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T> {
    list: AnySequence<T>,
}

impl<T> Stack<T> {
    /// Constructs a new, empty `Stack<T>` backed by a doubly linked list.
    pub fn new() -> Self {
        Self::with_kind(SequenceKind::default())
    }

    /// Constructs a new, empty `Stack<T>` backed by a sequence of the given kind.
    pub fn with_kind(kind: SequenceKind) -> Self {
        Stack { list: kind.build() }
    }

    pub fn kind(&self) -> SequenceKind {
        self.list.kind()
    }

    pub fn push(&mut self, item: T) {
        self.list.push_front(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.first()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for Stack<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Stack<T>) -> bool {
        self.list == other.list
    }
}

impl<T> fmt::Debug for Stack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Stack").field(&self.list).finish()
    }
}

/// A `Stack<T>` that holds at most a fixed number of items.
///
/// # Examples
///
/// ```
/// use keyed_collections::adapter::BoundedStack;
/// use keyed_collections::error::Error;
///
/// let mut stack = BoundedStack::with_capacity(1).unwrap();
/// assert_eq!(stack.push(0), Ok(()));
/// assert_eq!(stack.push(1), Err(Error::Full { capacity: 1 }));
/// assert!(stack.is_full());
/// ```
pub struct BoundedStack<T> {
    stack: Stack<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Constructs a new, empty `BoundedStack<T>` with the default capacity.
    pub fn new() -> Self {
        BoundedStack {
            stack: Stack::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Constructs a new, empty `BoundedStack<T>` that holds at most `capacity` items. Returns
    /// `Error::InvalidCapacity` if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_kind_and_capacity(SequenceKind::default(), capacity)
    }

    /// Constructs a new, empty `BoundedStack<T>` backed by a sequence of the given kind.
    pub fn with_kind_and_capacity(kind: SequenceKind, capacity: usize) -> Result<Self> {
        Ok(BoundedStack {
            stack: Stack::with_kind(kind),
            capacity: check_capacity(capacity)?,
        })
    }

    /// Pushes an item onto the stack. Returns `Error::Full` and drops nothing if the stack is
    /// already full.
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            debug!("rejected push onto full stack of capacity {}", self.capacity);
            return Err(Error::Full {
                capacity: self.capacity,
            });
        }
        self.stack.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.stack.peek()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.stack.len() == self.capacity
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for BoundedStack<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &BoundedStack<T>) -> bool {
        self.capacity == other.capacity && self.stack == other.stack
    }
}

impl<T> fmt::Debug for BoundedStack<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.capacity)
            .field("items", &self.stack.list)
            .finish()
    }
}
