use crate::error::Result;
use crate::sequence::{check_index, check_insert_index, Sequence};
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list of boxed nodes.
///
/// Operations on the front run in constant time. Every other positional operation, including
/// those on the back of the list, walks from the front.
///
/// # Examples
///
/// ```
/// use keyed_collections::sequence::{Sequence, SinglyLinkedList};
///
/// let mut list = SinglyLinkedList::new();
/// list.push_front(1);
/// list.push_front(0);
/// list.push_back(2);
///
/// assert_eq!(list.last(), Some(&2));
/// assert_eq!(list.pop_front(), Some(0));
/// assert_eq!(list.len(), 2);
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Constructs a new, empty `SinglyLinkedList<T>`.
    pub fn new() -> Self {
        SinglyLinkedList { head: None, len: 0 }
    }

    /// Returns an iterator over the list from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_ref().map(|node| &**node),
            remaining: self.len,
        }
    }

    // Assumes `index < len`.
    fn node_at(&self, index: usize) -> &Node<T> {
        let mut curr = self.head.as_ref().expect("Expected non-empty list");
        for _ in 0..index {
            curr = curr.next.as_ref().expect("Expected next node");
        }
        curr
    }

    // Assumes `index < len`.
    fn node_at_mut(&mut self, index: usize) -> &mut Node<T> {
        let mut curr = self.head.as_mut().expect("Expected non-empty list");
        for _ in 0..index {
            curr = curr.next.as_mut().expect("Expected next node");
        }
        curr
    }
}

impl<T> Sequence<T> for SinglyLinkedList<T> {
    fn push_front(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value: item, next }));
        self.len += 1;
    }

    fn push_back(&mut self, item: T) {
        if self.len == 0 {
            return self.push_front(item);
        }
        let len = self.len;
        self.node_at_mut(len - 1).next = Some(Box::new(Node {
            value: item,
            next: None,
        }));
        self.len += 1;
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        check_insert_index(index, self.len)?;
        if index == 0 {
            self.push_front(item);
        } else {
            let prev = self.node_at_mut(index - 1);
            let next = prev.next.take();
            prev.next = Some(Box::new(Node { value: item, next }));
            self.len += 1;
        }
        Ok(())
    }

    fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    fn last(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            Some(&self.node_at(self.len - 1).value)
        }
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.len)?;
        Ok(&self.node_at(index).value)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.len)?;
        Ok(&mut self.node_at_mut(index).value)
    }

    fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.remove(self.len - 1).ok()
        }
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        if index == 0 {
            return Ok(self.pop_front().expect("Expected non-empty list"));
        }
        let prev = self.node_at_mut(index - 1);
        let removed = prev.next.take().expect("Expected next node");
        let Node { value, next } = *removed;
        prev.next = next;
        self.len -= 1;
        Ok(value)
    }

    fn replace(&mut self, index: usize, item: T) -> Result<T> {
        Ok(std::mem::replace(self.get_mut(index)?, item))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|other| other == item)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for SinglyLinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &SinglyLinkedList<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> fmt::Debug for SinglyLinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator for `SinglyLinkedList<T>`.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_ref().map(|next| &**next);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
