use crate::arena::{Arena, Handle};
use crate::error::Result;
use crate::sequence::{check_index, check_insert_index, Sequence};
use std::fmt;

struct Node<T> {
    value: T,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// A doubly linked list whose nodes are stored in an `Arena` and linked by handles.
///
/// Operations on either end run in constant time. Positional operations walk from whichever end
/// is closer to the position.
///
/// # Examples
///
/// ```
/// use keyed_collections::sequence::{LinkedList, Sequence};
///
/// let mut list = LinkedList::new();
/// list.push_back(1);
/// list.push_front(0);
/// list.push_back(2);
///
/// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&0, &1, &2]);
/// assert_eq!(list.remove(1), Ok(1));
/// assert_eq!(list.pop_back(), Some(2));
/// ```
pub struct LinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<Handle>,
    tail: Option<Handle>,
}

impl<T> LinkedList<T> {
    /// Constructs a new, empty `LinkedList<T>`.
    pub fn new() -> Self {
        LinkedList {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Returns an iterator over the list from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.nodes.len(),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    // Assumes `index < len`.
    fn handle_at(&self, index: usize) -> Handle {
        let len = self.nodes.len();
        if index < len / 2 {
            let mut curr = self.head.expect("Expected non-empty list");
            for _ in 0..index {
                curr = self.nodes[curr].next.expect("Expected next node");
            }
            curr
        } else {
            let mut curr = self.tail.expect("Expected non-empty list");
            for _ in index..len - 1 {
                curr = self.nodes[curr].prev.expect("Expected previous node");
            }
            curr
        }
    }

    fn link_before(&mut self, next: Handle, value: T) {
        let prev = self.nodes[next].prev;
        let handle = self.nodes.allocate(Node {
            value,
            prev,
            next: Some(next),
        });
        self.nodes[next].prev = Some(handle);
        match prev {
            Some(prev) => self.nodes[prev].next = Some(handle),
            None => self.head = Some(handle),
        }
    }

    fn unlink(&mut self, handle: Handle) -> T {
        let Node { value, prev, next } = self.nodes.free(handle);
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
        value
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    fn push_front(&mut self, item: T) {
        match self.head {
            Some(head) => self.link_before(head, item),
            None => {
                let handle = self.nodes.allocate(Node {
                    value: item,
                    prev: None,
                    next: None,
                });
                self.head = Some(handle);
                self.tail = Some(handle);
            },
        }
    }

    fn push_back(&mut self, item: T) {
        let tail = match self.tail {
            Some(tail) => tail,
            None => return self.push_front(item),
        };
        let handle = self.nodes.allocate(Node {
            value: item,
            prev: Some(tail),
            next: None,
        });
        self.nodes[tail].next = Some(handle);
        self.tail = Some(handle);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        check_insert_index(index, self.nodes.len())?;
        if index == self.nodes.len() {
            self.push_back(item);
        } else {
            let next = self.handle_at(index);
            self.link_before(next, item);
        }
        Ok(())
    }

    fn first(&self) -> Option<&T> {
        self.head.map(|handle| &self.nodes[handle].value)
    }

    fn last(&self) -> Option<&T> {
        self.tail.map(|handle| &self.nodes[handle].value)
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.nodes.len())?;
        Ok(&self.nodes[self.handle_at(index)].value)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.nodes.len())?;
        let handle = self.handle_at(index);
        Ok(&mut self.nodes[handle].value)
    }

    fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.nodes.len())?;
        let handle = self.handle_at(index);
        Ok(self.unlink(handle))
    }

    fn replace(&mut self, index: usize, item: T) -> Result<T> {
        Ok(std::mem::replace(self.get_mut(index)?, item))
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|other| other == item)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &LinkedList<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator for `LinkedList<T>`.
///
/// This iterator traverses the elements of the list from front to back and yields immutable
/// references.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let node = &list.nodes[self.current?];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// An owning iterator for `LinkedList<T>`.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedList;
    use crate::sequence::Sequence;

    fn to_vec(list: &LinkedList<u32>) -> Vec<u32> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_push_pop_ends() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_front(0);
        list.push_back(2);
        assert_eq!(list.first(), Some(&0));
        assert_eq!(list.last(), Some(&2));
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[test]
    fn test_get_from_both_halves() {
        let mut list = LinkedList::new();
        for i in 0..9 {
            list.push_back(i);
        }
        for i in 0..9 {
            assert_eq!(list.get(i as usize), Ok(&i));
        }
    }

    #[test]
    fn test_insert_middle() {
        let mut list = LinkedList::new();
        list.push_back(0);
        list.push_back(3);
        list.insert(1, 1).unwrap();
        list.insert(2, 2).unwrap();
        list.insert(0, 9).unwrap();
        assert_eq!(to_vec(&list), vec![9, 0, 1, 2, 3]);
    }

    #[test]
    fn test_remove_relinks() {
        let mut list = LinkedList::new();
        for i in 0..5 {
            list.push_back(i);
        }
        assert_eq!(list.remove(2), Ok(2));
        assert_eq!(list.remove(0), Ok(0));
        assert_eq!(list.remove(2), Ok(4));
        assert_eq!(to_vec(&list), vec![1, 3]);
        assert_eq!(list.last(), Some(&3));

        list.push_back(5);
        assert_eq!(to_vec(&list), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter_size_hint() {
        let mut list = LinkedList::new();
        list.push_back(0);
        list.push_back(1);
        let mut iter = list.iter();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        iter.next();
        assert_eq!(iter.size_hint(), (1, Some(1)));
    }

    #[test]
    fn test_into_iter() {
        let mut list = LinkedList::new();
        list.push_back(0);
        list.push_back(1);
        assert_eq!(list.into_iter().collect::<Vec<u32>>(), vec![0, 1]);
    }

    #[test]
    fn test_clear() {
        let mut list = LinkedList::new();
        list.push_back(0);
        list.clear();
        assert!(list.is_empty());
        list.push_back(1);
        assert_eq!(to_vec(&list), vec![1]);
    }
}
