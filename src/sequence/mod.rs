//! Positional sequences: a resizable array and two linked lists behind one trait.

mod array_list;
mod linked_list;
mod singly_linked_list;

pub use self::array_list::{ArrayList, GrowthPolicy};
pub use self::linked_list::LinkedList;
pub use self::singly_linked_list::SinglyLinkedList;

use crate::error::{Error, Result};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// An ordered collection addressed by position.
///
/// Positional operations return `Error::IndexOutOfBounds` when the position is invalid, while
/// operations on an end of an empty sequence return `None`.
pub trait Sequence<T> {
    /// Inserts an item before every other item.
    fn push_front(&mut self, item: T);

    /// Inserts an item after every other item.
    fn push_back(&mut self, item: T);

    /// Inserts an item at `index`, shifting every item at or after `index` back by one. `index`
    /// may be equal to the length of the sequence.
    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    fn first(&self) -> Option<&T>;

    fn last(&self) -> Option<&T>;

    fn get(&self, index: usize) -> Result<&T>;

    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    fn pop_front(&mut self) -> Option<T>;

    fn pop_back(&mut self) -> Option<T>;

    /// Removes and returns the item at `index`, shifting every later item forward by one.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Replaces the item at `index` and returns the previous item.
    fn replace(&mut self, index: usize, item: T) -> Result<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the position of the first item equal to `item`.
    fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(item).is_some()
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}

fn check_insert_index(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}

/// The backing implementation chosen for a sequence-based adapter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SequenceKind {
    ArrayList,
    LinkedList,
    SinglyLinkedList,
}

impl Default for SequenceKind {
    fn default() -> Self {
        SequenceKind::LinkedList
    }
}

impl SequenceKind {
    /// Constructs an empty sequence of this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyed_collections::sequence::{Sequence, SequenceKind};
    ///
    /// let mut seq = SequenceKind::ArrayList.build();
    /// seq.push_back(1);
    /// assert_eq!(seq.kind(), SequenceKind::ArrayList);
    /// assert_eq!(seq.first(), Some(&1));
    /// ```
    pub fn build<T>(self) -> AnySequence<T> {
        match self {
            SequenceKind::ArrayList => AnySequence::ArrayList(ArrayList::new()),
            SequenceKind::LinkedList => AnySequence::LinkedList(LinkedList::new()),
            SequenceKind::SinglyLinkedList => {
                AnySequence::SinglyLinkedList(SinglyLinkedList::new())
            },
        }
    }
}

/// A sequence whose implementation is picked at runtime through `SequenceKind`.
pub enum AnySequence<T> {
    ArrayList(ArrayList<T>),
    LinkedList(LinkedList<T>),
    SinglyLinkedList(SinglyLinkedList<T>),
}

macro_rules! dispatch {
    ($seq:expr, $inner:ident => $body:expr) => {
        match $seq {
            AnySequence::ArrayList($inner) => $body,
            AnySequence::LinkedList($inner) => $body,
            AnySequence::SinglyLinkedList($inner) => $body,
        }
    };
}

impl<T> AnySequence<T> {
    pub fn kind(&self) -> SequenceKind {
        match self {
            AnySequence::ArrayList(_) => SequenceKind::ArrayList,
            AnySequence::LinkedList(_) => SequenceKind::LinkedList,
            AnySequence::SinglyLinkedList(_) => SequenceKind::SinglyLinkedList,
        }
    }

    /// Returns an iterator over the items of the sequence from front to back.
    pub fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        match self {
            AnySequence::ArrayList(list) => Box::new(list.iter()),
            AnySequence::LinkedList(list) => Box::new(list.iter()),
            AnySequence::SinglyLinkedList(list) => Box::new(list.iter()),
        }
    }
}

impl<T> Sequence<T> for AnySequence<T> {
    fn push_front(&mut self, item: T) {
        dispatch!(self, seq => seq.push_front(item))
    }

    fn push_back(&mut self, item: T) {
        dispatch!(self, seq => seq.push_back(item))
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        dispatch!(self, seq => seq.insert(index, item))
    }

    fn first(&self) -> Option<&T> {
        dispatch!(self, seq => seq.first())
    }

    fn last(&self) -> Option<&T> {
        dispatch!(self, seq => seq.last())
    }

    fn get(&self, index: usize) -> Result<&T> {
        dispatch!(self, seq => Sequence::get(seq, index))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        dispatch!(self, seq => Sequence::get_mut(seq, index))
    }

    fn pop_front(&mut self) -> Option<T> {
        dispatch!(self, seq => seq.pop_front())
    }

    fn pop_back(&mut self) -> Option<T> {
        dispatch!(self, seq => seq.pop_back())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        dispatch!(self, seq => seq.remove(index))
    }

    fn replace(&mut self, index: usize, item: T) -> Result<T> {
        dispatch!(self, seq => seq.replace(index, item))
    }

    fn len(&self) -> usize {
        dispatch!(self, seq => seq.len())
    }

    fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        dispatch!(self, seq => seq.position(item))
    }
}

impl<T> PartialEq for AnySequence<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &AnySequence<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> fmt::Debug for AnySequence<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{GrowthPolicy, Sequence, SequenceKind};
    use crate::error::Error;
    use serde_test::{assert_tokens, Token};

    const KINDS: [SequenceKind; 3] = [
        SequenceKind::ArrayList,
        SequenceKind::LinkedList,
        SequenceKind::SinglyLinkedList,
    ];

    #[test]
    fn test_build_kind() {
        for &kind in &KINDS {
            let seq = kind.build::<u32>();
            assert_eq!(seq.kind(), kind);
            assert!(seq.is_empty());
        }
    }

    #[test]
    fn test_positional_operations() {
        for &kind in &KINDS {
            let mut seq = kind.build();
            seq.push_back(2);
            seq.push_front(0);
            seq.insert(1, 1).unwrap();
            seq.insert(3, 3).unwrap();
            assert_eq!(seq.iter().cloned().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

            assert_eq!(seq.replace(2, 5), Ok(2));
            assert_eq!(seq.remove(1), Ok(1));
            assert_eq!(seq.get(1), Ok(&5));
            assert_eq!(seq.position(&3), Some(2));
            assert!(!seq.contains(&1));

            assert_eq!(seq.pop_front(), Some(0));
            assert_eq!(seq.pop_back(), Some(3));
            assert_eq!(seq.len(), 1);
        }
    }

    #[test]
    fn test_out_of_bounds() {
        for &kind in &KINDS {
            let mut seq = kind.build();
            seq.push_back(0);
            assert_eq!(seq.get(1), Err(Error::IndexOutOfBounds { index: 1, len: 1 }));
            assert_eq!(seq.remove(3), Err(Error::IndexOutOfBounds { index: 3, len: 1 }));
            assert_eq!(seq.insert(2, 0), Err(Error::IndexOutOfBounds { index: 2, len: 1 }));
            assert_eq!(seq.replace(1, 0), Err(Error::IndexOutOfBounds { index: 1, len: 1 }));
        }
    }

    #[test]
    fn test_empty_ends() {
        for &kind in &KINDS {
            let mut seq = kind.build::<u32>();
            assert_eq!(seq.first(), None);
            assert_eq!(seq.last(), None);
            assert_eq!(seq.pop_front(), None);
            assert_eq!(seq.pop_back(), None);
        }
    }

    #[test]
    fn test_eq_across_kinds() {
        let mut a = SequenceKind::ArrayList.build();
        let mut b = SequenceKind::SinglyLinkedList.build();
        for i in 0..4 {
            a.push_back(i);
            b.push_back(i);
        }
        assert_eq!(a, b);
        b.pop_back();
        assert_ne!(a, b);
    }

    #[test]
    fn test_config_serde_tokens() {
        assert_tokens(
            &SequenceKind::SinglyLinkedList,
            &[Token::UnitVariant {
                name: "SequenceKind",
                variant: "SinglyLinkedList",
            }],
        );
        assert_tokens(
            &GrowthPolicy::Increment,
            &[Token::UnitVariant {
                name: "GrowthPolicy",
                variant: "Increment",
            }],
        );
    }
}
