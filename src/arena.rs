//! Slab allocator handing out index handles instead of pointers.

use std::mem;
use std::ops::{Index, IndexMut};

/// A handle to a value stored in an `Arena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    index: usize,
}

enum Slot<T> {
    Occupied(T),
    Vacant(Option<Handle>),
}

/// A slab that stores values of a single type and addresses them with `Handle`s.
///
/// Freed slots are threaded onto a free list and reused by later allocations, so a handle must
/// not be used after the value it refers to is freed. The arena is backed by a single `Vec` and
/// uses no unsafe code, which makes it a convenient home for the nodes of linked structures.
///
/// # Examples
///
/// ```
/// use keyed_collections::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct Arena<T> {
    head: Option<Handle>,
    slots: Vec<Slot<T>>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    pub fn new() -> Self {
        Arena {
            head: None,
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Constructs a new, empty `Arena<T>` with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            head: None,
            slots: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Stores a value in the arena and returns its handle.
    pub fn allocate(&mut self, value: T) -> Handle {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                Handle {
                    index: self.slots.len() - 1,
                }
            },
            Some(handle) => {
                let vacant = mem::replace(&mut self.slots[handle.index], Slot::Occupied(value));
                match vacant {
                    Slot::Vacant(next) => self.head = next,
                    Slot::Occupied(_) => panic!("Error: free list points at an occupied slot."),
                }
                handle
            },
        }
    }

    /// Removes a value from the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not refer to an occupied slot.
    pub fn free(&mut self, handle: Handle) -> T {
        if handle.index >= self.slots.len() {
            panic!("Error: attempting to free invalid slot.");
        }
        if let Slot::Vacant(_) = self.slots[handle.index] {
            panic!("Error: attempting to free vacant slot.");
        }
        let old = mem::replace(&mut self.slots[handle.index], Slot::Vacant(self.head.take()));
        self.head = Some(handle);
        self.len -= 1;
        match old {
            Slot::Occupied(value) => value,
            Slot::Vacant(_) => unreachable!(),
        }
    }

    /// Returns a reference to the value behind `handle`, or `None` if the slot is vacant.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.index) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value behind `handle`, or `None` if the slot is vacant.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.index) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over the handles and values of the occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied(value) => Some((Handle { index }, value)),
                Slot::Vacant(_) => None,
            })
    }

    /// Drops every value in the arena. All outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.head = None;
        self.slots.clear();
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &Self::Output {
        self.get(handle).expect("Error: handle out of bounds.")
    }
}

impl<T> IndexMut<Handle> for Arena<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
        self.get_mut(handle).expect("Error: handle out of bounds.")
    }
}
