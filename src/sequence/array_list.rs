use crate::error::Result;
use crate::sequence::{check_index, check_insert_index, Sequence};
use log::debug;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;
use std::vec;

const DEFAULT_CAPACITY: usize = 10;

/// How an `ArrayList<T>` grows once every slot is in use.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GrowthPolicy {
    /// Doubles the capacity, giving amortized constant time appends.
    Double,
    /// Adds a single slot, trading append time for space.
    Increment,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::Double
    }
}

/// A resizable array with constant time access to every position.
///
/// The list keeps track of its own capacity and grows it according to a `GrowthPolicy` fixed at
/// construction.
///
/// # Examples
///
/// ```
/// use keyed_collections::sequence::{ArrayList, GrowthPolicy, Sequence};
///
/// let mut list = ArrayList::with_capacity(1, GrowthPolicy::Double);
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
/// assert_eq!(list.capacity(), 4);
///
/// list.swap(0, 2).unwrap();
/// assert_eq!(list[0], 2);
/// assert_eq!(list.pop_back(), Some(0));
/// ```
pub struct ArrayList<T> {
    items: Vec<T>,
    capacity: usize,
    growth_policy: GrowthPolicy,
}

impl<T> ArrayList<T> {
    /// Constructs a new, empty `ArrayList<T>` with the default capacity that doubles when full.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, GrowthPolicy::default())
    }

    /// Constructs a new, empty `ArrayList<T>` with a starting capacity and growth policy. A
    /// starting capacity of zero is replaced by the default capacity.
    pub fn with_capacity(capacity: usize, growth_policy: GrowthPolicy) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        ArrayList {
            items: Vec::with_capacity(capacity),
            capacity,
            growth_policy,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn growth_policy(&self) -> GrowthPolicy {
        self.growth_policy
    }

    /// Exchanges the items at positions `a` and `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        check_index(a, self.items.len())?;
        check_index(b, self.items.len())?;
        self.items.swap(a, b);
        Ok(())
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn ensure_capacity(&mut self) {
        if self.items.len() < self.capacity {
            return;
        }
        let new_capacity = match self.growth_policy {
            GrowthPolicy::Double => self.capacity * 2,
            GrowthPolicy::Increment => self.capacity + 1,
        };
        debug!("growing array list from {} to {} slots", self.capacity, new_capacity);
        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;
    }
}

impl<T> Sequence<T> for ArrayList<T> {
    fn push_front(&mut self, item: T) {
        self.ensure_capacity();
        self.items.insert(0, item);
    }

    fn push_back(&mut self, item: T) {
        self.ensure_capacity();
        self.items.push(item);
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        check_insert_index(index, self.items.len())?;
        self.ensure_capacity();
        self.items.insert(index, item);
        Ok(())
    }

    fn first(&self) -> Option<&T> {
        self.items.first()
    }

    fn last(&self) -> Option<&T> {
        self.items.last()
    }

    fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.items.len())?;
        Ok(&mut self.items[index])
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    fn replace(&mut self, index: usize, item: T) -> Result<T> {
        check_index(index, self.items.len())?;
        Ok(std::mem::replace(&mut self.items[index], item))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|other| other == item)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        Sequence::get(self, index).expect("Error: index out of bounds.")
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        Sequence::get_mut(self, index).expect("Error: index out of bounds.")
    }
}

impl<T> PartialEq for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &ArrayList<T>) -> bool {
        self.items == other.items
    }
}

impl<T> fmt::Debug for ArrayList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type IntoIter = vec::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
