//! Errors returned by the fallible operations of the collections in this crate.

use std::error;
use std::fmt;
use std::result;

/// An error raised by a positional, capacity-checked or structural operation.
///
/// Operations on empty collections are not errors: they return `None`. Internal invariant
/// violations, such as a stale heap index, panic instead of producing an `Error`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A position outside of `[0, len)` (or `[0, len]` for insertions) was used.
    IndexOutOfBounds { index: usize, len: usize },
    /// A bounded collection or a hash table was constructed with a capacity of zero.
    InvalidCapacity,
    /// An item was pushed into a bounded collection that is already full.
    Full { capacity: usize },
    /// A root was added to a tree that already has one.
    RootExists,
    /// A child was added to a tree node whose slot for that child is already taken.
    ChildExists,
    /// A tree node with two children was removed.
    TwoChildren,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {} is out of bounds for length {}", index, len)
            },
            Error::InvalidCapacity => write!(f, "capacity must be a positive integer"),
            Error::Full { capacity } => write!(f, "collection is full at capacity {}", capacity),
            Error::RootExists => write!(f, "tree already has a root"),
            Error::ChildExists => write!(f, "node already has a child on that side"),
            Error::TwoChildren => write!(f, "cannot remove a node with two children"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::IndexOutOfBounds { index: 4, len: 2 }.to_string(),
            "index 4 is out of bounds for length 2",
        );
        assert_eq!(Error::InvalidCapacity.to_string(), "capacity must be a positive integer");
        assert_eq!(Error::Full { capacity: 3 }.to_string(), "collection is full at capacity 3");
        assert_eq!(Error::TwoChildren.to_string(), "cannot remove a node with two children");
    }
}
