//! Stacks and queues layered over a `Sequence`, with optional fixed capacities.
//!
//! The backing sequence is picked with a `SequenceKind` when the adapter is constructed and
//! defaults to a doubly linked list.

mod queue;
mod stack;

pub use self::queue::{BoundedQueue, Queue};
pub use self::stack::{BoundedStack, Stack};

use crate::error::{Error, Result};

/// Capacity of a bounded adapter constructed without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 10;

fn check_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        Err(Error::InvalidCapacity)
    } else {
        Ok(capacity)
    }
}
