//! Textbook collections built around key-value priority queues.
//!
//! The centerpiece is `priority_queue::Heap`, a binary min or max heap whose entries track their
//! own position in the backing `sequence::ArrayList`. The same `PriorityQueue` trait is also
//! implemented by list-backed sorted and unsorted priority queues. The sequences used as backing
//! storage are public, together with stack and queue adapters that pick their backing sequence
//! through `sequence::SequenceKind`.
//!
//! The same building blocks back the key-value maps in `map`, the handle-addressed binary tree in
//! `tree` and the edge-list graph in `graph`.

pub mod adapter;
pub mod arena;
pub mod entry;
pub mod error;
pub mod graph;
pub mod map;
pub mod priority_queue;
pub mod sequence;
pub mod tree;
