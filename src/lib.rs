//! Insertion-ordered memory-block bookkeeping for an allocator.
//!
//! This crate provides [`BlockList`], the ordered-list container under a
//! memory allocator simulator: one list tracks free blocks, another
//! tracks allocated blocks, and the allocation logic (external to this
//! crate) moves [`MemoryBlock`] descriptors between them on every
//! operation.
//!
//! # Design
//!
//! A pointer-chained list in a systems language invites dangling links
//! on removal. This crate sidesteps that: nodes live in a `slab::Slab`
//! arena owned by the list and are addressed by stable [`NodeHandle`]s,
//! with the forward link stored as an optional handle.
//!
//! ```text
//! Slab<Node>   - owns the nodes, hands out stable indices
//! BlockList    - head/tail/len bookkeeping over those indices
//! ```
//!
//! Handle equality doubles as node identity, which makes the
//! identity-based removal contract ([`BlockList::remove_node`]) a
//! trivial comparison instead of a pointer one.
//!
//! # Quick start
//!
//! ```
//! use blocklist::{BlockList, MemoryBlock};
//!
//! let mut free = BlockList::new();
//! free.push_back(MemoryBlock::new(0, 64));
//! let handle = free.push_back(MemoryBlock::new(64, 32));
//! free.push_front(MemoryBlock::new(128, 16));
//!
//! assert_eq!(free.len(), 3);
//! assert_eq!(free.block_at(1), Ok(MemoryBlock::new(0, 64)));
//!
//! // Identity-based removal through the handle.
//! assert_eq!(free.remove_node(handle), Ok(MemoryBlock::new(64, 32)));
//! assert_eq!(free.to_string(), "(128 , 16) (0 , 64)");
//! ```
//!
//! # Contract highlights
//!
//! - `push_back`/`push_front`/`pop_front` are O(1); `pop_back` and the
//!   mid-list operations are O(n). The asymmetry is part of the
//!   contract, not an implementation accident — allocator fast paths
//!   are built on the cheap ends.
//! - `pop_front`/`pop_back` tolerate an empty list (they return `None`)
//!   so callers can drain with an unconditional loop; the indexed,
//!   identity, and value removals are strict and return [`ListError`].
//! - Single sequential owner. There is no internal synchronization;
//!   exclusive access is expressed through `&mut self`.

#![warn(missing_docs)]

pub mod block;
pub mod error;
pub mod handle;
pub mod list;
pub mod node;

pub use block::MemoryBlock;
pub use error::ListError;
pub use handle::NodeHandle;
pub use list::{BlockList, Blocks, Handles};
pub use node::Node;
