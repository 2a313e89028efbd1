//! Link-chain element owning one descriptor.

use crate::{MemoryBlock, NodeHandle};

/// One element of a [`BlockList`](crate::BlockList).
///
/// A node carries exactly one [`MemoryBlock`], set at construction and
/// never reassigned, plus the forward link to its successor. Only the
/// owning list relinks nodes; callers read through the accessors.
#[derive(Debug)]
pub struct Node {
    pub(crate) block: MemoryBlock,
    pub(crate) next: Option<NodeHandle>,
}

impl Node {
    #[inline]
    pub(crate) const fn new(block: MemoryBlock) -> Self {
        Self { block, next: None }
    }

    /// Returns the descriptor carried by this node.
    #[inline]
    pub const fn block(&self) -> MemoryBlock {
        self.block
    }

    /// Returns the handle of the next node, or `None` at the tail.
    #[inline]
    pub const fn next(&self) -> Option<NodeHandle> {
        self.next
    }
}
