//! Insertion-ordered list of memory blocks over arena storage.
//!
//! Nodes live in a `slab::Slab` owned by the list and are addressed by
//! stable [`NodeHandle`]s; forward links are optional handles rather
//! than pointers, so splicing stays O(1) once a neighbor is known and a
//! removal can never leave a dangling reference.
//!
//! # Cost model
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_back`, `push_front`, `pop_front` | O(1) |
//! | `insert_at(0)`, `insert_at(len)` | O(1) |
//! | `insert_at(i)` elsewhere | O(i) |
//! | `pop_back` | O(n) — there are no backward links |
//! | `node_at(i)`, `block_at(i)`, `remove_at(i)` | O(i) |
//! | `index_of`, `remove_node`, `remove_block` | O(n) |
//!
//! Callers are expected to respect this split: the allocator fast paths
//! (free-list push and drain) ride the O(1) ends, and only policy
//! decisions pay for the linear scans.

use core::fmt;

use slab::Slab;

use crate::{ListError, MemoryBlock, Node, NodeHandle};

/// An insertion-ordered list of [`MemoryBlock`] descriptors.
///
/// The bookkeeping structure under a memory allocator simulator: one
/// list tracks free blocks, another tracks allocated blocks, and the
/// allocation logic moves descriptors between them on every operation.
/// Three removal contracts are provided — by position ([`remove_at`]),
/// by identity ([`remove_node`]), and by value ([`remove_block`]) — and
/// stay mutually consistent.
///
/// The list assumes one sequential owner; `&mut self` on every mutating
/// operation is that precondition, enforced by the borrow checker.
///
/// # Example
///
/// ```
/// use blocklist::{BlockList, MemoryBlock};
///
/// let mut free = BlockList::new();
/// free.push_back(MemoryBlock::new(100, 4));
/// free.push_back(MemoryBlock::new(200, 8));
/// free.push_front(MemoryBlock::new(0, 16));
///
/// assert_eq!(free.len(), 3);
/// assert_eq!(free.block_at(0), Ok(MemoryBlock::new(0, 16)));
///
/// free.remove_block(MemoryBlock::new(100, 4)).unwrap();
/// assert_eq!(free.to_string(), "(0 , 16) (200 , 8)");
/// ```
///
/// [`remove_at`]: BlockList::remove_at
/// [`remove_node`]: BlockList::remove_node
/// [`remove_block`]: BlockList::remove_block
#[derive(Debug)]
pub struct BlockList {
    nodes: Slab<Node>,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    len: usize,
}

impl BlockList {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with arena space for `capacity` nodes.
    ///
    /// Insertions beyond the pre-allocated capacity grow the arena.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of nodes the arena can hold without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of blocks in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no blocks.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the handle of the first node, or `None` on an empty list.
    #[inline]
    pub const fn first(&self) -> Option<NodeHandle> {
        self.head
    }

    /// Returns the handle of the last node, or `None` on an empty list.
    #[inline]
    pub const fn last(&self) -> Option<NodeHandle> {
        self.tail
    }

    /// Returns the node behind `handle`, or `None` if the handle does
    /// not name a live node of this list.
    #[inline]
    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle.0)
    }

    /// Returns the block behind `handle`, or `None` if the handle does
    /// not name a live node of this list.
    #[inline]
    pub fn block(&self, handle: NodeHandle) -> Option<MemoryBlock> {
        self.node(handle).map(Node::block)
    }

    /// Returns the handle of the node at `index`.
    ///
    /// Linear scan from the head: O(index). Callers that only need the
    /// ends should use [`first`](Self::first)/[`last`](Self::last).
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] when `index >= len`.
    pub fn node_at(&self, index: usize) -> Result<NodeHandle, ListError> {
        if index >= self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.walk(index))
    }

    /// Returns the block carried by the node at `index`.
    ///
    /// Same bounds contract and cost as [`node_at`](Self::node_at).
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] when `index >= len`.
    pub fn block_at(&self, index: usize) -> Result<MemoryBlock, ListError> {
        self.node_at(index).map(|handle| self.nodes[handle.0].block)
    }

    /// Returns the position of the first node whose block equals
    /// `block` by value, or `None` if no node matches.
    ///
    /// This is the membership test the value-based removal is defined
    /// against.
    pub fn index_of(&self, block: MemoryBlock) -> Option<usize> {
        self.iter().position(|b| b == block)
    }

    /// Returns `true` if some node carries `block` by value.
    #[inline]
    pub fn contains(&self, block: MemoryBlock) -> bool {
        self.index_of(block).is_some()
    }

    /// Inserts `block` so that it ends up at `index`, returning the new
    /// node's handle.
    ///
    /// `index == 0` and `index == len` are O(1) (they delegate to
    /// [`push_front`](Self::push_front)/[`push_back`](Self::push_back));
    /// anything in between walks to the predecessor first, O(index).
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] when `index > len`; the list is left
    /// unmodified.
    ///
    /// # Example
    ///
    /// ```
    /// use blocklist::{BlockList, MemoryBlock};
    ///
    /// let mut list = BlockList::new();
    /// list.push_back(MemoryBlock::new(0, 8));
    /// list.push_back(MemoryBlock::new(16, 8));
    /// list.insert_at(1, MemoryBlock::new(8, 8)).unwrap();
    ///
    /// assert_eq!(list.to_string(), "(0 , 8) (8 , 8) (16 , 8)");
    /// ```
    pub fn insert_at(
        &mut self,
        index: usize,
        block: MemoryBlock,
    ) -> Result<NodeHandle, ListError> {
        if index > self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return Ok(self.push_front(block));
        }
        if index == self.len {
            return Ok(self.push_back(block));
        }

        let prev = self.walk(index - 1);
        let mut node = Node::new(block);
        node.next = self.nodes[prev.0].next;
        let handle = NodeHandle(self.nodes.insert(node));
        self.nodes[prev.0].next = Some(handle);
        self.len += 1;
        Ok(handle)
    }

    /// Appends `block`, returning the new node's handle. O(1).
    pub fn push_back(&mut self, block: MemoryBlock) -> NodeHandle {
        let handle = NodeHandle(self.nodes.insert(Node::new(block)));
        match self.tail {
            Some(tail) => self.nodes[tail.0].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.len += 1;
        handle
    }

    /// Prepends `block`, returning the new node's handle. O(1).
    pub fn push_front(&mut self, block: MemoryBlock) -> NodeHandle {
        let mut node = Node::new(block);
        node.next = self.head;
        let handle = NodeHandle(self.nodes.insert(node));
        if self.head.is_none() {
            self.tail = Some(handle);
        }
        self.head = Some(handle);
        self.len += 1;
        handle
    }

    /// Removes and returns the first block, or `None` on an empty list.
    ///
    /// Deliberately tolerant: callers drain the whole list with an
    /// unconditional `while` loop, no bounds check per call.
    pub fn pop_front(&mut self) -> Option<MemoryBlock> {
        let head = self.head?;
        let node = self.nodes.remove(head.0);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.block)
    }

    /// Removes and returns the last block, or `None` on an empty list.
    ///
    /// O(n): with forward-only links the second-to-last node has to be
    /// found by walking from the head before the tail can be truncated.
    pub fn pop_back(&mut self) -> Option<MemoryBlock> {
        let tail = self.tail?;
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let before = self.walk(self.len - 2);
            self.nodes[before.0].next = None;
            self.tail = Some(before);
        }
        self.len -= 1;
        Some(self.nodes.remove(tail.0).block)
    }

    /// Removes the node named by `handle` and returns its block.
    ///
    /// Identity-based: the node is matched by handle equality, never by
    /// block value. Head and tail are O(1); anything else scans from the
    /// head for the predecessor.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] when `handle` does not name a live
    /// node of this list. That is a caller-contract violation (a stale
    /// handle, or a handle from another list), not a normal runtime
    /// condition — though a foreign handle may alias a live slot of this
    /// arena, which this check cannot detect.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Result<MemoryBlock, ListError> {
        if !self.nodes.contains(handle.0) {
            return Err(ListError::InvalidArgument);
        }
        if self.head == Some(handle) {
            // Head is live, so the list is non-empty.
            return Ok(self.pop_front().expect("non-empty list"));
        }
        if self.tail == Some(handle) {
            return Ok(self.pop_back().expect("non-empty list"));
        }

        // Mid-list: find the predecessor by identity.
        let mut prev = self.head;
        while let Some(p) = prev {
            if self.nodes[p.0].next == Some(handle) {
                return Ok(self.unlink_after(p));
            }
            prev = self.nodes[p.0].next;
        }
        Err(ListError::InvalidArgument)
    }

    /// Removes the node at `index` and returns its block.
    ///
    /// Boundary indices dispatch to [`pop_front`](Self::pop_front)/
    /// [`pop_back`](Self::pop_back); anything in between walks to the
    /// predecessor and splices, O(index).
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] when `index >= len`; the list is left
    /// unmodified.
    pub fn remove_at(&mut self, index: usize) -> Result<MemoryBlock, ListError> {
        if index >= self.len {
            return Err(ListError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if index == 0 {
            return Ok(self.pop_front().expect("non-empty list"));
        }
        if index == self.len - 1 {
            return Ok(self.pop_back().expect("non-empty list"));
        }

        let prev = self.walk(index - 1);
        Ok(self.unlink_after(prev))
    }

    /// Removes the first node whose block equals `block` by value.
    ///
    /// Head and tail are compared first (O(1)) before the linear scan;
    /// when duplicates exist by value, only the first occurrence in list
    /// order is removed.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidArgument`] when the list is empty or no node
    /// matches; the list is left unmodified.
    ///
    /// # Example
    ///
    /// ```
    /// use blocklist::{BlockList, MemoryBlock};
    ///
    /// let mut list = BlockList::new();
    /// list.push_back(MemoryBlock::new(0, 16));
    /// list.push_back(MemoryBlock::new(100, 4));
    ///
    /// assert!(list.remove_block(MemoryBlock::new(100, 4)).is_ok());
    /// assert!(list.remove_block(MemoryBlock::new(100, 4)).is_err());
    /// ```
    pub fn remove_block(&mut self, block: MemoryBlock) -> Result<(), ListError> {
        let (Some(head), Some(tail)) = (self.head, self.tail) else {
            return Err(ListError::InvalidArgument);
        };
        if self.nodes[head.0].block == block {
            self.pop_front();
            return Ok(());
        }
        if self.nodes[tail.0].block == block {
            self.pop_back();
            return Ok(());
        }

        // Linear scan with an explicit predecessor; first match wins.
        let mut prev = head;
        while let Some(cur) = self.nodes[prev.0].next {
            if self.nodes[cur.0].block == block {
                self.unlink_after(prev);
                return Ok(());
            }
            prev = cur;
        }
        Err(ListError::InvalidArgument)
    }

    /// Removes every block and releases all nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns a forward iterator over the blocks, in list order.
    ///
    /// Each call starts fresh from the head. The iterator borrows the
    /// list, so mutation during iteration is rejected at compile time;
    /// collect [`handles`](Self::handles) first when a traversal needs
    /// to drive removals.
    ///
    /// # Example
    ///
    /// ```
    /// use blocklist::{BlockList, MemoryBlock};
    ///
    /// let mut list = BlockList::new();
    /// list.push_back(MemoryBlock::new(0, 16));
    /// list.push_back(MemoryBlock::new(16, 16));
    ///
    /// let total: usize = list.iter().map(|b| b.length).sum();
    /// assert_eq!(total, 32);
    /// ```
    #[inline]
    pub fn iter(&self) -> Blocks<'_> {
        Blocks {
            list: self,
            cur: self.head,
        }
    }

    /// Returns a forward iterator over the node handles, in list order.
    #[inline]
    pub fn handles(&self) -> Handles<'_> {
        Handles {
            list: self,
            cur: self.head,
        }
    }

    /// Walks `index` hops from the head. Caller guarantees
    /// `index < len`.
    fn walk(&self, index: usize) -> NodeHandle {
        let mut cur = self.head.expect("index checked against a non-empty list");
        for _ in 0..index {
            cur = self.nodes[cur.0].next.expect("chain shorter than len");
        }
        cur
    }

    /// Excises the successor of `prev` and returns its block. Caller
    /// guarantees the successor exists and is not the tail.
    fn unlink_after(&mut self, prev: NodeHandle) -> MemoryBlock {
        let target = self.nodes[prev.0]
            .next
            .expect("predecessor of a live node");
        let node = self.nodes.remove(target.0);
        self.nodes[prev.0].next = node.next;
        self.len -= 1;
        node.block
    }
}

impl Default for BlockList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockList {
    /// Debug dump: blocks in list order, `(base , len)` pairs separated
    /// by single spaces; an empty list renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for block in self {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{block}")?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = MemoryBlock;
    type IntoIter = Blocks<'a>;

    fn into_iter(self) -> Blocks<'a> {
        self.iter()
    }
}

/// Forward iterator over the blocks of a [`BlockList`].
///
/// Created by [`BlockList::iter`]; yields descriptors by value, front to
/// back.
pub struct Blocks<'a> {
    list: &'a BlockList,
    cur: Option<NodeHandle>,
}

impl Iterator for Blocks<'_> {
    type Item = MemoryBlock;

    #[inline]
    fn next(&mut self) -> Option<MemoryBlock> {
        let handle = self.cur?;
        let node = &self.list.nodes[handle.0];
        self.cur = node.next;
        Some(node.block)
    }
}

/// Forward iterator over the node handles of a [`BlockList`].
///
/// Created by [`BlockList::handles`]. Useful when a traversal needs to
/// drive removals: collect the handles first, then mutate.
pub struct Handles<'a> {
    list: &'a BlockList,
    cur: Option<NodeHandle>,
}

impl Iterator for Handles<'_> {
    type Item = NodeHandle;

    #[inline]
    fn next(&mut self) -> Option<NodeHandle> {
        let handle = self.cur?;
        self.cur = self.list.nodes[handle.0].next;
        Some(handle)
    }
}
