//! Stable handles into the list's node arena.

/// Identifies one node of a [`BlockList`](crate::BlockList).
///
/// Handles are stable: a handle stays valid until the node it names is
/// removed, regardless of what happens to the rest of the list. Node
/// identity is handle equality — two nodes carrying value-equal blocks
/// are still distinct nodes.
///
/// A handle kept past the removal of its node may alias an arena slot
/// reused by a later insertion. Discarding handles when their node is
/// removed is the caller's responsibility (same discipline as the `slab`
/// crate's keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub(crate) usize);

impl NodeHandle {
    /// Returns the raw arena index behind this handle.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_index_equality() {
        assert_eq!(NodeHandle(3), NodeHandle(3));
        assert_ne!(NodeHandle(3), NodeHandle(4));
        assert_eq!(NodeHandle(3).index(), 3);
    }
}
