//! Memory-block descriptor.

use core::fmt;

/// One tracked memory region: a base address plus a length.
///
/// `MemoryBlock` is a plain value. Two blocks are equal when both fields
/// match; the list treats the descriptor opaquely beyond that.
///
/// # Example
///
/// ```
/// use blocklist::MemoryBlock;
///
/// let block = MemoryBlock::new(100, 4);
/// assert_eq!(block, MemoryBlock::new(100, 4));
/// assert_eq!(block.to_string(), "(100 , 4)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryBlock {
    /// First address of the region.
    pub base_address: usize,
    /// Number of addressable units in the region.
    pub length: usize,
}

impl MemoryBlock {
    /// Creates a descriptor for the region of `length` units starting at
    /// `base_address`.
    #[inline]
    pub const fn new(base_address: usize, length: usize) -> Self {
        Self {
            base_address,
            length,
        }
    }
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.base_address, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_equality() {
        assert_eq!(MemoryBlock::new(0, 16), MemoryBlock::new(0, 16));
        assert_ne!(MemoryBlock::new(0, 16), MemoryBlock::new(0, 8));
        assert_ne!(MemoryBlock::new(0, 16), MemoryBlock::new(8, 16));
    }

    #[test]
    fn display_format() {
        assert_eq!(MemoryBlock::new(0, 16).to_string(), "(0 , 16)");
        assert_eq!(MemoryBlock::new(200, 8).to_string(), "(200 , 8)");
    }
}
