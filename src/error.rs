//! Error type for list operations.

use core::fmt;

/// Error returned by the fallible [`BlockList`](crate::BlockList)
/// operations.
///
/// These are expected, frequent conditions in allocator-driving code,
/// not exceptional program states; every fallible operation surfaces
/// them immediately and leaves the list unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// An index fell outside the operation's valid range.
    ///
    /// Reads and removals accept `[0, len)`; insertion accepts
    /// `[0, len]` (inserting at `len` is an append). Out-of-range
    /// indices are never clamped.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// An argument did not refer to an element of this list: an
    /// identity-removal of a node that is not linked here, or a
    /// value-removal of a block no node carries (including on an empty
    /// list).
    InvalidArgument,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            Self::InvalidArgument => {
                write!(f, "argument does not refer to an element of this list")
            }
        }
    }
}

impl std::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ListError::OutOfRange { index: 5, len: 2 };
        assert_eq!(err.to_string(), "index 5 out of range for list of length 2");

        assert_eq!(
            ListError::InvalidArgument.to_string(),
            "argument does not refer to an element of this list"
        );
    }
}
