use core::fmt::{self, Display};

/// The error type for the checked heap operations
/// ([`try_push_heap`](crate::try_push_heap) and friends).
///
/// The sequence is left untouched whenever one of these is returned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeapError {
    /// The operation needs at least one element but the sequence was empty.
    EmptyRange,

    /// The sequence does not satisfy the heap invariant it was required to.
    NotAHeap {
        /// The first position whose element is ordered after its parent's,
        /// as reported by [`is_heap_until`](crate::is_heap_until).
        index: usize,
    },
}

impl Display for HeapError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HeapError::EmptyRange => fmt.write_str("operation requires a non-empty range"),
            HeapError::NotAHeap { index } => {
                write!(fmt, "range is not a heap: element {index} is greater than its parent")
            }
        }
    }
}

#[cfg(any(feature = "error_in_core", feature = "std"))]
impl crate::polyfill::Error for HeapError {}
