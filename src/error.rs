//! Error type for fallible heap operations

use crate::list_heap::Variant;

/// Errors reported by [`ListHeap::try_union`](crate::ListHeap::try_union) and
/// by parsing a [`Variant`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// The two heaps of a union are backed by different chain variants
    #[error("cannot union {other} heap into {receiver} heap")]
    VariantMismatch {
        /// Variant of the heap receiving the nodes
        receiver: Variant,
        /// Variant of the heap that would have been emptied
        other: Variant,
    },
    /// The text does not name a chain variant
    #[error("unknown heap variant `{0}` (expected sorted, unsorted, or disjoint-set)")]
    UnknownVariant(String),
}
