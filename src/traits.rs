//! Common traits for linked-chain heaps
//!
//! This module provides the capability shared by every heap in the crate:
//!
//! - [`Key`]: the integer-only bound on stored values
//! - [`Heap`]: insert, minimum, extract-min and same-variant union
//!
//! The three implementors ([`SortedHeap`](crate::sorted::SortedHeap),
//! [`UnsortedHeap`](crate::unsorted::UnsortedHeap) and
//! [`DisjointSetHeap`](crate::disjoint::DisjointSetHeap)) differ only in how
//! they maintain their backing [`Chain`](crate::node::Chain).

use std::fmt;
use std::hash::Hash;

use num_traits::PrimInt;

use crate::list_heap::Variant;
use crate::node::{Iter, Node};

/// Values a heap may store
///
/// Implemented for every primitive integer type and nothing else, so a heap
/// over `f64` or `String` is rejected at compile time.
///
/// ```compile_fail
/// use linked_heaps::{Heap, unsorted::UnsortedHeap};
///
/// let mut heap = UnsortedHeap::<f64>::new();
/// heap.insert(1.5);
/// ```
pub trait Key: PrimInt + Hash + fmt::Debug {}

impl<T: PrimInt + Hash + fmt::Debug> Key for T {}

/// Base trait for mergeable heaps backed by a linked chain
///
/// `minimum` and `extract_min` follow the sentinel convention: on an empty
/// heap they return zero instead of signalling absence. Use [`peek`] and
/// [`pop`] when a stored zero must be told apart from an empty heap.
///
/// [`peek`]: Heap::peek
/// [`pop`]: Heap::pop
///
/// # Example
///
/// ```rust
/// use linked_heaps::Heap;
/// use linked_heaps::sorted::SortedHeap;
///
/// let mut a: SortedHeap<i32> = [1, 3, 5].into_iter().collect();
/// let mut b: SortedHeap<i32> = [2, 4].into_iter().collect();
/// a.union(&mut b);
///
/// assert!(b.is_empty());
/// assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// assert_eq!(a.extract_min(), 1);
/// ```
pub trait Heap<K: Key>: Sized {
    /// The chain variant this heap maintains
    const VARIANT: Variant;

    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns the number of values in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a value, returning false if the heap rejected it
    ///
    /// Only [`DisjointSetHeap`](crate::disjoint::DisjointSetHeap) ever
    /// rejects, and only values it already holds.
    fn insert(&mut self, value: K) -> bool;

    /// Returns the minimum value, or `None` if the heap is empty
    fn peek(&self) -> Option<K>;

    /// Removes and returns the minimum value, or `None` if the heap is empty
    fn pop(&mut self) -> Option<K>;

    /// Returns the minimum value, or zero if the heap is empty
    fn minimum(&self) -> K {
        self.peek().unwrap_or_else(K::zero)
    }

    /// Removes and returns the minimum value, or zero if the heap is empty
    ///
    /// An empty heap is left untouched.
    fn extract_min(&mut self) -> K {
        self.pop().unwrap_or_else(K::zero)
    }

    /// Moves every node of `other` into this heap, leaving `other` empty
    ///
    /// # Time Complexity
    /// O(n + m) for the sorted merge and the disjoint-set sweep, O(n) to find
    /// the tail for the unsorted splice.
    fn union(&mut self, other: &mut Self);

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, mut other: Self) {
        self.union(&mut other);
    }

    /// The first node of the backing chain, for read-only traversal
    fn head(&self) -> Option<&Node<K>>;

    /// Iterates over the stored values in chain order
    fn iter(&self) -> Iter<'_, K>;
}
