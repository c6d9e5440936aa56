//! Heap with a chain variant chosen at runtime
//!
//! [`ListHeap`] wraps one of the three concrete heaps behind a [`Variant`]
//! tag fixed at construction. Every operation dispatches to the wrapped heap.
//! Union requires both sides to carry the same tag; a mismatch is a logic
//! error and panics, while [`ListHeap::try_union`] reports it instead.
//!
//! # Example
//!
//! ```rust
//! use linked_heaps::{ListHeap, Variant};
//!
//! let variant: Variant = "disjoint-set".parse().unwrap();
//! let mut heap = ListHeap::new(variant);
//! assert!(heap.insert(4));
//! assert!(!heap.insert(4));
//! assert_eq!(heap.minimum(), 4);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::disjoint::DisjointSetHeap;
use crate::error::HeapError;
use crate::node::{Iter, Node};
use crate::sorted::SortedHeap;
use crate::traits::{Heap, Key};
use crate::unsorted::UnsortedHeap;

/// How a heap maintains its backing chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Variant {
    /// Chain kept in non-decreasing order
    Sorted,
    /// Chain in insertion order, duplicates allowed
    Unsorted,
    /// Unordered chain of distinct values
    DisjointSet,
}

impl Variant {
    /// Every variant, in declaration order
    pub const ALL: [Variant; 3] = [Variant::Sorted, Variant::Unsorted, Variant::DisjointSet];

    /// The canonical lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Sorted => "sorted",
            Variant::Unsorted => "unsorted",
            Variant::DisjointSet => "disjoint-set",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorted" => Ok(Variant::Sorted),
            "unsorted" => Ok(Variant::Unsorted),
            "disjoint-set" | "disjoint_set" | "disjointset" | "disjoint" | "disjoints" => {
                Ok(Variant::DisjointSet)
            }
            _ => Err(HeapError::UnknownVariant(s.to_owned())),
        }
    }
}

/// A heap whose chain variant is selected at runtime
pub enum ListHeap<K: Key> {
    /// Backed by a [`SortedHeap`]
    Sorted(SortedHeap<K>),
    /// Backed by an [`UnsortedHeap`]
    Unsorted(UnsortedHeap<K>),
    /// Backed by a [`DisjointSetHeap`]
    DisjointSet(DisjointSetHeap<K>),
}

/// Forwards a method call to whichever heap the tag selects
macro_rules! dispatch {
    ($heap:expr, $inner:ident => $body:expr) => {
        match $heap {
            ListHeap::Sorted($inner) => $body,
            ListHeap::Unsorted($inner) => $body,
            ListHeap::DisjointSet($inner) => $body,
        }
    };
}

impl<K: Key> ListHeap<K> {
    /// Creates an empty heap of the given variant
    pub fn new(variant: Variant) -> Self {
        match variant {
            Variant::Sorted => ListHeap::Sorted(SortedHeap::new()),
            Variant::Unsorted => ListHeap::Unsorted(UnsortedHeap::new()),
            Variant::DisjointSet => ListHeap::DisjointSet(DisjointSetHeap::new()),
        }
    }

    /// The variant chosen at construction
    pub fn variant(&self) -> Variant {
        match self {
            ListHeap::Sorted(_) => Variant::Sorted,
            ListHeap::Unsorted(_) => Variant::Unsorted,
            ListHeap::DisjointSet(_) => Variant::DisjointSet,
        }
    }

    /// Returns the number of values in the heap
    pub fn len(&self) -> usize {
        dispatch!(self, heap => heap.len())
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        dispatch!(self, heap => heap.is_empty())
    }

    /// Inserts a value; false means a disjoint-set heap already held it
    pub fn insert(&mut self, value: K) -> bool {
        dispatch!(self, heap => heap.insert(value))
    }

    /// Returns the minimum value, or zero if the heap is empty
    pub fn minimum(&self) -> K {
        dispatch!(self, heap => heap.minimum())
    }

    /// Removes and returns the minimum value, or zero if the heap is empty
    pub fn extract_min(&mut self) -> K {
        dispatch!(self, heap => heap.extract_min())
    }

    /// Returns the minimum value, or `None` if the heap is empty
    pub fn peek(&self) -> Option<K> {
        dispatch!(self, heap => heap.peek())
    }

    /// Removes and returns the minimum value, or `None` if the heap is empty
    pub fn pop(&mut self) -> Option<K> {
        dispatch!(self, heap => heap.pop())
    }

    /// Moves every node of `other` into this heap, leaving `other` empty
    ///
    /// # Panics
    ///
    /// Panics if the two heaps have different variants. Neither heap is
    /// modified in that case.
    pub fn union(&mut self, other: &mut Self) {
        if let Err(err) = self.try_union(other) {
            panic!("{err}");
        }
    }

    /// Like [`union`](Self::union), but reports a variant mismatch
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::VariantMismatch`] without touching either heap
    /// if the variants differ.
    pub fn try_union(&mut self, other: &mut Self) -> Result<(), HeapError> {
        match (self, other) {
            (ListHeap::Sorted(a), ListHeap::Sorted(b)) => a.union(b),
            (ListHeap::Unsorted(a), ListHeap::Unsorted(b)) => a.union(b),
            (ListHeap::DisjointSet(a), ListHeap::DisjointSet(b)) => a.union(b),
            (receiver, other) => {
                return Err(HeapError::VariantMismatch {
                    receiver: receiver.variant(),
                    other: other.variant(),
                });
            }
        }
        Ok(())
    }

    /// The first node of the backing chain, for read-only traversal
    pub fn head(&self) -> Option<&Node<K>> {
        dispatch!(self, heap => heap.head())
    }

    /// Iterates over the stored values in chain order
    pub fn iter(&self) -> Iter<'_, K> {
        dispatch!(self, heap => heap.iter())
    }
}

impl<K: Key> From<SortedHeap<K>> for ListHeap<K> {
    fn from(heap: SortedHeap<K>) -> Self {
        ListHeap::Sorted(heap)
    }
}

impl<K: Key> From<UnsortedHeap<K>> for ListHeap<K> {
    fn from(heap: UnsortedHeap<K>) -> Self {
        ListHeap::Unsorted(heap)
    }
}

impl<K: Key> From<DisjointSetHeap<K>> for ListHeap<K> {
    fn from(heap: DisjointSetHeap<K>) -> Self {
        ListHeap::DisjointSet(heap)
    }
}

impl<K: Key> Extend<K> for ListHeap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        dispatch!(self, heap => heap.extend(iter))
    }
}

impl<K: Key> fmt::Debug for ListHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, heap => fmt::Debug::fmt(heap, f))
    }
}

impl<K: Key + fmt::Display> fmt::Display for ListHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, heap => fmt::Display::fmt(heap, f))
    }
}
