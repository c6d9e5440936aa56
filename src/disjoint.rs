//! Disjoint-set heap
//!
//! An unsorted chain whose values are pairwise distinct. Inserting a value
//! that is already present is rejected, and union drops every appended node
//! whose value the receiver already held.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity                    |
//! |---------------|-------------------------------|
//! | `insert`      | O(n) membership check         |
//! | `minimum`     | O(n)                          |
//! | `extract_min` | O(n)                          |
//! | `union`       | O(n + m), O(n) auxiliary set  |
//!
//! # Example
//!
//! ```rust
//! use linked_heaps::Heap;
//! use linked_heaps::disjoint::DisjointSetHeap;
//!
//! let mut a: DisjointSetHeap<i32> = [1, 2, 3].into_iter().collect();
//! let mut b: DisjointSetHeap<i32> = [2, 3, 4].into_iter().collect();
//!
//! assert!(!a.insert(2));
//! a.union(&mut b);
//!
//! let mut values: Vec<_> = a.iter().collect();
//! values.sort();
//! assert_eq!(values, vec![1, 2, 3, 4]);
//! assert!(b.is_empty());
//! ```

use std::fmt;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::list_heap::Variant;
use crate::node::{Chain, Iter, Node};
use crate::traits::{Heap, Key};

/// A heap over an unordered chain of distinct values
pub struct DisjointSetHeap<K: Key> {
    chain: Chain<K>,
}

impl<K: Key> DisjointSetHeap<K> {
    /// Returns true if `value` is stored in the heap
    pub fn contains(&self, value: K) -> bool {
        self.chain.contains(value)
    }
}

impl<K: Key> Heap<K> for DisjointSetHeap<K> {
    const VARIANT: Variant = Variant::DisjointSet;

    fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    fn len(&self) -> usize {
        self.chain.len()
    }

    fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    fn insert(&mut self, value: K) -> bool {
        if self.chain.contains(value) {
            trace!(?value, "rejected duplicate insert");
            return false;
        }
        self.chain.push_front(value);
        true
    }

    fn peek(&self) -> Option<K> {
        self.chain.min()
    }

    fn pop(&mut self) -> Option<K> {
        let min = self.chain.min()?;
        self.chain.remove_first(min);
        Some(min)
    }

    fn union(&mut self, other: &mut Self) {
        let seen: FxHashSet<K> = self.chain.iter().collect();
        let receiver = seen.len();
        let appended = other.chain.len();

        let (mut cursor, len) = self.chain.append(&mut other.chain);
        let mut dropped = 0usize;
        loop {
            match cursor.take() {
                None => break,
                Some(mut node) if seen.contains(&node.value()) => {
                    *cursor = node.take_next();
                    dropped += 1;
                }
                Some(node) => cursor = cursor.insert(node).next_mut(),
            }
        }
        *len -= dropped;

        debug!(receiver, appended, dropped, "merged disjoint-set chains");
    }

    fn head(&self) -> Option<&Node<K>> {
        self.chain.head()
    }

    fn iter(&self) -> Iter<'_, K> {
        self.chain.iter()
    }
}

impl<K: Key> Default for DisjointSetHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> Extend<K> for DisjointSetHeap<K> {
    /// Inserts each value, skipping those already present
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<K: Key> FromIterator<K> for DisjointSetHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<K: Key> fmt::Debug for DisjointSetHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DisjointSetHeap").field(&self.chain).finish()
    }
}

impl<K: Key + fmt::Display> fmt::Display for DisjointSetHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}
