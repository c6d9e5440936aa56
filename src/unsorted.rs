//! Unsorted-chain heap
//!
//! Values are prepended in O(1) and the minimum is found by scanning. Union
//! splices the other chain onto the tail.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(1)       |
//! | `minimum`     | O(n)       |
//! | `extract_min` | O(n)       |
//! | `union`       | O(n)       |

use std::fmt;

use tracing::debug;

use crate::list_heap::Variant;
use crate::node::{Chain, Iter, Node};
use crate::traits::{Heap, Key};

/// A heap over an unordered chain that allows duplicates
pub struct UnsortedHeap<K: Key> {
    chain: Chain<K>,
}

impl<K: Key> Heap<K> for UnsortedHeap<K> {
    const VARIANT: Variant = Variant::Unsorted;

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
        debug!(
            receiver = self.chain.len(),
            other = other.chain.len(),
            "splicing unsorted chains"
        );
        self.chain.append(&mut other.chain);
    }

    fn head(&self) -> Option<&Node<K>> {
        self.chain.head()
    }

    fn iter(&self) -> Iter<'_, K> {
        self.chain.iter()
    }
}

impl<K: Key> Default for UnsortedHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> Extend<K> for UnsortedHeap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<K: Key> FromIterator<K> for UnsortedHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<K: Key> fmt::Debug for UnsortedHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnsortedHeap").field(&self.chain).finish()
    }
}

impl<K: Key + fmt::Display> fmt::Display for UnsortedHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}
