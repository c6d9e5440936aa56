//! Sorted-chain heap
//!
//! The backing chain is kept in non-decreasing order, so the minimum is
//! always the head.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `insert`      | O(n)       |
//! | `minimum`     | O(1)       |
//! | `extract_min` | O(1)       |
//! | `union`       | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use linked_heaps::Heap;
//! use linked_heaps::sorted::SortedHeap;
//!
//! let mut heap = SortedHeap::new();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.minimum(), 1);
//! assert_eq!(heap.extract_min(), 1);
//! assert_eq!(heap.extract_min(), 2);
//! assert_eq!(heap.extract_min(), 3);
//! assert_eq!(heap.extract_min(), 0);
//! ```

use std::fmt;

use tracing::debug;

use crate::list_heap::Variant;
use crate::node::{seek, Chain, Iter, Link, Node};
use crate::traits::{Heap, Key};

/// A heap whose chain is always sorted
pub struct SortedHeap<K: Key> {
    chain: Chain<K>,
}

impl<K: Key> Heap<K> for SortedHeap<K> {
    const VARIANT: Variant = Variant::Sorted;

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
        if self.chain.head().is_none_or(|head| head.value() >= value) {
            self.chain.push_front(value);
            return true;
        }

        // The head is strictly smaller, so the new node goes somewhere after
        // it: past every following node that is <= value.
        let (head, len) = self.chain.parts_mut();
        let mut past_head = false;
        let link = seek(head, |node| {
            let advance = !past_head || node.value() <= value;
            past_head = true;
            advance
        });
        let rest = link.take();
        *link = Some(Box::new(Node::new(value, rest)));
        *len += 1;
        true
    }

    fn peek(&self) -> Option<K> {
        self.chain.head().map(Node::value)
    }

    fn pop(&mut self) -> Option<K> {
        self.chain.pop_front()
    }

    fn union(&mut self, other: &mut Self) {
        let (left, left_len) = self.chain.take_link();
        let (right, right_len) = other.chain.take_link();
        debug!(
            receiver = left_len,
            other = right_len,
            "merging sorted chains"
        );

        let (head, len) = self.chain.parts_mut();
        *head = merge_sorted(left, right);
        *len = left_len + right_len;
    }

    fn head(&self) -> Option<&Node<K>> {
        self.chain.head()
    }

    fn iter(&self) -> Iter<'_, K> {
        self.chain.iter()
    }
}

/// Merges two sorted chains by relinking their nodes
///
/// On equal heads the node from `left` is taken first.
fn merge_sorted<K: Key>(mut left: Link<K>, mut right: Link<K>) -> Link<K> {
    let mut merged: Link<K> = None;
    let mut tail = &mut merged;

    loop {
        let take_right = match (left.as_deref(), right.as_deref()) {
            (Some(l), Some(r)) => r.value() < l.value(),
            _ => break,
        };
        let source = if take_right { &mut right } else { &mut left };
        if let Some(mut node) = source.take() {
            *source = node.take_next();
            tail = tail.insert(node).next_mut();
        }
    }

    *tail = left.or(right);
    merged
}

impl<K: Key> Default for SortedHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> Extend<K> for SortedHeap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<K: Key> FromIterator<K> for SortedHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<K: Key> fmt::Debug for SortedHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SortedHeap").field(&self.chain).finish()
    }
}

impl<K: Key + fmt::Display> fmt::Display for SortedHeap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chain, f)
    }
}
