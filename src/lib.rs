//! Mergeable Heaps over Linked Chains
//!
//! This crate provides the simple linked-list family of mergeable heaps over
//! integer keys. Every heap is backed by a singly linked chain of owned nodes
//! and supports insert, minimum, extract-min and a destructive union.
//!
//! # Variants
//!
//! - **Sorted** ([`SortedHeap`]): chain kept in non-decreasing order; O(1) minimum, O(n + m) union by merging
//! - **Unsorted** ([`UnsortedHeap`]): O(1) insert, O(n) minimum, union by splicing at the tail
//! - **DisjointSet** ([`DisjointSetHeap`]): unsorted chain of distinct values; duplicate inserts are rejected and union drops repeated values
//!
//! [`ListHeap`] wraps any of the three behind a [`Variant`] chosen at runtime.
//!
//! # Empty heaps
//!
//! `minimum` and `extract_min` return zero on an empty heap. `peek` and `pop`
//! return `None` instead, for callers that store zero.
//!
//! # Example
//!
//! ```rust
//! use linked_heaps::Heap;
//! use linked_heaps::unsorted::UnsortedHeap;
//!
//! let mut a: UnsortedHeap<i32> = [10, 20].into_iter().collect();
//! let mut b: UnsortedHeap<i32> = [30, 40].into_iter().collect();
//! a.union(&mut b);
//!
//! assert_eq!(a.len(), 4);
//! assert_eq!(a.extract_min(), 10);
//! assert!(b.is_empty());
//! assert_eq!(b.extract_min(), 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod disjoint;
pub mod error;
pub mod list_heap;
pub mod node;
pub mod sorted;
pub mod traits;
pub mod unsorted;

pub use disjoint::DisjointSetHeap;
pub use error::HeapError;
pub use list_heap::{ListHeap, Variant};
pub use sorted::SortedHeap;
pub use traits::{Heap, Key};
pub use unsorted::UnsortedHeap;
