//! Stress tests for long chains
//!
//! These tests build chains far longer than any recursive traversal could
//! survive, and check that drop, union, and draining stay iterative.

use linked_heaps::disjoint::DisjointSetHeap;
use linked_heaps::sorted::SortedHeap;
use linked_heaps::unsorted::UnsortedHeap;
use linked_heaps::Heap;

const LONG: u32 = 300_000;

/// Test dropping a very long chain
fn test_drop_long_chain<H: Heap<u32>>() {
    let mut heap = H::new();
    // Descending inserts keep every insert O(1).
    for i in (0..LONG).rev() {
        heap.insert(i);
    }
    assert_eq!(heap.len(), LONG as usize);
    drop(heap);
}

/// Test union of two long chains followed by a full drop
fn test_long_union<H: Heap<u32>>() {
    let mut a = H::new();
    let mut b = H::new();
    for i in (0..LONG / 2).rev() {
        a.insert(2 * i);
        b.insert(2 * i + 1);
    }
    a.union(&mut b);
    assert_eq!(a.len(), LONG as usize);
    assert!(b.is_empty());
    assert_eq!(a.minimum(), 0);
}

/// Test alternating insert and extract
fn test_alternating_ops<H: Heap<i32>>() {
    let mut heap = H::new();

    for i in 0..200 {
        heap.insert(i * 2);
        heap.insert(i * 2 + 1);
        assert_eq!(heap.extract_min(), i);
    }

    assert_eq!(heap.len(), 200);
    let mut last = i32::MIN;
    while let Some(v) = heap.pop() {
        assert!(v >= last);
        last = v;
    }
    assert!(heap.is_empty());
}

/// Test repeated unions into one accumulator
fn test_repeated_unions<H: Heap<i32>>() {
    let mut acc = H::new();
    for round in 0..50 {
        let mut part = H::new();
        for j in 0..20 {
            part.insert(round * 20 + j);
        }
        acc.union(&mut part);
        assert!(part.is_empty());
    }
    assert_eq!(acc.len(), 1000);
    for expected in 0..1000 {
        assert_eq!(acc.extract_min(), expected);
    }
}

#[test]
fn test_sorted_drop_long_chain() {
    test_drop_long_chain::<SortedHeap<u32>>();
}

#[test]
fn test_sorted_long_union() {
    test_long_union::<SortedHeap<u32>>();
}

#[test]
fn test_sorted_alternating() {
    test_alternating_ops::<SortedHeap<i32>>();
}

#[test]
fn test_sorted_repeated_unions() {
    test_repeated_unions::<SortedHeap<i32>>();
}

#[test]
fn test_unsorted_drop_long_chain() {
    test_drop_long_chain::<UnsortedHeap<u32>>();
}

#[test]
fn test_unsorted_long_union() {
    test_long_union::<UnsortedHeap<u32>>();
}

#[test]
fn test_unsorted_alternating() {
    test_alternating_ops::<UnsortedHeap<i32>>();
}

#[test]
fn test_unsorted_repeated_unions() {
    test_repeated_unions::<UnsortedHeap<i32>>();
}

#[test]
fn test_disjoint_set_alternating() {
    test_alternating_ops::<DisjointSetHeap<i32>>();
}

#[test]
fn test_disjoint_set_repeated_unions() {
    test_repeated_unions::<DisjointSetHeap<i32>>();
}

/// Builds a disjoint-set heap over `range` from unions of small pieces,
/// since each insert scans the whole chain for duplicates
fn disjoint_from_pieces(range: std::ops::Range<u32>) -> DisjointSetHeap<u32> {
    let mut heap = DisjointSetHeap::new();
    let mut start = range.start;
    while start < range.end {
        let end = (start + 1000).min(range.end);
        let mut piece: DisjointSetHeap<u32> = (start..end).collect();
        heap.union(&mut piece);
        start = end;
    }
    heap
}

#[test]
fn test_disjoint_set_long_union() {
    let n = 100_000;
    let mut a = disjoint_from_pieces(0..n);
    let mut b = disjoint_from_pieces(n / 2..n + n / 2);
    assert_eq!(a.len(), n as usize);
    assert_eq!(b.len(), n as usize);

    a.union(&mut b);

    assert_eq!(a.len(), (n + n / 2) as usize);
    assert!(b.is_empty());
    assert_eq!(a.minimum(), 0);
    drop(a);
}
