//! Kani verification proofs for heap operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use linked_heaps::disjoint::DisjointSetHeap;
#[cfg(kani)]
use linked_heaps::sorted::SortedHeap;
#[cfg(kani)]
use linked_heaps::unsorted::UnsortedHeap;
#[cfg(kani)]
use linked_heaps::Heap;

/// Proof that insert on a sorted heap keeps the chain ordered
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_sorted_insert_keeps_order() {
    let mut heap: SortedHeap<u8> = SortedHeap::new();
    for _ in 0..4 {
        heap.insert(kani::any());
    }

    let mut prev = None;
    for v in heap.iter() {
        if let Some(p) = prev {
            assert!(p <= v);
        }
        prev = Some(v);
    }
    assert!(heap.len() == 4);
}

/// Proof that extract_min returns the smallest inserted value
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_unsorted_extract_min() {
    let mut heap: UnsortedHeap<i8> = UnsortedHeap::new();
    let a: i8 = kani::any();
    let b: i8 = kani::any();
    let c: i8 = kani::any();
    heap.insert(a);
    heap.insert(b);
    heap.insert(c);

    let min = heap.extract_min();
    assert!(min <= a && min <= b && min <= c);
    assert!(min == a || min == b || min == c);
    assert!(heap.len() == 2);
}

/// Proof that a duplicate insert is rejected without changing the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_disjoint_set_rejects_duplicate() {
    let mut heap: DisjointSetHeap<u8> = DisjointSetHeap::new();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    heap.insert(a);
    heap.insert(b);
    let len = heap.len();

    assert!(!heap.insert(a));
    assert!(heap.len() == len);
}

/// Proof that union empties the argument heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_union_empties_other() {
    let mut a: DisjointSetHeap<u8> = DisjointSetHeap::new();
    let mut b: DisjointSetHeap<u8> = DisjointSetHeap::new();
    a.insert(kani::any());
    a.insert(kani::any());
    b.insert(kani::any());
    b.insert(kani::any());
    let total = a.len() + b.len();

    a.union(&mut b);

    assert!(b.is_empty());
    assert!(b.extract_min() == 0);
    assert!(a.len() <= total);
    assert!(a.len() >= 1);
}
