//! Prints backing chains while a heap is built and merged
//!
//! ```bash
//! cargo run --example print_chain -- disjoint-set
//! ```
//!
//! The variant argument is optional and defaults to `disjoint-set`.

use linked_heaps::node::Node;
use linked_heaps::{HeapError, ListHeap, Variant};

/// Walks a chain from `head` to its end without touching it
fn print_chain(head: Option<&Node<i32>>) {
    let mut values = Vec::new();
    let mut node = head;
    while let Some(n) = node {
        values.push(n.value().to_string());
        node = n.next();
    }
    println!("{}", values.join(" "));
}

fn main() -> Result<(), HeapError> {
    let variant: Variant = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => Variant::DisjointSet,
    };
    println!("variant = {variant}");

    let mut heap = ListHeap::new(variant);
    for value in [4, -4, 1, -1, 100] {
        heap.insert(value);
        print_chain(heap.head());
    }
    println!("min = {}", heap.minimum());

    let mut other = ListHeap::new(variant);
    other.insert(5);
    other.insert(-1);

    heap.union(&mut other);

    print_chain(heap.head());
    print_chain(other.head());
    Ok(())
}
