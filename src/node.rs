//! Singly linked chain cells
//!
//! Every heap in this crate is backed by a [`Chain`]: an owned head link plus
//! a cached length. Each [`Node`] owns the node after it through a
//! [`Link`], so a chain is a move-only structure. Reading walks it by shared
//! borrow, splicing walks it with `&mut Link` cursors.

use std::fmt;
use std::iter::FusedIterator;

/// An owning pointer to the next node, or `None` at the end of a chain
pub type Link<K> = Option<Box<Node<K>>>;

/// A single cell of a chain
pub struct Node<K> {
    value: K,
    next: Link<K>,
}

impl<K: Copy> Node<K> {
    /// Creates a node holding `value` followed by `next`
    pub fn new(value: K, next: Link<K>) -> Self {
        Self { value, next }
    }

    /// The stored value
    pub fn value(&self) -> K {
        self.value
    }

    /// The node after this one, if any
    pub fn next(&self) -> Option<&Node<K>> {
        self.next.as_deref()
    }

    /// Mutable access to the outgoing link
    pub fn next_mut(&mut self) -> &mut Link<K> {
        &mut self.next
    }

    /// Replaces the outgoing link, returning the old one
    pub fn set_next(&mut self, next: Link<K>) -> Link<K> {
        std::mem::replace(&mut self.next, next)
    }

    /// Detaches and returns the rest of the chain after this node
    pub fn take_next(&mut self) -> Link<K> {
        self.next.take()
    }
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    // Only the local cell; a derived impl would recurse down the whole chain.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// Advances `link` past every node for which `advance` returns true
///
/// Returns the first link whose node was rejected, or the terminal `None`
/// link if every node was accepted.
pub(crate) fn seek<K, F>(mut link: &mut Link<K>, mut advance: F) -> &mut Link<K>
where
    F: FnMut(&Node<K>) -> bool,
{
    while link.as_deref().is_some_and(&mut advance) {
        if let Some(node) = link {
            link = &mut node.next;
        }
    }
    link
}

/// An owned chain of nodes
pub struct Chain<K> {
    head: Link<K>,
    len: usize,
}

impl<K: Copy> Chain<K> {
    /// Creates an empty chain
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes reachable from the head
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the chain has no nodes
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The first node, if any
    pub fn head(&self) -> Option<&Node<K>> {
        self.head.as_deref()
    }

    /// Iterates over the values from head to tail
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Prepends `value` in O(1)
    pub fn push_front(&mut self, value: K) {
        let next = self.head.take();
        self.head = Some(Box::new(Node::new(value, next)));
        self.len += 1;
    }

    /// Removes the head node and returns its value
    pub fn pop_front(&mut self) -> Option<K> {
        let mut node = self.head.take()?;
        self.head = node.take_next();
        self.len -= 1;
        Some(node.value)
    }

    /// Smallest value in the chain, by linear scan
    pub fn min(&self) -> Option<K>
    where
        K: Ord,
    {
        self.iter().min()
    }

    /// Returns true if some node holds `value`
    pub fn contains(&self, value: K) -> bool
    where
        K: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Splices out the first node holding `value`
    ///
    /// Returns false, leaving the chain untouched, if no node holds it.
    pub fn remove_first(&mut self, value: K) -> bool
    where
        K: PartialEq,
    {
        let link = seek(&mut self.head, |node| node.value != value);
        match link.take() {
            Some(mut node) => {
                *link = node.take_next();
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Moves the raw head link out, leaving this chain empty
    pub(crate) fn take_link(&mut self) -> (Link<K>, usize) {
        (self.head.take(), std::mem::take(&mut self.len))
    }

    /// Mutable access to the head link together with the length counter
    ///
    /// Callers that relink nodes through the head must keep `len` equal to
    /// the number of reachable nodes.
    pub(crate) fn parts_mut(&mut self) -> (&mut Link<K>, &mut usize) {
        (&mut self.head, &mut self.len)
    }

    /// Attaches every node of `other` after the last node in O(n), leaving
    /// `other` empty
    ///
    /// Returns the link where the appended segment starts, together with the
    /// length counter, which already includes the appended nodes.
    pub(crate) fn append(&mut self, other: &mut Self) -> (&mut Link<K>, &mut usize) {
        let (rest, rest_len) = other.take_link();
        self.len += rest_len;
        let segment = seek(&mut self.head, |_| true);
        *segment = rest;
        (segment, &mut self.len)
    }
}

impl<K: Copy> Default for Chain<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Chain<K> {
    fn drop(&mut self) {
        // Unlink front to back so long chains do not drop recursively.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<K: Copy + fmt::Debug> fmt::Debug for Chain<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: Copy + fmt::Display> fmt::Display for Chain<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}

/// Iterator over the values of a chain, head to tail
pub struct Iter<'a, K> {
    next: Option<&'a Node<K>>,
    remaining: usize,
}

impl<K: Copy> Iterator for Iter<'_, K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let node = self.next?;
        self.next = node.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Copy> ExactSizeIterator for Iter<'_, K> {}

impl<K: Copy> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<K: Copy + fmt::Debug> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
