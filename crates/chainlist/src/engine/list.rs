//! Singly-linked list engine.
//!
//! ## Purpose
//!
//! This module implements the list engine everything else adapts: head/tail
//! bookkeeping over arena-stored nodes, insertion at either end or an
//! arbitrary index, deletion by value or position, linear search, in-place
//! reversal, and bulk load/export.
//!
//! ## Design notes
//!
//! * **Handles, not pointers**: Successor links are arena handles, so every
//!   structural edit mutates exactly one slot at a time through the
//!   predecessor's `next` field.
//! * **Incremental length**: `len` is maintained by every mutating
//!   operation instead of being derived from a full export.
//! * **Presence over faults**: Operations on an empty or exhausted list
//!   return `None`/empty results; the only error the engine surfaces comes
//!   from the comparator's built-in ordering.
//! * **Scoped bounds**: Comparator-consuming operations require
//!   `T: PartialOrd`; structural operations work for any element type.
//!
//! ## Key concepts
//!
//! * **Degrading insert**: Inserting past the end appends instead of
//!   failing; this is policy, not an error path.
//! * **Sweeping remove**: Delete-by-value removes every matching node in
//!   one pass and recomputes the tail from the final walk cursor.
//! * **Tagged search**: [`Query`] makes "by value" versus "by predicate" an
//!   explicit caller decision.
//!
//! ## Invariants
//!
//! * `head` is `None` iff the list is empty; `tail` is `None` iff `head` is.
//! * Following `next` from `head` reaches `tail` in exactly `len - 1` steps,
//!   and the tail node's `next` is `None`.
//! * The successor chain is finite and acyclic.
//!
//! ## Non-goals
//!
//! * This module does not provide interior locking; an instance assumes
//!   exclusive access for the duration of each operation.
//! * This module does not expose nodes or handles to callers.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Debug};

// Internal dependencies
use crate::engine::output::{NodeEntry, Removal};
use crate::order::comparator::{CompareFn, Comparator};
use crate::primitives::arena::{Arena, Handle};
use crate::primitives::errors::ChainError;
use crate::primitives::node::Node;

// ============================================================================
// Search Query
// ============================================================================

/// What to look for during a linear search.
///
/// The caller, not the engine, decides which search runs by picking the
/// variant; there is no inference from argument shape.
pub enum Query<'a, T> {
    /// Match the first node whose value is comparator-equal to this one.
    Value(&'a T),

    /// Match the first node whose value satisfies this predicate.
    Predicate(&'a dyn Fn(&T) -> bool),
}

// Manual implementations: the variants hold only references, so a query is
// copyable regardless of `T`.
impl<T> Clone for Query<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Query<'_, T> {}

// ============================================================================
// Linked List
// ============================================================================

/// Singly-linked list with head and tail tracking over arena storage.
pub struct LinkedList<T> {
    /// Node storage; successor links are handles into this arena.
    nodes: Arena<Node<T>>,

    /// First node of the chain, `None` when empty.
    head: Option<Handle>,

    /// Last node of the chain, `None` exactly when `head` is.
    tail: Option<Handle>,

    /// Number of nodes, maintained by every mutating operation.
    len: usize,

    /// Injected comparison capability.
    compare: Comparator<T>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty list using the built-in ordering for comparisons.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
            compare: Comparator::default(),
        }
    }

    /// Create an empty list with a caller-supplied comparison function.
    pub fn with_comparator(f: CompareFn<T>) -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
            compare: Comparator::with_fn(f),
        }
    }

    /// Create a list holding `values` in iteration order, head to tail.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.extend(values);
        list
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Prepend a value; it becomes the new head. O(1).
    pub fn push_front(&mut self, value: T) {
        let handle = self.nodes.insert(Node::new(value, self.head));
        self.head = Some(handle);
        if self.tail.is_none() {
            self.tail = Some(handle);
        }
        self.len += 1;
    }

    /// Append a value; it becomes the new tail. O(1).
    pub fn push_back(&mut self, value: T) {
        let handle = self.nodes.insert(Node::new(value, None));
        match self.tail {
            Some(tail) => self.nodes.get_mut(tail).next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.len += 1;
    }

    /// Splice a value in at `index`. O(index).
    ///
    /// Index 0 delegates to [`push_front`](Self::push_front). An index past
    /// the current length degrades to [`push_back`](Self::push_back); this
    /// is documented policy, never an out-of-range failure.
    pub fn insert(&mut self, value: T, index: usize) {
        if index == 0 {
            self.push_front(value);
            return;
        }

        // Walk to the node at position index - 1.
        let mut count = 1;
        let mut cursor = self.head;
        while let Some(current) = cursor {
            if count == index {
                break;
            }
            cursor = self.nodes.get(current).next;
            count += 1;
        }

        match cursor {
            Some(prev) => {
                let successor = self.nodes.get(prev).next;
                let handle = self.nodes.insert(Node::new(value, successor));
                self.nodes.get_mut(prev).next = Some(handle);
                if successor.is_none() {
                    self.tail = Some(handle);
                }
                self.len += 1;
            }
            // Ran off the end before reaching index - 1.
            None => self.push_back(value),
        }
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Remove ALL nodes comparator-equal to `target`. O(n).
    ///
    /// Strips matching nodes from the head while the new head also matches,
    /// then walks the remainder unlinking matching successors through each
    /// predecessor's slot. The tail is recomputed from the final walk
    /// cursor, so removing the old tail leaves the last surviving node as
    /// the new one.
    ///
    /// The returned [`Removal`] carries the last removed value and the
    /// removed count; an empty or unmatched list yields an empty `Removal`,
    /// not an error.
    pub fn remove(&mut self, target: &T) -> Result<Removal<T>, ChainError>
    where
        T: PartialOrd,
    {
        if self.head.is_none() {
            return Ok(Removal::none());
        }

        let mut last = None;
        let mut count = 0;

        // Strip matching heads.
        while let Some(head) = self.head {
            if !self.compare.equal(&self.nodes.get(head).value, target)? {
                break;
            }
            let node = self.nodes.remove(head);
            self.head = node.next;
            last = Some(node.value);
            count += 1;
            self.len -= 1;
        }

        // Unlink matching successors through the predecessor's slot.
        let mut cursor = self.head;
        if let Some(mut current) = cursor {
            while let Some(next) = self.nodes.get(current).next {
                if self.compare.equal(&self.nodes.get(next).value, target)? {
                    let node = self.nodes.remove(next);
                    self.nodes.get_mut(current).next = node.next;
                    last = Some(node.value);
                    count += 1;
                    self.len -= 1;
                } else {
                    current = next;
                }
            }
            cursor = Some(current);
        }

        // The cursor rests on the last surviving node, which is the tail
        // whether or not the old tail went.
        self.tail = cursor;

        Ok(Removal { value: last, count })
    }

    /// Remove and return the head value. O(1).
    ///
    /// Emptying the list clears the tail as well; an already-empty list
    /// returns `None`.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.remove(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Remove and return the tail value. O(n).
    ///
    /// Walks from the head to the penultimate node, detaches it from the
    /// old tail, and makes it the new tail. A single-element list clears
    /// both ends; an empty list returns `None`.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;

        if self.head == Some(tail) {
            self.head = None;
            self.tail = None;
            self.len = 0;
            return Some(self.nodes.remove(tail).value);
        }

        // Walk to the node just before the tail.
        let mut current = self.head?;
        while let Some(next) = self.nodes.get(current).next {
            if next == tail {
                break;
            }
            current = next;
        }

        self.nodes.get_mut(current).next = None;
        self.tail = Some(current);
        self.len -= 1;
        Some(self.nodes.remove(tail).value)
    }

    /// Drop every node. O(1) bookkeeping; the arena recycles in bulk.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Return the first value matching `query`, walking head to tail. O(n).
    ///
    /// An empty list or a miss yields `Ok(None)`. Only a
    /// [`Query::Value`] search can fail, and only through the built-in
    /// ordering of the comparator.
    pub fn find(&self, query: Query<'_, T>) -> Result<Option<&T>, ChainError>
    where
        T: PartialOrd,
    {
        let mut cursor = self.head;
        while let Some(current) = cursor {
            let node = self.nodes.get(current);
            let hit = match query {
                Query::Predicate(predicate) => predicate(&node.value),
                Query::Value(value) => self.compare.equal(&node.value, value)?,
            };
            if hit {
                return Ok(Some(&node.value));
            }
            cursor = node.next;
        }
        Ok(None)
    }

    /// Search by comparator equality. O(n).
    #[inline]
    pub fn find_value(&self, value: &T) -> Result<Option<&T>, ChainError>
    where
        T: PartialOrd,
    {
        self.find(Query::Value(value))
    }

    /// Search by predicate; infallible. O(n).
    #[inline]
    pub fn find_where<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().find(|&value| predicate(value))
    }

    // ========================================================================
    // Reversal
    // ========================================================================

    /// Reverse the chain in place. O(n), no allocation.
    ///
    /// Each node's successor is rewritten to its former predecessor; head
    /// and tail swap at the end.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(current) = cursor {
            let node = self.nodes.get_mut(current);
            cursor = node.next;
            node.next = prev;
            prev = Some(current);
        }
        self.tail = self.head;
        self.head = prev;
    }

    // ========================================================================
    // Access and Export
    // ========================================================================

    /// Borrow the head value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|handle| &self.nodes.get(handle).value)
    }

    /// Borrow the tail value.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|handle| &self.nodes.get(handle).value)
    }

    /// Number of nodes. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Iterate over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// Export the chain as node views, head to tail, without mutating. O(n).
    pub fn entries(&self) -> Vec<NodeEntry<T>>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(current) = cursor {
            let node = self.nodes.get(current);
            out.push(NodeEntry {
                value: node.value.clone(),
                has_next: node.next.is_some(),
            });
            cursor = node.next;
        }
        out
    }

    /// Export the values as a freshly allocated `Vec`, head to tail. O(n).
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_values(iter)
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Borrowing iterator over a list's values, head to tail.
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    cursor: Option<Handle>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        let node = self.nodes.get(current);
        self.cursor = node.next;
        Some(&node.value)
    }
}
