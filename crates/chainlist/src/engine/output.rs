//! Output types produced by the list engine.
//!
//! ## Purpose
//!
//! This module defines the values the engine hands back to callers: the
//! per-node export view used for rendering, and the summary of a
//! delete-by-value sweep.
//!
//! ## Design notes
//!
//! * **Plain data**: Both types are inert structs; they hold no handles and
//!   keep no connection to the list they came from.
//! * **Presence over faults**: Callers distinguish "removed something" from
//!   "removed nothing" via the fields, never via an error.

// ============================================================================
// Node Entry
// ============================================================================

/// Export view of one node: its value and whether a successor follows.
///
/// Produced head-to-tail by [`LinkedList::entries`](crate::engine::list::LinkedList::entries)
/// without mutating the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEntry<T> {
    /// The node's value.
    pub value: T,

    /// Whether the node has a successor (`false` exactly at the tail).
    pub has_next: bool,
}

// ============================================================================
// Removal
// ============================================================================

/// Outcome of a delete-by-value sweep.
///
/// The sweep removes every matching node; `value` is the last one removed
/// and `count` says how many went. When duplicates exist, rely on `count`
/// rather than on which instance `value` carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal<T> {
    /// The last value removed, `None` when nothing matched.
    pub value: Option<T>,

    /// Number of nodes removed.
    pub count: usize,
}

impl<T> Removal<T> {
    /// A sweep that removed nothing.
    #[inline]
    pub(crate) fn none() -> Self {
        Self {
            value: None,
            count: 0,
        }
    }

    /// Whether the sweep removed at least one node.
    #[inline]
    pub fn removed_any(&self) -> bool {
        self.count > 0
    }
}
