//! # chainlist: singly-linked-list engine with LIFO/FIFO adapters
//!
//! A singly-linked-list engine with head and tail tracking, plus the two
//! adapter structures built directly on top of it: a LIFO [`Stack`] and a
//! FIFO [`Queue`]. Nodes live in an index-addressed arena, so every
//! structural edit is a single-slot mutation and no node is ever shared
//! between lists.
//!
//! [`Stack`]: crate::prelude::Stack
//! [`Queue`]: crate::prelude::Queue
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use chainlist::prelude::*;
//!
//! let mut list = LinkedList::from_values([1, 2, 1, 3, 1]);
//!
//! // Remove every node equal to 1 in one sweep.
//! let removed = list.remove(&1)?;
//! assert_eq!(removed.count, 3);
//! assert_eq!(list.to_vec(), vec![2, 3]);
//! assert_eq!(list.back(), Some(&3));
//!
//! // Reverse in place, no allocation.
//! list.reverse();
//! assert_eq!(list.to_vec(), vec![3, 2]);
//! # Result::<(), ChainError>::Ok(())
//! ```
//!
//! ### Builder and Shapes
//!
//! ```rust
//! use chainlist::prelude::*;
//!
//! // Seed a stack; the first seed value sits on top.
//! let mut stack = Chain::new().seed(vec![30, 20, 10]).shape(Lifo).build()?;
//! stack.push(40);
//! assert_eq!(stack.pop(), Some(40));
//! assert_eq!(stack.pop(), Some(30));
//!
//! // Queues track both ends.
//! let mut queue = Chain::new().seed(vec![10, 20]).shape(Fifo).build()?;
//! queue.enqueue(30);
//! assert_eq!(queue.dequeue(), Some(10));
//! assert_eq!(queue.rear(), Some(&30));
//! # Result::<(), ChainError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Operations on an empty or exhausted structure return `None` or an empty
//! result, never an error. The one steady-state error the engine surfaces
//! is [`ChainError::IncomparableValues`], raised when the built-in ordering
//! cannot order a pair of values:
//!
//! ```rust
//! use chainlist::prelude::*;
//!
//! let list = LinkedList::from_values([1.0_f64, f64::NAN]);
//! assert_eq!(list.find_value(&2.0), Err(ChainError::IncomparableValues));
//!
//! // A caller-supplied total comparison never fails.
//! let list = LinkedList::with_comparator(f64::total_cmp);
//! assert_eq!(list.find_value(&2.0), Ok(None));
//! ```
//!
//! [`ChainError::IncomparableValues`]: crate::prelude::ChainError
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency (`alloc` is still required):
//!
//! ```toml
//! [dependencies]
//! chainlist = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, arena storage, node shape.
mod primitives;

// Layer 2: Order - the injected comparison capability.
mod order;

// Layer 3: Engine - the list engine and its output types.
mod engine;

// Layer 4: Adapters - LIFO stack and FIFO queue.
mod adapters;

// High-level fluent API for constructing chain structures.
mod api;

// Standard chainlist prelude.
pub mod prelude {
    pub use crate::api::Shape::{Fifo, Lifo, Linear};
    pub use crate::api::{
        ChainBuilder as Chain, ChainError, ChainShape, Comparator, Iter, LinkedList, NodeEntry,
        Query, Queue, Removal, Stack,
    };
    pub use crate::order::comparator::CompareFn;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod order {
        pub use crate::order::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
