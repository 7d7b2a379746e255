//! High-level API for constructing chain structures.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring a chain (comparator, seed values) and choosing a
//! shape (Linear list, Lifo stack, or Fifo queue).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all options.
//! * **Polymorphic**: Marker types transition to shape-specific builders.
//! * **Validated**: Option misuse is detected during configuration, stored,
//!   and surfaced when `build()` is called.
//!
//! ## Key concepts
//!
//! * **Shapes**: Linear, Lifo, and Fifo structures over the same engine.
//! * **Configuration Flow**: Builder pattern ending in `.shape(...)`.
//! * **Deferred Errors**: A comparator handed to a Lifo or Fifo shape is an
//!   [`ChainError::UnsupportedOption`] at `build()`, since those adapters
//!   never compare values.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ChainBuilder`] via `Chain::new()`.
//! 2. Chain configuration methods (`.comparator()`, `.seed()`).
//! 3. Select a shape via `.shape(Lifo)` to get a shape builder, then
//!    `.build()`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::order::comparator::CompareFn;

// Publicly re-exported types
pub use crate::adapters::queue::Queue;
pub use crate::adapters::stack::Stack;
pub use crate::engine::list::{Iter, LinkedList, Query};
pub use crate::engine::output::{NodeEntry, Removal};
pub use crate::order::comparator::Comparator;
pub use crate::primitives::errors::ChainError;

/// Marker types for selecting chain shapes.
#[allow(non_snake_case)]
pub mod Shape {
    pub use super::{Fifo, Lifo, Linear};
}

// ============================================================================
// Chain Builder
// ============================================================================

/// Fluent builder for configuring a chain structure.
#[derive(Debug, Clone)]
pub struct ChainBuilder<T> {
    /// Caller-supplied comparison function.
    pub comparator: Option<CompareFn<T>>,

    /// Initial contents, head/top/front first.
    pub seed: Option<Vec<T>>,

    /// Tracks if any option was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T> Default for ChainBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChainBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            comparator: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Select a shape to transition to a shape-specific builder.
    pub fn shape<S>(self, _shape: S) -> S::Output
    where
        S: ChainShape<T>,
    {
        S::convert(self)
    }

    /// Set a caller-supplied comparison function.
    pub fn comparator(mut self, f: CompareFn<T>) -> Self {
        if self.comparator.is_some() {
            self.duplicate_param = Some("comparator");
        }
        self.comparator = Some(f);
        self
    }

    /// Set the initial contents, in order.
    pub fn seed(mut self, values: Vec<T>) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(values);
        self
    }
}

/// Trait for transitioning from the generic builder to a shape builder.
pub trait ChainShape<T> {
    /// The output shape builder.
    type Output;

    /// Convert a generic [`ChainBuilder`] into a shape-specific builder.
    fn convert(builder: ChainBuilder<T>) -> Self::Output;
}

// ============================================================================
// Linear Shape
// ============================================================================

/// Marker for the plain linked-list shape.
#[derive(Debug, Clone, Copy)]
pub struct Linear;

/// Builder for the linear list shape.
#[derive(Debug, Clone)]
pub struct LinearChainBuilder<T> {
    /// Caller-supplied comparison function.
    pub comparator: Option<CompareFn<T>>,

    /// Initial contents, head first.
    pub seed: Option<Vec<T>>,

    /// Tracks duplicate option configuration.
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T> ChainShape<T> for Linear {
    type Output = LinearChainBuilder<T>;

    fn convert(builder: ChainBuilder<T>) -> Self::Output {
        LinearChainBuilder {
            comparator: builder.comparator,
            seed: builder.seed,
            duplicate_param: builder.duplicate_param,
        }
    }
}

impl<T> LinearChainBuilder<T> {
    /// Build the list.
    pub fn build(self) -> Result<LinkedList<T>, ChainError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(ChainError::DuplicateParameter { parameter });
        }

        let mut list = match self.comparator {
            Some(f) => LinkedList::with_comparator(f),
            None => LinkedList::new(),
        };
        if let Some(seed) = self.seed {
            list.extend(seed);
        }
        Ok(list)
    }
}

// ============================================================================
// Lifo Shape
// ============================================================================

/// Marker for the LIFO stack shape.
#[derive(Debug, Clone, Copy)]
pub struct Lifo;

/// Builder for the stack shape.
#[derive(Debug, Clone)]
pub struct LifoChainBuilder<T> {
    /// Initial contents, top first.
    pub seed: Option<Vec<T>>,

    /// Error recorded during shape conversion.
    pub deferred_error: Option<ChainError>,

    /// Tracks duplicate option configuration.
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T> ChainShape<T> for Lifo {
    type Output = LifoChainBuilder<T>;

    fn convert(builder: ChainBuilder<T>) -> Self::Output {
        let deferred_error = builder.comparator.map(|_| ChainError::UnsupportedOption {
            shape: "Lifo",
            option: "comparator",
        });
        LifoChainBuilder {
            seed: builder.seed,
            deferred_error,
            duplicate_param: builder.duplicate_param,
        }
    }
}

impl<T> LifoChainBuilder<T> {
    /// Build the stack.
    pub fn build(self) -> Result<Stack<T>, ChainError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        if let Some(parameter) = self.duplicate_param {
            return Err(ChainError::DuplicateParameter { parameter });
        }

        Ok(Stack::from_values(self.seed.unwrap_or_default()))
    }
}

// ============================================================================
// Fifo Shape
// ============================================================================

/// Marker for the FIFO queue shape.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

/// Builder for the queue shape.
#[derive(Debug, Clone)]
pub struct FifoChainBuilder<T> {
    /// Initial contents, front first.
    pub seed: Option<Vec<T>>,

    /// Error recorded during shape conversion.
    pub deferred_error: Option<ChainError>,

    /// Tracks duplicate option configuration.
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T> ChainShape<T> for Fifo {
    type Output = FifoChainBuilder<T>;

    fn convert(builder: ChainBuilder<T>) -> Self::Output {
        let deferred_error = builder.comparator.map(|_| ChainError::UnsupportedOption {
            shape: "Fifo",
            option: "comparator",
        });
        FifoChainBuilder {
            seed: builder.seed,
            deferred_error,
            duplicate_param: builder.duplicate_param,
        }
    }
}

impl<T> FifoChainBuilder<T> {
    /// Build the queue.
    pub fn build(self) -> Result<Queue<T>, ChainError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        if let Some(parameter) = self.duplicate_param {
            return Err(ChainError::DuplicateParameter { parameter });
        }

        Ok(Queue::from_values(self.seed.unwrap_or_default()))
    }
}
