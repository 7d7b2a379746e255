//! Comparison capability for value equality and ordering.
//!
//! ## Purpose
//!
//! This module provides the comparator injected into the list engine. It
//! decides ordering and equality between two element values, either through
//! a caller-supplied total comparison function or through the built-in
//! `PartialOrd` ordering.
//!
//! ## Design notes
//!
//! * **Stateless**: A comparator carries nothing beyond the optional
//!   function pointer; repeated calls with the same inputs return the same
//!   result.
//! * **Fallible by default only**: The built-in ordering fails with
//!   [`ChainError::IncomparableValues`] when `partial_cmp` cannot decide
//!   (NaN is the usual culprit). A custom function is total and never fails.
//! * **Scoped bounds**: The `T: PartialOrd` bound sits on the comparing
//!   methods, not on the type, so purely structural users of a list never
//!   pay for it.
//!
//! ## Invariants
//!
//! * `equal(a, b)` holds exactly when `compare(a, b)` is `Ordering::Equal`.
//! * No side effects, no mutation.
//!
//! ## Non-goals
//!
//! * This module does not define ordering for user types; it only selects
//!   between the injected function and the built-in one.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::errors::ChainError;

// ============================================================================
// Comparison Function
// ============================================================================

/// Caller-supplied total comparison between two element values.
pub type CompareFn<T> = fn(&T, &T) -> Ordering;

// ============================================================================
// Comparator
// ============================================================================

/// Injected comparison capability.
///
/// Built with [`Comparator::natural`] for the built-in ordering or
/// [`Comparator::with_fn`] to override it. The default is natural ordering.
#[derive(Debug)]
pub struct Comparator<T> {
    /// Override function; `None` selects the built-in ordering.
    custom: Option<CompareFn<T>>,
}

// Manual implementations: the only field is a function pointer, so a
// comparator is copyable regardless of `T`.
impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Comparator<T> {}

impl<T> Default for Comparator<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T> Comparator<T> {
    /// Comparator using the built-in `PartialOrd` ordering.
    #[inline]
    pub fn natural() -> Self {
        Self { custom: None }
    }

    /// Comparator using a caller-supplied total comparison function.
    #[inline]
    pub fn with_fn(f: CompareFn<T>) -> Self {
        Self { custom: Some(f) }
    }

    /// Whether a custom comparison function is installed.
    #[inline]
    pub fn is_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// Three-way comparison of two values.
    ///
    /// Uses the custom function when present, otherwise `partial_cmp`.
    /// Fails with [`ChainError::IncomparableValues`] only when the built-in
    /// ordering cannot order the pair.
    pub fn compare(&self, a: &T, b: &T) -> Result<Ordering, ChainError>
    where
        T: PartialOrd,
    {
        match self.custom {
            Some(f) => Ok(f(a, b)),
            None => a.partial_cmp(b).ok_or(ChainError::IncomparableValues),
        }
    }

    /// Equality derived from [`compare`](Self::compare).
    #[inline]
    pub fn equal(&self, a: &T, b: &T) -> Result<bool, ChainError>
    where
        T: PartialOrd,
    {
        Ok(self.compare(a, b)? == Ordering::Equal)
    }
}
