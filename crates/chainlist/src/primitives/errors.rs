//! Error types for chain operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions the crate can surface. There is
//! deliberately only one steady-state error: a comparison the default
//! ordering cannot decide. Everything else ("nothing found", "nothing to
//! remove", "structure empty") is a normal `None`/empty result, not an error.
//!
//! ## Design notes
//!
//! * **Contextual**: Builder errors name the offending parameter or shape.
//! * **Deferred**: Builder errors are stored during configuration and
//!   surfaced when `build()` is called.
//! * **No-std**: Only `core::fmt` is required; `std::error::Error` is
//!   implemented when the `std` feature is enabled.
//!
//! ## Invariants
//!
//! * Empty or exhausted structures never produce an error.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the comparison or validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for chain operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// The default ordering could not order the two values (e.g. NaN).
    ///
    /// Only reachable through the built-in comparator; a caller-supplied
    /// comparison function is total and never produces this.
    IncomparableValues,

    /// A builder parameter was set multiple times.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// A builder option does not apply to the selected shape.
    UnsupportedOption {
        /// Name of the shape (e.g. "Lifo", "Fifo").
        shape: &'static str,
        /// Name of the inapplicable option.
        option: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ChainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IncomparableValues => {
                write!(f, "Values cannot be ordered by the default comparison")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::UnsupportedOption { shape, option } => {
                write!(f, "Shape '{shape}' does not support option: {option}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ChainError {}
