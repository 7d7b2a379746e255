//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer implements the singly-linked-list engine and the output types
//! it produces. The adapters and the fluent API build on it; it builds only
//! on the order and primitives layers.

/// The list engine.
pub mod list;

/// Engine output types.
pub mod output;
