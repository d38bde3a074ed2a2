//! Shared primitive types for the tokenizer and validator.
//!
//! Dependency-free location-tracking types used to tie diagnostics back to
//! positions in the input expression.

pub mod span;

pub use span::{Position, Span};
