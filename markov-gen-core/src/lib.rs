//! Word-level Markov chain text generation library.
//!
//! This crate provides a fixed-order Markov chain generator including:
//! - Whitespace tokenization of a text source
//! - A prefix table built in a single pass over the tokens
//! - A seedable random walk over that table with dead-end recovery
//! - A high-level generator driven by a `ChainConfig`
//!
//! Tokens are opaque strings. Prefixes are keyed by their token sequence,
//! so a token containing a space never collides with two separate tokens.

/// Errors raised while building a chain or preparing a generation run.
pub mod error;

/// Core chain model and generation logic.
///
/// Exposes the prefix table, the walker and the high-level generator.
pub mod model;

/// Token source helpers (whitespace splitting of readers and files).
pub mod io;

pub use error::{ChainError, Result};
