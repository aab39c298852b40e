//! Top-level module for the Markov chain generation system.
//!
//! This module provides a word-level Markov chain generator, including:
//! - Chain states (`State`)
//! - The prefix table and its builder (`Table`)
//! - A random walk with dead-end recovery (`Walker`)
//! - Generation parameters (`ChainConfig`)
//! - A high-level generation interface (`Generator`)

/// High-level interface building a chain and generating token sequences.
pub mod generator;

/// Prefix table built in a single pass over a token stream.
///
/// Immutable once built; shared read-only by walkers.
pub mod table;

/// Random walk over a table, with explicit or automatic dead-end recovery.
pub mod walker;

/// A single chain state: one prefix and its observed suffixes.
pub mod state;

/// Generation parameters (prefix length, word count, seed, start prefix).
pub mod chain_config;
