//! Error types for chain construction and generation.

use thiserror::Error;

/// Errors that can occur while building a chain or starting a walk.
///
/// Dead ends reached during a walk are not errors; the walker recovers
/// from them by jumping to a random state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
	/// Prefix length must be at least 1, and leave room for one suffix.
	#[error("invalid prefix length {prefix_length}: must be at least 1 and below {}", usize::MAX)]
	InvalidConfiguration { prefix_length: usize },

	/// Not enough tokens to seed a prefix and observe one suffix.
	#[error("input too small: need at least {required} tokens, got {found}")]
	InsufficientInput { required: usize, found: usize },

	/// Requested start prefix never occurs as a prefix in the table.
	#[error("unknown start prefix \"{0}\"")]
	UnknownPrefix(String),
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;
