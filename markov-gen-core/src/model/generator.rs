use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::chain_config::{ChainConfig, StartPrefix};
use super::table::Table;
use super::walker::Walker;
use crate::error::{ChainError, Result};

/// High-level generator owning a built chain.
///
/// # Responsibilities
/// - Build the prefix table from a token stream
/// - Seed a walker from a `ChainConfig`
/// - Emit exactly the requested number of tokens, recovering from dead ends
#[derive(Clone, Debug)]
pub struct Generator {
	table: Table,
}

impl Generator {
	/// Builds a generator from tokens and a prefix length.
	///
	/// # Errors
	/// See `Table::build`.
	pub fn new<I, S>(tokens: I, prefix_length: usize) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Ok(Self { table: Table::build(tokens, prefix_length)? })
	}

	/// Builds a generator using the prefix length of `config`.
	pub fn from_config<I, S>(tokens: I, config: &ChainConfig) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::new(tokens, config.prefix_length)
	}

	/// Returns the underlying table.
	pub fn table(&self) -> &Table {
		&self.table
	}

	/// Creates a walker over the table, seeded with `seed`.
	pub fn walker(&self, seed: u64) -> Walker<'_, StdRng> {
		Walker::new(&self.table, StdRng::seed_from_u64(seed))
	}

	/// Generates `config.word_count` tokens.
	///
	/// # Behavior
	/// - Seeds the walker with `config.seed`
	/// - Applies `config.start`
	/// - Each dead end costs one reset and no output slot
	///
	/// # Errors
	/// Returns `UnknownPrefix` if a custom start prefix is not in the table.
	pub fn generate(&self, config: &ChainConfig) -> Result<Vec<String>> {
		let mut walker = self.walker(config.seed);

		if let StartPrefix::Custom(prefix) = &config.start {
			if !walker.seek(prefix) {
				return Err(ChainError::UnknownPrefix(prefix.join(" ")));
			}
		}

		let words: Vec<String> = walker.by_ref().take(config.word_count).map(str::to_owned).collect();
		debug!("generated {} tokens with {} resets", words.len(), walker.resets());
		Ok(words)
	}
}
