use std::time::{SystemTime, UNIX_EPOCH};

/// Strategy used to place the walker before generation begins.
///
/// # Variants
/// - `Random`: start on a prefix chosen uniformly among all prefixes.
/// - `Custom(tokens)`: start on the given prefix, which must exist in the table.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum StartPrefix {
	#[default]
	Random,
	Custom(Vec<String>),
}

/// Parameters of a generation run.
///
/// # Invariants
/// - A `prefix_length` of 0 is rejected when the table is built
/// - The same `seed`, input and `prefix_length` always give the same output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainConfig {
	/// Number of tokens in each prefix.
	pub prefix_length: usize,

	/// Number of tokens to emit.
	pub word_count: usize,

	/// Seed of the pseudo-random source.
	pub seed: u64,

	/// Where the walk starts.
	pub start: StartPrefix,
}

impl Default for ChainConfig {
	/// Prefix length 2, 100 words, a clock-derived seed and a random start.
	fn default() -> Self {
		Self {
			prefix_length: 2,
			word_count: 100,
			seed: time_seed(),
			start: StartPrefix::Random,
		}
	}
}

impl ChainConfig {
	pub fn with_prefix_length(mut self, prefix_length: usize) -> Self {
		self.prefix_length = prefix_length;
		self
	}

	pub fn with_word_count(mut self, word_count: usize) -> Self {
		self.word_count = word_count;
		self
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = seed;
		self
	}

	/// Sets a custom start prefix from a space-separated string.
	///
	/// An empty or blank string selects a random start.
	pub fn with_start(mut self, start: &str) -> Self {
		let tokens: Vec<String> = start.split_whitespace().map(str::to_owned).collect();
		self.start = if tokens.is_empty() { StartPrefix::Random } else { StartPrefix::Custom(tokens) };
		self
	}
}

/// Derives a seed from the current time, in nanoseconds since the epoch.
///
/// Falls back to 0 for a clock set before the epoch, and to `u64::MAX`
/// past the year 2554 where the nanosecond count leaves `u64`.
pub fn time_seed() -> u64 {
	SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|elapsed| u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = ChainConfig::default();
		assert_eq!(config.prefix_length, 2);
		assert_eq!(config.word_count, 100);
		assert_eq!(config.start, StartPrefix::Random);
	}

	#[test]
	fn test_builder_setters() {
		let config = ChainConfig::default()
			.with_prefix_length(3)
			.with_word_count(7)
			.with_seed(42)
			.with_start("the  cat");
		assert_eq!(config.prefix_length, 3);
		assert_eq!(config.word_count, 7);
		assert_eq!(config.seed, 42);
		assert_eq!(config.start, StartPrefix::Custom(vec!["the".to_owned(), "cat".to_owned()]));
	}

	#[test]
	fn test_blank_start_is_random() {
		let config = ChainConfig::default().with_start("   ");
		assert_eq!(config.start, StartPrefix::Random);
	}

	#[test]
	fn test_time_seed_is_current_nanoseconds() {
		let before = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
		let seed = time_seed() as u128;
		let after = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
		assert!(before <= seed && seed <= after);
	}

	#[test]
	fn test_time_seed_changes() {
		let a = time_seed();
		std::thread::sleep(std::time::Duration::from_millis(2));
		assert_ne!(a, time_seed());
	}
}
