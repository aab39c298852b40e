use std::collections::{HashMap, VecDeque};

use log::debug;

use super::state::State;
use crate::error::{ChainError, Result};

/// Prefix table of a fixed-order Markov chain.
///
/// The `Table` maps every prefix of `prefix_length` consecutive tokens seen
/// in the input to the `State` holding the tokens that followed it.
///
/// # Responsibilities
/// - Build the chain in a single pass over a token stream
/// - Look up states by prefix
/// - Enumerate states in a stable order, so random selection among them is
///   reproducible under a fixed seed
///
/// # Invariants
/// - `prefix_length` is always >= 1
/// - The table holds at least one state
/// - `index` and `states` describe the same set of prefixes
/// - Every suffix of every state knows the state it leads to, if any
/// - The table is never modified after `build` returns
#[derive(Clone, Debug)]
pub struct Table {
	/// Number of tokens in each prefix.
	prefix_length: usize,

	/// States in order of first observation.
	states: Vec<State>,

	/// Mapping from a prefix to its position in `states`.
	index: HashMap<Vec<String>, usize>,
}

impl Table {
	/// Builds a table from a token stream.
	///
	/// The first `prefix_length` tokens seed the window. Every following
	/// token is recorded as a suffix of the current window, then the window
	/// slides forward by one token.
	///
	/// # Errors
	/// - `InvalidConfiguration` if `prefix_length` is 0 or `usize::MAX`.
	/// - `InsufficientInput` if the stream yields fewer than
	///   `prefix_length + 1` tokens.
	pub fn build<I, S>(tokens: I, prefix_length: usize) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let required = match prefix_length.checked_add(1) {
			Some(required) if prefix_length > 0 => required,
			_ => return Err(ChainError::InvalidConfiguration { prefix_length }),
		};

		let mut tokens = tokens.into_iter().map(Into::into);
		let mut window: VecDeque<String> = tokens.by_ref().take(prefix_length).collect();
		if window.len() < prefix_length {
			return Err(ChainError::InsufficientInput { required, found: window.len() });
		}

		let mut table = Self {
			prefix_length,
			states: Vec::new(),
			index: HashMap::new(),
		};

		// Consume the stream until exhausted
		for token in tokens {
			table.add(window.make_contiguous(), token.clone());
			window.pop_front();
			window.push_back(token);
		}

		if table.states.is_empty() {
			return Err(ChainError::InsufficientInput { required, found: prefix_length });
		}
		table.link();

		debug!(
			"built chain: {} states, {} suffixes, prefix length {}",
			table.len(),
			table.suffix_count(),
			prefix_length
		);
		Ok(table)
	}

	/// Records `suffix` as following `prefix`.
	fn add(&mut self, prefix: &[String], suffix: String) {
		if let Some(&i) = self.index.get(prefix) {
			self.states[i].add_suffix(suffix);
			return;
		}
		let i = self.states.len();
		self.states.push(State::new(prefix, suffix));
		self.index.insert(prefix.to_vec(), i);
	}

	/// Resolves, for every stored suffix, the state its sliding window leads to.
	///
	/// Walkers then advance by index without building a lookup key.
	fn link(&mut self) {
		let successors: Vec<Vec<Option<usize>>> = self
			.states
			.iter()
			.map(|state| {
				state
					.suffixes()
					.iter()
					.map(|suffix| self.index_of(&state.next_prefix(suffix)))
					.collect()
			})
			.collect();

		for (state, next) in self.states.iter_mut().zip(successors) {
			state.set_successors(next);
		}
	}

	/// Returns the number of tokens in each prefix.
	pub fn prefix_length(&self) -> usize {
		self.prefix_length
	}

	/// Returns the number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	/// Always `false` for a built table.
	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Total number of stored suffixes, duplicates included.
	pub fn suffix_count(&self) -> usize {
		self.states.iter().map(|state| state.suffixes().len()).sum()
	}

	/// Returns the position of `prefix` in the state list, if it was observed.
	pub fn index_of(&self, prefix: &[String]) -> Option<usize> {
		self.index.get(prefix).copied()
	}

	/// Looks up the state for a prefix given as any string-like tokens.
	pub fn get<S: AsRef<str>>(&self, prefix: &[S]) -> Option<&State> {
		let key: Vec<String> = prefix.iter().map(|s| s.as_ref().to_owned()).collect();
		self.index_of(&key).map(|i| &self.states[i])
	}

	/// Returns the state at position `i` in observation order.
	pub fn state(&self, i: usize) -> Option<&State> {
		self.states.get(i)
	}

	/// Iterates over states in observation order.
	pub fn states(&self) -> impl Iterator<Item = &State> {
		self.states.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn words(s: &str) -> Vec<String> {
		s.split_whitespace().map(str::to_owned).collect()
	}

	fn example() -> Table {
		Table::build(words("the cat sat on the mat the cat ran"), 2).unwrap()
	}

	#[test]
	fn test_build_example_table() {
		let table = example();
		assert_eq!(table.prefix_length(), 2);
		assert_eq!(table.len(), 6);
		assert_eq!(table.get(&["the", "cat"]).unwrap().suffixes(), ["sat", "ran"]);
		assert_eq!(table.get(&["cat", "sat"]).unwrap().suffixes(), ["on"]);
		assert_eq!(table.get(&["sat", "on"]).unwrap().suffixes(), ["the"]);
		assert_eq!(table.get(&["on", "the"]).unwrap().suffixes(), ["mat"]);
		assert_eq!(table.get(&["the", "mat"]).unwrap().suffixes(), ["the"]);
		assert_eq!(table.get(&["mat", "the"]).unwrap().suffixes(), ["cat"]);
		assert!(table.get(&["cat", "ran"]).is_none());
	}

	#[test]
	fn test_states_in_observation_order() {
		let table = example();
		let prefixes: Vec<String> = table.states().map(State::display_prefix).collect();
		assert_eq!(prefixes, ["the cat", "cat sat", "sat on", "on the", "the mat", "mat the"]);
		assert_eq!(table.index_of(&words("the cat")), Some(0));
		assert_eq!(table.index_of(&words("mat the")), Some(5));
		assert_eq!(table.state(6), None);
	}

	#[test]
	fn test_suffix_count_includes_duplicates() {
		let table = Table::build(words("a a a a"), 1).unwrap();
		assert_eq!(table.len(), 1);
		assert_eq!(table.get(&["a"]).unwrap().suffixes(), ["a", "a", "a"]);
		assert_eq!(table.suffix_count(), 3);
	}

	#[test]
	fn test_minimal_input() {
		let table = Table::build(words("one two three"), 2).unwrap();
		assert_eq!(table.len(), 1);
		assert!(!table.is_empty());
		assert_eq!(table.get(&["one", "two"]).unwrap().suffixes(), ["three"]);
	}

	#[test]
	fn test_zero_prefix_length_is_invalid() {
		let err = Table::build(words("a b c d"), 0).unwrap_err();
		assert_eq!(err, ChainError::InvalidConfiguration { prefix_length: 0 });

		let err = Table::build(Vec::<String>::new(), 0).unwrap_err();
		assert_eq!(err, ChainError::InvalidConfiguration { prefix_length: 0 });
	}

	#[test]
	fn test_max_prefix_length_is_invalid() {
		let err = Table::build(words("a b c"), usize::MAX).unwrap_err();
		assert_eq!(err, ChainError::InvalidConfiguration { prefix_length: usize::MAX });
	}

	#[test]
	fn test_large_prefix_length_is_insufficient_input() {
		let err = Table::build(words("a b c"), usize::MAX - 1).unwrap_err();
		assert_eq!(err, ChainError::InsufficientInput { required: usize::MAX, found: 3 });
	}

	#[test]
	fn test_suffixes_are_linked_to_next_state() {
		let table = example();
		let the_cat = table.get(&["the", "cat"]).unwrap();
		// "sat" leads to "cat sat", "ran" to the dead end "cat ran"
		assert_eq!(the_cat.successor(0), table.index_of(&words("cat sat")));
		assert_eq!(the_cat.successor(1), None);

		let mat_the = table.get(&["mat", "the"]).unwrap();
		assert_eq!(mat_the.successor(0), Some(0));
	}

	#[test]
	fn test_long_window_slides() {
		let table = Table::build(words("a b c d a b c e"), 3).unwrap();
		assert_eq!(table.get(&["a", "b", "c"]).unwrap().suffixes(), ["d", "e"]);
		assert_eq!(table.get(&["b", "c", "d"]).unwrap().suffixes(), ["a"]);
		assert_eq!(table.get(&["d", "a", "b"]).unwrap().suffixes(), ["c"]);
		assert_eq!(table.len(), 4);
	}

	#[test]
	fn test_too_few_tokens_to_seed() {
		let err = Table::build(words("a"), 2).unwrap_err();
		assert_eq!(err, ChainError::InsufficientInput { required: 3, found: 1 });

		let err = Table::build(Vec::<String>::new(), 1).unwrap_err();
		assert_eq!(err, ChainError::InsufficientInput { required: 2, found: 0 });
	}

	#[test]
	fn test_no_following_token() {
		let err = Table::build(words("a b"), 2).unwrap_err();
		assert_eq!(err, ChainError::InsufficientInput { required: 3, found: 2 });
	}

	#[test]
	fn test_tokens_with_spaces_do_not_collide() {
		let tokens = vec!["a b", "c", "x", "a", "b c", "y"];
		let table = Table::build(tokens, 2).unwrap();
		assert_eq!(table.get(&["a b", "c"]).unwrap().suffixes(), ["x"]);
		assert_eq!(table.get(&["a", "b c"]).unwrap().suffixes(), ["y"]);
	}

	#[test]
	fn test_tokens_are_compared_exactly() {
		let table = Table::build(words("The cat the cat"), 1).unwrap();
		assert_eq!(table.get(&["The"]).unwrap().suffixes(), ["cat"]);
		assert_eq!(table.get(&["cat"]).unwrap().suffixes(), ["the"]);
		assert_eq!(table.get(&["the"]).unwrap().suffixes(), ["cat"]);
	}
}
