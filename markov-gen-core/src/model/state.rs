use rand::Rng;

/// Represents a state in the chain.
///
/// A `State` corresponds to a fixed-length token prefix and stores every
/// token observed right after it, in order of occurrence.
///
/// Conceptually, this is a node in a Markov chain where each stored suffix
/// is one outgoing edge. Duplicates are kept: a suffix seen twice is twice
/// as likely to be picked.
///
/// ## Invariants
/// - `prefix` is never empty and has the table's prefix length
/// - `suffixes` is never empty once the state is part of a table
/// - once linked, `successors` has one entry per suffix
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// Tokens forming the prefix (owned copy of the builder window).
	prefix: Box<[String]>,
	/// Observed following tokens, with multiplicity.
	suffixes: Vec<String>,
	/// Index of the state reached after emitting each suffix; `None` is a dead end.
	successors: Vec<Option<usize>>,
}

impl State {
	/// Creates a state for `prefix` with its first observed suffix.
	pub(crate) fn new(prefix: &[String], suffix: String) -> Self {
		Self {
			prefix: prefix.into(),
			suffixes: vec![suffix],
			successors: Vec::new(),
		}
	}

	/// Records another occurrence of a following token.
	pub(crate) fn add_suffix(&mut self, suffix: String) {
		self.suffixes.push(suffix);
	}

	/// Returns the prefix tokens of this state.
	pub fn prefix(&self) -> &[String] {
		&self.prefix
	}

	/// Returns the observed suffixes in order of occurrence.
	pub fn suffixes(&self) -> &[String] {
		&self.suffixes
	}

	/// Stores the state index reached after each suffix.
	pub(crate) fn set_successors(&mut self, successors: Vec<Option<usize>>) {
		debug_assert_eq!(successors.len(), self.suffixes.len());
		self.successors = successors;
	}

	/// Picks the index of a suffix uniformly among the stored occurrences.
	pub fn pick_index<R: Rng>(&self, rng: &mut R) -> usize {
		rng.random_range(0..self.suffixes.len())
	}

	/// Picks a suffix uniformly among the stored occurrences.
	pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
		&self.suffixes[self.pick_index(rng)]
	}

	/// Returns the state index reached after emitting suffix `i`.
	///
	/// `None` if that prefix was never observed, or `i` is out of range.
	pub fn successor(&self, i: usize) -> Option<usize> {
		self.successors.get(i).copied().flatten()
	}

	/// Builds the prefix that follows this state once `suffix` is emitted.
	///
	/// Example: prefix `["the", "cat"]` + `"sat"` → `["cat", "sat"]`
	pub fn next_prefix(&self, suffix: &str) -> Vec<String> {
		let mut next = Vec::with_capacity(self.prefix.len());
		next.extend(self.prefix[1..].iter().cloned());
		next.push(suffix.to_owned());
		next
	}

	/// Prefix joined by single spaces, for display and logging.
	pub fn display_prefix(&self) -> String {
		self.prefix.join(" ")
	}
}
