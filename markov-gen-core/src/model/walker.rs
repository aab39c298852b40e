use log::trace;
use rand::Rng;

use super::state::State;
use super::table::Table;

/// Position of a walker in its table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
	/// Points at the state with this index in the table.
	Active(usize),
	/// The last emitted token led to a prefix absent from the table.
	Exhausted,
}

/// Random walk over a `Table`.
///
/// The walker borrows the table read-only and owns its cursor and random
/// source, so several walkers may share one table.
///
/// Two levels of API are offered:
/// - `step` emits one token and returns `None` once a dead end is reached;
///   the caller then calls `reset_to_random_state`
/// - the `Iterator` impl folds the reset into `next` and never ends
#[derive(Debug)]
pub struct Walker<'a, R> {
	table: &'a Table,
	cursor: Cursor,
	rng: R,
	resets: usize,
}

impl<'a, R: Rng> Walker<'a, R> {
	/// Creates a walker positioned on a random state of `table`.
	pub fn new(table: &'a Table, rng: R) -> Self {
		let mut walker = Self {
			table,
			cursor: Cursor::Exhausted,
			rng,
			resets: 0,
		};
		walker.reset_to_random_state();
		walker
	}

	/// Moves the cursor to a state chosen uniformly among all prefixes.
	///
	/// Every prefix is equally likely, whatever its number of suffixes.
	pub fn reset_to_random_state(&mut self) {
		if self.table.is_empty() {
			self.cursor = Cursor::Exhausted;
			return;
		}
		let i = self.rng.random_range(0..self.table.len());
		self.cursor = Cursor::Active(i);
		self.resets += 1;
	}

	/// Moves the cursor to `prefix`.
	///
	/// Returns `false`, leaving the cursor untouched, if the table has no
	/// such prefix.
	pub fn seek<S: AsRef<str>>(&mut self, prefix: &[S]) -> bool {
		let key: Vec<String> = prefix.iter().map(|s| s.as_ref().to_owned()).collect();
		match self.table.index_of(&key) {
			Some(i) => {
				self.cursor = Cursor::Active(i);
				true
			}
			None => false,
		}
	}

	/// Emits one token and advances the cursor.
	///
	/// Returns `None` if the cursor is exhausted. Reaching a dead end is not
	/// an error: the token leading to it is still returned, and the next
	/// call returns `None` until the walker is reset.
	pub fn step(&mut self) -> Option<&'a str> {
		let state = self.current()?;
		let i = state.pick_index(&mut self.rng);
		let token = state.suffixes()[i].as_str();

		self.cursor = match state.successor(i) {
			Some(next) => Cursor::Active(next),
			None => {
				trace!("dead end after \"{}\"", state.next_prefix(token).join(" "));
				Cursor::Exhausted
			}
		};
		Some(token)
	}

	/// Returns the state under the cursor, if any.
	pub fn current(&self) -> Option<&'a State> {
		match self.cursor {
			Cursor::Active(i) => self.table.state(i),
			Cursor::Exhausted => None,
		}
	}

	/// Returns the cursor.
	pub fn cursor(&self) -> Cursor {
		self.cursor
	}

	/// Number of random resets so far, the initial one included.
	pub fn resets(&self) -> usize {
		self.resets
	}
}

impl<'a, R: Rng> Iterator for Walker<'a, R> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		if self.cursor == Cursor::Exhausted {
			self.reset_to_random_state();
		}
		self.step()
	}
}
