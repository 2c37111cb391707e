use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Reserved sentinel symbol.
///
/// Used both as start-of-word padding and as the end-of-word marker.
/// It is always part of the alphabet, even when no training word
/// contains it, and it is stripped from every generated word.
pub const SENTINEL: char = '#';

/// Ordered set of symbols observed in the training data.
///
/// The alphabet is sorted ascending by scalar value and deduplicated.
/// The order matters: weight vectors in the chain tables are implicitly
/// indexed by alphabet position, so training and lookup must agree on
/// the same ordering.
///
/// # Invariants
/// - No duplicate symbols
/// - Symbols are sorted ascending
/// - `SENTINEL` is always present
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Alphabet {
	symbols: Vec<char>,
}

impl Alphabet {
	/// Builds the alphabet from the training words.
	///
	/// Collects every distinct character appearing in any word, adds the
	/// sentinel, and sorts the result. Empty training data yields an
	/// alphabet containing only the sentinel.
	pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
		let mut set = BTreeSet::new();
		set.insert(SENTINEL);
		for word in words {
			set.extend(word.as_ref().chars());
		}
		Self { symbols: set.into_iter().collect() }
	}

	/// Rebuilds an alphabet from raw symbols, without re-sorting.
	///
	/// Used when reconstructing a model from a snapshot, where the
	/// symbols were produced by `from_words` in the first place.
	pub(crate) fn from_symbols(symbols: Vec<char>) -> Self {
		Self { symbols }
	}

	/// The symbols, in weight-vector order.
	pub fn symbols(&self) -> &[char] {
		&self.symbols
	}

	/// Number of symbols, which is also the length of every weight vector.
	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}

	/// Returns the symbol stored at a weight-vector position.
	pub fn symbol_at(&self, index: usize) -> Option<char> {
		self.symbols.get(index).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sorted_deduplicated_with_sentinel() {
		let alphabet = Alphabet::from_words(&["baa", "cab"]);
		assert_eq!(alphabet.symbols(), &['#', 'a', 'b', 'c']);
	}

	#[test]
	fn empty_training_data_keeps_sentinel() {
		let alphabet = Alphabet::from_words::<&str>(&[]);
		assert_eq!(alphabet.symbols(), &[SENTINEL]);
		assert_eq!(alphabet.len(), 1);
	}

	#[test]
	fn sentinel_in_training_data_is_not_duplicated() {
		let alphabet = Alphabet::from_words(&["a#b"]);
		assert_eq!(alphabet.symbols(), &['#', 'a', 'b']);
	}

	#[test]
	fn symbol_lookup_by_position() {
		let alphabet = Alphabet::from_words(&["ab"]);
		assert_eq!(alphabet.symbol_at(1), Some('a'));
		assert_eq!(alphabet.symbol_at(3), None);
	}
}
