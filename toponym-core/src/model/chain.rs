use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::alphabet::{Alphabet, SENTINEL};

/// Frequency table for one context length.
///
/// Maps every context observed during training (a string of exactly
/// `order` symbols) to a weight vector aligned with the alphabet: entry
/// `i` is `prior + count(alphabet[i] seen immediately after context)`.
///
/// Tables of different orders are built independently from the same
/// training data; no probability mass is shared or redistributed between
/// them. Back-off only ever falls through from a longer table to a
/// shorter one (see `Model::generate`).
///
/// # Invariants
/// - Every weight vector has length equal to the alphabet size
/// - Weights are non-negative (prior >= 0 plus counts)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ChainTable {
	contexts: HashMap<String, Vec<f64>>,
}

impl ChainTable {
	/// Builds the order-`order` table from the training words.
	///
	/// Each word is padded with `order` sentinels in front and one
	/// sentinel behind, then an `order`-length window slides across it;
	/// the symbol following the window is the observed continuation for
	/// that window's context.
	pub fn build<S: AsRef<str>>(
		words: &[S],
		order: usize,
		prior: f64,
		alphabet: &Alphabet,
	) -> Self {
		let mut observations: HashMap<String, Vec<char>> = HashMap::new();

		for word in words {
			let padded: Vec<char> = std::iter::repeat(SENTINEL)
				.take(order)
				.chain(word.as_ref().chars())
				.chain(std::iter::once(SENTINEL))
				.collect();

			// padded.len() is always order + 1 or more
			for i in 0..padded.len() - order {
				let context: String = padded[i..i + order].iter().collect();
				observations.entry(context).or_default().push(padded[i + order]);
			}
		}

		let mut contexts = HashMap::with_capacity(observations.len());
		for (context, seen) in observations {
			let weights = alphabet
				.symbols()
				.iter()
				.map(|&symbol| {
					prior + seen.iter().filter(|&&c| c == symbol).count() as f64
				})
				.collect();
			contexts.insert(context, weights);
		}

		Self { contexts }
	}

	pub(crate) fn from_contexts(contexts: HashMap<String, Vec<f64>>) -> Self {
		Self { contexts }
	}

	/// Weight vector for a context, if it was observed during training.
	pub fn weights(&self, context: &str) -> Option<&[f64]> {
		self.contexts.get(context).map(Vec::as_slice)
	}

	/// Number of distinct contexts in the table.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Iterates over all (context, weight vector) pairs.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
		self.contexts.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn weight_vectors_match_alphabet_length() {
		let words = ["abingdon", "acle", "acton"];
		let alphabet = Alphabet::from_words(&words);
		for order in 1..=3 {
			let table = ChainTable::build(&words, order, 0.0, &alphabet);
			for (_, weights) in table.iter() {
				assert_eq!(weights.len(), alphabet.len());
			}
		}
	}

	#[test]
	fn counts_without_prior_sum_to_observations() {
		// Order 1 over "ab" x3: each window position is observed three
		// times, so each context's weights sum to 3.
		let words = ["ab", "ab", "ab"];
		let alphabet = Alphabet::from_words(&words);
		let table = ChainTable::build(&words, 1, 0.0, &alphabet);

		assert_eq!(table.len(), 3);
		for (_, weights) in table.iter() {
			let total: f64 = weights.iter().sum();
			assert_eq!(total, 3.0);
		}
	}

	#[test]
	fn deterministic_order_one_table() {
		// alphabet = ['#', 'a', 'b']
		let words = ["ab", "ab", "ab"];
		let alphabet = Alphabet::from_words(&words);
		let table = ChainTable::build(&words, 1, 0.0, &alphabet);

		assert_eq!(table.weights("#"), Some(&[0.0, 3.0, 0.0][..]));
		assert_eq!(table.weights("a"), Some(&[0.0, 0.0, 3.0][..]));
		assert_eq!(table.weights("b"), Some(&[3.0, 0.0, 0.0][..]));
		assert_eq!(table.weights("c"), None);
	}

	#[test]
	fn prior_is_added_to_every_weight() {
		let words = ["ab"];
		let alphabet = Alphabet::from_words(&words);
		let table = ChainTable::build(&words, 1, 0.5, &alphabet);

		assert_eq!(table.weights("a"), Some(&[0.5, 0.5, 1.5][..]));
	}

	#[test]
	fn empty_word_still_yields_a_context() {
		// The padded form of "" is all sentinels, one window.
		let words = [""];
		let alphabet = Alphabet::from_words(&words);
		let table = ChainTable::build(&words, 2, 0.0, &alphabet);

		assert_eq!(table.weights("##"), Some(&[1.0][..]));
	}
}
