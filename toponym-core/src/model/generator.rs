use super::alphabet::SENTINEL;
use super::markov_model::Model;
use super::snapshot::Snapshot;

/// Cap on whole-word assembly retries when the result falls outside the
/// requested length bounds. After the cap the last candidate is
/// returned as-is.
const MAX_LENGTH_RETRIES: usize = 100;

/// Cap on consecutive duplicate rejections during batch generation.
///
/// Without a cap, an unsatisfiable combination of length bounds,
/// alphabet size and duplicate avoidance would loop indefinitely.
/// After this many rejections in a row the duplicate is accepted
/// anyway, so `new_words` always terminates.
const MAX_DUPLICATE_REJECTIONS: usize = 1000;

/// Word generator over a single trained `Model`.
///
/// Thin owner: there is no session state between calls beyond the
/// model itself (whose random source advances with each sample).
///
/// # Responsibilities
/// - Assemble one candidate word symbol-by-symbol (`new_word`)
/// - Produce batches, optionally deduplicated (`new_words`)
/// - Forward training and snapshot transfer to the model
#[derive(Clone, Debug)]
pub struct WordGenerator {
	model: Model,
}

impl WordGenerator {
	/// Trains a generator seeded from OS entropy.
	pub fn new<S: AsRef<str>>(train_data: &[S], order: usize, prior: f64) -> Self {
		Self { model: Model::new(train_data, order, prior) }
	}

	/// Trains a generator with an explicit seed; identical seeds and
	/// training parameters reproduce identical word sequences.
	pub fn with_seed<S: AsRef<str>>(
		train_data: &[S],
		order: usize,
		prior: f64,
		seed: u64,
	) -> Self {
		Self { model: Model::with_seed(train_data, order, prior, seed) }
	}

	/// A generator around an untrained model; produces only empty
	/// results until `train` is called.
	pub fn untrained() -> Self {
		Self { model: Model::untrained() }
	}

	/// Reconstructs a generator from an exported snapshot.
	///
	/// # Errors
	/// Returns an error if the snapshot is inconsistent.
	pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, String> {
		Ok(Self { model: Model::from_snapshot(snapshot)? })
	}

	pub fn train<S: AsRef<str>>(&mut self, train_data: &[S], order: usize, prior: f64) {
		self.model.train(train_data, order, prior);
	}

	pub fn is_trained(&self) -> bool {
		self.model.is_trained()
	}

	pub fn model(&self) -> &Model {
		&self.model
	}

	pub fn reseed(&mut self, seed: u64) {
		self.model.reseed(seed);
	}

	pub fn export_snapshot(&self) -> Snapshot {
		self.model.export_snapshot()
	}

	/// Produces one candidate word.
	///
	/// Starts from `order` sentinels, appends sampled symbols until the
	/// model returns the sentinel, then strips all sentinels. When the
	/// result falls outside `[min_length, max_length]` the whole
	/// assembly is retried, up to 100 attempts; after that the last
	/// candidate is returned even if out of range. An untrained model
	/// yields an empty string immediately.
	pub fn new_word(&mut self, min_length: usize, max_length: usize) -> String {
		let mut word = String::new();
		if !self.is_trained() {
			return word;
		}

		for _ in 0..MAX_LENGTH_RETRIES {
			word = self.assemble();
			let length = word.chars().count();
			if length >= min_length && length <= max_length {
				break;
			}
		}
		word
	}

	/// Produces `count` words.
	///
	/// With `allow_duplicates` set to false a candidate equal to an
	/// already accepted word is discarded and assembly retried; after
	/// 1000 consecutive rejections the duplicate is accepted so the
	/// call terminates (see `MAX_DUPLICATE_REJECTIONS`). An untrained
	/// model yields an empty vector.
	pub fn new_words(
		&mut self,
		count: usize,
		min_length: usize,
		max_length: usize,
		allow_duplicates: bool,
	) -> Vec<String> {
		let mut words = Vec::new();
		if !self.is_trained() {
			return words;
		}
		words.reserve(count);

		let mut rejections = 0;
		while words.len() < count {
			let word = self.new_word(min_length, max_length);
			if allow_duplicates
				|| !words.contains(&word)
				|| rejections >= MAX_DUPLICATE_REJECTIONS
			{
				words.push(word);
				rejections = 0;
			} else {
				rejections += 1;
			}
		}
		words
	}

	/// One assembly pass: sentinel padding in, sentinels stripped out.
	fn assemble(&mut self) -> String {
		let mut word: String = std::iter::repeat(SENTINEL)
			.take(self.model.order())
			.collect();

		let mut letter = self.model.generate(&word);
		while letter != SENTINEL {
			word.push(letter);
			letter = self.model.generate(&word);
		}

		word.chars().filter(|&c| c != SENTINEL).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const AB: [&str; 3] = ["ab", "ab", "ab"];

	#[test]
	fn untrained_generator_yields_empty_results() {
		let mut generator = WordGenerator::untrained();
		assert_eq!(generator.new_word(1, 10), "");
		assert!(generator.new_words(5, 1, 10, true).is_empty());
	}

	#[test]
	fn single_path_model_always_produces_the_same_word() {
		// Each context has exactly one nonzero continuation, so "ab" is
		// the only reachable word whatever the draws are.
		let mut generator = WordGenerator::new(&AB, 1, 0.0);
		for _ in 0..20 {
			assert_eq!(generator.new_word(1, 8), "ab");
		}
	}

	#[test]
	fn unsatisfiable_bounds_return_best_effort_after_cap() {
		// "ab" can never reach length 100; after exhausting the 100
		// retries the out-of-range candidate is returned anyway.
		let mut generator = WordGenerator::new(&AB, 1, 0.0);
		assert_eq!(generator.new_word(100, 200), "ab");
	}

	#[test]
	fn deduplicated_batch_terminates_under_the_rejection_cap() {
		// Only one word is reachable, so a duplicate-free batch of three
		// is unsatisfiable; the rejection cap forces termination.
		let mut generator = WordGenerator::new(&AB, 1, 0.0);
		let words = generator.new_words(3, 1, 8, false);
		assert_eq!(words, vec!["ab", "ab", "ab"]);
	}

	#[test]
	fn batch_with_duplicates_allowed_has_requested_count() {
		let mut generator = WordGenerator::with_seed(&AB, 1, 0.0, 9);
		let words = generator.new_words(7, 1, 8, true);
		assert_eq!(words.len(), 7);
	}

	#[test]
	fn seeded_generators_replay_the_same_words() {
		let towns = ["barnsley", "barnstaple", "bradford", "brighouse"];
		let mut a = WordGenerator::with_seed(&towns, 3, 0.0, 1234);
		let mut b = WordGenerator::with_seed(&towns, 3, 0.0, 1234);
		for _ in 0..10 {
			assert_eq!(a.new_word(3, 8), b.new_word(3, 8));
		}
	}

	#[test]
	fn snapshot_round_trip_keeps_generating() {
		let towns = ["barnsley", "barnstaple", "bradford"];
		let generator = WordGenerator::new(&towns, 2, 0.0);
		let mut restored = WordGenerator::from_snapshot(generator.export_snapshot()).unwrap();
		assert!(restored.is_trained());
		assert_eq!(restored.model().order(), 2);
		assert!(!restored.new_word(1, 20).is_empty());
	}
}
