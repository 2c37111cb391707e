use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::alphabet::{Alphabet, SENTINEL};
use super::chain::ChainTable;
use super::snapshot::Snapshot;

/// Character-level Markov model of order K with sequential back-off.
///
/// The model owns its alphabet, one chain table per context length
/// 1..=K, the smoothing prior, and its own random source. Generation
/// walks the tables from the longest context down to the shortest and
/// samples from the first table that knows the context; when no table
/// does, the sentinel is returned and the caller treats it as
/// end-of-word.
///
/// This is deliberately not Katz back-off: tables are built
/// independently per order and no probability mass is redistributed
/// between them. The first order with a matching context wins outright.
///
/// # Responsibilities
/// - Build the alphabet and all chain tables from training words
/// - Sample the next symbol for a given running context
/// - Export and reconstruct learned state as a `Snapshot`
///
/// # Invariants
/// - `chains.len() == order` after training (both zero when untrained)
/// - Every weight vector in every table has alphabet length
#[derive(Clone, Debug)]
pub struct Model {
	prior: f64,
	order: usize,
	alphabet: Alphabet,
	chains: Vec<ChainTable>,
	rng: SmallRng,
}

fn default_rng() -> SmallRng {
	SmallRng::from_os_rng()
}

impl Model {
	/// Trains a model seeded from OS entropy.
	pub fn new<S: AsRef<str>>(train_data: &[S], order: usize, prior: f64) -> Self {
		let mut model = Self::untrained();
		model.train(train_data, order, prior);
		model
	}

	/// Trains a model with an explicit seed.
	///
	/// Two models built with the same seed, training data, order and
	/// prior produce identical sampling sequences.
	pub fn with_seed<S: AsRef<str>>(
		train_data: &[S],
		order: usize,
		prior: f64,
		seed: u64,
	) -> Self {
		let mut model = Self::untrained();
		model.rng = SmallRng::seed_from_u64(seed);
		model.train(train_data, order, prior);
		model
	}

	/// An empty model; every generation call returns the sentinel.
	pub fn untrained() -> Self {
		Self {
			prior: 0.0,
			order: 0,
			alphabet: Alphabet::from_symbols(Vec::new()),
			chains: Vec::new(),
			rng: default_rng(),
		}
	}

	/// Reconstructs a model from a snapshot, without retraining.
	///
	/// The order is inferred from the number of chain tables. The
	/// snapshot is validated first: a weight vector whose length does
	/// not match the alphabet would index out of bounds during
	/// sampling.
	///
	/// # Errors
	/// Returns an error if the snapshot is inconsistent.
	pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, String> {
		snapshot.validate()?;
		Ok(Self {
			prior: 0.0,
			order: snapshot.chains.len(),
			alphabet: Alphabet::from_symbols(snapshot.alphabet),
			chains: snapshot.chains,
			rng: default_rng(),
		})
	}

	/// Copies the learned state out as an independent value.
	pub fn export_snapshot(&self) -> Snapshot {
		Snapshot {
			alphabet: self.alphabet.symbols().to_vec(),
			chains: self.chains.clone(),
		}
	}

	/// (Re)trains the model: clears all learned state, rebuilds the
	/// alphabet, then builds one chain table per order 1..=`order`.
	pub fn train<S: AsRef<str>>(&mut self, train_data: &[S], order: usize, prior: f64) {
		self.order = order;
		self.prior = prior;
		self.alphabet = Alphabet::from_words(train_data);
		self.chains = (1..=order)
			.map(|n| ChainTable::build(train_data, n, prior, &self.alphabet))
			.collect();
	}

	/// Replaces the random source with a freshly seeded one.
	pub fn reseed(&mut self, seed: u64) {
		self.rng = SmallRng::seed_from_u64(seed);
	}

	/// Maximum context length considered during generation.
	pub fn order(&self) -> usize {
		self.order
	}

	/// Smoothing prior used when the tables were built.
	pub fn prior(&self) -> f64 {
		self.prior
	}

	pub fn alphabet(&self) -> &Alphabet {
		&self.alphabet
	}

	/// Whether at least one chain table exists.
	pub fn is_trained(&self) -> bool {
		!self.chains.is_empty()
	}

	/// Samples the next symbol for the given running context.
	///
	/// For context length i = K down to 1, the trailing i symbols of
	/// `context` are looked up in the order-i table; the first table
	/// that contains them wins and a symbol is weighted-sampled from
	/// its vector. If no order matches, or the model is untrained, the
	/// sentinel is returned and means end-of-word, never an error.
	pub fn generate(&mut self, context: &str) -> char {
		if !self.is_trained() {
			return SENTINEL;
		}

		for i in (1..=self.order).rev() {
			let key = last_n_chars(context, i);
			if key.chars().count() != i {
				continue;
			}
			if let Some(weights) = self.chains[i - 1].weights(&key) {
				let index = select_index(&mut self.rng, weights);
				// Tables are built against this alphabet, index is in range
				return self.alphabet.symbol_at(index).unwrap_or(SENTINEL);
			}
		}
		SENTINEL
	}
}

/// Weighted random index selection over an unnormalized weight vector.
///
/// Computes the running cumulative sum, draws uniformly in
/// [0, total], and returns the first bucket strictly exceeding the
/// draw. A zero total, or a draw that no bucket exceeds due to
/// rounding, falls back to index 0.
fn select_index(rng: &mut SmallRng, weights: &[f64]) -> usize {
	let mut accumulator = 0.0;
	let mut totals = Vec::with_capacity(weights.len());
	for &weight in weights {
		accumulator += weight;
		totals.push(accumulator);
	}

	if accumulator <= 0.0 {
		return 0;
	}
	let draw = rng.random_range(0.0..=accumulator);

	for (i, &total) in totals.iter().enumerate() {
		if draw < total {
			return i;
		}
	}
	0
}

/// Last `n` characters of `s`, or all of `s` when it is shorter.
fn last_n_chars(s: &str, n: usize) -> String {
	let count = s.chars().count();
	if n >= count {
		return s.to_owned();
	}
	s.chars().skip(count - n).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	const AB: [&str; 3] = ["ab", "ab", "ab"];

	#[test]
	fn untrained_model_always_returns_sentinel() {
		let mut model = Model::untrained();
		assert!(!model.is_trained());
		assert_eq!(model.generate("###"), SENTINEL);
		assert_eq!(model.generate(""), SENTINEL);
	}

	#[test]
	fn deterministic_transitions_ignore_the_draw() {
		// Every context has exactly one nonzero continuation, so the
		// sampled symbol is forced whatever the random draw is.
		let mut model = Model::new(&AB, 1, 0.0);
		assert_eq!(model.alphabet().symbols(), &['#', 'a', 'b']);
		assert_eq!(model.generate("#"), 'a');
		assert_eq!(model.generate("#a"), 'b');
		assert_eq!(model.generate("#ab"), SENTINEL);
	}

	#[test]
	fn back_off_falls_through_to_shorter_contexts() {
		let mut model = Model::new(&AB, 3, 0.0);
		// "bab" was never observed as an order-3 context; the order-2
		// table resolves "ab" to the sentinel.
		assert_eq!(model.generate("bab"), SENTINEL);
		// Highest matching order wins: "##a" is an order-3 context.
		assert_eq!(model.generate("##a"), 'b');
	}

	#[test]
	fn context_shorter_than_every_order_returns_sentinel() {
		let mut model = Model::new(&AB, 3, 0.0);
		assert_eq!(model.generate(""), SENTINEL);
	}

	#[test]
	fn identical_seeds_reproduce_identical_sequences() {
		let words = ["banana", "bandana", "cabana"];
		let mut a = Model::with_seed(&words, 2, 0.01, 42);
		let mut b = Model::with_seed(&words, 2, 0.01, 42);
		for _ in 0..64 {
			let context = "##ba";
			assert_eq!(a.generate(context), b.generate(context));
		}
	}

	#[test]
	fn snapshot_round_trip_preserves_learned_state() {
		let words = ["abingdon", "acle", "acton"];
		let model = Model::new(&words, 3, 0.0);
		let snapshot = model.export_snapshot();
		let restored = Model::from_snapshot(snapshot.clone()).unwrap();

		assert_eq!(restored.order(), model.order());
		assert_eq!(restored.alphabet(), model.alphabet());
		assert_eq!(restored.export_snapshot(), snapshot);
	}

	#[test]
	fn snapshot_is_an_independent_copy() {
		let mut model = Model::new(&AB, 1, 0.0);
		let snapshot = model.export_snapshot();
		model.train(&["xyz"], 2, 0.5);
		// Retraining the source does not reach into the exported value
		assert_eq!(snapshot.alphabet, vec!['#', 'a', 'b']);
		assert_eq!(snapshot.chains.len(), 1);
	}

	#[test]
	fn inconsistent_snapshot_is_rejected() {
		let mut snapshot = Model::new(&AB, 1, 0.0).export_snapshot();
		snapshot.alphabet.push('z');
		let err = Model::from_snapshot(snapshot).unwrap_err();
		assert!(err.contains("inconsistent snapshot"), "got: {err}");
	}

	#[test]
	fn select_index_picks_first_bucket_exceeding_draw() {
		let mut rng = SmallRng::seed_from_u64(7);
		// All mass on index 2
		for _ in 0..32 {
			assert_eq!(select_index(&mut rng, &[0.0, 0.0, 5.0, 0.0]), 2);
		}
	}

	#[test]
	fn select_index_zero_total_falls_back_to_zero() {
		let mut rng = SmallRng::seed_from_u64(7);
		assert_eq!(select_index(&mut rng, &[0.0, 0.0, 0.0]), 0);
	}

	#[test]
	fn last_n_chars_clamps_to_string_length() {
		assert_eq!(last_n_chars("abcdef", 3), "def");
		assert_eq!(last_n_chars("ab", 5), "ab");
		assert_eq!(last_n_chars("ab", 0), "");
	}
}
