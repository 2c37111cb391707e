use serde::{Deserialize, Serialize};

use super::chain::ChainTable;

/// Inert, serializable copy of a model's learned state.
///
/// A snapshot carries the alphabet and one chain table per order; it has
/// no behavior of its own and shares no state with the model it was
/// exported from. It is the sole persistence mechanism of the core: how
/// the bytes reach a disk or a wire is the caller's business (the `io`
/// module offers a postcard encoding for convenience).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
	/// Symbols, in weight-vector order.
	pub alphabet: Vec<char>,
	/// Chain tables; position i holds the order-(i+1) table.
	pub chains: Vec<ChainTable>,
}

impl Snapshot {
	/// Checks that every weight vector matches the alphabet length.
	///
	/// A snapshot produced by `Model::export_snapshot` always passes; a
	/// hand-built or corrupted one may not, and sampling from it would
	/// index out of bounds. Called by `Model::from_snapshot`.
	pub fn validate(&self) -> Result<(), String> {
		for (i, table) in self.chains.iter().enumerate() {
			for (context, weights) in table.iter() {
				if weights.len() != self.alphabet.len() {
					return Err(format!(
						"inconsistent snapshot: order-{} context {:?} has {} weights for {} symbols",
						i + 1,
						context,
						weights.len(),
						self.alphabet.len()
					));
				}
			}
		}
		Ok(())
	}
}
