use serde::Deserialize;

use crate::histogram::HistogramKind;

/// Bucket count of the transition table when none is configured.
pub const DEFAULT_MODEL_BUCKETS: usize = 256;

/// Settings used when building a `MarkovChain`.
///
/// Every field has a default, so an empty `[markov]` table is valid.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkovConfig {
	/// Number of buckets of the word → successors table. Fixed once built.
	pub buckets: usize,

	/// Backend of every successor distribution.
	pub histogram: HistogramKind,
}

impl Default for MarkovConfig {
	fn default() -> Self {
		Self {
			buckets: DEFAULT_MODEL_BUCKETS,
			histogram: HistogramKind::default(),
		}
	}
}
