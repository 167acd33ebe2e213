//! Error types for the rs-markov-core crate.

/// Error type for all fallible operations in the rs-markov-core crate.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
	/// Returned by table `get`/`delete` when the key is absent.
	#[error("key not found")]
	KeyNotFound,

	/// Returned by chain `delete` when no stored item matches.
	#[error("item not found")]
	ItemNotFound,

	/// Returned when sampling a distribution with zero observations.
	#[error("cannot sample an empty distribution")]
	EmptyDistribution,

	/// Returned when a sentence of zero words is requested.
	#[error("num_words must be >= 1, got {num_words}")]
	InvalidWordCount {
		/// The invalid word count.
		num_words: usize,
	},

	/// Returned when a table is constructed without buckets.
	#[error("bucket count must be >= 1, got {buckets}")]
	InvalidBucketCount {
		/// The invalid bucket count.
		buckets: usize,
	},

	/// Returned when a corpus file cannot be read.
	#[error("failed to read corpus: {0}")]
	Io(#[from] std::io::Error),
}

/// Shorthand result type used across the crate.
pub type Result<T> = std::result::Result<T, GenError>;
