//! Word-frequency distributions with frequency-weighted sampling.
//!
//! Two interchangeable backends implement `FrequencyDistribution`:
//! - `Listogram`: ordered `(item, count)` pairs, lookup by linear scan
//! - `Dictogram`: items indexed in a `Table`, lookup by hashing
//!
//! `Histogram` wraps either one, selected at construction by `HistogramKind`.

use std::str::FromStr;

use rand::Rng;
use serde::Deserialize;

use crate::error::{GenError, Result};

/// Hash-indexed backend.
pub mod dictogram;

/// Linear-scan backend.
pub mod listogram;

pub use dictogram::Dictogram;
pub use listogram::Listogram;

/// Counter over discrete items supporting weighted random sampling.
///
/// # Invariants
/// - every stored count is strictly positive
/// - `tokens()` equals the sum of all stored counts
/// - `types()` equals the number of stored items
pub trait FrequencyDistribution<T> {
	/// Increases the count of `item` by `amount`, inserting it if absent.
	///
	/// An `amount` of zero leaves the distribution unchanged.
	fn add_count(&mut self, item: T, amount: usize);

	/// Returns the stored count of `item`, or 0 if absent.
	fn frequency(&self, item: &T) -> usize;

	/// Number of distinct items.
	fn types(&self) -> usize;

	/// Total number of observations (sum of all counts).
	fn tokens(&self) -> usize;

	/// Iterates over `(item, count)` in the backend's enumeration order.
	fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a T, usize)>
	where
		T: 'a;

	/// Records a single observation of `item`.
	fn add(&mut self, item: T) {
		self.add_count(item, 1);
	}

	/// Returns `true` if `item` has been observed.
	fn contains(&self, item: &T) -> bool {
		self.frequency(item) > 0
	}

	/// Draws an item with probability proportional to its count.
	///
	/// Draws `r` uniformly from `[1, tokens]`, then walks `entries()`
	/// accumulating counts and returns the first item whose running sum
	/// reaches `r`.
	///
	/// # Errors
	/// Returns `GenError::EmptyDistribution` if nothing has been observed.
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T> {
		let total = self.tokens();
		if total == 0 {
			return Err(GenError::EmptyDistribution);
		}

		let target = rng.random_range(1..=total);
		let mut cumulative = 0;
		for (item, count) in self.entries() {
			cumulative += count;
			if cumulative >= target {
				return Ok(item);
			}
		}

		// Unreachable while `tokens()` matches the stored counts
		Err(GenError::EmptyDistribution)
	}
}

/// Backend selector for `Histogram`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistogramKind {
	/// `Listogram`, O(n) lookup.
	Linear,
	/// `Dictogram`, O(1) average lookup.
	#[default]
	Indexed,
}

impl FromStr for HistogramKind {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"linear" => Ok(Self::Linear),
			"indexed" => Ok(Self::Indexed),
			other => Err(format!("unknown histogram kind '{other}', expected 'linear' or 'indexed'")),
		}
	}
}

/// Frequency distribution with a backend chosen at construction.
///
/// Both variants behave identically apart from lookup cost.
#[derive(Clone, Debug)]
pub enum Histogram<T> {
	/// Backed by a `Listogram`.
	Linear(Listogram<T>),
	/// Backed by a `Dictogram`.
	Indexed(Dictogram<T>),
}

impl<T> Histogram<T> {
	/// Creates an empty histogram with the given backend.
	pub fn new(kind: HistogramKind) -> Self {
		match kind {
			HistogramKind::Linear => Self::Linear(Listogram::new()),
			HistogramKind::Indexed => Self::Indexed(Dictogram::new()),
		}
	}

	/// Returns the backend in use.
	pub fn kind(&self) -> HistogramKind {
		match self {
			Self::Linear(_) => HistogramKind::Linear,
			Self::Indexed(_) => HistogramKind::Indexed,
		}
	}
}

impl<T: std::hash::Hash + Eq> Histogram<T> {
	/// Creates a histogram counting every item of `items`.
	pub fn from_items<I: IntoIterator<Item = T>>(kind: HistogramKind, items: I) -> Self {
		let mut histogram = Self::new(kind);
		for item in items {
			histogram.add(item);
		}
		histogram
	}
}

impl<T: std::hash::Hash + Eq> FrequencyDistribution<T> for Histogram<T> {
	fn add_count(&mut self, item: T, amount: usize) {
		match self {
			Self::Linear(histogram) => histogram.add_count(item, amount),
			Self::Indexed(histogram) => histogram.add_count(item, amount),
		}
	}

	fn frequency(&self, item: &T) -> usize {
		match self {
			Self::Linear(histogram) => histogram.frequency(item),
			Self::Indexed(histogram) => histogram.frequency(item),
		}
	}

	fn types(&self) -> usize {
		match self {
			Self::Linear(histogram) => histogram.types(),
			Self::Indexed(histogram) => histogram.types(),
		}
	}

	fn tokens(&self) -> usize {
		match self {
			Self::Linear(histogram) => histogram.tokens(),
			Self::Indexed(histogram) => histogram.tokens(),
		}
	}

	fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a T, usize)>
	where
		T: 'a,
	{
		let entries: Box<dyn Iterator<Item = (&'a T, usize)> + 'a> = match self {
			Self::Linear(histogram) => Box::new(histogram.entries()),
			Self::Indexed(histogram) => Box::new(histogram.entries()),
		};
		entries
	}
}
