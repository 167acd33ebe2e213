use std::hash::Hash;

use super::FrequencyDistribution;
use crate::collections::Table;
use crate::error::Result;

/// Frequency distribution indexed by a `Table` keyed on the item.
///
/// Lookups hash into one bucket, so `add_count` and `frequency` are O(1) on
/// average. Sampling walks the table in bucket order.
#[derive(Clone, Debug)]
pub struct Dictogram<T> {
	counts: Table<T, usize>,
	types: usize,
	tokens: usize,
}

impl<T> Default for Dictogram<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Dictogram<T> {
	/// Creates an empty dictogram over a default-sized table.
	pub fn new() -> Self {
		Self { counts: Table::new(), types: 0, tokens: 0 }
	}

	/// Creates an empty dictogram over a table of `buckets` buckets.
	///
	/// # Errors
	/// Returns `GenError::InvalidBucketCount` if `buckets` is zero.
	pub fn with_buckets(buckets: usize) -> Result<Self> {
		Ok(Self { counts: Table::with_buckets(buckets)?, types: 0, tokens: 0 })
	}
}

impl<T: Hash + Eq> FrequencyDistribution<T> for Dictogram<T> {
	fn add_count(&mut self, item: T, amount: usize) {
		if amount == 0 {
			return;
		}

		match self.counts.get_mut(&item) {
			Ok(count) => *count += amount,
			Err(_) => {
				self.counts.set(item, amount);
				self.types += 1;
			}
		}
		self.tokens += amount;
	}

	fn frequency(&self, item: &T) -> usize {
		self.counts.get(item).copied().unwrap_or(0)
	}

	fn contains(&self, item: &T) -> bool {
		self.counts.contains(item)
	}

	fn types(&self) -> usize {
		self.types
	}

	fn tokens(&self) -> usize {
		self.tokens
	}

	fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a T, usize)>
	where
		T: 'a,
	{
		self.counts.iter().map(|(item, count)| (item, *count))
	}
}

impl<T: Hash + Eq> FromIterator<T> for Dictogram<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut dictogram = Self::new();
		for item in iter {
			dictogram.add(item);
		}
		dictogram
	}
}
