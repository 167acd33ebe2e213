use super::FrequencyDistribution;

/// Frequency distribution stored as an ordered list of `(item, count)` pairs.
///
/// Items keep their first-seen order, which is also the sampling order.
/// Every lookup is a linear scan, so `add_count` and `frequency` are O(n).
#[derive(Clone, Debug)]
pub struct Listogram<T> {
	/// Observed items with their occurrence count.
	/// Example: [("one", 1), ("fish", 4)]
	entries: Vec<(T, usize)>,
	types: usize,
	tokens: usize,
}

impl<T> Default for Listogram<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Listogram<T> {
	/// Creates an empty listogram.
	pub fn new() -> Self {
		Self { entries: Vec::new(), types: 0, tokens: 0 }
	}
}

impl<T: PartialEq> Listogram<T> {
	/// Returns the position of `target` in the entry list.
	pub fn index_of(&self, target: &T) -> Option<usize> {
		self.entries.iter().position(|(item, _)| item == target)
	}
}

impl<T: PartialEq> FrequencyDistribution<T> for Listogram<T> {
	fn add_count(&mut self, item: T, amount: usize) {
		if amount == 0 {
			return;
		}

		match self.index_of(&item) {
			Some(index) => self.entries[index].1 += amount,
			None => {
				self.entries.push((item, amount));
				self.types += 1;
			}
		}
		self.tokens += amount;
	}

	fn frequency(&self, item: &T) -> usize {
		self.index_of(item).map_or(0, |index| self.entries[index].1)
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
		self.entries.iter().map(|(item, count)| (item, *count))
	}
}

impl<T: PartialEq> FromIterator<T> for Listogram<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut listogram = Self::new();
		for item in iter {
			listogram.add(item);
		}
		listogram
	}
}
