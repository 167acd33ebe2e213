use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash};

use super::chain::Chain;
use crate::error::{GenError, Result};

/// Bucket count used by `Table::new`.
pub const DEFAULT_BUCKETS: usize = 8;

/// Hasher used when none is supplied.
///
/// `DefaultHasher::new()` uses fixed keys, so bucket placement of a key is
/// the same for every table of the same size within a process.
pub type DefaultBuildHasher = BuildHasherDefault<DefaultHasher>;

/// Fixed-size hash table resolving collisions with `Chain` buckets.
///
/// The bucket array is sized once at construction and never grows.
///
/// # Invariants
/// - every key lives in bucket `hash(key) % bucket_count`
/// - a bucket holds at most one entry per distinct key
#[derive(Clone, Debug)]
pub struct Table<K, V, S = DefaultBuildHasher> {
	buckets: Vec<Chain<(K, V)>>,
	hasher: S,
}

impl<K, V> Default for Table<K, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K, V> Table<K, V> {
	/// Creates a table with `DEFAULT_BUCKETS` buckets.
	pub fn new() -> Self {
		Self::build(DEFAULT_BUCKETS, DefaultBuildHasher::default())
	}

	/// Creates a table with `buckets` buckets.
	///
	/// # Errors
	/// Returns `GenError::InvalidBucketCount` if `buckets` is zero.
	pub fn with_buckets(buckets: usize) -> Result<Self> {
		Self::with_buckets_and_hasher(buckets, DefaultBuildHasher::default())
	}
}

impl<K, V, S> Table<K, V, S> {
	/// Creates a table with `buckets` buckets and a custom hasher.
	///
	/// # Errors
	/// Returns `GenError::InvalidBucketCount` if `buckets` is zero.
	pub fn with_buckets_and_hasher(buckets: usize, hasher: S) -> Result<Self> {
		if buckets == 0 {
			return Err(GenError::InvalidBucketCount { buckets });
		}
		Ok(Self::build(buckets, hasher))
	}

	fn build(buckets: usize, hasher: S) -> Self {
		Self {
			buckets: (0..buckets).map(|_| Chain::new()).collect(),
			hasher,
		}
	}

	/// Number of buckets, fixed for the table's lifetime.
	pub fn bucket_count(&self) -> usize {
		self.buckets.len()
	}

	/// Iterates over all entries, in bucket order then chain order.
	pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
		self.buckets.iter().flat_map(|bucket| bucket.iter().map(|(key, value)| (key, value)))
	}

	/// Returns all keys, in bucket order then chain order.
	pub fn keys(&self) -> Vec<&K> {
		self.iter().map(|(key, _)| key).collect()
	}

	/// Returns all values, in bucket order then chain order.
	pub fn values(&self) -> Vec<&V> {
		self.iter().map(|(_, value)| value).collect()
	}

	/// Returns all entries, in bucket order then chain order.
	pub fn items(&self) -> Vec<(&K, &V)> {
		self.iter().collect()
	}

	/// Number of stored entries, summed over every bucket's chain length.
	pub fn length(&self) -> usize {
		self.buckets.iter().map(Chain::length).sum()
	}

	/// Returns `true` if no bucket holds an entry.
	pub fn is_empty(&self) -> bool {
		self.buckets.iter().all(Chain::is_empty)
	}
}

impl<K, V, S> Table<K, V, S>
where
	K: Hash + Eq,
	S: BuildHasher,
{
	/// Returns the bucket where `key` is (or would be) stored.
	pub fn bucket_index<Q>(&self, key: &Q) -> usize
	where
		K: Borrow<Q>,
		Q: Hash + ?Sized,
	{
		(self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
	}

	/// Inserts `value` under `key`, replacing the value of an existing entry.
	///
	/// Replacement scans the key's bucket, so it is O(bucket length).
	pub fn set(&mut self, key: K, value: V) {
		let index = self.bucket_index(&key);
		let bucket = &mut self.buckets[index];
		match bucket.find_mut(|(existing, _)| *existing == key) {
			Some(entry) => entry.1 = value,
			None => bucket.append((key, value)),
		}
	}

	/// Returns the value stored under `key`.
	///
	/// # Errors
	/// Returns `GenError::KeyNotFound` if the key is absent.
	pub fn get<Q>(&self, key: &Q) -> Result<&V>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.buckets[self.bucket_index(key)]
			.find_item(|(existing, _)| <K as Borrow<Q>>::borrow(existing) == key)
			.map(|(_, value)| value)
			.ok_or(GenError::KeyNotFound)
	}

	/// Returns a mutable reference to the value stored under `key`.
	///
	/// # Errors
	/// Returns `GenError::KeyNotFound` if the key is absent.
	pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		let index = self.bucket_index(key);
		self.buckets[index]
			.find_mut(|(existing, _)| <K as Borrow<Q>>::borrow(existing) == key)
			.map(|(_, value)| value)
			.ok_or(GenError::KeyNotFound)
	}

	/// Returns `true` if `key` is stored. Never fails.
	pub fn contains<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.buckets[self.bucket_index(key)].find(|(existing, _)| <K as Borrow<Q>>::borrow(existing) == key)
	}

	/// Removes `key` and returns its value.
	///
	/// # Errors
	/// Returns `GenError::KeyNotFound` if the key is absent.
	pub fn delete<Q>(&mut self, key: &Q) -> Result<V>
	where
		K: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		let index = self.bucket_index(key);
		self.buckets[index]
			.delete_where(|(existing, _)| <K as Borrow<Q>>::borrow(existing) == key)
			.map(|(_, value)| value)
			.map_err(|_| GenError::KeyNotFound)
	}
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Table<K, V> {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut table = Self::new();
		for (key, value) in iter {
			table.set(key, value);
		}
		table
	}
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Display for Table<K, V, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let entries: Vec<String> = self
			.iter()
			.map(|(key, value)| format!("{key:?}: {value:?}"))
			.collect();
		write!(f, "{{{}}}", entries.join(", "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn roman() -> Table<String, u32> {
		let mut table = Table::new();
		for (key, value) in [("I", 1), ("V", 5), ("X", 10)] {
			table.set(key.to_owned(), value);
		}
		table
	}

	#[test]
	fn new_table_is_empty() {
		let table: Table<String, u32> = Table::new();
		assert_eq!(table.bucket_count(), DEFAULT_BUCKETS);
		assert_eq!(table.length(), 0);
		assert!(table.is_empty());
		assert!(table.keys().is_empty());
	}

	#[test]
	fn zero_buckets_rejected() {
		let result: Result<Table<String, u32>> = Table::with_buckets(0);
		assert!(matches!(result, Err(GenError::InvalidBucketCount { buckets: 0 })));
	}

	#[test]
	fn set_then_get() {
		let table = roman();
		assert_eq!(table.get("I").unwrap(), &1);
		assert_eq!(table.get("V").unwrap(), &5);
		assert_eq!(table.get("X").unwrap(), &10);
		assert!(table.contains("X"));
		assert!(!table.contains("L"));
		assert_eq!(table.length(), 3);
	}

	#[test]
	fn set_existing_key_replaces_value() {
		let mut table = roman();
		table.set("V".to_owned(), 50);
		table.set("V".to_owned(), 500);
		assert_eq!(table.get("V").unwrap(), &500);
		assert_eq!(table.length(), 3);
	}

	#[test]
	fn get_missing_key_fails() {
		let table = roman();
		assert!(matches!(table.get("L"), Err(GenError::KeyNotFound)));
	}

	#[test]
	fn get_mut_updates_value() {
		let mut table = roman();
		*table.get_mut("I").unwrap() += 1;
		assert_eq!(table.get("I").unwrap(), &2);
		assert!(matches!(table.get_mut("L"), Err(GenError::KeyNotFound)));
	}

	#[test]
	fn delete_removes_key() {
		let mut table = roman();
		assert_eq!(table.delete("V").unwrap(), 5);
		assert!(!table.contains("V"));
		assert_eq!(table.length(), 2);
		table.delete("I").unwrap();
		table.delete("X").unwrap();
		assert!(table.is_empty());
	}

	#[test]
	fn delete_on_empty_table_fails() {
		let mut table: Table<String, u32> = Table::new();
		assert!(matches!(table.delete("I"), Err(GenError::KeyNotFound)));
	}

	#[test]
	fn single_bucket_holds_colliding_keys() {
		let mut table = Table::with_buckets(1).unwrap();
		for (index, key) in ["alpha", "beta", "gamma", "delta"].into_iter().enumerate() {
			table.set(key, index);
		}
		assert_eq!(table.get("alpha").unwrap(), &0);
		assert_eq!(table.get("delta").unwrap(), &3);
		table.delete("beta").unwrap();
		assert_eq!(table.get("gamma").unwrap(), &2);
		assert_eq!(table.keys(), vec![&"alpha", &"gamma", &"delta"]);
	}

	#[test]
	fn iteration_follows_bucket_order() {
		let table = roman();
		let mut expected: Vec<(usize, &str)> =
			["I", "V", "X"].into_iter().map(|key| (table.bucket_index(key), key)).collect();
		// Stable sort keeps insertion order within a bucket
		expected.sort_by_key(|(bucket, _)| *bucket);
		let keys: Vec<&str> = table.keys().into_iter().map(String::as_str).collect();
		let expected: Vec<&str> = expected.into_iter().map(|(_, key)| key).collect();
		assert_eq!(keys, expected);
	}

	#[test]
	fn bucket_index_is_deterministic() {
		let first: Table<String, u32> = Table::with_buckets(16).unwrap();
		let second: Table<String, u32> = Table::with_buckets(16).unwrap();
		assert_eq!(first.bucket_index("markov"), second.bucket_index("markov"));
		assert!(first.bucket_index("markov") < 16);
	}

	#[test]
	fn display_lists_entries() {
		let mut table = Table::with_buckets(1).unwrap();
		table.set("I", 1);
		table.set("V", 5);
		assert_eq!(table.to_string(), r#"{"I": 1, "V": 5}"#);
	}
}
