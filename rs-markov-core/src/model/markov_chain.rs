use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, trace};

use super::config::MarkovConfig;
use crate::collections::Table;
use crate::error::{GenError, Result};
use crate::histogram::{FrequencyDistribution, Histogram};

/// Sentence length used when the caller does not pick one.
pub const DEFAULT_SENTENCE_WORDS: usize = 10;

/// Returned by `generate_sentence` when the model has no transitions.
pub const NO_CORPUS: &str = "No words in the corpus";

/// Closing punctuation; one is appended when the last word lacks all of them.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// First-order Markov model over words.
///
/// Built once from an ordered token sequence, read-only afterwards.
///
/// # Invariants
/// - a word is a key of `transitions` iff it occurs at a non-final position
///   of the training sequence
/// - `words` holds exactly the keys of `transitions`, in first-seen order
/// - `starters` is the subset of `words` beginning with an uppercase letter
#[derive(Clone, Debug)]
pub struct MarkovChain {
	/// word → distribution of the words observed right after it
	transitions: Table<String, Histogram<String>>,
	words: Vec<String>,
	starters: Vec<String>,
}

impl MarkovChain {
	/// Builds a model from `tokens` with the default `MarkovConfig`.
	///
	/// An empty (or single-token) sequence yields an empty model.
	pub fn new<I, W>(tokens: I) -> Result<Self>
	where
		I: IntoIterator<Item = W>,
		W: Into<String>,
	{
		Self::with_config(tokens, &MarkovConfig::default())
	}

	/// Builds a model from `tokens`.
	///
	/// For each consecutive pair `(w_i, w_i+1)` the count of `w_i+1` is
	/// incremented in the distribution keyed by `w_i`. The final token gets
	/// no outgoing transitions unless it also occurs earlier.
	///
	/// # Errors
	/// Returns `GenError::InvalidBucketCount` if `config.buckets` is zero.
	pub fn with_config<I, W>(tokens: I, config: &MarkovConfig) -> Result<Self>
	where
		I: IntoIterator<Item = W>,
		W: Into<String>,
	{
		let mut transitions: Table<String, Histogram<String>> = Table::with_buckets(config.buckets)?;
		let mut words = Vec::new();

		let mut tokens = tokens.into_iter().map(Into::into);
		if let Some(mut current) = tokens.next() {
			for next in tokens {
				match transitions.get_mut(current.as_str()) {
					Ok(histogram) => histogram.add(next.clone()),
					Err(_) => {
						let mut histogram = Histogram::new(config.histogram);
						histogram.add(next.clone());
						transitions.set(current.clone(), histogram);
						words.push(current);
					}
				}
				current = next;
			}
		}

		let starters: Vec<String> = words
			.iter()
			.filter(|word| word.chars().next().is_some_and(char::is_uppercase))
			.cloned()
			.collect();

		debug!(
			words = words.len(),
			starters = starters.len(),
			buckets = config.buckets,
			histogram = ?config.histogram,
			"built transition model"
		);

		Ok(Self { transitions, words, starters })
	}

	/// Number of words with recorded successors.
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Returns `true` if no transition was recorded.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Words with recorded successors, in first-seen order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Words eligible to open a sentence (leading uppercase letter).
	pub fn starters(&self) -> &[String] {
		&self.starters
	}

	/// Returns the successor distribution of `word`, if it has one.
	pub fn successors(&self, word: &str) -> Option<&Histogram<String>> {
		self.transitions.get(word).ok()
	}

	/// Generates a sentence of `num_words` words.
	///
	/// # Behavior
	/// - Returns `NO_CORPUS` if the model is empty.
	/// - Opens on a random capitalized word when one exists, otherwise on
	///   any random word.
	/// - Each next word is sampled from the current word's successors; a word
	///   without successors restarts the walk on a random model word.
	/// - Appends `.`, `!` or `?` unless the last word already ends with one.
	///
	/// # Errors
	/// Returns `GenError::InvalidWordCount` if `num_words` is zero.
	pub fn generate_sentence<R: Rng + ?Sized>(&self, num_words: usize, rng: &mut R) -> Result<String> {
		if num_words == 0 {
			return Err(GenError::InvalidWordCount { num_words });
		}
		if self.is_empty() {
			return Ok(NO_CORPUS.to_owned());
		}

		let openers = if self.starters.is_empty() { &self.words } else { &self.starters };
		let mut current = Self::pick(openers, rng)?;
		trace!(word = %current, "selected start word");

		// Grows per word, `num_words` is caller-controlled
		let mut sentence = current.clone();
		for _ in 1..num_words {
			current = match self.successors(current) {
				Some(histogram) => histogram.sample(rng)?,
				None => {
					trace!(word = %current, "no successor, restarting walk");
					Self::pick(&self.words, rng)?
				}
			};
			sentence.push(' ');
			sentence.push_str(current);
		}

		if !current.ends_with(&TERMINATORS[..]) {
			sentence.push(TERMINATORS[rng.random_range(0..TERMINATORS.len())]);
		}

		Ok(sentence)
	}

	/// Picks a word uniformly at random.
	fn pick<'a, R: Rng + ?Sized>(words: &'a [String], rng: &mut R) -> Result<&'a String> {
		words.choose(rng).ok_or(GenError::EmptyDistribution)
	}
}
