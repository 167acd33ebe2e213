use anyhow::{Result, bail};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Picks `count` distinct words and joins them into a sentence ending in `.`.
///
/// # Errors
/// Returns an error if `count` is zero or exceeds the number of words.
pub fn random_sentence<R: Rng + ?Sized>(count: usize, words: &[String], rng: &mut R) -> Result<String> {
	if count == 0 {
		bail!("word count must be >= 1");
	}
	if count > words.len() {
		bail!("requested {count} words but the dictionary has only {}", words.len());
	}

	let selected: Vec<&str> = words.choose_multiple(rng, count).map(String::as_str).collect();
	Ok(format!("{}.", selected.join(" ")))
}

/// Shuffles `words` and joins them with spaces.
///
/// # Errors
/// Returns an error if no words are given.
pub fn rearrange<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> Result<String> {
	if words.is_empty() {
		bail!("provide words to rearrange");
	}

	let mut shuffled: Vec<&str> = words.iter().map(String::as_str).collect();
	shuffled.shuffle(rng);
	Ok(shuffled.join(" "))
}
