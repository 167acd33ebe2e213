//! Corpus cleaning: raw text in, word tokens out.
//!
//! Sentence-ending punctuation (`.`, `!`, `?`) and apostrophes stay attached
//! to their words so the model can learn where sentences end.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::io::read_text;

/// Characters replaced by a space before splitting.
const SEPARATORS: &[char] = &['_', '*', '[', ']', '{', '}', ',', '"', ':', ';', '(', ')'];

/// A token made only of these characters carries no word.
const FILLER: &[char] = &['.', '_', '-', '\u{2013}', '\u{2014}'];

/// Splits raw text into cleaned word tokens.
///
/// - newlines, digits and `SEPARATORS` become spaces
/// - the text is split on whitespace
/// - tokens made only of `FILLER` characters are dropped
pub fn clean_text(text: &str) -> Vec<String> {
	let spaced: String = text
		.chars()
		.map(|c| if c.is_ascii_digit() || SEPARATORS.contains(&c) { ' ' } else { c })
		.collect();

	spaced
		.split_whitespace()
		.filter(|token| !token.chars().all(|c| FILLER.contains(&c)))
		.map(str::to_owned)
		.collect()
}

/// Reads and cleans a corpus file.
///
/// # Errors
/// Returns `GenError::Io` if the file cannot be read.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
	let tokens = clean_text(&read_text(&path)?);
	debug!(path = %path.as_ref().display(), tokens = tokens.len(), "loaded corpus");
	Ok(tokens)
}
