use std::fmt::Write;

use anyhow::Result;
use rand::Rng;
use rs_markov_core::histogram::{FrequencyDistribution, Histogram, HistogramKind};

/// Text counted when the `histogram` subcommand gets no words.
pub const SAMPLE_TEXT: &str = "one fish two fish red fish blue fish";

/// Renders a histogram and compares observed with sampled frequencies.
///
/// Draws `samples` words from `histogram`, counts them in a second histogram
/// of the same backend, then prints one row per word with the relative error
/// between both frequencies.
pub fn render<R: Rng + ?Sized>(histogram: &Histogram<String>, samples: usize, rng: &mut R) -> Result<String> {
	let mut sampled: Histogram<String> = Histogram::new(histogram.kind());
	for _ in 0..samples {
		sampled.add(histogram.sample(rng)?.clone());
	}

	let mut out = String::new();
	writeln!(out, "{} tokens, {} types", histogram.tokens(), histogram.types())?;

	let header = "| word type       | observed freq   | sampled freq    |  error   |";
	let divider = "-".repeat(header.len());
	writeln!(out, "{divider}\n{header}\n{divider}")?;
	for (word, count) in histogram.entries() {
		let observed = count as f64 / histogram.tokens() as f64;
		let hits = sampled.frequency(word);
		let frequency = if sampled.tokens() == 0 { 0.0 } else { hits as f64 / sampled.tokens() as f64 };
		let error = (frequency - observed) / observed;
		writeln!(
			out,
			"| {:<15} | {:>5} = {:>6.2}% | {:>5} = {:>6.2}% | {:>+7.2}% |",
			word,
			count,
			observed * 100.0,
			hits,
			frequency * 100.0,
			error * 100.0
		)?;
	}
	writeln!(out, "{divider}")?;

	Ok(out)
}

/// Counts `words`, falling back to `SAMPLE_TEXT` when empty.
pub fn count_words(words: &[String], kind: HistogramKind) -> Histogram<String> {
	if words.is_empty() {
		Histogram::from_items(kind, SAMPLE_TEXT.split_whitespace().map(str::to_owned))
	} else {
		Histogram::from_items(kind, words.iter().cloned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn empty_input_counts_sample_text() {
		let histogram = count_words(&[], HistogramKind::Linear);
		assert_eq!(histogram.tokens(), 8);
		assert_eq!(histogram.frequency(&"fish".to_owned()), 4);
	}

	#[test]
	fn report_has_one_row_per_word() {
		let histogram = count_words(&[], HistogramKind::Indexed);
		let mut rng = StdRng::seed_from_u64(10);
		let report = render(&histogram, 1_000, &mut rng).unwrap();
		assert!(report.starts_with("8 tokens, 5 types"));
		for word in ["one", "two", "red", "blue", "fish"] {
			assert_eq!(report.lines().filter(|line| line.starts_with(&format!("| {word} "))).count(), 1);
		}
	}
}
