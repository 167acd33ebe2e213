//! End-to-end generation from raw text.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::corpus::clean_text;
use rs_markov_core::histogram::{FrequencyDistribution, HistogramKind};
use rs_markov_core::model::{DEFAULT_SENTENCE_WORDS, MarkovChain, MarkovConfig};

const TEXT: &str = "The cat sat on the mat. The dog sat on the log! \
	A bird sang (loudly) on the wire, and the cat watched it.";

fn chain(histogram: HistogramKind, buckets: usize) -> MarkovChain {
	let config = MarkovConfig { buckets, histogram };
	MarkovChain::with_config(clean_text(TEXT), &config).unwrap()
}

#[test]
fn successor_counts_match_corpus() {
	let model = chain(HistogramKind::Indexed, 16);
	let after_sat = model.successors("sat").unwrap();
	assert_eq!(after_sat.frequency(&"on".to_owned()), 2);
	assert_eq!(after_sat.types(), 1);

	let after_the = model.successors("the").unwrap();
	assert_eq!(after_the.tokens(), 4);
	assert_eq!(after_the.frequency(&"mat.".to_owned()), 1);
	assert_eq!(after_the.frequency(&"cat".to_owned()), 1);
	assert!(model.successors("it.").is_none());
}

#[test]
fn every_generated_pair_was_observed_or_is_a_restart() {
	for histogram in [HistogramKind::Linear, HistogramKind::Indexed] {
		for buckets in [1, 256] {
			let model = chain(histogram, buckets);
			let mut rng = StdRng::seed_from_u64(buckets as u64);
			for _ in 0..25 {
				let sentence = model.generate_sentence(DEFAULT_SENTENCE_WORDS, &mut rng).unwrap();
				let words: Vec<&str> = sentence.split(' ').collect();
				assert_eq!(words.len(), DEFAULT_SENTENCE_WORDS);
				assert!(words[0].starts_with(char::is_uppercase), "{sentence}");

				for pair in words[..words.len() - 1].windows(2) {
					match model.successors(pair[0]) {
						Some(next) => assert!(next.contains(&pair[1].to_owned()), "{sentence}"),
						None => assert!(model.words().iter().any(|w| w == pair[1]), "{sentence}"),
					}
				}
			}
		}
	}
}

#[test]
fn backends_agree_on_model_shape() {
	let linear = chain(HistogramKind::Linear, 8);
	let indexed = chain(HistogramKind::Indexed, 8);
	assert_eq!(linear.words(), indexed.words());
	for word in linear.words() {
		let a = linear.successors(word).unwrap();
		let b = indexed.successors(word).unwrap();
		assert_eq!(a.tokens(), b.tokens());
		assert_eq!(a.types(), b.types());
		for (next, count) in a.entries() {
			assert_eq!(b.frequency(next), count);
		}
	}
}
