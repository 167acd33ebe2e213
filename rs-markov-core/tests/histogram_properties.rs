//! Counting properties shared by both frequency distribution backends.

use proptest::prelude::*;
use rs_markov_core::histogram::{FrequencyDistribution, Histogram, HistogramKind};

fn arb_kind() -> impl Strategy<Value = HistogramKind> {
	prop_oneof![Just(HistogramKind::Linear), Just(HistogramKind::Indexed)]
}

/// `(item, amount)` observations, zero amounts included.
fn arb_counts() -> impl Strategy<Value = Vec<(u8, usize)>> {
	prop::collection::vec((0u8..30, 0usize..20), 0..200)
}

proptest! {
	#[test]
	fn tokens_equal_sum_of_frequencies(kind in arb_kind(), counts in arb_counts()) {
		let mut histogram = Histogram::new(kind);
		for (item, amount) in &counts {
			histogram.add_count(*item, *amount);
		}

		let summed: usize = histogram.entries().map(|(_, count)| count).sum();
		prop_assert_eq!(summed, histogram.tokens());
		prop_assert_eq!(histogram.tokens(), counts.iter().map(|(_, amount)| amount).sum::<usize>());
		prop_assert_eq!(histogram.entries().count(), histogram.types());
		prop_assert!(histogram.entries().all(|(_, count)| count > 0));
	}

	#[test]
	fn backends_agree_on_frequencies(counts in arb_counts()) {
		let mut linear = Histogram::new(HistogramKind::Linear);
		let mut indexed = Histogram::new(HistogramKind::Indexed);
		for (item, amount) in &counts {
			linear.add_count(*item, *amount);
			indexed.add_count(*item, *amount);
		}

		prop_assert_eq!(linear.types(), indexed.types());
		for item in 0u8..30 {
			prop_assert_eq!(linear.frequency(&item), indexed.frequency(&item));
		}
	}
}
