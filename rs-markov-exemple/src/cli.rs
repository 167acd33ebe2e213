use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rs_markov_core::histogram::HistogramKind;
use rs_markov_core::model::DEFAULT_SENTENCE_WORDS;
use rs_markov_core::model::config::DEFAULT_MODEL_BUCKETS;

/// Word games on top of the rs-markov core.
#[derive(Parser)]
#[command(name = "rs-markov", version, about = "Markov sentence generator and word toys")]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug, -vvv trace).
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Seed for every random draw; omit for a fresh run each time.
	#[arg(short, long, global = true)]
	pub seed: Option<u64>,

	/// Subcommand to run.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
	/// Generate sentences from a corpus file.
	Generate(GenerateArgs),
	/// Build a "sentence" of random dictionary words.
	Words(WordsArgs),
	/// Shuffle the given words.
	Rearrange(RearrangeArgs),
	/// Print a word histogram and compare it with sampled frequencies.
	Histogram(HistogramArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
	/// Path to the corpus text file.
	#[arg(short, long)]
	pub corpus: PathBuf,

	/// Words per sentence.
	#[arg(short = 'n', long, default_value_t = DEFAULT_SENTENCE_WORDS)]
	pub words: usize,

	/// Number of sentences to print.
	#[arg(long, default_value_t = 1)]
	pub sentences: usize,

	/// Successor distribution backend (linear or indexed).
	#[arg(long, default_value = "indexed")]
	pub histogram: HistogramKind,

	/// Bucket count of the transition table.
	#[arg(long, default_value_t = DEFAULT_MODEL_BUCKETS)]
	pub buckets: usize,
}

/// Arguments for the `words` subcommand.
#[derive(clap::Args)]
pub struct WordsArgs {
	/// Number of distinct words to pick.
	pub count: usize,

	/// Word list, one word per line.
	#[arg(short, long, default_value = "/usr/share/dict/words")]
	pub dict: PathBuf,
}

/// Arguments for the `rearrange` subcommand.
#[derive(clap::Args)]
pub struct RearrangeArgs {
	/// Words to shuffle.
	pub words: Vec<String>,
}

/// Arguments for the `histogram` subcommand.
#[derive(clap::Args)]
pub struct HistogramArgs {
	/// Words to count; a built-in sample text is used when empty.
	pub words: Vec<String>,

	/// Number of draws used to estimate sampled frequencies.
	#[arg(long, default_value_t = 10_000)]
	pub samples: usize,

	/// Distribution backend (linear or indexed).
	#[arg(long, default_value = "linear")]
	pub histogram: HistogramKind,
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn parses_generate_arguments() {
		let cli = Cli::parse_from([
			"rs-markov", "-v", "--seed", "7", "generate", "--corpus", "book.txt", "-n", "12", "--histogram", "linear",
		]);
		assert_eq!(cli.verbose, 1);
		assert_eq!(cli.seed, Some(7));
		match cli.command {
			Command::Generate(args) => {
				assert_eq!(args.corpus, PathBuf::from("book.txt"));
				assert_eq!(args.words, 12);
				assert_eq!(args.sentences, 1);
				assert_eq!(args.histogram, HistogramKind::Linear);
				assert_eq!(args.buckets, DEFAULT_MODEL_BUCKETS);
			}
			_ => panic!("expected generate"),
		}
	}

	#[test]
	fn rejects_unknown_histogram() {
		let result = Cli::try_parse_from(["rs-markov", "histogram", "a", "--histogram", "tree"]);
		assert!(result.is_err());
	}
}
