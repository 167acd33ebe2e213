mod cli;
mod dictionary;
mod logging;
mod report;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use rs_markov_core::corpus::load_corpus;
use rs_markov_core::io::read_lines;
use rs_markov_core::model::{MarkovChain, MarkovConfig};

use crate::cli::{Cli, Command, GenerateArgs, HistogramArgs, WordsArgs};

fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbose);

	// A fixed seed replays the exact same draws
	let mut rng = match cli.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	if let Err(e) = run(cli.command, &mut rng) {
		eprintln!("Error: {e:#}");
		process::exit(1);
	}
}

fn run(command: Command, rng: &mut StdRng) -> Result<()> {
	match command {
		Command::Generate(args) => generate(args, rng),
		Command::Words(args) => words(args, rng),
		Command::Rearrange(args) => {
			println!("{}", dictionary::rearrange(&args.words, rng)?);
			Ok(())
		}
		Command::Histogram(args) => histogram(args, rng),
	}
}

fn generate(args: GenerateArgs, rng: &mut StdRng) -> Result<()> {
	let tokens = load_corpus(&args.corpus)
		.with_context(|| format!("failed to load corpus {}", args.corpus.display()))?;
	info!(tokens = tokens.len(), "corpus loaded");

	let config = MarkovConfig { buckets: args.buckets, histogram: args.histogram };
	let chain = MarkovChain::with_config(tokens, &config)?;
	for _ in 0..args.sentences {
		println!("{}", chain.generate_sentence(args.words, rng)?);
	}
	Ok(())
}

fn words(args: WordsArgs, rng: &mut StdRng) -> Result<()> {
	let dictionary = read_lines(&args.dict)
		.with_context(|| format!("failed to read word list {}", args.dict.display()))?;
	println!("{}", dictionary::random_sentence(args.count, &dictionary, rng)?);
	Ok(())
}

fn histogram(args: HistogramArgs, rng: &mut StdRng) -> Result<()> {
	let histogram = report::count_words(&args.words, args.histogram);
	print!("{}", report::render(&histogram, args.samples, rng)?);
	Ok(())
}
