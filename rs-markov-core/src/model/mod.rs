//! Top-level module for Markov text generation.
//!
//! This module provides:
//! - The first-order word transition model (`MarkovChain`)
//! - Its construction settings (`MarkovConfig`)

/// First-order Markov chain over words.
///
/// Maps each observed word to a `Histogram` of its successors and performs
/// a frequency-weighted random walk to synthesize sentences.
pub mod markov_chain;

/// Construction settings for `MarkovChain`.
pub mod config;

pub use config::MarkovConfig;
pub use markov_chain::{DEFAULT_SENTENCE_WORDS, MarkovChain, NO_CORPUS};
