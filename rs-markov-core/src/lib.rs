//! Word-level Markov text generation on hand-built containers.
//!
//! This crate provides:
//! - A singly linked `Chain` and a fixed-size chained hash `Table`
//! - Frequency distributions with weighted sampling, backed either by a
//!   linear list or by a `Table`
//! - A first-order Markov chain generating sentences from a word corpus
//! - Corpus loading and cleaning helpers
//!
//! Randomness is always supplied by the caller, so every sampling operation
//! is reproducible with a seeded generator.

/// Chain and hash table containers.
pub mod collections;

/// Corpus cleaning into word tokens.
pub mod corpus;

/// Error type shared by the whole crate.
pub mod error;

/// Frequency distributions (linear and indexed backends).
pub mod histogram;

/// Text file reading with encoding fallback.
pub mod io;

/// Markov transition model and sentence generation.
pub mod model;

pub use error::{GenError, Result};
