//! Hand-built containers backing the frequency distributions and the
//! transition model.
//!
//! - `Chain`: singly linked sequence, the collision bucket type
//! - `Table`: fixed bucket-count hash table built from chains

/// Singly linked sequence with O(1) append and prepend.
pub mod chain;

/// Separate-chaining hash table that never resizes.
pub mod table;

pub use chain::Chain;
pub use table::{DEFAULT_BUCKETS, DefaultBuildHasher, Table};
