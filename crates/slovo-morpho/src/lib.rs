//! Dictionary-driven morphological analysis and generation.
//!
//! A language's inflection tables are compressed into a shared-suffix trie
//! of word bases plus a table of suffix lines. Analysis walks the base trie
//! over the encoded word and resolves the remaining bytes against the
//! candidate's suffix line; generation concatenates a stored base with the
//! primary suffix recorded for the requested attribute packing.
//!
//! # Architecture
//!
//! - [`suffix_storage`] -- per-line `suffix -> attrs` and `attr -> suffix`
//! - [`base_storage`] -- `lemma id -> (encoded base, main form, line id)`
//! - [`morphologist`] -- analysis, generation and binary persistence
//! - [`builder`] -- single-threaded build phase over all three stores
//! - [`model`] -- Russian and English part-of-speech packings
//! - [`aot`] -- importer for AOT `.tab` / `.dic` source files

pub mod aot;
pub mod base_storage;
pub mod builder;
pub mod model;
pub mod morphologist;
pub mod suffix_storage;

pub use base_storage::BaseStorage;
pub use builder::MorphoBuilder;
pub use morphologist::{Lemma, Morphologist};
pub use suffix_storage::{SuffixStorage, NULL_SUFFIX};

/// Morphology-layer failure.
#[derive(Debug, thiserror::Error)]
pub enum MorphoError {
    /// A suffix-line id outside the allocated range was passed to a
    /// builder entry point.
    #[error("suffix line {0} does not exist")]
    InvalidLine(u32),

    /// Persistence failure.
    #[error(transparent)]
    Serialize(#[from] slovo_automata::SerializeError),
}
