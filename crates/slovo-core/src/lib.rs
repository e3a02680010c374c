//! Character-level foundations shared by the automata and morphology cores.
//!
//! # Architecture
//!
//! - [`symbols`] -- UTF-32 symbol classification and case mapping
//! - [`utf8`] -- lazy UTF-8 decoding iterator and UTF-8 generation
//! - [`charset`] -- table-driven decoders for legacy single-byte encodings
//! - [`alphabet`] -- language alphabets mapping UTF-32 to compact codes
//! - [`tokens`] -- word iterator over symbol-code streams
//!
//! Everything here is plain data and pure functions; there is no I/O and no
//! shared mutable state. Input is pulled from caller-supplied iterators.

pub mod alphabet;
pub mod charset;
pub mod symbols;
pub mod tokens;
pub mod utf8;

pub use alphabet::{Alphabet, EnglishAlphabet, RussianAlphabet};
pub use symbols::SymbolCode;
pub use utf8::{Utf8Decoder, Utf8Symbol};
