// Build phase for the morphologist's three stores.

use slovo_core::alphabet::Alphabet;
use slovo_core::symbols::SymbolCode;

use crate::base_storage::LemmaInfo;
use crate::morphologist::{pack_trie_attr, Morphologist};
use crate::suffix_storage::NULL_SUFFIX;
use crate::MorphoError;

/// Single-threaded build phase over a [`Morphologist`].
///
/// Suffixes and bases are passed as UTF-32 symbol sequences, already
/// lower-cased by the caller; symbols outside the alphabet encode to 0.
/// `finish` freezes the dictionary for read-only service.
pub struct MorphoBuilder<A: Alphabet> {
    morph: Morphologist<A>,
}

impl<A: Alphabet> MorphoBuilder<A> {
    pub fn new(alphabet: A) -> Self {
        Self {
            morph: Morphologist::new(alphabet),
        }
    }

    /// Append an empty suffix line; returns its stable id.
    pub fn add_suffix_line(&mut self) -> u32 {
        self.morph.suffix_store.add_line()
    }

    /// Record a `(suffix, packed attribute)` pair on a line.
    ///
    /// An empty suffix is stored as the NUL sentinel.
    pub fn add_suffix(
        &mut self,
        line_id: u32,
        attr: u32,
        suffix: impl IntoIterator<Item = SymbolCode>,
    ) -> Result<(), MorphoError> {
        let encoded = self.encode(suffix);
        let encoded = if encoded.is_empty() {
            NULL_SUFFIX.to_vec()
        } else {
            encoded
        };
        self.morph.suffix_store.add_suffix(line_id, attr, encoded)
    }

    /// Add a lemma: its encoded base goes into the trie and the base
    /// storage together with the main form and the suffix line id.
    ///
    /// The line must already exist, so that every line id reachable from
    /// the trie is valid at analysis time.
    pub fn add_base(
        &mut self,
        lemma_id: u32,
        line_id: u32,
        base: impl IntoIterator<Item = SymbolCode>,
        main_form: &str,
    ) -> Result<(), MorphoError> {
        if line_id as usize >= self.morph.suffix_store.num_lines() {
            return Err(MorphoError::InvalidLine(line_id));
        }

        let encoded = self.encode(base);
        self.morph
            .bases_trie
            .add_chain(encoded.iter().copied(), pack_trie_attr(lemma_id, line_id));
        self.morph.base_store.insert(
            lemma_id,
            LemmaInfo {
                base: encoded,
                main_form: main_form.to_string(),
                line_id,
            },
        );
        Ok(())
    }

    /// Freeze the dictionary.
    pub fn finish(self) -> Morphologist<A> {
        self.morph
    }

    fn encode(&self, symbols: impl IntoIterator<Item = SymbolCode>) -> Vec<u8> {
        symbols
            .into_iter()
            .map(|sym| self.morph.alphabet.encode(sym))
            .collect()
    }
}
