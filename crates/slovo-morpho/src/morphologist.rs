// The morphologist: analysis, generation and persistence over the base
// trie, the suffix storage and the base storage.

use std::collections::BTreeSet;
use std::io::{Read, Write};

use slovo_automata::serializer::{read_trie, write_trie};
use slovo_automata::transitions::FlexTransitions;
use slovo_automata::{SerializeError, Trie, INVALID_STATE, START_STATE};
use slovo_core::alphabet::Alphabet;
use slovo_core::symbols;
use slovo_core::utf8::{decode_str, encode_utf8_string};

use crate::base_storage::BaseStorage;
use crate::suffix_storage::{SuffixStorage, NULL_SUFFIX};

/// The base trie: alphabet codes as symbols, packed (lemma, line) pairs as
/// attributes.
pub type BaseTrie = Trie<FlexTransitions<u8>, u64>;

/// One analysis answer: a lemma id with the packed attributes of the
/// matched form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lemma {
    pub id: u32,
    pub attr: u32,
}

/// Pack a (lemma id, line id) pair into one trie attribute.
pub(crate) fn pack_trie_attr(lemma_id: u32, line_id: u32) -> u64 {
    (line_id as u64) << 32 | lemma_id as u64
}

/// Inverse of [`pack_trie_attr`]: `(lemma_id, line_id)`.
pub(crate) fn unpack_trie_attr(attr: u64) -> (u32, u32) {
    (attr as u32, (attr >> 32) as u32)
}

/// Dictionary-driven analyser and generator for one language.
///
/// Built once through [`crate::MorphoBuilder`] or loaded with
/// [`Morphologist::deserialize`], then consulted read-only.
#[derive(Debug)]
pub struct Morphologist<A> {
    pub(crate) bases_trie: BaseTrie,
    pub(crate) base_store: BaseStorage,
    pub(crate) suffix_store: SuffixStorage,
    pub(crate) alphabet: A,
}

impl<A: Alphabet> Morphologist<A> {
    pub(crate) fn new(alphabet: A) -> Self {
        Self {
            bases_trie: BaseTrie::new(),
            base_store: BaseStorage::new(),
            suffix_store: SuffixStorage::new(),
            alphabet,
        }
    }

    /// Morphological analysis of a UTF-8 word.
    ///
    /// The word is lower-cased and alphabet-encoded, then the base trie is
    /// walked symbol by symbol; every accepting state along the walk
    /// contributes its (lemma, line) candidates, and each candidate's
    /// remaining bytes are resolved against its suffix line. Candidates
    /// appear in trie-walk discovery order; within a candidate, attribute
    /// packings appear in suffix-storage order. Symbols outside the
    /// alphabet encode to 0 and simply fail to match.
    pub fn analyze(&self, word: &str) -> Vec<Lemma> {
        let mut candidates: Vec<(u64, usize)> = Vec::new();

        let mut state = START_STATE;
        if self.bases_trie.is_accept(state) {
            for &attr in self.bases_trie.attributes(state) {
                candidates.push((attr, 0));
            }
        }

        let mut encoded: Vec<u8> = Vec::new();
        for sym in decode_str(word) {
            let code = self.alphabet.encode(symbols::to_lower(sym.code()));
            encoded.push(code);
            if state != INVALID_STATE {
                state = self.bases_trie.go(state, code);
                if self.bases_trie.is_accept(state) {
                    for &attr in self.bases_trie.attributes(state) {
                        candidates.push((attr, encoded.len()));
                    }
                }
            }
        }

        let mut lemmas = Vec::new();
        for (attr, offset) in candidates {
            let (lemma_id, line_id) = unpack_trie_attr(attr);
            let suffix: &[u8] = if offset == encoded.len() {
                NULL_SUFFIX
            } else {
                &encoded[offset..]
            };
            for &packed in self.suffix_store.lookup_attrs(line_id, suffix) {
                lemmas.push(Lemma {
                    id: lemma_id,
                    attr: packed,
                });
            }
        }
        lemmas
    }

    /// Generate the surface form for `(lemma_id, attr)`.
    ///
    /// Fails quietly: an unknown lemma or an attribute without a primary
    /// suffix yields an empty string.
    pub fn generate(&self, lemma_id: u32, attr: u32) -> String {
        let Some(info) = self.base_store.lookup(lemma_id) else {
            return String::new();
        };
        let Some(suffix) = self.suffix_store.lookup_suffix(info.line_id(), attr) else {
            return String::new();
        };

        let mut codes: Vec<u32> = info
            .base()
            .iter()
            .map(|&code| self.alphabet.decode(code))
            .collect();
        if suffix != NULL_SUFFIX {
            codes.extend(suffix.iter().map(|&code| self.alphabet.decode(code)));
        }
        encode_utf8_string(codes)
    }

    /// Generate every form of a lemma; empty set for an unknown lemma.
    pub fn generate_all(&self, lemma_id: u32) -> BTreeSet<String> {
        let mut forms = BTreeSet::new();
        let Some(info) = self.base_store.lookup(lemma_id) else {
            return forms;
        };

        let base: String = encode_utf8_string(
            info.base().iter().map(|&code| self.alphabet.decode(code)),
        );
        for suffix in self.suffix_store.all_suffixes(info.line_id()) {
            let mut form = base.clone();
            if suffix != NULL_SUFFIX {
                form.push_str(&encode_utf8_string(
                    suffix.iter().map(|&code| self.alphabet.decode(code)),
                ));
            }
            forms.insert(form);
        }
        forms
    }

    /// The canonical surface form of a lemma.
    pub fn main_form(&self, lemma_id: u32) -> Option<&str> {
        self.base_store.main_form(lemma_id)
    }

    /// Number of lemmas in the dictionary.
    pub fn num_lemmas(&self) -> usize {
        self.base_store.len()
    }

    /// Write the frozen dictionary: base trie, then suffix storage, then
    /// base storage.
    pub fn serialize<W: Write>(&self, w: &mut W) -> Result<(), SerializeError> {
        write_trie(&self.bases_trie, w)?;
        self.suffix_store.serialize(w)?;
        self.base_store.serialize(w)?;
        Ok(())
    }

    /// Load a dictionary previously written by [`Morphologist::serialize`].
    pub fn deserialize<R: Read>(r: &mut R, alphabet: A) -> Result<Self, SerializeError> {
        let bases_trie = read_trie(r)?;
        let suffix_store = SuffixStorage::deserialize(r)?;
        let base_store = BaseStorage::deserialize(r)?;
        Ok(Self {
            bases_trie,
            base_store,
            suffix_store,
            alphabet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MorphoBuilder;
    use slovo_core::alphabet::{EnglishAlphabet, RussianAlphabet};
    use slovo_core::utf8::decode_str;

    fn syms(text: &str) -> Vec<u32> {
        decode_str(text).map(|s| s.code()).collect()
    }

    fn english_fixture() -> Morphologist<EnglishAlphabet> {
        let mut builder = MorphoBuilder::new(EnglishAlphabet);
        let line = builder.add_suffix_line();
        builder.add_suffix(line, 1, syms("ab")).unwrap();
        builder.add_suffix(line, 2, syms("acc")).unwrap();
        builder.add_base(1, line, syms("hello"), "hello").unwrap();
        builder.finish()
    }

    #[test]
    fn trie_attr_packing_round_trips() {
        let attr = pack_trie_attr(0xDEAD_BEEF, 0x1234_5678);
        assert_eq!(unpack_trie_attr(attr), (0xDEAD_BEEF, 0x1234_5678));
    }

    #[test]
    fn english_analysis() {
        let morph = english_fixture();
        let lemmas = morph.analyze("helloab");
        assert_eq!(lemmas, vec![Lemma { id: 1, attr: 1 }]);

        let lemmas = morph.analyze("helloacc");
        assert_eq!(lemmas, vec![Lemma { id: 1, attr: 2 }]);
    }

    #[test]
    fn analysis_lowercases_input() {
        let morph = english_fixture();
        assert_eq!(morph.analyze("HelloAB"), vec![Lemma { id: 1, attr: 1 }]);
    }

    #[test]
    fn unknown_words_report_nothing() {
        let morph = english_fixture();
        assert!(morph.analyze("unknown").is_empty());
        assert!(morph.analyze("hello").is_empty()); // base without suffix
        assert!(morph.analyze("helloxy").is_empty());
        assert!(morph.analyze("").is_empty());
    }

    #[test]
    fn russian_ambiguity_reports_both_attrs() {
        let mut builder = MorphoBuilder::new(RussianAlphabet);
        let line = builder.add_suffix_line();
        builder.add_suffix(line, 1, syms("а")).unwrap();
        builder.add_suffix(line, 2, syms("ой")).unwrap();
        builder.add_suffix(line, 3, syms("а")).unwrap();
        builder.add_base(1, line, syms("мам"), "мама").unwrap();
        let morph = builder.finish();

        let lemmas = morph.analyze("мама");
        assert_eq!(lemmas.len(), 2);
        let mut attrs: Vec<u32> = lemmas.iter().map(|l| l.attr).collect();
        attrs.sort_unstable();
        assert_eq!(attrs, vec![1, 3]);
        assert!(lemmas.iter().all(|l| l.id == 1));
    }

    #[test]
    fn empty_suffix_matches_bare_base() {
        let mut builder = MorphoBuilder::new(EnglishAlphabet);
        let line = builder.add_suffix_line();
        builder.add_suffix(line, 5, syms("")).unwrap();
        builder.add_suffix(line, 6, syms("s")).unwrap();
        builder.add_base(1, line, syms("dog"), "dog").unwrap();
        let morph = builder.finish();

        assert_eq!(morph.analyze("dog"), vec![Lemma { id: 1, attr: 5 }]);
        assert_eq!(morph.analyze("dogs"), vec![Lemma { id: 1, attr: 6 }]);
    }

    #[test]
    fn nested_bases_all_report() {
        // "in" and "inn" are both bases of their own lemmas.
        let mut builder = MorphoBuilder::new(EnglishAlphabet);
        let line = builder.add_suffix_line();
        builder.add_suffix(line, 1, syms("")).unwrap();
        builder.add_suffix(line, 2, syms("n")).unwrap();
        builder.add_base(1, line, syms("in"), "in").unwrap();
        builder.add_base(2, line, syms("inn"), "inn").unwrap();
        let morph = builder.finish();

        let lemmas = morph.analyze("inn");
        // lemma 1 with suffix "n", lemma 2 with the empty suffix.
        assert_eq!(lemmas.len(), 2);
        assert!(lemmas.contains(&Lemma { id: 1, attr: 2 }));
        assert!(lemmas.contains(&Lemma { id: 2, attr: 1 }));
    }

    #[test]
    fn generation_recovers_forms() {
        let morph = english_fixture();
        assert_eq!(morph.generate(1, 1), "helloab");
        assert_eq!(morph.generate(1, 2), "helloacc");
    }

    #[test]
    fn generation_fails_quietly() {
        let morph = english_fixture();
        assert_eq!(morph.generate(9, 1), ""); // unknown lemma
        assert_eq!(morph.generate(1, 9), ""); // unknown attr
    }

    #[test]
    fn generation_skips_null_suffix() {
        let mut builder = MorphoBuilder::new(RussianAlphabet);
        let line = builder.add_suffix_line();
        builder.add_suffix(line, 1, syms("")).unwrap();
        builder.add_base(1, line, syms("мама"), "мама").unwrap();
        let morph = builder.finish();
        assert_eq!(morph.generate(1, 1), "мама");
    }

    #[test]
    fn generate_all_forms() {
        let morph = english_fixture();
        let forms = morph.generate_all(1);
        let expected: BTreeSet<String> =
            ["helloab".to_string(), "helloacc".to_string()].into();
        assert_eq!(forms, expected);
        assert!(morph.generate_all(9).is_empty());
    }

    #[test]
    fn main_form_lookup() {
        let morph = english_fixture();
        assert_eq!(morph.main_form(1), Some("hello"));
        assert_eq!(morph.main_form(2), None);
    }

    #[test]
    fn serialization_round_trip_answers_identically() {
        let morph = english_fixture();
        let mut image = Vec::new();
        morph.serialize(&mut image).unwrap();

        let back = Morphologist::deserialize(&mut image.as_slice(), EnglishAlphabet).unwrap();
        assert_eq!(back.analyze("helloab"), morph.analyze("helloab"));
        assert_eq!(back.generate(1, 2), morph.generate(1, 2));
        assert_eq!(back.generate_all(1), morph.generate_all(1));
        assert_eq!(back.main_form(1), morph.main_form(1));
        assert_eq!(back.num_lemmas(), morph.num_lemmas());
    }
}
