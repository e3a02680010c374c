//! Importer for AOT dictionary sources.
//!
//! Two text inputs build one [`Morphologist`]:
//!
//! - the *tab file* declares attribute packings, one per line:
//!   `id internal-tag pos-mnemonic [attr,attr,...]`;
//! - the *dictionary file* holds four counted sections: suffix lines,
//!   three sections the importer skips, and the dictionary itself, where
//!   each line is `base line-id ...` and the lemma id is the 1-based
//!   index of the line.
//!
//! Suffixes and bases are lower-cased before encoding. A suffix-line
//! field whose tab id packs to zero (an unknown POS mnemonic) is dropped.

pub mod english;
pub mod russian;

pub use english::EnglishTagParser;
pub use russian::RussianTagParser;

use std::io::BufRead;

use hashbrown::HashMap;
use tracing::{debug, info};

use slovo_core::alphabet::Alphabet;
use slovo_core::symbols;
use slovo_core::utf8::{decode_str, encode_utf8_string};

use crate::builder::MorphoBuilder;
use crate::morphologist::Morphologist;
use crate::MorphoError;

/// Structural violation in an AOT source file. Line numbers are 1-based
/// within the offending file.
#[derive(Debug, thiserror::Error)]
pub enum AotError {
    #[error("aot source i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("tab file line {line}: expected at least 3 fields")]
    TabFields { line: usize },

    #[error("dictionary line {line}: expected a section line count")]
    MissingCount { line: usize },

    #[error("dictionary line {line}: section must not be empty")]
    EmptySection { line: usize },

    #[error("unexpected end of file inside a section (after line {line})")]
    UnexpectedEof { line: usize },

    #[error("dictionary line {line}: malformed suffix field {field:?}")]
    MalformedSuffixField { line: usize, field: String },

    #[error("dictionary line {line}: unknown tab id {id:?} in suffix field")]
    UnknownTab { line: usize, id: String },

    #[error("dictionary line {line}: malformed dictionary entry")]
    MalformedEntry { line: usize },

    #[error(transparent)]
    Morpho(#[from] MorphoError),
}

/// Language-specific side of the import: tab-line parsing and the set of
/// main-form tab codes.
pub trait TagParser {
    /// Parse one tab line into `(tab id, packed attributes)`. Unknown POS
    /// mnemonics produce a zero packing.
    fn parse_attr_line(&self, line: &str, line_no: usize) -> Result<(String, u32), AotError>;

    /// Does this tab code mark the suffix that forms a lemma's canonical
    /// surface form?
    fn is_main_form_code(&self, code: &str) -> bool;
}

/// Line source tracking 1-based line numbers; strips `\r` and `\n`.
struct Lines<R> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    fn next_line(&mut self) -> Result<Option<String>, AotError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}

/// Parse a tab file into `tab id -> packed attributes`.
pub fn parse_tab_file<P: TagParser>(
    reader: impl BufRead,
    parser: &P,
) -> Result<HashMap<String, u32>, AotError> {
    let mut tabs = HashMap::new();
    let mut lines = Lines::new(reader);
    while let Some(line) = lines.next_line()? {
        let line = line.trim_start_matches(' ');
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let (id, attrs) = parser.parse_attr_line(line, lines.line_no)?;
        tabs.insert(id, attrs);
    }
    debug!(tabs = tabs.len(), "tab file parsed");
    Ok(tabs)
}

/// Import a tab file plus a dictionary file into a frozen morphologist.
pub fn import_dictionary<A, P>(
    alphabet: A,
    parser: &P,
    tab: impl BufRead,
    dict: impl BufRead,
) -> Result<Morphologist<A>, AotError>
where
    A: Alphabet,
    P: TagParser,
{
    let tabs = parse_tab_file(tab, parser)?;

    let mut builder = MorphoBuilder::new(alphabet);
    let mut lines = Lines::new(dict);

    let main_suffixes = read_suffix_section(&mut builder, parser, &tabs, &mut lines)?;
    for _ in 0..3 {
        drop_section(&mut lines)?;
    }
    read_dictionary_section(&mut builder, &main_suffixes, &mut lines)?;

    Ok(builder.finish())
}

fn read_count<R: BufRead>(lines: &mut Lines<R>) -> Result<usize, AotError> {
    let Some(line) = lines.next_line()? else {
        return Err(AotError::MissingCount {
            line: lines.line_no + 1,
        });
    };
    line.trim()
        .parse()
        .map_err(|_| AotError::MissingCount { line: lines.line_no })
}

/// Read the suffix-line section. Returns the main-form suffix (UTF-8)
/// recorded per line id.
fn read_suffix_section<A, P, R>(
    builder: &mut MorphoBuilder<A>,
    parser: &P,
    tabs: &HashMap<String, u32>,
    lines: &mut Lines<R>,
) -> Result<HashMap<u32, String>, AotError>
where
    A: Alphabet,
    P: TagParser,
    R: BufRead,
{
    let count = read_count(lines)?;
    if count == 0 {
        return Err(AotError::EmptySection { line: lines.line_no });
    }
    info!(lines = count, "reading suffix section");

    let mut main_suffixes = HashMap::new();
    for _ in 0..count {
        let Some(line) = lines.next_line()? else {
            return Err(AotError::UnexpectedEof { line: lines.line_no });
        };
        let line_id = builder.add_suffix_line();

        for field in line.split('%').skip(1) {
            let mut parts = field.split('*');
            let suffix_text = parts.next().unwrap_or("");
            let Some(tab_id) = parts.next() else {
                return Err(AotError::MalformedSuffixField {
                    line: lines.line_no,
                    field: field.to_string(),
                });
            };
            let Some(&attrs) = tabs.get(tab_id) else {
                return Err(AotError::UnknownTab {
                    line: lines.line_no,
                    id: tab_id.to_string(),
                });
            };
            if attrs == 0 {
                continue;
            }

            let lowered: Vec<u32> = decode_str(suffix_text)
                .map(|s| symbols::to_lower(s.code()))
                .collect();
            builder.add_suffix(line_id, attrs, lowered.iter().copied())?;

            if parser.is_main_form_code(tab_id) {
                main_suffixes.insert(line_id, encode_utf8_string(lowered.iter().copied()));
            }
        }
    }
    info!("suffix section done");
    Ok(main_suffixes)
}

/// Skip one counted section.
fn drop_section<R: BufRead>(lines: &mut Lines<R>) -> Result<(), AotError> {
    let count = read_count(lines)?;
    debug!(lines = count, "skipping section");
    for _ in 0..count {
        if lines.next_line()?.is_none() {
            return Err(AotError::UnexpectedEof { line: lines.line_no });
        }
    }
    Ok(())
}

fn read_dictionary_section<A, R>(
    builder: &mut MorphoBuilder<A>,
    main_suffixes: &HashMap<u32, String>,
    lines: &mut Lines<R>,
) -> Result<(), AotError>
where
    A: Alphabet,
    R: BufRead,
{
    let count = read_count(lines)?;
    if count == 0 {
        return Err(AotError::EmptySection { line: lines.line_no });
    }
    info!(lines = count, "reading dictionary section");

    for i in 0..count {
        let Some(line) = lines.next_line()? else {
            return Err(AotError::UnexpectedEof { line: lines.line_no });
        };
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let base_text = fields.next().ok_or(AotError::MalformedEntry {
            line: lines.line_no,
        })?;
        let line_id: u32 = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or(AotError::MalformedEntry {
                line: lines.line_no,
            })?;
        let lemma_id = (i + 1) as u32;

        let lowered: Vec<u32> = decode_str(base_text)
            .map(|s| symbols::to_lower(s.code()))
            .collect();
        let mut main_form = encode_utf8_string(lowered.iter().copied());
        if let Some(suffix) = main_suffixes.get(&line_id) {
            main_form.push_str(suffix);
        }

        builder.add_base(lemma_id, line_id, lowered.iter().copied(), &main_form)?;
    }
    info!("dictionary section done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slovo_core::alphabet::RussianAlphabet;

    // "аа" is one of the Russian main-form tab codes.
    const TAB: &str = "\
// noun, nominative and accusative singular
аа 1 С им,ед
аб 2 С вн,ед
";

    const DICT: &str = "\
1
%а*аа%у*аб
1
skip me
0
1
skip me too
2
МАМ 0
ПАП 0
";

    #[test]
    fn import_builds_a_working_dictionary() {
        let parser = RussianTagParser::new();
        let morph = import_dictionary(
            RussianAlphabet,
            &parser,
            TAB.as_bytes(),
            DICT.as_bytes(),
        )
        .unwrap();

        assert_eq!(morph.num_lemmas(), 2);

        let lemmas = morph.analyze("мама");
        assert_eq!(lemmas.len(), 1);
        assert_eq!(lemmas[0].id, 1);

        let lemmas = morph.analyze("папу");
        assert_eq!(lemmas.len(), 1);
        assert_eq!(lemmas[0].id, 2);

        // "аa" is a main-form code, so the main form is base + "а".
        assert_eq!(morph.main_form(1), Some("мама"));
        assert_eq!(morph.main_form(2), Some("папа"));
    }

    #[test]
    fn generation_uses_primary_suffixes() {
        let parser = RussianTagParser::new();
        let morph = import_dictionary(
            RussianAlphabet,
            &parser,
            TAB.as_bytes(),
            DICT.as_bytes(),
        )
        .unwrap();

        let lemmas = morph.analyze("маму");
        assert_eq!(lemmas.len(), 1);
        assert_eq!(morph.generate(1, lemmas[0].attr), "маму");
    }

    #[test]
    fn unknown_tab_id_is_reported_with_line() {
        let parser = RussianTagParser::new();
        let dict = "1\n%а*зз\n0\n0\n0\n1\nМАМ 0\n";
        let err = import_dictionary(
            RussianAlphabet,
            &parser,
            TAB.as_bytes(),
            dict.as_bytes(),
        )
        .unwrap_err();
        match err {
            AotError::UnknownTab { line, id } => {
                assert_eq!(line, 2);
                assert_eq!(id, "зз");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_suffix_field_is_reported() {
        let parser = RussianTagParser::new();
        let dict = "1\n%bare-field\n0\n0\n0\n1\nМАМ 0\n";
        let err = import_dictionary(
            RussianAlphabet,
            &parser,
            TAB.as_bytes(),
            dict.as_bytes(),
        )
        .unwrap_err();
        assert!(matches!(err, AotError::MalformedSuffixField { line: 2, .. }));
    }

    #[test]
    fn missing_count_is_reported() {
        let parser = RussianTagParser::new();
        let dict = "not-a-number\n";
        let err = import_dictionary(
            RussianAlphabet,
            &parser,
            TAB.as_bytes(),
            dict.as_bytes(),
        )
        .unwrap_err();
        assert!(matches!(err, AotError::MissingCount { line: 1 }));
    }

    #[test]
    fn truncated_section_is_reported() {
        let parser = RussianTagParser::new();
        let dict = "2\n%а*аа\n";
        let err = import_dictionary(
            RussianAlphabet,
            &parser,
            TAB.as_bytes(),
            dict.as_bytes(),
        )
        .unwrap_err();
        assert!(matches!(err, AotError::UnexpectedEof { .. }));
    }
}
