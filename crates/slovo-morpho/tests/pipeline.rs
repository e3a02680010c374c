// End-to-end pipeline: AOT import -> analysis/generation -> persistence
// -> reload -> identical answers.

use slovo_core::alphabet::RussianAlphabet;
use slovo_morpho::aot::{import_dictionary, RussianTagParser};
use slovo_morpho::model::russian::{Case, Number, RussianPos};
use slovo_morpho::Morphologist;

// A miniature Russian noun dictionary in AOT shape: one feminine
// paradigm (мама, машина) and one masculine paradigm (стол).
//
// Tab ids: "аа" (nominative singular, a main-form code), plus accusative,
// genitive and nominative-plural rows.
const TAB: &str = "\
// feminine a-declension
аа 1 С жр,ед,им
вб 2 С жр,ед,вн
вг 3 С жр,ед,рд
вд 4 С жр,мн,им
// masculine hard declension; \"ша\" is the main-form code
ша 5 С мр,ед,им
шб 6 С мр,ед,вн
шв 7 С мр,ед,рд
шг 8 С мр,мн,им
";

const DICT: &str = "\
2
%а*аа%у*вб%ы*вг%ы*вд
%*ша%*шб%а*шв%ы*шг
1
- accents, skipped
1
- sessions, skipped
1
- prefixes, skipped
3
МАМ 0
МАШИН 0
СТОЛ 1
";

fn build() -> Morphologist<RussianAlphabet> {
    let parser = RussianTagParser::new();
    import_dictionary(RussianAlphabet, &parser, TAB.as_bytes(), DICT.as_bytes()).unwrap()
}

#[test]
fn analysis_finds_the_right_lemmas() {
    let morph = build();

    let lemmas = morph.analyze("маму");
    assert_eq!(lemmas.len(), 1);
    assert_eq!(lemmas[0].id, 1);
    let pos = RussianPos::unpack(lemmas[0].attr).unwrap();
    assert!(matches!(pos, RussianPos::Noun { case: Case::Accusative, .. }));

    let lemmas = morph.analyze("машина");
    assert_eq!(lemmas.len(), 1);
    assert_eq!(lemmas[0].id, 2);

    let lemmas = morph.analyze("стол");
    // The bare base matches both the nominative and the accusative rows.
    assert_eq!(lemmas.len(), 2);
    assert!(lemmas.iter().all(|l| l.id == 3));
}

#[test]
fn ambiguous_forms_report_every_reading() {
    let morph = build();

    // "мамы" is genitive singular or nominative plural.
    let lemmas = morph.analyze("мамы");
    assert_eq!(lemmas.len(), 2);
    let cases: Vec<(Number, Case)> = lemmas
        .iter()
        .map(|l| match RussianPos::unpack(l.attr).unwrap() {
            RussianPos::Noun { number, case, .. } => (number, case),
            other => panic!("unexpected POS: {other:?}"),
        })
        .collect();
    assert!(cases.contains(&(Number::Singular, Case::Genitive)));
    assert!(cases.contains(&(Number::Plural, Case::Nominative)));
}

#[test]
fn analysis_is_case_insensitive() {
    let morph = build();
    assert_eq!(morph.analyze("МАМА"), morph.analyze("мама"));
    assert!(!morph.analyze("Мама").is_empty());
}

#[test]
fn unknown_words_have_no_readings() {
    let morph = build();
    assert!(morph.analyze("собака").is_empty());
    assert!(morph.analyze("мам").is_empty()); // bare base, no empty suffix row
    assert!(morph.analyze("xyzzy").is_empty());
}

#[test]
fn main_forms_combine_base_and_main_suffix() {
    let morph = build();
    assert_eq!(morph.main_form(1), Some("мама"));
    assert_eq!(morph.main_form(2), Some("машина"));
    assert_eq!(morph.main_form(3), Some("стол"));
}

#[test]
fn generation_inverts_analysis() {
    let morph = build();
    for word in ["мама", "маму", "машина", "машины", "стола", "столы"] {
        let lemmas = morph.analyze(word);
        assert!(!lemmas.is_empty(), "no reading for {word}");
        for lemma in lemmas {
            assert_eq!(morph.generate(lemma.id, lemma.attr), word);
        }
    }
}

#[test]
fn generate_all_produces_the_paradigm() {
    let morph = build();
    let forms = morph.generate_all(1);
    for expected in ["мама", "маму", "мамы"] {
        assert!(forms.contains(expected), "missing {expected}");
    }

    let forms = morph.generate_all(3);
    for expected in ["стол", "стола", "столы"] {
        assert!(forms.contains(expected), "missing {expected}");
    }
}

#[test]
fn persisted_dictionary_answers_identically() {
    let morph = build();

    let mut image = Vec::new();
    morph.serialize(&mut image).unwrap();
    let reloaded = Morphologist::deserialize(&mut image.as_slice(), RussianAlphabet).unwrap();

    for word in ["мама", "маму", "мамы", "машина", "стол", "столы", "собака"] {
        assert_eq!(reloaded.analyze(word), morph.analyze(word), "word {word}");
    }
    for lemma in 1..=3 {
        assert_eq!(reloaded.generate_all(lemma), morph.generate_all(lemma));
        assert_eq!(reloaded.main_form(lemma), morph.main_form(lemma));
    }

    // A second snapshot of the reloaded dictionary is byte-identical.
    let mut second = Vec::new();
    reloaded.serialize(&mut second).unwrap();
    assert_eq!(image, second);
}
