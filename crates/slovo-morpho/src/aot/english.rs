// English tab-file parsing for the AOT English dictionary.

use hashbrown::HashSet;

use crate::model::english::{
    Animation, Case, Degree, EnglishPos, Gender, Number, Person, PronounForm, PronounType, Time,
};

use super::{AotError, TagParser};

/// Tab codes whose suffix forms the canonical surface form of a lemma.
const MAIN_FORM_CODES: &[&str] = &[
    "ad", "ba", "va", "ta", "pa", "da", "ea", "na", "fa", "oa", "ga", "xa", "xb", "xc", "xd",
    "xf", "xi", "xp", "yc", "yd", "xx",
];

/// Accumulated attribute mnemonics of one tab line.
#[derive(Debug, Default)]
struct Attrs {
    number: Number,
    gender: Gender,
    case: Case,
    time: Time,
    person: Person,
    animation: Animation,
    degree: Degree,
    form: PronounForm,
    pronoun_type: PronounType,
    narrative: bool,
    proper: bool,
}

impl Attrs {
    fn parse(attrs_str: &str) -> Self {
        let mut attrs = Self::default();
        for attr in attrs_str.split(',') {
            match attr {
                // Gender.
                "m" => attrs.gender = Gender::Masculine,
                "f" => attrs.gender = Gender::Feminine,

                // Number; singular accumulates, the others replace.
                "sg" => attrs.number |= Number::SINGULAR,
                "pl" => attrs.number = Number::PLURAL,
                "uncount" => attrs.number = Number::UNCOUNT,
                "mass" => attrs.number = Number::MASS,

                // Tense.
                "inf" => attrs.time = Time::Infinitive,
                "prsa" => attrs.time = Time::Present,
                "pasa" => attrs.time = Time::Past,
                "pp" => attrs.time = Time::PastParticiple,
                "ing" => attrs.time = Time::Gerund,
                "fut" => attrs.time = Time::FutureToBe,
                "if" => attrs.time = Time::IfToBe,

                // Case.
                "nom" => attrs.case = Case::Nominative,
                "obj" => attrs.case = Case::Object,

                // Degree.
                "pos" => attrs.degree = Degree::Positive,
                "comp" => attrs.degree = Degree::Comparative,
                "sup" => attrs.degree = Degree::Superlative,

                // Pronoun form.
                "pred" => attrs.form = PronounForm::Predicative,
                "attr" => attrs.form = PronounForm::Attributive,

                // Pronoun type.
                "pers" => attrs.pronoun_type = PronounType::Personal,
                "poss" => attrs.pronoun_type = PronounType::Possessive,
                "ref" => attrs.pronoun_type = PronounType::Reflexive,
                "dem" => attrs.pronoun_type = PronounType::Demonstrative,

                // Person accumulates.
                "1" => attrs.person |= Person::FIRST,
                "2" => attrs.person |= Person::SECOND,
                "3" => attrs.person |= Person::THIRD,

                // Flags.
                "narr" => attrs.narrative = true,
                "anim" => attrs.animation = Animation::Animate,
                "prop" => attrs.proper = true,

                _ => {}
            }
        }
        attrs
    }
}

/// POS mnemonic plus attributes to an [`EnglishPos`]; `None` for an
/// unknown mnemonic.
fn build_pos(mnemonic: &str, a: &Attrs) -> Option<EnglishPos> {
    Some(match mnemonic {
        "NOUN" => EnglishPos::Noun {
            number: a.number,
            gender: a.gender,
            case: a.case,
            animation: a.animation,
            pronoun_type: a.pronoun_type,
            narrative: a.narrative,
        },
        "ADJECTIVE" => EnglishPos::Adjective {
            degree: a.degree,
            proper: a.proper,
        },
        "ADVERB" => EnglishPos::Adverb { degree: a.degree },
        "VERB" | "MOD" | "VBE" => EnglishPos::Verb {
            time: a.time,
            gender: a.gender,
            person: a.person,
        },
        "PN" => EnglishPos::Pronoun {
            number: a.number,
            case: a.case,
            pronoun_type: a.pronoun_type,
            person: a.person,
        },
        "PN_ADJ" => EnglishPos::PronounAdjective {
            number: a.number,
            form: a.form,
            pronoun_type: a.pronoun_type,
        },
        "NUMERAL" => EnglishPos::Numeral,
        "ORDNUM" => EnglishPos::NumeralOrdinal,
        "PRON" => EnglishPos::PronounNoun,
        "CONJ" => EnglishPos::Conjunction,
        "INT" => EnglishPos::Interjection,
        "PREP" => EnglishPos::Preposition,
        "PART" => EnglishPos::Particle,
        "ARTICLE" => EnglishPos::Article,
        "POSS" => EnglishPos::Possessive,
        _ => return None,
    })
}

/// Tab-line parser for the English AOT dictionary.
pub struct EnglishTagParser {
    main_form_codes: HashSet<&'static str>,
}

impl EnglishTagParser {
    pub fn new() -> Self {
        Self {
            main_form_codes: MAIN_FORM_CODES.iter().copied().collect(),
        }
    }
}

impl Default for EnglishTagParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TagParser for EnglishTagParser {
    fn parse_attr_line(&self, line: &str, line_no: usize) -> Result<(String, u32), AotError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(AotError::TabFields { line: line_no });
        }
        let id = fields[0].to_string();
        let attrs = if fields.len() >= 4 {
            Attrs::parse(fields[3])
        } else {
            Attrs::default()
        };
        let packed = build_pos(fields[2], &attrs).map_or(0, |pos| pos.pack());
        Ok((id, packed))
    }

    fn is_main_form_code(&self, code: &str) -> bool {
        self.main_form_codes.contains(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aot::import_dictionary;
    use slovo_core::alphabet::EnglishAlphabet;

    fn parse(line: &str) -> (String, u32) {
        EnglishTagParser::new().parse_attr_line(line, 1).unwrap()
    }

    #[test]
    fn noun_line_packs() {
        let (id, packed) = parse("na 1 NOUN sg,nom");
        assert_eq!(id, "na");
        assert_eq!(
            EnglishPos::unpack(packed),
            Some(EnglishPos::Noun {
                number: Number::SINGULAR,
                gender: Gender::Unknown,
                case: Case::Nominative,
                animation: Animation::Unknown,
                pronoun_type: PronounType::Unknown,
                narrative: false,
            })
        );
    }

    #[test]
    fn verb_aliases_share_the_packing() {
        let (_, verb) = parse("va 1 VERB inf");
        let (_, modal) = parse("vb 1 MOD inf");
        let (_, be) = parse("vc 1 VBE inf");
        assert_eq!(verb, modal);
        assert_eq!(verb, be);
    }

    #[test]
    fn persons_accumulate() {
        let (_, packed) = parse("xx 1 PN pers,1,3");
        let Some(EnglishPos::Pronoun { person, .. }) = EnglishPos::unpack(packed) else {
            panic!("expected a pronoun");
        };
        assert_eq!(person, Person::FIRST | Person::THIRD);
    }

    #[test]
    fn unknown_mnemonic_packs_to_zero() {
        let (_, packed) = parse("xx 1 WHATEVER sg");
        assert_eq!(packed, 0);
    }

    #[test]
    fn english_import_end_to_end() {
        let tab = "\
na 1 NOUN sg,nom
nb 2 NOUN pl,nom
";
        // "na" is a main-form code; nouns take the empty suffix in the
        // singular and "s" in the plural.
        let dict = "\
1
%*na%s*nb
0
0
0
2
DOG 0
CAT 0
";
        let parser = EnglishTagParser::new();
        let morph = import_dictionary(
            EnglishAlphabet,
            &parser,
            tab.as_bytes(),
            dict.as_bytes(),
        )
        .unwrap();

        assert_eq!(morph.num_lemmas(), 2);
        assert_eq!(morph.main_form(1), Some("dog"));
        assert_eq!(morph.main_form(2), Some("cat"));

        let lemmas = morph.analyze("dogs");
        assert_eq!(lemmas.len(), 1);
        assert_eq!(lemmas[0].id, 1);
        let pos = EnglishPos::unpack(lemmas[0].attr).unwrap();
        assert!(matches!(
            pos,
            EnglishPos::Noun { number, .. } if number == Number::PLURAL
        ));

        // Generation recovers both forms of lemma 2.
        let forms = morph.generate_all(2);
        assert!(forms.contains("cat"));
        assert!(forms.contains("cats"));
    }
}
