// Russian tab-file parsing: attribute mnemonics and POS mnemonics as used
// by the AOT Russian morphological dictionary.

use hashbrown::HashSet;

use crate::model::russian::{
    Animation, Case, Entity, Gender, Lang, Number, Person, RussianPos, Time, Voice,
};

use super::{AotError, TagParser};

/// Tab codes whose suffix forms the canonical surface form of a lemma.
const MAIN_FORM_CODES: &[&str] = &[
    "ша", "шж", "шт", "шм", "чж", "аа", "Юо", "го", "ва", "во", "га", "Йа", "Йм", "еа", "Яз",
    "иж", "ао", "ап", "ат", "ау", "ац", "ач", "аъ", "бо", "бН", "вН", "вО", "до", "дН", "Ра",
    "Рж", "Та", "Тж", "йа", "иа", "нр", "ка", "кн", "ко", "Эт", "Эу", "ла", "ма", "па", "са",
    "ча", "ыа", "ыш", "ыь", "эа", "Ца", "эж", "юа", "яа", "яб", "яв", "яг", "яе", "яд", "яё",
    "яж", "яз", "яй",
];

/// Accumulated attribute mnemonics of one tab line.
#[derive(Debug, Default)]
struct Attrs {
    number: Number,
    lang: Lang,
    gender: Gender,
    case: Case,
    time: Time,
    person: Person,
    entity: Entity,
    animation: Animation,
    voice: Voice,
    impersonal: bool,
    brevity: bool,
    relativity: bool,
    questionality: bool,
    unchanged: bool,
}

impl Attrs {
    fn parse(attrs_str: &str) -> Self {
        let mut attrs = Self::default();
        let has_second_form = attrs_str.split(',').any(|a| a == "2");

        for attr in attrs_str.split(',') {
            match attr {
                // Gender.
                "мр" => attrs.gender = Gender::Masculine,
                "жр" => attrs.gender = Gender::Feminine,
                "ср" => attrs.gender = Gender::Neuter,

                // Number.
                "ед" => attrs.number = Number::Singular,
                "мн" => attrs.number = Number::Plural,

                // Case; "рд"/"пр" switch to the second form when the
                // line also carries the "2" mnemonic.
                "им" => attrs.case = Case::Nominative,
                "рд" => {
                    attrs.case = if has_second_form {
                        Case::Genitive2
                    } else {
                        Case::Genitive
                    }
                }
                "дт" => attrs.case = Case::Dative,
                "вн" => attrs.case = Case::Accusative,
                "тв" => attrs.case = Case::Instrumental,
                "пр" => {
                    attrs.case = if has_second_form {
                        Case::Prepositional2
                    } else {
                        Case::Prepositional
                    }
                }
                "зв" => attrs.case = Case::Vocative,

                // Register.
                "разг" => attrs.lang = Lang::Informal,
                "арх" => attrs.lang = Lang::Archaism,
                "проф" | "жарг" => attrs.lang = Lang::Slang,

                // Tense.
                "буд" => attrs.time = Time::Future,
                "нст" => attrs.time = Time::Present,
                "прш" => attrs.time = Time::Past,

                // Person.
                "1л" => attrs.person = Person::First,
                "2л" => attrs.person = Person::Second,
                "3л" => attrs.person = Person::Third,

                // Entity.
                "отч" => attrs.entity = Entity::MiddleName,
                "имя" => attrs.entity = Entity::FirstName,
                "фам" => attrs.entity = Entity::FamilyName,
                "аббр" => attrs.entity = Entity::Abbreviation,

                // Animacy.
                "од" => attrs.animation = Animation::Animate,
                "но" => attrs.animation = Animation::Inanimate,

                // Voice.
                "дст" => attrs.voice = Voice::Active,
                "стр" => attrs.voice = Voice::Passive,

                // Flags.
                "безл" => attrs.impersonal = true,
                "кр" => attrs.brevity = true,
                "относ" => attrs.relativity = true,
                "вопр" => attrs.questionality = true,
                "0" => attrs.unchanged = true,

                _ => {}
            }
        }
        attrs
    }
}

/// POS mnemonic plus attributes to a [`RussianPos`]; `None` for an
/// unknown mnemonic.
fn build_pos(mnemonic: &str, a: &Attrs) -> Option<RussianPos> {
    Some(match mnemonic {
        "С" => RussianPos::Noun {
            number: a.number,
            lang: a.lang,
            gender: a.gender,
            case: a.case,
            entity: a.entity,
        },
        "П" => RussianPos::Adjective {
            number: a.number,
            lang: a.lang,
            gender: a.gender,
            case: a.case,
            animation: a.animation,
            brevity: a.brevity,
        },
        "КР_ПРИЛ" => RussianPos::Adjective {
            number: a.number,
            lang: a.lang,
            gender: a.gender,
            case: a.case,
            animation: a.animation,
            brevity: true,
        },
        "МС" => RussianPos::PronounNoun {
            number: a.number,
            lang: a.lang,
            gender: a.gender,
            case: a.case,
            person: a.person,
        },
        "Г" => RussianPos::Verb {
            number: a.number,
            lang: a.lang,
            time: a.time,
            voice: a.voice,
            person: a.person,
            gender: a.gender,
            impersonal: a.impersonal,
        },
        // The infinitive shares the verb packing; gender is never carried.
        "ИНФИНИТИВ" => RussianPos::Verb {
            number: a.number,
            lang: a.lang,
            time: a.time,
            voice: a.voice,
            person: a.person,
            gender: Gender::Unknown,
            impersonal: a.impersonal,
        },
        "ПРИЧАСТИЕ" | "КР_ПРИЧАСТИЕ" => RussianPos::Participle {
            number: a.number,
            lang: a.lang,
            time: a.time,
            voice: a.voice,
            case: a.case,
            gender: a.gender,
            animation: a.animation,
        },
        "ДЕЕПРИЧАСТИЕ" => RussianPos::AdverbParticiple {
            lang: a.lang,
            time: a.time,
            voice: a.voice,
        },
        "МС-ПРЕДК" => RussianPos::PronounPredicative {
            number: a.number,
            lang: a.lang,
            case: a.case,
        },
        "МС-П" => RussianPos::PronounAdjective {
            number: a.number,
            lang: a.lang,
            gender: a.gender,
            case: a.case,
            animation: a.animation,
        },
        "ЧИСЛ" => RussianPos::NumeralQuantitative {
            lang: a.lang,
            gender: a.gender,
            case: a.case,
        },
        "ЧИСЛ-П" => RussianPos::NumeralOrdinal {
            number: a.number,
            lang: a.lang,
            gender: a.gender,
            case: a.case,
            animation: a.animation,
        },
        "Н" => RussianPos::Adverb {
            lang: a.lang,
            relativity: a.relativity,
            questionality: a.questionality,
            brevity: a.brevity,
        },
        "ПРЕДК" => RussianPos::Predicate {
            lang: a.lang,
            time: a.time,
            unchanged: a.unchanged,
        },
        "ПРЕДЛ" => RussianPos::Preposition { lang: a.lang },
        "СОЮЗ" => RussianPos::Conjunction { lang: a.lang },
        "МЕЖД" => RussianPos::Interjection { lang: a.lang },
        "ЧАСТ" => RussianPos::Particle { lang: a.lang },
        "ВВОДН" => RussianPos::IntroductoryWord { lang: a.lang },
        _ => return None,
    })
}

/// Tab-line parser for the Russian AOT dictionary.
pub struct RussianTagParser {
    main_form_codes: HashSet<&'static str>,
}

impl RussianTagParser {
    pub fn new() -> Self {
        Self {
            main_form_codes: MAIN_FORM_CODES.iter().copied().collect(),
        }
    }
}

impl Default for RussianTagParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TagParser for RussianTagParser {
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
