// English part-of-speech model.
//
// Number and Person are OR-able flag sets in the AOT data (a form can be
// both singular and mass, or valid for several persons), so they pack as
// bit sets rather than single-valued enums.

use bitflags::bitflags;

use super::pos_tag;

bitflags! {
    /// Grammatical number; a set, not a single value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Number: u32 {
        const SINGULAR = 0x01;
        const PLURAL = 0x02;
        const UNCOUNT = 0x04;
        const MASS = 0x08;
    }
}

bitflags! {
    /// Grammatical person; a set, not a single value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Person: u32 {
        const FIRST = 0x01;
        const SECOND = 0x02;
        const THIRD = 0x04;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Gender {
    #[default]
    Unknown = 0,
    Masculine = 1,
    Feminine = 2,
    Neuter = 3,
}

impl Gender {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Masculine,
            2 => Self::Feminine,
            3 => Self::Neuter,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Case {
    #[default]
    Unknown = 0,
    Nominative = 1,
    Object = 2,
}

impl Case {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Nominative,
            2 => Self::Object,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Time {
    #[default]
    Unknown = 0,
    Infinitive = 1,
    Present = 2,
    Past = 3,
    FutureToBe = 4,
    PastParticiple = 5,
    Gerund = 6,
    IfToBe = 7,
}

impl Time {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Infinitive,
            2 => Self::Present,
            3 => Self::Past,
            4 => Self::FutureToBe,
            5 => Self::PastParticiple,
            6 => Self::Gerund,
            7 => Self::IfToBe,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum PronounType {
    #[default]
    Unknown = 0,
    Personal = 1,
    Possessive = 2,
    Reflexive = 3,
    Demonstrative = 4,
}

impl PronounType {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Personal,
            2 => Self::Possessive,
            3 => Self::Reflexive,
            4 => Self::Demonstrative,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum PronounForm {
    #[default]
    Unknown = 0,
    Predicative = 1,
    Attributive = 2,
}

impl PronounForm {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Predicative,
            2 => Self::Attributive,
            _ => Self::Unknown,
        }
    }
}

/// Adjective and adverb degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Degree {
    #[default]
    Unknown = 0,
    Positive = 1,
    Comparative = 2,
    Superlative = 3,
}

impl Degree {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Positive,
            2 => Self::Comparative,
            3 => Self::Superlative,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Animation {
    #[default]
    Unknown = 0,
    Animate = 1,
    Inanimate = 2,
}

impl Animation {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Animate,
            2 => Self::Inanimate,
            _ => Self::Unknown,
        }
    }
}

/// English part of speech; tag range 1..=15 in the low 5 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnglishPos {
    Adjective {
        degree: Degree,
        proper: bool,
    },
    Adverb {
        degree: Degree,
    },
    Verb {
        time: Time,
        gender: Gender,
        person: Person,
    },
    Numeral,
    NumeralOrdinal,
    Conjunction,
    Interjection,
    Preposition,
    Particle,
    Article,
    Noun {
        number: Number,
        gender: Gender,
        case: Case,
        animation: Animation,
        pronoun_type: PronounType,
        narrative: bool,
    },
    Pronoun {
        number: Number,
        case: Case,
        pronoun_type: PronounType,
        person: Person,
    },
    PronounNoun,
    PronounAdjective {
        number: Number,
        form: PronounForm,
        pronoun_type: PronounType,
    },
    Possessive,
}

impl EnglishPos {
    /// The variant tag, 1..=15.
    pub fn tag(&self) -> u32 {
        match self {
            Self::Adjective { .. } => 1,
            Self::Adverb { .. } => 2,
            Self::Verb { .. } => 3,
            Self::Numeral => 4,
            Self::NumeralOrdinal => 5,
            Self::Conjunction => 6,
            Self::Interjection => 7,
            Self::Preposition => 8,
            Self::Particle => 9,
            Self::Article => 10,
            Self::Noun { .. } => 11,
            Self::Pronoun { .. } => 12,
            Self::PronounNoun => 13,
            Self::PronounAdjective { .. } => 14,
            Self::Possessive => 15,
        }
    }

    /// Pack into one 32-bit word. Field offsets from bit 5:
    ///
    /// | variant | fields (width) |
    /// |---|---|
    /// | Adjective | Degree(2) Proper(1) |
    /// | Adverb | Degree(2) |
    /// | Verb | Time(3) Gender(2) Person(3) |
    /// | Noun | Number(4) Gender(2) Case(2) Animation(2) PronounType(3) Narrative(1) |
    /// | Pronoun | Number(4) Case(2) PronounType(3) Person(3) |
    /// | PronounAdjective | Number(4) PronounForm(2) PronounType(3) |
    /// | remaining | tag only |
    pub fn pack(&self) -> u32 {
        let mut word = self.tag();
        match *self {
            Self::Adjective { degree, proper } => {
                word |= (degree as u32) << 5;
                word |= (proper as u32) << 7;
            }
            Self::Adverb { degree } => {
                word |= (degree as u32) << 5;
            }
            Self::Verb {
                time,
                gender,
                person,
            } => {
                word |= (time as u32) << 5;
                word |= (gender as u32) << 8;
                word |= person.bits() << 10;
            }
            Self::Noun {
                number,
                gender,
                case,
                animation,
                pronoun_type,
                narrative,
            } => {
                word |= number.bits() << 5;
                word |= (gender as u32) << 9;
                word |= (case as u32) << 11;
                word |= (animation as u32) << 13;
                word |= (pronoun_type as u32) << 15;
                word |= (narrative as u32) << 18;
            }
            Self::Pronoun {
                number,
                case,
                pronoun_type,
                person,
            } => {
                word |= number.bits() << 5;
                word |= (case as u32) << 9;
                word |= (pronoun_type as u32) << 11;
                word |= person.bits() << 14;
            }
            Self::PronounAdjective {
                number,
                form,
                pronoun_type,
            } => {
                word |= number.bits() << 5;
                word |= (form as u32) << 9;
                word |= (pronoun_type as u32) << 11;
            }
            Self::Numeral
            | Self::NumeralOrdinal
            | Self::Conjunction
            | Self::Interjection
            | Self::Preposition
            | Self::Particle
            | Self::Article
            | Self::PronounNoun
            | Self::Possessive => {}
        }
        word
    }

    /// Unpack a 32-bit word; `None` when the tag bits name no variant.
    pub fn unpack(word: u32) -> Option<Self> {
        Some(match pos_tag(word) {
            1 => Self::Adjective {
                degree: Degree::from_bits((word >> 5) & 0x3),
                proper: (word >> 7) & 0x1 != 0,
            },
            2 => Self::Adverb {
                degree: Degree::from_bits((word >> 5) & 0x3),
            },
            3 => Self::Verb {
                time: Time::from_bits((word >> 5) & 0x7),
                gender: Gender::from_bits((word >> 8) & 0x3),
                person: Person::from_bits_truncate((word >> 10) & 0x7),
            },
            4 => Self::Numeral,
            5 => Self::NumeralOrdinal,
            6 => Self::Conjunction,
            7 => Self::Interjection,
            8 => Self::Preposition,
            9 => Self::Particle,
            10 => Self::Article,
            11 => Self::Noun {
                number: Number::from_bits_truncate((word >> 5) & 0xF),
                gender: Gender::from_bits((word >> 9) & 0x3),
                case: Case::from_bits((word >> 11) & 0x3),
                animation: Animation::from_bits((word >> 13) & 0x3),
                pronoun_type: PronounType::from_bits((word >> 15) & 0x7),
                narrative: (word >> 18) & 0x1 != 0,
            },
            12 => Self::Pronoun {
                number: Number::from_bits_truncate((word >> 5) & 0xF),
                case: Case::from_bits((word >> 9) & 0x3),
                pronoun_type: PronounType::from_bits((word >> 11) & 0x7),
                person: Person::from_bits_truncate((word >> 14) & 0x7),
            },
            13 => Self::PronounNoun,
            14 => Self::PronounAdjective {
                number: Number::from_bits_truncate((word >> 5) & 0xF),
                form: PronounForm::from_bits((word >> 9) & 0x3),
                pronoun_type: PronounType::from_bits((word >> 11) & 0x7),
            },
            15 => Self::Possessive,
            _ => return None,
        })
    }

    /// Human-readable rendering, used by the analyzer CLI.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        match *self {
            Self::Adjective { degree, proper } => {
                out.push_str("adjective");
                push_degree(&mut out, degree);
                if proper {
                    out.push_str(", proper");
                }
            }
            Self::Adverb { degree } => {
                out.push_str("adverb");
                push_degree(&mut out, degree);
            }
            Self::Verb {
                time,
                gender,
                person,
            } => {
                out.push_str("verb");
                out.push_str(", ");
                out.push_str(time_text(time));
                if gender != Gender::Unknown {
                    out.push_str(", ");
                    out.push_str(gender_text(gender));
                }
                push_person(&mut out, person);
            }
            Self::Numeral => out.push_str("numeral"),
            Self::NumeralOrdinal => out.push_str("ordinal numeral"),
            Self::Conjunction => out.push_str("conjunction"),
            Self::Interjection => out.push_str("interjection"),
            Self::Preposition => out.push_str("preposition"),
            Self::Particle => out.push_str("particle"),
            Self::Article => out.push_str("article"),
            Self::Noun {
                number,
                gender,
                case,
                animation,
                pronoun_type,
                narrative,
            } => {
                out.push_str("noun");
                push_number(&mut out, number);
                if gender != Gender::Unknown {
                    out.push_str(", ");
                    out.push_str(gender_text(gender));
                }
                if case != Case::Unknown {
                    out.push_str(", ");
                    out.push_str(case_text(case));
                }
                if animation == Animation::Animate {
                    out.push_str(", animate");
                }
                if pronoun_type != PronounType::Unknown {
                    out.push_str(", ");
                    out.push_str(pronoun_type_text(pronoun_type));
                }
                if narrative {
                    out.push_str(", narrative");
                }
            }
            Self::Pronoun {
                number,
                case,
                pronoun_type,
                person,
            } => {
                out.push_str("pronoun");
                push_number(&mut out, number);
                if case != Case::Unknown {
                    out.push_str(", ");
                    out.push_str(case_text(case));
                }
                if pronoun_type != PronounType::Unknown {
                    out.push_str(", ");
                    out.push_str(pronoun_type_text(pronoun_type));
                }
                push_person(&mut out, person);
            }
            Self::PronounNoun => out.push_str("pronoun noun"),
            Self::PronounAdjective {
                number,
                form,
                pronoun_type,
            } => {
                out.push_str("pronominal adjective");
                push_number(&mut out, number);
                match form {
                    PronounForm::Unknown => {}
                    PronounForm::Predicative => out.push_str(", predicative"),
                    PronounForm::Attributive => out.push_str(", attributive"),
                }
                if pronoun_type != PronounType::Unknown {
                    out.push_str(", ");
                    out.push_str(pronoun_type_text(pronoun_type));
                }
            }
            Self::Possessive => out.push_str("possessive"),
        }
        out
    }
}

fn push_degree(out: &mut String, degree: Degree) {
    match degree {
        Degree::Unknown => {}
        Degree::Positive => out.push_str(", positive degree"),
        Degree::Comparative => out.push_str(", comparative"),
        Degree::Superlative => out.push_str(", superlative"),
    }
}

fn push_number(out: &mut String, number: Number) {
    if number.contains(Number::SINGULAR) {
        out.push_str(", singular");
    }
    if number.contains(Number::PLURAL) {
        out.push_str(", plural");
    }
    if number.contains(Number::UNCOUNT) {
        out.push_str(", uncountable");
    }
    if number.contains(Number::MASS) {
        out.push_str(", mass");
    }
}

fn push_person(out: &mut String, person: Person) {
    if person.contains(Person::FIRST) {
        out.push_str(", first person");
    }
    if person.contains(Person::SECOND) {
        out.push_str(", second person");
    }
    if person.contains(Person::THIRD) {
        out.push_str(", third person");
    }
}

fn gender_text(gender: Gender) -> &'static str {
    match gender {
        Gender::Unknown => "gender unknown",
        Gender::Masculine => "masculine",
        Gender::Feminine => "feminine",
        Gender::Neuter => "neuter",
    }
}

fn case_text(case: Case) -> &'static str {
    match case {
        Case::Unknown => "case unknown",
        Case::Nominative => "nominative",
        Case::Object => "object case",
    }
}

fn time_text(time: Time) -> &'static str {
    match time {
        Time::Unknown => "tense unknown",
        Time::Infinitive => "infinitive",
        Time::Present => "present tense",
        Time::Past => "past tense",
        Time::FutureToBe => "future of be",
        Time::PastParticiple => "past participle",
        Time::Gerund => "gerund",
        Time::IfToBe => "subjunctive of be",
    }
}

fn pronoun_type_text(pronoun_type: PronounType) -> &'static str {
    match pronoun_type {
        PronounType::Unknown => "type unknown",
        PronounType::Personal => "personal",
        PronounType::Possessive => "possessive",
        PronounType::Reflexive => "reflexive",
        PronounType::Demonstrative => "demonstrative",
    }
}
