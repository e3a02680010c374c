// Russian part-of-speech model: field enums, the tagged sum, 32-bit
// packing and human-readable descriptions.

use super::pos_tag;

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Number {
    #[default]
    Unknown = 0,
    Singular = 1,
    Plural = 2,
}

impl Number {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Singular,
            2 => Self::Plural,
            _ => Self::Unknown,
        }
    }
}

/// Language register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Lang {
    #[default]
    Normal = 0,
    Slang = 1,
    Archaism = 2,
    Informal = 3,
}

impl Lang {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Slang,
            2 => Self::Archaism,
            3 => Self::Informal,
            _ => Self::Normal,
        }
    }
}

/// Grammatical gender; one-hot values as in the source dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Gender {
    #[default]
    Unknown = 0,
    Masculine = 1,
    Feminine = 2,
    Neuter = 4,
}

impl Gender {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Masculine,
            2 => Self::Feminine,
            4 => Self::Neuter,
            _ => Self::Unknown,
        }
    }
}

/// Grammatical case, including the second genitive and prepositional
/// forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Case {
    #[default]
    Unknown = 0,
    Nominative = 1,
    Genitive = 2,
    Genitive2 = 3,
    Dative = 4,
    Accusative = 5,
    Instrumental = 6,
    Prepositional = 7,
    Prepositional2 = 8,
    Vocative = 9,
}

impl Case {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Nominative,
            2 => Self::Genitive,
            3 => Self::Genitive2,
            4 => Self::Dative,
            5 => Self::Accusative,
            6 => Self::Instrumental,
            7 => Self::Prepositional,
            8 => Self::Prepositional2,
            9 => Self::Vocative,
            _ => Self::Unknown,
        }
    }
}

/// Verb tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Time {
    #[default]
    Unknown = 0,
    Present = 1,
    Future = 2,
    Past = 4,
}

impl Time {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Present,
            2 => Self::Future,
            4 => Self::Past,
            _ => Self::Unknown,
        }
    }
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Person {
    #[default]
    Unknown = 0,
    First = 1,
    Second = 2,
    Third = 4,
}

impl Person {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::First,
            2 => Self::Second,
            4 => Self::Third,
            _ => Self::Unknown,
        }
    }
}

/// Named-entity kind carried by nouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Entity {
    #[default]
    Unknown = 0,
    Abbreviation = 1,
    FirstName = 2,
    MiddleName = 3,
    FamilyName = 4,
}

impl Entity {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Abbreviation,
            2 => Self::FirstName,
            3 => Self::MiddleName,
            4 => Self::FamilyName,
            _ => Self::Unknown,
        }
    }
}

/// Animacy.
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

/// Verb voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Voice {
    #[default]
    Unknown = 0,
    Active = 1,
    Passive = 2,
}

impl Voice {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => Self::Active,
            2 => Self::Passive,
            _ => Self::Unknown,
        }
    }
}

/// Russian part of speech. The variant tag occupies the low 5 bits of the
/// packed word; field offsets are listed per variant in [`RussianPos::pack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RussianPos {
    Noun {
        number: Number,
        lang: Lang,
        gender: Gender,
        case: Case,
        entity: Entity,
    },
    Adjective {
        number: Number,
        lang: Lang,
        gender: Gender,
        case: Case,
        animation: Animation,
        brevity: bool,
    },
    PronounNoun {
        number: Number,
        lang: Lang,
        gender: Gender,
        case: Case,
        person: Person,
    },
    Verb {
        number: Number,
        lang: Lang,
        time: Time,
        voice: Voice,
        person: Person,
        gender: Gender,
        impersonal: bool,
    },
    Participle {
        number: Number,
        lang: Lang,
        time: Time,
        voice: Voice,
        case: Case,
        gender: Gender,
        animation: Animation,
    },
    AdverbParticiple {
        lang: Lang,
        time: Time,
        voice: Voice,
    },
    PronounPredicative {
        number: Number,
        lang: Lang,
        case: Case,
    },
    PronounAdjective {
        number: Number,
        lang: Lang,
        gender: Gender,
        case: Case,
        animation: Animation,
    },
    NumeralQuantitative {
        lang: Lang,
        gender: Gender,
        case: Case,
    },
    NumeralOrdinal {
        number: Number,
        lang: Lang,
        gender: Gender,
        case: Case,
        animation: Animation,
    },
    Adverb {
        lang: Lang,
        relativity: bool,
        questionality: bool,
        brevity: bool,
    },
    Predicate {
        lang: Lang,
        time: Time,
        unchanged: bool,
    },
    Preposition { lang: Lang },
    Conjunction { lang: Lang },
    Interjection { lang: Lang },
    Particle { lang: Lang },
    IntroductoryWord { lang: Lang },
}

impl RussianPos {
    /// The variant tag, 1..=17.
    pub fn tag(&self) -> u32 {
        match self {
            Self::Noun { .. } => 1,
            Self::Adjective { .. } => 2,
            Self::PronounNoun { .. } => 3,
            Self::Verb { .. } => 4,
            Self::Participle { .. } => 5,
            Self::AdverbParticiple { .. } => 6,
            Self::PronounPredicative { .. } => 7,
            Self::PronounAdjective { .. } => 8,
            Self::NumeralQuantitative { .. } => 9,
            Self::NumeralOrdinal { .. } => 10,
            Self::Adverb { .. } => 11,
            Self::Predicate { .. } => 12,
            Self::Preposition { .. } => 13,
            Self::Conjunction { .. } => 14,
            Self::Interjection { .. } => 15,
            Self::Particle { .. } => 16,
            Self::IntroductoryWord { .. } => 17,
        }
    }

    /// Pack into one 32-bit word. Field offsets from bit 5, in variant
    /// declaration order:
    ///
    /// | variant | fields (width) |
    /// |---|---|
    /// | Noun | Number(2) Lang(2) Gender(3) Case(4) Entity(3) |
    /// | Adjective | Number(2) Lang(2) Gender(3) Case(4) Animation(2) Brevity(1) |
    /// | PronounNoun | Number(2) Lang(2) Gender(3) Case(4) Person(3) |
    /// | Verb | Number(2) Lang(2) Time(3) Voice(2) Person(3) Gender(3) Impersonal(1) |
    /// | Participle | Number(2) Lang(2) Time(3) Voice(2) Case(4) Gender(3) Animation(2) |
    /// | AdverbParticiple | Lang(2) Time(3) Voice(2) |
    /// | PronounPredicative | Number(2) Lang(2) Case(4) |
    /// | PronounAdjective, NumeralOrdinal | Number(2) Lang(2) Gender(3) Case(4) Animation(2) |
    /// | NumeralQuantitative | Lang(2) Gender(3) Case(4) |
    /// | Adverb | Lang(2) Relativity(1) Questionality(1) Brevity(1) |
    /// | Predicate | Lang(2) Time(3) Unchanged(1) |
    /// | remaining | Lang(2) |
    pub fn pack(&self) -> u32 {
        let mut word = self.tag();
        match *self {
            Self::Noun {
                number,
                lang,
                gender,
                case,
                entity,
            } => {
                word |= (number as u32) << 5;
                word |= (lang as u32) << 7;
                word |= (gender as u32) << 9;
                word |= (case as u32) << 12;
                word |= (entity as u32) << 16;
            }
            Self::Adjective {
                number,
                lang,
                gender,
                case,
                animation,
                brevity,
            } => {
                word |= (number as u32) << 5;
                word |= (lang as u32) << 7;
                word |= (gender as u32) << 9;
                word |= (case as u32) << 12;
                word |= (animation as u32) << 16;
                word |= (brevity as u32) << 18;
            }
            Self::PronounNoun {
                number,
                lang,
                gender,
                case,
                person,
            } => {
                word |= (number as u32) << 5;
                word |= (lang as u32) << 7;
                word |= (gender as u32) << 9;
                word |= (case as u32) << 12;
                word |= (person as u32) << 16;
            }
            Self::Verb {
                number,
                lang,
                time,
                voice,
                person,
                gender,
                impersonal,
            } => {
                word |= (number as u32) << 5;
                word |= (lang as u32) << 7;
                word |= (time as u32) << 9;
                word |= (voice as u32) << 12;
                word |= (person as u32) << 14;
                word |= (gender as u32) << 17;
                word |= (impersonal as u32) << 20;
            }
            Self::Participle {
                number,
                lang,
                time,
                voice,
                case,
                gender,
                animation,
            } => {
                word |= (number as u32) << 5;
                word |= (lang as u32) << 7;
                word |= (time as u32) << 9;
                word |= (voice as u32) << 12;
                word |= (case as u32) << 14;
                word |= (gender as u32) << 18;
                word |= (animation as u32) << 21;
            }
            Self::AdverbParticiple { lang, time, voice } => {
                word |= (lang as u32) << 5;
                word |= (time as u32) << 7;
                word |= (voice as u32) << 10;
            }
            Self::PronounPredicative { number, lang, case } => {
                word |= (number as u32) << 5;
                word |= (lang as u32) << 7;
                word |= (case as u32) << 9;
            }
            Self::PronounAdjective {
                number,
                lang,
                gender,
                case,
                animation,
            }
            | Self::NumeralOrdinal {
                number,
                lang,
                gender,
                case,
                animation,
            } => {
                word |= (number as u32) << 5;
                word |= (lang as u32) << 7;
                word |= (gender as u32) << 9;
                word |= (case as u32) << 12;
                word |= (animation as u32) << 16;
            }
            Self::NumeralQuantitative { lang, gender, case } => {
                word |= (lang as u32) << 5;
                word |= (gender as u32) << 7;
                word |= (case as u32) << 10;
            }
            Self::Adverb {
                lang,
                relativity,
                questionality,
                brevity,
            } => {
                word |= (lang as u32) << 5;
                word |= (relativity as u32) << 7;
                word |= (questionality as u32) << 8;
                word |= (brevity as u32) << 9;
            }
            Self::Predicate {
                lang,
                time,
                unchanged,
            } => {
                word |= (lang as u32) << 5;
                word |= (time as u32) << 7;
                word |= (unchanged as u32) << 10;
            }
            Self::Preposition { lang }
            | Self::Conjunction { lang }
            | Self::Interjection { lang }
            | Self::Particle { lang }
            | Self::IntroductoryWord { lang } => {
                word |= (lang as u32) << 5;
            }
        }
        word
    }

    /// Unpack a 32-bit word; `None` when the tag bits name no variant.
    pub fn unpack(word: u32) -> Option<Self> {
        let number = Number::from_bits((word >> 5) & 0x3);
        let lang = Lang::from_bits((word >> 7) & 0x3);
        Some(match pos_tag(word) {
            1 => Self::Noun {
                number,
                lang,
                gender: Gender::from_bits((word >> 9) & 0x7),
                case: Case::from_bits((word >> 12) & 0xF),
                entity: Entity::from_bits((word >> 16) & 0x7),
            },
            2 => Self::Adjective {
                number,
                lang,
                gender: Gender::from_bits((word >> 9) & 0x7),
                case: Case::from_bits((word >> 12) & 0xF),
                animation: Animation::from_bits((word >> 16) & 0x3),
                brevity: (word >> 18) & 0x1 != 0,
            },
            3 => Self::PronounNoun {
                number,
                lang,
                gender: Gender::from_bits((word >> 9) & 0x7),
                case: Case::from_bits((word >> 12) & 0xF),
                person: Person::from_bits((word >> 16) & 0x7),
            },
            4 => Self::Verb {
                number,
                lang,
                time: Time::from_bits((word >> 9) & 0x7),
                voice: Voice::from_bits((word >> 12) & 0x3),
                person: Person::from_bits((word >> 14) & 0x7),
                gender: Gender::from_bits((word >> 17) & 0x7),
                impersonal: (word >> 20) & 0x1 != 0,
            },
            5 => Self::Participle {
                number,
                lang,
                time: Time::from_bits((word >> 9) & 0x7),
                voice: Voice::from_bits((word >> 12) & 0x3),
                case: Case::from_bits((word >> 14) & 0xF),
                gender: Gender::from_bits((word >> 18) & 0x7),
                animation: Animation::from_bits((word >> 21) & 0x3),
            },
            6 => Self::AdverbParticiple {
                lang: Lang::from_bits((word >> 5) & 0x3),
                time: Time::from_bits((word >> 7) & 0x7),
                voice: Voice::from_bits((word >> 10) & 0x3),
            },
            7 => Self::PronounPredicative {
                number,
                lang,
                case: Case::from_bits((word >> 9) & 0xF),
            },
            8 => Self::PronounAdjective {
                number,
                lang,
                gender: Gender::from_bits((word >> 9) & 0x7),
                case: Case::from_bits((word >> 12) & 0xF),
                animation: Animation::from_bits((word >> 16) & 0x3),
            },
            9 => Self::NumeralQuantitative {
                lang: Lang::from_bits((word >> 5) & 0x3),
                gender: Gender::from_bits((word >> 7) & 0x7),
                case: Case::from_bits((word >> 10) & 0xF),
            },
            10 => Self::NumeralOrdinal {
                number,
                lang,
                gender: Gender::from_bits((word >> 9) & 0x7),
                case: Case::from_bits((word >> 12) & 0xF),
                animation: Animation::from_bits((word >> 16) & 0x3),
            },
            11 => Self::Adverb {
                lang: Lang::from_bits((word >> 5) & 0x3),
                relativity: (word >> 7) & 0x1 != 0,
                questionality: (word >> 8) & 0x1 != 0,
                brevity: (word >> 9) & 0x1 != 0,
            },
            12 => Self::Predicate {
                lang: Lang::from_bits((word >> 5) & 0x3),
                time: Time::from_bits((word >> 7) & 0x7),
                unchanged: (word >> 10) & 0x1 != 0,
            },
            13 => Self::Preposition {
                lang: Lang::from_bits((word >> 5) & 0x3),
            },
            14 => Self::Conjunction {
                lang: Lang::from_bits((word >> 5) & 0x3),
            },
            15 => Self::Interjection {
                lang: Lang::from_bits((word >> 5) & 0x3),
            },
            16 => Self::Particle {
                lang: Lang::from_bits((word >> 5) & 0x3),
            },
            17 => Self::IntroductoryWord {
                lang: Lang::from_bits((word >> 5) & 0x3),
            },
            _ => return None,
        })
    }

    /// Human-readable rendering, used by the analyzer CLI.
    pub fn describe(&self) -> String {
        fn lang_suffix(lang: Lang, out: &mut String) {
            if lang != Lang::Normal {
                out.push_str(", ");
                out.push_str(lang_text(lang));
            }
        }

        let mut out = String::new();
        match *self {
            Self::Noun {
                number,
                lang,
                gender,
                case,
                entity,
            } => {
                out.push_str("noun");
                push_field(&mut out, number_text(number));
                push_field(&mut out, gender_text(gender));
                push_field(&mut out, case_text(case));
                lang_suffix(lang, &mut out);
                if entity != Entity::Unknown {
                    push_field(&mut out, entity_text(entity));
                }
            }
            Self::Adjective {
                number,
                lang,
                gender,
                case,
                animation,
                brevity,
            } => {
                out.push_str("adjective");
                push_field(&mut out, number_text(number));
                push_field(&mut out, gender_text(gender));
                push_field(&mut out, case_text(case));
                push_field(&mut out, animation_text(animation));
                lang_suffix(lang, &mut out);
                if brevity {
                    out.push_str(", short form");
                }
            }
            Self::PronounNoun {
                number,
                lang,
                gender,
                case,
                person,
            } => {
                out.push_str("pronoun");
                push_field(&mut out, number_text(number));
                push_field(&mut out, gender_text(gender));
                push_field(&mut out, case_text(case));
                push_field(&mut out, person_text(person));
                lang_suffix(lang, &mut out);
            }
            Self::Verb {
                number,
                lang,
                time,
                voice,
                person,
                gender,
                impersonal,
            } => {
                out.push_str("verb");
                push_field(&mut out, number_text(number));
                push_field(&mut out, time_text(time));
                push_field(&mut out, voice_text(voice));
                push_field(&mut out, person_text(person));
                push_field(&mut out, gender_text(gender));
                out.push_str(if impersonal {
                    ", impersonal"
                } else {
                    ", personal"
                });
                lang_suffix(lang, &mut out);
            }
            Self::Participle {
                number,
                lang,
                time,
                voice,
                case,
                gender,
                animation,
            } => {
                out.push_str("participle");
                push_field(&mut out, number_text(number));
                push_field(&mut out, time_text(time));
                push_field(&mut out, voice_text(voice));
                push_field(&mut out, case_text(case));
                push_field(&mut out, gender_text(gender));
                push_field(&mut out, animation_text(animation));
                lang_suffix(lang, &mut out);
            }
            Self::AdverbParticiple { lang, time, voice } => {
                out.push_str("adverbial participle");
                push_field(&mut out, time_text(time));
                push_field(&mut out, voice_text(voice));
                lang_suffix(lang, &mut out);
            }
            Self::PronounPredicative { number, lang, case } => {
                out.push_str("predicative pronoun");
                push_field(&mut out, number_text(number));
                push_field(&mut out, case_text(case));
                lang_suffix(lang, &mut out);
            }
            Self::PronounAdjective {
                number,
                lang,
                gender,
                case,
                animation,
            } => {
                out.push_str("pronominal adjective");
                push_field(&mut out, number_text(number));
                push_field(&mut out, gender_text(gender));
                push_field(&mut out, case_text(case));
                push_field(&mut out, animation_text(animation));
                lang_suffix(lang, &mut out);
            }
            Self::NumeralQuantitative { lang, gender, case } => {
                out.push_str("cardinal numeral");
                push_field(&mut out, gender_text(gender));
                push_field(&mut out, case_text(case));
                lang_suffix(lang, &mut out);
            }
            Self::NumeralOrdinal {
                number,
                lang,
                gender,
                case,
                animation,
            } => {
                out.push_str("ordinal numeral");
                push_field(&mut out, number_text(number));
                push_field(&mut out, gender_text(gender));
                push_field(&mut out, case_text(case));
                push_field(&mut out, animation_text(animation));
                lang_suffix(lang, &mut out);
            }
            Self::Adverb {
                lang,
                relativity,
                questionality,
                brevity,
            } => {
                out.push_str("adverb");
                if relativity {
                    out.push_str(", relative");
                }
                if questionality {
                    out.push_str(", interrogative");
                }
                if brevity {
                    out.push_str(", short form");
                }
                lang_suffix(lang, &mut out);
            }
            Self::Predicate {
                lang,
                time,
                unchanged,
            } => {
                out.push_str("predicate");
                push_field(&mut out, time_text(time));
                if unchanged {
                    out.push_str(", invariable");
                }
                lang_suffix(lang, &mut out);
            }
            Self::Preposition { lang } => {
                out.push_str("preposition");
                lang_suffix(lang, &mut out);
            }
            Self::Conjunction { lang } => {
                out.push_str("conjunction");
                lang_suffix(lang, &mut out);
            }
            Self::Interjection { lang } => {
                out.push_str("interjection");
                lang_suffix(lang, &mut out);
            }
            Self::Particle { lang } => {
                out.push_str("particle");
                lang_suffix(lang, &mut out);
            }
            Self::IntroductoryWord { lang } => {
                out.push_str("introductory word");
                lang_suffix(lang, &mut out);
            }
        }
        out
    }
}

fn push_field(out: &mut String, text: &str) {
    out.push_str(", ");
    out.push_str(text);
}

fn number_text(number: Number) -> &'static str {
    match number {
        Number::Unknown => "number unknown",
        Number::Singular => "singular",
        Number::Plural => "plural",
    }
}

fn lang_text(lang: Lang) -> &'static str {
    match lang {
        Lang::Normal => "standard register",
        Lang::Slang => "slang",
        Lang::Archaism => "archaic",
        Lang::Informal => "informal",
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
        Case::Genitive => "genitive",
        Case::Genitive2 => "second genitive",
        Case::Dative => "dative",
        Case::Accusative => "accusative",
        Case::Instrumental => "instrumental",
        Case::Prepositional => "prepositional",
        Case::Prepositional2 => "second prepositional",
        Case::Vocative => "vocative",
    }
}

fn time_text(time: Time) -> &'static str {
    match time {
        Time::Unknown => "tense unknown",
        Time::Present => "present tense",
        Time::Future => "future tense",
        Time::Past => "past tense",
    }
}

fn person_text(person: Person) -> &'static str {
    match person {
        Person::Unknown => "person unknown",
        Person::First => "first person",
        Person::Second => "second person",
        Person::Third => "third person",
    }
}

fn entity_text(entity: Entity) -> &'static str {
    match entity {
        Entity::Unknown => "no entity",
        Entity::Abbreviation => "abbreviation",
        Entity::FirstName => "first name",
        Entity::MiddleName => "middle name",
        Entity::FamilyName => "family name",
    }
}

fn animation_text(animation: Animation) -> &'static str {
    match animation {
        Animation::Unknown => "animacy unknown",
        Animation::Animate => "animate",
        Animation::Inanimate => "inanimate",
    }
}

fn voice_text(voice: Voice) -> &'static str {
    match voice {
        Voice::Unknown => "voice unknown",
        Voice::Active => "active voice",
        Voice::Passive => "passive voice",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::POS_TAG_MASK;

    fn round_trip(pos: RussianPos) {
        let packed = pos.pack();
        assert_eq!(RussianPos::unpack(packed), Some(pos));
        assert_eq!(packed & POS_TAG_MASK, pos.tag());
    }

    #[test]
    fn noun_pack_preserves_all_fields() {
        let noun = RussianPos::Noun {
            number: Number::Plural,
            lang: Lang::Archaism,
            gender: Gender::Feminine,
            case: Case::Prepositional,
            entity: Entity::MiddleName,
        };
        let packed = noun.pack();
        assert_eq!(packed & POS_TAG_MASK, 1);
        assert_eq!(RussianPos::unpack(packed), Some(noun));
    }

    #[test]
    fn every_variant_round_trips() {
        round_trip(RussianPos::Noun {
            number: Number::Singular,
            lang: Lang::Normal,
            gender: Gender::Masculine,
            case: Case::Nominative,
            entity: Entity::Unknown,
        });
        round_trip(RussianPos::Adjective {
            number: Number::Plural,
            lang: Lang::Slang,
            gender: Gender::Neuter,
            case: Case::Vocative,
            animation: Animation::Animate,
            brevity: true,
        });
        round_trip(RussianPos::PronounNoun {
            number: Number::Singular,
            lang: Lang::Informal,
            gender: Gender::Feminine,
            case: Case::Dative,
            person: Person::Third,
        });
        round_trip(RussianPos::Verb {
            number: Number::Plural,
            lang: Lang::Normal,
            time: Time::Past,
            voice: Voice::Passive,
            person: Person::First,
            gender: Gender::Masculine,
            impersonal: true,
        });
        round_trip(RussianPos::Participle {
            number: Number::Singular,
            lang: Lang::Normal,
            time: Time::Present,
            voice: Voice::Active,
            case: Case::Instrumental,
            gender: Gender::Neuter,
            animation: Animation::Inanimate,
        });
        round_trip(RussianPos::AdverbParticiple {
            lang: Lang::Normal,
            time: Time::Past,
            voice: Voice::Active,
        });
        round_trip(RussianPos::PronounPredicative {
            number: Number::Plural,
            lang: Lang::Normal,
            case: Case::Vocative,
        });
        round_trip(RussianPos::PronounAdjective {
            number: Number::Singular,
            lang: Lang::Normal,
            gender: Gender::Masculine,
            case: Case::Accusative,
            animation: Animation::Animate,
        });
        round_trip(RussianPos::NumeralQuantitative {
            lang: Lang::Normal,
            gender: Gender::Feminine,
            case: Case::Genitive2,
        });
        round_trip(RussianPos::NumeralOrdinal {
            number: Number::Plural,
            lang: Lang::Normal,
            gender: Gender::Neuter,
            case: Case::Prepositional2,
            animation: Animation::Inanimate,
        });
        round_trip(RussianPos::Adverb {
            lang: Lang::Normal,
            relativity: true,
            questionality: false,
            brevity: true,
        });
        round_trip(RussianPos::Predicate {
            lang: Lang::Normal,
            time: Time::Present,
            unchanged: true,
        });
        round_trip(RussianPos::Preposition { lang: Lang::Normal });
        round_trip(RussianPos::Conjunction { lang: Lang::Slang });
        round_trip(RussianPos::Interjection { lang: Lang::Normal });
        round_trip(RussianPos::Particle { lang: Lang::Normal });
        round_trip(RussianPos::IntroductoryWord { lang: Lang::Archaism });
    }

    #[test]
    fn tags_are_distinct_and_in_range() {
        let variants = [
            RussianPos::Noun {
                number: Number::Unknown,
                lang: Lang::Normal,
                gender: Gender::Unknown,
                case: Case::Unknown,
                entity: Entity::Unknown,
            },
            RussianPos::Adverb {
                lang: Lang::Normal,
                relativity: false,
                questionality: false,
                brevity: false,
            },
            RussianPos::IntroductoryWord { lang: Lang::Normal },
        ];
        for pos in variants {
            assert!((1..=17).contains(&pos.tag()));
        }
    }

    #[test]
    fn zero_and_garbage_tags_do_not_unpack() {
        assert_eq!(RussianPos::unpack(0), None);
        assert_eq!(RussianPos::unpack(18), None);
        assert_eq!(RussianPos::unpack(31), None);
    }

    #[test]
    fn descriptions_name_the_class() {
        let noun = RussianPos::Noun {
            number: Number::Singular,
            lang: Lang::Normal,
            gender: Gender::Feminine,
            case: Case::Nominative,
            entity: Entity::Unknown,
        };
        let text = noun.describe();
        assert!(text.starts_with("noun"));
        assert!(text.contains("singular"));
        assert!(text.contains("feminine"));
        assert!(text.contains("nominative"));
        assert!(!text.contains("register")); // normal register is implicit
    }
}
