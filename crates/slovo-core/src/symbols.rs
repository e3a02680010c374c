// Symbol classification and case mapping over UTF-32 codes.

use bitflags::bitflags;

/// UTF-32 symbol code.
pub type SymbolCode = u32;

/// Largest code the UTF-32 encoding form can carry.
pub const MAX_UTF32: SymbolCode = 0x7fff_ffff;

/// Largest legal Unicode scalar value.
pub const MAX_LEGAL_UTF32: SymbolCode = 0x0010_ffff;

bitflags! {
    /// Symbol class mask.
    ///
    /// Composite classes (`LETTER`, `NUMBER`, `PUNCTUATION`, `SEPARATOR`,
    /// `OTHER`) are unions of their leaf classes, so membership tests are a
    /// single mask intersection.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SymbolClass: u32 {
        const UPPERCASE_LETTER      = 0x0000_0001;
        const LOWERCASE_LETTER      = 0x0000_0002;
        const TITLECASE_LETTER      = 0x0000_0004;
        const CASED_LETTER          = Self::UPPERCASE_LETTER.bits()
                                    | Self::LOWERCASE_LETTER.bits()
                                    | Self::TITLECASE_LETTER.bits();
        const MODIFIER_LETTER       = 0x0000_0008;
        const OTHER_LETTER          = 0x0000_0010;
        const LETTER                = Self::CASED_LETTER.bits()
                                    | Self::MODIFIER_LETTER.bits()
                                    | Self::OTHER_LETTER.bits();
        const DECIMAL_NUMBER        = 0x0000_0100;
        const OTHER_NUMBER          = 0x0000_0400;
        const NUMBER                = Self::DECIMAL_NUMBER.bits() | Self::OTHER_NUMBER.bits();
        const DASH_PUNCTUATION      = 0x0000_1000;
        const OPEN_PUNCTUATION      = 0x0000_2000;
        const CLOSE_PUNCTUATION     = 0x0000_4000;
        const OTHER_PUNCTUATION     = 0x0002_0000;
        const PUNCTUATION           = Self::DASH_PUNCTUATION.bits()
                                    | Self::OPEN_PUNCTUATION.bits()
                                    | Self::CLOSE_PUNCTUATION.bits()
                                    | Self::OTHER_PUNCTUATION.bits();
        const SYMBOL                = 0x0004_0000;
        const SPACE_SEPARATOR       = 0x0040_0000;
        const LINE_SEPARATOR        = 0x0080_0000;
        const PARAGRAPH_SEPARATOR   = 0x0100_0000;
        const SEPARATOR             = Self::SPACE_SEPARATOR.bits()
                                    | Self::LINE_SEPARATOR.bits()
                                    | Self::PARAGRAPH_SEPARATOR.bits();
        const CONTROL               = 0x0200_0000;
        const UNASSIGNED            = 0x2000_0000;
        const OTHER                 = Self::CONTROL.bits() | Self::UNASSIGNED.bits();
    }
}

/// Classify a UTF-32 code.
///
/// Codes that are not valid Unicode scalar values classify as `UNASSIGNED`.
/// The classification delegates to the standard library's character
/// predicates instead of carrying the generated per-plane tables.
pub fn symbol_class(code: SymbolCode) -> SymbolClass {
    let Some(c) = char::from_u32(code) else {
        return SymbolClass::UNASSIGNED;
    };
    if c.is_control() {
        return SymbolClass::CONTROL;
    }
    if c.is_whitespace() {
        return match c {
            '\u{2028}' => SymbolClass::LINE_SEPARATOR,
            '\u{2029}' => SymbolClass::PARAGRAPH_SEPARATOR,
            _ => SymbolClass::SPACE_SEPARATOR,
        };
    }
    if c.is_alphabetic() {
        if c.is_uppercase() {
            return SymbolClass::UPPERCASE_LETTER;
        }
        if c.is_lowercase() {
            return SymbolClass::LOWERCASE_LETTER;
        }
        return SymbolClass::OTHER_LETTER;
    }
    if c.is_numeric() {
        if c.is_ascii_digit() {
            return SymbolClass::DECIMAL_NUMBER;
        }
        return SymbolClass::OTHER_NUMBER;
    }
    if is_punctuation_char(c) {
        return match c {
            '-' | '\u{2010}' | '\u{2011}' | '\u{2013}' | '\u{2014}' => {
                SymbolClass::DASH_PUNCTUATION
            }
            '(' | '[' | '{' => SymbolClass::OPEN_PUNCTUATION,
            ')' | ']' | '}' => SymbolClass::CLOSE_PUNCTUATION,
            _ => SymbolClass::OTHER_PUNCTUATION,
        };
    }
    SymbolClass::SYMBOL
}

fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{00A1}'..='\u{00BF}' | '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}'
        )
}

/// Test a code against a class mask.
pub fn is(code: SymbolCode, class: SymbolClass) -> bool {
    symbol_class(code).intersects(class)
}

/// Is the code a letter in any script?
pub fn is_letter(code: SymbolCode) -> bool {
    is(code, SymbolClass::LETTER)
}

/// Is the code a cased letter (upper, lower or title case)?
pub fn is_cased_letter(code: SymbolCode) -> bool {
    is(code, SymbolClass::CASED_LETTER)
}

/// Is the code a digit in any script?
pub fn is_number(code: SymbolCode) -> bool {
    is(code, SymbolClass::NUMBER)
}

/// Is the code a punctuation character?
pub fn is_punctuation(code: SymbolCode) -> bool {
    is(code, SymbolClass::PUNCTUATION)
}

/// Is the code a separator (space, line or paragraph)?
pub fn is_separator(code: SymbolCode) -> bool {
    is(code, SymbolClass::SEPARATOR)
}

/// Is the code a control, format or unassigned symbol?
pub fn is_other(code: SymbolCode) -> bool {
    is(code, SymbolClass::OTHER)
}

/// Map to the lowercase variant.
///
/// One-to-one mapping: characters whose lowercase expansion spans several
/// characters keep only the first one. Codes outside Unicode map to
/// themselves.
pub fn to_lower(code: SymbolCode) -> SymbolCode {
    match char::from_u32(code) {
        Some(c) => c.to_lowercase().next().map_or(code, |l| l as SymbolCode),
        None => code,
    }
}

/// Map to the uppercase variant; the one-to-one counterpart of [`to_lower`].
pub fn to_upper(code: SymbolCode) -> SymbolCode {
    match char::from_u32(code) {
        Some(c) => c.to_uppercase().next().map_or(code, |u| u as SymbolCode),
        None => code,
    }
}
