// Language alphabets: UTF-32 symbols to compact one-byte codes.

use crate::symbols::SymbolCode;

/// A language alphabet mapping a subset of UTF-32 onto `1..=size()`.
///
/// Code 0 is reserved for "not in alphabet". An alphabet covers at most 254
/// symbols so that a code always fits one byte with 0 left over as the
/// sentinel. Only lowercase letters are covered; callers lower-case before
/// encoding.
pub trait Alphabet {
    /// Map a symbol to its code, or 0 when the symbol is not in the alphabet.
    fn encode(&self, symbol: SymbolCode) -> u8;

    /// Map a code back to its symbol, or 0 for codes outside `1..=size()`.
    fn decode(&self, code: u8) -> SymbolCode;

    /// Number of symbols in the alphabet.
    fn size(&self) -> usize;
}

/// The 33 lowercase Russian letters: `а..я` take codes 1..=32, `ё` takes 33.
#[derive(Debug, Clone, Copy, Default)]
pub struct RussianAlphabet;

impl Alphabet for RussianAlphabet {
    fn encode(&self, symbol: SymbolCode) -> u8 {
        if (0x0430..=0x044F).contains(&symbol) {
            return (symbol - 0x0430 + 1) as u8;
        }
        if symbol == 0x0451 {
            return 33;
        }
        0
    }

    fn decode(&self, code: u8) -> SymbolCode {
        if (1..=32).contains(&code) {
            return 0x0430 + code as SymbolCode - 1;
        }
        if code == 33 {
            return 0x0451;
        }
        0
    }

    fn size(&self) -> usize {
        33
    }
}

/// The 26 lowercase English letters; codes are the ASCII values themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishAlphabet;

impl Alphabet for EnglishAlphabet {
    fn encode(&self, symbol: SymbolCode) -> u8 {
        if (0x61..=0x7A).contains(&symbol) {
            return symbol as u8;
        }
        0
    }

    fn decode(&self, code: u8) -> SymbolCode {
        if (0x61..=0x7A).contains(&code) {
            return code as SymbolCode;
        }
        0
    }

    fn size(&self) -> usize {
        26
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::decode_str;

    #[test]
    fn russian_codes_are_dense_and_round_trip() {
        let alphabet = RussianAlphabet;
        let letters = "абвгдежзийклмнопрстуфхцчшщъыьэюяё";
        for (i, sym) in decode_str(letters).enumerate() {
            let code = alphabet.encode(sym.code());
            assert_eq!(code as usize, i + 1);
            assert_eq!(alphabet.decode(code), sym.code());
        }
        assert_eq!(alphabet.size(), 33);
    }

    #[test]
    fn english_codes_are_identity_and_round_trip() {
        let alphabet = EnglishAlphabet;
        for sym in decode_str("qwertyuiopasdfghjklzxcvbnm") {
            let code = alphabet.encode(sym.code());
            assert_eq!(code as u32, sym.code());
            assert_eq!(alphabet.decode(code), sym.code());
        }
        assert_eq!(alphabet.size(), 26);
    }

    #[test]
    fn out_of_alphabet_encodes_to_zero() {
        assert_eq!(RussianAlphabet.encode('a' as u32), 0);
        assert_eq!(RussianAlphabet.encode(0x0410), 0); // uppercase А
        assert_eq!(EnglishAlphabet.encode('A' as u32), 0);
        assert_eq!(EnglishAlphabet.encode('!' as u32), 0);
        assert_eq!(EnglishAlphabet.encode(0x0430), 0);
    }

    #[test]
    fn bad_codes_decode_to_zero() {
        assert_eq!(RussianAlphabet.decode(0), 0);
        assert_eq!(RussianAlphabet.decode(34), 0);
        assert_eq!(EnglishAlphabet.decode(0), 0);
        assert_eq!(EnglishAlphabet.decode(0x60), 0);
        assert_eq!(EnglishAlphabet.decode(0x7B), 0);
    }
}
