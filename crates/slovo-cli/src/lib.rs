// slovo-cli: shared plumbing for the command-line tools.

use std::fs::File;
use std::io::BufReader;
use std::process;

use slovo_core::alphabet::{EnglishAlphabet, RussianAlphabet};
use slovo_morpho::model::{EnglishPos, RussianPos};
use slovo_morpho::{Lemma, Morphologist};

/// Exit code for usage errors.
pub const EXIT_USAGE: i32 = 1;

/// Exit code for internal failures (unreadable dictionary, bad image).
pub const EXIT_INTERNAL: i32 = 2;

/// Extract `--name VALUE` / `--name=VALUE` / `-short VALUE` from `args`.
///
/// Returns the value (if present) and the remaining arguments.
pub fn take_flag(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let prefix = format!("{long}=");
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(v) = arg.strip_prefix(&prefix) {
            value = Some(v.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(EXIT_USAGE);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Print an error message and exit with the given code.
pub fn fatal(msg: &str, code: i32) -> ! {
    eprintln!("error: {msg}");
    process::exit(code);
}

/// Dictionary language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Russian,
    English,
}

impl Language {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rus" => Some(Self::Russian),
            "eng" => Some(Self::English),
            _ => None,
        }
    }
}

/// A loaded dictionary of either language.
pub enum Dictionary {
    Russian(Morphologist<RussianAlphabet>),
    English(Morphologist<EnglishAlphabet>),
}

impl Dictionary {
    /// Load a serialised dictionary from a file.
    pub fn load(path: &str, language: Language) -> Result<Self, String> {
        let file =
            File::open(path).map_err(|e| format!("cannot open dictionary {path}: {e}"))?;
        let mut reader = BufReader::new(file);
        match language {
            Language::Russian => Morphologist::deserialize(&mut reader, RussianAlphabet)
                .map(Self::Russian)
                .map_err(|e| format!("cannot load dictionary {path}: {e}")),
            Language::English => Morphologist::deserialize(&mut reader, EnglishAlphabet)
                .map(Self::English)
                .map_err(|e| format!("cannot load dictionary {path}: {e}")),
        }
    }

    pub fn analyze(&self, word: &str) -> Vec<Lemma> {
        match self {
            Self::Russian(morph) => morph.analyze(word),
            Self::English(morph) => morph.analyze(word),
        }
    }

    /// Render a packed attribute word for display.
    pub fn describe(&self, attr: u32) -> String {
        let described = match self {
            Self::Russian(_) => RussianPos::unpack(attr).map(|pos| pos.describe()),
            Self::English(_) => EnglishPos::unpack(attr).map(|pos| pos.describe()),
        };
        described.unwrap_or_else(|| "unknown part of speech".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn take_flag_with_separate_value() {
        let (value, rest) = take_flag(&args(&["--dict", "d.bin", "word"]), "--dict", "-d");
        assert_eq!(value.as_deref(), Some("d.bin"));
        assert_eq!(rest, args(&["word"]));
    }

    #[test]
    fn take_flag_with_equals_value() {
        let (value, rest) = take_flag(&args(&["--dict=d.bin"]), "--dict", "-d");
        assert_eq!(value.as_deref(), Some("d.bin"));
        assert!(rest.is_empty());
    }

    #[test]
    fn take_flag_short_form() {
        let (value, _) = take_flag(&args(&["-d", "d.bin"]), "--dict", "-d");
        assert_eq!(value.as_deref(), Some("d.bin"));
    }

    #[test]
    fn take_flag_absent() {
        let (value, rest) = take_flag(&args(&["word"]), "--dict", "-d");
        assert_eq!(value, None);
        assert_eq!(rest, args(&["word"]));
    }

    #[test]
    fn language_names() {
        assert_eq!(Language::parse("rus"), Some(Language::Russian));
        assert_eq!(Language::parse("eng"), Some(Language::English));
        assert_eq!(Language::parse("fi"), None);
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&args(&["--help"])));
        assert!(wants_help(&args(&["-h"])));
        assert!(!wants_help(&args(&["--dict", "x"])));
    }
}
