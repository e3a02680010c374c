// slovo-analyze: morphological analysis of words from stdin.
//
// Reads stdin line by line, tokenises each line on whitespace and prints
// every word with the human-readable descriptions of its readings:
//
//   мамой: { noun, singular, feminine, instrumental }
//
// Usage:
//   slovo-analyze --dict DICT.bin [--lang rus|eng]
//
// Exit codes: 0 success, 1 usage error, 2 internal error.

use std::io::{self, BufRead, Write};

use slovo_cli::{fatal, take_flag, wants_help, Dictionary, Language, EXIT_INTERNAL, EXIT_USAGE};

fn print_help() {
    println!("slovo-analyze: morphological analysis of words from stdin.");
    println!();
    println!("Usage: slovo-analyze --dict DICT.bin [--lang rus|eng]");
    println!();
    println!("Reads lines from stdin, splits them on whitespace and prints");
    println!("each word with its part-of-speech readings.");
    println!();
    println!("Options:");
    println!("  -d, --dict PATH   Serialised dictionary file (required)");
    println!("  -l, --lang LANG   Dictionary language: rus (default) or eng");
    println!("  -h, --help        Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wants_help(&args) {
        print_help();
        return;
    }

    let (dict_path, args) = take_flag(&args, "--dict", "-d");
    let (lang_name, args) = take_flag(&args, "--lang", "-l");
    if let Some(stray) = args.first() {
        fatal(&format!("unexpected argument: {stray}"), EXIT_USAGE);
    }

    let Some(dict_path) = dict_path else {
        fatal("--dict is required (see --help)", EXIT_USAGE);
    };
    let language = match lang_name.as_deref() {
        None => Language::Russian,
        Some(name) => Language::parse(name)
            .unwrap_or_else(|| fatal(&format!("unknown language: {name}"), EXIT_USAGE)),
    };

    let dictionary = Dictionary::load(&dict_path, language)
        .unwrap_or_else(|e| fatal(&e, EXIT_INTERNAL));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => fatal(&format!("cannot read stdin: {e}"), EXIT_INTERNAL),
        };
        for word in line.split_whitespace() {
            let lemmas = dictionary.analyze(word);
            let descriptions: Vec<String> = lemmas
                .iter()
                .map(|lemma| dictionary.describe(lemma.attr))
                .collect();
            if descriptions.is_empty() {
                let _ = writeln!(out, "{word}: {{}}");
            } else {
                let _ = writeln!(out, "{word}: {{ {} }}", descriptions.join(" | "));
            }
        }
    }
}
