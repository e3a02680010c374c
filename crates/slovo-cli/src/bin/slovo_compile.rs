// slovo-compile: build a binary dictionary from AOT sources.
//
// Usage:
//   slovo-compile --tab FILE.tab --dict FILE.dic --bin OUT.bin --model rus|eng [-v]
//
// Exit codes: 0 success, 1 usage error, 2 internal error.

use std::fs::File;
use std::io::{BufReader, BufWriter};

use tracing::info;

use slovo_cli::{fatal, take_flag, wants_help, Language, EXIT_INTERNAL, EXIT_USAGE};
use slovo_core::alphabet::{EnglishAlphabet, RussianAlphabet};
use slovo_morpho::aot::{import_dictionary, EnglishTagParser, RussianTagParser};

fn print_help() {
    println!("slovo-compile: build a binary dictionary from AOT sources.");
    println!();
    println!("Usage: slovo-compile --tab FILE.tab --dict FILE.dic --bin OUT.bin --model rus|eng");
    println!();
    println!("Options:");
    println!("  -t, --tab PATH     Tab file with attribute definitions");
    println!("  -d, --dict PATH    Dictionary source file");
    println!("  -b, --bin PATH     Output binary dictionary");
    println!("  -m, --model LANG   Language model: rus or eng");
    println!("  -v, --verbose      Report import progress");
    println!("  -h, --help         Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wants_help(&args) {
        print_help();
        return;
    }

    let (tab_path, args) = take_flag(&args, "--tab", "-t");
    let (dict_path, args) = take_flag(&args, "--dict", "-d");
    let (bin_path, args) = take_flag(&args, "--bin", "-b");
    let (model_name, args) = take_flag(&args, "--model", "-m");
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");

    let Some(tab_path) = tab_path else {
        fatal("--tab is required (see --help)", EXIT_USAGE);
    };
    let Some(dict_path) = dict_path else {
        fatal("--dict is required (see --help)", EXIT_USAGE);
    };
    let Some(bin_path) = bin_path else {
        fatal("--bin is required (see --help)", EXIT_USAGE);
    };
    let language = match model_name.as_deref() {
        Some(name) => Language::parse(name)
            .unwrap_or_else(|| fatal(&format!("unknown language model: {name}"), EXIT_USAGE)),
        None => fatal("--model is required (see --help)", EXIT_USAGE),
    };

    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let tab = open_reader(&tab_path);
    let dict = open_reader(&dict_path);

    let out = File::create(&bin_path)
        .unwrap_or_else(|e| fatal(&format!("cannot create {bin_path}: {e}"), EXIT_INTERNAL));
    let mut out = BufWriter::new(out);

    let result = match language {
        Language::Russian => {
            let parser = RussianTagParser::new();
            import_dictionary(RussianAlphabet, &parser, tab, dict)
                .map(|morph| (morph.num_lemmas(), morph.serialize(&mut out)))
        }
        Language::English => {
            let parser = EnglishTagParser::new();
            import_dictionary(EnglishAlphabet, &parser, tab, dict)
                .map(|morph| (morph.num_lemmas(), morph.serialize(&mut out)))
        }
    };

    match result {
        Ok((lemmas, Ok(()))) => {
            info!(lemmas, output = %bin_path, "dictionary compiled");
        }
        Ok((_, Err(e))) => fatal(&format!("cannot write {bin_path}: {e}"), EXIT_INTERNAL),
        Err(e) => fatal(&format!("import failed: {e}"), EXIT_INTERNAL),
    }
}

fn open_reader(path: &str) -> BufReader<File> {
    let file = File::open(path)
        .unwrap_or_else(|e| fatal(&format!("cannot open {path}: {e}"), EXIT_INTERNAL));
    BufReader::new(file)
}
