// slovo-tokenize: extract words from a byte stream.
//
// Reads stdin, decodes it through the selected encoding and prints every
// word (maximal letter run) on its own line.
//
// Usage:
//   slovo-tokenize [--encoding utf8|cp1251|koi8r|latin1]
//
// Exit codes: 0 success, 1 usage error, 2 internal error.

use std::io::{self, Read, Write};

use slovo_cli::{fatal, take_flag, wants_help, EXIT_INTERNAL, EXIT_USAGE};
use slovo_core::charset::{Cp1251Decoder, DecodeIter, Koi8RDecoder, Latin1Decoder};
use slovo_core::symbols::SymbolCode;
use slovo_core::tokens::WordIter;
use slovo_core::utf8::{decode_bytes, encode_utf8_string};

fn print_help() {
    println!("slovo-tokenize: extract words from a byte stream.");
    println!();
    println!("Usage: slovo-tokenize [--encoding utf8|cp1251|koi8r|latin1]");
    println!();
    println!("Reads stdin, decodes it through the selected encoding (UTF-8");
    println!("by default) and prints one word per line.");
    println!();
    println!("Options:");
    println!("  -e, --encoding NAME   Input encoding");
    println!("  -h, --help            Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wants_help(&args) {
        print_help();
        return;
    }

    let (encoding, args) = take_flag(&args, "--encoding", "-e");
    if let Some(stray) = args.first() {
        fatal(&format!("unexpected argument: {stray}"), EXIT_USAGE);
    }

    let mut input = Vec::new();
    if let Err(e) = io::stdin().lock().read_to_end(&mut input) {
        fatal(&format!("cannot read stdin: {e}"), EXIT_INTERNAL);
    }

    let bytes = input.iter().copied();
    let codes: Vec<SymbolCode> = match encoding.as_deref() {
        None | Some("utf8") => decode_bytes(&input).map(|s| s.code()).collect(),
        Some("cp1251") => DecodeIter::new(bytes, Cp1251Decoder).collect(),
        Some("koi8r") => DecodeIter::new(bytes, Koi8RDecoder).collect(),
        Some("latin1") => DecodeIter::new(bytes, Latin1Decoder).collect(),
        Some(name) => fatal(&format!("unknown encoding: {name}"), EXIT_USAGE),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in WordIter::new(codes.into_iter()) {
        let _ = writeln!(out, "{}", encode_utf8_string(word));
    }
}
