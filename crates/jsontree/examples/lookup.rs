//! Loads a JSON document from disk, looks up one top-level key and prints the
//! rendered value.
//!
//! ```text
//! cargo run --example lookup -- [FILE] [KEY] [--tokens]
//! ```
//!
//! `FILE` defaults to `exemplo.json` and `KEY` to `address`. With `--tokens`
//! the token stream of the file is dumped first, one token per line.
//!
//! Exit status is non-zero when the file cannot be read or parsed, or when the
//! key is missing.

use std::{env, process::ExitCode};

use jsontree::{Tokenizer, load_file, lookup_key, parse};

fn main() -> ExitCode {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let dump_tokens = if let Some(i) = args.iter().position(|a| a == "--tokens") {
        args.remove(i);
        true
    } else {
        false
    };
    let mut args = args.into_iter();
    let path = args.next().unwrap_or_else(|| "exemplo.json".to_owned());
    let key = args.next().unwrap_or_else(|| "address".to_owned());

    let bytes = match load_file(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("ERROR! {err}");
            return ExitCode::FAILURE;
        }
    };

    if dump_tokens {
        for token in Tokenizer::new(&bytes) {
            println!("{token}");
        }
        println!();
    }

    let root = match parse(&bytes) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("ERROR! {path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    // The tree owns copies of everything it needs.
    drop(bytes);

    match lookup_key(&root, &key) {
        Ok(value) => {
            println!("{}", value.rendered());
            root.destroy();
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR! {err}");
            ExitCode::FAILURE
        }
    }
}
