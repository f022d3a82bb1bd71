// bdic-suggest: Generate spelling suggestions.
//
// Prints suggestions for misspelled words given as arguments, or read from
// stdin (one per line). Correctly spelled words are reported as such.
//
// Usage:
//   bdic-suggest [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Dictionary file, or directory containing *.bdic
//   -n, --max-suggestions N  Maximum number of suggestions (default: all)
//   -v, --verbose            Log dictionary loading to stderr
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use bdic_cli::CliArgs;
use bdic_spell::SpellChecker;

fn suggest_word(word: &str, checker: &SpellChecker, out: &mut impl Write) {
    let mut suggestions = Vec::new();
    if checker.spell(word, Some(&mut suggestions)) {
        let _ = writeln!(out, "{word} (correct)");
    } else if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for s in &suggestions {
            let _ = writeln!(out, "  {s}");
        }
    }
}

fn main() {
    let args = CliArgs::from_env();

    if args.help {
        println!("bdic-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: bdic-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Dictionary file, or directory containing *.bdic");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: all)");
        println!("  -v, --verbose            Log dictionary loading to stderr");
        println!("  -h, --help               Print this help");
        return;
    }

    bdic_cli::init_logging(args.verbose);

    let (mut checker, _) =
        bdic_cli::load_checker(args.dict_path.as_deref()).unwrap_or_else(|e| bdic_cli::fatal(&e));
    checker.set_max_suggestions(args.max_suggestions);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word, &checker, &mut out);
        }
    } else {
        for word in &args.words {
            suggest_word(word, &checker, &mut out);
        }
    }
}
