// bdic-spell: Check spelling of words.
//
// Reports whether each word is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   S: word    (suggestion, with -s)
//
// Usage:
//   bdic-spell [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Dictionary file, or directory containing *.bdic
//   -s, --suggest          Also print suggestions for misspelled words
//   -v, --verbose          Log dictionary loading to stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use bdic_cli::CliArgs;
use bdic_spell::SpellChecker;

struct Report<'a> {
    checker: &'a SpellChecker,
    suggest: bool,
    suggestions: Vec<String>,
}

impl Report<'_> {
    fn word(&mut self, word: &str, out: &mut impl Write) {
        self.suggestions.clear();
        let sink = self.suggest.then_some(&mut self.suggestions);
        if self.checker.spell(word, sink) {
            let _ = writeln!(out, "C: {word}");
            return;
        }
        let _ = writeln!(out, "W: {word}");
        for suggestion in &self.suggestions {
            let _ = writeln!(out, "S: {suggestion}");
        }
    }
}

fn main() {
    let args = CliArgs::from_env();

    if args.help {
        println!("bdic-spell: Check spelling of words.");
        println!();
        println!("Usage: bdic-spell [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("Checks each WORD, or words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!("  S: word    (suggestion, with -s)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory containing *.bdic");
        println!("  -s, --suggest          Also print suggestions for misspelled words");
        println!("  -v, --verbose          Log dictionary loading to stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    bdic_cli::init_logging(args.verbose);

    let (checker, _) =
        bdic_cli::load_checker(args.dict_path.as_deref()).unwrap_or_else(|e| bdic_cli::fatal(&e));
    let mut report = Report {
        checker: &checker,
        suggest: args.suggest,
        suggestions: Vec::new(),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !args.words.is_empty() {
        for word in &args.words {
            report.word(word, &mut out);
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if !word.is_empty() {
            report.word(word, &mut out);
        }
    }
}
