//! End-to-end spell checking over dictionaries built in memory.
//!
//! Run: cargo test -p bdic-spell --test spell

mod common;

use bdic_spell::SpellChecker;
use common::{DictionaryBuilder, english};

fn checker() -> SpellChecker {
    SpellChecker::new(english().build())
}

fn spell_with(checker: &SpellChecker, word: &str) -> (bool, Vec<String>) {
    let mut out = Vec::new();
    let ok = checker.spell(word, Some(&mut out));
    (ok, out)
}

// ---------------------------------------------------------------------------
// Direct lookup
// ---------------------------------------------------------------------------

#[test]
fn trie_words_are_correct_without_suggestions() {
    let checker = checker();
    for word in [
        "walk", "run", "box", "city", "fish", "fix", "lock", "believe", "NASA", "a", "an", "and",
        "café",
    ] {
        let (ok, out) = spell_with(&checker, word);
        assert!(ok, "{word} should be correct");
        assert!(out.is_empty(), "{word} got suggestions {out:?}");
    }
}

#[test]
fn prefixes_of_words_are_not_words() {
    let checker = checker();
    for word in ["wal", "ru", "fi", "caf", "lo", ""] {
        assert!(!checker.spell(word, None), "{word:?} should be misspelled");
    }
}

#[test]
fn extensions_of_words_are_not_words() {
    let checker = checker();
    for word in ["walkk", "ands", "fixx", "aa"] {
        assert!(!checker.spell(word, None), "{word:?} should be misspelled");
    }
}

#[test]
fn lookup_is_case_sensitive() {
    let checker = checker();
    assert!(!checker.spell("Walk", None));
    assert!(!checker.spell("nasa", None));
}

// ---------------------------------------------------------------------------
// Affix rules
// ---------------------------------------------------------------------------

#[test]
fn suffix_rule_validates_derived_word() {
    let checker = checker();
    assert!(checker.spell("walking", None));
    assert!(checker.spell("walks", None));
}

#[test]
fn suffix_without_strip_recovers_short_stem() {
    // "running" - "ning" = "run", which carries flag A
    let checker = checker();
    let (ok, out) = spell_with(&checker, "running");
    assert!(ok);
    assert!(out.is_empty());
}

#[test]
fn suffix_conditions_select_the_rule() {
    let checker = checker();
    assert!(checker.spell("boxes", None));
    assert!(checker.spell("fishes", None));
    assert!(checker.spell("cities", None));
    // "s" needs a stem not ending in s/x/z/h/y
    assert!(!checker.spell("boxs", None));
    assert!(!checker.spell("citys", None));
    assert!(!checker.spell("fishs", None));
}

#[test]
fn strip_is_restored_before_lookup() {
    // "cities" -> "cit" + "y"
    let checker = checker();
    assert!(checker.spell("cities", None));
    assert!(!checker.spell("cites", None));
}

#[test]
fn prefix_rule_validates_derived_word() {
    let checker = checker();
    assert!(checker.spell("unlock", None));
    assert!(checker.spell("locks", None));
}

#[test]
fn stem_without_the_rule_flag_is_rejected() {
    let checker = checker();
    // "run" has group A only; "walk" has A and S but not U
    assert!(!checker.spell("runs", None));
    assert!(!checker.spell("unwalk", None));
    // "fix" has no affix groups at all
    assert!(!checker.spell("fixes", None));
    assert!(!checker.spell("fixing", None));
}

#[test]
fn non_ascii_stems() {
    let checker = checker();
    assert!(checker.spell("cafés", None));
    assert!(!checker.spell("cafés2", None));
}

#[test]
fn affixes_do_not_stack() {
    let checker = checker();
    assert!(!checker.spell("unlocks", None));
    assert!(!checker.spell("walkings", None));
}

// ---------------------------------------------------------------------------
// Checker behavior
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_agree() {
    let checker = checker();
    for word in ["walking", "phish", "nasa", "beleive", "zzz", "unlock"] {
        let first = spell_with(&checker, word);
        let second = spell_with(&checker, word);
        assert_eq!(first, second, "{word}");
    }
}

#[test]
fn utf16_input_matches_str_input() {
    let checker = checker();
    for word in ["walk", "walking", "cafés", "phish", "unlock", "zzz"] {
        let units: Vec<u16> = word.encode_utf16().collect();
        let mut from_utf16 = Vec::new();
        let mut from_str = Vec::new();
        assert_eq!(
            checker.spell_utf16(&units, Some(&mut from_utf16)),
            checker.spell(word, Some(&mut from_str)),
            "{word}"
        );
        assert_eq!(from_utf16, from_str, "{word}");
    }
}

#[test]
fn unpaired_surrogate_ends_utf16_word() {
    let checker = checker();
    let mut units: Vec<u16> = "café".encode_utf16().collect();
    units.push(0xD800);
    units.extend("xyz".encode_utf16());
    assert!(checker.spell_utf16(&units, None));
}

#[test]
fn word_is_read_up_to_interior_nul() {
    let checker = checker();
    assert!(checker.spell("walk\0zzz", None));
    assert!(!checker.spell("wal\0k", None));
    assert!(!checker.spell("\0walk", None));
}

#[test]
fn checker_is_shared_between_threads() {
    let checker = std::sync::Arc::new(checker());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let checker = std::sync::Arc::clone(&checker);
            std::thread::spawn(move || {
                (
                    checker.spell("walking", None),
                    checker.suggest("phish"),
                )
            })
        })
        .collect();
    for handle in handles {
        let (ok, suggestions) = handle.join().unwrap();
        assert!(ok);
        assert_eq!(suggestions, vec!["fish"]);
    }
}

#[test]
fn initialize_exposes_parsed_dictionary() {
    let checker = checker();
    let dict = checker.initialize().unwrap();
    assert_eq!(dict.header().major, 3);
    assert!(dict.header().has_signature());
    assert_eq!(dict.groups(), &["", "A", "S", "AS", "U"]);
    let flags: Vec<&str> = dict.rule_sets().iter().map(|set| set.flag()).collect();
    assert_eq!(flags, vec!["A", "S", "U"]);
    assert_eq!(dict.replace_rules().len(), 2);
}

#[test]
fn empty_word_list() {
    let checker = SpellChecker::new(DictionaryBuilder::new().build());
    assert!(checker.initialize().is_ok());
    assert!(!checker.spell("anything", None));
    assert!(!checker.spell("", None));
}

#[test]
fn large_word_list() {
    let mut builder = DictionaryBuilder::new().group("S").rule("SFX S Y 1").rule("SFX S 0 s .");
    let mut words = Vec::new();
    for a in b'a'..=b'z' {
        for b in b'a'..=b'z' {
            let word = format!("{}{}x", char::from(a), char::from(b));
            builder = builder.word(&word, &[1]);
            words.push(word);
        }
    }
    let checker = SpellChecker::new(builder.build());
    for word in &words {
        assert!(checker.spell(word, None), "{word}");
        assert!(checker.spell(&format!("{word}s"), None), "{word}s");
        assert!(!checker.spell(&format!("{word}y"), None), "{word}y");
    }
}
