// WASM bindings for BDIC spell checking.
//
// Provides a `WasmSpellChecker` class exported via wasm-bindgen that wraps
// `SpellChecker` from bdic-spell. Structured results are serialized to
// JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const checker = new WasmSpellChecker(bdicBytes);
//   checker.spell("walking");        // => true
//   checker.suggest("phish");        // => ["fish"]
//   checker.check("phish");          // => { correct: false, suggestions: ["fish"] }
//   checker.spellAll(["a", "zzz"]);  // => [true, false]
//   checker.info();                  // => { major: 3, minor: 0, ... }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use bdic_spell::{SpellChecker, SpellOptions};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Result of checking one word.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsCheck {
    correct: bool,
    suggestions: Vec<String>,
}

/// Summary of a parsed dictionary.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsInfo {
    major: u16,
    minor: u16,
    affix_groups: usize,
    rule_sets: usize,
    replacements: usize,
}

// ============================================================================
// WasmSpellChecker
// ============================================================================

/// Spell checker over one BDIC dictionary.
///
/// A dictionary that cannot be parsed accepts every word; `loadError`
/// reports why.
#[wasm_bindgen]
pub struct WasmSpellChecker {
    checker: SpellChecker,
}

#[wasm_bindgen]
impl WasmSpellChecker {
    /// Create a checker from the raw contents of a `.bdic` file.
    ///
    /// `max_suggestions` caps the suggestions collected per word.
    #[wasm_bindgen(constructor)]
    pub fn new(data: &[u8], max_suggestions: Option<usize>) -> WasmSpellChecker {
        let checker =
            SpellChecker::from_bytes(data).with_options(SpellOptions { max_suggestions });
        WasmSpellChecker { checker }
    }

    /// Check whether a word is correctly spelled.
    pub fn spell(&self, word: &str) -> bool {
        self.checker.spell(word, None)
    }

    /// Suggestions for a misspelled word, in discovery order. Empty for a
    /// correct word.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.checker.suggest(word)
    }

    /// Check a word and collect suggestions in one call.
    pub fn check(&self, word: &str) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.check_word(word))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Check every string in `words`; non-string entries count as misspelled.
    #[wasm_bindgen(js_name = "spellAll")]
    pub fn spell_all(&self, words: js_sys::Array) -> js_sys::Array {
        words
            .iter()
            .map(|value| {
                let ok = value.as_string().is_some_and(|word| self.spell(&word));
                JsValue::from_bool(ok)
            })
            .collect()
    }

    /// Header and table sizes of the dictionary, or `undefined` if it could
    /// not be parsed.
    pub fn info(&self) -> Result<JsValue, JsError> {
        match self.dictionary_info() {
            Some(info) => serde_wasm_bindgen::to_value(&info).map_err(|e| JsError::new(&e.to_string())),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Why the dictionary could not be parsed, or `undefined` if it is usable.
    #[wasm_bindgen(js_name = "loadError")]
    pub fn load_error(&self) -> Option<String> {
        self.checker.initialize().err().map(|e| e.to_string())
    }

    #[wasm_bindgen(js_name = "setMaxSuggestions")]
    pub fn set_max_suggestions(&mut self, max: Option<usize>) {
        self.checker.set_max_suggestions(max);
    }
}

impl WasmSpellChecker {
    fn check_word(&self, word: &str) -> JsCheck {
        let mut suggestions = Vec::new();
        let correct = self.checker.spell(word, Some(&mut suggestions));
        JsCheck {
            correct,
            suggestions,
        }
    }

    fn dictionary_info(&self) -> Option<JsInfo> {
        let dict = self.checker.initialize().ok()?;
        Some(JsInfo {
            major: dict.header().major,
            minor: dict.header().minor,
            affix_groups: dict.groups().len() - 1,
            rule_sets: dict.rule_sets().len(),
            replacements: dict.replace_rules().len(),
        })
    }
}
