// SpellChecker: lazy dictionary loading, lookup, stem search and suggestions

mod probe;

use std::sync::{Arc, OnceLock};

use bdic_core::character::utf16_prefix;
use log::warn;

use crate::dictionary::{Dictionary, DictionaryError};
use probe::{StemProbe, SuggestionCollector};

/// Spell check options.
#[derive(Debug, Clone, Default)]
pub struct SpellOptions {
    /// Stop collecting suggestions once this many were found in one call.
    /// `None` collects every candidate that validates.
    pub max_suggestions: Option<usize>,
}

/// Outcome of the one-time dictionary parse.
#[derive(Debug)]
enum DictionaryState {
    Ready(Dictionary),
    Failed(DictionaryError),
}

/// Spell checker over one BDIC dictionary.
///
/// The dictionary is parsed on the first call that needs it, exactly once.
/// If it cannot be parsed, the checker fails open: every word is reported
/// as correctly spelled, so a damaged dictionary never flags good text.
///
/// All per-call state lives on the stack of the call, so one checker can be
/// shared between threads and used for nested checks.
pub struct SpellChecker {
    data: Arc<[u8]>,
    state: OnceLock<DictionaryState>,
    options: SpellOptions,
}

impl std::fmt::Debug for SpellChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellChecker")
            .field("len", &self.data.len())
            .field("state", &self.state.get())
            .field("options", &self.options)
            .finish()
    }
}

impl SpellChecker {
    /// Create a checker over the given dictionary bytes. Nothing is parsed
    /// until the first check.
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            data: data.into(),
            state: OnceLock::new(),
            options: SpellOptions::default(),
        }
    }

    /// Create a checker over a copy of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::new(data)
    }

    pub fn with_options(mut self, options: SpellOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SpellOptions {
        &self.options
    }

    pub fn set_max_suggestions(&mut self, max: Option<usize>) {
        self.options.max_suggestions = max;
    }

    fn state(&self) -> &DictionaryState {
        self.state.get_or_init(|| match Dictionary::parse(Arc::clone(&self.data)) {
            Ok(dict) => DictionaryState::Ready(dict),
            Err(e) => {
                warn!("dictionary unusable, accepting every word: {e}");
                DictionaryState::Failed(e)
            }
        })
    }

    /// Parse the dictionary now (if not done yet) and return the outcome.
    pub fn initialize(&self) -> Result<&Dictionary, &DictionaryError> {
        match self.state() {
            DictionaryState::Ready(dict) => Ok(dict),
            DictionaryState::Failed(e) => Err(e),
        }
    }

    /// Check whether `word` is spelled correctly.
    ///
    /// A word is correct if it is in the word trie, or if an affix rule
    /// derives it from a stem that is in the trie under the rule's flag.
    ///
    /// If the word is not correct and `suggestions` is given, validated
    /// alternatives are appended to it in discovery order: the uppercase
    /// form, then replacement-rule candidates. The list may contain
    /// duplicates.
    ///
    /// A word containing `'\0'` is checked only up to the first NUL, which
    /// the dictionary format uses as its terminator.
    pub fn spell(&self, word: &str, suggestions: Option<&mut Vec<String>>) -> bool {
        let dict = match self.state() {
            DictionaryState::Ready(dict) => dict,
            DictionaryState::Failed(_) => return true,
        };
        if dict.find_word(word, None) {
            return true;
        }

        let found = StemProbe::run(dict, word);
        if !found {
            if let Some(out) = suggestions {
                let mut collector = SuggestionCollector::new(dict, out, self.options.max_suggestions);
                dict.get_suggestions(word, &mut collector);
            }
        }
        found
    }

    /// [`spell`](Self::spell) for UTF-16 input. An unpaired surrogate ends
    /// the word.
    pub fn spell_utf16(&self, word: &[u16], suggestions: Option<&mut Vec<String>>) -> bool {
        self.spell(&utf16_prefix(word), suggestions)
    }

    /// Suggestions for `word`; empty when the word is correct.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.spell(word, Some(&mut out));
        out
    }
}
