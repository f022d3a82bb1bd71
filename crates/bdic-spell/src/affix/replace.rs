// Replacement rules for suggestion search

use bdic_core::Flow;

use crate::listener::RuleListener;

/// A `REP` pair: a literal substring that is commonly typed in place of
/// `replacement`.
///
/// Only suggestion search uses these; they never make a word correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceRule {
    key: String,
    replacement: String,
}

impl ReplaceRule {
    pub fn new(key: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            replacement: replacement.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// One candidate per occurrence of the key in `word`.
    ///
    /// Occurrences are found left to right without overlap, and each
    /// candidate replaces exactly one of them. An empty key yields nothing.
    pub fn candidates<'w>(&'w self, word: &'w str) -> impl Iterator<Item = String> + 'w {
        let matches = (!self.key.is_empty()).then(|| word.match_indices(self.key.as_str()));
        matches.into_iter().flatten().map(move |(index, _)| {
            let rest = &word[index + self.key.len()..];
            format!("{}{}{rest}", &word[..index], self.replacement)
        })
    }

    /// Offer every candidate to `listener` until it stops.
    pub fn apply(&self, word: &str, listener: &mut dyn RuleListener) -> Flow {
        for candidate in self.candidates(word) {
            if listener.handle_suggestion(&candidate).is_stop() {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}
