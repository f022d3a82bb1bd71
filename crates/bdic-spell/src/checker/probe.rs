// Per-call listeners: stem validation and suggestion collection

use bdic_core::Flow;
use log::trace;

use crate::dictionary::Dictionary;
use crate::listener::RuleListener;

/// Looks up every stem the affix rules produce and stops at the first one
/// that exists with the producing rule's flag.
pub(crate) struct StemProbe<'d> {
    dict: &'d Dictionary,
    found: bool,
}

impl<'d> StemProbe<'d> {
    /// Whether some affix rule derives `word` from a stem in the dictionary.
    pub(crate) fn run(dict: &'d Dictionary, word: &str) -> bool {
        let mut probe = Self { dict, found: false };
        dict.apply_rules(word, &mut probe);
        probe.found
    }
}

impl RuleListener for StemProbe<'_> {
    fn handle_match(&mut self, stem: &str, flag: &str) -> Flow {
        self.found = self.dict.find_word(stem, Some(flag));
        if self.found {
            trace!("stem {stem:?} accepted via flag {flag}");
        }
        Flow::continue_if(!self.found)
    }
}

/// Whether `word` is in the dictionary, directly or through an affix rule.
pub(crate) fn is_known(dict: &Dictionary, word: &str) -> bool {
    dict.find_word(word, None) || StemProbe::run(dict, word)
}

/// Validates suggestion candidates and appends the valid ones to a sink.
pub(crate) struct SuggestionCollector<'d, 's> {
    dict: &'d Dictionary,
    out: &'s mut Vec<String>,
    limit: Option<usize>,
    collected: usize,
}

impl<'d, 's> SuggestionCollector<'d, 's> {
    pub(crate) fn new(dict: &'d Dictionary, out: &'s mut Vec<String>, limit: Option<usize>) -> Self {
        Self {
            dict,
            out,
            limit,
            collected: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|max| self.collected >= max)
    }
}

impl RuleListener for SuggestionCollector<'_, '_> {
    fn handle_match(&mut self, _stem: &str, _flag: &str) -> Flow {
        Flow::Continue
    }

    fn handle_suggestion(&mut self, candidate: &str) -> Flow {
        if self.is_full() {
            return Flow::Stop;
        }
        if is_known(self.dict, candidate) {
            self.out.push(candidate.to_string());
            self.collected += 1;
        }
        Flow::continue_if(!self.is_full())
    }
}
