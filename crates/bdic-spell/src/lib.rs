//! Spell checking over BDIC dictionaries.
//!
//! A [`SpellChecker`] owns the dictionary bytes, parses the affix section on
//! first use, and answers whether a word is spelled correctly, optionally
//! collecting suggestions.
//!
//! - [`affix`] -- prefix/suffix rules, rule sets and replacement rules
//! - [`dictionary`] -- affix section parsing, rule application and suggestion candidates
//! - [`listener`] -- the callback protocol between the dictionary and its callers
//! - [`checker`] -- the `SpellChecker` front end

pub mod affix;
pub mod checker;
pub mod dictionary;
pub mod listener;

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod fixture;

pub use bdic_core::Flow;
pub use checker::{SpellChecker, SpellOptions};
pub use dictionary::{Dictionary, DictionaryError};
pub use listener::RuleListener;
