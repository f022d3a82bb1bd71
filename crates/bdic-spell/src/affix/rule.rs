// Prefix and suffix rules

use std::sync::OnceLock;

use bdic_core::Flow;
use log::warn;
use regex::Regex;

use crate::listener::RuleListener;

/// Which end of the word an affix rule works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

impl AffixKind {
    /// Map an affix command (`PFX`, `SFX`) to its kind.
    pub fn from_command(command: &str) -> Option<Self> {
        match command {
            "PFX" => Some(AffixKind::Prefix),
            "SFX" => Some(AffixKind::Suffix),
            _ => None,
        }
    }
}

/// One affix rule line: `PFX|SFX flag strip affix [condition]`.
///
/// A rule describes how a derived word is built from a stem: remove `strip`
/// from one end of the stem, then add `affix` there. Checking runs the rule
/// backwards: a word ending (or starting) with `affix` loses it, gets `strip`
/// back, and the result is a candidate stem, accepted only if it satisfies
/// `condition`.
///
/// The condition is a regular expression anchored at the affix end of the
/// stem. It is compiled the first time the rule is applied and cached.
#[derive(Debug)]
pub struct AffixRule {
    kind: AffixKind,
    flag: String,
    strip: String,
    affix: String,
    condition: String,
    expression: OnceLock<Option<Regex>>,
}

impl AffixRule {
    /// Build a rule from raw field values. A `strip` of `"0"` and a
    /// `condition` of `"."` mean "none".
    pub fn new(kind: AffixKind, flag: &str, strip: &str, affix: &str, condition: &str) -> Self {
        Self {
            kind,
            flag: flag.to_string(),
            strip: if strip == "0" { String::new() } else { strip.to_string() },
            affix: affix.to_string(),
            condition: if condition == "." { String::new() } else { condition.to_string() },
            expression: OnceLock::new(),
        }
    }

    /// Build a rule from a whitespace-split rule line. Needs at least the
    /// command, flag, strip and affix fields.
    pub fn from_fields(kind: AffixKind, fields: &[&str]) -> Option<Self> {
        match fields {
            [_, flag, strip, affix] => Some(Self::new(kind, flag, strip, affix, "")),
            [_, flag, strip, affix, condition, ..] => {
                Some(Self::new(kind, flag, strip, affix, condition))
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> AffixKind {
        self.kind
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn strip(&self) -> &str {
        &self.strip
    }

    pub fn affix(&self) -> &str {
        &self.affix
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    /// Undo this rule on `word`: the stem it could have been derived from.
    ///
    /// `None` when the word does not carry the affix or the stem would be
    /// empty.
    pub fn stem(&self, word: &str) -> Option<String> {
        if word.len() <= self.affix.len() {
            return None;
        }
        let stem = match self.kind {
            AffixKind::Prefix => {
                let rest = word.strip_prefix(self.affix.as_str())?;
                format!("{}{rest}", self.strip)
            }
            AffixKind::Suffix => {
                let rest = word.strip_suffix(self.affix.as_str())?;
                format!("{rest}{}", self.strip)
            }
        };
        (!stem.is_empty()).then_some(stem)
    }

    /// Whether `stem` satisfies the rule's condition. Always true without
    /// one; always false if the condition is not a valid expression.
    pub fn matches_condition(&self, stem: &str) -> bool {
        if self.condition.is_empty() {
            return true;
        }
        self.expression
            .get_or_init(|| self.compile())
            .as_ref()
            .is_some_and(|re| re.is_match(stem))
    }

    fn compile(&self) -> Option<Regex> {
        let pattern = match self.kind {
            AffixKind::Prefix => format!("^(?:{})", self.condition),
            AffixKind::Suffix => format!("(?:{})$", self.condition),
        };
        match Regex::new(&pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(
                    "affix rule {} condition {:?} never matches: {e}",
                    self.flag, self.condition
                );
                None
            }
        }
    }

    /// Apply the rule to `word` and report a resulting stem to `listener`.
    ///
    /// Returns the listener's answer, or `Continue` if the rule does not
    /// fire.
    pub fn apply(&self, word: &str, listener: &mut dyn RuleListener) -> Flow {
        match self.stem(word) {
            Some(stem) if self.matches_condition(&stem) => listener.handle_match(&stem, &self.flag),
            _ => Flow::Continue,
        }
    }
}
