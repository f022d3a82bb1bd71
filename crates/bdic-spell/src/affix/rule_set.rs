// Rule sets: all affix rules sharing one flag

use bdic_core::Flow;

use crate::affix::rule::AffixRule;
use crate::listener::RuleListener;

/// The rules declared under one affix flag.
///
/// A set is introduced by a header line such as `SFX A Y 2` (command, flag,
/// cross-product marker, rule count), followed by its rule lines.
///
/// `cross_product` records whether the set may combine with a rule of the
/// opposite kind. It is kept for inspection only: stem search applies one
/// rule at a time and never consults it.
#[derive(Debug)]
pub struct RuleSet {
    flag: String,
    cross_product: bool,
    count: usize,
    rules: Vec<AffixRule>,
}

impl RuleSet {
    pub fn new(flag: &str, cross_product: bool, count: usize) -> Self {
        Self {
            flag: flag.to_string(),
            cross_product,
            count,
            rules: Vec::with_capacity(count.min(256)),
        }
    }

    /// Build an empty set from its whitespace-split header line. A missing or
    /// unparsable count reads as zero.
    pub fn from_header(fields: &[&str]) -> Self {
        let flag = fields.get(1).copied().unwrap_or_default();
        let cross_product = fields.get(2) == Some(&"Y");
        let count = fields.get(3).and_then(|c| c.parse().ok()).unwrap_or(0);
        Self::new(flag, cross_product, count)
    }

    pub fn push(&mut self, rule: AffixRule) {
        self.rules.push(rule);
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn cross_product(&self) -> bool {
        self.cross_product
    }

    /// Rule count declared by the header line.
    pub fn declared_count(&self) -> usize {
        self.count
    }

    pub fn rules(&self) -> &[AffixRule] {
        &self.rules
    }

    /// Apply every rule to `word`, last-declared first, until the listener
    /// stops.
    pub fn apply_rules(&self, word: &str, listener: &mut dyn RuleListener) -> Flow {
        for rule in self.rules.iter().rev() {
            if rule.apply(word, listener).is_stop() {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}
