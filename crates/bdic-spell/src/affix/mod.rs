// Affix rules
//
//   PFX/SFX rules   strip/add a prefix or suffix to recover a stem (rule.rs)
//   rule sets       rules grouped under one flag (rule_set.rs)
//   REP rules       literal replacements used for suggestions (replace.rs)

pub mod replace;
pub mod rule;
pub mod rule_set;

pub use replace::ReplaceRule;
pub use rule::{AffixKind, AffixRule};
pub use rule_set::RuleSet;
