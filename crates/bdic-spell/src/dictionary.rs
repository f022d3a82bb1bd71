// Dictionary: BDIC header, affix section and word trie
//
// The affix section is a header of four offsets followed by three token
// regions (NUL-terminated UTF-8 strings):
//
//   groups        "AF <count>", then one "AF <flags>" per affix group
//   rules         "PFX|SFX <flag> <cross> <count>" headers and rule lines
//   replacements  key, replacement, key, replacement, ...

use std::sync::Arc;

use bdic_core::bytes::read_tokens;
use bdic_core::character::CharacterIterator;
use bdic_core::{Flow, FormatError};
use bdic_trie::format::{self, AffixHeader, DictionaryHeader};
use bdic_trie::Trie;
use hashbrown::HashMap;
use log::{debug, info, trace, warn};

use crate::affix::{AffixKind, AffixRule, ReplaceRule, RuleSet};
use crate::listener::RuleListener;

/// Error type for dictionaries that cannot be opened.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictionaryError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("affix section offset {offset} is outside the {len}-byte dictionary")]
    AffixOffset { offset: usize, len: usize },

    #[error("trie root offset {offset} is outside the {len}-byte dictionary")]
    TrieRoot { offset: usize, len: usize },

    #[error("affix section regions {header:?} are out of order or exceed {len} bytes")]
    AffixRegions { header: AffixHeader, len: usize },

    #[error("malformed affix rule: {0:?}")]
    MalformedRule(String),
}

/// A parsed BDIC dictionary.
///
/// Affix groups, rule sets and replacement rules are decoded once when the
/// dictionary is opened; the word trie is decoded lazily during each lookup.
#[derive(Debug)]
pub struct Dictionary {
    header: DictionaryHeader,
    trie: Trie,
    /// Flag strings indexed by affix group ID. Index 0 is reserved and empty.
    groups: Vec<String>,
    rule_sets: Vec<RuleSet>,
    replace_rules: Vec<ReplaceRule>,
}

impl Dictionary {
    /// Parse the header and affix section of `data`.
    pub fn parse(data: Arc<[u8]>) -> Result<Self, DictionaryError> {
        let len = data.len();
        let header = format::parse_header(&data)?;
        if !header.has_signature() {
            warn!("unexpected BDIC signature {:#010x}", header.signature);
        }
        if header.affix_offset >= len {
            return Err(DictionaryError::AffixOffset {
                offset: header.affix_offset,
                len,
            });
        }
        if header.trie_offset >= len {
            return Err(DictionaryError::TrieRoot {
                offset: header.trie_offset,
                len,
            });
        }

        let affix = format::parse_affix_header(&data, header.affix_offset)?;
        if !affix.is_well_formed(len) {
            return Err(DictionaryError::AffixRegions { header: affix, len });
        }

        let groups = parse_groups(&read_tokens(&data, affix.groups, affix.rules)?);
        let rule_sets = parse_rules(&read_tokens(&data, affix.rules, affix.replacements)?)?;
        let replace_rules = parse_replacements(read_tokens(&data, affix.replacements, affix.end)?);
        let trie = Trie::new(data, header.trie_offset)?;

        info!(
            "opened BDIC {}.{}: {} affix groups, {} rule sets, {} replacements",
            header.major,
            header.minor,
            groups.len() - 1,
            rule_sets.len(),
            replace_rules.len()
        );

        Ok(Self {
            header,
            trie,
            groups,
            rule_sets,
            replace_rules,
        })
    }

    pub fn header(&self) -> &DictionaryHeader {
        &self.header
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Affix group flag strings, indexed by group ID (index 0 is empty).
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn rule_sets(&self) -> &[RuleSet] {
        &self.rule_sets
    }

    pub fn replace_rules(&self) -> &[ReplaceRule] {
        &self.replace_rules
    }

    /// Look `word` up in the trie.
    ///
    /// Without a flag, any match counts. With a flag, the matched word must
    /// belong to an affix group containing it. Damaged trie data reads as a
    /// miss.
    pub fn find_word(&self, word: &str, flag: Option<&str>) -> bool {
        match self.trie.find(&mut CharacterIterator::new(word)) {
            Ok(Some(found)) => flag.is_none_or(|flag| self.find_rule(&found.affix_ids, flag)),
            Ok(None) => false,
            Err(e) => {
                debug!("lookup of {word:?} failed: {e}");
                false
            }
        }
    }

    /// Whether any of the affix groups `affix_ids` contains `flag`.
    ///
    /// IDs outside the group table never match.
    pub fn find_rule(&self, affix_ids: &[u16], flag: &str) -> bool {
        affix_ids
            .iter()
            .any(|&id| match self.groups.get(usize::from(id)) {
                Some(group) => group.contains(flag),
                None => {
                    debug!("affix group {id} out of range ({} groups)", self.groups.len());
                    false
                }
            })
    }

    /// Run every rule set over `word`, reporting stems to `listener`.
    pub fn apply_rules(&self, word: &str, listener: &mut dyn RuleListener) -> Flow {
        for set in &self.rule_sets {
            if set.apply_rules(word, listener).is_stop() {
                trace!("rule application for {word:?} stopped in set {}", set.flag());
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    /// Offer suggestion candidates for `word` to `listener`: the uppercase
    /// form first, then one candidate per replacement rule occurrence.
    pub fn get_suggestions(&self, word: &str, listener: &mut dyn RuleListener) -> Flow {
        if listener.handle_suggestion(&word.to_uppercase()).is_stop() {
            return Flow::Stop;
        }
        for rule in &self.replace_rules {
            if rule.apply(word, listener).is_stop() {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}

/// Decode the affix group table.
///
/// The first token is the `AF <count>` header and becomes the reserved empty
/// group 0. Parsing stops at the first token that is not `AF <flags>`,
/// keeping the groups read so far.
fn parse_groups(tokens: &[String]) -> Vec<String> {
    let mut groups = vec![String::new()];
    for token in tokens.iter().skip(1) {
        let mut parts = token.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("AF"), Some(flags), None) => groups.push(flags.to_string()),
            _ => {
                warn!(
                    "ignoring affix groups from {token:?} on ({} read)",
                    groups.len() - 1
                );
                break;
            }
        }
    }
    groups
}

/// Decode the affix rule table into rule sets, in first-seen flag order.
///
/// The first line seen for a flag is the set's header; later lines are its
/// rules.
fn parse_rules(tokens: &[String]) -> Result<Vec<RuleSet>, DictionaryError> {
    let mut rule_sets: Vec<RuleSet> = Vec::new();
    let mut by_flag: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        let fields: Vec<&str> = token.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(DictionaryError::MalformedRule(token.clone()));
        }
        let (command, flag) = (fields[0], fields[1]);

        let Some(&index) = by_flag.get(flag) else {
            by_flag.insert(flag, rule_sets.len());
            rule_sets.push(RuleSet::from_header(&fields));
            continue;
        };

        match AffixKind::from_command(command).and_then(|kind| AffixRule::from_fields(kind, &fields)) {
            Some(rule) => rule_sets[index].push(rule),
            None => debug!("ignoring affix line {token:?}"),
        }
    }

    for set in &rule_sets {
        if set.rules().len() != set.declared_count() {
            debug!(
                "rule set {} declares {} rules, has {}",
                set.flag(),
                set.declared_count(),
                set.rules().len()
            );
        }
    }
    Ok(rule_sets)
}

/// Pair up the replacement table. An odd trailing token is dropped.
fn parse_replacements(tokens: Vec<String>) -> Vec<ReplaceRule> {
    if tokens.len() % 2 != 0 {
        debug!("dropping unpaired replacement {:?}", tokens.last());
    }
    let mut tokens = tokens.into_iter();
    let mut rules = Vec::new();
    while let (Some(key), Some(replacement)) = (tokens.next(), tokens.next()) {
        rules.push(ReplaceRule::new(key, replacement));
    }
    rules
}
