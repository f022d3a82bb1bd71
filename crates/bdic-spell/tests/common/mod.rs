// Shared fixture: builds BDIC dictionaries in memory

#![allow(dead_code)]

use std::collections::BTreeMap;

use bdic_trie::format::SIGNATURE;

/// Assembles a BDIC buffer from affix groups, rule lines, replacement pairs
/// and words.
///
/// The trie encoder mixes all three node kinds: lookup nodes (4-byte
/// absolute entries at the root, 2-byte relative entries at other even
/// depths), wide list nodes at odd depths, and leaves carrying the rest of a
/// word as a literal.
#[derive(Debug, Default, Clone)]
pub struct DictionaryBuilder {
    groups: Vec<String>,
    rules: Vec<String>,
    replacements: Vec<String>,
    words: BTreeMap<Vec<u8>, Vec<u16>>,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an affix group. Groups get IDs 1, 2, ... in insertion order.
    pub fn group(mut self, flags: &str) -> Self {
        self.groups.push(flags.to_string());
        self
    }

    /// Add one line of the rule table, e.g. `"SFX A Y 1"`.
    pub fn rule(mut self, line: &str) -> Self {
        self.rules.push(line.to_string());
        self
    }

    pub fn replacement(mut self, key: &str, replacement: &str) -> Self {
        self.replacements.push(key.to_string());
        self.replacements.push(replacement.to_string());
        self
    }

    /// Add a word carrying the given affix group IDs.
    pub fn word(mut self, word: &str, affix_ids: &[u16]) -> Self {
        self.words.insert(word.as_bytes().to_vec(), affix_ids.to_vec());
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = vec![0u8; 32];

        let mut offsets = [0u32; 4];
        offsets[0] = out.len() as u32;
        push_token(&mut out, &format!("AF {}", self.groups.len()));
        for flags in &self.groups {
            push_token(&mut out, &format!("AF {flags}"));
        }
        offsets[1] = out.len() as u32;
        for line in &self.rules {
            push_token(&mut out, line);
        }
        offsets[2] = out.len() as u32;
        for token in &self.replacements {
            push_token(&mut out, token);
        }
        offsets[3] = out.len() as u32;

        let words: Vec<(&[u8], &[u16])> = self
            .words
            .iter()
            .map(|(word, ids)| (word.as_slice(), ids.as_slice()))
            .collect();
        let root = if words.is_empty() {
            let offset = out.len();
            out.extend_from_slice(&[0xC0, 0, 0]);
            offset
        } else {
            encode(&mut out, &words, 0)
        };

        out[0..4].copy_from_slice(&SIGNATURE.to_le_bytes());
        out[4..6].copy_from_slice(&3u16.to_le_bytes());
        out[6..8].copy_from_slice(&0u16.to_le_bytes());
        out[8..12].copy_from_slice(&16u32.to_le_bytes());
        out[12..16].copy_from_slice(&(root as u32).to_le_bytes());
        for (i, offset) in offsets.iter().enumerate() {
            let at = 16 + 4 * i;
            out[at..at + 4].copy_from_slice(&offset.to_le_bytes());
        }
        out
    }
}

fn push_token(out: &mut Vec<u8>, token: &str) {
    out.extend_from_slice(token.as_bytes());
    out.push(0);
}

/// Encode the subtrie for `words` (sorted, sharing their first `depth`
/// bytes) and return its offset. Children are always written after their
/// parent.
fn encode(out: &mut Vec<u8>, words: &[(&[u8], &[u16])], depth: usize) -> usize {
    if let [(word, ids)] = words {
        let offset = out.len();
        encode_leaf(out, word.get(depth..).unwrap_or(&[]), ids);
        return offset;
    }

    let mut branches: Vec<(u8, Vec<(&[u8], &[u16])>)> = Vec::new();
    for &(word, ids) in words {
        let key = word.get(depth).copied().unwrap_or(0);
        match branches.last_mut() {
            Some((last, group)) if *last == key => group.push((word, ids)),
            _ => branches.push((key, vec![(word, ids)])),
        }
    }

    if depth % 2 == 1 && branches.len() <= 15 {
        encode_list(out, branches, depth)
    } else {
        encode_lookup(out, branches, depth)
    }
}

fn encode_leaf(out: &mut Vec<u8>, tail: &[u8], ids: &[u16]) {
    let (inline, rest) = match ids.split_first() {
        Some((&first, rest)) => (first, rest),
        None => (0x1FFF, &[][..]),
    };
    let mut flags = (inline >> 8) as u8 & 0x1F;
    if !tail.is_empty() {
        flags |= 0x40;
    }
    if !rest.is_empty() {
        flags |= 0x20;
    }
    out.push(flags);
    out.push(inline as u8);
    if !tail.is_empty() {
        out.extend_from_slice(tail);
        out.push(0);
    }
    if !rest.is_empty() {
        for id in rest {
            out.extend_from_slice(&id.to_le_bytes());
        }
        out.extend_from_slice(&0xFFFFu16.to_le_bytes());
    }
}

fn encode_list(out: &mut Vec<u8>, branches: Vec<(u8, Vec<(&[u8], &[u16])>)>, depth: usize) -> usize {
    let offset = out.len();
    out.push(0xE0 | 0x10 | branches.len() as u8);
    let entries = out.len();
    out.resize(entries + 3 * branches.len(), 0);
    let children = out.len();

    for (i, (key, group)) in branches.into_iter().enumerate() {
        let child = encode(out, &group, depth + 1);
        let value = u16::try_from(child - children).expect("list child too far");
        let entry = entries + 3 * i;
        out[entry] = key;
        out[entry + 1..entry + 3].copy_from_slice(&value.to_le_bytes());
    }
    offset
}

fn encode_lookup(out: &mut Vec<u8>, branches: Vec<(u8, Vec<(&[u8], &[u16])>)>, depth: usize) -> usize {
    let offset = out.len();
    let has_nul = branches.first().is_some_and(|(key, _)| *key == 0);
    let keyed = &branches[usize::from(has_nul)..];
    let first = keyed.first().map_or(0, |(key, _)| *key);
    let size = keyed.last().map_or(0, |(key, _)| usize::from(key - first) + 1);
    let wide = depth == 0;
    let width = if wide { 4 } else { 2 };

    let mut header = 0xC0;
    if wide {
        header |= 0x02;
    }
    if has_nul {
        header |= 0x01;
    }
    out.extend_from_slice(&[header, first, size as u8]);
    let table = out.len();
    out.resize(table + width * (size + usize::from(has_nul)), 0);

    for (key, group) in branches {
        let child = encode(out, &group, depth + 1);
        let index = if key == 0 {
            0
        } else {
            usize::from(key - first) + usize::from(has_nul)
        };
        let slot = table + width * index;
        if wide {
            out[slot..slot + 4].copy_from_slice(&(child as u32).to_le_bytes());
        } else {
            let rel = u16::try_from(child - offset).expect("lookup child too far");
            out[slot..slot + 2].copy_from_slice(&rel.to_le_bytes());
        }
    }
    offset
}

/// A small English dictionary exercising every rule kind.
///
/// Groups: 1 = `A` (`-ing`, `-ning`), 2 = `S` (plurals), 3 = `AS`,
/// 4 = `U` (`un-`).
pub fn english() -> DictionaryBuilder {
    DictionaryBuilder::new()
        .group("A")
        .group("S")
        .group("AS")
        .group("U")
        .rule("SFX A Y 2")
        .rule("SFX A 0 ing .")
        .rule("SFX A 0 ning [aeiou]n")
        .rule("SFX S Y 3")
        .rule("SFX S 0 s [^sxzhy]")
        .rule("SFX S 0 es [sxzh]")
        .rule("SFX S y ies [^aeiou]y")
        .rule("PFX U Y 1")
        .rule("PFX U 0 un .")
        .replacement("ph", "f")
        .replacement("ei", "ie")
        .word("walk", &[3])
        .word("run", &[1])
        .word("box", &[2])
        .word("city", &[2])
        .word("fish", &[2])
        .word("fix", &[])
        .word("lock", &[4, 2])
        .word("believe", &[])
        .word("NASA", &[])
        .word("a", &[])
        .word("an", &[])
        .word("and", &[])
        .word("café", &[2])
}
