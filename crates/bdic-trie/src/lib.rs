//! BDIC trie decoder.
//!
//! A BDIC file stores its word list as a byte-encoded trie. Nodes are decoded
//! on demand at an offset and fed one UTF-8 byte of the word at a time.
//!
//! # Architecture
//!
//! - [`format`] -- fixed header layouts (file header, affix section header)
//! - [`node`] -- the three node encodings (leaf, list, lookup) and the node factory
//! - [`trie`] -- root-to-leaf walk returning the matched leaf's affix group IDs

pub mod format;
pub mod node;
pub mod trie;

pub use format::{AffixHeader, DictionaryHeader};
pub use node::{NodeKind, Step, TrieNode};
pub use trie::{Trie, TrieMatch};

/// Extra node visits allowed beyond one per input byte before a walk is
/// abandoned. Well-formed tries never need more than a couple; the limit only
/// stops cyclic offsets in damaged data.
pub const MAX_WALK_STEPS: usize = 8;
