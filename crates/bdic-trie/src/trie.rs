// Root-to-leaf trie walk

use std::sync::Arc;

use bdic_core::FormatError;
use bdic_core::character::CharacterIterator;
use log::trace;

use crate::MAX_WALK_STEPS;
use crate::node::{Step, TrieNode};

/// Result of a successful walk: the word exists and carries these affix
/// group IDs (possibly none).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrieMatch {
    pub affix_ids: Vec<u16>,
}

/// The word trie of a BDIC dictionary.
///
/// Holds a shared handle on the dictionary bytes and the root offset. Walks
/// never mutate the buffer, so a `Trie` can be used from several threads.
#[derive(Clone)]
pub struct Trie {
    data: Arc<[u8]>,
    root: usize,
}

impl std::fmt::Debug for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.data.len())
            .field("root", &self.root)
            .finish()
    }
}

impl Trie {
    /// Wrap `data` with the root node at `root`.
    ///
    /// The root must lie inside the buffer; the node itself is only decoded
    /// on the first walk.
    pub fn new(data: Arc<[u8]>, root: usize) -> Result<Self, FormatError> {
        if root >= data.len() {
            return Err(FormatError::OutOfBounds {
                offset: root,
                width: 1,
                len: data.len(),
            });
        }
        Ok(Self { data, root })
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Walk the trie with `word` from the root.
    ///
    /// Returns `Ok(None)` when some node reports a miss. Decode failures
    /// (unknown node bytes, reads past the buffer) are returned as errors.
    /// A walk that keeps descending after the word is exhausted is abandoned
    /// as a miss.
    pub fn find(&self, word: &mut CharacterIterator<'_>) -> Result<Option<TrieMatch>, FormatError> {
        let limit = word.len() + MAX_WALK_STEPS;
        let mut offset = self.root;

        for _ in 0..limit {
            let mut node = TrieNode::at(&self.data, offset)?;
            match node.lookup(word)? {
                Step::Found => {
                    return Ok(Some(TrieMatch {
                        affix_ids: node.affix_ids().to_vec(),
                    }));
                }
                Step::Child(next) => offset = next,
                Step::Miss => return Ok(None),
            }
        }

        trace!("trie walk abandoned after {limit} steps at offset {offset}");
        Ok(None)
    }

    /// Walk the trie with a `&str`, treating decode failures as a miss.
    pub fn contains(&self, word: &str) -> bool {
        matches!(self.find(&mut CharacterIterator::new(word)), Ok(Some(_)))
    }
}
