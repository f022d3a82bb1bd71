// Trie node encodings: leaf, list and lookup nodes, plus the node factory

use bdic_core::FormatError;
use bdic_core::bytes::{read_u8, read_u16, read_u32};
use bdic_core::character::CharacterIterator;

/// Leaf header bit: a NUL-terminated literal follows the header.
const LEAF_STRING: u8 = 0x40;
/// Leaf header bit: a `0xFFFF`-terminated affix ID list follows.
const LEAF_AFFIX_LIST: u8 = 0x20;
/// Mask of the inline affix ID in the 16-bit leaf header.
const AFFIX_ID_MASK: u16 = 0x1FFF;
/// Inline affix ID meaning "no affix group".
pub const NO_AFFIX_ID: u16 = 0x1FFF;
/// Terminator of a leaf's affix ID list.
const AFFIX_LIST_END: u16 = 0xFFFF;

/// List header bit: values are 2 bytes wide instead of 1.
const LIST_WIDE: u8 = 0x10;
/// Mask of the entry count in the list header.
const LIST_COUNT: u8 = 0x0F;

/// Lookup header bit: table entries are 4-byte absolute offsets instead of
/// 2-byte offsets relative to the node.
const LOOKUP_WIDE: u8 = 0x02;
/// Lookup header bit: slot 0 of the table is reserved for NUL.
const LOOKUP_NUL: u8 = 0x01;
/// Bytes between a lookup node's offset and its table.
const LOOKUP_TABLE_START: usize = 3;

const LOOKUP_MASK: u8 = 0xFC;
const LOOKUP_TYPE: u8 = 0xC0;
const LIST_MASK: u8 = 0xE0;
const LIST_TYPE: u8 = 0xE0;
const LEAF_MASK: u8 = 0x80;
const LEAF_TYPE: u8 = 0x00;

/// Outcome of feeding a word to one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The word ends at this node.
    Found,
    /// Continue the walk at the node stored at this absolute offset.
    Child(usize),
    /// The word is not in the trie. There is no backtracking to siblings.
    Miss,
}

/// The three node encodings, distinguished by their first byte.
///
/// | Kind   | First byte | Mask   | Type   |
/// |--------|------------|--------|--------|
/// | Lookup | `110000xx` | `0xFC` | `0xC0` |
/// | List   | `111xxxxx` | `0xE0` | `0xE0` |
/// | Leaf   | `0xxxxxxx` | `0x80` | `0x00` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Leaf,
    List,
    Lookup,
}

impl NodeKind {
    /// Classify a node by its first byte. `None` for any other bit pattern.
    pub fn classify(byte: u8) -> Option<NodeKind> {
        if byte & LOOKUP_MASK == LOOKUP_TYPE {
            Some(NodeKind::Lookup)
        } else if byte & LIST_MASK == LIST_TYPE {
            Some(NodeKind::List)
        } else if byte & LEAF_MASK == LEAF_TYPE {
            Some(NodeKind::Leaf)
        } else {
            None
        }
    }
}

/// A trie node decoded at a fixed offset of the dictionary buffer.
///
/// Nodes are created per walk step and dropped right after. Only a leaf keeps
/// state: the affix IDs it collects while matching the end of the word.
#[derive(Debug)]
pub enum TrieNode<'a> {
    Leaf(LeafNode<'a>),
    List(ListNode<'a>),
    Lookup(LookupNode<'a>),
}

impl<'a> TrieNode<'a> {
    /// Decode the node starting at `offset`.
    ///
    /// Fails with `OutOfBounds` when `offset` is past the buffer and with
    /// `UnknownNode` when the first byte matches no encoding.
    pub fn at(data: &'a [u8], offset: usize) -> Result<Self, FormatError> {
        let byte = read_u8(data, offset)?;
        match NodeKind::classify(byte) {
            Some(NodeKind::Leaf) => Ok(TrieNode::Leaf(LeafNode {
                data,
                offset,
                affix_ids: Vec::new(),
            })),
            Some(NodeKind::List) => Ok(TrieNode::List(ListNode { data, offset })),
            Some(NodeKind::Lookup) => Ok(TrieNode::Lookup(LookupNode { data, offset })),
            None => Err(FormatError::UnknownNode { offset, byte }),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            TrieNode::Leaf(_) => NodeKind::Leaf,
            TrieNode::List(_) => NodeKind::List,
            TrieNode::Lookup(_) => NodeKind::Lookup,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            TrieNode::Leaf(n) => n.offset,
            TrieNode::List(n) => n.offset,
            TrieNode::Lookup(n) => n.offset,
        }
    }

    /// Consume bytes of `word` and report where the walk goes next.
    pub fn lookup(&mut self, word: &mut CharacterIterator<'_>) -> Result<Step, FormatError> {
        match self {
            TrieNode::Leaf(n) => n.lookup(word),
            TrieNode::List(n) => n.lookup(word),
            TrieNode::Lookup(n) => n.lookup(word),
        }
    }

    /// Affix group IDs collected by a matching leaf. Empty for inner nodes.
    pub fn affix_ids(&self) -> &[u16] {
        match self {
            TrieNode::Leaf(n) => &n.affix_ids,
            _ => &[],
        }
    }
}

/// Leaf node: the tail of one word and its affix groups.
///
/// ```text
/// header             2   0ABCCCCC CCCCCCCC
///                          A: literal follows, B: affix list follows,
///                          C: inline affix ID (0x1FFF = none)
/// [literal]          n   NUL-terminated remaining bytes of the word
/// [affix list]     2*m   little-endian IDs, terminated by 0xFFFF
/// ```
#[derive(Debug)]
pub struct LeafNode<'a> {
    data: &'a [u8],
    offset: usize,
    affix_ids: Vec<u16>,
}

impl LeafNode<'_> {
    fn lookup(&mut self, word: &mut CharacterIterator<'_>) -> Result<Step, FormatError> {
        self.affix_ids.clear();

        let flags = read_u8(self.data, self.offset)?;
        let low = read_u8(self.data, self.offset + 1)?;
        let inline_id = ((u16::from(flags) << 8) | u16::from(low)) & AFFIX_ID_MASK;
        let mut pos = self.offset + 2;

        if flags & LEAF_STRING != 0 {
            loop {
                let expected = read_u8(self.data, pos)?;
                pos += 1;
                if expected == 0 {
                    break;
                }
                if word.get_char() != expected {
                    return Ok(Step::Miss);
                }
            }
        }
        if word.get_char() != 0 {
            return Ok(Step::Miss);
        }

        if inline_id != NO_AFFIX_ID {
            self.affix_ids.push(inline_id);
        }
        if flags & LEAF_AFFIX_LIST != 0 {
            loop {
                let id = read_u16(self.data, pos)?;
                pos += 2;
                if id == AFFIX_LIST_END {
                    break;
                }
                self.affix_ids.push(id);
            }
        }
        Ok(Step::Found)
    }

    pub fn affix_ids(&self) -> &[u16] {
        &self.affix_ids
    }
}

/// List node: up to 15 (key, value) pairs scanned linearly.
///
/// ```text
/// header             1   111ABBBB   A: 2-byte values, B: entry count
/// entries  count*(1+w)   key byte, value (w = 1 or 2, little-endian)
/// ```
///
/// A matching entry's child lives `value` bytes past the end of the entries.
#[derive(Debug)]
pub struct ListNode<'a> {
    data: &'a [u8],
    offset: usize,
}

impl ListNode<'_> {
    fn lookup(&mut self, word: &mut CharacterIterator<'_>) -> Result<Step, FormatError> {
        let header = read_u8(self.data, self.offset)?;
        let width = if header & LIST_WIDE != 0 { 2 } else { 1 };
        let count = usize::from(header & LIST_COUNT);
        let entries = self.offset + 1;
        let children = entries + count * (1 + width);

        let key = word.get_char();
        for i in 0..count {
            let entry = entries + i * (1 + width);
            if read_u8(self.data, entry)? != key {
                continue;
            }
            let value = if width == 1 {
                usize::from(read_u8(self.data, entry + 1)?)
            } else {
                usize::from(read_u16(self.data, entry + 1)?)
            };
            let child = children + value;
            if child >= self.data.len() {
                return Err(FormatError::OutOfBounds {
                    offset: child,
                    width: 1,
                    len: self.data.len(),
                });
            }
            return Ok(Step::Child(child));
        }
        Ok(Step::Miss)
    }
}

/// Lookup node: a dense jump table indexed by byte value.
///
/// ```text
/// header             1   110000AB   A: 4-byte entries, B: NUL slot present
/// first_char         1   byte value of table index 0 (or 1 with a NUL slot)
/// table_size         1   number of non-NUL entries
/// [nul entry]      2|4
/// entries          2|4   4-byte: absolute offset, 2-byte: relative to node
/// ```
///
/// A zero entry marks an empty slot.
#[derive(Debug)]
pub struct LookupNode<'a> {
    data: &'a [u8],
    offset: usize,
}

impl LookupNode<'_> {
    fn lookup(&mut self, word: &mut CharacterIterator<'_>) -> Result<Step, FormatError> {
        let header = read_u8(self.data, self.offset)?;
        let first = read_u8(self.data, self.offset + 1)?;
        let size = usize::from(read_u8(self.data, self.offset + 2)?);
        let has_nul = header & LOOKUP_NUL != 0;

        let byte = word.get_char();
        let index = if byte == 0 {
            if !has_nul {
                return Ok(Step::Miss);
            }
            0
        } else {
            let Some(rel) = byte.checked_sub(first).map(usize::from) else {
                return Ok(Step::Miss);
            };
            if rel >= size {
                return Ok(Step::Miss);
            }
            rel + usize::from(has_nul)
        };

        let table = self.offset + LOOKUP_TABLE_START;
        let child = if header & LOOKUP_WIDE != 0 {
            read_u32(self.data, table + 4 * index)? as usize
        } else {
            match read_u16(self.data, table + 2 * index)? {
                0 => 0,
                rel => self.offset + usize::from(rel),
            }
        };

        if child == 0 {
            return Ok(Step::Miss);
        }
        if child >= self.data.len() {
            return Err(FormatError::OutOfBounds {
                offset: child,
                width: 1,
                len: self.data.len(),
            });
        }
        Ok(Step::Child(child))
    }
}
