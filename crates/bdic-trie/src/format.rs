// BDIC binary format: fixed header layouts

use bdic_core::FormatError;
use bytemuck::{Pod, Zeroable};

/// `"BDic"` read as a little-endian 32-bit value.
pub const SIGNATURE: u32 = 0x6369_4442;

/// Size of the BDIC file header in bytes.
pub const HEADER_SIZE: usize = 16;

/// Size of the affix section header in bytes.
pub const AFFIX_HEADER_SIZE: usize = 16;

/// On-disk layout of the file header (all fields little-endian).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct RawHeader {
    signature: u32,
    major: u16,
    minor: u16,
    affix_offset: u32,
    trie_offset: u32,
}

/// On-disk layout of the affix section header: four region offsets.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct RawAffixHeader {
    groups: u32,
    rules: u32,
    replacements: u32,
    end: u32,
}

/// Parsed BDIC file header.
///
/// - bytes 0..4: signature (`"BDic"`)
/// - bytes 4..6: major version
/// - bytes 6..8: minor version
/// - bytes 8..12: offset of the affix section
/// - bytes 12..16: offset of the trie root node
///
/// Signature and versions are informational; readers do not reject files on
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryHeader {
    pub signature: u32,
    pub major: u16,
    pub minor: u16,
    pub affix_offset: usize,
    pub trie_offset: usize,
}

impl DictionaryHeader {
    /// Whether the header starts with the expected `"BDic"` signature.
    pub fn has_signature(&self) -> bool {
        self.signature == SIGNATURE
    }
}

/// Offsets of the four token regions in the affix section.
///
/// Each region runs from its own offset up to the next one: affix groups,
/// affix rules, replacement pairs, and then `end`, which closes the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffixHeader {
    pub groups: usize,
    pub rules: usize,
    pub replacements: usize,
    pub end: usize,
}

impl AffixHeader {
    /// Whether the regions are in order and end within a buffer of `len`
    /// bytes.
    pub fn is_well_formed(&self, len: usize) -> bool {
        self.groups <= self.rules
            && self.rules <= self.replacements
            && self.replacements <= self.end
            && self.end <= len
    }
}

/// Parse the 16-byte file header at the start of `data`.
pub fn parse_header(data: &[u8]) -> Result<DictionaryHeader, FormatError> {
    let bytes = data.get(..HEADER_SIZE).ok_or(FormatError::TooShort {
        expected: HEADER_SIZE,
        actual: data.len(),
    })?;
    let raw: RawHeader = bytemuck::pod_read_unaligned(bytes);

    Ok(DictionaryHeader {
        signature: u32::from_le(raw.signature),
        major: u16::from_le(raw.major),
        minor: u16::from_le(raw.minor),
        affix_offset: u32::from_le(raw.affix_offset) as usize,
        trie_offset: u32::from_le(raw.trie_offset) as usize,
    })
}

/// Parse the affix section header located at `offset`.
pub fn parse_affix_header(data: &[u8], offset: usize) -> Result<AffixHeader, FormatError> {
    let bytes = offset
        .checked_add(AFFIX_HEADER_SIZE)
        .and_then(|end| data.get(offset..end))
        .ok_or(FormatError::OutOfBounds {
            offset,
            width: AFFIX_HEADER_SIZE,
            len: data.len(),
        })?;
    let raw: RawAffixHeader = bytemuck::pod_read_unaligned(bytes);

    Ok(AffixHeader {
        groups: u32::from_le(raw.groups) as usize,
        rules: u32::from_le(raw.rules) as usize,
        replacements: u32::from_le(raw.replacements) as usize,
        end: u32::from_le(raw.end) as usize,
    })
}
