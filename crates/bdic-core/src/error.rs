// Format errors raised while decoding BDIC data

/// Error type for corrupt or truncated dictionary data.
///
/// A failed search is not an error: trie lookups report "no match" through
/// their own return values. `FormatError` is reserved for data that cannot
/// be decoded at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("read of {width} bytes at offset {offset} exceeds buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },
    #[error("unrecognized trie node byte {byte:#04x} at offset {offset}")]
    UnknownNode { offset: usize, byte: u8 },
    #[error("data too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
}
