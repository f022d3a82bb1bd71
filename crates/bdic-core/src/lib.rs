//! Shared building blocks for reading BDIC spellchecker dictionaries.
//!
//! - [`bytes`] -- little-endian integer reads and NUL-delimited token scanning
//! - [`character`] -- UTF-16/UTF-8 transcoding and the byte iterator used to walk the trie
//! - [`enums`] -- the `Flow` continue/stop signal shared by the rule engine
//! - [`error`] -- `FormatError`, raised for corrupt dictionary data

pub mod bytes;
pub mod character;
pub mod enums;
pub mod error;

pub use enums::Flow;
pub use error::FormatError;
