// UTF-16 to UTF-8 transcoding and the byte iterator that drives trie lookups

use std::borrow::Cow;

/// Decode UTF-16 code units into a `String`, stopping at the first unpaired
/// surrogate.
///
/// Everything before the bad unit is kept. This is the lenient policy used for
/// words handed over by UTF-16 hosts: a damaged word is checked as far as it
/// can be decoded instead of being rejected.
pub fn utf16_prefix(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .map_while(Result::ok)
        .collect()
}

/// Byte-at-a-time view of a word in UTF-8, as consumed by trie nodes.
///
/// The trie stores words as UTF-8 byte strings terminated by NUL, so the
/// iterator yields `0` once the word is exhausted, and keeps yielding `0` on
/// every further call.
#[derive(Debug, Clone)]
pub struct CharacterIterator<'a> {
    data: Cow<'a, [u8]>,
    head: usize,
}

impl<'a> CharacterIterator<'a> {
    /// Iterate over the UTF-8 bytes of `word` without copying.
    ///
    /// `word` may contain `'\0'`. The trie reads that byte as the end of the
    /// word, so lookups only see the part before the first NUL.
    pub fn new(word: &'a str) -> Self {
        Self {
            data: Cow::Borrowed(word.as_bytes()),
            head: 0,
        }
    }

    /// Transcode UTF-16 code units to UTF-8 up front.
    ///
    /// Surrogate pairs become one 4-byte sequence. An unpaired surrogate ends
    /// the conversion; the bytes produced so far are kept.
    pub fn from_utf16(units: &[u16]) -> CharacterIterator<'static> {
        CharacterIterator {
            data: Cow::Owned(utf16_prefix(units).into_bytes()),
            head: 0,
        }
    }

    /// Return the next byte of the word, or `0` at the end.
    #[inline]
    pub fn get_char(&mut self) -> u8 {
        match self.data.get(self.head) {
            Some(&byte) => {
                self.head += 1;
                byte
            }
            None => 0,
        }
    }

    /// Number of UTF-8 bytes in the word.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The full UTF-8 byte sequence, independent of the cursor.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Rewind the cursor to the first byte.
    pub fn reset(&mut self) {
        self.head = 0;
    }
}
