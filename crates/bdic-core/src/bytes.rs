// Little-endian integer reads and NUL-delimited token scanning

use crate::FormatError;

/// Borrow `width` bytes at `offset`, or fail with `OutOfBounds`.
#[inline]
fn window(data: &[u8], offset: usize, width: usize) -> Result<&[u8], FormatError> {
    offset
        .checked_add(width)
        .and_then(|end| data.get(offset..end))
        .ok_or(FormatError::OutOfBounds {
            offset,
            width,
            len: data.len(),
        })
}

/// Read a byte at `offset`.
#[inline]
pub fn read_u8(data: &[u8], offset: usize) -> Result<u8, FormatError> {
    window(data, offset, 1).map(|b| b[0])
}

/// Read a little-endian 16-bit value at `offset`.
#[inline]
pub fn read_u16(data: &[u8], offset: usize) -> Result<u16, FormatError> {
    window(data, offset, 2).map(|b| u16::from_le_bytes([b[0], b[1]]))
}

/// Read a little-endian 32-bit value at `offset`.
#[inline]
pub fn read_u32(data: &[u8], offset: usize) -> Result<u32, FormatError> {
    window(data, offset, 4).map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

/// Read the NUL-terminated UTF-8 strings stored in `data[head..tail]`.
///
/// Empty runs (two NULs in a row) produce no token, and a run that is still
/// open when `tail` is reached is dropped. Decoding is lenient: on the first
/// malformed byte (a stray continuation byte, a missing continuation byte, a
/// 5- or 6-byte lead byte, or a sequence that does not decode to a Unicode
/// scalar value) the scan stops and the tokens read so far are returned.
///
/// Only an inverted or out-of-range window is an error.
pub fn read_tokens(data: &[u8], head: usize, tail: usize) -> Result<Vec<String>, FormatError> {
    if head > tail || tail > data.len() {
        return Err(FormatError::OutOfBounds {
            offset: head,
            width: tail.saturating_sub(head),
            len: data.len(),
        });
    }

    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut code: u32 = 0;
    let mut pending: u8 = 0;

    for &byte in &data[head..tail] {
        if byte == 0 {
            if !token.is_empty() {
                tokens.push(std::mem::take(&mut token));
            }
            code = 0;
            pending = 0;
        } else if pending == 0 {
            match byte {
                0x01..=0x7F => token.push(char::from(byte)),
                0xC0..=0xDF => {
                    code = u32::from(byte & 0x1F);
                    pending = 1;
                }
                0xE0..=0xEF => {
                    code = u32::from(byte & 0x0F);
                    pending = 2;
                }
                0xF0..=0xF7 => {
                    code = u32::from(byte & 0x07);
                    pending = 3;
                }
                _ => return Ok(tokens),
            }
        } else if byte & 0xC0 != 0x80 {
            return Ok(tokens);
        } else {
            code = (code << 6) | u32::from(byte & 0x3F);
            pending -= 1;
            if pending == 0 {
                match char::from_u32(code) {
                    Some(c) => token.push(c),
                    None => return Ok(tokens),
                }
            }
        }
    }

    Ok(tokens)
}
