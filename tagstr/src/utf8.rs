use alloc::vec::Vec;

use crate::error::TaggedStringError;

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// Decodes the UTF-8 sequence starting at `*offset` and advances `offset`
/// past it.
///
/// The lead byte selects the sequence length: `0xxxxxxx` is one byte,
/// `110xxxxx` two, `1110xxxx` three and `11110xxx` four. Payload bits of the
/// lead and `10xxxxxx` continuation bytes are concatenated into the
/// codepoint.
///
/// ```
/// # use tagstr::decode_utf8;
/// let bytes = "aé€😀".as_bytes();
/// let mut offset = 0;
/// assert_eq!(decode_utf8(bytes, &mut offset), Ok(0x61));
/// assert_eq!(decode_utf8(bytes, &mut offset), Ok(0xE9));
/// assert_eq!(decode_utf8(bytes, &mut offset), Ok(0x20AC));
/// assert_eq!(decode_utf8(bytes, &mut offset), Ok(0x1F600));
/// assert_eq!(offset, bytes.len());
/// ```
///
/// # Errors
///
/// Returns `TaggedStringError::InvalidUtf8` carrying the lead byte's offset
/// when the sequence is malformed: a stray continuation or invalid lead byte,
/// a truncated sequence, a bad continuation byte, an overlong form, a
/// surrogate, or a value above [`MAX_CODEPOINT`]. `offset` is left unchanged
/// on error, also when it already points past the end of `bytes`.
pub fn decode_utf8(bytes: &[u8], offset: &mut usize) -> Result<u32, TaggedStringError> {
    let start = *offset;
    let invalid = TaggedStringError::InvalidUtf8 { offset: start };

    let lead = *bytes.get(start).ok_or(invalid.clone())?;
    let (width, lead_bits, min) = match lead {
        0x00..=0x7F => {
            *offset = start + 1;
            return Ok(u32::from(lead));
        }
        0xC0..=0xDF => (2, lead & 0x1F, 0x80),
        0xE0..=0xEF => (3, lead & 0x0F, 0x800),
        0xF0..=0xF7 => (4, lead & 0x07, 0x1_0000),
        _ => return Err(invalid),
    };

    let continuation = bytes
        .get(start + 1..start + width)
        .ok_or(invalid.clone())?;
    let mut codepoint = u32::from(lead_bits);
    for &byte in continuation {
        if byte & 0xC0 != 0x80 {
            return Err(invalid);
        }
        codepoint = (codepoint << 6) | u32::from(byte & 0x3F);
    }

    if codepoint < min || codepoint > MAX_CODEPOINT || is_surrogate(codepoint) {
        return Err(invalid);
    }

    *offset = start + width;
    Ok(codepoint)
}

/// Number of bytes UTF-8 needs for `codepoint`.
#[must_use]
pub fn utf8_width(codepoint: u32) -> usize {
    if codepoint < 0x80 {
        1
    } else if codepoint < 0x800 {
        2
    } else if codepoint < 0x1_0000 {
        3
    } else {
        4
    }
}

/// Appends the UTF-8 form of `codepoint` to `out`.
///
/// Callers reserve the space up front; see [`utf8_width`].
#[allow(clippy::cast_possible_truncation)]
pub fn encode_utf8_codepoint(codepoint: u32, out: &mut Vec<u8>) {
    match utf8_width(codepoint) {
        1 => out.push(codepoint as u8),
        2 => out.extend_from_slice(&[
            0xC0 | (codepoint >> 6) as u8,
            0x80 | (codepoint & 0x3F) as u8,
        ]),
        3 => out.extend_from_slice(&[
            0xE0 | (codepoint >> 12) as u8,
            0x80 | ((codepoint >> 6) & 0x3F) as u8,
            0x80 | (codepoint & 0x3F) as u8,
        ]),
        _ => out.extend_from_slice(&[
            0xF0 | (codepoint >> 18) as u8,
            0x80 | ((codepoint >> 12) & 0x3F) as u8,
            0x80 | ((codepoint >> 6) & 0x3F) as u8,
            0x80 | (codepoint & 0x3F) as u8,
        ]),
    }
}

pub(crate) fn is_surrogate(codepoint: u32) -> bool {
    (0xD800..=0xDFFF).contains(&codepoint)
}
