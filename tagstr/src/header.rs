use crate::encoding::Encoding;
use crate::error::TaggedStringError;

/// Bytes before the payload: 3 length bytes and the encoding byte.
pub const HEADER_LEN: usize = 4;
/// Largest payload the 3-byte length field can describe.
pub const MAX_PAYLOAD_LEN: usize = (1 << 24) - 1;

/// Encodes a header as `[length: u24 big-endian][encoding]`.
///
/// # Errors
///
/// Returns `TaggedStringError::LengthOverflow` if `length` exceeds
/// [`MAX_PAYLOAD_LEN`].
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn encode(length: usize, encoding: Encoding) -> Result<[u8; HEADER_LEN], TaggedStringError> {
    check_length(length)?;
    Ok([
        (length >> 16) as u8,
        (length >> 8) as u8,
        length as u8,
        encoding.into(),
    ])
}

/// Decodes the length and the raw encoding byte.
///
/// Returns `None` if `bytes` is shorter than a header.
pub(crate) fn decode(bytes: &[u8]) -> Option<(usize, u8)> {
    match bytes {
        [high, mid, low, encoding, ..] => Some((
            (usize::from(*high) << 16) | (usize::from(*mid) << 8) | usize::from(*low),
            *encoding,
        )),
        _ => None,
    }
}

pub(crate) fn check_length(length: usize) -> Result<(), TaggedStringError> {
    if length > MAX_PAYLOAD_LEN {
        return Err(TaggedStringError::LengthOverflow {
            length,
            max: MAX_PAYLOAD_LEN,
        });
    }
    Ok(())
}
