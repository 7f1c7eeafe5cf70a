use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::str::FromStr;

use crate::encoding::Encoding;
use crate::error::TaggedStringError;
use crate::header::{self, HEADER_LEN};
use crate::kmp;
use crate::utf8::{decode_utf8, encode_utf8_codepoint, utf8_width};

const TERMINATOR_LEN: usize = 1;

/// An owned string buffer tagged with its encoding
///
/// Buffer layout: [length: u24 big-endian][encoding: u8][payload][0x00].
/// The terminator follows the payload for every encoding and is not counted
/// in the length.
///
/// Equality compares the whole buffer, so strings with different encodings
/// are never equal even when they spell the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedString {
    buf: Vec<u8>,
}

fn alloc_buffer(bytes: usize) -> Result<Vec<u8>, TaggedStringError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(bytes)
        .map_err(|_| TaggedStringError::AllocationFailed { bytes })?;
    Ok(buffer)
}

#[allow(clippy::indexing_slicing)] // chunks_exact yields 4-byte chunks
fn utf32_units(payload: &[u8]) -> impl Iterator<Item = u32> + '_ {
    payload
        .chunks_exact(4)
        .map(|unit| u32::from_le_bytes([unit[0], unit[1], unit[2], unit[3]]))
}

fn validate(payload: &[u8], encoding: Encoding) -> Result<(), TaggedStringError> {
    match encoding {
        Encoding::Ascii => match payload.iter().position(|byte| !byte.is_ascii()) {
            Some(offset) => Err(TaggedStringError::InvalidAscii { offset }),
            None => Ok(()),
        },
        Encoding::Utf8 => {
            let mut offset = 0;
            while offset < payload.len() {
                decode_utf8(payload, &mut offset)?;
            }
            Ok(())
        }
        Encoding::Utf32 => {
            if payload.len() % 4 != 0 {
                return Err(TaggedStringError::MisalignedUtf32 {
                    length: payload.len(),
                });
            }
            for (index, value) in utf32_units(payload).enumerate() {
                if char::from_u32(value).is_none() {
                    return Err(TaggedStringError::InvalidCodepoint {
                        offset: index * 4,
                        value,
                    });
                }
            }
            Ok(())
        }
    }
}

impl TaggedString {
    /// Copies `bytes` into a new string with the given encoding.
    ///
    /// # Errors
    ///
    /// - `TaggedStringError::LengthOverflow` if `bytes` is longer than
    ///   [`MAX_PAYLOAD_LEN`](crate::MAX_PAYLOAD_LEN)
    /// - `TaggedStringError::InvalidAscii`, `InvalidUtf8`, `MisalignedUtf32`
    ///   or `InvalidCodepoint` if `bytes` is not valid in `encoding`
    /// - `TaggedStringError::AllocationFailed` if the buffer cannot be allocated
    pub fn new(bytes: &[u8], encoding: Encoding) -> Result<Self, TaggedStringError> {
        header::check_length(bytes.len())?;
        validate(bytes, encoding)?;
        Self::from_parts(encoding, bytes.len(), |buf| buf.extend_from_slice(bytes))
    }

    /// Creates an ASCII string.
    ///
    /// # Errors
    ///
    /// See [`TaggedString::new`].
    pub fn ascii(bytes: &[u8]) -> Result<Self, TaggedStringError> {
        Self::new(bytes, Encoding::Ascii)
    }

    /// Creates a UTF-8 string.
    ///
    /// # Errors
    ///
    /// See [`TaggedString::new`].
    pub fn utf8(bytes: &[u8]) -> Result<Self, TaggedStringError> {
        Self::new(bytes, Encoding::Utf8)
    }

    /// Creates a UTF-32 string from codepoints.
    ///
    /// # Errors
    ///
    /// See [`TaggedString::new`].
    pub fn from_codepoints(codepoints: &[u32]) -> Result<Self, TaggedStringError> {
        let length = codepoints.len().saturating_mul(4);
        header::check_length(length)?;
        for (index, &value) in codepoints.iter().enumerate() {
            if char::from_u32(value).is_none() {
                return Err(TaggedStringError::InvalidCodepoint {
                    offset: index * 4,
                    value,
                });
            }
        }
        Self::from_parts(Encoding::Utf32, length, |buf| {
            for codepoint in codepoints {
                buf.extend_from_slice(&codepoint.to_le_bytes());
            }
        })
    }

    /// Takes ownership of a buffer in the header-prefixed layout.
    ///
    /// # Errors
    ///
    /// - `TaggedStringError::MalformedLayout` if the header is truncated, the
    ///   length field disagrees with the buffer size, or the terminator is
    ///   missing
    /// - `TaggedStringError::UnknownEncoding` for an unknown discriminant
    /// - the validation errors of [`TaggedString::new`] for the payload
    pub fn from_raw(raw: Vec<u8>) -> Result<Self, TaggedStringError> {
        let (length, encoding) =
            header::decode(&raw).ok_or(TaggedStringError::MalformedLayout {
                reason: "buffer shorter than header",
            })?;
        let encoding = Encoding::try_from(encoding)?;

        if raw.len() != HEADER_LEN + length + TERMINATOR_LEN {
            return Err(TaggedStringError::MalformedLayout {
                reason: "length field does not match buffer size",
            });
        }
        if raw.last() != Some(&0) {
            return Err(TaggedStringError::MalformedLayout {
                reason: "missing terminator",
            });
        }
        let payload = raw
            .get(HEADER_LEN..HEADER_LEN + length)
            .ok_or(TaggedStringError::MalformedLayout {
                reason: "length field does not match buffer size",
            })?;
        validate(payload, encoding)?;

        Ok(Self { buf: raw })
    }

    /// Writes header, payload and terminator into an exactly sized buffer.
    fn from_parts(
        encoding: Encoding,
        length: usize,
        write_payload: impl FnOnce(&mut Vec<u8>),
    ) -> Result<Self, TaggedStringError> {
        let header = header::encode(length, encoding)?;
        let mut buf = alloc_buffer(HEADER_LEN + length + TERMINATOR_LEN)?;
        buf.extend_from_slice(&header);
        write_payload(&mut buf);
        buf.push(0);
        debug_assert_eq!(buf.len(), HEADER_LEN + length + TERMINATOR_LEN);
        Ok(Self { buf })
    }

    /// # Panics
    ///
    /// May panic if buffer integrity is compromised (internal validation failure).
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn encoding(&self) -> Encoding {
        let (_, encoding) = header::decode(&self.buf).expect("Header written on construction");
        Encoding::try_from(encoding).expect("Encoding validated on construction")
    }

    /// Payload length in bytes, without header and terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        header::decode(&self.buf).map_or(0, |(length, _)| length)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The payload bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buf
            .get(HEADER_LEN..HEADER_LEN + self.len())
            .unwrap_or_default()
    }

    /// The payload followed by its zero terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.buf.get(HEADER_LEN..).unwrap_or_default()
    }

    /// The whole buffer: header, payload and terminator.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.buf
    }

    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.buf
    }

    /// Decodes the payload into codepoints.
    #[must_use]
    pub fn codepoints(&self) -> Vec<u32> {
        let payload = self.as_bytes();
        match self.encoding() {
            Encoding::Ascii => payload.iter().map(|&byte| u32::from(byte)).collect(),
            Encoding::Utf8 => {
                let mut codepoints = Vec::with_capacity(payload.len());
                let mut offset = 0;
                // the payload was validated, so decoding only stops at its end
                while let Ok(codepoint) = decode_utf8(payload, &mut offset) {
                    codepoints.push(codepoint);
                }
                codepoints
            }
            Encoding::Utf32 => utf32_units(payload).collect(),
        }
    }

    /// Returns a new string holding `self` followed by `other`.
    ///
    /// Never transcodes: both operands must carry the same encoding.
    ///
    /// # Errors
    ///
    /// - `TaggedStringError::EncodingMismatch` if the encodings differ
    /// - `TaggedStringError::EmptyOperand` if either payload is empty
    /// - `TaggedStringError::LengthOverflow` if the result is too long
    /// - `TaggedStringError::AllocationFailed` if the buffer cannot be allocated
    pub fn concat(&self, other: &Self) -> Result<Self, TaggedStringError> {
        let (left, right) = (self.encoding(), other.encoding());
        if left != right {
            return Err(TaggedStringError::EncodingMismatch { left, right });
        }
        if self.is_empty() || other.is_empty() {
            return Err(TaggedStringError::EmptyOperand);
        }

        Self::from_parts(left, self.len() + other.len(), |buf| {
            buf.extend_from_slice(self.as_bytes());
            buf.extend_from_slice(other.as_bytes());
        })
    }

    /// Returns `true` if `needle` occurs in `self`.
    ///
    /// Strings with different encodings never contain each other, and an
    /// empty operand never matches. UTF-32 strings are searched codepoint by
    /// codepoint, so a match never straddles two codepoints.
    #[must_use]
    pub fn contains(&self, needle: &Self) -> bool {
        if self.encoding() != needle.encoding() || self.is_empty() || needle.is_empty() {
            return false;
        }
        match self.encoding() {
            Encoding::Ascii | Encoding::Utf8 => kmp::contains(self.as_bytes(), needle.as_bytes()),
            Encoding::Utf32 => {
                let haystack: Vec<u32> = utf32_units(self.as_bytes()).collect();
                let needle: Vec<u32> = utf32_units(needle.as_bytes()).collect();
                kmp::contains(&haystack, &needle)
            }
        }
    }

    /// Re-encodes the string as UTF-8, replacing its buffer.
    ///
    /// Empty and UTF-8 strings are left alone. ASCII only changes its
    /// discriminant, since ASCII is a subset of UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `TaggedStringError::AllocationFailed` if the new buffer cannot
    /// be allocated; the string is unchanged in that case.
    pub fn encode_utf8(&mut self) -> Result<(), TaggedStringError> {
        if self.is_empty() {
            return Ok(());
        }
        match self.encoding() {
            Encoding::Utf8 => Ok(()),
            Encoding::Ascii => {
                self.set_encoding(Encoding::Utf8);
                Ok(())
            }
            Encoding::Utf32 => {
                let payload = self.as_bytes();
                let length = utf32_units(payload).map(utf8_width).sum();
                let encoded = Self::from_parts(Encoding::Utf8, length, |buf| {
                    for codepoint in utf32_units(payload) {
                        encode_utf8_codepoint(codepoint, buf);
                    }
                })?;
                *self = encoded;
                Ok(())
            }
        }
    }

    /// Re-encodes the string as UTF-32, replacing its buffer.
    ///
    /// Empty and UTF-32 strings are left alone.
    ///
    /// # Errors
    ///
    /// - `TaggedStringError::LengthOverflow` if the UTF-32 form is too long
    /// - `TaggedStringError::AllocationFailed` if the new buffer cannot be
    ///   allocated
    ///
    /// The string is unchanged on error.
    pub fn encode_utf32(&mut self) -> Result<(), TaggedStringError> {
        if self.is_empty() {
            return Ok(());
        }
        match self.encoding() {
            Encoding::Utf32 => Ok(()),
            Encoding::Ascii => {
                let payload = self.as_bytes();
                let encoded = Self::from_parts(Encoding::Utf32, payload.len() * 4, |buf| {
                    for &byte in payload {
                        buf.extend_from_slice(&u32::from(byte).to_le_bytes());
                    }
                })?;
                *self = encoded;
                Ok(())
            }
            Encoding::Utf8 => {
                self.buf = self.decode_to_utf32()?;
                Ok(())
            }
        }
    }

    /// Decodes a UTF-8 payload into a UTF-32 buffer sized for the worst case
    /// (one codepoint per byte), then shrinks it to fit.
    #[allow(clippy::indexing_slicing)] // the header placeholder is written first
    fn decode_to_utf32(&self) -> Result<Vec<u8>, TaggedStringError> {
        let payload = self.as_bytes();
        let mut buf = alloc_buffer(HEADER_LEN + payload.len() * 4 + TERMINATOR_LEN)?;
        buf.extend_from_slice(&[0; HEADER_LEN]);

        let mut offset = 0;
        while offset < payload.len() {
            let codepoint = decode_utf8(payload, &mut offset)?;
            buf.extend_from_slice(&codepoint.to_le_bytes());
        }

        let header = header::encode(buf.len() - HEADER_LEN, Encoding::Utf32)?;
        buf[..HEADER_LEN].copy_from_slice(&header);
        buf.push(0);
        buf.shrink_to_fit();
        Ok(buf)
    }

    fn set_encoding(&mut self, encoding: Encoding) {
        if let Some(byte) = self.buf.get_mut(HEADER_LEN - 1) {
            *byte = encoding.into();
        }
    }
}

impl FromStr for TaggedString {
    type Err = TaggedStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::utf8(s.as_bytes())
    }
}

impl fmt::Display for TaggedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for codepoint in self.codepoints() {
            f.write_char(char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}
