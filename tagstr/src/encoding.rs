use crate::error::TaggedStringError;

/// Encoding discriminant stored in the header byte after the length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Encoding {
    /// 7-bit bytes
    Ascii = 0x01,
    /// UTF-8 byte stream
    Utf8 = 0x02,
    /// Little-endian 4-byte codepoints
    Utf32 = 0x03,
}

impl From<Encoding> for u8 {
    fn from(encoding: Encoding) -> Self {
        encoding as u8
    }
}

impl TryFrom<u8> for Encoding {
    type Error = TaggedStringError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Self::Ascii),
            0x02 => Ok(Self::Utf8),
            0x03 => Ok(Self::Utf32),
            _ => Err(TaggedStringError::UnknownEncoding { value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminant_values() {
        assert_eq!(u8::from(Encoding::Ascii), 0x01);
        assert_eq!(u8::from(Encoding::Utf8), 0x02);
        assert_eq!(u8::from(Encoding::Utf32), 0x03);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Encoding::try_from(0x02), Ok(Encoding::Utf8));
        assert_eq!(
            Encoding::try_from(0x00),
            Err(TaggedStringError::UnknownEncoding { value: 0x00 })
        );
        assert_eq!(
            Encoding::try_from(0x04),
            Err(TaggedStringError::UnknownEncoding { value: 0x04 })
        );
    }
}
