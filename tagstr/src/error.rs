use thiserror::Error;

use crate::encoding::Encoding;

/// Error types for `TaggedString` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TaggedStringError {
    /// Payload does not fit the 3-byte length field of the header
    #[error("Length overflow: {length} bytes exceeds maximum of {max}")]
    LengthOverflow {
        /// Requested payload length
        length: usize,
        /// Maximum payload length
        max: usize,
    },
    /// The allocator could not provide a buffer
    #[error("Allocation failed: could not reserve {bytes} bytes")]
    AllocationFailed {
        /// Size of the failed reservation
        bytes: usize,
    },
    /// Operands of a binary operation carry different encodings
    #[error("Encoding mismatch: {left:?} and {right:?}")]
    EncodingMismatch {
        /// Encoding of the left operand
        left: Encoding,
        /// Encoding of the right operand
        right: Encoding,
    },
    /// An operand has an empty payload
    #[error("Empty operand")]
    EmptyOperand,
    /// Byte outside the 7-bit range in an ASCII payload
    #[error("Invalid ASCII byte at offset {offset}")]
    InvalidAscii {
        /// Payload offset of the offending byte
        offset: usize,
    },
    /// Malformed or truncated UTF-8 sequence
    #[error("Invalid UTF-8 sequence at offset {offset}")]
    InvalidUtf8 {
        /// Payload offset of the sequence's lead byte
        offset: usize,
    },
    /// UTF-32 payload length is not a multiple of 4
    #[error("Misaligned UTF-32 payload: {length} bytes is not a multiple of 4")]
    MisalignedUtf32 {
        /// Payload length
        length: usize,
    },
    /// UTF-32 unit that is not a Unicode scalar value
    #[error("Invalid codepoint {value:#x} at offset {offset}")]
    InvalidCodepoint {
        /// Payload offset of the unit
        offset: usize,
        /// Decoded unit value
        value: u32,
    },
    /// Encoding discriminant byte not recognized
    #[error("Unknown encoding discriminant {value:#04x}")]
    UnknownEncoding {
        /// Discriminant found in the header
        value: u8,
    },
    /// Raw buffer does not follow the header/payload/terminator layout
    #[error("Malformed buffer: {reason}")]
    MalformedLayout {
        /// Description of the layout violation
        reason: &'static str,
    },
}
