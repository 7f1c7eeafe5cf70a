#![no_std]

//! `TaggedString`: a length-prefixed byte string that carries its encoding.
//!
//! A `TaggedString` owns a single buffer:
//!
//! ```text
//! [length: 3 bytes, big-endian][encoding: 1 byte][payload: length bytes][0x00]
//! ```
//!
//! The length counts payload bytes only, capping a string at
//! [`MAX_PAYLOAD_LEN`] bytes. The trailing zero byte is present for every
//! encoding. The encoding byte is one of:
//!
//! | Encoding           | Byte   | Payload                                   |
//! |--------------------|--------|-------------------------------------------|
//! | [`Encoding::Ascii`] | `0x01` | 7-bit bytes                              |
//! | [`Encoding::Utf8`]  | `0x02` | UTF-8 byte stream                        |
//! | [`Encoding::Utf32`] | `0x03` | little-endian 4-byte codepoints          |
//!
//! Payloads are validated when a string is created, so every operation can
//! rely on the encoding byte describing the payload.
//!
//! ```
//! # use tagstr::{Encoding, TaggedString};
//! let greeting: TaggedString = "hello world".parse().unwrap();
//!
//! assert_eq!(greeting.encoding(), Encoding::Utf8);
//! assert!(greeting.contains(&"world".parse().unwrap()));
//! assert!(!greeting.contains(&"xyz".parse().unwrap()));
//! assert!(!greeting.contains(&"".parse().unwrap()));
//! ```
//!
//! # Concatenation and Equality
//!
//! Concatenation never transcodes: both operands must share an encoding and
//! neither may be empty. Equality compares length, encoding and payload, so
//! the same text in two encodings is not equal.
//!
//! ```
//! # use tagstr::{TaggedString, TaggedStringError, Encoding};
//! let foo = TaggedString::ascii(b"foo").unwrap();
//! let bar = TaggedString::ascii(b"bar").unwrap();
//! assert_eq!(foo.concat(&bar).unwrap(), TaggedString::ascii(b"foobar").unwrap());
//!
//! let bar_utf8 = TaggedString::utf8(b"bar").unwrap();
//! assert_eq!(
//!     foo.concat(&bar_utf8),
//!     Err(TaggedStringError::EncodingMismatch {
//!         left: Encoding::Ascii,
//!         right: Encoding::Utf8,
//!     })
//! );
//! assert_ne!(bar, bar_utf8);
//! ```
//!
//! # Transcoding
//!
//! [`TaggedString::encode_utf8`] and [`TaggedString::encode_utf32`] rebuild
//! the buffer in the target encoding and rebind the string to it. The old
//! buffer is released only after the new one is complete.
//!
//! ```
//! # use tagstr::{Encoding, TaggedString};
//! let mut text = TaggedString::utf8("naïve €".as_bytes()).unwrap();
//!
//! text.encode_utf32().unwrap();
//! assert_eq!(text.encoding(), Encoding::Utf32);
//! assert_eq!(text.len(), 7 * 4);
//!
//! text.encode_utf8().unwrap();
//! assert_eq!(text.as_bytes(), "naïve €".as_bytes());
//! ```
//!
//! # Substring Search
//!
//! [`TaggedString::contains`] runs Knuth-Morris-Pratt ([`kmp`]) over the raw
//! bytes for ASCII and UTF-8, and over whole codepoints for UTF-32.
//! Only a yes/no answer is provided, not a match position.
//!
//! # Malformed Input
//!
//! Malformed UTF-8 is rejected with [`TaggedStringError::InvalidUtf8`]; no
//! replacement characters are substituted. ASCII payloads must be 7-bit and
//! UTF-32 payloads must hold Unicode scalar values.
//!
//! ## `no_std` Compatibility
//!
//! The crate only needs `core` and `alloc`. Buffers are reserved fallibly and
//! allocation failure is reported as [`TaggedStringError::AllocationFailed`].
//! Enable the optional `std` feature to get `std::error::Error` on the error
//! type:
//! ```toml
//! [dependencies]
//! tagstr = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod encoding;
mod error;
mod header;
pub mod kmp;
mod utf8;

pub use crate::core::TaggedString;
pub use encoding::Encoding;
pub use error::TaggedStringError;
pub use header::{HEADER_LEN, MAX_PAYLOAD_LEN};
pub use utf8::{decode_utf8, encode_utf8_codepoint, utf8_width, MAX_CODEPOINT};
