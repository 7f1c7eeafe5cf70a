/// 32-bit FNV offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
/// 32-bit FNV prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Hashes raw bytes with 32-bit FNV-1a (xor, then multiply).
///
/// ```
/// assert_eq!(byteset::fnv1a(b""), 0x811c_9dc5);
/// assert_eq!(byteset::fnv1a(b"a"), 0xe40c_292c);
/// ```
#[must_use]
pub fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}
