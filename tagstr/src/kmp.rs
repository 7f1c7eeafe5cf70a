//! Knuth-Morris-Pratt substring search over any slice of comparable units.

use alloc::vec;
use alloc::vec::Vec;

/// Builds the failure function of `needle`.
///
/// `table[i]` is the length of the longest proper prefix of `needle[..=i]`
/// that is also a suffix of it.
///
/// ```
/// # use tagstr::kmp::failure_table;
/// assert_eq!(failure_table(b"abacabab"), vec![0, 0, 1, 0, 1, 2, 3, 2]);
/// ```
#[must_use]
#[allow(clippy::indexing_slicing)] // i < needle.len() and matched < i
pub fn failure_table<T: Eq>(needle: &[T]) -> Vec<usize> {
    let mut table = vec![0; needle.len()];
    let mut matched = 0;
    for i in 1..needle.len() {
        while matched > 0 && needle[i] != needle[matched] {
            matched = table[matched - 1];
        }
        if needle[i] == needle[matched] {
            matched += 1;
        }
        table[i] = matched;
    }
    table
}

/// Returns `true` if `needle` occurs in `haystack`.
///
/// An empty needle or haystack never matches.
///
/// ```
/// # use tagstr::kmp::contains;
/// assert!(contains(b"hello world", b"o w"));
/// assert!(!contains(b"hello world", b"low"));
/// assert!(!contains(b"hello world", b""));
/// ```
#[must_use]
#[allow(clippy::indexing_slicing)] // matched < needle.len() on every access
pub fn contains<T: Eq>(haystack: &[T], needle: &[T]) -> bool {
    if haystack.is_empty() || needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }

    let table = failure_table(needle);
    let mut matched = 0;
    for unit in haystack {
        while matched > 0 && *unit != needle[matched] {
            matched = table[matched - 1];
        }
        if *unit == needle[matched] {
            matched += 1;
            if matched == needle.len() {
                return true;
            }
        }
    }
    false
}
