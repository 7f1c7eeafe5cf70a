#![no_std]

//! `ByteSet`: an open-addressing hash set of fixed-size byte records.
//!
//! Every member is an opaque block of exactly `item_size` bytes. Membership is
//! decided by full byte equality, never by hash equality alone, so the set
//! behaves as a true set of byte patterns. Packing a key and a value into one
//! record and looking it up by the key alone is not supported.
//!
//! Storage layout: [occupancy bitmap][slot data]. The bitmap holds one bit per
//! slot (`ceil(capacity / 8)` bytes, LSB-first); slot `i` lives at byte offset
//! `i * item_size` of the slot data. Both are exposed read-only through
//! [`ByteSet::occupancy`] and [`ByteSet::slots`].
//!
//! # Algorithm
//!
//! - Items are hashed with 32-bit FNV-1a ([`fnv1a`]) over their raw bytes.
//! - Collisions are resolved by linear probing from `hash mod capacity`.
//! - Before an insert, a table more than 60% full doubles its capacity and
//!   rehashes into freshly allocated buffers. The capacity never drops below
//!   [`MIN_CAPACITY`].
//! - The longest probe sequence seen since the last resize or clear is
//!   tracked and bounds every lookup.
//! - Removal uses backward-shift deletion: members of the cluster following
//!   the freed slot move back into it whenever that keeps them reachable from
//!   their home slot, so no tombstones are needed.
//!
//! ```
//! # use byteset::ByteSet;
//! let mut set = ByteSet::new(4, 16).unwrap();
//!
//! set.insert(&42u32.to_le_bytes()).unwrap();
//! set.insert(&7u32.to_le_bytes()).unwrap();
//! set.insert(&99u32.to_le_bytes()).unwrap();
//! set.remove(&7u32.to_le_bytes()).unwrap();
//!
//! assert!(set.contains(&42u32.to_le_bytes()));
//! assert!(!set.contains(&7u32.to_le_bytes()));
//! assert!(set.contains(&99u32.to_le_bytes()));
//! assert_eq!(set.len(), 2);
//! ```
//!
//! # Typed Items
//!
//! [`PodSet`] wraps a `ByteSet` for any `bytemuck::Pod` type:
//!
//! ```
//! # use byteset::PodSet;
//! let mut points = PodSet::<[i32; 2]>::new(16).unwrap();
//!
//! assert!(points.insert(&[1, 2]).unwrap());
//! assert!(!points.insert(&[1, 2]).unwrap());
//! assert!(points.contains(&[1, 2]));
//! assert!(!points.contains(&[2, 1]));
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return [`ByteSetError`], which keeps allocation
//! failures apart from precondition violations such as a wrongly sized item.
//! An absent item is not an error: `remove` returns `Ok(false)` and
//! `contains` returns `false`.
//!
//! ```
//! # use byteset::{ByteSet, ByteSetError};
//! let mut set = ByteSet::new(4, 16).unwrap();
//!
//! assert_eq!(
//!     set.insert(b"too long"),
//!     Err(ByteSetError::ItemSizeMismatch { expected: 4, actual: 8 })
//! );
//! assert_eq!(set.remove(b"abcd"), Ok(false));
//! ```
//!
//! # Performance Characteristics
//!
//! - `insert()`, `contains()`, `remove()`: expected O(1); lookups visit at
//!   most [`ByteSet::max_probes`] slots
//! - Resize: O(capacity), amortized O(1) per insert
//! - `clear()`: O(capacity / 8) - resets the bitmap only
//!
//! ## `no_std` Compatibility
//!
//! The crate only needs `core` and `alloc`. All allocations are fallible and
//! reported as `ByteSetError::AllocationFailed`. Enable the optional `std`
//! feature to get `std::error::Error` on the error type:
//! ```toml
//! [dependencies]
//! byteset = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Concurrency
//!
//! Mutation requires `&mut self`. Share a set between threads behind a lock
//! provided by the caller.

extern crate alloc;

mod core;
mod error;
mod hash;
mod occupancy;
mod typed;

pub use crate::core::{ByteSet, MIN_CAPACITY};
pub use error::ByteSetError;
pub use hash::{fnv1a, FNV_OFFSET_BASIS, FNV_PRIME};
pub use typed::PodSet;
