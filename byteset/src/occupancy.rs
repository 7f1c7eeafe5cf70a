use alloc::vec::Vec;

use crate::error::ByteSetError;

/// One bit per slot, packed LSB-first: slot `i` is bit `i & 7` of byte `i >> 3`.
#[derive(Debug, Clone)]
pub(crate) struct Occupancy {
    bits: Vec<u8>,
}

impl Occupancy {
    /// Allocates a zeroed bitmap covering `slots` slots.
    pub(crate) fn new(slots: usize) -> Result<Self, ByteSetError> {
        Ok(Self {
            bits: zeroed(slots.div_ceil(8))?,
        })
    }

    /// Returns `false` for indices past the bitmap.
    pub(crate) fn is_set(&self, index: usize) -> bool {
        self.bits
            .get(index >> 3)
            .is_some_and(|byte| byte & (1 << (index & 7)) != 0)
    }

    pub(crate) fn set(&mut self, index: usize) {
        if let Some(byte) = self.bits.get_mut(index >> 3) {
            *byte |= 1 << (index & 7);
        }
    }

    pub(crate) fn unset(&mut self, index: usize) {
        if let Some(byte) = self.bits.get_mut(index >> 3) {
            *byte &= !(1 << (index & 7));
        }
    }

    pub(crate) fn clear(&mut self) {
        self.bits.fill(0);
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}

/// Allocates `len` zero bytes, reporting allocator failure instead of aborting.
pub(crate) fn zeroed(len: usize) -> Result<Vec<u8>, ByteSetError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| ByteSetError::AllocationFailed { bytes: len })?;
    buffer.resize(len, 0);
    Ok(buffer)
}
