use alloc::vec::Vec;

use crate::error::ByteSetError;
use crate::hash::fnv1a;
use crate::occupancy::{zeroed, Occupancy};

/// Smallest number of slots a `ByteSet` is created with.
pub const MIN_CAPACITY: usize = 16;
/// Insert grows the table once `len` exceeds this share of the capacity.
const MAX_LOAD_PERCENT: usize = 60;

/// An open-addressing set of fixed-size byte records
///
/// Storage layout: [occupancy bitmap][slot data]. Slot `i` occupies bytes
/// `i * item_size .. (i + 1) * item_size` of the slot data.
#[derive(Debug, Clone)]
pub struct ByteSet {
    occupancy: Occupancy,
    slots: Vec<u8>,
    item_size: usize,
    count: usize,
    capacity: usize,
    max_probes: usize,
}

impl ByteSet {
    /// Creates an empty set for items of `item_size` bytes.
    ///
    /// `capacity` is raised to [`MIN_CAPACITY`] when smaller.
    ///
    /// # Errors
    ///
    /// - `ByteSetError::InvalidConfiguration` if `item_size` is 0
    /// - `ByteSetError::CapacityOverflow` if the slot storage size overflows `usize`
    /// - `ByteSetError::AllocationFailed` if the buffers cannot be allocated
    pub fn new(item_size: usize, capacity: usize) -> Result<Self, ByteSetError> {
        if item_size == 0 {
            return Err(ByteSetError::InvalidConfiguration {
                parameter: "item_size",
                value: item_size,
            });
        }
        Self::with_exact_capacity(item_size, capacity.max(MIN_CAPACITY))
    }

    /// Creates an empty set with [`MIN_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// Same as [`ByteSet::new`].
    pub fn with_default_capacity(item_size: usize) -> Result<Self, ByteSetError> {
        Self::new(item_size, MIN_CAPACITY)
    }

    fn with_exact_capacity(item_size: usize, capacity: usize) -> Result<Self, ByteSetError> {
        let slot_bytes =
            capacity
                .checked_mul(item_size)
                .ok_or(ByteSetError::CapacityOverflow {
                    capacity,
                    item_size,
                })?;

        Ok(Self {
            occupancy: Occupancy::new(capacity)?,
            slots: zeroed(slot_bytes)?,
            item_size,
            count: 0,
            capacity,
            max_probes: 0,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Upper bound on the number of slots a lookup has to visit.
    #[must_use]
    pub fn max_probes(&self) -> usize {
        self.max_probes
    }

    /// Raw occupancy bitmap, `ceil(capacity / 8)` bytes, LSB-first.
    #[must_use]
    pub fn occupancy(&self) -> &[u8] {
        self.occupancy.as_bytes()
    }

    /// Raw slot storage, `capacity * item_size` bytes.
    ///
    /// Bytes of unoccupied slots are meaningless.
    #[must_use]
    pub fn slots(&self) -> &[u8] {
        &self.slots
    }

    #[must_use]
    pub fn is_slot_occupied(&self, index: usize) -> bool {
        index < self.capacity && self.occupancy.is_set(index)
    }

    /// Returns the item stored in slot `index`, or `None` if the slot is free
    /// or out of range.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&[u8]> {
        if self.is_slot_occupied(index) {
            Some(self.slot_bytes(index))
        } else {
            None
        }
    }

    /// Home slot of `item`: where its probe sequence starts.
    #[must_use]
    pub fn home_slot(&self, item: &[u8]) -> usize {
        fnv1a(item) as usize % self.capacity
    }

    #[allow(clippy::expect_used)]
    fn slot_bytes(&self, index: usize) -> &[u8] {
        let start = index * self.item_size;
        self.slots
            .get(start..start + self.item_size)
            .expect("Slot index bounded by capacity")
    }

    #[allow(clippy::expect_used)]
    fn write_slot(&mut self, index: usize, item: &[u8]) {
        let start = index * self.item_size;
        self.slots
            .get_mut(start..start + self.item_size)
            .expect("Slot index bounded by capacity")
            .copy_from_slice(item);
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.capacity
    }

    fn check_item(&self, item: &[u8]) -> Result<(), ByteSetError> {
        if item.len() == self.item_size {
            Ok(())
        } else {
            Err(ByteSetError::ItemSizeMismatch {
                expected: self.item_size,
                actual: item.len(),
            })
        }
    }

    fn exceeds_load_factor(&self) -> bool {
        self.count.saturating_mul(100) > self.capacity.saturating_mul(MAX_LOAD_PERCENT)
    }

    /// Adds `item` to the set.
    ///
    /// Returns `true` if the item was not present before. Inserting an item
    /// that is already present leaves the set unchanged.
    ///
    /// # Errors
    ///
    /// - `ByteSetError::ItemSizeMismatch` if `item` has the wrong length
    /// - `ByteSetError::CapacityOverflow` or `ByteSetError::AllocationFailed`
    ///   if a required resize fails; the set is left as it was
    pub fn insert(&mut self, item: &[u8]) -> Result<bool, ByteSetError> {
        self.check_item(item)?;
        if self.exceeds_load_factor() {
            self.grow()?;
        }

        let home = self.home_slot(item);
        let mut probes = 0;
        let mut inserted = false;
        while probes < self.capacity {
            let index = (home + probes) % self.capacity;
            if !self.occupancy.is_set(index) {
                self.occupancy.set(index);
                self.write_slot(index, item);
                self.count += 1;
                inserted = true;
                break;
            }
            if self.slot_bytes(index) == item {
                break;
            }
            probes += 1;
        }
        self.max_probes = self.max_probes.max(probes + 1);
        Ok(inserted)
    }

    /// Stores an item known to be absent, without the load check.
    fn place(&mut self, item: &[u8]) {
        let home = self.home_slot(item);
        let mut probes = 0;
        while probes < self.capacity {
            let index = (home + probes) % self.capacity;
            if !self.occupancy.is_set(index) {
                self.occupancy.set(index);
                self.write_slot(index, item);
                self.count += 1;
                break;
            }
            probes += 1;
        }
        self.max_probes = self.max_probes.max(probes + 1);
    }

    /// Doubles the capacity and rehashes every item into fresh buffers.
    ///
    /// `self` is only replaced once the new table is complete.
    fn grow(&mut self) -> Result<(), ByteSetError> {
        let capacity =
            self.capacity
                .checked_mul(2)
                .ok_or(ByteSetError::CapacityOverflow {
                    capacity: self.capacity,
                    item_size: self.item_size,
                })?;

        let mut grown = Self::with_exact_capacity(self.item_size, capacity)?;
        for index in 0..self.capacity {
            if self.occupancy.is_set(index) {
                grown.place(self.slot_bytes(index));
            }
        }
        *self = grown;
        Ok(())
    }

    /// Slot holding `item`, searching at most `max_probes` slots.
    fn find(&self, item: &[u8]) -> Option<usize> {
        let home = self.home_slot(item);
        for probes in 0..self.max_probes.min(self.capacity) {
            let index = (home + probes) % self.capacity;
            if !self.occupancy.is_set(index) {
                return None;
            }
            if self.slot_bytes(index) == item {
                return Some(index);
            }
        }
        None
    }

    /// Returns `true` if an item byte-identical to `item` is in the set.
    ///
    /// Items of the wrong length are never members.
    #[must_use]
    pub fn contains(&self, item: &[u8]) -> bool {
        item.len() == self.item_size && self.find(item).is_some()
    }

    /// Removes `item` from the set.
    ///
    /// Returns `false` if the item was not present. The freed slot is filled
    /// by shifting later members of the same cluster backward, so no
    /// tombstones are left behind.
    ///
    /// # Errors
    ///
    /// Returns `ByteSetError::ItemSizeMismatch` if `item` has the wrong length.
    pub fn remove(&mut self, item: &[u8]) -> Result<bool, ByteSetError> {
        self.check_item(item)?;
        let Some(mut hole) = self.find(item) else {
            return Ok(false);
        };
        self.occupancy.unset(hole);

        let mut index = self.next_index(hole);
        while self.occupancy.is_set(index) {
            let home = self.home_slot(self.slot_bytes(index));
            if can_fill_hole(hole, index, home) {
                let start = index * self.item_size;
                self.slots
                    .copy_within(start..start + self.item_size, hole * self.item_size);
                self.occupancy.set(hole);
                self.occupancy.unset(index);
                hole = index;
            }
            index = self.next_index(index);
        }

        self.count -= 1;
        Ok(true)
    }

    /// Empties the set. Slot bytes are left in place but become unreachable.
    pub fn clear(&mut self) {
        self.occupancy.clear();
        self.count = 0;
        self.max_probes = 0;
    }
}

/// Whether the item at `candidate`, whose home slot is `home`, can move back
/// into the free slot `hole` without becoming unreachable.
///
/// It can unless `home` lies in the cyclic range `(hole, candidate]`.
fn can_fill_hole(hole: usize, candidate: usize, home: usize) -> bool {
    if hole <= candidate {
        home <= hole || home > candidate
    } else {
        home <= hole && home > candidate
    }
}
