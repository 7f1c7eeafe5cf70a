use core::marker::PhantomData;
use core::mem::size_of;

use bytemuck::Pod;

use crate::core::ByteSet;
use crate::error::ByteSetError;

/// A `ByteSet` keyed by a plain-old-data type
///
/// Values are stored and compared by their raw byte representation, so two
/// values are the same member exactly when `bytemuck::bytes_of` agrees on
/// them. Padding-free `Pod` types make that coincide with field equality.
#[derive(Debug, Clone)]
pub struct PodSet<T> {
    inner: ByteSet,
    _phantom: PhantomData<T>,
}

impl<T: Pod> PodSet<T> {
    /// Creates an empty set sized for `size_of::<T>()` byte items.
    ///
    /// # Errors
    ///
    /// Returns `ByteSetError::InvalidConfiguration` for zero-sized `T`, and
    /// the allocation errors of [`ByteSet::new`].
    pub fn new(capacity: usize) -> Result<Self, ByteSetError> {
        Ok(Self {
            inner: ByteSet::new(size_of::<T>(), capacity)?,
            _phantom: PhantomData,
        })
    }

    /// Adds `value`, returning `true` if it was not present.
    ///
    /// # Errors
    ///
    /// Returns the resize errors of [`ByteSet::insert`].
    pub fn insert(&mut self, value: &T) -> Result<bool, ByteSetError> {
        self.inner.insert(bytemuck::bytes_of(value))
    }

    /// Removes `value`, returning `true` if it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        // the item size always matches, so the only outcome is Ok
        matches!(self.inner.remove(bytemuck::bytes_of(value)), Ok(true))
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(bytemuck::bytes_of(value))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the value stored in slot `index`, if the slot is occupied.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<T> {
        self.inner.slot(index).map(bytemuck::pod_read_unaligned)
    }

    /// The untyped set underneath.
    #[must_use]
    pub fn as_byte_set(&self) -> &ByteSet {
        &self.inner
    }
}
