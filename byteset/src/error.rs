use thiserror::Error;

/// Error types for `ByteSet` operations
///
/// "Not found" is never an error: `remove` and `contains` report absence
/// with `false`.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ByteSetError {
    /// Item length differs from the set's fixed item size
    #[error("Item size mismatch: expected {expected} bytes, got {actual}")]
    ItemSizeMismatch {
        /// Item size the set was created with
        expected: usize,
        /// Length of the rejected item
        actual: usize,
    },
    /// Invalid parameters provided to `ByteSet::new`
    #[error("Invalid ByteSet configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
    /// Slot storage size does not fit in `usize`
    #[error("Capacity overflow: {capacity} slots of {item_size} bytes")]
    CapacityOverflow {
        /// Requested number of slots
        capacity: usize,
        /// Size of each slot
        item_size: usize,
    },
    /// The allocator could not provide a buffer
    #[error("Allocation failed: could not reserve {bytes} bytes")]
    AllocationFailed {
        /// Size of the failed reservation
        bytes: usize,
    },
}
