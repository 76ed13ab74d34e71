use alloc::collections::TryReserveError;

/// Reasons why an operation over an [super::IndexPartition] was rejected.
/// <br>
/// <br>
/// Whenever an operation returns one of these, the partition is left exactly as it was before the
/// call.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum PartitionError {
    /// Memory for the bin or the location map couldn't be reserved.
    #[error("failed to allocate index partition buffers: {0}")]
    OutOfMemory(#[from] TryReserveError),
    /// The requested capacity can't be represented by the index type.
    #[error("capacity {capacity} exceeds the maximum of {max} for this index type")]
    CapacityOverflow { capacity: usize, max: usize },
    /// The index isn't part of the universe `0..capacity`.
    #[error("index {index} is out of range for capacity {capacity}")]
    OutOfRange { index: usize, capacity: usize },
    /// The index was marked as used while already being used.
    #[error("index {index} is already used")]
    AlreadyUsed { index: usize },
    /// The index was marked as unused while already being unused.
    #[error("index {index} is already unused")]
    AlreadyUnused { index: usize },
}
