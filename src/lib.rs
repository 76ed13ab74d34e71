//! Fixed universe of indexes `0..N` split into two partitions, used and unused, where moving an
//! index from one partition to the other and asking which partition an index belongs to are both
//! O(1) operations, usually used as the bookkeeping behind hash tables, slot allocators or free
//! lists, where knowing whether a slot is active must not require a scan.
//! <br>
//! <br>
//! This is implemented using two buffers of length N, the first one, the bin, holds every index
//! exactly once, with the used indexes at the front and the unused ones at the back, the second
//! one, the location map, tells for every index at which position of the bin it currently sits.
//! <br>
//! <br>
//! # Marking indexes
//! Marking an index as used swaps it with the first unused position of the bin and moves the
//! boundary one step right, marking it as unused swaps it with the last used position and moves
//! the boundary one step left, for example, with a capacity of 6 and indexes 4 and 1 used, the
//! structure looks like this:
//! <br>
//! <br>
//! Bin: [4, 1 | 2, 3, 0, 5]
//! <br>
//! Location map: [4, 1, 2, 3, 0, 5]
//! <br>
//! <br>
//! If index 4 is now marked as unused, it's swapped with 1 (the last used position) and the
//! boundary moves left:
//! <br>
//! <br>
//! Bin: [1 | 4, 2, 3, 0, 5]
//! <br>
//! Location map: [4, 0, 2, 3, 1, 5]
//! <br>
//! <br>
//! Order inside each partition is not meaningful and changes as indexes move around.
//! <br>
//! <br>
//! # Checked and unchecked operations
//! Every operation that moves indexes comes in two flavours, [index_partition::IndexPartition::mark_used]
//! validates the index and returns an error without touching the structure if the index is out of
//! range or already in the desired partition, while
//! [index_partition::IndexPartition::mark_used_unchecked] skips those checks and is `unsafe`, as
//! breaking its preconditions corrupts the partition.

#![no_std]

extern crate alloc;

/// Defines the [index_partition::IndexPartition] structure and contents for their implementation
pub mod index_partition;

pub use index_partition::error::PartitionError;
pub use index_partition::iter::Iter;
pub use index_partition::partition_index::PartitionIndex;
pub use index_partition::IndexPartition;
