use alloc::vec::Vec;

use crate::index_partition::iter::Iter;
use crate::index_partition::partition_index::PartitionIndex;
use crate::index_partition::IndexPartition;

impl<Idx> Default for IndexPartition<Idx> {
    /// Creates a partition with a capacity of zero, which is also what's left behind when taking
    /// a partition out through [core::mem::take].
    fn default() -> Self {
        Self {
            bin: Vec::new(),
            locations: Vec::new(),
            used: 0,
        }
    }
}

impl<'partition, Idx: PartitionIndex> IntoIterator for &'partition IndexPartition<Idx> {
    type Item = Idx;
    type IntoIter = Iter<'partition, Idx>;

    /// Gets an iterator over the used indexes, this is the same as calling
    /// [IndexPartition::iter_used].
    fn into_iter(self) -> Self::IntoIter {
        self.iter_used()
    }
}

impl<Idx: PartitionIndex> PartialEq for IndexPartition<Idx> {
    /// Compares if two [IndexPartition] have the same capacity and the same used indexes, no
    /// matter the order in which those indexes sit inside their bins.
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity()
            && self.used == other.used
            && self.iter_used().all(|index| other.is_used(index))
    }
}

impl<Idx: PartitionIndex> Eq for IndexPartition<Idx> {}
