use core::iter::{Copied, FusedIterator};
use core::slice;

use super::partition_index::PartitionIndex;

/// Iterator over the indexes of one partition of an [super::IndexPartition], obtained through
/// [super::IndexPartition::iter_used] or [super::IndexPartition::iter_unused].
/// <br>
/// <br>
/// Indexes come out in their current bin order, which isn't meaningful. Cloning the iterator
/// restarts the traversal from wherever the clone was taken.
#[derive(Clone, Debug)]
pub struct Iter<'partition, Idx> {
    inner: Copied<slice::Iter<'partition, Idx>>,
}

impl<'partition, Idx: PartitionIndex> Iter<'partition, Idx> {
    pub(super) fn new(slots: &'partition [Idx]) -> Self {
        Self { inner: slots.iter().copied() }
    }
}

impl<Idx: PartitionIndex> Iterator for Iter<'_, Idx> {
    type Item = Idx;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<Idx: PartitionIndex> DoubleEndedIterator for Iter<'_, Idx> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<Idx: PartitionIndex> ExactSizeIterator for Iter<'_, Idx> {}

impl<Idx: PartitionIndex> FusedIterator for Iter<'_, Idx> {}
