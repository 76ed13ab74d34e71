use alloc::vec::Vec;

use self::error::PartitionError;
use self::iter::Iter;
use self::partition_index::PartitionIndex;

/// Defines the errors returned by checked operations of [IndexPartition]
pub mod error;

/// Defines iterators over each partition of an [IndexPartition]
pub mod iter;

/// Defines the unsigned integer types an [IndexPartition] can be built over
pub mod partition_index;

/// Contains specific trait implementations of [IndexPartition] that are commonly used by Rust's
/// collections
mod trait_impls;


/// Fixed universe of indexes `0..capacity` split into used and unused partitions, where moving an
/// index between partitions and checking which partition it belongs to are O(1) operations.
#[derive(Clone, Debug)]
pub struct IndexPartition<Idx> {
    /// Holds every index exactly once, the first `used` positions hold used indexes and the rest
    /// hold unused ones.
    bin: Vec<Idx>,
    /// Position inside `bin` of every index, `bin[locations[index]] == index` always holds.
    locations: Vec<Idx>,
    /// Boundary between the used and unused partitions of `bin`.
    used: usize,
}

impl<Idx: PartitionIndex> IndexPartition<Idx> {
    /// Creates a partition over the indexes `0..capacity`, all of them starting as unused.
    /// <br>
    /// <br>
    /// A capacity of zero is valid and yields a partition that is always empty. Fails if capacity
    /// is greater than [PartitionIndex::max_capacity] or if the buffers can't be allocated.
    /// <br>
    /// <br>
    /// This operation is O(n), where n is the capacity.
    pub fn new(capacity: usize) -> Result<IndexPartition<Idx>, PartitionError> {
        let mut partition = Self::default();
        partition.reset(capacity)?;
        Ok(partition)
    }

    /// Reinitializes the partition over the indexes `0..capacity`, all of them unused, replacing
    /// both buffers.
    /// <br>
    /// <br>
    /// If it fails, the partition is left as it was before the call.
    pub fn reset(&mut self, capacity: usize) -> Result<(), PartitionError> {
        let max = Idx::max_capacity();
        if capacity > max {
            tracing::trace!(capacity, max, "rejected index partition capacity");
            return Err(PartitionError::CapacityOverflow { capacity, max });
        }
        let bin = Self::natural_order(capacity)?;
        let locations = Self::natural_order(capacity)?;
        self.bin = bin;
        self.locations = locations;
        self.used = 0;
        tracing::debug!(capacity, "reset index partition");
        Ok(())
    }

    /// Buffer holding `0..capacity` in ascending order, which is a valid bin and location map at
    /// the same time while nothing is used.
    fn natural_order(capacity: usize) -> Result<Vec<Idx>, PartitionError> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(capacity)?;
        buffer.extend((0..capacity).map(Idx::from_usize));
        Ok(buffer)
    }

    /// Marks this index as used, failing without modifying anything if the index is out of range
    /// or already used.
    /// <br>
    /// <br>
    /// This operation is O(1).
    pub fn mark_used(&mut self, index: Idx) -> Result<(), PartitionError> {
        let position = self.checked_position(index)?;
        if position < self.used {
            tracing::trace!(%index, "index is already used");
            return Err(PartitionError::AlreadyUsed { index: index.as_usize() });
        }
        // SAFETY: index is in range and currently unused, so there is at least one unused slot.
        unsafe { self.mark_used_unchecked(index) };
        Ok(())
    }

    /// Marks this index as unused, failing without modifying anything if the index is out of
    /// range or already unused.
    /// <br>
    /// <br>
    /// This operation is O(1).
    pub fn mark_unused(&mut self, index: Idx) -> Result<(), PartitionError> {
        let position = self.checked_position(index)?;
        if position >= self.used {
            tracing::trace!(%index, "index is already unused");
            return Err(PartitionError::AlreadyUnused { index: index.as_usize() });
        }
        // SAFETY: index is in range and currently used, so there is at least one used slot.
        unsafe { self.mark_unused_unchecked(index) };
        Ok(())
    }

    /// Marks this index as used by swapping it into the first unused slot of the bin, without
    /// checking anything.
    /// <br>
    /// <br>
    /// This operation is O(1).
    ///
    /// # Safety
    /// Caller must ensure:
    /// - `index` < [IndexPartition::capacity].
    /// - `index` is currently unused.
    ///
    /// Violating either may read or write out of the buffers or corrupt the partition.
    pub unsafe fn mark_used_unchecked(&mut self, index: Idx) {
        let boundary = self.used;
        self.swap_into_slot(index, boundary);
        self.used = boundary + 1;
    }

    /// Marks this index as unused by swapping it into the last used slot of the bin, without
    /// checking anything.
    /// <br>
    /// <br>
    /// This operation is O(1).
    ///
    /// # Safety
    /// Caller must ensure:
    /// - `index` < [IndexPartition::capacity].
    /// - `index` is currently used.
    ///
    /// Violating either may read or write out of the buffers or corrupt the partition.
    pub unsafe fn mark_unused_unchecked(&mut self, index: Idx) {
        let last_used = self.used.wrapping_sub(1);
        self.swap_into_slot(index, last_used);
        self.used = last_used;
    }

    /// Swaps `index` with whatever index occupies `slot` in the bin, updating the location of
    /// both.
    ///
    /// # Safety
    /// `index` and `slot` must both be lower than the capacity.
    #[inline(always)]
    unsafe fn swap_into_slot(&mut self, index: Idx, slot: usize) {
        let index_pos = index.as_usize();
        let position = self.locations.get_unchecked(index_pos).as_usize();
        let displaced = *self.bin.get_unchecked(slot);

        *self.bin.get_unchecked_mut(position) = displaced;
        *self.bin.get_unchecked_mut(slot) = index;
        *self.locations.get_unchecked_mut(displaced.as_usize()) = Idx::from_usize(position);
        *self.locations.get_unchecked_mut(index_pos) = Idx::from_usize(slot);
    }

    /// Returns the position of this index inside the bin, or the error explaining why it isn't
    /// part of this partition's universe.
    fn checked_position(&self, index: Idx) -> Result<usize, PartitionError> {
        match index.try_as_usize().and_then(|index_pos| self.locations.get(index_pos)) {
            Some(position) => Ok(position.as_usize()),
            None => {
                let capacity = self.capacity();
                tracing::trace!(%index, capacity, "index is out of range");
                Err(PartitionError::OutOfRange { index: index.try_as_usize().unwrap_or(usize::MAX), capacity })
            }
        }
    }

    /// Marks any unused index as used and returns it, or [Option::None] if every index is already
    /// used, acting as the allocation step of a free list.
    /// <br>
    /// <br>
    /// The index returned is whichever sits right after the used partition, so no swap is needed.
    /// <br>
    /// <br>
    /// This operation is O(1).
    pub fn acquire(&mut self) -> Option<Idx> {
        let index = *self.bin.get(self.used)?;
        self.used += 1;
        Some(index)
    }

    /// Marks every index as unused without reallocating.
    /// <br>
    /// <br>
    /// This operation is O(1), as the bin stays a valid permutation and only the boundary moves.
    pub fn clear(&mut self) {
        self.used = 0;
    }

    /// Amount of indexes this partition manages, every index is within `0..capacity`.
    pub fn capacity(&self) -> usize {
        self.bin.len()
    }

    /// Amount of used indexes.
    pub fn used_count(&self) -> Idx {
        Idx::from_usize(self.used)
    }

    /// Amount of unused indexes.
    pub fn unused_count(&self) -> Idx {
        Idx::from_usize(self.bin.len() - self.used)
    }

    /// Returns whether no index is used.
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Returns whether every index is used.
    pub fn is_full(&self) -> bool {
        self.used == self.bin.len()
    }

    /// Returns whether this index is used, out of range indexes are never used.
    /// <br>
    /// <br>
    /// This operation is O(1).
    pub fn is_used(&self, index: Idx) -> bool {
        self.position_of(index).is_some_and(|position| position.as_usize() < self.used)
    }

    /// Position this index currently occupies inside the bin, or [Option::None] if out of range.
    pub fn position_of(&self, index: Idx) -> Option<Idx> {
        index.try_as_usize().and_then(|index_pos| self.locations.get(index_pos)).copied()
    }

    /// Used indexes, in no particular order.
    pub fn used(&self) -> &[Idx] {
        &self.bin[..self.used]
    }

    /// Unused indexes, in no particular order.
    pub fn unused(&self) -> &[Idx] {
        &self.bin[self.used..]
    }

    /// Iterator over the used indexes, in no particular order.
    pub fn iter_used(&self) -> Iter<'_, Idx> {
        Iter::new(self.used())
    }

    /// Iterator over the unused indexes, in no particular order.
    pub fn iter_unused(&self) -> Iter<'_, Idx> {
        Iter::new(self.unused())
    }

    /// The whole bin, used indexes first and then unused ones, the boundary being
    /// [IndexPartition::used_count].
    pub fn bin_layout(&self) -> &[Idx] {
        &self.bin
    }

    /// Position inside [IndexPartition::bin_layout] of every index.
    pub fn location_map(&self) -> &[Idx] {
        &self.locations
    }
}
