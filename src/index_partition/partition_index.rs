use core::fmt::{Debug, Display};
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Unsigned integer types that can be stored in an [super::IndexPartition], both as index values
/// and as positions inside its bin.
/// <br>
/// <br>
/// The width of the type bounds the capacity of the partition, as the amount of used indexes must
/// be representable too, meaning a partition over `u8` holds at most 255 indexes.
pub trait PartitionIndex: sealed::Sealed + Copy + Ord + Hash + Debug + Display + Default {
    /// Greatest value of this type.
    const MAX: Self;

    /// Converts a `usize` known to be in range, truncating otherwise.
    fn from_usize(value: usize) -> Self;

    /// Converts into `usize`, truncating if the value doesn't fit.
    fn as_usize(self) -> usize;

    /// Converts into `usize`, returning [Option::None] if the value doesn't fit.
    fn try_as_usize(self) -> Option<usize>;

    /// Greatest capacity a partition over this type may have.
    fn max_capacity() -> usize {
        Self::MAX.try_as_usize().unwrap_or(usize::MAX)
    }
}

macro_rules! impl_partition_index {
    ($($int:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $int {}

            impl PartitionIndex for $int {
                const MAX: Self = <$int>::MAX;

                #[inline(always)]
                fn from_usize(value: usize) -> Self {
                    value as $int
                }

                #[inline(always)]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn try_as_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_partition_index!(u8, u16, u32, u64, usize);
