use super::*;
use core::hash::Hash;

/// Capability set shared by lazily-evaluated set representations whose true
/// cardinality may need a full 64-bit count.
///
/// Both [`PowerSetView`] and [`SubsetView`] implement this; neither inherits
/// anything from the other. Membership tests live on the concrete types since
/// the two have different member shapes (single elements vs collections).
pub trait LongSet {
    type Item<'a>
    where
        Self: 'a;
    type Iter<'a>: Iterator<Item = Self::Item<'a>>
    where
        Self: 'a;

    /// Cardinality as an unsigned 64-bit count.
    fn long_len(&self) -> Result<u64, PowerSetError>;

    /// Cardinality as a bounded `usize`, for sets small enough to report one.
    /// Power sets refuse this outright; see
    /// [`PowerSetError::BoundedLenUnsupported`].
    fn checked_len(&self) -> Result<usize, PowerSetError>;

    /// A fresh, independent traversal. Pulling one iterator never disturbs
    /// another.
    fn iter(&self) -> Self::Iter<'_>;

    fn is_empty(&self) -> bool {
        matches!(self.long_len(), Ok(0))
    }

    /// Materializes the whole traversal. The one place this crate builds a
    /// concrete collection, and only because the caller asked.
    fn to_vec(&self) -> Vec<Self::Item<'_>> {
        self.iter().collect()
    }
}

impl<E: Hash + Eq> LongSet for SubsetView<'_, E> {
    type Item<'a>
        = &'a E
    where
        Self: 'a;
    type Iter<'a>
        = SubsetIter<'a, E>
    where
        Self: 'a;

    fn long_len(&self) -> Result<u64, PowerSetError> {
        Ok(self.mask().count_ones() as u64)
    }

    fn checked_len(&self) -> Result<usize, PowerSetError> {
        Ok(self.len())
    }

    fn iter(&self) -> Self::Iter<'_> {
        SubsetView::iter(*self)
    }
}

impl<E: Hash + Eq> LongSet for PowerSetView<E> {
    type Item<'a>
        = SubsetView<'a, E>
    where
        Self: 'a;
    type Iter<'a>
        = PowerSetIter<'a, E>
    where
        Self: 'a;

    fn long_len(&self) -> Result<u64, PowerSetError> {
        PowerSetView::long_len(self)
    }

    fn checked_len(&self) -> Result<usize, PowerSetError> {
        Err(PowerSetError::BoundedLenUnsupported)
    }

    fn iter(&self) -> Self::Iter<'_> {
        PowerSetView::iter(self)
    }
}
