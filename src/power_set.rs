use super::*;
use core::borrow::Borrow;
use core::fmt::Debug;
use core::hash::Hash;

/// The set of all `2^n` subsets of up to [`MAX_ELEMENTS`] distinct elements.
///
/// Owns the [`ElementIndex`] built once at construction; everything else is
/// derived from it and a mask on demand. Iteration walks consecutive masks
/// `0..=2^n - 1`, so subsets appear in increasing binary-counter order over
/// "is element 0 in", "is element 1 in", and so on.
pub struct PowerSetView<E> {
    index: ElementIndex<E>,
}

impl<E: Debug> Debug for PowerSetView<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // 2^n entries is no way to debug-print; show the universe instead.
        f.debug_struct("PowerSetView")
            .field("elements", &self.index.elements())
            .finish()
    }
}

impl<E: Hash + Eq + Clone> PowerSetView<E> {
    /// Builds the element index and nothing else. Errs with
    /// [`PowerSetError::InputTooLarge`] past [`MAX_ELEMENTS`] distinct
    /// elements; duplicates collapse first and do not count.
    pub fn new<I: IntoIterator<Item = E>>(elements: I) -> Result<Self, PowerSetError> {
        Ok(Self { index: ElementIndex::build(elements)? })
    }
}

impl<E> PowerSetView<E> {
    /// Number of elements in the universe, not the power set's cardinality.
    pub fn element_count(&self) -> usize {
        self.index.len()
    }

    /// The universe in slot order.
    pub fn elements(&self) -> &[E] {
        self.index.elements()
    }

    /// `2^n` as an unsigned 64-bit count. A 63-element universe is legal to
    /// build but its cardinality is reported as [`PowerSetError::SizeOverflow`]
    /// here rather than silently wrapping into the sign position.
    pub fn long_len(&self) -> Result<u64, PowerSetError> {
        let n = self.index.len();
        if n >= MAX_ELEMENTS {
            return Err(PowerSetError::SizeOverflow { element_count: n });
        }
        Ok(1u64 << n)
    }

    /// Always false: even the power set of `{}` contains the empty subset.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The terminal iteration mask, `2^n - 1`.
    pub fn full_mask(&self) -> Mask {
        full_mask(self.index.len())
    }

    /// Decodes a single mask into its subset. Bits at or above the element
    /// count are ignored, keeping the subset invariant intact.
    pub fn subset(&self, mask: Mask) -> SubsetView<'_, E> {
        SubsetView::new(&self.index, mask & self.full_mask())
    }

    /// A fresh traversal over all `2^n` subsets, one per mask in strictly
    /// increasing mask order. Iterators are independent: each owns its own
    /// cursor and nothing here is ever mutated.
    pub fn iter(&self) -> PowerSetIter<'_, E> {
        PowerSetIter::new(&self.index)
    }
}

impl<E: Hash + Eq> PowerSetView<E> {
    /// Membership by containment: any collection of universe elements is a
    /// member, since every subset of the input is in the power set.
    pub fn contains<I>(&self, candidate: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        candidate
            .into_iter()
            .all(|element| self.index.contains_element(element.borrow()))
    }

    /// Membership check for a subset produced by this or another power set.
    pub fn contains_subset(&self, candidate: &SubsetView<'_, E>) -> bool {
        if core::ptr::eq(candidate.index(), &self.index) {
            return true;
        }
        self.contains(candidate.iter())
    }
}

// Equal iff the universes match element-for-element in slot order: the same
// elements assigned to the same slots enumerate the same subsets in the same
// order.
impl<E: PartialEq> PartialEq for PowerSetView<E> {
    fn eq(&self, other: &Self) -> bool {
        self.index.elements() == other.index.elements()
    }
}
impl<E: Eq> Eq for PowerSetView<E> {}

impl<E: Hash> Hash for PowerSetView<E> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        // Slice hashing commits to both the contents and the length.
        self.index.elements().hash(state);
    }
}

impl<'a, E> IntoIterator for &'a PowerSetView<E> {
    type Item = SubsetView<'a, E>;
    type IntoIter = PowerSetIter<'a, E>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
