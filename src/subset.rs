use super::*;
use core::borrow::Borrow;
use core::fmt::Debug;
use core::hash::{Hash, Hasher};
use core::ptr;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// One subset of a power set's universe, encoded as the set bits of `mask`.
///
/// A cheap `Copy` value: a borrow of the shared [`ElementIndex`] plus the
/// mask. Nothing is materialized until [`iter`](SubsetView::iter) is pulled.
pub struct SubsetView<'a, E> {
    index: &'a ElementIndex<E>,
    // invariant: bits at or above index.len() are clear
    mask: Mask,
}

// not derived: copying the view never copies an E
impl<E> Clone for SubsetView<'_, E> {
    fn clone(&self) -> Self {
        Self { index: self.index, mask: self.mask }
    }
}
impl<E> Copy for SubsetView<'_, E> {}

impl<E: Debug> Debug for SubsetView<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, E> SubsetView<'a, E> {
    pub(crate) fn new(index: &'a ElementIndex<E>, mask: Mask) -> Self {
        Self { index, mask }
    }

    /// The raw slot-bit encoding of this subset.
    pub fn mask(self) -> Mask {
        self.mask
    }

    /// Population count of the mask. O(1), no scan.
    pub fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.mask == 0
    }

    /// Elements in increasing slot order. Each call starts a fresh traversal;
    /// the view itself is never advanced.
    pub fn iter(self) -> SubsetIter<'a, E> {
        SubsetIter::new(self.index, self.mask)
    }

    pub(crate) fn index(self) -> &'a ElementIndex<E> {
        self.index
    }
}

impl<E: Hash + Eq> SubsetView<'_, E> {
    /// Slot lookup plus bit test. Elements outside the universe are never
    /// members.
    pub fn contains(self, candidate: &E) -> bool {
        match self.index.slot_of(candidate) {
            Some(slot) => self.mask & bit(slot) != 0,
            None => false,
        }
    }

    pub fn contains_all<I>(self, candidates: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        candidates.into_iter().all(|c| self.contains(c.borrow()))
    }

    // Order-independent, and independent of which index the elements live in,
    // so it agrees with content equality across distinct power sets.
    fn content_hash(self) -> u64 {
        let state = ahash::RandomState::with_seeds(
            0x243f_6a88_85a3_08d3,
            0x1319_8a2e_0370_7344,
            0xa409_3822_299f_31d0,
            0x082e_fa98_ec4e_6c89,
        );
        self.iter()
            .map(|element| state.hash_one(element))
            .fold(0u64, u64::wrapping_add)
    }
}

impl<E: Hash + Eq> PartialEq for SubsetView<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self.index, other.index) {
            return self.mask == other.mask;
        }
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}
impl<E: Hash + Eq> Eq for SubsetView<'_, E> {}

impl<E: Hash + Eq> Hash for SubsetView<'_, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        state.write_u64(self.content_hash());
    }
}

impl<E: Hash + Eq, S: BuildHasher> PartialEq<HashSet<E, S>> for SubsetView<'_, E> {
    fn eq(&self, other: &HashSet<E, S>) -> bool {
        self.len() == other.len() && other.iter().all(|element| self.contains(element))
    }
}
impl<E: Hash + Eq, S: BuildHasher> PartialEq<SubsetView<'_, E>> for HashSet<E, S> {
    fn eq(&self, other: &SubsetView<'_, E>) -> bool {
        other == self
    }
}

impl<'a, E> IntoIterator for SubsetView<'a, E> {
    type Item = &'a E;
    type IntoIter = SubsetIter<'a, E>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, E> IntoIterator for &SubsetView<'a, E> {
    type Item = &'a E;
    type IntoIter = SubsetIter<'a, E>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
