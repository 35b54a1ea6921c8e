use super::*;
use core::iter::FusedIterator;

/// Lazy traversal over every subset of a [`PowerSetView`](crate::PowerSetView),
/// exactly one per mask value in `0..=terminal`, in increasing mask order.
///
/// Explicit cursor state, no buffering: exhausted once the cursor passes the
/// terminal mask. The terminal is `2^n - 1`, so the cursor peaks at `2^n`,
/// which a `u64` holds even for the 63-element boundary case.
#[derive(Debug)]
pub struct PowerSetIter<'a, E> {
    index: &'a ElementIndex<E>,
    cursor: Mask,
    terminal: Mask,
}

/// Lazy traversal over one subset's elements in increasing slot order,
/// decoded from a private working copy of the mask.
#[derive(Debug)]
pub struct SubsetIter<'a, E> {
    index: &'a ElementIndex<E>,
    remaining: Mask,
}

impl<'a, E> PowerSetIter<'a, E> {
    pub(crate) fn new(index: &'a ElementIndex<E>) -> Self {
        Self { index, cursor: 0, terminal: full_mask(index.len()) }
    }

    /// How many subsets this traversal has yet to emit. Fits a `u64` even at
    /// the start of a 63-element traversal (`2^63`), where `size_hint` would
    /// have to saturate on 32-bit targets.
    pub fn remaining(&self) -> u64 {
        if self.cursor > self.terminal {
            return 0;
        }
        self.terminal - self.cursor + 1
    }
}

impl<'a, E> Iterator for PowerSetIter<'a, E> {
    type Item = SubsetView<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor > self.terminal {
            return None;
        }
        let subset = SubsetView::new(self.index, self.cursor);
        self.cursor += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        if remaining > usize::MAX as u64 {
            return (usize::MAX, None);
        }
        (remaining as usize, Some(remaining as usize))
    }
}

impl<E> FusedIterator for PowerSetIter<'_, E> {}

impl<E> Clone for PowerSetIter<'_, E> {
    fn clone(&self) -> Self {
        Self { index: self.index, cursor: self.cursor, terminal: self.terminal }
    }
}

impl<'a, E> SubsetIter<'a, E> {
    pub(crate) fn new(index: &'a ElementIndex<E>, mask: Mask) -> Self {
        Self { index, remaining: mask }
    }
}

impl<E> Clone for SubsetIter<'_, E> {
    fn clone(&self) -> Self {
        Self { index: self.index, remaining: self.remaining }
    }
}

impl<'a, E> Iterator for SubsetIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        if self.remaining == 0 {
            return None;
        }
        // self.remaining is NONZERO
        let slot = self.remaining.trailing_zeros();
        self.remaining &= !bit(slot);
        Some(self.index.element(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl<E> ExactSizeIterator for SubsetIter<'_, E> {}
impl<E> FusedIterator for SubsetIter<'_, E> {}
