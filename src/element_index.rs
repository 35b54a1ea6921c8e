use crate::{PowerSetError, Slot, MAX_ELEMENTS};
use ahash::AHashMap;
use core::fmt::Debug;
use core::hash::Hash;

/// Bijection between up to [`MAX_ELEMENTS`] distinct elements and the mask
/// slots `0..len`, assigned in input iteration order. Built once per
/// [`PowerSetView`](crate::PowerSetView) and never mutated afterwards; every
/// subset and iterator reads it through a shared borrow.
pub struct ElementIndex<E> {
    // invariants:
    // slots[by_slot[i]] == i for all i < by_slot.len()
    // by_slot.len() == slots.len() <= MAX_ELEMENTS
    slots: AHashMap<E, Slot>,
    by_slot: Vec<E>,
}

impl<E: Debug> Debug for ElementIndex<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list().entries(self.by_slot.iter()).finish()
    }
}

impl<E: Hash + Eq + Clone> ElementIndex<E> {
    /// Assigns each distinct element a slot in iteration order. Duplicates
    /// collapse onto their first slot. Errs when the distinct count exceeds
    /// [`MAX_ELEMENTS`].
    pub fn build<I: IntoIterator<Item = E>>(elements: I) -> Result<Self, PowerSetError> {
        let mut slots = AHashMap::new();
        let mut by_slot = Vec::new();
        for element in elements {
            if slots.contains_key(&element) {
                continue;
            }
            slots.insert(element.clone(), by_slot.len() as Slot);
            by_slot.push(element);
        }
        if by_slot.len() > MAX_ELEMENTS {
            return Err(PowerSetError::InputTooLarge { count: by_slot.len() });
        }
        Ok(Self { slots, by_slot })
    }
}

impl<E> ElementIndex<E> {
    /// Number of distinct elements indexed.
    pub fn len(&self) -> usize {
        self.by_slot.len()
    }
    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }
    /// The elements in slot order.
    pub fn elements(&self) -> &[E] {
        &self.by_slot
    }
    /// Inverse lookup. Callers uphold `slot < self.len()`.
    pub(crate) fn element(&self, slot: Slot) -> &E {
        &self.by_slot[slot as usize]
    }
}

impl<E: Hash + Eq> ElementIndex<E> {
    pub fn slot_of(&self, element: &E) -> Option<Slot> {
        self.slots.get(element).copied()
    }
    pub fn contains_element(&self, element: &E) -> bool {
        self.slots.contains_key(element)
    }
}
