//! Lazily-evaluated power set of up to [`MAX_ELEMENTS`] distinct elements.
//!
//! A [`PowerSetView`] never materializes its `2^n` subsets. Each subset is
//! encoded as a 64-bit [`Mask`] over an element index built once at
//! construction; membership, cardinality, and enumeration are all computed
//! from masks on demand.
//!
//! ```
//! use masked_power_set::{LongSet, PowerSetView};
//!
//! let ps = PowerSetView::new(["a", "b", "c"])?;
//! assert_eq!(ps.long_len()?, 8);
//! assert!(ps.checked_len().is_err()); // bounded counts are refused
//! assert!(ps.contains(&["a", "c"]));
//! assert_eq!(ps.iter().count(), 8);
//! # Ok::<(), masked_power_set::PowerSetError>(())
//! ```

mod error;
pub use error::PowerSetError;

mod element_index;
pub use element_index::ElementIndex;

mod subset;
pub use subset::SubsetView;

mod power_set;
pub use power_set::PowerSetView;

pub mod iterators;
use iterators::{PowerSetIter, SubsetIter};

mod traits;
pub use traits::LongSet;


/////////////////////////////////////////////

/// Encodes a subset as bits: bit `i` set means "the element at slot `i` is in".
pub type Mask = u64;
/// 0-based position assigned to an element within an [`ElementIndex`].
pub type Slot = u32;

/// Largest supported universe: one mask bit per element, with the top bit
/// left clear so every mask stays a valid non-negative 64-bit count.
pub const MAX_ELEMENTS: usize = 63;

const fn bit(slot: Slot) -> Mask {
    1 << slot
}

/// `2^n - 1`: every valid slot bit set. Callers uphold `n <= MAX_ELEMENTS`.
const fn full_mask(n: usize) -> Mask {
    (1 << n) - 1
}
