use crate::MAX_ELEMENTS;
use thiserror::Error;

/// Everything that can go wrong constructing or sizing a power set.
///
/// Membership tests and iteration are total and never produce one of these.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum PowerSetError {
    /// The input holds more distinct elements than a 63-bit mask can address.
    #[error("max elements of {MAX_ELEMENTS} exceeded: {count}")]
    InputTooLarge { count: usize },

    /// `2^63` does not fit a non-negative 64-bit count. Construction with 63
    /// elements is legal; only the size query reports this.
    #[error("size of power set of {element_count} elements exceeds a 64-bit count")]
    SizeOverflow { element_count: usize },

    /// The bounded length query is refused outright: a power set's true size
    /// routinely exceeds `usize` on 32-bit targets and `i32`-style counts
    /// everywhere. Use `long_len` instead.
    #[error("bounded len is unsupported for power sets; use long_len")]
    BoundedLenUnsupported,
}
