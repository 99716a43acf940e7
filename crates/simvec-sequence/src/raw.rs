//! Unchecked element access.
//!
//! The only module in this crate permitted to use `unsafe`. These accessors
//! are the sequence's counterpart to the buffer's unchecked slot access:
//! no validation, for call sites that already hold the bound.

#![allow(unsafe_code)]

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Reference to element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Indices in
    /// `[len, capacity)` are in-bounds for the buffer but name dead slots,
    /// and indices past capacity are undefined behaviour.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len(), "index {index} out of range");
        // SAFETY: index < len <= capacity == buffer.len().
        unsafe { self.buffer().get_unchecked(index) }
    }

    /// Mutable reference to element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "index {index} out of range");
        // SAFETY: index < len <= capacity == buffer.len().
        unsafe { self.buffer_mut().get_unchecked_mut(index) }
    }
}
