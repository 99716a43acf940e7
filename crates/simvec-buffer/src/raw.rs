//! Unchecked slot access.
//!
//! The only module in this crate permitted to use `unsafe`. Each accessor
//! forwards to the slice's unchecked accessor and inherits its contract.

#![allow(unsafe_code)]

use crate::buffer::OwnedBuffer;

impl<T> OwnedBuffer<T> {
    /// Reference to slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). An empty buffer has no
    /// valid index.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len(), "slot {index} out of bounds");
        // SAFETY: the caller guarantees `index < len()`.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Mutable reference to slot `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len(), "slot {index} out of bounds");
        // SAFETY: the caller guarantees `index < len()`.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }
}
