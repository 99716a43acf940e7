//! The dynamic sequence: logical size and capacity over one owned buffer.

use std::fmt;
use std::ops::{Index, IndexMut};

use simvec_buffer::OwnedBuffer;
use simvec_core::{Position, ReserveRequest, SequenceError};

use crate::growth::GrowthPolicy;

/// A growable contiguous sequence with explicit capacity management.
///
/// Slots `[0, len)` of the owned buffer are the live elements. Slots
/// `[len, capacity)` are allocated but logically absent: they hold either
/// default values or stale values left behind by `pop_back`, `erase`,
/// `clear` or truncation. Stale values stay alive until their slot is
/// overwritten or the sequence is dropped.
///
/// Invariant: `len() <= capacity()`, and the buffer holds exactly
/// `capacity()` slots.
pub struct Sequence<T> {
    size: usize,
    capacity: usize,
    buffer: OwnedBuffer<T>,
}

impl<T> Sequence<T> {
    /// Create an empty sequence. Does not allocate.
    pub const fn new() -> Self {
        Self {
            size: 0,
            capacity: 0,
            buffer: OwnedBuffer::new(),
        }
    }

    /// Wrap an already-initialised buffer whose first `size` slots are live.
    fn from_parts(size: usize, buffer: OwnedBuffer<T>) -> Self {
        debug_assert!(size <= buffer.len());
        Self {
            size,
            capacity: buffer.len(),
            buffer,
        }
    }

    /// Logical number of elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of allocated slots; the size reachable without reallocating.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True if the sequence holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.size]
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.buffer.as_mut_slice()[..size]
    }

    /// Checked access to element `index`.
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, SequenceError> {
        self.check_index(index)?;
        Ok(&self.buffer[index])
    }

    /// Checked mutable access to element `index`.
    ///
    /// Returns [`SequenceError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        self.check_index(index)?;
        Ok(&mut self.buffer[index])
    }

    fn check_index(&self, index: usize) -> Result<(), SequenceError> {
        if index >= self.size {
            log::debug!("rejected access at index {index}, size {}", self.size);
            return Err(SequenceError::OutOfRange {
                index,
                len: self.size,
            });
        }
        Ok(())
    }

    /// First live element, if any.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Last live element, if any.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Position of the first element.
    pub fn begin(&self) -> Position {
        Position::BEGIN
    }

    /// Position one past the last element.
    pub fn end(&self) -> Position {
        Position(self.size)
    }

    /// Iterator over the live elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the live elements in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drop the logical contents in O(1).
    ///
    /// Capacity is kept and the slots are not reinitialised.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Remove the last element, if any.
    ///
    /// Does nothing on an empty sequence; the call never fails and does not
    /// report whether an element was removed.
    pub fn pop_back(&mut self) {
        if self.size > 0 {
            self.size -= 1;
        }
    }

    /// Remove the element at `pos`, shifting the tail one slot left.
    ///
    /// Returns the position of the element that followed the erased one
    /// (equal to `pos`). Runs in O(len - pos). Positions at or after `pos`
    /// are invalidated.
    ///
    /// Returns [`SequenceError::InvalidPosition`] without modifying the
    /// sequence if `pos` is not in `[begin, end)`.
    pub fn erase(&mut self, pos: Position) -> Result<Position, SequenceError> {
        let index = pos.index();
        if index >= self.size {
            log::debug!("rejected erase at position {index}, size {}", self.size);
            return Err(SequenceError::InvalidPosition {
                position: index,
                len: self.size,
            });
        }
        let size = self.size;
        // The erased element rotates into the first dead slot.
        self.buffer.as_mut_slice()[index..size].rotate_left(1);
        self.size -= 1;
        Ok(pos)
    }

    /// Exchange contents, size and capacity with `other` in O(1).
    ///
    /// No element is moved or cloned; only buffer ownership changes hands.
    pub fn swap(&mut self, other: &mut Sequence<T>) {
        std::mem::swap(&mut self.size, &mut other.size);
        std::mem::swap(&mut self.capacity, &mut other.capacity);
        self.buffer.swap(&mut other.buffer);
    }

    /// Decompose into the owned buffer and the live length.
    pub(crate) fn into_parts(self) -> (OwnedBuffer<T>, usize) {
        (self.buffer, self.size)
    }

    pub(crate) fn buffer(&self) -> &OwnedBuffer<T> {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut OwnedBuffer<T> {
        &mut self.buffer
    }
}

impl<T: Default> Sequence<T> {
    /// Create a sequence of `len` default-valued elements.
    ///
    /// `len() == capacity() == len`.
    pub fn with_size(len: usize) -> Self {
        Self::from_parts(len, OwnedBuffer::with_len(len))
    }

    /// Create an empty sequence with `capacity` allocated slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(0, OwnedBuffer::with_len(capacity))
    }

    /// Create an empty sequence sized by a [`ReserveRequest`].
    ///
    /// ```
    /// use simvec_core::reserve;
    /// use simvec_sequence::Sequence;
    ///
    /// let seq: Sequence<u8> = Sequence::with_reserve(reserve(4));
    /// assert_eq!((seq.len(), seq.capacity()), (0, 4));
    /// ```
    pub fn with_reserve(request: ReserveRequest) -> Self {
        Self::with_capacity(request.capacity())
    }

    /// Change the logical size to `new_size`.
    ///
    /// - Shrinking only moves the end; capacity is unchanged.
    /// - Growing within capacity resets the newly exposed slots to
    ///   `T::default()`, never to the values they held before.
    /// - Growing past capacity reallocates to exactly `new_size` slots.
    pub fn resize(&mut self, new_size: usize) {
        if new_size <= self.size {
            self.size = new_size;
            return;
        }
        if new_size > self.capacity {
            // Fresh slots past the relocated prefix are already default.
            self.grow(GrowthPolicy::Exact(new_size));
        } else {
            let size = self.size;
            self.buffer.as_mut_slice()[size..new_size].fill_with(T::default);
        }
        self.size = new_size;
    }

    /// Append `value` at the end.
    ///
    /// O(1) while `len() < capacity()`; otherwise capacity doubles first
    /// (minimum 1), for amortized O(1) appends.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity {
            self.grow(GrowthPolicy::Doubling);
        }
        let size = self.size;
        self.buffer[size] = value;
        self.size += 1;
    }

    /// Insert `value` before `pos`, shifting the tail one slot right.
    ///
    /// `pos` may be anything in `[begin, end]`. When the sequence is full,
    /// capacity doubles (minimum 1) before the shift. Returns the position of
    /// the inserted element; positions obtained before the call must not be
    /// reused.
    ///
    /// Returns [`SequenceError::InvalidPosition`] without modifying the
    /// sequence if `pos` is past `end()`.
    pub fn insert(&mut self, pos: Position, value: T) -> Result<Position, SequenceError> {
        let index = pos.index();
        if index > self.size {
            log::debug!("rejected insert at position {index}, size {}", self.size);
            return Err(SequenceError::InvalidPosition {
                position: index,
                len: self.size,
            });
        }
        if self.size == self.capacity {
            self.grow(GrowthPolicy::Doubling);
        }
        let size = self.size;
        self.buffer[size] = value;
        self.buffer.as_mut_slice()[index..=size].rotate_right(1);
        self.size += 1;
        Ok(pos)
    }

    /// Ensure capacity for at least `new_capacity` elements.
    ///
    /// A no-op if `new_capacity <= capacity()`; otherwise reallocates to
    /// exactly `new_capacity`, preserving order and values.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity {
            return;
        }
        self.grow(GrowthPolicy::Exact(new_capacity));
    }

    /// Reallocate to the capacity chosen by `policy` and relocate the live
    /// elements into the new block.
    ///
    /// Elements are moved by swapping with the fresh block's default slots,
    /// so nothing is cloned. The old block, now holding defaults and stale
    /// values, is dropped once on return.
    fn grow(&mut self, policy: GrowthPolicy) {
        let new_capacity = policy.target_capacity(self.capacity);
        debug_assert!(new_capacity >= self.size);
        log::trace!(
            "sequence relocating {} elements: capacity {} -> {new_capacity} ({policy})",
            self.size,
            self.capacity
        );
        let size = self.size;
        let mut fresh = OwnedBuffer::with_len(new_capacity);
        fresh.as_mut_slice()[..size].swap_with_slice(&mut self.buffer.as_mut_slice()[..size]);
        self.buffer.swap(&mut fresh);
        self.capacity = new_capacity;
    }
}

impl<T: Clone> Sequence<T> {
    /// Create a sequence of `len` clones of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        Self::from(vec![value; len])
    }

    /// Create a sequence holding a copy of `items`, in order.
    ///
    /// `len() == capacity() == items.len()`.
    pub fn from_list(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for Sequence<T> {
    /// Deep copy into a fresh buffer of the same capacity.
    ///
    /// Live elements are cloned; dead slots of the copy are default.
    fn clone(&self) -> Self {
        let mut buffer = OwnedBuffer::with_len(self.capacity);
        buffer.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());
        Self::from_parts(self.size, buffer)
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(v: Vec<T>) -> Self {
        let size = v.len();
        Self::from_parts(size, OwnedBuffer::from(v))
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self::from_list(items)
    }
}

impl<T: Default> From<ReserveRequest> for Sequence<T> {
    fn from(request: ReserveRequest) -> Self {
        Self::with_reserve(request)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(*value);
        }
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    /// Access to a live element with slice semantics.
    ///
    /// Panics if `index >= len()`; dead slots are never reachable. Use
    /// [`at`](Sequence::at) for a recoverable error, or
    /// [`get_unchecked`](Sequence::get_unchecked) to skip the check.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
