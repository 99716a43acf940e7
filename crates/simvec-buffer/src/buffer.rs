//! The owned buffer: one heap block, one owner.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use simvec_core::BufferError;

/// Exclusive-ownership handle to a contiguous heap block of `T`.
///
/// A buffer is either empty (owns nothing) or owns exactly one block of
/// [`len`](Self::len) elements. Every slot of an owned block is initialised:
/// blocks are created from `T::default()` or adopted from an existing boxed
/// slice.
///
/// The type is move-only. There is no `Clone` impl, so a block can never be
/// owned twice; dropping the buffer releases its block exactly once, and
/// dropping an empty buffer does nothing.
///
/// ```compile_fail
/// use simvec_buffer::OwnedBuffer;
///
/// let buf = OwnedBuffer::<u8>::with_len(1);
/// let _copy = buf.clone();
/// ```
pub struct OwnedBuffer<T> {
    /// `None` is the empty state; a zero-length request never allocates.
    block: Option<Box<[T]>>,
}

impl<T> OwnedBuffer<T> {
    /// Create an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self { block: None }
    }

    /// Number of slots in the owned block (0 when empty).
    pub fn len(&self) -> usize {
        self.block.as_ref().map_or(0, |b| b.len())
    }

    /// True if the buffer has no slots.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True iff the buffer currently owns a block.
    ///
    /// This is the buffer's boolean state: a buffer created with zero
    /// elements, a default buffer, and a buffer that has been taken from all
    /// report `false`.
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }

    /// Exchange owned blocks with `other` in O(1).
    ///
    /// No element is moved, cloned or dropped.
    pub fn swap(&mut self, other: &mut OwnedBuffer<T>) {
        mem::swap(&mut self.block, &mut other.block);
    }

    /// Move the owned block out, leaving `self` empty.
    ///
    /// This is the move-assignment primitive: the returned buffer is now the
    /// sole owner, and `self` reports `is_allocated() == false`.
    pub fn take(&mut self) -> OwnedBuffer<T> {
        OwnedBuffer {
            block: self.block.take(),
        }
    }

    /// Shared view of every slot.
    pub fn as_slice(&self) -> &[T] {
        self.block.as_deref().unwrap_or(&[])
    }

    /// Mutable view of every slot.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.block.as_deref_mut() {
            Some(block) => block,
            None => &mut [],
        }
    }

    /// Reference to the first slot of the block.
    ///
    /// Returns [`BufferError::NullBuffer`] if the buffer owns no block (or
    /// owns a zero-length one).
    pub fn first(&self) -> Result<&T, BufferError> {
        self.as_slice().first().ok_or(BufferError::NullBuffer)
    }

    /// Mutable reference to the first slot of the block.
    ///
    /// Returns [`BufferError::NullBuffer`] if the buffer owns no block.
    pub fn first_mut(&mut self) -> Result<&mut T, BufferError> {
        self.as_mut_slice()
            .first_mut()
            .ok_or(BufferError::NullBuffer)
    }

    /// Give up ownership of the block, returning it as a boxed slice.
    ///
    /// An empty buffer yields an empty boxed slice (which does not allocate).
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.block.unwrap_or_default()
    }
}

impl<T: Default> OwnedBuffer<T> {
    /// Allocate a block of `len` default-constructed elements.
    ///
    /// `len == 0` returns an empty buffer without allocating. Allocation
    /// failure aborts the process, as with every global-allocator request.
    pub fn with_len(len: usize) -> Self {
        if len == 0 {
            return Self::new();
        }
        let block: Box<[T]> = (0..len).map(|_| T::default()).collect();
        Self { block: Some(block) }
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Box<[T]>> for OwnedBuffer<T> {
    fn from(block: Box<[T]>) -> Self {
        if block.is_empty() {
            return Self::new();
        }
        Self { block: Some(block) }
    }
}

impl<T> From<Vec<T>> for OwnedBuffer<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from(v.into_boxed_slice())
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    /// Slot access with slice semantics.
    ///
    /// Panics if `index >= len()`. Use
    /// [`get_unchecked`](OwnedBuffer::get_unchecked) on hot paths where the
    /// caller already guarantees the bound.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("allocated", &self.is_allocated())
            .field("slots", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simvec_test_utils::Tracked;

    #[test]
    fn new_buffer_is_empty_and_unallocated() {
        let buf: OwnedBuffer<u32> = OwnedBuffer::new();
        assert!(!buf.is_allocated());
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn with_len_default_constructs_every_slot() {
        let buf: OwnedBuffer<u32> = OwnedBuffer::with_len(5);
        assert!(buf.is_allocated());
        assert_eq!(buf.len(), 5);
        assert!(buf.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_len_does_not_allocate() {
        let buf: OwnedBuffer<String> = OwnedBuffer::with_len(0);
        assert!(!buf.is_allocated());
        assert!(buf.first().is_err());
    }

    #[test]
    fn index_reads_and_writes_slots() {
        let mut buf: OwnedBuffer<i32> = OwnedBuffer::with_len(3);
        buf[1] = 42;
        assert_eq!(buf[1], 42);
        assert_eq!(buf.as_slice(), &[0, 42, 0]);
    }

    #[test]
    #[should_panic]
    fn index_past_len_panics() {
        let buf: OwnedBuffer<i32> = OwnedBuffer::with_len(2);
        let _ = buf[2];
    }

    #[test]
    fn swap_exchanges_blocks() {
        let mut a = OwnedBuffer::from(vec![1, 2, 3]);
        let mut b = OwnedBuffer::from(vec![9]);
        let a_ptr = a.as_slice().as_ptr();
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[9]);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        // The block itself moved, not its contents.
        assert_eq!(b.as_slice().as_ptr(), a_ptr);
    }

    #[test]
    fn swap_with_empty_transfers_ownership() {
        let mut a = OwnedBuffer::from(vec![7u8, 8]);
        let mut b = OwnedBuffer::new();
        a.swap(&mut b);
        assert!(!a.is_allocated());
        assert!(b.is_allocated());
        assert_eq!(b.as_slice(), &[7, 8]);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut src = OwnedBuffer::from(vec![1, 2]);
        let dst = src.take();
        assert!(!src.is_allocated());
        assert_eq!(src.len(), 0);
        assert_eq!(dst.as_slice(), &[1, 2]);
    }

    #[test]
    fn first_reports_null_buffer() {
        let mut buf: OwnedBuffer<u8> = OwnedBuffer::new();
        assert_eq!(buf.first(), Err(BufferError::NullBuffer));
        assert_eq!(buf.first_mut(), Err(BufferError::NullBuffer));

        let mut buf = OwnedBuffer::from(vec![3u8, 4]);
        *buf.first_mut().unwrap() = 5;
        assert_eq!(buf.first(), Ok(&5));
    }

    #[test]
    fn empty_vec_adopts_as_unallocated() {
        let buf: OwnedBuffer<u8> = OwnedBuffer::from(Vec::new());
        assert!(!buf.is_allocated());
    }

    #[test]
    fn into_boxed_slice_releases_block() {
        let buf = OwnedBuffer::from(vec![1, 2, 3]);
        let boxed = buf.into_boxed_slice();
        assert_eq!(&*boxed, &[1, 2, 3]);

        let empty: OwnedBuffer<u8> = OwnedBuffer::new();
        assert!(empty.into_boxed_slice().is_empty());
    }

    #[test]
    fn drop_releases_every_element_once() {
        let before = Tracked::live();
        {
            let buf: OwnedBuffer<Tracked> = OwnedBuffer::with_len(4);
            assert_eq!(Tracked::live(), before + 4);
            drop(buf);
        }
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn take_and_swap_never_double_release() {
        let before = Tracked::live();
        {
            let mut a: OwnedBuffer<Tracked> = OwnedBuffer::with_len(3);
            let mut b: OwnedBuffer<Tracked> = OwnedBuffer::with_len(2);
            a.swap(&mut b);
            let c = a.take();
            assert_eq!(Tracked::live(), before + 5);
            drop(a);
            assert_eq!(Tracked::live(), before + 5);
            drop(c);
            assert_eq!(Tracked::live(), before + 3);
        }
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn debug_shows_slots() {
        let buf = OwnedBuffer::from(vec![1, 2]);
        let s = format!("{buf:?}");
        assert!(s.contains("allocated: true"));
        assert!(s.contains("[1, 2]"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn with_len_matches_request(len in 0usize..512) {
                let buf: OwnedBuffer<u64> = OwnedBuffer::with_len(len);
                prop_assert_eq!(buf.len(), len);
                prop_assert_eq!(buf.is_allocated(), len > 0);
            }

            #[test]
            fn double_swap_restores(a in proptest::collection::vec(any::<i32>(), 0..32),
                                    b in proptest::collection::vec(any::<i32>(), 0..32)) {
                let mut x = OwnedBuffer::from(a.clone());
                let mut y = OwnedBuffer::from(b.clone());
                x.swap(&mut y);
                x.swap(&mut y);
                prop_assert_eq!(x.as_slice(), a.as_slice());
                prop_assert_eq!(y.as_slice(), b.as_slice());
            }
        }
    }
}
