//! Reserve requests.
//!
//! A [`ReserveRequest`] wraps a capacity so that "allocate `n` slots but hold
//! no elements" cannot be confused with "hold `n` default elements" at the
//! call site. Build one with [`reserve`] and convert it into a sequence.

/// A requested capacity for an otherwise empty sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    /// Wrap a requested capacity.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested capacity in elements.
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Build a [`ReserveRequest`] for `capacity` slots.
pub const fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
