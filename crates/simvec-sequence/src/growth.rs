//! Capacity growth policy.
//!
//! A [`GrowthPolicy`] turns the current capacity into the capacity a
//! reallocation should produce. Appends use geometric growth so that `N`
//! appends copy O(N) elements in total; explicit requests grow to exactly
//! what was asked for.

use std::fmt;

/// How a reallocation picks its target capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// `max(MIN_CAPACITY, capacity * GROWTH_FACTOR)`. Used by `push_back`
    /// and `insert` when the sequence is full.
    Doubling,
    /// Exactly the given capacity. Used by `reserve` and by `resize` past
    /// the current capacity.
    Exact(usize),
}

impl GrowthPolicy {
    /// Multiplier applied by [`GrowthPolicy::Doubling`].
    pub const GROWTH_FACTOR: usize = 2;

    /// Smallest capacity [`GrowthPolicy::Doubling`] produces, so that an
    /// empty sequence can grow at all.
    pub const MIN_CAPACITY: usize = 1;

    /// Target capacity for a sequence that currently has `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if doubling overflows `usize`. Such a
    /// request could never be allocated, and allocation failure is fatal.
    pub fn target_capacity(self, capacity: usize) -> usize {
        match self {
            Self::Doubling => capacity
                .checked_mul(Self::GROWTH_FACTOR)
                .unwrap_or_else(|| capacity_overflow())
                .max(Self::MIN_CAPACITY),
            Self::Exact(n) => n,
        }
    }
}

impl fmt::Display for GrowthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doubling => write!(f, "doubling"),
            Self::Exact(n) => write!(f, "exact({n})"),
        }
    }
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
