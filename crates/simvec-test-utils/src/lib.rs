//! Test utilities and fixture element types for simvec development.
//!
//! - [`Tracked`]: an element type that counts live instances per thread,
//!   for checking that containers release every element exactly once.
//! - [`fixtures`]: small deterministic sample builders.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::fmt;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static CLONES: Cell<usize> = const { Cell::new(0) };
}

/// Element type that keeps a per-thread count of live instances.
///
/// Every construction (`new`, `Default`, `Clone`) increments the count and
/// every drop decrements it. The libtest harness runs each test on its own
/// thread, so tests compare [`Tracked::live`] against a value captured at the
/// start rather than against zero.
pub struct Tracked {
    value: i64,
}

impl Tracked {
    pub fn new(value: i64) -> Self {
        LIVE.with(|c| c.set(c.get() + 1));
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Instances currently alive on this thread.
    pub fn live() -> isize {
        LIVE.with(Cell::get)
    }

    /// Clones performed on this thread so far.
    pub fn clones() -> usize {
        CLONES.with(Cell::get)
    }
}

impl Default for Tracked {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        CLONES.with(|c| c.set(c.get() + 1));
        Self::new(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        LIVE.with(|c| c.set(c.get() - 1));
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

impl From<i64> for Tracked {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}
