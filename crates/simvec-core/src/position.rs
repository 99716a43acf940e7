//! Position handles into a sequence.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A lightweight position within a sequence, expressed as a logical index.
///
/// Positions carry no ownership and no reference to the sequence they came
/// from. `begin()` of any sequence is `Position(0)` and `end()` is
/// `Position(len)`. Operations that reallocate or shift elements invalidate
/// previously obtained positions: the index stays meaningful as a number,
/// but may denote a different element (or none) afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(pub usize);

impl Position {
    /// The first position of every sequence.
    pub const BEGIN: Position = Position(0);

    /// The logical index this position denotes.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Number of slots from `earlier` to `self`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `earlier` is after `self`.
    pub fn distance_from(self, earlier: Position) -> usize {
        self.0 - earlier.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Position {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

impl From<Position> for usize {
    fn from(p: Position) -> Self {
        p.0
    }
}

impl Add<usize> for Position {
    type Output = Position;

    fn add(self, rhs: usize) -> Position {
        Position(self.0 + rhs)
    }
}

impl AddAssign<usize> for Position {
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sub<usize> for Position {
    type Output = Position;

    fn sub(self, rhs: usize) -> Position {
        Position(self.0 - rhs)
    }
}

impl SubAssign<usize> for Position {
    fn sub_assign(&mut self, rhs: usize) {
        self.0 -= rhs;
    }
}
