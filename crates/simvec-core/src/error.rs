//! Error types for the simvec containers.
//!
//! Split by layer: [`SequenceError`] for the checked operations of the
//! dynamic sequence, [`BufferError`] for the owned buffer's dereference
//! primitive. Allocation failure is not represented here; it is fatal.

use std::error::Error;
use std::fmt;

/// Errors from the checked operations of a sequence.
///
/// Neither variant carries recovery state, and the sequence is left
/// untouched when one is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// Checked access with an index at or past the logical size.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Logical size of the sequence at the time of the call.
        len: usize,
    },
    /// A position outside the range the operation accepts
    /// (`[begin, end]` for insert, `[begin, end)` for erase).
    InvalidPosition {
        /// The rejected position, as a logical index.
        position: usize,
        /// Logical size of the sequence at the time of the call.
        len: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for sequence of size {len}")
            }
            Self::InvalidPosition { position, len } => {
                write!(f, "invalid position {position} for sequence of size {len}")
            }
        }
    }
}

impl Error for SequenceError {}

/// Errors from the owned buffer layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// Dereference of a buffer that owns no block.
    NullBuffer,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullBuffer => write!(f, "dereference of an empty buffer"),
        }
    }
}

impl Error for BufferError {}
