//! simvec: a growable contiguous sequence over a single-owner buffer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the simvec sub-crates. For most users, adding `simvec` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use simvec::prelude::*;
//!
//! let mut seq = sequence![1, 2, 3];
//! let at = seq.insert(seq.begin() + 1, 9).unwrap();
//! assert_eq!(seq, [1, 9, 2, 3]);
//!
//! seq.erase(at).unwrap();
//! assert_eq!(seq, [1, 2, 3]);
//!
//! // Checked access reports instead of panicking.
//! assert_eq!(
//!     seq.at(5),
//!     Err(SequenceError::OutOfRange { index: 5, len: 3 })
//! );
//!
//! // Reserve up front, then append without reallocating.
//! let mut buf: Sequence<u32> = Sequence::from(reserve(4));
//! for i in 0..4 {
//!     buf.push_back(i);
//! }
//! assert_eq!(buf.capacity(), 4);
//! buf.push_back(4);
//! assert_eq!(buf.capacity(), 8);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `simvec-core` | Errors, `Position`, `ReserveRequest` |
//! | [`buffer`] | `simvec-buffer` | `OwnedBuffer`, the single-owner block |
//! | [`sequence`] | `simvec-sequence` | `Sequence`, growth policy, iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, positions and reserve requests (`simvec-core`).
pub use simvec_core as types;

/// Single-owner contiguous storage (`simvec-buffer`).
///
/// Most users never touch [`buffer::OwnedBuffer`] directly; every
/// [`Sequence`] owns exactly one.
pub use simvec_buffer as buffer;

/// The growable sequence and its growth policy (`simvec-sequence`).
pub use simvec_sequence as sequence;

pub use simvec_core::{reserve, Position, ReserveRequest, SequenceError};
pub use simvec_sequence::Sequence;

/// Build a [`Sequence`] from a literal element list.
///
/// - `sequence![a, b, c]` copies the listed elements in order; length and
///   capacity both equal the element count.
/// - `sequence![value; n]` holds `n` clones of `value`.
///
/// ```rust
/// use simvec::sequence;
///
/// let s = sequence![1, 2, 3];
/// assert_eq!((s.len(), s.capacity()), (3, 3));
///
/// let z = sequence![0u8; 4];
/// assert_eq!(z, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::new()
    };
    ($value:expr; $n:expr) => {
        $crate::Sequence::filled($n, $value)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from([$($x),+])
    };
}

/// Common imports for typical simvec usage.
///
/// ```rust
/// use simvec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence;

    // Core types
    pub use simvec_core::{reserve, Position, ReserveRequest};

    // Errors
    pub use simvec_core::{BufferError, SequenceError};

    // Storage
    pub use simvec_buffer::OwnedBuffer;
    pub use simvec_sequence::{GrowthPolicy, Sequence};
}
