//! Growable contiguous sequence for the simvec workspace.
//!
//! [`Sequence`] layers a logical size and a capacity over exactly one
//! [`OwnedBuffer`](simvec_buffer::OwnedBuffer) it owns:
//!
//! ```text
//! Sequence<T>
//! ├── size      live slots [0, size)
//! ├── capacity  allocated slots, capacity >= size
//! └── OwnedBuffer<T> (capacity slots)
//!     ├── [0, size)         live elements
//!     └── [size, capacity)  dead slots: default or stale, always assignable
//! ```
//!
//! # Growth
//!
//! Every reallocation goes through one grow-and-relocate step driven by a
//! [`GrowthPolicy`]: `push_back` and `insert` double (minimum 1), `reserve`
//! and `resize` grow to the exact requested size.
//!
//! # Position validity
//!
//! [`Position`](simvec_core::Position) handles are plain indices. Any call
//! that reallocates or shifts elements (growth, `insert`, `erase`,
//! `reserve`, `resize` past capacity, `swap`) may make a previously obtained
//! position denote a different element.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod cmp;
pub mod growth;
pub mod iter;
mod raw;
pub mod sequence;

pub use growth::GrowthPolicy;
pub use iter::IntoIter;
pub use sequence::Sequence;
