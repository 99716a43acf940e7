//! Single-owner contiguous storage for simvec sequences.
//!
//! [`OwnedBuffer`] is the bottom layer of the workspace: one heap block of
//! `N` elements, owned by exactly one handle at a time. It has no notion of
//! logical size or capacity; the sequence layer builds those on top.
//!
//! # Ownership
//!
//! ```text
//! Sequence<T>
//! └── OwnedBuffer<T>  (move-only, swap, take)
//!     └── Box<[T]>    (released exactly once on drop)
//! ```
//!
//! The buffer does not implement `Clone`. Duplicating it is a compile-time
//! error; ownership moves, or is exchanged with [`OwnedBuffer::swap`].
//!
//! This crate denies `unsafe` everywhere except the `raw` module, which
//! holds the unchecked accessors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
mod raw;

pub use buffer::OwnedBuffer;
pub use simvec_core::BufferError;
