//! Core types for the simvec workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value types shared by the buffer and sequence layers: error types,
//! position handles, and the reserve request used to pick the reserving
//! constructor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod position;
pub mod reserve;

pub use error::{BufferError, SequenceError};
pub use position::Position;
pub use reserve::{reserve, ReserveRequest};
