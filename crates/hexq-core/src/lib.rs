//! Core types for the hexq hexagonal queens solver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental pieces shared by the geometry and search crates:
//! the [`CellIndex`] identifier, the [`CaptureSet`] bitmap, and the
//! [`GeometryError`] returned when a board cannot be constructed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod capture;
pub mod error;
pub mod id;

pub use capture::{CaptureSet, CaptureSetIter};
pub use error::GeometryError;
pub use id::CellIndex;
