//! Hexagonal board geometry for hexq.
//!
//! A hexagonal chess board of edge length `size` is described three ways:
//!
//! - [`HexCoord`]: `(column, row-within-column)`, the storage order.
//! - [`LatticeCoord`]: `(x, y)` on the enclosing rectangular lattice. Queen
//!   lines are straight only here, so all movement arithmetic happens in
//!   lattice space.
//! - [`CellIndex`](hexq_core::CellIndex): dense column-major index used by
//!   the capture bitmap.
//!
//! [`BoardGeometry`] derives every size-dependent constant once and owns
//! all conversions between the three forms. [`RayDirection`] enumerates the
//! twelve lattice steps along which a queen attacks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod geometry;
pub mod ray;

pub use coord::{HexCoord, LatticeCoord};
pub use error::SpaceError;
pub use geometry::BoardGeometry;
pub use ray::{Ray, RayDirection, RayKind};
