//! hexq: maximal non-attacking queen placements on hexagonal chess boards.
//!
//! A board of size `n` is a hexagon with `n` cells per edge. A hex queen
//! attacks along six lines; the search places `2·n−1` queens, one per
//! lattice column, such that none attacks another, and reports the first
//! such placement in cell-index order.
//!
//! This is the facade crate that re-exports the public API of the hexq
//! sub-crates and adds text rendering of solutions.
//!
//! # Quick start
//!
//! ```rust
//! use hexq::prelude::*;
//!
//! let geometry = BoardGeometry::new(4).unwrap();
//! let report = Solver::new(&geometry).run();
//! let SearchOutcome::Solved(solution) = report.outcome else {
//!     panic!("size 4 is solvable");
//! };
//! let text = hexq::render::render_queen_list(&geometry, solution.queens()).unwrap();
//! assert!(text.starts_with("Queen 1 coordinates: (1, 2)"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hexq-core` | `CellIndex`, `CaptureSet`, geometry errors |
//! | [`space`] | `hexq-space` | Board geometry, coordinates, ray directions |
//! | [`engine`] | `hexq-engine` | Board states and the backtracking solver |
//! | [`render`] | this crate | Queen lists and ASCII boards |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Index and bitmap types (`hexq-core`).
pub use hexq_core as types;

/// Board geometry and coordinate conversions (`hexq-space`).
///
/// [`space::BoardGeometry`] owns every size-dependent constant and all
/// conversions between [`space::HexCoord`], [`space::LatticeCoord`] and
/// linear indices.
pub use hexq_space as space;

/// Board states and the search (`hexq-engine`).
///
/// [`engine::solve`] for a one-call search, [`engine::Solver`] to drive it
/// step by step.
pub use hexq_engine as engine;

pub mod render;

/// Common imports for typical hexq usage.
///
/// ```rust
/// use hexq::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use hexq_core::{CaptureSet, CellIndex, GeometryError};

    // Space
    pub use hexq_space::{BoardGeometry, HexCoord, LatticeCoord, RayDirection, SpaceError};

    // Engine
    pub use hexq_engine::{
        solve, solve_with_metrics, ConfigError, SearchMetrics, SearchOutcome, SearchReport,
        SearchStatus, Solution, Solver, SolverConfig,
    };
}
