//! Error types for checked coordinate conversions.

use crate::coord::HexCoord;
use hexq_core::CellIndex;
use std::fmt;

/// Errors arising when a caller-supplied index or coordinate is not a board cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A linear index is at or beyond the board's cell count.
    IndexOutOfBounds {
        /// The offending index.
        index: CellIndex,
        /// Number of cells on the board.
        cell_count: u32,
    },
    /// A hexagonal coordinate lies outside the board.
    HexOutOfBounds {
        /// The offending coordinate.
        coord: HexCoord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, cell_count } => {
                write!(f, "cell index {index} out of bounds: board has {cell_count} cells")
            }
            Self::HexOutOfBounds { coord, bounds } => {
                write!(f, "hexagonal coordinate {coord} out of bounds: {bounds}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
