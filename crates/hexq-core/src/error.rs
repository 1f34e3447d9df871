//! Error types for board construction.

use std::error::Error;
use std::fmt;

/// Errors arising when board geometry is derived from a requested size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// The board size was zero; a hexagon needs at least one cell per edge.
    ZeroSize,
    /// The cell count `3·size·(size−1)+1` does not fit in a [`CellIndex`].
    ///
    /// [`CellIndex`]: crate::CellIndex
    CellCountOverflow {
        /// The requested board size.
        size: u32,
        /// The cell count that size would produce.
        cells: u128,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "board size must be at least 1"),
            Self::CellCountOverflow { size, cells } => {
                write!(f, "board size {size} has {cells} cells, exceeding u32::MAX")
            }
        }
    }
}

impl Error for GeometryError {}
