//! Strongly-typed cell identifier.

use std::fmt;

/// Dense linear index of a board cell.
///
/// Cells are numbered column-major, `0..cell_count`, using the board's
/// cumulative column table. The index fits in `u32`: board construction
/// rejects sizes whose cell count would not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(pub u32);

impl CellIndex {
    /// The index as a `usize`, for slice and bit addressing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
