//! Hexagonal and lattice coordinates, and conversions between them.
//!
//! Conversions live on [`BoardGeometry`] because every one of them depends
//! on the board size. Hexagonal → lattice is total; lattice → hexagonal is
//! partial and only defined for on-board lattice points.

use std::fmt;

use crate::error::SpaceError;
use crate::geometry::BoardGeometry;
use hexq_core::CellIndex;

/// A board cell as `(column, row-within-column)`, in storage order.
///
/// `y` counts upward from the bottom of the column, `0..column_len(x)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexCoord {
    /// Column, `0..lattice_width`.
    pub x: u32,
    /// Row within the column.
    pub y: u32,
}

impl HexCoord {
    /// Construct a hexagonal coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point on the rectangular lattice enclosing the board.
///
/// Signed so that ray walks may step past the edges before being rejected
/// by [`BoardGeometry::is_on_board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticeCoord {
    /// Lattice column.
    pub x: i32,
    /// Lattice row; 0 is the top.
    pub y: i32,
}

impl LatticeCoord {
    /// Construct a lattice coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for LatticeCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl BoardGeometry {
    /// Whether a lattice point is a cell of this board.
    ///
    /// Must hold before a lattice point is converted back to hexagonal or
    /// index form.
    #[inline]
    pub fn is_on_board(&self, l: LatticeCoord) -> bool {
        let sum = l.x + l.y;
        let diff = l.x - l.y;
        l.x >= 0
            && l.x < self.lattice_width() as i32
            && l.y >= 0
            && l.y <= self.lattice_max_y() as i32
            && sum & 1 == self.parity
            && sum >= self.sum_min
            && sum <= self.sum_max
            && diff >= self.diff_min
            && diff <= self.diff_max
    }

    /// Whether a hexagonal coordinate names a cell of this board.
    pub fn contains_hex(&self, h: HexCoord) -> bool {
        h.x < self.lattice_width() && h.y < self.column_len(h.x)
    }

    /// Lattice position of a hexagonal cell.
    #[inline]
    pub fn hex_to_lattice(&self, h: HexCoord) -> LatticeCoord {
        let x = h.x as i32;
        let y = self.lattice_max_y() as i32 - (x - self.size_minus_1()).abs() - 2 * h.y as i32;
        LatticeCoord { x, y }
    }

    /// Hexagonal cell at a lattice point, or `None` if the point is off-board.
    pub fn lattice_to_hex(&self, l: LatticeCoord) -> Option<HexCoord> {
        self.is_on_board(l).then(|| self.lattice_to_hex_unchecked(l))
    }

    /// Conversion without the board check; `l` must satisfy
    /// [`is_on_board`](Self::is_on_board), which makes the numerator even
    /// and non-negative.
    #[inline]
    pub(crate) fn lattice_to_hex_unchecked(&self, l: LatticeCoord) -> HexCoord {
        debug_assert!(self.is_on_board(l), "{l} is off-board");
        let y = (self.lattice_max_y() as i32 - (l.x - self.size_minus_1()).abs() - l.y) / 2;
        HexCoord {
            x: l.x as u32,
            y: y as u32,
        }
    }

    /// Linear index of a hexagonal cell. O(1).
    #[inline]
    pub fn hex_to_index(&self, h: HexCoord) -> CellIndex {
        debug_assert!(self.contains_hex(h), "{h} is off-board");
        CellIndex(self.cumulative()[h.x as usize] + h.y)
    }

    /// Hexagonal cell of a linear index, by binary search over the
    /// cumulative column table. O(log columns).
    #[inline]
    pub fn index_to_hex(&self, index: CellIndex) -> HexCoord {
        debug_assert!(index.0 < self.cell_count(), "{index} out of range");
        let table = self.cumulative();
        // First column whose start is past the index, minus one. table[0] == 0
        // so the partition point is at least 1.
        let column = table.partition_point(|&start| start <= index.0) - 1;
        HexCoord {
            x: column as u32,
            y: index.0 - table[column],
        }
    }

    /// Linear index of a lattice point, or `None` if the point is off-board.
    pub fn lattice_to_index(&self, l: LatticeCoord) -> Option<CellIndex> {
        self.lattice_to_hex(l).map(|h| self.hex_to_index(h))
    }

    /// Lattice position of a linear index.
    #[inline]
    pub fn index_to_lattice(&self, index: CellIndex) -> LatticeCoord {
        self.hex_to_lattice(self.index_to_hex(index))
    }

    /// [`index_to_hex`](Self::index_to_hex) for untrusted input.
    pub fn checked_index_to_hex(&self, index: CellIndex) -> Result<HexCoord, SpaceError> {
        if index.0 >= self.cell_count() {
            return Err(SpaceError::IndexOutOfBounds {
                index,
                cell_count: self.cell_count(),
            });
        }
        Ok(self.index_to_hex(index))
    }

    /// [`hex_to_index`](Self::hex_to_index) for untrusted input.
    pub fn checked_hex_to_index(&self, h: HexCoord) -> Result<CellIndex, SpaceError> {
        if h.x >= self.lattice_width() {
            return Err(SpaceError::HexOutOfBounds {
                coord: h,
                bounds: format!("x in [0, {})", self.lattice_width()),
            });
        }
        if h.y >= self.column_len(h.x) {
            return Err(SpaceError::HexOutOfBounds {
                coord: h,
                bounds: format!("y in [0, {}) for column {}", self.column_len(h.x), h.x),
            });
        }
        Ok(self.hex_to_index(h))
    }
}
