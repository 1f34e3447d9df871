//! Size-dependent board constants.

use hexq_core::{CellIndex, GeometryError};

/// Immutable geometry of a hexagonal board with `size` cells per edge.
///
/// Built once per solve and passed by reference to everything that needs
/// it. The lattice is `2·size−1` columns wide and `4·(size−1)+1` rows tall;
/// a lattice point is a board cell iff it lies inside the diamond bounds
/// `size−1 <= x+y <= 5·(size−1)`, `−3·(size−1) <= x−y <= size−1` and has
/// the board's cell parity.
///
/// # Examples
///
/// ```
/// use hexq_space::BoardGeometry;
///
/// let g = BoardGeometry::new(2).unwrap();
/// assert_eq!(g.lattice_width(), 3);
/// assert_eq!(g.cell_count(), 7);
/// assert_eq!(g.cumulative(), &[0, 2, 5, 7]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    size: u32,
    lattice_width: u32,
    lattice_max_y: u32,
    cell_count: u32,
    pub(crate) sum_min: i32,
    pub(crate) sum_max: i32,
    pub(crate) diff_min: i32,
    pub(crate) diff_max: i32,
    pub(crate) parity: i32,
    /// `cumulative[c]` = cells in all columns left of `c`; one trailing sentinel.
    cumulative: Vec<u32>,
}

impl BoardGeometry {
    /// Derive the geometry of a board with `size` cells per edge.
    ///
    /// Returns `Err(GeometryError::ZeroSize)` for `size == 0`, or
    /// `Err(GeometryError::CellCountOverflow)` if the cell count does not
    /// fit in `u32`.
    pub fn new(size: u32) -> Result<Self, GeometryError> {
        if size == 0 {
            return Err(GeometryError::ZeroSize);
        }
        let s = u128::from(size);
        let cells = 3 * s * (s - 1) + 1;
        let cell_count =
            u32::try_from(cells).map_err(|_| GeometryError::CellCountOverflow { size, cells })?;

        let size_minus_1 = size - 1;
        let lattice_width = 2 * size - 1;
        let lattice_max_y = 4 * size_minus_1;

        let mut cumulative = Vec::with_capacity(lattice_width as usize + 1);
        let mut running = 0u32;
        cumulative.push(running);
        for x in 0..lattice_width {
            running += size + size_minus_1 - x.abs_diff(size_minus_1);
            cumulative.push(running);
        }
        debug_assert_eq!(running, cell_count);

        let s1 = size_minus_1 as i32;
        let max_y = lattice_max_y as i32;
        Ok(Self {
            size,
            lattice_width,
            lattice_max_y,
            cell_count,
            sum_min: s1,
            sum_max: max_y + s1,
            diff_min: s1 - max_y,
            diff_max: s1,
            parity: s1 & 1,
            cumulative,
        })
    }

    /// Number of cells on one edge of the hexagon.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of lattice columns, `2·size−1`. Also the number of queens
    /// in a complete placement.
    pub fn lattice_width(&self) -> u32 {
        self.lattice_width
    }

    /// Largest lattice row, `4·(size−1)`.
    pub fn lattice_max_y(&self) -> u32 {
        self.lattice_max_y
    }

    /// Total number of board cells, `3·size·(size−1)+1`.
    pub fn cell_count(&self) -> u32 {
        self.cell_count
    }

    /// Cumulative cell counts per column, `lattice_width + 1` entries.
    pub fn cumulative(&self) -> &[u32] {
        &self.cumulative
    }

    /// Number of cells in column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= lattice_width`.
    pub fn column_len(&self, x: u32) -> u32 {
        let x = x as usize;
        self.cumulative[x + 1] - self.cumulative[x]
    }

    /// Linear index of the first cell in column `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x > lattice_width`.
    pub fn column_start(&self, x: u32) -> CellIndex {
        CellIndex(self.cumulative[x as usize])
    }

    /// Iterate over every cell index in ascending order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..self.cell_count).map(CellIndex)
    }

    pub(crate) fn size_minus_1(&self) -> i32 {
        self.size as i32 - 1
    }
}
