//! One node of the search tree.

use hexq_core::{CaptureSet, CellIndex};
use hexq_space::BoardGeometry;
use smallvec::SmallVec;

/// Queens held inline up to a size-16 board (31 queens).
pub type QueenList = SmallVec<[CellIndex; 32]>;

/// Queens placed so far, the cells they capture, and the next candidate.
///
/// A state is never modified after a child has been derived from it,
/// except for its cursor: the engine clones the top state, places a queen
/// on the clone, and later advances the parent's cursor past the cell that
/// led to the exhausted subtree. The cursor only moves forward.
#[derive(Clone, Debug)]
pub struct BoardState {
    queens: QueenList,
    cells: CaptureSet,
    index: u32,
}

impl BoardState {
    /// The root state: no queens, nothing captured, cursor on cell 0.
    pub fn empty(geometry: &BoardGeometry) -> Self {
        Self {
            queens: SmallVec::new(),
            cells: CaptureSet::with_capacity(geometry.cell_count() as usize),
            index: 0,
        }
    }

    /// Placed queens, in placement order.
    pub fn queens(&self) -> &[CellIndex] {
        &self.queens
    }

    /// Number of placed queens.
    pub fn queen_count(&self) -> usize {
        self.queens.len()
    }

    /// Occupied and attacked cells.
    pub fn cells(&self) -> &CaptureSet {
        &self.cells
    }

    /// Raw cursor value; equals the cell count once exhausted.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The next cell to place a queen on, or `None` if no candidate is left.
    pub fn candidate(&self) -> Option<CellIndex> {
        (!self.is_exhausted()).then_some(CellIndex(self.index))
    }

    /// Whether the cursor has run off the end of the board.
    pub fn is_exhausted(&self) -> bool {
        self.index as usize >= self.cells.capacity()
    }

    /// Place a queen on the cursor cell, capture everything it attacks, and
    /// advance the cursor.
    ///
    /// The cursor cell must be a free candidate; the engine guarantees this
    /// because the cursor only ever stops on uncaptured cells.
    pub fn place_queen(&mut self, geometry: &BoardGeometry) {
        let cell = CellIndex(self.index);
        debug_assert!(!self.is_exhausted(), "no candidate cell");
        debug_assert!(!self.cells.contains(cell), "cell {cell} already captured");

        self.queens.push(cell);
        self.cells.insert(cell);
        for attacked in geometry.attacked_cells(cell) {
            self.cells.insert(attacked);
        }

        self.advance_index();
    }

    /// Move the cursor to the next uncaptured cell after the current one,
    /// or to the cell count if there is none.
    pub fn advance_index(&mut self) {
        let capacity = self.cells.capacity();
        self.index = self
            .cells
            .next_vacant(self.index as usize + 1)
            .map_or(capacity as u32, |cell| cell.0);
    }
}
