//! Benchmark profiles for the hexq solver.
//!
//! - [`REFERENCE_SIZE`]: smallest solvable board past the trivial one
//! - [`EXHAUSTIVE_SIZE`]: unsolvable board whose full search is still quick
//! - [`LARGE_SIZE`]: geometry-only profile at the recommended minimum size
//! - [`greedy_state`]: a deep, realistic [`BoardState`] for copy costs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexq_engine::{BoardState, SolverConfig};
use hexq_space::BoardGeometry;

/// Board size 4: solved after 124 placements.
pub const REFERENCE_SIZE: u32 = 4;

/// Board size 5: exhausted after 27 253 placements.
pub const EXHAUSTIVE_SIZE: u32 = 5;

/// Board size 16: 721 cells, too slow to search inside a benchmark loop.
pub const LARGE_SIZE: u32 = SolverConfig::RECOMMENDED_MIN_SIZE;

/// Geometry for a benchmark size.
///
/// # Panics
///
/// Panics if `size` does not describe a representable board.
pub fn geometry(size: u32) -> BoardGeometry {
    BoardGeometry::new(size).unwrap()
}

/// Place queens on every free cell in index order until none remain.
pub fn greedy_state(geometry: &BoardGeometry) -> BoardState {
    let mut state = BoardState::empty(geometry);
    while !state.is_exhausted() {
        state.place_queen(geometry);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_state_is_exhausted() {
        let g = geometry(LARGE_SIZE);
        let state = greedy_state(&g);
        assert!(state.is_exhausted());
        assert_eq!(state.cells().len(), g.cell_count() as usize);
        assert!(state.queen_count() > 0);
    }
}
