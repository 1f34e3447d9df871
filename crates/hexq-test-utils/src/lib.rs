//! Test oracles for hexq development.
//!
//! Everything here decides attacks analytically from lattice differences
//! rather than by walking rays, so it can check the engine independently:
//! two cells attack iff their lattice offset is a non-zero multiple of one
//! of the twelve ray steps. The board is convex in lattice space, so every
//! point between two cells on such a line is itself a cell.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexq_core::{CaptureSet, CellIndex};
use hexq_space::BoardGeometry;

/// Whether a queen on `a` attacks `b`. A cell does not attack itself.
pub fn attacks(geometry: &BoardGeometry, a: CellIndex, b: CellIndex) -> bool {
    if a == b {
        return false;
    }
    let la = geometry.index_to_lattice(a);
    let lb = geometry.index_to_lattice(b);
    let dx = (lb.x - la.x).abs();
    let dy = (lb.y - la.y).abs();
    (dx == 0 && dy % 2 == 0) || (dy == 0 && dx % 2 == 0) || dx == dy || dy == 3 * dx
}

/// Cells occupied or attacked by `queens`.
pub fn captured_by(geometry: &BoardGeometry, queens: &[CellIndex]) -> CaptureSet {
    let mut set = CaptureSet::with_capacity(geometry.cell_count() as usize);
    for cell in geometry.cells() {
        if queens.iter().any(|&q| q == cell || attacks(geometry, q, cell)) {
            set.insert(cell);
        }
    }
    set
}

/// Whether no two queens share a cell or attack each other.
pub fn is_independent(geometry: &BoardGeometry, queens: &[CellIndex]) -> bool {
    queens.iter().enumerate().all(|(i, &a)| {
        queens[i + 1..]
            .iter()
            .all(|&b| a != b && !attacks(geometry, a, b))
    })
}

/// Panic unless `queens` is a complete, valid placement.
pub fn assert_valid_solution(geometry: &BoardGeometry, queens: &[CellIndex]) {
    assert_eq!(
        queens.len(),
        geometry.lattice_width() as usize,
        "solution must place 2·size−1 queens"
    );
    for &q in queens {
        assert!(q.0 < geometry.cell_count(), "queen {q} off the board");
    }
    for (i, &a) in queens.iter().enumerate() {
        for &b in &queens[i + 1..] {
            assert_ne!(a, b, "two queens on cell {a}");
            assert!(!attacks(geometry, a, b), "queen {a} attacks queen {b}");
        }
    }
}

/// First complete placement in lexicographic index order, found by plain
/// recursion over the analytic oracle. Only practical for small boards.
pub fn reference_first_solution(geometry: &BoardGeometry) -> Option<Vec<CellIndex>> {
    fn extend(
        geometry: &BoardGeometry,
        from: u32,
        queens: &mut Vec<CellIndex>,
    ) -> bool {
        if queens.len() == geometry.lattice_width() as usize {
            return true;
        }
        for i in from..geometry.cell_count() {
            let cell = CellIndex(i);
            if queens.iter().any(|&q| attacks(geometry, q, cell)) {
                continue;
            }
            queens.push(cell);
            if extend(geometry, i + 1, queens) {
                return true;
            }
            queens.pop();
        }
        false
    }

    let mut queens = Vec::new();
    extend(geometry, 0, &mut queens).then_some(queens)
}
