//! Text rendering of queen placements.
//!
//! Coordinates are printed 1-based. The board is drawn over the enclosing
//! lattice, one text line per lattice row from the top, with each lattice
//! column three characters wide. Board cells show `Q` for a queen, `*` for
//! a captured cell (when captures are requested) and `o` otherwise.

use hexq_core::{CaptureSet, CellIndex};
use hexq_space::{BoardGeometry, LatticeCoord, SpaceError};

/// One `Queen k coordinates: (x, y)` line per queen, in list order.
///
/// Fails if any index is not a cell of `geometry`.
pub fn render_queen_list(
    geometry: &BoardGeometry,
    queens: &[CellIndex],
) -> Result<String, SpaceError> {
    let mut out = String::new();
    for (k, &queen) in queens.iter().enumerate() {
        let h = geometry.checked_index_to_hex(queen)?;
        out.push_str(&format!(
            "Queen {} coordinates: ({}, {})\n",
            k + 1,
            h.x + 1,
            h.y + 1
        ));
    }
    Ok(out)
}

/// ASCII drawing of the board with `queens` marked.
///
/// With `captured`, cells in the set that hold no queen are drawn as `*`.
/// Trailing whitespace is trimmed from every line.
///
/// Fails if any queen index is not a cell of `geometry`.
pub fn render_board(
    geometry: &BoardGeometry,
    queens: &[CellIndex],
    captured: Option<&CaptureSet>,
) -> Result<String, SpaceError> {
    let mut occupied = CaptureSet::with_capacity(geometry.cell_count() as usize);
    for &queen in queens {
        geometry.checked_index_to_hex(queen)?;
        occupied.insert(queen);
    }
    let is_captured = |cell: CellIndex| {
        captured.is_some_and(|set| cell.as_usize() < set.capacity() && set.contains(cell))
    };

    let mut out = String::new();
    for y in 0..=geometry.lattice_max_y() as i32 {
        let mut line = String::new();
        for x in 0..geometry.lattice_width() as i32 {
            let symbol = match geometry.lattice_to_index(LatticeCoord::new(x, y)) {
                None => ' ',
                Some(cell) if occupied.contains(cell) => 'Q',
                Some(cell) if is_captured(cell) => '*',
                Some(_) => 'o',
            };
            line.push(symbol);
            line.push_str("  ");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}
