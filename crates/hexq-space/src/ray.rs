//! Queen ray directions and lattice ray walking.
//!
//! A hex-chess queen moves along six lines: three orthogonal and three
//! diagonal. In lattice space each line is two opposite rays, giving
//! twelve step vectors. Every step preserves the parity of `x+y`, so a
//! ray never leaves the board's cell lattice; orthogonal steps along a
//! lattice axis are doubled for that reason.

use crate::coord::LatticeCoord;
use crate::geometry::BoardGeometry;
use hexq_core::CellIndex;

/// Classification of a [`RayDirection`] by step shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RayKind {
    /// Doubled axis step: `(0, ±2)` or `(±2, 0)`.
    Orthogonal,
    /// Unit diagonal step: `(±1, ±1)`.
    MajorDiagonal,
    /// Steep diagonal step: `(±1, ±3)`.
    MinorDiagonal,
}

/// One of the twelve lattice step vectors along which a queen attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RayDirection {
    /// `(0, −2)`
    Up,
    /// `(0, 2)`
    Down,
    /// `(−2, 0)`
    Left,
    /// `(2, 0)`
    Right,
    /// `(−1, −1)`
    UpLeft,
    /// `(1, −1)`
    UpRight,
    /// `(−1, 1)`
    DownLeft,
    /// `(1, 1)`
    DownRight,
    /// `(−1, −3)`
    SteepUpLeft,
    /// `(1, −3)`
    SteepUpRight,
    /// `(−1, 3)`
    SteepDownLeft,
    /// `(1, 3)`
    SteepDownRight,
}

impl RayDirection {
    /// All twelve directions, in the order rays are marked.
    pub const ALL: [RayDirection; 12] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
        Self::SteepUpLeft,
        Self::SteepUpRight,
        Self::SteepDownLeft,
        Self::SteepDownRight,
    ];

    /// Lattice step `(dx, dy)` for one move along this ray.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -2),
            Self::Down => (0, 2),
            Self::Left => (-2, 0),
            Self::Right => (2, 0),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (1, -1),
            Self::DownLeft => (-1, 1),
            Self::DownRight => (1, 1),
            Self::SteepUpLeft => (-1, -3),
            Self::SteepUpRight => (1, -3),
            Self::SteepDownLeft => (-1, 3),
            Self::SteepDownRight => (1, 3),
        }
    }

    /// The ray pointing the other way along the same line.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
            Self::SteepUpLeft => Self::SteepDownRight,
            Self::SteepUpRight => Self::SteepDownLeft,
            Self::SteepDownLeft => Self::SteepUpRight,
            Self::SteepDownRight => Self::SteepUpLeft,
        }
    }

    /// Shape of the step.
    pub const fn kind(self) -> RayKind {
        match self {
            Self::Up | Self::Down | Self::Left | Self::Right => RayKind::Orthogonal,
            Self::UpLeft | Self::UpRight | Self::DownLeft | Self::DownRight => {
                RayKind::MajorDiagonal
            }
            _ => RayKind::MinorDiagonal,
        }
    }
}

/// Iterator over the on-board lattice points along one ray, origin excluded.
///
/// Created by [`BoardGeometry::ray`]. Ends at the first off-board step; the
/// board is convex in lattice space, so nothing further along is on-board.
#[derive(Clone, Debug)]
pub struct Ray<'g> {
    geometry: &'g BoardGeometry,
    current: LatticeCoord,
    step: (i32, i32),
    done: bool,
}

impl Iterator for Ray<'_> {
    type Item = LatticeCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.current.offset(self.step.0, self.step.1);
        if self.geometry.is_on_board(next) {
            self.current = next;
            Some(next)
        } else {
            self.done = true;
            None
        }
    }
}

impl std::iter::FusedIterator for Ray<'_> {}

impl BoardGeometry {
    /// Walk from `origin` along `direction`.
    pub fn ray(&self, origin: LatticeCoord, direction: RayDirection) -> Ray<'_> {
        Ray {
            geometry: self,
            current: origin,
            step: direction.step(),
            done: false,
        }
    }

    /// Cells along one ray from `origin`, nearest first.
    pub fn ray_cells(
        &self,
        origin: CellIndex,
        direction: RayDirection,
    ) -> impl Iterator<Item = CellIndex> + '_ {
        self.ray(self.index_to_lattice(origin), direction)
            .map(|l| self.hex_to_index(self.lattice_to_hex_unchecked(l)))
    }

    /// Every cell a queen on `origin` attacks, over all twelve rays.
    ///
    /// The origin itself is not included. Each attacked cell appears once.
    pub fn attacked_cells(&self, origin: CellIndex) -> impl Iterator<Item = CellIndex> + '_ {
        RayDirection::ALL
            .into_iter()
            .flat_map(move |direction| self.ray_cells(origin, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;
    use proptest::prelude::*;

    fn geometry(size: u32) -> BoardGeometry {
        BoardGeometry::new(size).unwrap()
    }

    #[test]
    fn opposite_is_involution_and_negates_step() {
        for d in RayDirection::ALL {
            assert_eq!(d.opposite().opposite(), d);
            let (dx, dy) = d.step();
            assert_eq!(d.opposite().step(), (-dx, -dy));
            assert_eq!(d.opposite().kind(), d.kind());
        }
    }

    #[test]
    fn steps_preserve_parity() {
        for d in RayDirection::ALL {
            let (dx, dy) = d.step();
            assert_eq!((dx + dy).rem_euclid(2), 0, "{d:?}");
        }
    }

    #[test]
    fn four_of_each_kind() {
        for kind in [
            RayKind::Orthogonal,
            RayKind::MajorDiagonal,
            RayKind::MinorDiagonal,
        ] {
            assert_eq!(
                RayDirection::ALL.iter().filter(|d| d.kind() == kind).count(),
                4
            );
        }
    }

    #[test]
    fn single_cell_has_no_rays() {
        let g = geometry(1);
        assert_eq!(g.attacked_cells(CellIndex(0)).count(), 0);
    }

    #[test]
    fn size_two_every_cell_sees_every_other() {
        let g = geometry(2);
        for cell in g.cells() {
            let attacked: IndexSet<CellIndex> = g.attacked_cells(cell).collect();
            assert_eq!(attacked.len(), 6, "cell {cell}");
            assert!(!attacked.contains(&cell));
        }
    }

    #[test]
    fn vertical_ray_walks_whole_column() {
        let g = geometry(4);
        // Row 0 of a column sits at the bottom of the lattice.
        let bottom = g.hex_to_index(crate::HexCoord::new(3, 0));
        let column: Vec<_> = g.ray_cells(bottom, RayDirection::Up).collect();
        assert_eq!(column.len(), 6);
        assert_eq!(column[0], CellIndex(bottom.0 + 1));
        assert!(g.ray_cells(bottom, RayDirection::Down).next().is_none());
    }

    #[test]
    fn ray_is_fused() {
        let g = geometry(3);
        let mut ray = g.ray(g.index_to_lattice(CellIndex(0)), RayDirection::Left);
        assert_eq!(ray.next(), None);
        assert_eq!(ray.next(), None);
    }

    #[test]
    fn centre_attack_count() {
        // Hex-orthogonal rays reach size−1 cells from the centre, hex-diagonal
        // rays (size−1)/2.
        for size in 1..=12u32 {
            let g = geometry(size);
            let centre = CellIndex(g.cell_count() / 2);
            assert_eq!(
                g.index_to_hex(centre),
                crate::HexCoord::new(size - 1, size - 1)
            );
            let n = g.attacked_cells(centre).count() as u32;
            assert_eq!(n, 6 * (size - 1) + 6 * ((size - 1) / 2), "size {size}");
        }
    }

    proptest! {
        #[test]
        fn capture_symmetry(size in 1u32..24, a in any::<u32>(), d in 0usize..12) {
            let g = geometry(size);
            let a = CellIndex(a % g.cell_count());
            let direction = RayDirection::ALL[d];
            for b in g.ray_cells(a, direction) {
                prop_assert!(
                    g.ray_cells(b, direction.opposite()).any(|c| c == a),
                    "{b} on {direction:?} ray of {a}, but {a} not on opposite ray of {b}"
                );
            }
        }

        #[test]
        fn attacked_cells_are_distinct(size in 1u32..24, a in any::<u32>()) {
            let g = geometry(size);
            let a = CellIndex(a % g.cell_count());
            let all: Vec<_> = g.attacked_cells(a).collect();
            let unique: IndexSet<_> = all.iter().copied().collect();
            prop_assert_eq!(all.len(), unique.len());
        }
    }
}
