use hexq_core::CellIndex;
use hexq_space::{BoardGeometry, HexCoord, LatticeCoord, RayDirection, RayKind, SpaceError};
use indexmap::IndexSet;

#[test]
fn every_ray_stops_at_the_edge() {
    let g = BoardGeometry::new(5).unwrap();
    for cell in g.cells() {
        let origin = g.index_to_lattice(cell);
        for dir in RayDirection::ALL {
            let (dx, dy) = dir.step();
            let last = g.ray(origin, dir).last().unwrap_or(origin);
            assert!(
                !g.is_on_board(last.offset(dx, dy)),
                "ray {dir:?} from {origin} ended early at {last}"
            );
        }
    }
}

#[test]
fn ray_cells_are_consecutive_steps() {
    let g = BoardGeometry::new(4).unwrap();
    let centre = CellIndex(g.cell_count() / 2);
    assert_eq!(g.index_to_hex(centre), HexCoord::new(3, 3));
    let origin = g.index_to_lattice(centre);
    for dir in RayDirection::ALL {
        let (dx, dy) = dir.step();
        for (k, l) in g.ray(origin, dir).enumerate() {
            let k = k as i32 + 1;
            assert_eq!(l, origin.offset(k * dx, k * dy));
        }
    }
}

#[test]
fn opposite_rays_from_centre_have_equal_length() {
    let g = BoardGeometry::new(6).unwrap();
    let origin = g.index_to_lattice(CellIndex(g.cell_count() / 2));
    for dir in RayDirection::ALL {
        assert_eq!(
            g.ray(origin, dir).count(),
            g.ray(origin, dir.opposite()).count(),
            "{dir:?}"
        );
    }
    // Vertical and major-diagonal rays run along hex rows and reach the rim;
    // horizontal and minor-diagonal rays skip a cell per step and stop halfway.
    for dir in RayDirection::ALL {
        let expected = match (dir.kind(), dir.step()) {
            (RayKind::Orthogonal, (0, _)) | (RayKind::MajorDiagonal, _) => 5,
            (RayKind::Orthogonal, _) | (RayKind::MinorDiagonal, _) => 2,
        };
        assert_eq!(g.ray(origin, dir).count(), expected, "{dir:?}");
    }
}

#[test]
fn attack_relation_is_symmetric_across_board() {
    let g = BoardGeometry::new(4).unwrap();
    let mut pairs = IndexSet::new();
    for a in g.cells() {
        for b in g.attacked_cells(a) {
            assert_ne!(a, b);
            pairs.insert((a, b));
        }
    }
    for &(a, b) in &pairs {
        assert!(pairs.contains(&(b, a)), "{a} attacks {b} but not back");
    }
}

#[test]
fn lattice_points_outside_rectangle_are_rejected() {
    let g = BoardGeometry::new(3).unwrap();
    for l in [
        LatticeCoord::new(-1, 4),
        LatticeCoord::new(5, 4),
        LatticeCoord::new(2, -2),
        LatticeCoord::new(2, 10),
    ] {
        assert!(!g.is_on_board(l));
        assert_eq!(g.lattice_to_hex(l), None);
        assert_eq!(g.lattice_to_index(l), None);
    }
}

#[test]
fn checked_conversions_report_bounds() {
    let g = BoardGeometry::new(3).unwrap();
    assert_eq!(
        g.checked_index_to_hex(CellIndex(19)),
        Err(SpaceError::IndexOutOfBounds {
            index: CellIndex(19),
            cell_count: 19,
        })
    );
    let err = g.checked_hex_to_index(HexCoord::new(0, 3)).unwrap_err();
    assert!(matches!(err, SpaceError::HexOutOfBounds { coord, .. } if coord == HexCoord::new(0, 3)));
    assert!(g.checked_hex_to_index(HexCoord::new(5, 0)).is_err());
    assert_eq!(
        g.checked_hex_to_index(HexCoord::new(2, 4)),
        Ok(CellIndex(11))
    );
}
