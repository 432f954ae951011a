//! Pieces tests: shape catalog and the rotation transform

use tui_blockfall::core::pieces::SPAWN_POSITION;
use tui_blockfall::core::{base_shape, get_shape, rotate_offset};
use tui_blockfall::types::{PieceKind, Rotation};

#[test]
fn test_every_shape_has_a_pivot_and_distinct_cells() {
    for kind in PieceKind::ALL {
        let shape = base_shape(kind);
        assert!(shape.contains(&(0, 0)), "{kind:?} has no pivot cell");
        for (i, a) in shape.iter().enumerate() {
            for b in &shape[i + 1..] {
                assert_ne!(a, b, "{kind:?} repeats a cell");
            }
        }
    }
}

#[test]
fn test_i_piece_rotations() {
    assert_eq!(
        get_shape(PieceKind::I, Rotation::North),
        [(0, 0), (-1, 0), (1, 0), (2, 0)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::East),
        [(0, 0), (0, -1), (0, 1), (0, 2)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::South),
        [(0, 0), (1, 0), (-1, 0), (-2, 0)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::West),
        [(0, 0), (0, 1), (0, -1), (0, -2)]
    );
}

#[test]
fn test_t_piece_east() {
    // Stem (0, 1) swings to the left of the pivot.
    assert_eq!(
        get_shape(PieceKind::T, Rotation::East),
        [(0, 0), (0, -1), (0, 1), (-1, 0)]
    );
}

#[test]
fn test_o_piece_never_rotates() {
    let north = get_shape(PieceKind::O, Rotation::North);
    for rotation in [Rotation::East, Rotation::South, Rotation::West] {
        assert_eq!(get_shape(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_rotate_offset_quarter_turns() {
    assert_eq!(rotate_offset((2, 1), Rotation::North), (2, 1));
    assert_eq!(rotate_offset((2, 1), Rotation::East), (-1, 2));
    assert_eq!(rotate_offset((2, 1), Rotation::South), (-2, -1));
    assert_eq!(rotate_offset((2, 1), Rotation::West), (1, -2));
}

#[test]
fn test_south_is_east_twice() {
    for kind in PieceKind::ALL {
        let east_twice = get_shape(kind, Rotation::East).map(|o| rotate_offset(o, Rotation::East));
        if kind == PieceKind::O {
            continue;
        }
        assert_eq!(east_twice, get_shape(kind, Rotation::South), "{kind:?}");
    }
}

#[test]
fn test_spawn_position_is_top_center() {
    assert_eq!(SPAWN_POSITION, (5, 0));
}

#[test]
fn test_rotation_cycle() {
    let mut rotation = Rotation::North;
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(rotation);
        rotation = rotation.rotate_cw();
    }
    assert_eq!(rotation, Rotation::North);
    assert_eq!(
        seen,
        vec![Rotation::North, Rotation::East, Rotation::South, Rotation::West]
    );
    for (i, r) in seen.iter().enumerate() {
        assert_eq!(Rotation::from_index(i as u8), *r);
    }
}

#[test]
#[should_panic(expected = "rotation state out of range")]
fn test_rotation_from_index_rejects_out_of_range() {
    Rotation::from_index(4);
}
