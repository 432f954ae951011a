//! Pieces module - shape catalog and rotation transform
//!
//! Every kind is four cells given as offsets from a pivot cell. Rotations are
//! exact 90° steps about the pivot; O is special-cased to never rotate.
//! Coordinates grow right (x) and down (y).

use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Offset of a single mino relative to the piece pivot
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the pivot
pub type PieceShape = [MinoOffset; 4];

/// Spawn pivot for new pieces (x, y): horizontal center of the top row
pub const SPAWN_POSITION: (i8, i8) = (BOARD_WIDTH as i8 / 2, 0);

/// Unrotated offsets for a piece kind
pub const fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, 0), (-1, 0), (1, 0), (2, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => [(0, 0), (-1, 0), (1, 0), (0, 1)],
        PieceKind::L => [(0, 0), (-1, 0), (1, 0), (1, 1)],
        PieceKind::J => [(0, 0), (-1, 0), (1, 0), (-1, 1)],
        PieceKind::S => [(0, 0), (-1, 0), (0, 1), (1, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (0, 1), (-1, 1)],
    }
}

/// Rotate a single offset about the pivot.
#[inline]
pub fn rotate_offset((x, y): MinoOffset, rotation: Rotation) -> MinoOffset {
    match rotation {
        Rotation::North => (x, y),
        Rotation::East => (-y, x),
        Rotation::South => (-x, -y),
        Rotation::West => (y, -x),
    }
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let base = base_shape(kind);
    if kind == PieceKind::O {
        return base;
    }
    base.map(|offset| rotate_offset(offset, rotation))
}
