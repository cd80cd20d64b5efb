//! Shape catalog - the cells each tetromino occupies in each rotation
//!
//! Offsets are `(row, col)` from the piece origin, which sits at the upper
//! left of a 4x4 box. Rotation index 0 is the spawn orientation and indices
//! increase clockwise.

use crate::types::{Location, PieceKind, NUM_CELLS, NUM_KINDS, NUM_ORIENTATIONS};

/// Four occupied offsets of one kind in one rotation
pub type Shape = [Location; NUM_CELLS];

const fn l(row: i32, col: i32) -> Location {
    Location::new(row, col)
}

/// Indexed `[kind][rotation][cell]`, kinds in [`PieceKind::ALL`] order.
pub static SHAPES: [[Shape; NUM_ORIENTATIONS]; NUM_KINDS] = [
    // I
    [
        [l(1, 0), l(1, 1), l(1, 2), l(1, 3)],
        [l(0, 2), l(1, 2), l(2, 2), l(3, 2)],
        [l(3, 0), l(3, 1), l(3, 2), l(3, 3)],
        [l(0, 1), l(1, 1), l(2, 1), l(3, 1)],
    ],
    // J
    [
        [l(0, 0), l(1, 0), l(1, 1), l(1, 2)],
        [l(0, 1), l(0, 2), l(1, 1), l(2, 1)],
        [l(1, 0), l(1, 1), l(1, 2), l(2, 2)],
        [l(0, 1), l(1, 1), l(2, 0), l(2, 1)],
    ],
    // L
    [
        [l(0, 2), l(1, 0), l(1, 1), l(1, 2)],
        [l(0, 1), l(1, 1), l(2, 1), l(2, 2)],
        [l(1, 0), l(1, 1), l(1, 2), l(2, 0)],
        [l(0, 0), l(0, 1), l(1, 1), l(2, 1)],
    ],
    // O
    [
        [l(0, 1), l(0, 2), l(1, 1), l(1, 2)],
        [l(0, 1), l(0, 2), l(1, 1), l(1, 2)],
        [l(0, 1), l(0, 2), l(1, 1), l(1, 2)],
        [l(0, 1), l(0, 2), l(1, 1), l(1, 2)],
    ],
    // S
    [
        [l(0, 1), l(0, 2), l(1, 0), l(1, 1)],
        [l(0, 1), l(1, 1), l(1, 2), l(2, 2)],
        [l(1, 1), l(1, 2), l(2, 0), l(2, 1)],
        [l(0, 0), l(1, 0), l(1, 1), l(2, 1)],
    ],
    // T
    [
        [l(0, 1), l(1, 0), l(1, 1), l(1, 2)],
        [l(0, 1), l(1, 1), l(1, 2), l(2, 1)],
        [l(1, 0), l(1, 1), l(1, 2), l(2, 1)],
        [l(0, 1), l(1, 0), l(1, 1), l(2, 1)],
    ],
    // Z
    [
        [l(0, 0), l(0, 1), l(1, 1), l(1, 2)],
        [l(0, 2), l(1, 1), l(1, 2), l(2, 1)],
        [l(1, 0), l(1, 1), l(2, 1), l(2, 2)],
        [l(0, 1), l(1, 0), l(1, 1), l(2, 0)],
    ],
];

/// Get the shape for a piece kind and rotation
///
/// `rotation` is reduced mod 4, so any step count is accepted.
pub fn get_shape(kind: PieceKind, rotation: u8) -> &'static Shape {
    &SHAPES[kind.index()][rotation as usize % NUM_ORIENTATIONS]
}
