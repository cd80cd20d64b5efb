//! A tetromino placed somewhere: kind, rotation and origin
//!
//! The same type fills the falling, next and stored slots of a game.

use serde::{Deserialize, Serialize};

use crate::shapes::get_shape;
use crate::types::{Location, PieceKind, NUM_CELLS, NUM_ORIENTATIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    /// Rotation index, always in `0..4`
    pub rotation: u8,
    pub origin: Location,
}

impl Piece {
    pub fn new(kind: PieceKind, rotation: u8, origin: Location) -> Self {
        Self {
            kind,
            rotation: rotation % NUM_ORIENTATIONS as u8,
            origin,
        }
    }

    /// Create a piece at the spawn position for a board `cols` wide
    ///
    /// Spawn is row 0, horizontally centred on the 4-wide shape box.
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        Self::new(kind, 0, Self::spawn_origin(cols))
    }

    pub fn spawn_origin(cols: usize) -> Location {
        Location::new(0, cols as i32 / 2 - 2)
    }

    /// Board locations of the four occupied cells
    pub fn cells(&self) -> [Location; NUM_CELLS] {
        let shape = *get_shape(self.kind, self.rotation);
        shape.map(|offset| self.origin.offset(offset))
    }

    /// Step the rotation index by `direction` (mod 4)
    pub fn rotate_by(&mut self, direction: i32) {
        let n = NUM_ORIENTATIONS as i32;
        self.rotation = (self.rotation as i32 + direction).rem_euclid(n) as u8;
    }
}
