//! Placement of pieces on the board: `fits`, `put` and `remove`
//!
//! `fits` is the single answer to "can this piece be here". `put` and `remove`
//! paint and erase a piece's four cells; the game pairs them around every
//! attempted change so a piece never collides with its own cells.

use log::error;

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Cell, Location};

impl Board {
    /// Whether every cell of `piece` is on the board and empty
    pub fn fits(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .all(|loc| self.is_open(loc.row, loc.col))
    }

    /// Paint `piece` with its kind's cell
    pub fn put(&mut self, piece: &Piece) {
        self.paint(piece, Cell::from(piece.kind));
    }

    /// Erase `piece`'s cells
    pub fn remove(&mut self, piece: &Piece) {
        self.paint(piece, Cell::Empty);
    }

    fn paint(&mut self, piece: &Piece, cell: Cell) {
        for Location { row, col } in piece.cells() {
            if let Err(err) = self.set(row, col, cell) {
                // Only pieces that passed `fits` are painted.
                error!("painting {:?}: {}", piece, err);
                debug_assert!(false, "painted a piece outside the board: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn board() -> Board {
        Board::new(22, 10).unwrap()
    }

    #[test]
    fn test_fits_on_empty_board() {
        let board = board();
        assert!(board.fits(&Piece::spawn(PieceKind::I, 10)));
        assert!(board.fits(&Piece::new(PieceKind::O, 0, Location::new(20, -1))));
    }

    #[test]
    fn test_fits_rejects_out_of_bounds() {
        let board = board();
        // O occupies columns origin+1 and origin+2
        assert!(!board.fits(&Piece::new(PieceKind::O, 0, Location::new(0, -2))));
        assert!(!board.fits(&Piece::new(PieceKind::O, 0, Location::new(0, 8))));
        assert!(!board.fits(&Piece::new(PieceKind::O, 0, Location::new(21, 3))));
        assert!(!board.fits(&Piece::new(PieceKind::I, 0, Location::new(-2, 3))));
    }

    #[test]
    fn test_fits_rejects_occupied() {
        let mut board = board();
        board.set(1, 4, Cell::Z).unwrap();
        assert!(!board.fits(&Piece::spawn(PieceKind::O, 10)));
        assert!(!board.fits(&Piece::spawn(PieceKind::I, 10)));
        assert!(board.fits(&Piece::new(PieceKind::O, 0, Location::new(2, 3))));
    }

    #[test]
    fn test_put_then_remove_restores_board() {
        let mut board = board();
        let piece = Piece::new(PieceKind::T, 2, Location::new(10, 4));
        board.put(&piece);

        for loc in piece.cells() {
            assert_eq!(board.get(loc.row, loc.col), Ok(Cell::T));
        }
        assert!(!board.fits(&piece));

        board.remove(&piece);
        assert!(board.fits(&piece));
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }
}
