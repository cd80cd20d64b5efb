//! Serializable copy of a game, for saving and replaying positions
//!
//! A [`GameSnapshot`] holds everything in a [`GameState`] except the piece
//! source. Restoring pairs a snapshot with a fresh source, so a saved game
//! continues with whatever randomizer the caller chooses.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::game_state::GameState;
use crate::gravity::{ticks_for_level, Gravity};
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::scoring::Progress;
use crate::types::{Cell, EngineError, Status, LINES_PER_LEVEL, MAX_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major, `rows * cols` long, falling piece included
    pub cells: Vec<Cell>,
    pub progress: Progress,
    pub ticks_remaining: i32,
    pub falling: Piece,
    pub next: Piece,
    pub stored: Option<Piece>,
    pub status: Status,
}

impl<S: PieceSource> GameState<S> {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            cells: self.board.cells().to_vec(),
            progress: self.progress,
            ticks_remaining: self.gravity.ticks_remaining(),
            falling: self.falling,
            next: self.next,
            stored: self.stored,
            status: self.status,
        }
    }

    /// Rebuild a game from `snapshot`, drawing future pieces from `source`
    ///
    /// A running game must have its falling piece painted on the board, and
    /// the level, line countdown and gravity counter must be ones play can reach.
    pub fn restore(snapshot: GameSnapshot, source: S) -> Result<Self, EngineError> {
        let board = Board::from_cells(snapshot.rows, snapshot.cols, snapshot.cells)?;
        check_progress(&snapshot.progress, snapshot.ticks_remaining)?;

        let falling = snapshot.falling;
        let on_board = falling
            .cells()
            .iter()
            .all(|loc| board.in_bounds(loc.row, loc.col));
        if !on_board {
            return Err(EngineError::InvalidSnapshot("falling piece is off the board"));
        }
        if snapshot.status.is_running() {
            let painted = falling
                .cells()
                .iter()
                .all(|loc| board.get(loc.row, loc.col) == Ok(Cell::from(falling.kind)));
            if !painted {
                return Err(EngineError::InvalidSnapshot(
                    "falling piece is not painted on the board",
                ));
            }
        }

        Ok(Self {
            board,
            progress: snapshot.progress,
            falling,
            next: snapshot.next,
            stored: snapshot.stored,
            gravity: Gravity::from_ticks(snapshot.ticks_remaining),
            status: snapshot.status,
            source,
        })
    }
}

fn check_progress(progress: &Progress, ticks_remaining: i32) -> Result<(), EngineError> {
    if progress.level > MAX_LEVEL {
        return Err(EngineError::InvalidSnapshot("level is above the maximum"));
    }
    if !(1..=LINES_PER_LEVEL).contains(&progress.lines_remaining) {
        return Err(EngineError::InvalidSnapshot("line countdown is out of range"));
    }
    let ceiling = i64::from(ticks_for_level(progress.level));
    if i64::from(ticks_remaining) > ceiling {
        return Err(EngineError::InvalidSnapshot("gravity counter exceeds the level's speed"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;
    use crate::types::{Location, Move, PieceKind};

    fn played() -> GameState<SequenceSource> {
        let source = SequenceSource::new([PieceKind::T, PieceKind::O, PieceKind::L]);
        let mut state = GameState::init(22, 10, source).unwrap();
        state.tick(Move::Drop);
        state.tick(Move::Hold);
        state.tick(Move::Left);
        state
    }

    #[test]
    fn test_snapshot_captures_state() {
        let state = played();
        let snap = state.snapshot();

        assert_eq!(snap.rows, 22);
        assert_eq!(snap.cols, 10);
        assert_eq!(snap.cells.len(), 220);
        assert_eq!(snap.falling, *state.falling_piece());
        assert_eq!(snap.next, *state.next_piece());
        assert_eq!(snap.stored.map(|p| p.kind), Some(PieceKind::O));
        assert_eq!(snap.ticks_remaining, state.ticks_remaining());
        assert_eq!(snap.status, Status::Running);
    }

    #[test]
    fn test_restore_continues_identically() {
        let mut original = played();
        let mut restored =
            GameState::restore(original.snapshot(), original.source().clone()).unwrap();

        for mv in [Move::RotateClockwise, Move::Right, Move::None, Move::Drop] {
            assert_eq!(original.tick(mv), restored.tick(mv));
        }
        assert_eq!(original.snapshot(), restored.snapshot());
    }

    #[test]
    fn test_json_round_trip() {
        let snap = played().snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_restore_rejects_wrong_cell_count() {
        let mut snap = played().snapshot();
        snap.cells.pop();
        let err = GameState::restore(snap, SequenceSource::repeat(PieceKind::I)).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSnapshot(_)));
    }

    #[test]
    fn test_restore_rejects_unpainted_falling_piece() {
        let mut snap = played().snapshot();
        snap.falling.origin = Location::new(15, 0);
        let err = GameState::restore(snap, SequenceSource::repeat(PieceKind::I)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidSnapshot("falling piece is not painted on the board")
        );
    }

    #[test]
    fn test_restore_rejects_small_board() {
        let mut snap = played().snapshot();
        snap.rows = 3;
        snap.cells.truncate(30);
        let err = GameState::restore(snap, SequenceSource::repeat(PieceKind::I)).unwrap_err();
        assert_eq!(err, EngineError::InvalidDimensions { rows: 3, cols: 10 });
    }

    #[test]
    fn test_restore_rejects_unreachable_progress() {
        let source = || SequenceSource::repeat(PieceKind::I);

        let mut snap = played().snapshot();
        snap.progress.level = u32::MAX;
        assert_eq!(
            GameState::restore(snap, source()).unwrap_err(),
            EngineError::InvalidSnapshot("level is above the maximum")
        );

        for lines_remaining in [0, LINES_PER_LEVEL + 1] {
            let mut snap = played().snapshot();
            snap.progress.lines_remaining = lines_remaining;
            assert_eq!(
                GameState::restore(snap, source()).unwrap_err(),
                EngineError::InvalidSnapshot("line countdown is out of range")
            );
        }

        let mut snap = played().snapshot();
        snap.ticks_remaining = i32::MAX;
        assert_eq!(
            GameState::restore(snap, source()).unwrap_err(),
            EngineError::InvalidSnapshot("gravity counter exceeds the level's speed")
        );
    }

    #[test]
    fn test_restore_rejects_huge_board() {
        let mut snap = played().snapshot();
        snap.rows = usize::MAX / 4;
        snap.cols = 8;
        snap.cells.clear();
        let err = GameState::restore(snap, SequenceSource::repeat(PieceKind::I)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidDimensions {
                rows: usize::MAX / 4,
                cols: 8
            }
        );
    }

    #[test]
    fn test_restored_overdue_gravity_keeps_ticking() {
        let mut snap = played().snapshot();
        snap.ticks_remaining = i32::MIN;
        let mut state = GameState::restore(snap, SequenceSource::repeat(PieceKind::I)).unwrap();
        let row = state.falling_piece().origin.row;

        assert_eq!(state.tick(Move::None), Status::Running);
        assert_eq!(state.falling_piece().origin.row, row + 1);
        assert_eq!(state.ticks_remaining(), ticks_for_level(state.level()) as i32);
    }
}
