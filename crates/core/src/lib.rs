//! Core game logic - a tick-driven falling-block engine
//!
//! This crate holds every game rule and no I/O. One call to
//! [`GameState::tick`] advances the game by exactly one step, so a frontend
//! chooses the wall-clock rate and a test can drive play move by move.
//!
//! # Module Structure
//!
//! - [`board`]: flat row-major grid with bounds-checked access and row collapse
//! - [`shapes`]: the fixed catalog of seven kinds in four rotations
//! - [`piece`]: a kind, rotation and origin; the falling, next and stored slots
//! - [`placement`]: `fits`, `put` and `remove` for pieces on a board
//! - [`rng`]: where new kinds come from (uniform, 7-bag or a fixed sequence)
//! - [`gravity`]: the per-level countdown until the piece falls one row
//! - [`scoring`]: classic line scores and level progression
//! - [`game_state`]: the tick pipeline tying everything together
//! - [`snapshot`]: serializable copies of a game
//!
//! # Game Rules
//!
//! - Gravity pulls the piece down every 50 ticks at level 0, 4 at level 19
//! - Rotation tries in place, then one column left, then one right, then
//!   the next rotation step
//! - Hold stores the falling piece, or swaps it with the stored one
//! - 40/100/300/1200 points for 1-4 lines, times `level + 1`
//! - The game ends when a locked cell remains in the two hidden spawn rows
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::{GameState, SequenceSource};
//! use tick_tetris_core::types::{Cell, Move, PieceKind};
//!
//! let mut game = GameState::init(22, 10, SequenceSource::repeat(PieceKind::O)).unwrap();
//! game.tick(Move::Drop);
//!
//! // The O lands in the bottom two rows
//! assert_eq!(game.cell_at(21, 4), Ok(Cell::O));
//! assert_eq!(game.cell_at(20, 5), Ok(Cell::O));
//! ```

pub mod board;
pub mod game_state;
pub mod gravity;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use gravity::{ticks_for_level, Gravity};
pub use piece::Piece;
pub use rng::{BagSource, PieceSource, SequenceSource, UniformSource};
pub use scoring::{calculate_line_score, Progress, ScoreResult};
pub use shapes::{get_shape, Shape, SHAPES};
pub use snapshot::GameSnapshot;
