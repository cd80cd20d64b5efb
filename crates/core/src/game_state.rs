//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, piece source,
//! gravity and scoring. [`GameState::tick`] is the only way play advances and
//! it always runs the same steps in the same order:
//!
//! 1. gravity (may lock the falling piece and bring in the next one)
//! 2. the player's move, applied to whatever is falling now
//! 3. line clears and score
//! 4. the game-over check
//!
//! Outside of a tick the falling piece is painted on the board, so
//! [`GameState::cell_at`] shows exactly what a renderer should draw.

use std::fmt;

use log::{debug, trace};

use crate::board::Board;
use crate::gravity::Gravity;
use crate::piece::Piece;
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::Progress;
use crate::types::{Cell, EngineError, Location, Move, Status, HIDDEN_ROWS};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    pub(crate) board: Board,
    pub(crate) progress: Progress,
    pub(crate) falling: Piece,
    pub(crate) next: Piece,
    pub(crate) stored: Option<Piece>,
    pub(crate) gravity: Gravity,
    pub(crate) status: Status,
    pub(crate) source: S,
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game on a `rows x cols` board
    ///
    /// The first falling piece and the first "next" piece are drawn from
    /// `source`; the falling one is already painted at the spawn position.
    pub fn init(rows: usize, cols: usize, mut source: S) -> Result<Self, EngineError> {
        let mut board = Board::new(rows, cols)?;
        let falling = Piece::spawn(source.next_kind(), cols);
        let next = Piece::spawn(source.next_kind(), cols);
        board.put(&falling);

        let progress = Progress::new();
        debug!("new {}x{} game, first piece {}", rows, cols, falling.kind);
        Ok(Self {
            board,
            gravity: Gravity::new(progress.level),
            progress,
            falling,
            next,
            stored: None,
            status: Status::Running,
            source,
        })
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    /// Cell at (row, col), including the painted falling piece
    pub fn cell_at(&self, row: i32, col: i32) -> Result<Cell, EngineError> {
        self.board.get(row, col)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn points(&self) -> u32 {
        self.progress.points
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn lines_remaining(&self) -> u32 {
        self.progress.lines_remaining
    }

    pub fn ticks_remaining(&self) -> i32 {
        self.gravity.ticks_remaining()
    }

    pub fn falling_piece(&self) -> &Piece {
        &self.falling
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn held_piece(&self) -> Option<&Piece> {
        self.stored.as_ref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Advance the game one tick with the player's move
    ///
    /// Once this has returned [`Status::GameOver`] the state is frozen and
    /// every later call returns `GameOver` without touching the board.
    pub fn tick(&mut self, mv: Move) -> Status {
        if self.status == Status::GameOver {
            return Status::GameOver;
        }

        // A blocked spawn stops the tick before line clearing, so the lock
        // that caused it is neither cleared nor scored.
        self.do_gravity_tick();
        if self.status == Status::GameOver {
            return self.status;
        }
        self.handle_move(mv);
        if self.status == Status::GameOver {
            return self.status;
        }

        let lines_cleared = self.check_lines();
        self.adjust_score(lines_cleared);

        if self.is_game_over() {
            debug!(
                "game over with {} points on level {}",
                self.progress.points, self.progress.level
            );
            self.status = Status::GameOver;
        }
        self.status
    }

    /// Count down gravity and pull the falling piece down once it is due
    ///
    /// A piece that cannot move down is locked where it is and replaced.
    pub(crate) fn do_gravity_tick(&mut self) {
        if !self.gravity.tick() {
            return;
        }

        self.board.remove(&self.falling);
        self.falling.origin.row += 1;
        if self.board.fits(&self.falling) {
            trace!("gravity: {} to row {}", self.falling.kind, self.falling.origin.row);
            self.board.put(&self.falling);
            self.gravity.reset(self.progress.level);
        } else {
            self.falling.origin.row -= 1;
            self.board.put(&self.falling);
            self.lock_and_replace();
        }
    }

    fn handle_move(&mut self, mv: Move) {
        match mv {
            Move::Left => self.move_horizontal(-1),
            Move::Right => self.move_horizontal(1),
            Move::RotateClockwise => self.rotate(1),
            Move::RotateCounterclockwise => self.rotate(-1),
            Move::Drop => self.hard_drop(),
            Move::Hold => self.hold(),
            Move::None => {}
        }
    }

    /// Shift the falling piece one column; a blocked shift does nothing
    pub(crate) fn move_horizontal(&mut self, direction: i32) {
        self.board.remove(&self.falling);
        self.falling.origin.col += direction;
        if !self.board.fits(&self.falling) {
            self.falling.origin.col -= direction;
        }
        self.board.put(&self.falling);
    }

    /// Rotate the falling piece by one step in `direction`
    ///
    /// Each rotation step is tried in place, then one column left, then one
    /// column right. If none fit, the next step in the same direction is
    /// tried. Four steps bring the piece back to where it started, which
    /// always fits, so the loop ends.
    pub(crate) fn rotate(&mut self, direction: i32) {
        self.board.remove(&self.falling);
        let start_col = self.falling.origin.col;
        loop {
            self.falling.rotate_by(direction);

            if self.try_column(start_col)
                || self.try_column(start_col - 1)
                || self.try_column(start_col + 1)
            {
                break;
            }
            self.falling.origin.col = start_col;
        }
        self.board.put(&self.falling);
    }

    fn try_column(&mut self, col: i32) -> bool {
        self.falling.origin.col = col;
        self.board.fits(&self.falling)
    }

    /// Send the falling piece straight down and lock it
    pub(crate) fn hard_drop(&mut self) {
        self.board.remove(&self.falling);
        while self.board.fits(&self.falling) {
            self.falling.origin.row += 1;
        }
        self.falling.origin.row -= 1;
        self.board.put(&self.falling);
        self.lock_and_replace();
    }

    /// Store the falling piece, or swap it with the stored one
    ///
    /// A swap keeps the falling piece's origin and only exchanges kind and
    /// rotation; the "next" piece is untouched. If the swapped-in shape
    /// collides it is raised row by row until it fits. When no raise makes
    /// it fit the swap is abandoned.
    pub(crate) fn hold(&mut self) {
        self.board.remove(&self.falling);
        match self.stored.as_mut() {
            None => {
                debug!("hold: storing {}", self.falling.kind);
                self.stored = Some(self.falling);
                self.replace_falling();
                return;
            }
            Some(stored) => {
                let original = self.falling;
                std::mem::swap(&mut self.falling.kind, &mut stored.kind);
                std::mem::swap(&mut self.falling.rotation, &mut stored.rotation);

                // Above row -4 no cell of any shape can be on the board.
                while !self.board.fits(&self.falling) && self.falling.origin.row > -4 {
                    self.falling.origin.row -= 1;
                }
                if self.board.fits(&self.falling) {
                    debug!("hold: swapped {} for {}", original.kind, self.falling.kind);
                } else {
                    stored.kind = self.falling.kind;
                    stored.rotation = self.falling.rotation;
                    self.falling = original;
                }
            }
        }
        self.board.put(&self.falling);
    }

    /// The falling piece has settled: leave it on the board and bring in `next`
    fn lock_and_replace(&mut self) {
        debug!(
            "lock: {} at {} rotation {}",
            self.falling.kind, self.falling.origin, self.falling.rotation
        );
        self.replace_falling();
    }

    /// Promote `next` to falling, paint it, and draw a fresh `next`
    ///
    /// A new piece that collides at the spawn position is left unpainted
    /// and ends the game on the spot.
    fn replace_falling(&mut self) {
        let cols = self.board.cols();
        self.falling = self.next;
        self.next = Piece::spawn(self.source.next_kind(), cols);
        self.gravity.reset(self.progress.level);

        if self.board.fits(&self.falling) {
            self.board.put(&self.falling);
        } else {
            debug!("spawn blocked for {}", self.falling.kind);
            self.status = Status::GameOver;
        }
    }

    /// Clear every full row and return how many went
    pub(crate) fn check_lines(&mut self) -> u32 {
        self.board.remove(&self.falling);

        let mut lines = 0;
        let mut row = self.board.rows();
        while row > 0 {
            if self.board.is_row_full(row - 1) {
                // Re-examine the same index: the row above just moved into it.
                self.board.collapse_row(row - 1);
                lines += 1;
            } else {
                row -= 1;
            }
        }

        self.board.put(&self.falling);
        if lines > 0 {
            debug!("cleared {} line(s)", lines);
        }
        lines
    }

    pub(crate) fn adjust_score(&mut self, lines_cleared: u32) {
        let result = self.progress.adjust(lines_cleared);
        if result.leveled_up {
            debug!("level up: now level {}", self.progress.level);
        }
    }

    /// Whether anything other than the falling piece sits in the spawn rows
    pub fn is_game_over(&self) -> bool {
        let own = self.falling.cells();
        (0..HIDDEN_ROWS as i32).any(|row| {
            (0..self.board.cols() as i32).any(|col| {
                !own.contains(&Location::new(row, col)) && !self.board.is_open(row, col)
            })
        })
    }

    /// Row the falling piece would lock at on a hard drop
    pub fn ghost_row(&self) -> i32 {
        let own = self.falling.cells();
        let mut landing = self.falling;
        loop {
            landing.origin.row += 1;
            let blocked = landing.cells().iter().any(|loc| {
                !own.contains(loc) && !self.board.is_open(loc.row, loc.col)
            });
            if blocked {
                return landing.origin.row - 1;
            }
        }
    }
}

impl GameState<UniformSource> {
    /// Classic game with a seeded uniform source
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, EngineError> {
        Self::init(rows, cols, UniformSource::seeded(seed))
    }
}

impl<S> fmt::Display for GameState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let piece = |p: &Piece| format!("{} rot {} at {}", p.kind, p.rotation, p.origin);

        writeln!(f, "Game:")?;
        writeln!(f, "  rows: {}", self.board.rows())?;
        writeln!(f, "  cols: {}", self.board.cols())?;
        writeln!(f, "  board:")?;
        for (i, line) in self.board.to_string().lines().enumerate() {
            let marker = if i < HIDDEN_ROWS { '^' } else { '|' };
            writeln!(f, "    {marker}{line}{marker}")?;
        }
        writeln!(f, "  points: {}", self.progress.points)?;
        writeln!(f, "  level: {}", self.progress.level)?;
        writeln!(f, "  falling: {}", piece(&self.falling))?;
        writeln!(f, "  next:    {}", piece(&self.next))?;
        match &self.stored {
            Some(stored) => writeln!(f, "  stored:  {}", piece(stored))?,
            None => writeln!(f, "  stored:  <none>")?,
        }
        writeln!(f, "  ticksRemaining: {}", self.gravity.ticks_remaining())?;
        write!(f, "  linesRemaining: {}", self.progress.lines_remaining)
    }
}
