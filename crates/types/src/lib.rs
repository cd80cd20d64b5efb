//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data: the engine, the terminal view and the input
//! mapping all speak in these types.
//!
//! # Board Dimensions
//!
//! The classic playfield is 22 rows by 10 columns. The top
//! [`HIDDEN_ROWS`] rows are the spawn area: a locked cell there ends the game.
//! New pieces spawn at row 0, column `cols / 2 - 2`.
//!
//! # Gravity by Level
//!
//! Gravity is counted in engine ticks, never in wall-clock time:
//!
//! | Level | Ticks per row |
//! |-------|---------------|
//! | 0 | 50 |
//! | 5 | 40 |
//! | 10 | 30 |
//! | 15 | 20 |
//! | 19 | 4 |
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{Cell, Move, PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(Cell::from(kind), Cell::T);
//! assert!(Cell::Empty.is_empty());
//!
//! assert_eq!(Move::from_str("drop"), Some(Move::Drop));
//!
//! assert_eq!(DEFAULT_ROWS, 22);
//! assert_eq!(DEFAULT_COLS, 10);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells in a tetromino
pub const NUM_CELLS: usize = 4;

/// Number of rotation states per tetromino
pub const NUM_ORIENTATIONS: usize = 4;

/// Number of tetromino kinds
pub const NUM_KINDS: usize = 7;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 19;

/// Lines to clear before advancing a level
pub const LINES_PER_LEVEL: u32 = 10;

/// Rows above the play area that must stay empty
pub const HIDDEN_ROWS: usize = 2;

/// Classic board height (20 visible rows plus the hidden spawn rows)
pub const DEFAULT_ROWS: usize = 22;

/// Classic board width
pub const DEFAULT_COLS: usize = 10;

/// Smallest legal column count (the I piece lies flat across 4 columns)
pub const MIN_COLS: usize = 4;

/// Smallest legal row count (hidden rows plus the tallest orientation)
pub const MIN_ROWS: usize = HIDDEN_ROWS + 4;

/// Gravity ticks per row, indexed by level
pub const GRAVITY_LEVEL: [u32; MAX_LEVEL as usize + 1] = [
    // 0,  1,  2,  3,  4,  5,  6,  7,  8,  9,
    50, 48, 46, 44, 42, 40, 38, 36, 34, 32,
    // 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    30, 28, 26, 24, 22, 20, 16, 12, 8, 4,
];

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
///
/// The declaration order is the catalog order (I, J, L, O, S, T, Z) and is
/// what [`PieceKind::index`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind in catalog order
    pub const ALL: [PieceKind; NUM_KINDS] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position of this kind in the shape catalog
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind at a catalog index, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell on the game board
///
/// Filled variants mirror [`PieceKind`] so renderers can colour locked cells.
/// Game rules only ever ask [`Cell::is_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Piece kind that painted this cell
    pub fn kind(self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::I => Some(PieceKind::I),
            Cell::J => Some(PieceKind::J),
            Cell::L => Some(PieceKind::L),
            Cell::O => Some(PieceKind::O),
            Cell::S => Some(PieceKind::S),
            Cell::T => Some(PieceKind::T),
            Cell::Z => Some(PieceKind::Z),
        }
    }

    /// Single-character form used by debug dumps
    pub fn as_char(self) -> char {
        match self.kind() {
            None => '.',
            Some(kind) => kind.as_str().chars().next().unwrap_or('#'),
        }
    }
}

impl From<PieceKind> for Cell {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Cell::I,
            PieceKind::J => Cell::J,
            PieceKind::L => Cell::L,
            PieceKind::O => Cell::O,
            PieceKind::S => Cell::S,
            PieceKind::T => Cell::T,
            PieceKind::Z => Cell::Z,
        }
    }
}

/// A row, column pair
///
/// Negative values are allowed: they show up as offsets and while testing
/// candidate positions above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate by another location used as an offset
    pub const fn offset(self, by: Location) -> Self {
        Self {
            row: self.row + by.row,
            col: self.col + by.col,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The single player move fed into each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Move {
    /// Shift the falling piece one column left
    Left,
    /// Shift the falling piece one column right
    Right,
    /// Rotate one step clockwise, with wall kicks
    RotateClockwise,
    /// Rotate one step counter-clockwise, with wall kicks
    RotateCounterclockwise,
    /// Hard drop and lock immediately
    Drop,
    /// Store the falling piece, or swap it with the stored one
    Hold,
    /// Let gravity act alone
    #[default]
    None,
}

impl Move {
    pub const ALL: [Move; 7] = [
        Move::Left,
        Move::Right,
        Move::RotateClockwise,
        Move::RotateCounterclockwise,
        Move::Drop,
        Move::Hold,
        Move::None,
    ];

    /// Parse a move name (case-insensitive, short forms accepted)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Move::Left),
            "right" => Some(Move::Right),
            "rotatecw" | "clockwise" | "cw" => Some(Move::RotateClockwise),
            "rotateccw" | "counterclockwise" | "ccw" => Some(Move::RotateCounterclockwise),
            "drop" => Some(Move::Drop),
            "hold" => Some(Move::Hold),
            "none" => Some(Move::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Left => "left",
            Move::Right => "right",
            Move::RotateClockwise => "rotateCw",
            Move::RotateCounterclockwise => "rotateCcw",
            Move::Drop => "drop",
            Move::Hold => "hold",
            Move::None => "none",
        }
    }
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Running,
    /// Terminal: the caller should stop ticking
    GameOver,
}

impl Status {
    pub fn is_running(self) -> bool {
        self == Status::Running
    }
}

/// Errors surfaced by the engine's public API
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },
    #[error("a {rows}x{cols} board is not playable (need at least {min_rows}x{min_cols})", min_rows = MIN_ROWS, min_cols = MIN_COLS)]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("snapshot is inconsistent: {0}")]
    InvalidSnapshot(&'static str),
}
