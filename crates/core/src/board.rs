//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is empty or filled with a
//! piece kind. Storage is a flat row-major vector (`row * cols + col`) sized
//! once at construction. Coordinates are `(row, col)`: rows grow downward,
//! columns rightward, and row 0 is the top of the hidden spawn area.

use std::fmt;

use crate::types::{Cell, EngineError, MIN_COLS, MIN_ROWS};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        let len = Self::cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Rebuild a board from row-major cells
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, EngineError> {
        if cells.len() != Self::cell_count(rows, cols)? {
            return Err(EngineError::InvalidSnapshot("cell count does not match dimensions"));
        }
        Ok(Self { rows, cols, cells })
    }

    /// `rows * cols`, rejecting boards that are too small or too large to index
    fn cell_count(rows: usize, cols: usize) -> Result<usize, EngineError> {
        let too_small = rows < MIN_ROWS || cols < MIN_COLS;
        let too_large = i32::try_from(rows).is_err() || i32::try_from(cols).is_err();
        match rows.checked_mul(cols) {
            Some(len) if !too_small && !too_large => Ok(len),
            _ => Err(EngineError::InvalidDimensions { rows, cols }),
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    fn out_of_bounds(&self, row: i32, col: i32) -> EngineError {
        EngineError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a position lies on the board
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: i32, col: i32) -> Result<Cell, EngineError> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Set cell at (row, col)
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> Result<(), EngineError> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check if position is within bounds and empty
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Ok(Cell::Empty))
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|cell| !cell.is_empty()))
            .unwrap_or(false)
    }

    /// Borrow a single row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Remove `row` by shifting every row above it down one and emptying the top
    pub fn collapse_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let width = self.cols;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(Cell::Empty);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
