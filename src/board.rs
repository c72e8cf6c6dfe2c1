//! Board shapes and cell indexing.
//!
//! The twelve pentominoes cover 60 cells, so every board is a rectangle
//! with exactly that area. Cells are indexed in row-major order:
//! `index = row * cols + col`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::pieces::Cell;

/// Total number of cells in every board.
pub const BOARD_CELLS: usize = 60;

/// A rectangular board with exactly 60 cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Board {
    rows: usize,
    cols: usize,
}

impl Board {
    /// Creates a board, rejecting dimensions whose area is not 60 cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows.checked_mul(cols) != Some(BOARD_CELLS) {
            return Err(Error::InvalidBoardDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Converts a (row, column) cell to its row-major index.
    #[inline(always)]
    pub fn cell_index(&self, (row, col): Cell) -> usize {
        row as usize * self.cols + col as usize
    }

    /// Converts a row-major index back to a (row, column) cell.
    #[inline(always)]
    pub fn index_cell(&self, index: usize) -> Cell {
        ((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// Whether a cell lies within the board bounds.
    #[inline(always)]
    pub fn contains(&self, (row, col): Cell) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }
}

/// The four rectangles the twelve pentominoes tile perfectly.
///
/// The `u8` numeric representation indexes per-rectangle tables.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Rectangle {
    R3x20,
    R4x15,
    R5x12,
    R6x10,
}

impl Rectangle {
    /// Array of all rectangles in index order.
    pub const ALL: [Rectangle; 4] = [
        Rectangle::R3x20,
        Rectangle::R4x15,
        Rectangle::R5x12,
        Rectangle::R6x10,
    ];

    /// The conventional "<rows>x<cols>" label for this rectangle.
    pub fn label(self) -> &'static str {
        ["3x20", "4x15", "5x12", "6x10"][self as usize]
    }

    /// The board with this rectangle's dimensions.
    pub fn board(self) -> Board {
        let (rows, cols) = [(3, 20), (4, 15), (5, 12), (6, 10)][self as usize];
        Board { rows, cols }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rectangle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Rectangle::ALL
            .into_iter()
            .find(|rectangle| rectangle.label() == s)
            .ok_or_else(|| Error::UnknownRectangle {
                label: s.to_string(),
            })
    }
}
