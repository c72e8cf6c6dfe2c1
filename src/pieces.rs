//! Pentomino definitions and cell coordinate types.
//!
//! Each pentomino is defined as a set of unit cell positions in the plane,
//! normalized to start at the origin.

/// A 2D coordinate representing a unit cell position as (row, column).
pub type Cell = (i32, i32);

/// Number of cells in every pentomino.
pub const CELLS_PER_PIECE: usize = 5;

/// Number of distinct free pentominoes.
pub const NUM_PIECES: usize = 12;

/// The twelve free pentominoes, named after the letters they resemble.
///
/// The `u8` numeric representation indexes the tables in this crate.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Piece {
    F,
    I,
    L,
    N,
    P,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Piece {
    /// Array of all pieces in index order.
    pub const ALL: [Piece; NUM_PIECES] = [
        Piece::F,
        Piece::I,
        Piece::L,
        Piece::N,
        Piece::P,
        Piece::T,
        Piece::U,
        Piece::V,
        Piece::W,
        Piece::X,
        Piece::Y,
        Piece::Z,
    ];

    /// The letter used for this piece in rendered solution grids.
    #[inline]
    pub fn symbol(self) -> char {
        ['F', 'I', 'L', 'N', 'P', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'][self as usize]
    }

    /// The cells of this piece in its reference orientation.
    #[inline]
    pub fn cells(self) -> &'static [Cell; CELLS_PER_PIECE] {
        &CANONICAL_CELLS[self as usize]
    }

    /// Selects a single bit according to a piece.
    ///
    /// There are 12 pieces, so every piece fits in 16 bits.
    #[inline]
    pub fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Reference cell sets in `Piece` index order.
///
/// Cells are (row, column) pairs, normalized so the minimum row and column
/// are both zero, and sorted in row-major order. The sketches list board
/// rows top to bottom.
pub const CANONICAL_CELLS: &[[Cell; CELLS_PER_PIECE]; NUM_PIECES] = &[
    // F: .## / ##. / .#.
    [(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    // I: #####
    [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    // L: #. / #. / #. / ##
    [(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)],
    // N: .# / .# / ## / #.
    [(0, 1), (1, 1), (2, 0), (2, 1), (3, 0)],
    // P: ## / ## / #.
    [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)],
    // T: ### / .#. / .#.
    [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)],
    // U: #.# / ###
    [(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)],
    // V: #.. / #.. / ###
    [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)],
    // W: #.. / ##. / .##
    [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)],
    // X: .#. / ### / .#.
    [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)],
    // Y: .# / ## / .# / .#
    [(0, 1), (1, 0), (1, 1), (2, 1), (3, 1)],
    // Z: ##. / .#. / .##
    [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)],
];
