//! Exact-cover backtracking solver for pentomino rectangles.
//!
//! Key mechanics:
//! - u64 bitmask for occupied cells, collision checks by AND
//! - placements precomputed and bucketed by first covered cell
//! - recursion over an exclusively owned context with full rollback
//! - free-region pruning (fragments 5 cannot divide are never explored)
//! - optional symmetry reduction to one solution per orbit

use crate::board::{Board, Rectangle, BOARD_CELLS};
use crate::pieces::{Cell, Piece, CELLS_PER_PIECE, NUM_PIECES};
use crate::placement::{Placement, PlacementIndex};

/// Bitmask with all 60 cells occupied (lowest 60 bits set).
///
/// Bit `i` corresponds to the cell with row-major index `i`.
const ALL_CELLS_FILLED: u64 = (1 << BOARD_CELLS) - 1;

/// How solutions related by a board symmetry are reported.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Symmetry {
    /// One representative per orbit of the board's symmetry group (the
    /// identity, both axis flips, and the half turn).
    #[default]
    Canonical,
    /// Every tiling, including flipped and half-turned duplicates.
    All,
}

/// A complete tiling: one placement per piece, covering all 60 cells.
#[derive(Clone, Copy, Debug)]
pub struct Solution {
    placements: [Placement; NUM_PIECES],
}

impl Solution {
    /// The placements in the order the solver applied them.
    #[inline]
    pub fn placements(&self) -> &[Placement; NUM_PIECES] {
        &self.placements
    }

    /// Paints the tiling into a flat row-major grid of piece symbols.
    pub fn symbol_grid(&self, board: &Board) -> [u8; BOARD_CELLS] {
        let mut grid = [0u8; BOARD_CELLS];

        for placement in &self.placements {
            let symbol = placement.piece.symbol() as u8;
            for &cell in &placement.cells {
                grid[board.cell_index(cell)] = symbol;
            }
        }

        grid
    }
}

/// Mutable state of one search, exclusively owned by the running solver.
///
/// Uses fixed-size arrays and bitmasks to avoid heap allocation in the
/// hot loop. Every placement applied on the way down is undone on the way
/// back up, so the context is empty again when the search returns.
struct SearchContext {
    /// Bitmask of currently occupied cells.
    occupied: u64,
    /// Bitmask of placed pieces (bit i set = piece i used).
    used_pieces: u16,
    /// Placements applied on the current path, in order.
    stack: [Placement; NUM_PIECES],
    /// Number of placements currently applied.
    depth: usize,
}

/// A prepared solver for one board.
pub struct Solver {
    board: Board,
    symmetry: Symmetry,
    index: PlacementIndex,
}

impl Solver {
    /// Builds the placement index for a board and readies the search.
    pub fn new(board: Board, symmetry: Symmetry) -> Self {
        let index = PlacementIndex::build(&board, symmetry == Symmetry::Canonical);
        Self {
            board,
            symmetry,
            index,
        }
    }

    /// The board this solver enumerates.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Enumerates every tiling of the board, in a deterministic order.
    ///
    /// The search always runs to exhaustion. An impossible board (such as
    /// 1x60) simply produces an empty list.
    pub fn solve(&self) -> Vec<Solution> {
        let mut context = SearchContext {
            occupied: 0,
            used_pieces: 0,
            stack: [Placement::EMPTY; NUM_PIECES],
            depth: 0,
        };

        let mut solutions = Vec::new();
        self.search(&mut context, &mut solutions);
        solutions
    }

    /// Fills the lowest-index free cell, recursing on every legal placement.
    fn search(&self, context: &mut SearchContext, solutions: &mut Vec<Solution>) {
        let target_cell = match first_empty_cell(context.occupied) {
            Some(cell) => cell,
            None => {
                // all cells covered - found a tiling
                self.emit(context, solutions);
                return;
            }
        };

        // a free fragment whose size 5 cannot divide can never be tiled
        if self.free_region_size(context.occupied, target_cell) % CELLS_PER_PIECE != 0 {
            return;
        }

        for piece in Piece::ALL {
            if (context.used_pieces & piece.bit()) != 0 {
                continue;
            }

            for placement in self.index.candidates(piece, target_cell) {
                // fast collision check using bitmask AND
                if (context.occupied & placement.mask) != 0 {
                    continue;
                }

                context.occupied |= placement.mask;
                context.used_pieces |= piece.bit();
                context.stack[context.depth] = *placement;
                context.depth += 1;

                self.search(context, solutions);

                context.depth -= 1;
                context.used_pieces &= !piece.bit();
                context.occupied &= !placement.mask;
            }
        }
    }

    /// Records a complete tiling, unless symmetry reduction rejects it.
    fn emit(&self, context: &SearchContext, solutions: &mut Vec<Solution>) {
        debug_assert_eq!(context.depth, NUM_PIECES);

        let solution = Solution {
            placements: context.stack,
        };
        if self.symmetry == Symmetry::Canonical && !self.is_canonical(&solution) {
            return;
        }
        solutions.push(solution);
    }

    /// Whether a tiling is its orbit's representative under the residual
    /// axis flip.
    ///
    /// The placement index already confines the X center to the closed
    /// upper-left quadrant, which picks a unique orbit member except when
    /// the center sits exactly on the board's middle row or column. There
    /// the flip across that axis keeps X in the quadrant too, leaving two
    /// candidates; the lexicographically smaller rendered grid wins. No
    /// tiling is flip-invariant, so the comparison never ties.
    fn is_canonical(&self, solution: &Solution) -> bool {
        // sorted X cells put the center at slot 2
        let Some((center_row, center_col)) = solution
            .placements
            .iter()
            .find(|placement| placement.piece == Piece::X)
            .map(|placement| placement.cells[2])
        else {
            return true;
        };

        let rows = self.board.rows() as i32;
        let cols = self.board.cols() as i32;

        if 2 * center_row == rows - 1 {
            let grid = solution.symbol_grid(&self.board);
            grid <= flip_rows(&grid, &self.board)
        } else if 2 * center_col == cols - 1 {
            let grid = solution.symbol_grid(&self.board);
            grid <= flip_cols(&grid, &self.board)
        } else {
            true
        }
    }

    /// Size of the free region containing `start`, by flood fill over the
    /// four edge neighbors.
    fn free_region_size(&self, occupied: u64, start: usize) -> usize {
        let mut visited = occupied | (1 << start);
        let mut stack = [0usize; BOARD_CELLS];
        stack[0] = start;
        let mut stack_len = 1;
        let mut size = 0;

        while stack_len > 0 {
            stack_len -= 1;
            let (row, col) = self.board.index_cell(stack[stack_len]);
            size += 1;

            let neighbors: [Cell; 4] = [
                (row - 1, col),
                (row + 1, col),
                (row, col - 1),
                (row, col + 1),
            ];
            for neighbor in neighbors {
                if !self.board.contains(neighbor) {
                    continue;
                }
                let neighbor_index = self.board.cell_index(neighbor);
                if (visited & (1 << neighbor_index)) == 0 {
                    visited |= 1 << neighbor_index;
                    stack[stack_len] = neighbor_index;
                    stack_len += 1;
                }
            }
        }

        size
    }
}

/// Enumerates the tilings of one standard rectangle.
pub fn solve_rectangle(rectangle: Rectangle, symmetry: Symmetry) -> Vec<Solution> {
    Solver::new(rectangle.board(), symmetry).solve()
}

/// Finds the first empty cell using the occupied bitmask.
///
/// Returns `None` if all cells are filled (board complete).
#[inline(always)]
fn first_empty_cell(occupied: u64) -> Option<usize> {
    if occupied == ALL_CELLS_FILLED {
        None
    } else {
        // the number of trailing 1s equals the index of the first 0 bit
        Some(occupied.trailing_ones() as usize)
    }
}

/// Reverses the row order of a rendered grid (flip across the middle row).
fn flip_rows(grid: &[u8; BOARD_CELLS], board: &Board) -> [u8; BOARD_CELLS] {
    let (rows, cols) = (board.rows(), board.cols());
    let mut flipped = [0u8; BOARD_CELLS];

    for row in 0..rows {
        for col in 0..cols {
            flipped[(rows - 1 - row) * cols + col] = grid[row * cols + col];
        }
    }

    flipped
}

/// Reverses every row of a rendered grid (flip across the middle column).
fn flip_cols(grid: &[u8; BOARD_CELLS], board: &Board) -> [u8; BOARD_CELLS] {
    let (rows, cols) = (board.rows(), board.cols());
    let mut flipped = [0u8; BOARD_CELLS];

    for row in 0..rows {
        for col in 0..cols {
            flipped[row * cols + (cols - 1 - col)] = grid[row * cols + col];
        }
    }

    flipped
}
