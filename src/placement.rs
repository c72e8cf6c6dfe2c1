//! Placement generation and the per-cell placement index.
//!
//! A placement is a piece orientation translated to a concrete board
//! position. The solver never touches orientations directly; it works from
//! an index of placements bucketed by the first board cell they cover.

use crate::board::{Board, BOARD_CELLS};
use crate::geometry::{orientation_table, Orientation};
use crate::pieces::{Cell, Piece, CELLS_PER_PIECE};

/// A piece orientation translated to a specific board position.
///
/// Stores both the bitmask (for fast collision detection) and the absolute
/// cells (for rendering solutions).
#[derive(Clone, Copy, Debug)]
pub struct Placement {
    /// The piece this placement belongs to.
    pub piece: Piece,
    /// Bitmask where bit `i` is set if cell index `i` is covered.
    pub mask: u64,
    /// Absolute covered cells, sorted in row-major order.
    pub cells: [Cell; CELLS_PER_PIECE],
}

impl Placement {
    /// A zero-valued placeholder for fixed-size array initialization.
    pub const EMPTY: Self = Self {
        piece: Piece::F,
        mask: 0,
        cells: [(0, 0); CELLS_PER_PIECE],
    };
}

/// Lists every position of an orientation that fits on the board.
///
/// Anchors are enumerated in row-major order. Orientation cells are
/// normalized to the origin, so the admissible anchors form a rectangle
/// and every emitted placement is in bounds by construction.
pub fn placements_on(orientation: &Orientation, board: &Board) -> Vec<Placement> {
    let height = orientation.cells.iter().map(|&(row, _)| row).max().unwrap() + 1;
    let width = orientation.cells.iter().map(|&(_, col)| col).max().unwrap() + 1;
    let rows = board.rows() as i32;
    let cols = board.cols() as i32;

    let mut placements = Vec::new();
    for anchor_row in 0..=rows - height {
        for anchor_col in 0..=cols - width {
            placements.push(place_at(orientation, (anchor_row, anchor_col), board));
        }
    }
    placements
}

/// Translates an orientation so its bounding box starts at `anchor`.
fn place_at(orientation: &Orientation, anchor: Cell, board: &Board) -> Placement {
    let mut mask = 0u64;
    let mut cells = [(0, 0); CELLS_PER_PIECE];

    for (slot, &(row, col)) in orientation.cells.iter().enumerate() {
        let cell = (row + anchor.0, col + anchor.1);
        mask |= 1 << board.cell_index(cell);
        cells[slot] = cell;
    }

    // translation preserves row-major order, so the cells stay sorted
    Placement {
        piece: orientation.piece,
        mask,
        cells,
    }
}

/// All valid placements of one piece sharing a first covered cell.
type CellBucket = Vec<Placement>;

/// Lookup table of placements indexed by `[piece_index][cell_index]`.
///
/// Buckets key on the first covered cell in row-major order. When the
/// solver targets the lowest-index free cell, only placements whose first
/// covered cell is exactly that cell can fit: anything covering an earlier
/// cell collides with the already filled prefix.
pub struct PlacementIndex {
    buckets: Vec<Vec<CellBucket>>,
}

impl PlacementIndex {
    /// Builds the placement index for a board.
    ///
    /// With `restrict_x` set, placements of the X pentomino are kept only
    /// when their center lies in the closed upper-left quadrant of the
    /// board. X is the one fully symmetric piece, so this keeps at least
    /// one member of every symmetry orbit of a tiling. Centers on a middle
    /// axis of the board keep two members; the solver settles those at
    /// emission time.
    pub fn build(board: &Board, restrict_x: bool) -> Self {
        let buckets = orientation_table()
            .iter()
            .map(|orientations| {
                let mut piece_buckets: Vec<CellBucket> = vec![Vec::new(); BOARD_CELLS];

                for orientation in orientations {
                    for placement in placements_on(orientation, board) {
                        if restrict_x
                            && placement.piece == Piece::X
                            && !x_center_in_quadrant(&placement, board)
                        {
                            continue;
                        }
                        let first_cell = board.cell_index(placement.cells[0]);
                        piece_buckets[first_cell].push(placement);
                    }
                }

                piece_buckets
            })
            .collect();

        Self { buckets }
    }

    /// Placements of `piece` whose first covered cell is `cell`.
    #[inline]
    pub fn candidates(&self, piece: Piece, cell: usize) -> &[Placement] {
        &self.buckets[piece as usize][cell]
    }
}

/// Whether an X placement's center lies in the closed upper-left quadrant.
fn x_center_in_quadrant(placement: &Placement, board: &Board) -> bool {
    // sorted X cells put the center at slot 2
    let (row, col) = placement.cells[2];
    row <= board.rows() as i32 - 1 - row && col <= board.cols() as i32 - 1 - col
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Rectangle;
    use crate::geometry::orientations_of;

    /// Returns the orientation of `piece` with the given bounding box.
    fn orientation_with_box(piece: Piece, height: i32, width: i32) -> Orientation {
        orientations_of(piece)
            .into_iter()
            .find(|orientation| {
                let max_row = orientation.cells.iter().map(|&(row, _)| row).max().unwrap();
                let max_col = orientation.cells.iter().map(|&(_, col)| col).max().unwrap();
                (max_row + 1, max_col + 1) == (height, width)
            })
            .unwrap()
    }

    /// The top-left corner of a placement's bounding box.
    fn anchor_of(placement: &Placement) -> Cell {
        let row = placement.cells.iter().map(|&(row, _)| row).min().unwrap();
        let col = placement.cells.iter().map(|&(_, col)| col).min().unwrap();
        (row, col)
    }

    #[test]
    fn test_anchor_grid_sizes() {
        let board = Rectangle::R3x20.board();
        let horizontal_i = orientation_with_box(Piece::I, 1, 5);
        assert_eq!(placements_on(&horizontal_i, &board).len(), 3 * 16);

        let vertical_i = orientation_with_box(Piece::I, 5, 1);
        assert!(placements_on(&vertical_i, &board).is_empty());

        let board = Rectangle::R6x10.board();
        let x = orientation_with_box(Piece::X, 3, 3);
        assert_eq!(placements_on(&x, &board).len(), 4 * 8);
    }

    #[test]
    fn test_anchors_advance_in_row_major_order() {
        for rectangle in Rectangle::ALL {
            let board = rectangle.board();
            for orientations in orientation_table() {
                for orientation in orientations {
                    let anchors: Vec<Cell> = placements_on(orientation, &board)
                        .iter()
                        .map(anchor_of)
                        .collect();

                    assert!(
                        anchors.windows(2).all(|pair| pair[0] < pair[1]),
                        "{rectangle}: {orientation:?} anchors not in row-major order"
                    );
                }
            }
        }
    }

    #[test]
    fn test_placements_are_in_bounds_with_five_cell_masks() {
        for rectangle in Rectangle::ALL {
            let board = rectangle.board();
            for orientations in orientation_table() {
                for orientation in orientations {
                    for placement in placements_on(orientation, &board) {
                        assert_eq!(placement.mask.count_ones(), CELLS_PER_PIECE as u32);
                        assert!(placement.mask < 1 << BOARD_CELLS);

                        let mut sorted = placement.cells;
                        sorted.sort_unstable();
                        assert_eq!(sorted, placement.cells);

                        for &cell in &placement.cells {
                            assert!(
                                board.contains(cell),
                                "{rectangle}: {placement:?} leaves the board"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_buckets_key_on_first_covered_cell() {
        let board = Rectangle::R5x12.board();
        let index = PlacementIndex::build(&board, false);

        let mut bucketed = 0;
        for piece in Piece::ALL {
            for cell in 0..BOARD_CELLS {
                for placement in index.candidates(piece, cell) {
                    assert_eq!(placement.piece, piece);
                    assert_eq!(board.cell_index(placement.cells[0]), cell);
                    assert_eq!(placement.mask.trailing_zeros() as usize, cell);
                    bucketed += 1;
                }
            }
        }

        let generated: usize = orientation_table()
            .iter()
            .flatten()
            .map(|orientation| placements_on(orientation, &board).len())
            .sum();
        assert_eq!(bucketed, generated);
    }

    #[test]
    fn test_x_restriction_confines_centers_to_the_quadrant() {
        for (rectangle, expected_centers) in [
            (Rectangle::R3x20, 9),
            (Rectangle::R4x15, 7),
            (Rectangle::R5x12, 10),
            (Rectangle::R6x10, 8),
        ] {
            let board = rectangle.board();
            let index = PlacementIndex::build(&board, true);

            let mut kept = 0;
            for cell in 0..BOARD_CELLS {
                for placement in index.candidates(Piece::X, cell) {
                    let (row, col) = placement.cells[2];
                    assert!(row <= board.rows() as i32 - 1 - row);
                    assert!(col <= board.cols() as i32 - 1 - col);
                    kept += 1;
                }
            }
            assert_eq!(kept, expected_centers, "{rectangle}");
        }
    }

    #[test]
    fn test_restriction_leaves_other_pieces_alone() {
        let board = Rectangle::R6x10.board();
        let unrestricted = PlacementIndex::build(&board, false);
        let restricted = PlacementIndex::build(&board, true);

        for piece in Piece::ALL {
            let count = |index: &PlacementIndex| -> usize {
                (0..BOARD_CELLS)
                    .map(|cell| index.candidates(piece, cell).len())
                    .sum()
            };
            if piece == Piece::X {
                assert!(count(&restricted) < count(&unrestricted));
            } else {
                assert_eq!(count(&restricted), count(&unrestricted));
            }
        }
    }
}
