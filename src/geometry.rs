//! Plane symmetry and orientation utilities.
//!
//! A polyomino has up to 8 distinct orientations in the plane (the dihedral
//! group of the square). These are the 4 rotations, with and without a
//! reflection. Pieces with symmetries of their own produce fewer.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;

use crate::pieces::{Cell, Piece, CELLS_PER_PIECE, NUM_PIECES};

/// All 8 symmetry functions for the plane.
///
/// Organized as 4 rotations of the identity followed by 4 rotations of the
/// mirror image.
pub const SYMMETRIES: [fn(Cell) -> Cell; 8] = [
    // rotations of the identity
    |(r, c)| (r, c),   // 0 degrees
    |(r, c)| (c, -r),  // 90 degrees
    |(r, c)| (-r, -c), // 180 degrees
    |(r, c)| (-c, r),  // 270 degrees
    // rotations of the mirror image
    |(r, c)| (r, -c),
    |(r, c)| (c, r),
    |(r, c)| (-r, c),
    |(r, c)| (-c, -r),
];

/// A piece orientation: the cell positions after one symmetry, normalized
/// so the minimum row and column are zero, and sorted in row-major order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Orientation {
    pub piece: Piece,
    pub cells: [Cell; CELLS_PER_PIECE],
}

/// Generates all unique orientations of a piece.
///
/// Applies all 8 symmetries to the reference cells, normalizes each result
/// so the minimum coordinates are at the origin, then removes duplicates.
/// Symmetric pieces have fewer than 8 unique orientations.
pub fn orientations_of(piece: Piece) -> Vec<Orientation> {
    let mut cell_sets: Vec<[Cell; CELLS_PER_PIECE]> = SYMMETRIES
        .iter()
        .map(|transform| {
            let mut cells = piece.cells().map(|cell| transform(cell));
            normalize_to_origin(&mut cells);
            cells.sort_unstable();
            cells
        })
        .collect();

    // remove duplicate orientations (symmetric pieces produce duplicates)
    cell_sets.sort_unstable();
    cell_sets.dedup();

    // the dihedral group guarantees the count divides 8 and is never 0
    assert!(
        matches!(cell_sets.len(), 1 | 2 | 4 | 8),
        "piece {piece:?} produced {} orientations",
        cell_sets.len()
    );

    cell_sets
        .into_iter()
        .map(|cells| Orientation { piece, cells })
        .collect()
}

/// Returns the orientation sets of all 12 pieces, computed once per process.
///
/// The sets are board-independent, so every solver run shares this table.
pub fn orientation_table() -> &'static [Vec<Orientation>; NUM_PIECES] {
    static TABLE: OnceLock<[Vec<Orientation>; NUM_PIECES]> = OnceLock::new();
    TABLE.get_or_init(build_orientation_table)
}

/// Builds the full orientation table and checks catalog-wide invariants.
fn build_orientation_table() -> [Vec<Orientation>; NUM_PIECES] {
    let table = Piece::ALL.map(orientations_of);

    // no two pieces may share a shape, or rendered grids would be ambiguous
    let mut shapes: FxHashSet<[Cell; CELLS_PER_PIECE]> = FxHashSet::default();
    for orientations in &table {
        for orientation in orientations {
            assert!(
                shapes.insert(orientation.cells),
                "piece {:?} is congruent to another piece",
                orientation.piece
            );
        }
    }

    table
}

/// Translates cells so the minimum row and column values are both zero.
///
/// This normalization ensures that two orientations that differ only by
/// translation will be recognized as identical.
fn normalize_to_origin(cells: &mut [Cell; CELLS_PER_PIECE]) {
    let min_row = cells.iter().map(|&(row, _)| row).min().unwrap();
    let min_col = cells.iter().map(|&(_, col)| col).min().unwrap();

    for (row, col) in cells {
        *row -= min_row;
        *col -= min_col;
    }
}
