//! Pentomino Rectangle Enumerator Library
//!
//! Exhaustively enumerates the perfect tilings of the four 60-cell
//! rectangles (3x20, 4x15, 5x12 and 6x10) by the twelve free pentominoes,
//! each piece used exactly once.
//!
//! By default one solution per orbit of the board's symmetry group is
//! reported; [`Symmetry::All`] enumerates the full unreduced set. The
//! canonical counts are 2, 368, 1010 and 2339.

pub mod board;
pub mod error;
pub mod geometry;
pub mod persistence;
pub mod pieces;
pub mod placement;
pub mod registry;
pub mod solver;

pub use board::{Board, Rectangle};
pub use error::{Error, Result};
pub use registry::SolutionRegistry;
pub use solver::{solve_rectangle, Solution, Solver, Symmetry};
