//! Solution collection and grid rendering.
//!
//! The solver emits placements; this module turns them into the
//! per-rectangle collections and rendered grids that everything
//! downstream consumes. Rectangle labels appear only here, at the
//! output boundary.

use std::collections::BTreeMap;

use crate::board::{Board, Rectangle};
use crate::solver::{solve_rectangle, Solution, Symmetry};

/// Solutions for all four rectangles, each in discovery order.
///
/// The search never emits the same placement combination twice, so the
/// collections carry no deduplication step.
pub struct SolutionRegistry {
    solutions: [Vec<Solution>; 4],
}

impl SolutionRegistry {
    /// Solves every standard rectangle and collects the results.
    pub fn collect(symmetry: Symmetry) -> Self {
        let solutions = Rectangle::ALL.map(|rectangle| solve_rectangle(rectangle, symmetry));
        Self { solutions }
    }

    /// The solutions for one rectangle, in discovery order.
    #[inline]
    pub fn solutions(&self, rectangle: Rectangle) -> &[Solution] {
        &self.solutions[rectangle as usize]
    }

    /// Number of solutions found for one rectangle.
    #[inline]
    pub fn count(&self, rectangle: Rectangle) -> usize {
        self.solutions[rectangle as usize].len()
    }

    /// Renders one rectangle's solutions, in discovery order.
    pub fn rendered(&self, rectangle: Rectangle) -> Vec<String> {
        let board = rectangle.board();
        self.solutions(rectangle)
            .iter()
            .map(|solution| render(solution, &board))
            .collect()
    }

    /// Renders every rectangle's solutions, keyed by label.
    pub fn rendered_by_label(&self) -> BTreeMap<&'static str, Vec<String>> {
        Rectangle::ALL
            .into_iter()
            .map(|rectangle| (rectangle.label(), self.rendered(rectangle)))
            .collect()
    }
}

/// Renders a solution as `rows` lines of piece symbols joined by newlines.
///
/// Each line has exactly `cols` characters and there is no trailing
/// newline.
pub fn render(solution: &Solution, board: &Board) -> String {
    let grid = solution.symbol_grid(board);
    grid.chunks(board.cols())
        .map(|row| row.iter().map(|&symbol| symbol as char).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
