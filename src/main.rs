//! Pentomino Rectangle Enumerator
//!
//! Enumerates every way the twelve free pentominoes tile the 3x20, 4x15,
//! 5x12 and 6x10 rectangles, using each piece exactly once. Prints the
//! per-rectangle solution counts and can dump or save the rendered grids.

use std::path::PathBuf;

use clap::Parser;

use pentominoes::{persistence, registry, solver};
use pentominoes::{Rectangle, SolutionRegistry, Symmetry};

/// Enumerates pentomino tilings of the four 60-cell rectangles.
#[derive(Parser)]
#[command(name = "pentominoes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Solve one rectangle ("3x20", "4x15", "5x12" or "6x10") instead of all four.
    #[arg(long)]
    board: Option<Rectangle>,

    /// Enumerate every tiling instead of one per symmetry orbit.
    #[arg(long)]
    all_orientations: bool,

    /// Print every rendered solution grid.
    #[arg(long)]
    print: bool,

    /// Directory to write per-rectangle solution files into.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let symmetry = if cli.all_orientations {
        Symmetry::All
    } else {
        Symmetry::Canonical
    };

    match cli.board {
        Some(rectangle) => run_rectangle(rectangle, symmetry, &cli),
        None => run_all(symmetry, &cli),
    }
}

/// Solves a single rectangle and reports according to the CLI flags.
fn run_rectangle(rectangle: Rectangle, symmetry: Symmetry, cli: &Cli) {
    let board = rectangle.board();
    let solutions = solver::solve_rectangle(rectangle, symmetry);
    println!("{}: {} solutions", rectangle, solutions.len());

    let rendered: Vec<String> = solutions
        .iter()
        .map(|solution| registry::render(solution, &board))
        .collect();

    if cli.print {
        print_grids(&rendered);
    }
    if let Some(directory) = &cli.output {
        match persistence::save_rectangle(rectangle, &rendered, directory) {
            Ok(path) => println!("Wrote {}", path.display()),
            Err(e) => eprintln!("Failed to save solutions: {}", e),
        }
    }
}

/// Solves all four rectangles and reports according to the CLI flags.
fn run_all(symmetry: Symmetry, cli: &Cli) {
    let registry = SolutionRegistry::collect(symmetry);

    for rectangle in Rectangle::ALL {
        println!("{}: {} solutions", rectangle, registry.count(rectangle));
    }

    if cli.print {
        for (label, grids) in registry.rendered_by_label() {
            println!();
            println!("{label}:");
            print_grids(&grids);
        }
    }
    if let Some(directory) = &cli.output {
        match persistence::save_all(&registry, directory) {
            Ok(()) => println!("Wrote solution files to {}", directory.display()),
            Err(e) => eprintln!("Failed to save solutions: {}", e),
        }
    }
}

/// Prints rendered grids separated by blank lines.
fn print_grids(rendered: &[String]) {
    for grid in rendered {
        println!();
        println!("{grid}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pentominoes::geometry;
    use pentominoes::pieces::Piece;

    #[test]
    fn test_canonical_counts_match_published_totals() {
        let registry = SolutionRegistry::collect(Symmetry::Canonical);

        let counts: Vec<usize> = Rectangle::ALL
            .into_iter()
            .map(|rectangle| registry.count(rectangle))
            .collect();
        assert_eq!(counts, [2, 368, 1010, 2339]);

        let by_label = registry.rendered_by_label();
        let labels: Vec<&str> = by_label.keys().copied().collect();
        assert_eq!(labels, ["3x20", "4x15", "5x12", "6x10"]);

        for (label, grids) in &by_label {
            let rectangle: Rectangle = label.parse().unwrap();
            assert_eq!(grids.len(), registry.count(rectangle));
        }
    }

    #[test]
    fn test_orientation_counts_snapshot() {
        let mut output = String::new();
        for (piece, orientations) in Piece::ALL.iter().zip(geometry::orientation_table()) {
            output.push_str(&format!("{}: {}\n", piece.symbol(), orientations.len()));
        }

        insta::assert_snapshot!("orientation_counts", output);
    }
}
