//! File output for enumerated solutions.
//!
//! One text file per rectangle, named after its label ("3x20.txt" and so
//! on): a count header, then every solution grid separated by blank lines.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::board::Rectangle;
use crate::registry::SolutionRegistry;

/// Saves every rectangle's solutions under `directory`.
///
/// The directory is created if it does not exist.
pub fn save_all(registry: &SolutionRegistry, directory: &Path) -> std::io::Result<()> {
    for rectangle in Rectangle::ALL {
        save_rectangle(rectangle, &registry.rendered(rectangle), directory)?;
    }
    Ok(())
}

/// Saves one rectangle's rendered solutions as `<label>.txt`.
///
/// Returns the path of the written file.
pub fn save_rectangle(
    rectangle: Rectangle,
    rendered: &[String],
    directory: &Path,
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(directory)?;
    let path = directory.join(format!("{}.txt", rectangle.label()));

    let mut file = File::create(&path)?;
    writeln!(file, "{}: {} solutions", rectangle.label(), rendered.len())?;
    for solution in rendered {
        writeln!(file)?;
        writeln!(file, "{solution}")?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Symmetry;
    use tempfile::TempDir;

    #[test]
    fn test_saved_file_lists_every_solution() {
        let temp_dir = TempDir::new().unwrap();
        let rendered = vec![
            "III\nIII".to_string(),
            "LLL\nLLL".to_string(),
        ];

        let path = save_rectangle(Rectangle::R6x10, &rendered, temp_dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "6x10.txt");

        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(
            contents,
            "6x10: 2 solutions\n\nIII\nIII\n\nLLL\nLLL\n"
        );
    }

    #[test]
    fn test_save_all_writes_one_file_per_rectangle() {
        let temp_dir = TempDir::new().unwrap();
        let registry = SolutionRegistry::collect(Symmetry::Canonical);

        save_all(&registry, temp_dir.path()).unwrap();

        for rectangle in Rectangle::ALL {
            let path = temp_dir.path().join(format!("{}.txt", rectangle.label()));
            let contents = fs::read_to_string(&path).unwrap();
            let header = format!(
                "{}: {} solutions",
                rectangle.label(),
                registry.count(rectangle)
            );
            assert!(contents.starts_with(&header), "bad header in {path:?}");
        }
    }
}
