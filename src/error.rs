//! Error types for board construction and rectangle lookup.

use std::fmt;

/// Main error type for this crate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Board dimensions whose area is not the 60 cells the pieces cover.
    InvalidBoardDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },

    /// A rectangle label that is not one of "3x20", "4x15", "5x12", "6x10".
    UnknownRectangle {
        /// The label that failed to parse.
        label: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoardDimensions { rows, cols } => {
                write!(
                    f,
                    "invalid board dimensions {rows}x{cols}: area must be 60 cells"
                )
            }
            Self::UnknownRectangle { label } => {
                write!(f, "unknown rectangle '{label}'")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_input() {
        let error = Error::InvalidBoardDimensions { rows: 4, cols: 14 };
        assert_eq!(
            error.to_string(),
            "invalid board dimensions 4x14: area must be 60 cells"
        );

        let error = Error::UnknownRectangle {
            label: "5x13".to_string(),
        };
        assert_eq!(error.to_string(), "unknown rectangle '5x13'");
    }
}
