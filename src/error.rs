//! Typed failure values returned across the comparison boundary

use std::path::PathBuf;

use thiserror::Error;

/// Which list(s) a selected column is missing from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingIn {
    First,
    Second,
    Both,
}

impl MissingIn {
    /// Combine the per-table resolution outcomes into a location
    pub fn from_resolution(missing_in_first: bool, missing_in_second: bool) -> Option<Self> {
        match (missing_in_first, missing_in_second) {
            (true, true) => Some(MissingIn::Both),
            (true, false) => Some(MissingIn::First),
            (false, true) => Some(MissingIn::Second),
            (false, false) => None,
        }
    }
}

impl std::fmt::Display for MissingIn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingIn::First => write!(f, "the first list"),
            MissingIn::Second => write!(f, "the second list"),
            MissingIn::Both => write!(f, "both lists"),
        }
    }
}

/// Errors reported by parsing and comparison
///
/// None of these are fatal to the host process; the caller decides how to
/// present them and may prompt for corrected input.
#[derive(Debug, Error)]
pub enum CompareError {
    /// The delimited input could not be read into rows and columns
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The selected column does not exist in one or both tables
    #[error("column '{column}' not found in {missing}")]
    ColumnNotFound { column: String, missing: MissingIn },

    /// Any other fault during normalization, comparison, or export
    #[error("processing failed: {0}")]
    Processing(String),
}

impl CompareError {
    /// Build a parse error for the given source file
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CompareError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_in_display() {
        let err = CompareError::ColumnNotFound {
            column: "NOME".to_string(),
            missing: MissingIn::Second,
        };
        assert_eq!(err.to_string(), "column 'NOME' not found in the second list");
    }

    #[test]
    fn test_missing_in_from_resolution() {
        assert_eq!(MissingIn::from_resolution(false, false), None);
        assert_eq!(MissingIn::from_resolution(true, false), Some(MissingIn::First));
        assert_eq!(MissingIn::from_resolution(false, true), Some(MissingIn::Second));
        assert_eq!(MissingIn::from_resolution(true, true), Some(MissingIn::Both));
    }
}
