//! Column selection: by header name or by fixed position

use super::table::Table;

/// The rule for picking which column of a table participates in comparison
///
/// Unifies the two modes of operation: header-aware inputs select by exact
/// header name, headerless inputs select by 0-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Match a header label exactly
    ByName(String),
    /// Use a fixed 0-based column position
    ByPosition(usize),
}

impl Default for ColumnSelector {
    fn default() -> Self {
        ColumnSelector::ByPosition(0)
    }
}

impl ColumnSelector {
    /// Resolve the selector to a column index for the given table
    ///
    /// Positional selection on a zero-row table resolves trivially: an empty
    /// table is a valid (empty) list, not an error.
    pub fn resolve(&self, table: &Table) -> Option<usize> {
        match self {
            ColumnSelector::ByName(name) => table.column_index(name),
            ColumnSelector::ByPosition(index) => {
                if *index < table.column_count() || table.is_empty() {
                    Some(*index)
                } else {
                    None
                }
            }
        }
    }

    /// Whether inputs for this selector are expected to carry a header row
    pub fn implies_headers(&self) -> bool {
        matches!(self, ColumnSelector::ByName(_))
    }

    /// Label used for display and for the export header row
    pub fn label(&self) -> String {
        match self {
            ColumnSelector::ByName(name) => name.clone(),
            ColumnSelector::ByPosition(index) => format!("column_{}", index),
        }
    }
}

impl std::fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnSelector::ByName(name) => write!(f, "{}", name),
            ColumnSelector::ByPosition(index) => write!(f, "position {}", index),
        }
    }
}
