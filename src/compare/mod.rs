//! The comparison core: normalization and set difference
//!
//! The whole functional surface of the tool lives here. Both columns are
//! normalized into sets and the two exclusive sets (values present on one
//! side, absent from the other) are returned together with the raw row counts.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::error::{CompareError, MissingIn};
use crate::model::{ColumnSelector, Table};

/// Insertion-ordered set of normalized values
pub type ValueSet = IndexSet<String, FxBuildHasher>;

/// Canonical comparison form of a raw cell value: trimmed and uppercased
///
/// Deterministic and total; an empty or missing cell maps to the empty string
/// and participates in set membership like any other value.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Result of comparing one column of two tables
///
/// The sets carry no ordering guarantee; use the `sorted_*` accessors for
/// display or export.
#[derive(Debug)]
pub struct ComparisonResult {
    /// Normalized values present in the first table but not the second
    pub only_in_first: ValueSet,
    /// Normalized values present in the second table but not the first
    pub only_in_second: ValueSet,
    /// Raw row count of the first table (duplicates included)
    pub first_row_count: usize,
    /// Raw row count of the second table (duplicates included)
    pub second_row_count: usize,
}

impl ComparisonResult {
    /// Check whether either side has exclusive values
    pub fn has_differences(&self) -> bool {
        !self.only_in_first.is_empty() || !self.only_in_second.is_empty()
    }

    /// Values exclusive to the first table, sorted lexicographically
    pub fn sorted_only_in_first(&self) -> Vec<&str> {
        sorted(&self.only_in_first)
    }

    /// Values exclusive to the second table, sorted lexicographically
    pub fn sorted_only_in_second(&self) -> Vec<&str> {
        sorted(&self.only_in_second)
    }
}

fn sorted(set: &ValueSet) -> Vec<&str> {
    let mut values: Vec<&str> = set.iter().map(String::as_str).collect();
    values.sort_unstable();
    values
}

/// Compare one column of two tables and return the exclusive sets
///
/// Pure and synchronous: no I/O, no side effects, deterministic for identical
/// inputs (modulo set iteration order). Empty tables are valid and yield empty
/// sets rather than an error.
pub fn compare(
    first: &Table,
    second: &Table,
    selector: &ColumnSelector,
) -> Result<ComparisonResult, CompareError> {
    let first_index = selector.resolve(first);
    let second_index = selector.resolve(second);

    if let Some(missing) = MissingIn::from_resolution(first_index.is_none(), second_index.is_none())
    {
        return Err(CompareError::ColumnNotFound {
            column: selector.label(),
            missing,
        });
    }

    // Both checked above
    let set1 = normalized_column(first, first_index.unwrap_or(0));
    let set2 = normalized_column(second, second_index.unwrap_or(0));

    let only_in_first: ValueSet = set1.difference(&set2).cloned().collect();
    let only_in_second: ValueSet = set2.difference(&set1).cloned().collect();

    Ok(ComparisonResult {
        only_in_first,
        only_in_second,
        first_row_count: first.row_count(),
        second_row_count: second.row_count(),
    })
}

/// Extract and normalize one column into a set
///
/// Rows shorter than the selected index contribute an empty cell.
fn normalized_column(table: &Table, index: usize) -> ValueSet {
    table
        .rows
        .iter()
        .map(|row| normalize(row.get(index).unwrap_or("")))
        .collect()
}
