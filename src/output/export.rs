//! CSV export of the exclusive-value sets

use std::fs;
use std::path::{Path, PathBuf};

use crate::compare::ComparisonResult;
use crate::error::CompareError;

/// Write both exclusive sets as one-column UTF-8 CSV files into `dir`
///
/// Each file carries the column label as header and the normalized values
/// sorted lexicographically. Returns the two paths written.
pub fn export_results(
    result: &ComparisonResult,
    column_label: &str,
    dir: &Path,
) -> Result<(PathBuf, PathBuf), CompareError> {
    fs::create_dir_all(dir)
        .map_err(|e| CompareError::Processing(format!("failed to create {}: {}", dir.display(), e)))?;

    let first_path = dir.join("only_in_first.csv");
    let second_path = dir.join("only_in_second.csv");

    write_set(&first_path, column_label, &result.sorted_only_in_first())?;
    write_set(&second_path, column_label, &result.sorted_only_in_second())?;

    Ok((first_path, second_path))
}

fn write_set(path: &Path, column_label: &str, values: &[&str]) -> Result<(), CompareError> {
    let map_err =
        |e: csv::Error| CompareError::Processing(format!("failed to write {}: {}", path.display(), e));

    let mut writer = csv::Writer::from_path(path).map_err(map_err)?;
    writer.write_record([column_label]).map_err(map_err)?;
    for value in values {
        writer.write_record([value]).map_err(map_err)?;
    }
    writer
        .flush()
        .map_err(|e| CompareError::Processing(format!("failed to write {}: {}", path.display(), e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ValueSet;

    #[test]
    fn test_export_writes_sorted_single_column_files() {
        let result = ComparisonResult {
            only_in_first: ["CARLOS", "BOB"]
                .iter()
                .map(|v| v.to_string())
                .collect::<ValueSet>(),
            only_in_second: ValueSet::default(),
            first_row_count: 3,
            second_row_count: 2,
        };

        let dir = tempfile::tempdir().unwrap();
        let (first_path, second_path) = export_results(&result, "NOME", dir.path()).unwrap();

        let first = fs::read_to_string(&first_path).unwrap();
        assert_eq!(first, "NOME\nBOB\nCARLOS\n");

        // Empty set still yields a header-only file
        let second = fs::read_to_string(&second_path).unwrap();
        assert_eq!(second, "NOME\n");
    }
}
