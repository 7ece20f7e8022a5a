//! JSON output format

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::compare::ComparisonResult;

use super::OutputFormatter;

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable comparison document
#[derive(Serialize)]
struct JsonComparison<'a> {
    first_file: String,
    second_file: String,
    column: &'a str,
    first_row_count: usize,
    second_row_count: usize,
    only_in_first: Vec<&'a str>,
    only_in_second: Vec<&'a str>,
}

impl OutputFormatter for JsonOutput {
    fn render(
        &self,
        result: &ComparisonResult,
        first_path: &Path,
        second_path: &Path,
        column_label: &str,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let output = JsonComparison {
            first_file: first_path.display().to_string(),
            second_file: second_path.display().to_string(),
            column: column_label,
            first_row_count: result.first_row_count,
            second_row_count: result.second_row_count,
            only_in_first: result.sorted_only_in_first(),
            only_in_second: result.sorted_only_in_second(),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &output)?;
        } else {
            serde_json::to_writer(&mut *writer, &output)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
