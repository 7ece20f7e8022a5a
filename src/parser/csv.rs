//! CSV file parser

use std::fs;
use std::path::Path;

use crate::config::Encoding;
use crate::error::CompareError;
use crate::model::{Column, Table};

use super::encoding::decode;

/// Parser for comma-separated list files
///
/// Header mode takes column labels from the first row; headerless mode
/// synthesizes positional labels and treats every row as data.
pub struct CsvParser {
    has_headers: bool,
    encoding: Encoding,
}

impl CsvParser {
    pub fn new(has_headers: bool, encoding: Encoding) -> Self {
        Self {
            has_headers,
            encoding,
        }
    }

    /// Parse a file and return a Table
    pub fn parse(&self, path: &Path) -> Result<Table, CompareError> {
        let bytes = fs::read(path)
            .map_err(|e| CompareError::parse(path, format!("failed to open file: {}", e)))?;
        let content = decode(&bytes, self.encoding, path)?;
        self.parse_str(&content, path)
    }

    /// Parse already-decoded CSV text
    pub fn parse_str(&self, content: &str, path: &Path) -> Result<Table, CompareError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(content.as_bytes());

        if self.has_headers {
            self.read_with_headers(&mut reader, path)
        } else {
            self.read_positional(&mut reader, path)
        }
    }

    fn read_with_headers(
        &self,
        reader: &mut csv::Reader<&[u8]>,
        path: &Path,
    ) -> Result<Table, CompareError> {
        let headers = reader
            .headers()
            .map_err(|e| CompareError::parse(path, format!("failed to read header row: {}", e)))?
            .clone();

        // Header labels are kept verbatim; selection matches them exactly
        let columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| Column::new(name, i))
            .collect();

        let mut table = Table::new(columns);

        for (line_num, result) in reader.records().enumerate() {
            // +2 for 1-indexing and the header row
            let record = result.map_err(|e| {
                CompareError::parse(path, format!("malformed row {}: {}", line_num + 2, e))
            })?;
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            table.add_row(cells, line_num + 2);
        }

        Ok(table)
    }

    fn read_positional(
        &self,
        reader: &mut csv::Reader<&[u8]>,
        path: &Path,
    ) -> Result<Table, CompareError> {
        let mut records: Vec<Vec<String>> = Vec::new();
        let mut width = 0;

        for (line_num, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                CompareError::parse(path, format!("malformed row {}: {}", line_num + 1, e))
            })?;
            let cells: Vec<String> = record.iter().map(str::to_string).collect();
            width = width.max(cells.len());
            records.push(cells);
        }

        // Width comes from the widest record; labels are positional
        let columns: Vec<Column> = (0..width).map(Column::positional).collect();
        let mut table = Table::new(columns);
        for (i, cells) in records.into_iter().enumerate() {
            table.add_row(cells, i + 1);
        }

        Ok(table)
    }
}
