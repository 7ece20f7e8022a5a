//! Configuration handling for listdiff

use std::path::PathBuf;

use crate::model::ColumnSelector;

/// Output format for comparison results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Text encoding of the input files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Try strict UTF-8 first, fall back to Latin-1
    #[default]
    Auto,
    Utf8,
    Latin1,
}

impl std::str::FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Encoding::Auto),
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Encoding::Latin1),
            _ => Err(format!("Unknown encoding: {}", s)),
        }
    }
}

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the first list (the base)
    pub first_file: PathBuf,
    /// Path to the second list
    pub second_file: PathBuf,
    /// Which column of each table participates in the comparison
    pub selector: ColumnSelector,
    /// Text encoding of the inputs
    pub encoding: Encoding,
    /// Output format
    pub output_format: OutputFormat,
    /// Directory to write the two exclusive-value CSV exports into
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_file: PathBuf::new(),
            second_file: PathBuf::new(),
            selector: ColumnSelector::default(),
            encoding: Encoding::default(),
            output_format: OutputFormat::default(),
            export_dir: None,
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(first_file: PathBuf, second_file: PathBuf) -> Self {
        Self {
            first_file,
            second_file,
            ..Default::default()
        }
    }

    /// Set the column selector
    pub fn with_selector(mut self, selector: ColumnSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Set the input encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the export directory for the exclusive-value CSVs
    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = Some(dir);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("auto".parse::<Encoding>(), Ok(Encoding::Auto));
        assert_eq!("UTF-8".parse::<Encoding>(), Ok(Encoding::Utf8));
        assert_eq!("latin1".parse::<Encoding>(), Ok(Encoding::Latin1));
        assert_eq!("iso-8859-1".parse::<Encoding>(), Ok(Encoding::Latin1));
        assert!("koi8-r".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("terminal".parse::<OutputFormat>(), Ok(OutputFormat::Terminal));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
