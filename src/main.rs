//! listdiff - Set-difference reconciliation for columnar lists

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use listdiff::compare::compare;
use listdiff::config::{Config, Encoding, OutputFormat};
use listdiff::model::ColumnSelector;
use listdiff::output::{export_results, render_to_stdout};
use listdiff::parser::CsvParser;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliEncoding {
    Auto,
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    #[value(name = "latin-1", alias = "latin1")]
    Latin1,
}

impl From<CliEncoding> for Encoding {
    fn from(e: CliEncoding) -> Self {
        match e {
            CliEncoding::Auto => Encoding::Auto,
            CliEncoding::Utf8 => Encoding::Utf8,
            CliEncoding::Latin1 => Encoding::Latin1,
        }
    }
}

/// Compare one column of two CSV lists and report the values exclusive to each
#[derive(Parser, Debug)]
#[command(name = "listdiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First list to compare (the base)
    first_file: PathBuf,

    /// Second list to compare
    second_file: PathBuf,

    /// Name of the header column holding the values to compare
    #[arg(short, long, default_value = "NOME")]
    column: String,

    /// Treat inputs as headerless and select the column by position
    #[arg(long)]
    no_header: bool,

    /// Column position to compare in headerless mode (0-based)
    #[arg(short, long, default_value_t = 0, requires = "no_header")]
    position: usize,

    /// Text encoding of the input files
    #[arg(short, long, value_enum, default_value = "auto")]
    encoding: CliEncoding,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Directory to write the two exclusive-value CSV exports into
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    match run() {
        Ok(has_differences) => {
            if has_differences {
                ExitCode::from(1) // Differences found
            } else {
                ExitCode::SUCCESS // No differences
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<bool> {
    let cli = Cli::parse();

    let selector = if cli.no_header {
        ColumnSelector::ByPosition(cli.position)
    } else {
        ColumnSelector::ByName(cli.column)
    };

    let config = Config {
        first_file: cli.first_file,
        second_file: cli.second_file,
        selector,
        encoding: cli.encoding.into(),
        output_format: cli.format.into(),
        export_dir: cli.export_dir,
    };

    // Parse files
    let parser = CsvParser::new(config.selector.implies_headers(), config.encoding);

    let first_table = parser
        .parse(&config.first_file)
        .with_context(|| format!("Failed to load first list: {}", config.first_file.display()))?;

    let second_table = parser
        .parse(&config.second_file)
        .with_context(|| format!("Failed to load second list: {}", config.second_file.display()))?;

    // Compute the exclusive sets
    let result = compare(&first_table, &second_table, &config.selector)?;

    let label = config.selector.label();

    if let Some(ref dir) = config.export_dir {
        export_results(&result, &label, dir)?;
    }

    render_to_stdout(
        &result,
        &config.first_file,
        &config.second_file,
        &label,
        config.output_format,
    )?;

    Ok(result.has_differences())
}
