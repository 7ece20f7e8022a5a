//! Output formatting for comparison results

mod export;
mod json;
mod terminal;

use std::io::{IsTerminal, Write};
use std::path::Path;

use anyhow::Result;
use termcolor::ColorChoice;

use crate::compare::ComparisonResult;
use crate::config::OutputFormat;

pub use export::export_results;
pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a comparison result to a writer
    fn render(
        &self,
        result: &ComparisonResult,
        first_path: &Path,
        second_path: &Path,
        column_label: &str,
        writer: &mut dyn Write,
    ) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Render a comparison result to stdout
///
/// Here the destination is known, so color is resolved against stdout's
/// tty-ness instead of left on `Auto`.
pub fn render_to_stdout(
    result: &ComparisonResult,
    first_path: &Path,
    second_path: &Path,
    column_label: &str,
    format: OutputFormat,
) -> Result<()> {
    let formatter: Box<dyn OutputFormatter> = match format {
        OutputFormat::Terminal => {
            let choice = if std::io::stdout().is_terminal() {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            };
            Box::new(TerminalOutput::with_color_choice(choice))
        }
        other => OutputFactory::create(other),
    };
    let mut stdout = std::io::stdout();
    formatter.render(result, first_path, second_path, column_label, &mut stdout)
}
