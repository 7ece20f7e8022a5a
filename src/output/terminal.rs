//! Terminal output

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, WriteColor};

use crate::compare::ComparisonResult;

use super::OutputFormatter;

/// Terminal output with colored section headers
pub struct TerminalOutput {
    color_choice: ColorChoice,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self {
            color_choice: ColorChoice::Auto,
        }
    }

    pub fn with_color_choice(color_choice: ColorChoice) -> Self {
        Self { color_choice }
    }

    /// `render` targets an arbitrary writer, so `Auto` stays plain; callers
    /// that know the destination resolve it to `Always`/`Never` up front
    fn use_color(&self) -> bool {
        matches!(
            self.color_choice,
            ColorChoice::Always | ColorChoice::AlwaysAnsi
        )
    }

    fn write_header(
        &self,
        buf: &mut Buffer,
        first_path: &Path,
        second_path: &Path,
        column_label: &str,
    ) -> Result<()> {
        let rule = "━".repeat(64);
        writeln!(buf, "{}", rule)?;
        writeln!(
            buf,
            " listdiff: {} ⇄ {} (column {})",
            first_path.display(),
            second_path.display(),
            column_label
        )?;
        writeln!(buf, "{}", rule)?;
        writeln!(buf)?;
        Ok(())
    }

    fn write_counts(&self, buf: &mut Buffer, result: &ComparisonResult) -> Result<()> {
        writeln!(
            buf,
            "Rows read: {} in the first list, {} in the second",
            result.first_row_count, result.second_row_count
        )?;
        writeln!(buf)?;
        Ok(())
    }

    fn write_section(
        &self,
        buf: &mut Buffer,
        own_path: &Path,
        other_path: &Path,
        values: &[&str],
        color: Color,
    ) -> Result<()> {
        if values.is_empty() {
            writeln!(
                buf,
                "All values in {} are present in {}.",
                own_path.display(),
                other_path.display()
            )?;
            writeln!(buf)?;
            return Ok(());
        }

        buf.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        writeln!(buf, "Only in {} ({}):", own_path.display(), values.len())?;
        buf.reset()?;
        for value in values {
            writeln!(buf, "  {}", value)?;
        }
        writeln!(buf)?;
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(
        &self,
        result: &ComparisonResult,
        first_path: &Path,
        second_path: &Path,
        column_label: &str,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let mut buf = if self.use_color() {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };

        self.write_header(&mut buf, first_path, second_path, column_label)?;
        self.write_counts(&mut buf, result)?;

        if !result.has_differences() {
            writeln!(buf, "No differences found.")?;
        } else {
            self.write_section(
                &mut buf,
                first_path,
                second_path,
                &result.sorted_only_in_first(),
                Color::Red,
            )?;
            self.write_section(
                &mut buf,
                second_path,
                first_path,
                &result.sorted_only_in_second(),
                Color::Green,
            )?;
        }

        writer.write_all(buf.as_slice())?;
        Ok(())
    }
}
