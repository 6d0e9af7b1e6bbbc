//! Report writer.

use std::io::Write;
use std::path::Path;

use super::theme::Theme;
use crate::analysis::CoverageRow;
use crate::api::{FetchProgress, Session};
use crate::error::Result;

/// Writes the progress lines and the coverage table.
pub struct Output<W: Write> {
    writer: W,
    theme: Theme,
}

impl<W: Write> Output<W> {
    /// Create a writer with the given theme.
    pub fn new(writer: W, theme: Theme) -> Self {
        Self { writer, theme }
    }

    /// Consume the writer, returning the inner sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write an underlined section title.
    pub fn section(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "{}", self.theme.format_section(title))?;
        Ok(())
    }

    /// Write a plain line.
    pub fn message(&mut self, msg: &str) -> Result<()> {
        writeln!(self.writer, "{}", msg)?;
        Ok(())
    }

    /// Write the download estimate after a page.
    pub fn progress(&mut self, progress: &FetchProgress) -> Result<()> {
        let line = format!("\tRetrieved {}%", progress.percent());
        writeln!(self.writer, "{}", self.theme.dim.apply_to(line))?;
        Ok(())
    }

    /// Write the statistics header followed by one row per level.
    ///
    /// The row for the user's current level is prefixed with `*`.
    pub fn coverage_table(
        &mut self,
        path: &Path,
        session: &Session,
        rows: &[CoverageRow],
    ) -> Result<()> {
        self.section(&format!(
            "Statistics for file \"{}\" for user {} (Level {})",
            path.display(),
            session.username(),
            session.level()
        ))?;
        writeln!(self.writer, "\tLevel\t\tPercent")?;

        for row in rows {
            let line = format!("\t{}\t\t{}%", row.level, row.percent);
            if u32::from(row.level.get()) == session.level() {
                writeln!(self.writer, "{}", self.theme.current.apply_to(format!("*{}", line)))?;
            } else {
                writeln!(self.writer, "{}", line)?;
            }
        }

        self.writer.flush()?;
        Ok(())
    }
}
