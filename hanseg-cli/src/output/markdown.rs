//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs segments as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    unit: &'static str,
    count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            unit: "sentences",
            count: 0,
        }
    }

    /// Name of the counted unit in the footer
    pub fn unit(mut self, unit: &'static str) -> Self {
        self.unit = unit;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn start_source(&mut self, name: &str) -> Result<()> {
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_segment(&mut self, segment: &str, _offset: usize) -> Result<()> {
        self.count += 1;
        writeln!(
            self.writer,
            "{}. {}",
            self.count,
            segment.trim().replace('\n', " ")
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total {}: {}*", self.unit, self.count)?;
        self.writer.flush()?;
        Ok(())
    }
}
