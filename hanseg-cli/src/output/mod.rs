//! Output formatting module

use anyhow::Result;
use std::{fmt, io::Write, str::FromStr};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Mark the start of a new input document
    fn start_source(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single sentence or chunk
    fn format_segment(&mut self, segment: &str, offset: usize) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one segment per line
    Text,
    /// JSON array of segments with offsets
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Every format, in display order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one segment per line",
            OutputFormat::Json => "array of {source, text, offset, length} objects",
            OutputFormat::Markdown => "numbered list with a per-document heading",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == lowered)
            .ok_or_else(|| format!("unknown output format '{s}'"))
    }
}

/// Build the formatter for `format`.
///
/// `unit` names what is being counted ("sentences", "chunks").
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
    unit: &'static str,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer).unit(unit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Markdown.to_string(), "markdown");
    }
}
