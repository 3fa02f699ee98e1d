//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects segments and writes one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    source: Option<String>,
    segments: Vec<SegmentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentData {
    /// Input document the segment came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// The segment text
    pub text: String,
    /// Character offset in the normalized document
    pub offset: usize,
    /// Length in characters
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            source: None,
            segments: Vec::new(),
        }
    }

    /// Toggle pretty printing
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn start_source(&mut self, name: &str) -> Result<()> {
        self.source = Some(name.to_string());
        Ok(())
    }

    fn format_segment(&mut self, segment: &str, offset: usize) -> Result<()> {
        self.segments.push(SegmentData {
            source: self.source.clone(),
            text: segment.to_string(),
            offset,
            length: segment.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.segments)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.segments)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_segments_with_offsets() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer).pretty(false);
            formatter.start_source("a.txt").unwrap();
            formatter.format_segment("가나.", 0).unwrap();
            formatter.format_segment("다라.", 4).unwrap();
            formatter.finish().unwrap();
        }
        let parsed: Vec<SegmentData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].offset, 4);
        assert_eq!(parsed[1].length, 3);
        assert_eq!(parsed[0].source.as_deref(), Some("a.txt"));
    }
}
