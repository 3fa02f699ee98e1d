//! Input reading utilities

use super::InputSource;
use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

/// Reads input documents as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(content)
    }

    /// Read all of standard input
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    }

    /// Read any source
    pub fn read_source(source: &InputSource) -> Result<String> {
        match source {
            InputSource::Stdin => Self::read_stdin(),
            InputSource::File(path) => Self::read_text(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("글.txt");
        fs::write(&path, "안녕하세요.\n반갑습니다.").unwrap();

        let source = InputSource::File(path);
        assert_eq!(
            FileReader::read_source(&source).unwrap(),
            "안녕하세요.\n반갑습니다."
        );
    }

    #[test]
    fn test_read_text_missing_file() {
        let err = FileReader::read_text(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.dat");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(FileReader::read_text(&path).is_err());
    }
}
