//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Where one input document comes from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input, requested with `-`
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Name shown in progress and output
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Resolve patterns to sources.
///
/// Files matched by each pattern are sorted; pattern order and the first
/// occurrence of every file are kept.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            if !sources.contains(&InputSource::Stdin) {
                sources.push(InputSource::Stdin);
            }
            continue;
        }

        let is_literal = !pattern.contains(['*', '?', '[']);
        if is_literal && !Path::new(pattern).exists() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;
        let mut matched = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                matched.push(path);
            }
        }
        matched.sort();

        for path in matched {
            let source = InputSource::File(path);
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
    }

    if sources.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_glob_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.md"] {
            fs::write(dir.path().join(name), "가.").unwrap();
        }
        let pattern = dir.path().join("*.txt").display().to_string();
        let exact = dir.path().join("a.txt").display().to_string();

        let sources = resolve_patterns(&[pattern, exact]).unwrap();
        assert_eq!(
            sources,
            vec![
                InputSource::File(dir.path().join("a.txt")),
                InputSource::File(dir.path().join("b.txt")),
            ]
        );
    }

    #[test]
    fn test_stdin_marker() {
        let sources = resolve_patterns(&["-".to_string()]).unwrap();
        assert_eq!(sources, vec![InputSource::Stdin]);
        assert_eq!(sources[0].display_name(), "<stdin>");
    }

    #[test]
    fn test_no_match() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_missing_literal_path() {
        let err = resolve_patterns(&["/nonexistent/글.txt".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "File not found: /nonexistent/글.txt");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
