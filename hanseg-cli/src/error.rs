//! Error handling for the CLI application

use std::fmt;

/// CLI-specific failures that need a clear message of their own
#[derive(Debug)]
pub enum CliError {
    /// An explicitly named input file does not exist
    FileNotFound(String),
    /// A glob pattern that cannot be parsed
    InvalidPattern(String),
    /// A configuration file that does not load or validate
    ConfigError(String),
    /// Splitter construction or splitting failed
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<hanseg_engine::EngineError> for CliError {
    fn from(err: hanseg_engine::EngineError) -> Self {
        CliError::ProcessingError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CliError::FileNotFound("글.txt".to_string()).to_string(),
            "File not found: 글.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[a".to_string()).to_string(),
            "Invalid file pattern: [a"
        );
        assert!(CliError::ConfigError("bad".to_string())
            .to_string()
            .starts_with("Configuration error:"));
    }

    #[test]
    fn test_engine_errors_become_processing_errors() {
        let engine_err = "kkma".parse::<hanseg_engine::Backend>().unwrap_err();
        let err = CliError::from(engine_err);
        assert!(matches!(err, CliError::ProcessingError(ref msg) if msg.contains("kkma")));
    }

    #[test]
    fn test_wraps_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::ConfigError("x".to_string()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
