//! Engine error types
//!
//! Validation errors surface at the public boundary before any text is
//! processed. Once a text reaches the splitting algorithm nothing in its
//! content can fail; only an analyzer backend can.

use hanseg_core::CoreError;
use thiserror::Error;

/// Errors raised by a morpheme analyzer backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The backend could not be constructed
    #[error("failed to initialize analyzer '{backend}': {reason}")]
    Initialization {
        /// Backend name
        backend: String,
        /// Why construction failed
        reason: String,
    },

    /// The backend rejected a text
    #[error("analyzer '{analyzer}' failed: {reason}")]
    Analysis {
        /// Analyzer name
        analyzer: String,
        /// Why analysis failed
        reason: String,
    },
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A batch element or the whole input had an unsupported type
    #[error("unsupported input type at index {index}: expected a string, found {found}")]
    InvalidInputType {
        /// Offending position; 0 for a non-batch input
        index: usize,
        /// Description of what was found instead
        found: String,
    },

    /// An explicitly requested backend is not registered
    #[error("backend '{backend}' is not available\n{remedy}")]
    BackendUnavailable {
        /// The requested backend
        backend: String,
        /// How to make it available on this platform
        remedy: String,
    },

    /// A parameter outside its accepted range or vocabulary
    #[error("'{value}' is not a supported value for `{parameter}`; expected {expected}")]
    InvalidParameterValue {
        /// Parameter name
        parameter: String,
        /// The rejected value
        value: String,
        /// What would have been accepted
        expected: String,
    },

    /// Analyzer backend failure
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    /// Core option validation error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Worker pool construction failed
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl EngineError {
    pub(crate) fn invalid_parameter(
        parameter: &str,
        value: impl ToString,
        expected: &str,
    ) -> Self {
        EngineError::InvalidParameterValue {
            parameter: parameter.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_parameter() {
        let err = EngineError::invalid_parameter("num_workers", 0, "a positive integer");
        assert_eq!(
            err.to_string(),
            "'0' is not a supported value for `num_workers`; expected a positive integer"
        );

        let err = EngineError::InvalidInputType {
            index: 2,
            found: "number".to_string(),
        };
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn test_core_error_conversion() {
        let err: EngineError = CoreError::InvalidOptions("bad".to_string()).into();
        assert!(matches!(err, EngineError::Core(_)));
    }
}
