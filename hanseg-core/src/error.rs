//! Core error types

use thiserror::Error;

/// Errors raised while validating splitter options.
///
/// The splitting algorithm itself never fails on text content; only
/// configuration can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Options that cannot drive a split
    #[error("invalid split options: {0}")]
    InvalidOptions(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
