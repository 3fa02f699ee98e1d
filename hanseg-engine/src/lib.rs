//! Orchestration for Korean sentence splitting
//!
//! This crate wraps the `hanseg-core` algorithm with everything a caller
//! needs around it: analyzer selection, NFC normalization, masking of URLs
//! and similar strings, memoization, single-or-batch input handling and
//! parallel execution over a worker pool.
//!
//! ```rust
//! use hanseg_engine::{Backend, Output, SentenceSplitter};
//!
//! let splitter = SentenceSplitter::builder()
//!     .backend(Backend::Punct)
//!     .build()
//!     .unwrap();
//!
//! let output = splitter.split_sentences(vec!["첫 문장. 둘째 문장.", "셋째."]).unwrap();
//! assert_eq!(
//!     output,
//!     Output::Batch(vec![
//!         vec!["첫 문장.".to_string(), "둘째 문장.".to_string()],
//!         vec!["셋째.".to_string()],
//!     ])
//! );
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod chunker;
pub mod config;
pub mod error;
pub mod executor;
pub mod factory;
pub mod input;
pub mod processor;

// Re-export key types
pub use analyzer::{
    preserve_spaces, AnalyzerProvider, CharacterAnalyzer, MorphemeAnalyzer, PretaggedAnalyzer,
};
pub use chunker::{Chunk, SentenceSpan};
pub use config::SplitterConfig;
pub use error::{AnalyzerError, EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use factory::{AnalyzerFactory, Backend, FactoryEvent};
pub use input::{Input, Output};
pub use processor::{SentenceSplitter, SentenceSplitterBuilder};

// Re-export from core for convenience
pub use hanseg_core::{Morpheme, RuleToggles};
