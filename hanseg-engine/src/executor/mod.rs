//! Batch execution strategies

use crate::{analyzer::MorphemeAnalyzer, error::Result};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// A worker's analyzer, created on first use
pub type AnalyzerSlot = Option<Box<dyn MorphemeAnalyzer>>;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One text after another on the calling thread
    Sequential,
    /// Texts spread over a worker pool
    Parallel,
}

/// Trait for execution strategies
pub trait Executor {
    /// Run `job` over every text and collect results in input order.
    ///
    /// The first error aborts the run.
    fn run<T, F>(&self, texts: &[String], job: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&mut AnalyzerSlot, &str) -> Result<T> + Sync + Send;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Pick a mode for a batch of `batch_len` texts and `workers` threads.
pub fn auto_select(batch_len: usize, workers: usize) -> ExecutionMode {
    if batch_len < 2 || workers < 2 {
        return ExecutionMode::Sequential;
    }

    #[cfg(feature = "parallel")]
    return ExecutionMode::Parallel;

    #[cfg(not(feature = "parallel"))]
    ExecutionMode::Sequential
}
