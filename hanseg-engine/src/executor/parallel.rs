//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{AnalyzerSlot, ExecutionMode, Executor},
};
use rayon::prelude::*;

/// Spreads texts over a dedicated thread pool.
///
/// Every worker lazily builds its own analyzer; analyzers never cross threads
/// while in use.
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: rayon::ThreadPool,
}

impl ParallelExecutor {
    /// Create a pool with `workers` threads
    pub fn new(workers: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("hanseg-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Number of threads in the pool
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for ParallelExecutor {
    fn run<T, F>(&self, texts: &[String], job: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&mut AnalyzerSlot, &str) -> Result<T> + Sync + Send,
    {
        self.pool.install(|| {
            texts
                .par_iter()
                .map_init(|| None, |slot: &mut AnalyzerSlot, text| job(slot, text.as_str()))
                .collect()
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
