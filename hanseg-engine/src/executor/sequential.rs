//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{AnalyzerSlot, ExecutionMode, Executor},
};
use std::sync::{Mutex, PoisonError};

/// Runs texts on the calling thread with one shared analyzer
pub struct SequentialExecutor<'a> {
    slot: &'a Mutex<AnalyzerSlot>,
}

impl<'a> SequentialExecutor<'a> {
    /// Executor borrowing `slot` for the duration of a run
    pub fn new(slot: &'a Mutex<AnalyzerSlot>) -> Self {
        Self { slot }
    }
}

impl Executor for SequentialExecutor<'_> {
    fn run<T, F>(&self, texts: &[String], job: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(&mut AnalyzerSlot, &str) -> Result<T> + Sync + Send,
    {
        // A panic inside an analyzer leaves the slot usable.
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        texts.iter().map(|text| job(&mut *slot, text.as_str())).collect()
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
