//! Chunk command implementation

use super::CommonArgs;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Maximum chunk length in characters
    #[arg(short, long, value_name = "N", default_value_t = 128)]
    pub max_length: usize,

    /// Start each chunk with the back half of the previous one's sentences
    #[arg(long)]
    pub overlap: bool,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {self:?}");

        let prepared = self.common.prepare()?;
        let documents = prepared
            .splitter
            .split_into_chunks(prepared.texts.clone(), self.max_length, self.overlap)
            .map_err(CliError::from)?
            .into_vec()
            .into_iter()
            .map(|chunks| chunks.into_iter().map(|c| (c.text, c.offset)).collect())
            .collect();

        self.common.write_segments(&prepared, documents, "chunks")
    }
}
