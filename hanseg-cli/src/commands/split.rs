//! Split command implementation

use super::CommonArgs;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use hanseg_engine::chunker::locate_sentences;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging();
        log::debug!("Arguments: {self:?}");

        let prepared = self.common.prepare()?;
        let splitter = &prepared.splitter;
        let results = splitter
            .split_sentences(prepared.texts.clone())
            .map_err(CliError::from)?
            .into_vec();

        // Offsets are reported against the text the splitter actually saw.
        let documents = prepared
            .texts
            .iter()
            .zip(results)
            .map(|(text, sentences)| {
                let normalized = splitter.normalize(text);
                let spans = locate_sentences(&normalized, &sentences);
                sentences
                    .into_iter()
                    .zip(spans)
                    .map(|(sentence, span)| (sentence, span.start))
                    .collect()
            })
            .collect();

        self.common.write_segments(&prepared, documents, "sentences")
    }
}
