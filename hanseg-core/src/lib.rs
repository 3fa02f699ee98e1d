//! Morpheme-driven Korean sentence boundary detection
//!
//! The crate turns a text and its morpheme analysis into sentences. Korean
//! has no reliable terminator: the same ending can close a sentence, join two
//! clauses or nominalize a verb, so boundaries are decided per syllable from
//! part-of-speech tags and a table of lexical exceptions.
//!
//! # Pipeline
//!
//! 1. [`SyllableChain::from_morphemes`] spreads morpheme tags over characters
//!    and repairs known tagger mistakes.
//! 2. [`Segmenter`] scans the chain with the [`classifier`] rules while an
//!    [`embracing::EmbracingProcessor`] tracks open quotes, re-segmenting
//!    around unbalanced ones.
//! 3. [`Postprocessor`] merges and relocates fragments, then renders strings.
//!
//! [`FastSplitter`] replaces steps 1–2 with a character transition table for
//! text without an analysis. [`BackupMap`] masks URLs, faces and similar
//! strings before analysis and restores them afterwards.
//!
//! # Example
//!
//! ```rust
//! use hanseg_core::{split_analyzed, Morpheme, SplitOptions};
//!
//! let text = "밥을 먹었다. 그리고 잤다.";
//! let morphemes: Vec<Morpheme> = [
//!     ("밥", "NNG"), ("을", "JKO"), (" ", "SP"), ("먹", "VV"), ("었", "EP"),
//!     ("다", "EF"), (".", "SF"), (" ", "SP"), ("그리고", "MAJ"), (" ", "SP"),
//!     ("잤", "VV+EP"), ("다", "EF"), (".", "SF"),
//! ]
//! .into_iter()
//! .map(Morpheme::from)
//! .collect();
//!
//! let sentences = split_analyzed(text, &morphemes, &SplitOptions::default()).unwrap();
//! assert_eq!(sentences, vec!["밥을 먹었다.", "그리고 잤다."]);
//! ```

#![warn(missing_docs)]

pub mod backup;
pub mod chain;
pub mod classifier;
pub mod embracing;
pub mod error;
pub mod fast;
pub mod morpheme;
pub mod options;
pub mod postprocess;
pub mod preprocess;
pub mod splitter;
pub mod tables;
pub mod tags;

pub use backup::BackupMap;
pub use chain::{Cursor, Link, Syllable, SyllableChain};
pub use classifier::{BoundaryClassifier, BoundaryEnd, BoundaryRule, Verdict};
pub use error::{CoreError, Result};
pub use fast::FastSplitter;
pub use morpheme::Morpheme;
pub use options::{RuleToggles, SplitOptions};
pub use postprocess::Postprocessor;
pub use splitter::{Segmentation, Segmenter};

/// Split `text` using its morpheme analysis.
///
/// `text` should already be masked; see [`BackupMap`].
pub fn split_analyzed(text: &str, morphemes: &[Morpheme], options: &SplitOptions) -> Result<Vec<String>> {
    options.validate()?;
    let chain = SyllableChain::from_morphemes(text, morphemes);
    let segmentation = Segmenter::new(options).segment(&chain);
    Ok(finish(&chain, segmentation, options.strip))
}

/// Split `text` with the character transition table, no analysis needed.
pub fn split_fast(text: &str, options: &SplitOptions) -> Result<Vec<String>> {
    options.validate()?;
    let chain = SyllableChain::from_morphemes(text, &Morpheme::per_character(text));
    let segmentation = FastSplitter::new().segment(&chain);
    Ok(finish(&chain, segmentation, options.strip))
}

fn finish(chain: &SyllableChain, segmentation: Segmentation, strip: bool) -> Vec<String> {
    let postprocessor = Postprocessor::new(chain);
    let sentences = postprocessor.run(segmentation.sentences);
    postprocessor.render(&sentences, strip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fast_is_lossless_without_strip() {
        let options = SplitOptions {
            strip: false,
            ..SplitOptions::default()
        };
        let text = "정말 좋았다 다음에 또 가요 ㅋㅋ";
        assert_eq!(split_fast(text, &options).unwrap().concat(), text);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = SplitOptions {
            realign_length_limit: 0,
            ..SplitOptions::default()
        };
        assert!(matches!(
            split_fast("가", &options),
            Err(CoreError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_empty_text() {
        assert!(split_analyzed("", &[], &SplitOptions::default()).unwrap().is_empty());
    }
}
