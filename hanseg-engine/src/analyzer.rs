//! Morpheme analyzer seam
//!
//! Real analyzers (mecab, pecab, ...) live outside this crate and are plugged
//! in through [`AnalyzerProvider`]. Two analyzers ship here: the degenerate
//! [`CharacterAnalyzer`] and [`PretaggedAnalyzer`], which replays analyses
//! produced offline.

use crate::error::AnalyzerError;
use hanseg_core::{tags, Morpheme};
use std::collections::HashMap;

/// A part-of-speech tagger.
///
/// Analyzers are owned by one worker at a time and need not be `Sync`; native
/// taggers usually hold state that cannot be shared.
pub trait MorphemeAnalyzer: Send {
    /// Short backend name used in logs and errors
    fn name(&self) -> &str;

    /// Tag `text`. Whitespace may be dropped; [`preserve_spaces`] restores it.
    fn pos(&self, text: &str) -> Result<Vec<Morpheme>, AnalyzerError>;
}

/// Creates analyzer instances, one per worker.
pub trait AnalyzerProvider: Send + Sync {
    /// Build a fresh analyzer
    fn create(&self) -> Result<Box<dyn MorphemeAnalyzer>, AnalyzerError>;
}

impl<F> AnalyzerProvider for F
where
    F: Fn() -> Result<Box<dyn MorphemeAnalyzer>, AnalyzerError> + Send + Sync,
{
    fn create(&self) -> Result<Box<dyn MorphemeAnalyzer>, AnalyzerError> {
        self()
    }
}

/// Every character is its own token, tagged `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterAnalyzer;

impl MorphemeAnalyzer for CharacterAnalyzer {
    fn name(&self) -> &str {
        "character"
    }

    fn pos(&self, text: &str) -> Result<Vec<Morpheme>, AnalyzerError> {
        Ok(Morpheme::per_character(text))
    }
}

/// Replays stored analyses keyed by text; unknown texts are analyzed per
/// character.
#[derive(Debug, Clone, Default)]
pub struct PretaggedAnalyzer {
    analyses: HashMap<String, Vec<Morpheme>>,
}

impl PretaggedAnalyzer {
    /// Create an empty analyzer
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the analysis of `text`.
    pub fn with_analysis<I, M>(mut self, text: impl Into<String>, morphemes: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Morpheme>,
    {
        self.insert(text, morphemes);
        self
    }

    /// Store the analysis of `text`, replacing any earlier one.
    pub fn insert<I, M>(&mut self, text: impl Into<String>, morphemes: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<Morpheme>,
    {
        self.analyses
            .insert(text.into(), morphemes.into_iter().map(Into::into).collect());
    }

    /// Number of stored analyses
    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }
}

impl MorphemeAnalyzer for PretaggedAnalyzer {
    fn name(&self) -> &str {
        "pretagged"
    }

    fn pos(&self, text: &str) -> Result<Vec<Morpheme>, AnalyzerError> {
        Ok(self
            .analyses
            .get(text)
            .cloned()
            .unwrap_or_else(|| Morpheme::per_character(text)))
    }
}

/// Re-insert whitespace the analyzer dropped, one `SP` token per character.
///
/// Tokens that are themselves whitespace are discarded and regenerated. When a
/// token no longer matches the text (the analyzer rewrote it), the rest of the
/// text is emitted untagged so the result always covers `text`.
pub fn preserve_spaces(text: &str, morphemes: &[Morpheme]) -> Vec<Morpheme> {
    let mut output = Vec::with_capacity(morphemes.len() + 8);
    let mut tokens = morphemes
        .iter()
        .filter(|m| !m.surface.is_empty() && !m.surface.chars().all(char::is_whitespace));
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            output.push(Morpheme::new(c.to_string(), tags::SP));
            rest = &rest[c.len_utf8()..];
            continue;
        }

        match tokens.next() {
            Some(token) if rest.starts_with(token.surface.as_str()) => {
                rest = &rest[token.surface.len()..];
                output.push(token.clone());
            }
            token => {
                tracing::debug!(
                    token = token.map(|t| t.surface.as_str()),
                    remaining = rest.chars().count(),
                    "analyzer output diverged from text; tagging the rest per character"
                );
                output.extend(Morpheme::per_character(rest));
                break;
            }
        }
    }

    output
}
