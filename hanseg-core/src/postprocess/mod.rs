//! Clean-up passes over segmented sentences
//!
//! Every pass takes the sentence list by value and returns it with empty
//! sentences removed. Passes only move syllables between neighbouring
//! sentences, so the flattened order of indices never changes.

mod brackets;
mod merge;
mod relocate;

use crate::{chain::SyllableChain, tables::is_space};

type Pass = fn(&SyllableChain, Vec<Vec<usize>>) -> Vec<Vec<usize>>;

/// Passes in application order.
const PASSES: &[(&str, Pass)] = &[
    ("merge_broken_brackets", brackets::merge_broken_brackets),
    ("relocate_footnote", relocate::relocate_footnote),
    ("relocate_dagger", relocate::relocate_dagger),
    ("relocate_parenthetical", relocate::relocate_parenthetical),
    ("merge_unexpected_split", merge::merge_unexpected_split),
    ("merge_symbol_only", merge::merge_symbol_only),
];

/// Applies the clean-up passes and renders the result.
#[derive(Debug, Clone, Copy)]
pub struct Postprocessor<'c> {
    chain: &'c SyllableChain,
}

impl<'c> Postprocessor<'c> {
    /// Postprocessor over `chain`.
    pub fn new(chain: &'c SyllableChain) -> Self {
        Self { chain }
    }

    /// Run every pass in order.
    pub fn run(&self, mut sentences: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
        for (name, pass) in PASSES {
            let before = sentences.len();
            sentences = pass(self.chain, sentences);
            if sentences.len() != before {
                tracing::trace!(pass = name, before, after = sentences.len(), "sentences merged");
            }
        }
        sentences
    }

    /// Turn index lists into strings, trimming whitespace when `strip` is set.
    /// Sentences that end up empty are dropped.
    pub fn render(&self, sentences: &[Vec<usize>], strip: bool) -> Vec<String> {
        sentences
            .iter()
            .map(|s| self.chain.render(s))
            .map(|s| if strip { s.trim_matches(is_space).to_string() } else { s })
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn remove_empty(sentences: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    sentences.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Nearest non-empty sentence before `idx`, or the first one.
fn previous_target(sentences: &[Vec<usize>], idx: usize) -> usize {
    let mut target = idx.saturating_sub(1);
    while target > 0 && sentences[target].is_empty() {
        target -= 1;
    }
    target
}

/// Move the first `len` syllables of sentence `idx` onto the end of the
/// previous sentence.
fn move_prefix_to_previous(sentences: &mut [Vec<usize>], idx: usize, len: usize) {
    if idx == 0 {
        return;
    }
    let target = previous_target(sentences, idx);
    let moved: Vec<usize> = sentences[idx].drain(..len).collect();
    sentences[target].extend(moved);
}

/// Position of the first syllable in `sentence` that is not a space.
fn first_non_space(chain: &SyllableChain, sentence: &[usize]) -> Option<usize> {
    sentence
        .iter()
        .position(|&i| !chain.cursor(i).has_tag(&[crate::tags::SP], crate::tags::NONE))
}

/// Last character of the sentence before `idx`.
fn previous_last_char(chain: &SyllableChain, sentences: &[Vec<usize>], idx: usize) -> Option<char> {
    if idx == 0 {
        return None;
    }
    let target = previous_target(sentences, idx);
    sentences[target]
        .last()
        .and_then(|&i| chain.cursor(i).text())
}
