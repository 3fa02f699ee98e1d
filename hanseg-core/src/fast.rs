//! Table-driven segmentation without morphology
//!
//! A state opens on an ending character (`다`, `요`, `죠`, final punctuation)
//! when the table marks the preceding character as a valid stem. The next
//! characters then decide, through their table flags, whether the sentence
//! ends, continues, or depends on one more character. A character flagged
//! `NEXT1` is held back until that decision is made and is always placed
//! somewhere, so no input is lost.

use crate::{
    chain::SyllableChain,
    splitter::Segmentation,
    tables::{
        fast::{common_flags, FastState, CONT, NEXT, NEXT1, NEXT2, PREV},
        lexicon::NOT_ENDPOINT,
    },
    tags::{EMOJI, NONE, SP},
};

/// Segmenter for text without a morpheme analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastSplitter;

impl FastSplitter {
    /// Create a fast splitter.
    pub fn new() -> Self {
        Self
    }

    /// Segment the whole chain.
    pub fn segment(&self, chain: &SyllableChain) -> Segmentation {
        let mut output: Vec<Vec<usize>> = Vec::new();
        let mut current: Vec<usize> = Vec::new();
        let mut state = FastState::Default;
        let mut held: Option<usize> = None;

        for node in chain.indices() {
            let cursor = chain.cursor(node);
            let Some(c) = cursor.text() else { continue };
            let flags = state.flags(Some(c));

            if state == FastState::Default {
                if let Some(opened) = FastState::opened_by(c, cursor.prev().text()) {
                    state = opened;
                }
            } else if c == ' ' || common_flags(Some(c)) & CONT != 0 || cursor.has_tag(&[EMOJI], NONE) {
                if let Some(h) = held.take() {
                    cut(&mut output, &mut current);
                    current.push(h);
                    state = FastState::Default;
                }
            } else if flags & NEXT != 0 {
                if let Some(h) = held.take() {
                    current.push(h);
                } else if common_flags(cursor.prev_skip(&[SP], NONE).text()) != 0 {
                    cut(&mut output, &mut current);
                }
                state = FastState::Default;
            } else if flags & NEXT1 != 0 {
                if let Some(h) = held.take() {
                    cut(&mut output, &mut current);
                    current.push(h);
                    state = FastState::Default;
                }
            } else if flags & NEXT2 != 0 {
                match held.take() {
                    Some(h) => current.push(h),
                    None => cut(&mut output, &mut current),
                }
                state = FastState::Default;
            } else if flags == 0 || flags & PREV != 0 {
                if !NOT_ENDPOINT.contains(&c) {
                    cut(&mut output, &mut current);
                }
                if let Some(h) = held.take() {
                    current.push(h);
                }
                state = FastState::Default;
            }

            if let Some(h) = held.take() {
                current.push(h);
            }

            if state == FastState::Default || state.flags(Some(c)) & NEXT1 == 0 {
                current.push(node);
            } else {
                held = Some(node);
            }
        }

        cut(&mut output, &mut current);
        if let Some(h) = held {
            output.push(vec![h]);
        }

        Segmentation {
            sentences: output,
            realign_depth: 0,
        }
    }
}

fn cut(output: &mut Vec<Vec<usize>>, current: &mut Vec<usize>) {
    if !current.is_empty() {
        output.push(std::mem::take(current));
    }
}
