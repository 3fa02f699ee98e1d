//! Morpheme-driven sentence segmentation
//!
//! The scan walks the chain once, entering split mode when a syllable starts a
//! boundary and cutting once [`BoundaryClassifier::check_split_end`] agrees.
//! Cuts are suppressed while a quote is open. When the scan ends with a quote
//! still open, the tail starting at that quote's sentence is segmented again
//! on both sides of the quote and the two halves are glued around it.

use crate::{
    chain::SyllableChain,
    classifier::BoundaryClassifier,
    embracing::EmbracingProcessor,
    options::SplitOptions,
};

/// Sentences as chain indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segmentation {
    /// Each sentence lists the chain indices it covers, in order
    pub sentences: Vec<Vec<usize>>,
    /// Deepest realignment level that ran
    pub realign_depth: usize,
}

/// Morpheme-driven segmenter.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    classifier: BoundaryClassifier,
    max_realign_depth: usize,
    realign_length_limit: usize,
}

impl Segmenter {
    /// Create a segmenter from split options.
    pub fn new(options: &SplitOptions) -> Self {
        Self {
            classifier: BoundaryClassifier::new(options.rules),
            max_realign_depth: options.max_realign_depth,
            realign_length_limit: options.realign_length_limit,
        }
    }

    /// The classifier in use
    pub fn classifier(&self) -> &BoundaryClassifier {
        &self.classifier
    }

    /// Segment the whole chain.
    pub fn segment(&self, chain: &SyllableChain) -> Segmentation {
        let indices = chain.indices();
        let (sentences, realign_depth) = self.split(chain, &indices, 0);
        if realign_depth > 0 {
            tracing::debug!(
                event = "realigned",
                depth = realign_depth,
                sentences = sentences.len(),
                "quotes were unbalanced"
            );
        }
        Segmentation {
            sentences,
            realign_depth,
        }
    }

    fn split(&self, chain: &SyllableChain, slice: &[usize], depth: usize) -> (Vec<Vec<usize>>, usize) {
        let mut embracing = EmbracingProcessor::new();
        let mut output: Vec<Vec<usize>> = Vec::new();
        let mut current: Vec<usize> = Vec::new();
        let mut split_mode = false;
        let mut prev_embracing = false;

        for (idx, &node) in slice.iter().enumerate() {
            // Look-behind stops at the sentence being built.
            let cursor = chain.cursor_within(node, current.first().copied().unwrap_or(node));
            let Some(c) = cursor.text() else { continue };
            let sentence_index = output.len();
            let mut added = false;

            embracing.process(idx, sentence_index, c);
            let cur_embracing = !embracing.is_empty();

            if !split_mode {
                if self.classifier.check_split_right_now(cursor) {
                    flush(&mut output, &mut current);
                } else {
                    split_mode = self.classifier.check_split_start(cursor);
                }
            } else {
                let boundary = self.classifier.check_split_end(cursor);
                embracing.update_index(idx, sentence_index, c);

                if boundary.end {
                    split_mode = false;
                    if !cur_embracing && prev_embracing {
                        current.push(node);
                        added = true;
                        flush(&mut output, &mut current);
                    } else if !prev_embracing {
                        flush(&mut output, &mut current);
                    } else {
                        split_mode = boundary.exception;
                    }
                }
            }

            if !added {
                current.push(node);
            }
            prev_embracing = cur_embracing;
        }
        flush(&mut output, &mut current);

        match embracing.unbalanced() {
            Some(anchor)
                if depth < self.max_realign_depth && slice.len() <= self.realign_length_limit =>
            {
                self.realign(chain, slice, output, anchor.index, anchor.sentence_index, depth)
            }
            _ => (output, depth),
        }
    }

    /// Re-segment from `sentence_index` around the quote at `slice[quote]`.
    fn realign(
        &self,
        chain: &SyllableChain,
        slice: &[usize],
        mut output: Vec<Vec<usize>>,
        quote: usize,
        sentence_index: usize,
        depth: usize,
    ) -> (Vec<Vec<usize>>, usize) {
        let offset: usize = output[..sentence_index.min(output.len())]
            .iter()
            .map(Vec::len)
            .sum();
        let Some(pivot) = quote.checked_sub(offset) else {
            return (output, depth);
        };
        let tail = &slice[offset..];
        if pivot >= tail.len() {
            return (output, depth);
        }

        let (mut before, before_depth) = self.split(chain, &tail[..pivot], depth + 1);
        let (after, after_depth) = self.split(chain, &tail[pivot + 1..], depth + 1);

        let mut middle = before.pop().unwrap_or_default();
        middle.push(tail[pivot]);
        let mut after = after.into_iter();
        middle.extend(after.next().unwrap_or_default());

        output.truncate(sentence_index);
        output.extend(before);
        output.push(middle);
        output.extend(after);
        (output, before_depth.max(after_depth))
    }
}

fn flush(output: &mut Vec<Vec<usize>>, current: &mut Vec<usize>) {
    if !current.is_empty() {
        output.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chain::Syllable, options::RuleToggles};

    fn punct_chain(text: &str) -> SyllableChain {
        let morphemes: Vec<_> = text
            .chars()
            .map(|c| crate::Morpheme::new(c.to_string(), crate::tags::UNTAGGED))
            .collect();
        SyllableChain::from_morphemes(text, &morphemes)
    }

    fn punct_segmenter() -> Segmenter {
        Segmenter::new(&SplitOptions {
            rules: RuleToggles::punctuation_only(),
            ..SplitOptions::default()
        })
    }

    fn rendered(chain: &SyllableChain, segmentation: &Segmentation) -> Vec<String> {
        segmentation
            .sentences
            .iter()
            .map(|s| chain.render(s))
            .collect()
    }

    #[test]
    fn test_cuts_after_final_punctuation() {
        let chain = punct_chain("밥을 먹었다. 그리고 잤다.");
        let seg = punct_segmenter().segment(&chain);
        assert_eq!(rendered(&chain, &seg), vec!["밥을 먹었다. ", "그리고 잤다."]);
        assert_eq!(seg.realign_depth, 0);
    }

    #[test]
    fn test_quoted_sentences_stay_together() {
        let chain = punct_chain("그가 \"안녕. 반가워.\" 라고 했다.");
        let seg = punct_segmenter().segment(&chain);
        assert_eq!(seg.sentences.len(), 1);
    }

    #[test]
    fn test_pilcrow_cuts_immediately() {
        let chain = punct_chain("가나¶다라");
        let seg = punct_segmenter().segment(&chain);
        assert_eq!(rendered(&chain, &seg), vec!["가나", "¶다라"]);
    }

    #[test]
    fn test_realign_on_unclosed_quote() {
        let chain = punct_chain("그는 '안녕. 반가워. 그리고 갔다. 다시 보자.");
        let seg = punct_segmenter().segment(&chain);
        assert_eq!(
            rendered(&chain, &seg),
            vec!["그는 '안녕. ", "반가워. ", "그리고 갔다. ", "다시 보자."]
        );
        assert_eq!(seg.realign_depth, 1);
    }

    #[test]
    fn test_realign_disabled_by_depth() {
        let chain = punct_chain("그는 '안녕. 반가워.");
        let segmenter = Segmenter::new(&SplitOptions {
            rules: RuleToggles::punctuation_only(),
            max_realign_depth: 0,
            ..SplitOptions::default()
        });
        let seg = segmenter.segment(&chain);
        assert_eq!(seg.sentences.len(), 1);
        assert_eq!(seg.realign_depth, 0);
    }

    #[test]
    fn test_covers_every_index_once() {
        let chain = punct_chain("'a. 'b. \"c. 'd.");
        let seg = punct_segmenter().segment(&chain);
        let flat: Vec<usize> = seg.sentences.concat();
        assert_eq!(flat, chain.indices());
    }

    #[test]
    fn test_empty_chain() {
        let chain = SyllableChain::new(Vec::<Syllable>::new());
        assert_eq!(punct_segmenter().segment(&chain), Segmentation::default());
    }
}
