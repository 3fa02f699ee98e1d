//! Sentence-aligned chunking

use serde::{Deserialize, Serialize};

/// Character range of one sentence inside its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    /// First character
    pub start: usize,
    /// One past the last character
    pub end: usize,
}

/// A run of consecutive sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Character offset of the chunk in the normalized text
    pub offset: usize,
    /// Chunk text, including whitespace between its sentences
    pub text: String,
}

/// Find each sentence in `text`, in order.
///
/// Sentences that cannot be found after the previous one are skipped.
pub fn locate_sentences<S: AsRef<str>>(text: &str, sentences: &[S]) -> Vec<SentenceSpan> {
    let mut spans = Vec::with_capacity(sentences.len());
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for sentence in sentences {
        let sentence = sentence.as_ref();
        let Some(found) = text[byte_cursor..].find(sentence) else {
            tracing::debug!(sentence, "sentence not found in source text");
            continue;
        };
        let start = char_cursor + text[byte_cursor..byte_cursor + found].chars().count();
        let end = start + sentence.chars().count();
        spans.push(SentenceSpan { start, end });
        byte_cursor += found + sentence.len();
        char_cursor = end;
    }

    spans
}

/// Group sentences into chunks no longer than `max_length` characters.
///
/// A chunk is closed when adding the next sentence would stretch it past
/// `max_length`; a single sentence longer than that becomes its own chunk.
/// With `overlap`, the back half of the closed chunk's sentences seeds the next.
pub fn chunk_spans(text: &str, spans: &[SentenceSpan], max_length: usize, overlap: bool) -> Vec<Chunk> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut window: Vec<SentenceSpan> = Vec::new();

    for span in spans {
        if let Some(first) = window.first() {
            if span.end - first.start > max_length {
                chunks.push(window_chunk(&chars, &window));
                if overlap {
                    window.drain(..window.len() / 2);
                } else {
                    window.clear();
                }
            }
        }
        window.push(*span);
    }

    if !window.is_empty() {
        chunks.push(window_chunk(&chars, &window));
    }

    chunks
}

fn window_chunk(chars: &[char], window: &[SentenceSpan]) -> Chunk {
    let start = window.first().map_or(0, |s| s.start);
    let end = window.last().map_or(start, |s| s.end);
    Chunk {
        offset: start,
        text: chars[start..end].iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "가나다. 라마바. 사아자. 차카타.";

    fn spans() -> Vec<SentenceSpan> {
        locate_sentences(TEXT, &["가나다.", "라마바.", "사아자.", "차카타."])
    }

    #[test]
    fn test_locate_sentences_uses_char_offsets() {
        assert_eq!(
            spans(),
            vec![
                SentenceSpan { start: 0, end: 4 },
                SentenceSpan { start: 5, end: 9 },
                SentenceSpan { start: 10, end: 14 },
                SentenceSpan { start: 15, end: 19 },
            ]
        );
    }

    #[test]
    fn test_repeated_sentences_found_in_order() {
        let spans = locate_sentences("네. 네.", &["네.", "네."]);
        assert_eq!(spans[1], SentenceSpan { start: 3, end: 5 });
    }

    #[test]
    fn test_chunks_without_overlap() {
        let chunks = chunk_spans(TEXT, &spans(), 9, false);
        assert_eq!(
            chunks,
            vec![
                Chunk {
                    offset: 0,
                    text: "가나다. 라마바.".to_string()
                },
                Chunk {
                    offset: 10,
                    text: "사아자. 차카타.".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_chunks_with_overlap() {
        let chunks = chunk_spans(TEXT, &spans(), 9, true);
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["가나다. 라마바.", "라마바. 사아자.", "사아자. 차카타."]);
        assert_eq!(chunks[1].offset, 5);
    }

    #[test]
    fn test_oversized_sentence_stands_alone() {
        let chunks = chunk_spans(TEXT, &spans(), 2, false);
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[3].text, "차카타.");
    }

    #[test]
    fn test_no_sentences() {
        assert!(chunk_spans("", &[], 10, true).is_empty());
    }
}
