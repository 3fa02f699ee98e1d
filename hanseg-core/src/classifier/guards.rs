//! Cursor moves and guards shared by several rule families

use crate::{
    chain::Cursor,
    tables::lexicon::UNAVAILABLE_NEXT,
    tags::{CONTINUATION, CONTINUATION_EXCLUDE, NONE, SP, SPACE_OR_FINAL},
};

pub(crate) fn next_skip_sp(c: Cursor<'_>) -> Cursor<'_> {
    c.next_skip(&[SP], NONE)
}

pub(crate) fn prev_skip_sp(c: Cursor<'_>) -> Cursor<'_> {
    c.prev_skip(&[SP], NONE)
}

pub(crate) fn next_skip_spsf(c: Cursor<'_>) -> Cursor<'_> {
    c.next_skip(SPACE_OR_FINAL, NONE)
}

pub(crate) fn prev_skip_spsf(c: Cursor<'_>) -> Cursor<'_> {
    c.prev_skip(SPACE_OR_FINAL, NONE)
}

pub(crate) fn next_skip_continuation(c: Cursor<'_>) -> Cursor<'_> {
    c.next_skip(CONTINUATION, CONTINUATION_EXCLUDE)
}

pub(crate) fn prev_skip_continuation(c: Cursor<'_>) -> Cursor<'_> {
    c.prev_skip(CONTINUATION, CONTINUATION_EXCLUDE)
}

/// A single comma follows; `,,` is treated as emphasis and allowed.
pub(crate) fn non_doubled_comma(c: Cursor<'_>) -> bool {
    let next = next_skip_continuation(c);
    next.is(',') && !next_skip_sp(next).is(',')
}

/// The next word continues the current one (`~에서`, `~라고`, `~하며`...).
pub(crate) fn unavailable_next(c: Cursor<'_>) -> bool {
    let next = next_skip_continuation(c);
    UNAVAILABLE_NEXT
        .iter()
        .any(|ngram| next.starts_with_texts(ngram))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Syllable, SyllableChain};

    fn chain(parts: &[(&str, &str)]) -> SyllableChain {
        SyllableChain::new(
            parts
                .iter()
                .flat_map(|(text, tag)| text.chars().map(move |c| Syllable::new(c, *tag)))
                .collect(),
        )
    }

    #[test]
    fn test_non_doubled_comma() {
        let single = chain(&[("요", "EF"), (",", "SC"), (" ", "SP"), ("그", "MAJ")]);
        assert!(non_doubled_comma(single.cursor(0)));

        let doubled = chain(&[("요", "EF"), (",", "SC"), (",", "SC"), ("그", "MAJ")]);
        assert!(!non_doubled_comma(doubled.cursor(0)));
    }

    #[test]
    fn test_unavailable_next() {
        let glued = chain(&[("다", "EF"), (" ", "SP"), ("라고", "JKQ"), (" ", "SP")]);
        assert!(unavailable_next(glued.cursor(0)));

        let free = chain(&[("다", "EF"), (" ", "SP"), ("그", "NP")]);
        assert!(!unavailable_next(free.cursor(0)));
    }
}
