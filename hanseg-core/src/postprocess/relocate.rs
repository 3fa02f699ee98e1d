//! Moving leading markers back onto the sentence they annotate

use super::{first_non_space, move_prefix_to_previous, previous_last_char, remove_empty};
use crate::{
    chain::SyllableChain,
    tables::{
        is_dagger, is_raw_whitespace,
        lexicon::{BUTTON_WORD, FOOTNOTE_REFERENCE, FOOTNOTE_WORDS},
    },
    tags::{CONTINUATION, CONTINUATION_EXCLUDE, NONE, SP},
};

fn chars_from(chain: &SyllableChain, sentence: &[usize]) -> Vec<char> {
    sentence
        .iter()
        .filter_map(|&i| chain.cursor(i).text())
        .collect()
}

/// A leading `[13]`, `[*]`, `[편집]` or `[참고 2]` belongs to the previous
/// sentence, unless that sentence ends a line or the marker is a UI label.
pub(super) fn relocate_footnote(
    chain: &SyllableChain,
    mut sentences: Vec<Vec<usize>>,
) -> Vec<Vec<usize>> {
    for idx in 1..sentences.len() {
        let Some(len) = footnote_len(chain, &sentences[idx]) else {
            continue;
        };
        if previous_last_char(chain, &sentences, idx).is_some_and(is_raw_whitespace) {
            continue;
        }
        let after = chain.cursor(sentences[idx][len - 1]).next_skip(&[SP], NONE);
        if after.has_tag(&["J"], &["MAJ"]) || after.starts_with_texts(BUTTON_WORD) {
            continue;
        }
        move_prefix_to_previous(&mut sentences, idx, len);
    }
    remove_empty(sentences)
}

/// Syllables covered by a leading footnote marker, leading spaces included.
fn footnote_len(chain: &SyllableChain, sentence: &[usize]) -> Option<usize> {
    let lead = first_non_space(chain, sentence)?;
    let chars = chars_from(chain, &sentence[lead..]);
    match chars.split_first() {
        Some(('[', body)) => marker_body_len(body).map(|len| lead + 1 + len),
        _ => None,
    }
}

/// Length of the marker body up to and including `]`.
fn marker_body_len(body: &[char]) -> Option<usize> {
    for word in FOOTNOTE_WORDS {
        let word: Vec<char> = word.chars().collect();
        if body.starts_with(&word) {
            return Some(word.len());
        }
    }

    let reference: Vec<char> = FOOTNOTE_REFERENCE.chars().collect();
    let (skip, digits_only) = if body.starts_with(&reference) {
        (reference.len(), true)
    } else {
        (0, false)
    };
    let allowed = |c: char| c.is_ascii_digit() || c == ' ' || (!digits_only && matches!(c, '*' | ','));

    let rest = &body[skip..];
    let run = rest.iter().take_while(|&&c| allowed(c)).count();
    let marked = rest[..run].iter().any(|&c| c.is_ascii_digit() || c == '*');
    (marked && rest.get(run) == Some(&']')).then_some(skip + run + 1)
}

/// A leading `†`/`‡` run and its number belong to the previous sentence.
pub(super) fn relocate_dagger(
    chain: &SyllableChain,
    mut sentences: Vec<Vec<usize>>,
) -> Vec<Vec<usize>> {
    for idx in 1..sentences.len() {
        let Some(len) = dagger_len(chain, &sentences[idx]) else {
            continue;
        };
        if previous_last_char(chain, &sentences, idx).is_some_and(is_raw_whitespace) {
            continue;
        }
        move_prefix_to_previous(&mut sentences, idx, len);
    }
    remove_empty(sentences)
}

fn dagger_len(chain: &SyllableChain, sentence: &[usize]) -> Option<usize> {
    let lead = first_non_space(chain, sentence)?;
    let chars = chars_from(chain, &sentence[lead..]);
    let daggers = chars.iter().take_while(|&&c| is_dagger(c)).count();
    if daggers == 0 {
        return None;
    }
    let digits = chars[daggers..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();
    Some(lead + daggers + digits)
}

/// A leading `(...)` ending in a noun and not followed by a particle is an
/// aside on the previous sentence; it moves there with the symbols and spaces
/// that trail it.
pub(super) fn relocate_parenthetical(
    chain: &SyllableChain,
    mut sentences: Vec<Vec<usize>>,
) -> Vec<Vec<usize>> {
    for idx in 1..sentences.len() {
        let Some(len) = parenthetical_len(chain, &sentences[idx]) else {
            continue;
        };
        move_prefix_to_previous(&mut sentences, idx, len);
    }
    remove_empty(sentences)
}

fn parenthetical_len(chain: &SyllableChain, sentence: &[usize]) -> Option<usize> {
    let lead = first_non_space(chain, sentence)?;
    if !chain.cursor(sentence[lead]).is('(') {
        return None;
    }
    let close = sentence.iter().position(|&i| chain.cursor(i).is(')'))?;
    if close == 0 {
        return None;
    }

    let noun_finish = chain
        .cursor(sentence[close - 1])
        .prev_skip_from_current(CONTINUATION, CONTINUATION_EXCLUDE)
        .tag()
        .starts_with('N');
    let close_last = close + 1 == sentence.len();
    let particle_start = !close_last
        && chain
            .cursor(sentence[close + 1])
            .next_skip_from_current(&[SP], NONE)
            .tag()
            .starts_with('J');
    if !noun_finish || particle_start {
        return None;
    }

    let trailing = sentence[close + 1..]
        .iter()
        .take_while(|&&i| chain.cursor(i).has_tag(CONTINUATION, CONTINUATION_EXCLUDE))
        .count();
    Some(close + 1 + trailing)
}
