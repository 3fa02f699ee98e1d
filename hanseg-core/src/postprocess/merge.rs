//! Merging fragments that cannot stand as sentences

use super::{first_non_space, previous_target, remove_empty};
use crate::{
    chain::SyllableChain,
    tags::{NONE, SYMBOL_ONLY},
};

const CONNECTIVE_COMPOUNDS: &[&str] = &["VCP+EC", "VX+EC"];

/// Sentences that open with a particle, copula, connective ending or
/// auxiliary verb continue the previous one.
pub(super) fn merge_unexpected_split(
    chain: &SyllableChain,
    mut sentences: Vec<Vec<usize>>,
) -> Vec<Vec<usize>> {
    for idx in 1..sentences.len() {
        let Some(lead) = first_non_space(chain, &sentences[idx]) else {
            continue;
        };
        let head = chain.cursor(sentences[idx][lead]);
        let continues = CONNECTIVE_COMPOUNDS.contains(&head.tag())
            || head.has_tag(
                &["J", "VCP", "EC", "VX"],
                &["MAJ", "+J", "+VCP", "+EC", "+VX"],
            );
        if continues {
            let target = previous_target(&sentences, idx);
            let moved = std::mem::take(&mut sentences[idx]);
            sentences[target].extend(moved);
        }
    }
    remove_empty(sentences)
}

/// Sentences made only of punctuation, symbols, brackets, quotes and spaces
/// join the previous sentence; a leading one joins the next.
pub(super) fn merge_symbol_only(
    chain: &SyllableChain,
    mut sentences: Vec<Vec<usize>>,
) -> Vec<Vec<usize>> {
    let symbol_only = |sentence: &[usize]| {
        !sentence.is_empty()
            && sentence
                .iter()
                .all(|&i| chain.cursor(i).has_tag(SYMBOL_ONLY, NONE))
    };

    for idx in 1..sentences.len() {
        if symbol_only(&sentences[idx]) {
            let target = previous_target(&sentences, idx);
            let moved = std::mem::take(&mut sentences[idx]);
            sentences[target].extend(moved);
        }
    }

    let mut sentences = remove_empty(sentences);
    if sentences.len() > 1 && symbol_only(&sentences[0]) {
        let mut head = sentences.remove(0);
        head.append(&mut sentences[0]);
        sentences[0] = head;
    }
    sentences
}
