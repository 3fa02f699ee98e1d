//! Merging sentences that were cut inside brackets or directional quotes

use std::collections::HashMap;

use super::remove_empty;
use crate::{
    chain::SyllableChain,
    tables::{bracket_open_for, quote_open_for},
    tags::{NONE, QTC, QTO, SSC, SSO},
};

/// When a closing bracket or directional quote lands in a later sentence than
/// its opener, fold everything from the opener's sentence up to and including
/// the closer into the opener's sentence.
pub(super) fn merge_broken_brackets(
    chain: &SyllableChain,
    sentences: Vec<Vec<usize>>,
) -> Vec<Vec<usize>> {
    // Sentence label per flattened position; labels stay non-decreasing.
    let mut labels: Vec<usize> = sentences
        .iter()
        .enumerate()
        .flat_map(|(label, s)| std::iter::repeat(label).take(s.len()))
        .collect();
    let flat: Vec<usize> = sentences.concat();
    let mut open: HashMap<char, Vec<usize>> = HashMap::new();

    for (pos, &node) in flat.iter().enumerate() {
        let cursor = chain.cursor(node);
        let Some(c) = cursor.text() else { continue };

        if cursor.has_tag(&[SSO, QTO], NONE) {
            open.entry(c).or_default().push(pos);
        } else if cursor.has_tag(&[SSC, QTC], NONE) {
            let Some(opener) = bracket_open_for(c).or_else(|| quote_open_for(c)) else {
                continue;
            };
            let Some(open_pos) = open.get_mut(&opener).and_then(Vec::pop) else {
                continue;
            };
            let target = labels[open_pos];
            if labels[pos] > target {
                for label in labels[open_pos..=pos].iter_mut() {
                    *label = target;
                }
            }
        }
    }

    let mut merged: Vec<Vec<usize>> = Vec::with_capacity(sentences.len());
    let mut last_label = None;
    for (&node, &label) in flat.iter().zip(&labels) {
        match merged.last_mut() {
            Some(sentence) if last_label == Some(label) => sentence.push(node),
            _ => merged.push(vec![node]),
        }
        last_label = Some(label);
    }
    remove_empty(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postprocess::test_support::{render, sentences_from};

    #[test]
    fn test_merges_parenthesised_monologue() {
        let (chain, sentences) = sentences_from(&[
            &[("나", "NP"), ("는", "JX"), (" ", "SP"), ("생각했다", "VV+EF"), (".", "SF"), (" ", "SP")],
            &[("(", "SSO"), ("분명히", "MAG"), (" ", "SP"), ("맞을", "VV+ETM"), (" ", "SP"), ("것", "NNB"), ("이다", "VCP+EF"), (".", "SF"), (" ", "SP")],
            &[("그래야만", "VV+EC"), (" ", "SP"), ("한다", "VV+EF"), (".", "SF"), (")", "SSC"), (" ", "SP")],
            &[("그리곤", "MAJ"), (" ", "SP"), ("말했다", "VV+EF"), (".", "SF")],
        ]);
        let out = merge_broken_brackets(&chain, sentences);
        assert_eq!(
            render(&chain, &out),
            vec![
                "나는 생각했다. ",
                "(분명히 맞을 것이다. 그래야만 한다.)",
                " ",
                "그리곤 말했다.",
            ]
        );
    }

    #[test]
    fn test_same_sentence_pairs_are_consumed() {
        let (chain, sentences) = sentences_from(&[
            &[("“", "SS"), ("가", "NNG"), ("”", "SS"), (" ", "SP"), ("“", "SS"), ("나", "NNG"), (".", "SF"), (" ", "SP")],
            &[("다", "NNG"), ("”", "SS")],
        ]);
        let out = merge_broken_brackets(&chain, sentences);
        assert_eq!(render(&chain, &out), vec!["“가” “나. 다”"]);
    }

    #[test]
    fn test_unmatched_closer_is_ignored() {
        let (chain, sentences) = sentences_from(&[&[("가", "NNG"), (".", "SF"), (" ", "SP")], &[("나", "NNG"), (")", "SSC")]]);
        let out = merge_broken_brackets(&chain, sentences.clone());
        assert_eq!(out, sentences);
    }
}
