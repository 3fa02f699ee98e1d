//! The six boundary-start rule families
//!
//! Exceptions are listed in evaluation order. An exception guard answers
//! `true` when it vetoes the boundary; a permission guard answers `true`
//! when it allows it.

use super::{
    guards::{
        next_skip_continuation, next_skip_sp, next_skip_spsf, non_doubled_comma,
        prev_skip_continuation, prev_skip_sp, prev_skip_spsf, unavailable_next,
    },
    BoundaryRule, NamedGuard,
};
use crate::{
    chain::Cursor,
    tables::lexicon::PAPER_ABBREVIATIONS,
    tags::{EMOJI, JAMO, NONE, QTO, SE, SF, SP, SSC, SSO, SY},
};

const fn guard(name: &'static str, check: super::Guard) -> NamedGuard {
    NamedGuard { name, check }
}

/// `.`, `!`, `?` followed by a space, a symbol, an opening bracket, an emoji
/// or jamo.
pub static FINAL_PUNCTUATION: BoundaryRule = BoundaryRule {
    name: "final_punctuation",
    trigger: |c| {
        c.has_tag(&[SF], NONE)
            && (c.next().has_tag(&[SP], NONE)
                || next_skip_sp(c).has_tag(&[SY, SSO, EMOJI, JAMO], NONE))
    },
    exceptions: &[
        guard("numeral_before", |c| {
            prev_skip_spsf(c).text().is_some_and(char::is_numeric)
        }),
        guard("copula_before", |c| {
            prev_skip_spsf(c).has_tag(&["VCP"], &["+VCP"])
        }),
        guard("particle_before_double_dot", |c| {
            prev_skip_spsf(c).has_tag(&["J"], &[EMOJI, JAMO, "+J"]) && c.is('.') && c.prev().is('.')
        }),
        guard("copula_after", |c| {
            next_skip_spsf(c).has_tag(&["VCP"], &["+VCP"])
        }),
        guard("adverb_before", |c| {
            prev_skip_spsf(c).has_tag(&["MAJ", "MAG"], NONE)
        }),
        guard("connective_man_de", |c| {
            let before = prev_skip_spsf(c);
            (before.has_tag(&["EC"], NONE) && before.is('만'))
                || (before.has_tag(&["EC", "NNB"], NONE) && before.is('데') && c.prev().is('.'))
        }),
        guard("spaced_dots", |c| {
            let next = next_skip_sp(c);
            let prev = prev_skip_sp(c);
            (!next.is('.') && next_skip_sp(next).is('.'))
                || (!prev.is('.') && prev_skip_sp(prev).is('.'))
        }),
        guard("unavailable_next", unavailable_next),
        guard("citation_abbreviation", |c| {
            PAPER_ABBREVIATIONS.iter().any(|abbr| c.ends_before(abbr))
        }),
    ],
    permissions: &[],
};

/// Sentence-final endings (`EF`) at the last syllable of the ending.
pub static FINAL_ENDING: BoundaryRule = BoundaryRule {
    name: "final_ending",
    trigger: |c| c.has_tag(&["EF"], &["+J"]) && !next_skip_sp(c).has_tag(&["EF"], NONE),
    exceptions: &[
        guard("non_doubled_comma", non_doubled_comma),
        guard("connective_after", |c| {
            next_skip_sp(c).has_tag(
                &["EC", "J", "VX"],
                &["MAJ", EMOJI, JAMO, "+VX", "+EC", "+J", "VX+"],
            )
        }),
        guard("pronoun_copula_unpunctuated", |c| {
            c.prev().has_tag(&["NP+VCP+EF"], NONE) && !c.next().has_tag(&[SF], NONE)
        }),
        guard("auxiliary_before_space", |c| {
            c.prev().is(' ') && c.prev().prev().has_tag(&["VX"], &["VX+"])
        }),
        guard("unavailable_next", unavailable_next),
    ],
    permissions: &[],
};

/// `다` tagged as a connective ending while actually closing the sentence.
pub static CONNECTIVE_ENDING: BoundaryRule = BoundaryRule {
    name: "connective_ending",
    trigger: |c| {
        c.is('다') && c.has_tag(&["EC"], &["+J"]) && !next_skip_sp(c).has_tag(&["EC"], NONE)
    },
    exceptions: &[
        guard("non_doubled_comma", non_doubled_comma),
        guard("particle_or_auxiliary_after", |c| {
            next_skip_sp(c).has_tag(
                &["VCP", "J", "VX"],
                &["MAJ", JAMO, EMOJI, "+J", "+VCP", "+VX"],
            )
        }),
        guard("unavailable_next", unavailable_next),
    ],
    permissions: &[
        guard("prefinal_then_symbol", |c| {
            c.prev().has_tag(&["EP"], NONE)
                && next_skip_sp(c).has_tag(&[SF, SY, SSO, QTO, EMOJI], NONE)
        }),
        guard("prefinal_then_pronoun", |c| {
            c.prev().has_tag(&["EP"], NONE) && next_skip_sp(c).has_tag(&["NP", "MAJ"], NONE)
        }),
        guard("ni_da", |c| {
            c.prev().is('니')
                && c.prev().has_tag(&["EC"], NONE)
                && !(c.next().is('만') && c.next().has_tag(&["EC"], NONE))
        }),
    ],
};

/// Nominalizing endings (`ETN`) closing a sentence in note style (`~함.`).
pub static NOMINAL_ENDING: BoundaryRule = BoundaryRule {
    name: "nominal_ending",
    trigger: |c| {
        c.has_tag(&["ETN"], &["+J", "XS"])
            && !next_skip_sp(c).has_tag(&["ETN"], NONE)
            && !c.is_any(&['기', '길'])
    },
    exceptions: &[
        guard("non_doubled_comma", non_doubled_comma),
        guard("no_break_after", |c| {
            !c.next()
                .has_tag(&[SP, SF, SY, SSO, QTO, EMOJI, JAMO], NONE)
        }),
        guard("predicate_after", |c| {
            next_skip_sp(c).has_tag(&["J", "VV", "VA", "VX"], &["MAJ", EMOJI, JAMO, "+J"])
        }),
        guard("determiner_or_close_after", |c| {
            next_skip_spsf(c).has_tag(&["MM", SSC], NONE)
        }),
        guard("repeated_word", |c| {
            let before = prev_skip_continuation(c.prev_skip(&["ETN"], NONE));
            let next = next_skip_continuation(c);
            match before.text() {
                Some(ch) => next.is(ch),
                None => !next.is_end(),
            }
        }),
        guard("unavailable_next", unavailable_next),
    ],
    permissions: &[],
};

/// Adnominal endings (`ETM`) used as a sentence end in colloquial text.
pub static ADNOMINAL_ENDING: BoundaryRule = BoundaryRule {
    name: "adnominal_ending",
    trigger: |c| c.has_tag(&["ETM"], &["+J", "XS"]) && !next_skip_sp(c).has_tag(&["ETM"], NONE),
    exceptions: &[
        guard("non_doubled_comma", non_doubled_comma),
        guard("dependent_noun_after", |c| {
            next_skip_continuation(c).has_tag(&["NNB"], NONE)
        }),
        guard("particle_after", |c| {
            next_skip_sp(c).has_tag(&["J"], &["MAJ", EMOJI, JAMO, "+J"])
        }),
        guard("unavailable_next", unavailable_next),
    ],
    permissions: &[
        guard("da_neung", |c| c.prev().starts_with_texts("다능")),
        guard("ellipsis_after", |c| next_skip_sp(c).has_tag(&[SE], NONE)),
    ],
};

/// The dependent noun `듯` trailed by jamo, emoji or an ellipsis.
pub static LEXICAL: BoundaryRule = BoundaryRule {
    name: "lexical",
    trigger: |c| {
        let next = next_skip_spsf(c);
        c.is('듯') && c.has_tag(&["NNB"], NONE) && (next.has_tag(&[EMOJI, JAMO], NONE) || next.is('…'))
    },
    exceptions: &[guard("verb_after_run", |c| after_decoration_run(c).has_tag(&["VV"], NONE))],
    permissions: &[],
};

fn after_decoration_run(c: Cursor<'_>) -> Cursor<'_> {
    let mut cursor = c.next();
    while cursor.has_tag(&[SP, SF, SE, EMOJI, JAMO], NONE) || cursor.is('…') {
        cursor = cursor.next();
    }
    cursor
}
