//! Morpheme-to-syllable expansion and tag repair
//!
//! Analyzer tags are spread over every character of their morpheme, then
//! two fixes run: a per-character override for punctuation, quotes, jamo and
//! whitespace (analyzers disagree on these), and a short table of multi-syllable
//! corrections for known tagger mistakes on colloquial endings.

use crate::{
    chain::{Syllable, SyllableChain},
    morpheme::Morpheme,
    tables::{
        is_bracket_close, is_bracket_open, is_dagger, is_emoji, is_jamo, is_space,
        is_split_symbol, is_suffix_symbol, quote_close_for, quote_open_for,
        symbols::NON_DIRECTIONAL_QUOTES,
    },
    tags,
};

/// One lookahead pattern: `(character, tag substring)` per position, and the
/// tags written over the matched syllables.
struct Correction {
    pattern: &'static [(char, &'static str)],
    rewrite: &'static [&'static str],
}

const CORRECTIONS: &[Correction] = &[
    Correction {
        pattern: &[('이', "JKS"), ('다', "MAG")],
        rewrite: &["VCP", "EF"],
    },
    Correction {
        pattern: &[('네', "EF"), ('용', "XSN")],
        rewrite: &["EF", "EF"],
    },
    Correction {
        pattern: &[('까', "EC"), ('용', "NNG")],
        rewrite: &["EF", "EF"],
    },
    Correction {
        pattern: &[('을', "EF"), ('까', "EF"), ('용', "XSN")],
        rewrite: &["EF", "EF", "EF"],
    },
    Correction {
        pattern: &[('였', "EP"), ('게', "EC"), ('용', "NNG")],
        rewrite: &["EP", "EF", "EF"],
    },
    Correction {
        pattern: &[('구', "EC"), ('용', "NNG")],
        rewrite: &["EF", "EF"],
    },
    Correction {
        pattern: &[('엇', "EF"), ('음', "IC")],
        rewrite: &["EP", "ETN"],
    },
    Correction {
        pattern: &[('쥬', "EC")],
        rewrite: &["EF"],
    },
    Correction {
        pattern: &[('어', "EC"), ('용', "EC")],
        rewrite: &["EF", "EF"],
    },
    Correction {
        pattern: &[('떄', "UNKNOWN")],
        rewrite: &["NNG"],
    },
];

/// Tag forced onto `c` regardless of the analyzer, first match wins.
fn override_tag(c: char, tag: &str) -> Option<&'static str> {
    if is_split_symbol(c) || is_dagger(c) {
        Some(tags::PF)
    } else if matches!(c, '!' | '?' | '.') {
        Some(tags::SF)
    } else if matches!(c, ',' | ':' | '/' | 'ㆍ') {
        Some(tags::SC)
    } else if is_bracket_open(c) {
        Some(tags::SSO)
    } else if is_bracket_close(c) {
        Some(tags::SSC)
    } else if NON_DIRECTIONAL_QUOTES.contains(&c) {
        Some(tags::QTN)
    } else if quote_close_for(c).is_some() {
        Some(tags::QTO)
    } else if quote_open_for(c).is_some() {
        Some(tags::QTC)
    } else if is_jamo(c) {
        Some(tags::JAMO)
    } else if c == '요' && (tag.contains("EC") || tag == "JX") {
        Some("EF")
    } else if c == '^' || is_emoji(c) || is_suffix_symbol(c) {
        Some(tags::EMOJI)
    } else if is_space(c) {
        Some(tags::SP)
    } else {
        None
    }
}

/// Build the syllable chain for `text` from its morpheme analysis.
///
/// The chain always follows the morphemes. Tag correction only runs when the
/// morphemes cover `text` exactly; otherwise the lookahead patterns could
/// straddle misaligned tokens, so they are skipped and a debug event records it.
pub fn build_chain(text: &str, morphemes: &[Morpheme]) -> SyllableChain {
    let syllables: Vec<Syllable> = morphemes
        .iter()
        .flat_map(|m| {
            m.surface.chars().map(move |c| {
                let tag = override_tag(c, &m.tag).unwrap_or(m.tag.as_str());
                Syllable::new(c, tag)
            })
        })
        .collect();

    let mut chain = SyllableChain::new(syllables);

    let covered = chain.len() == text.chars().count()
        && chain.syllables().iter().map(|s| s.text).eq(text.chars());
    if covered {
        correct_tags(&mut chain);
    } else {
        tracing::debug!(
            event = "tag_correction_skipped",
            text_chars = text.chars().count(),
            syllables = chain.len(),
            "morphemes do not cover the input text"
        );
    }

    chain
}

fn correct_tags(chain: &mut SyllableChain) {
    for start in 0..chain.len() {
        for correction in CORRECTIONS {
            let matched = correction
                .pattern
                .iter()
                .enumerate()
                .all(|(offset, &(c, tag))| {
                    let cursor = chain.cursor(start + offset);
                    cursor.is(c) && cursor.has_tag(&[tag], tags::NONE)
                });
            if matched {
                for (offset, tag) in correction.rewrite.iter().enumerate() {
                    chain.set_tag(start + offset, tag);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_of(chain: &SyllableChain) -> Vec<&str> {
        chain.syllables().iter().map(|s| s.tag.as_str()).collect()
    }

    #[test]
    fn test_tags_spread_per_character() {
        let morphemes = vec![Morpheme::new("했", "VV+EP"), Morpheme::new("습니다", "EF")];
        let chain = build_chain("했습니다", &morphemes);
        assert_eq!(tags_of(&chain), vec!["VV+EP", "EF", "EF", "EF"]);
    }

    #[test]
    fn test_character_overrides() {
        let morphemes = vec![
            Morpheme::new("“", "SS"),
            Morpheme::new("ㅋㅋ", "IC"),
            Morpheme::new("”", "SS"),
            Morpheme::new(" ", "-"),
            Morpheme::new("(", "SS"),
            Morpheme::new("'", "SS"),
            Morpheme::new("…", "SE"),
            Morpheme::new("※", "SY"),
            Morpheme::new(".", "SY"),
        ];
        let chain = build_chain("“ㅋㅋ” ('…※.", &morphemes);
        assert_eq!(
            tags_of(&chain),
            vec!["QTO", "JAMO", "JAMO", "QTC", "SP", "SSO", "QTN", "SE", "PF", "SF"]
        );
    }

    #[test]
    fn test_yo_after_connective_becomes_final() {
        let morphemes = vec![Morpheme::new("가", "VV"), Morpheme::new("요", "EC")];
        let chain = build_chain("가요", &morphemes);
        assert_eq!(tags_of(&chain), vec!["VV", "EF"]);
    }

    #[test]
    fn test_colloquial_corrections() {
        let morphemes = vec![
            Morpheme::new("했", "VV+EP"),
            Morpheme::new("네", "EF"),
            Morpheme::new("용", "XSN"),
        ];
        let chain = build_chain("했네용", &morphemes);
        assert_eq!(tags_of(&chain), vec!["VV+EP", "EF", "EF"]);

        let morphemes = vec![Morpheme::new("했", "VV+EP"), Morpheme::new("쥬", "EC")];
        let chain = build_chain("했쥬", &morphemes);
        assert_eq!(tags_of(&chain), vec!["VV+EP", "EF"]);
    }

    #[test]
    fn test_correction_skipped_on_mismatch() {
        let morphemes = vec![Morpheme::new("쥬", "EC")];
        let chain = build_chain("했쥬", &morphemes);
        assert_eq!(tags_of(&chain), vec!["EC"]);
    }
}
