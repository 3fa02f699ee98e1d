//! Boundary classification
//!
//! A syllable starts a boundary when any enabled [`BoundaryRule`] accepts it.
//! Each rule is a trigger, an ordered list of exceptions that veto it, and an
//! optional list of permissions of which at least one must hold. Once a
//! boundary has started, [`BoundaryClassifier::check_split_end`] decides where
//! the cut actually lands.

mod families;
mod guards;

pub use families::{
    ADNOMINAL_ENDING, CONNECTIVE_ENDING, FINAL_ENDING, FINAL_PUNCTUATION, LEXICAL,
    NOMINAL_ENDING,
};

use crate::{
    chain::Cursor,
    options::RuleToggles,
    tags::{CONTINUATION_EXCLUDE, CONTINUATION_WITHOUT_QTN, JAMO, NONE, SF},
};
use guards::{next_skip_sp, prev_skip_sp};

/// Predicate over one position of the chain.
pub type Guard = fn(Cursor<'_>) -> bool;

/// A guard with a name, reported when it decides a verdict.
#[derive(Clone, Copy)]
pub struct NamedGuard {
    /// Stable identifier
    pub name: &'static str,
    /// The check itself
    pub check: Guard,
}

impl std::fmt::Debug for NamedGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// One boundary-start rule family.
#[derive(Debug)]
pub struct BoundaryRule {
    /// Family name
    pub name: &'static str,
    /// Necessary condition for the rule to apply at all
    pub trigger: Guard,
    /// Evaluated in order; the first that holds vetoes the boundary
    pub exceptions: &'static [NamedGuard],
    /// If non-empty, at least one must hold
    pub permissions: &'static [NamedGuard],
}

/// Outcome of evaluating a [`BoundaryRule`] at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The trigger did not hold
    NoTrigger,
    /// The named exception vetoed the boundary
    Vetoed(&'static str),
    /// No permission held
    NotPermitted,
    /// The position starts a boundary
    Boundary,
}

impl BoundaryRule {
    /// Evaluate the rule at `cursor`.
    pub fn evaluate(&self, cursor: Cursor<'_>) -> Verdict {
        if !(self.trigger)(cursor) {
            return Verdict::NoTrigger;
        }
        if let Some(veto) = self.exceptions.iter().find(|g| (g.check)(cursor)) {
            return Verdict::Vetoed(veto.name);
        }
        if !self.permissions.is_empty() && !self.permissions.iter().any(|g| (g.check)(cursor)) {
            return Verdict::NotPermitted;
        }
        Verdict::Boundary
    }

    /// Shorthand for `evaluate(cursor) == Verdict::Boundary`.
    pub fn accepts(&self, cursor: Cursor<'_>) -> bool {
        self.evaluate(cursor) == Verdict::Boundary
    }
}

/// Result of [`BoundaryClassifier::check_split_end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryEnd {
    /// Cut before the current syllable
    pub end: bool,
    /// The cut came from an override; stay in split mode if it is not taken
    pub exception: bool,
}

const DASHES: &[char] = &['－', '-', '–'];

/// Boundary decisions for one rule configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryClassifier {
    toggles: RuleToggles,
}

impl BoundaryClassifier {
    /// Create a classifier with the given families enabled.
    pub fn new(toggles: RuleToggles) -> Self {
        Self { toggles }
    }

    /// Enabled toggles
    pub fn toggles(&self) -> RuleToggles {
        self.toggles
    }

    /// Enabled rule families, in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = &'static BoundaryRule> {
        let t = self.toggles;
        [
            (t.final_punctuation, &FINAL_PUNCTUATION),
            (t.final_ending, &FINAL_ENDING),
            (t.connective_ending, &CONNECTIVE_ENDING),
            (t.nominal_ending, &NOMINAL_ENDING),
            (t.adnominal_ending, &ADNOMINAL_ENDING),
            (t.lexical, &LEXICAL),
        ]
        .into_iter()
        .filter_map(|(enabled, rule)| enabled.then_some(rule))
    }

    /// True when `cursor` is a candidate sentence end.
    pub fn check_split_start(&self, cursor: Cursor<'_>) -> bool {
        self.rules().any(|rule| rule.accepts(cursor))
    }

    /// Cut before `cursor` without entering split mode.
    pub fn check_split_right_now(&self, cursor: Cursor<'_>) -> bool {
        cursor.is('¶')
    }

    /// Decide whether the span that started a boundary ends before `cursor`.
    pub fn check_split_end(&self, cursor: Cursor<'_>) -> BoundaryEnd {
        let continues = cursor.has_tag(CONTINUATION_WITHOUT_QTN, CONTINUATION_EXCLUDE);
        let doubled_comma = cursor.is(',') && (cursor.next().is(',') || cursor.prev().is(','));

        let end = !continues
            && !doubled_comma
            && !cursor.has_tag(&[JAMO], NONE)
            && !self.check_split_start(cursor);
        if end {
            return BoundaryEnd {
                end,
                exception: false,
            };
        }

        let question_then_dot =
            prev_skip_sp(cursor).is_any(&['?', '!']) && next_skip_sp(cursor).is('.');
        let dangling_dash = cursor.is_any(DASHES)
            && !(next_skip_sp(cursor).has_tag(&[SF], NONE) || cursor.next().is_any(DASHES));

        if question_then_dot || dangling_dash {
            BoundaryEnd {
                end: true,
                exception: true,
            }
        } else {
            BoundaryEnd::default()
        }
    }
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
    fn test_rules_follow_toggles() {
        let names: Vec<_> = BoundaryClassifier::new(RuleToggles::punctuation_only())
            .rules()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["final_punctuation"]);
        assert_eq!(BoundaryClassifier::new(RuleToggles::all()).rules().count(), 6);
    }

    #[test]
    fn test_split_start_respects_toggles() {
        let chain = chain(&[("다", "EF"), (" ", "SP"), ("그", "NP")]);
        assert!(BoundaryClassifier::new(RuleToggles::all()).check_split_start(chain.cursor(0)));
        assert!(!BoundaryClassifier::new(RuleToggles::punctuation_only())
            .check_split_start(chain.cursor(0)));
    }

    #[test]
    fn test_split_end_on_plain_syllable() {
        let chain = chain(&[(".", "SF"), (" ", "SP"), ("그", "NP")]);
        let classifier = BoundaryClassifier::default();
        assert_eq!(classifier.check_split_end(chain.cursor(1)), BoundaryEnd::default());
        assert_eq!(
            classifier.check_split_end(chain.cursor(2)),
            BoundaryEnd {
                end: true,
                exception: false
            }
        );
    }

    #[test]
    fn test_split_end_continues_over_closers() {
        let chain = chain(&[(".", "SF"), (")", "SSC"), ("”", "QTC"), ("ㅋ", "JAMO")]);
        let classifier = BoundaryClassifier::default();
        for i in 1..4 {
            assert!(!classifier.check_split_end(chain.cursor(i)).end);
        }
    }

    #[test]
    fn test_split_end_stops_at_plain_quote() {
        let chain = chain(&[(".", "SF"), (" ", "SP"), ("'", "QTN")]);
        assert!(BoundaryClassifier::default().check_split_end(chain.cursor(2)).end);
    }

    #[test]
    fn test_split_end_question_then_dot() {
        let chain = chain(&[("?", "SF"), (" ", "SP"), (".", "SF"), (" ", "SP")]);
        let result = BoundaryClassifier::default().check_split_end(chain.cursor(1));
        assert_eq!(
            result,
            BoundaryEnd {
                end: true,
                exception: true
            }
        );
    }

    #[test]
    fn test_split_end_dangling_dash() {
        let chain = chain(&[(".", "SF"), (" ", "SP"), ("-", "SY"), (" ", "SP"), ("다", "NNG")]);
        let classifier = BoundaryClassifier::default();
        assert!(classifier.check_split_end(chain.cursor(2)).exception);

        let chain = chain_with_double_dash();
        assert!(!classifier.check_split_end(chain.cursor(2)).end);
    }

    fn chain_with_double_dash() -> SyllableChain {
        chain(&[(".", "SF"), (" ", "SP"), ("-", "SY"), ("-", "SY"), ("다", "NNG")])
    }

    #[test]
    fn test_right_now_is_pilcrow() {
        let chain = chain(&[("¶", "PF"), ("가", "NNG")]);
        let classifier = BoundaryClassifier::default();
        assert!(classifier.check_split_right_now(chain.cursor(0)));
        assert!(!classifier.check_split_right_now(chain.cursor(1)));
    }
}
