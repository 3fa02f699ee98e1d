//! Split options

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Default cap on realignment recursion.
pub const DEFAULT_MAX_REALIGN_DEPTH: usize = 10;

/// Default syllable count above which realignment is skipped.
pub const DEFAULT_REALIGN_LENGTH_LIMIT: usize = 10_000;

/// Switches for the boundary-start rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleToggles {
    /// `.`, `!`, `?` followed by space or symbols
    pub final_punctuation: bool,
    /// Sentence-final endings (`EF`)
    pub final_ending: bool,
    /// `다` tagged as a connective ending
    pub connective_ending: bool,
    /// Nominalizing endings used sentence-finally (`ETN`)
    pub nominal_ending: bool,
    /// Adnominal endings used sentence-finally (`ETM`)
    pub adnominal_ending: bool,
    /// The dependent noun `듯` before jamo or emoji
    pub lexical: bool,
}

impl Default for RuleToggles {
    fn default() -> Self {
        Self::all()
    }
}

impl RuleToggles {
    /// Every family on; used with a morpheme analyzer.
    pub fn all() -> Self {
        Self {
            final_punctuation: true,
            final_ending: true,
            connective_ending: true,
            nominal_ending: true,
            adnominal_ending: true,
            lexical: true,
        }
    }

    /// Punctuation only; used with the character-level analyzer, whose tags
    /// carry no morphology.
    pub fn punctuation_only() -> Self {
        Self {
            final_punctuation: true,
            final_ending: false,
            connective_ending: false,
            nominal_ending: false,
            adnominal_ending: false,
            lexical: false,
        }
    }
}

/// Options for one split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Enabled rule families
    pub rules: RuleToggles,
    /// Trim whitespace from both ends of every sentence
    pub strip: bool,
    /// Maximum realignment recursion depth; 0 disables realignment
    pub max_realign_depth: usize,
    /// Longest syllable sequence that is still realigned
    pub realign_length_limit: usize,
    /// Substrings that are never split inside
    pub ignores: Vec<String>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            rules: RuleToggles::all(),
            strip: true,
            max_realign_depth: DEFAULT_MAX_REALIGN_DEPTH,
            realign_length_limit: DEFAULT_REALIGN_LENGTH_LIMIT,
            ignores: Vec::new(),
        }
    }
}

impl SplitOptions {
    /// Reject options that cannot drive a split.
    pub fn validate(&self) -> Result<()> {
        if self.realign_length_limit == 0 {
            return Err(CoreError::InvalidOptions(
                "realign_length_limit must be greater than 0".to_string(),
            ));
        }
        if let Some(position) = self.ignores.iter().position(|s| s.is_empty()) {
            return Err(CoreError::InvalidOptions(format!(
                "ignores[{position}] is empty"
            )));
        }
        Ok(())
    }
}
