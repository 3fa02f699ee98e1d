//! Splitter configuration

use crate::{
    error::{EngineError, Result},
    factory::Backend,
};
use hanseg_core::{
    options::{DEFAULT_MAX_REALIGN_DEPTH, DEFAULT_REALIGN_LENGTH_LIMIT},
    RuleToggles, SplitOptions,
};
use serde::{Deserialize, Serialize};

/// Default number of memoized texts per splitter
pub const DEFAULT_CACHE_CAPACITY: usize = 500;

/// Everything a [`SentenceSplitter`](crate::SentenceSplitter) is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Analyzer backend selector
    pub backend: Backend,
    /// Trim whitespace from both ends of every sentence
    pub strip: bool,
    /// Worker threads for batches (None = one per CPU)
    pub num_workers: Option<usize>,
    /// Memoized texts; 0 disables the cache
    pub cache_capacity: usize,
    /// Apply NFC normalization before splitting
    pub normalize: bool,
    /// Substrings that are never split inside
    pub ignores: Vec<String>,
    /// Rule families; None picks them from the backend
    pub rules: Option<RuleToggles>,
    /// Maximum realignment recursion depth
    pub max_realign_depth: usize,
    /// Longest syllable sequence that is still realigned
    pub realign_length_limit: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Auto,
            strip: true,
            num_workers: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            normalize: true,
            ignores: Vec::new(),
            rules: None,
            max_realign_depth: DEFAULT_MAX_REALIGN_DEPTH,
            realign_length_limit: DEFAULT_REALIGN_LENGTH_LIMIT,
        }
    }
}

impl SplitterConfig {
    /// Reject values that cannot drive a splitter.
    pub fn validate(&self) -> Result<()> {
        if self.num_workers == Some(0) {
            return Err(EngineError::invalid_parameter(
                "num_workers",
                0,
                "a positive integer, or none for one worker per CPU",
            ));
        }
        self.split_options(self.backend).validate()?;
        Ok(())
    }

    /// Worker count after resolving `None`
    pub fn effective_workers(&self) -> usize {
        match self.num_workers {
            Some(n) => n,
            None => default_workers(),
        }
    }

    /// Core options for a resolved backend.
    ///
    /// Without explicit rules, the character-level backends only split on
    /// final punctuation since their tags carry no morphology.
    pub fn split_options(&self, backend: Backend) -> SplitOptions {
        let rules = self.rules.unwrap_or(match backend {
            Backend::Punct | Backend::Fast => RuleToggles::punctuation_only(),
            Backend::Auto | Backend::Mecab | Backend::Pecab => RuleToggles::all(),
        });
        SplitOptions {
            rules,
            strip: self.strip,
            max_realign_depth: self.max_realign_depth,
            realign_length_limit: self.realign_length_limit,
            ignores: self.ignores.clone(),
        }
    }
}

#[cfg(feature = "parallel")]
fn default_workers() -> usize {
    num_cpus::get().max(1)
}

#[cfg(not(feature = "parallel"))]
fn default_workers() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SplitterConfig::default();
        assert_eq!(config.cache_capacity, 500);
        assert!(config.normalize);
        assert!(config.validate().is_ok());
        assert!(config.effective_workers() >= 1);
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = SplitterConfig {
            num_workers: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidParameterValue { ref parameter, .. }) if parameter == "num_workers"
        ));
    }

    #[test]
    fn test_core_validation_propagates() {
        let config = SplitterConfig {
            ignores: vec![String::new()],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::Core(_))));
    }

    #[test]
    fn test_rules_follow_backend() {
        let config = SplitterConfig::default();
        assert_eq!(
            config.split_options(Backend::Punct).rules,
            RuleToggles::punctuation_only()
        );
        assert_eq!(config.split_options(Backend::Mecab).rules, RuleToggles::all());

        let config = SplitterConfig {
            rules: Some(RuleToggles::all()),
            ..Default::default()
        };
        assert_eq!(config.split_options(Backend::Punct).rules, RuleToggles::all());
    }

    #[test]
    fn test_deserializes_partial_json() {
        let config: SplitterConfig =
            serde_json::from_str(r#"{"backend": "fast", "num_workers": 2}"#).unwrap();
        assert_eq!(config.backend, Backend::Fast);
        assert_eq!(config.num_workers, Some(2));
        assert!(config.strip);
    }
}
