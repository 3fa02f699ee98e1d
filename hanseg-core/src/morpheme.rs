//! Analyzer output unit

use serde::{Deserialize, Serialize};

/// A surface form with its part-of-speech tag, as produced by a morpheme
/// analyzer. Tags follow the Sejong-style tagset (`EF`, `JKS`, `SF`, ...);
/// compound analyses are joined with `+` (`VV+EP`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Morpheme {
    /// Surface text exactly as it appears in the input
    pub surface: String,
    /// Part-of-speech tag
    pub tag: String,
}

impl Morpheme {
    /// Create a morpheme from surface and tag
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }

    /// One untagged morpheme per character of `text`.
    pub fn per_character(text: &str) -> Vec<Morpheme> {
        text.chars()
            .map(|c| Morpheme::new(c.to_string(), crate::tags::UNTAGGED))
            .collect()
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for Morpheme {
    fn from((surface, tag): (S, T)) -> Self {
        Self::new(surface, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_character() {
        let morphemes = Morpheme::per_character("가 나");
        assert_eq!(morphemes.len(), 3);
        assert_eq!(morphemes[1], Morpheme::new(" ", "-"));
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Morpheme::from(("다", "EF")), Morpheme::new("다", "EF"));
    }
}
