//! Temporary masking of substrings the splitter must not see
//!
//! URLs, e-mail addresses, emoticon faces, apostrophes inside Latin words and
//! caller-supplied strings all contain characters the classifier would read as
//! punctuation or quotes. They are swapped for digit placeholders before
//! analysis and swapped back in every rendered sentence.

use std::sync::OnceLock;

use regex::Regex;

use crate::tables::FACES;

/// Patterns whose whole match is masked.
const WHOLE_PATTERNS: &[&str] = &[
    r#"(?i)\b(?:https?|ftp)://[^\s<>"'“”‘’]*[^\s<>"'“”‘’.,!?;:)\]}]"#,
    r"(?i)\bwww\.[^\s<>]*[^\s<>.,!?;:)\]}'\x22]",
    r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}",
    r"[A-Za-z0-9]+['’][A-Za-z]+",
];

/// Patterns whose first group is masked: a short Latin or numeric prefix
/// carrying a trailing apostrophe (`S'데이`, `5' 정도`). The prefix must not
/// follow a quote, so `'A'등급` keeps both quotes.
const PREFIX_PATTERNS: &[&str] = &[r#"(?:^|[\s"“(\[])([A-Za-z0-9]{1,4}['’])(?:\p{Hangul}|\s|$)"#];

fn compiled(patterns: &'static [&'static str], cell: &'static OnceLock<Vec<Regex>>) -> &'static [Regex] {
    cell.get_or_init(|| {
        patterns
            .iter()
            .filter_map(|p| match Regex::new(p) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    tracing::error!(pattern = *p, error = %e, "masking pattern does not compile");
                    None
                }
            })
            .collect()
    })
}

fn whole_patterns() -> &'static [Regex] {
    static CELL: OnceLock<Vec<Regex>> = OnceLock::new();
    compiled(WHOLE_PATTERNS, &CELL)
}

fn prefix_patterns() -> &'static [Regex] {
    static CELL: OnceLock<Vec<Regex>> = OnceLock::new();
    compiled(PREFIX_PATTERNS, &CELL)
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(bytes: &[u8], salt: u64) -> u64 {
    bytes
        .iter()
        .fold(FNV_OFFSET ^ salt, |hash, &b| (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}

/// Per-text substitution table.
#[derive(Debug, Clone, Default)]
pub struct BackupMap {
    ignores: Vec<String>,
    // (placeholder, original) in masking order
    entries: Vec<(String, String)>,
}

impl BackupMap {
    /// Empty map with no caller-supplied strings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map that also masks each of `ignores`.
    pub fn with_ignores<I, S>(ignores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignores: ignores
                .into_iter()
                .map(Into::into)
                .filter(|s| !s.is_empty())
                .collect(),
            entries: Vec::new(),
        }
    }

    /// Number of masked strings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was masked
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every maskable substring of `text` with a placeholder.
    pub fn mask(&mut self, text: &str) -> String {
        let mut keys: Vec<String> = Vec::new();
        let mut add = |key: &str| {
            if !key.is_empty() && !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        };

        for face in FACES {
            if text.contains(face) {
                add(face);
            }
        }
        for ignore in &self.ignores {
            if text.contains(ignore.as_str()) {
                add(ignore);
            }
        }
        for regex in whole_patterns() {
            for m in regex.find_iter(text) {
                add(m.as_str());
            }
        }
        for regex in prefix_patterns() {
            for caps in regex.captures_iter(text) {
                if let Some(m) = caps.get(1) {
                    add(m.as_str());
                }
            }
        }

        // Longer keys first so a key never splits a longer one.
        keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let mut masked = text.to_string();
        for key in keys {
            if !masked.contains(key.as_str()) {
                continue;
            }
            let placeholder = self.placeholder_for(&key, &masked);
            masked = masked.replace(key.as_str(), &placeholder);
            self.entries.push((placeholder, key));
        }
        masked
    }

    fn placeholder_for(&self, key: &str, text: &str) -> String {
        let mut salt = 0u64;
        loop {
            let candidate = fnv1a(key.as_bytes(), salt).to_string();
            let taken = text.contains(candidate.as_str())
                || self.entries.iter().any(|(p, _)| p.contains(candidate.as_str()) || candidate.contains(p.as_str()));
            if !taken {
                return candidate;
            }
            salt += 1;
        }
    }

    /// Put the original strings back.
    pub fn restore(&self, text: &str) -> String {
        self.entries
            .iter()
            .rev()
            .fold(text.to_string(), |acc, (placeholder, original)| {
                acc.replace(placeholder.as_str(), original)
            })
    }
}
