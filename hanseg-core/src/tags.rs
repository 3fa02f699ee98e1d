//! Tag names and tag groups shared by the rules
//!
//! Tags are matched by substring, so `J` covers `JKS`, `JX` and the
//! attached `+J...` forms unless those are excluded explicitly.

/// Space
pub const SP: &str = "SP";
/// Sentence-final punctuation
pub const SF: &str = "SF";
/// Comma, colon, slash
pub const SC: &str = "SC";
/// Other symbol
pub const SY: &str = "SY";
/// Ellipsis
pub const SE: &str = "SE";
/// Opening bracket
pub const SSO: &str = "SSO";
/// Closing bracket
pub const SSC: &str = "SSC";
/// Opening directional quote
pub const QTO: &str = "QTO";
/// Closing directional quote
pub const QTC: &str = "QTC";
/// Non-directional quote
pub const QTN: &str = "QTN";
/// Emoji and trailing decoration
pub const EMOJI: &str = "EMOJI";
/// Compatibility jamo
pub const JAMO: &str = "JAMO";
/// Boundary-forcing symbol
pub const PF: &str = "PF";
/// Tag given by the character-level analyzer
pub const UNTAGGED: &str = "-";

/// Everything that may trail a boundary without starting a new sentence.
pub const CONTINUATION: &[&str] = &[SP, SF, SY, SE, SSC, QTC, QTN, EMOJI, JAMO];

/// Continuation set used by the end check; plain quotes end the span.
pub const CONTINUATION_WITHOUT_QTN: &[&str] = &[SP, SF, SY, SE, SSC, QTC, EMOJI, JAMO];

/// Vetoes for the continuation sets.
pub const CONTINUATION_EXCLUDE: &[&str] = &[QTO];

/// Space and final punctuation, skipped together by several guards.
pub const SPACE_OR_FINAL: &[&str] = &[SP, SF];

/// Tags a symbol-only sentence consists of.
pub const SYMBOL_ONLY: &[&str] = &[SP, SF, SY, SE, SC, SSO, SSC, QTO, QTC, QTN, EMOJI, JAMO];

/// Shorthand for an empty exclude list.
pub const NONE: &[&str] = &[];
