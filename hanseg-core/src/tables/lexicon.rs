//! Lexical n-gram tables consulted by the boundary rules

/// Continuations that glue the next word to the current ending, so no
/// boundary may be placed before them. Matched character by character from
/// the next non-space syllable; some entries end in a space on purpose.
pub const UNAVAILABLE_NEXT: &[&str] = &[
    "시피",
    "거나",
    "의 ",
    "에서",
    "에선",
    "에는",
    "에도 ",
    "라서",
    "라는",
    "라도 ",
    "라던",
    "라지만",
    "라고",
    "라건",
    "라거나",
    "라며",
    "라면서",
    "하여서",
    "하여도",
    "하였",
    "하고는 ",
    "하고서 ",
    "하곤 ",
    "하다는",
    "하는데.",
    "하며",
    "할텐데",
];

/// Citation abbreviations that end in a period without ending a sentence.
/// Each entry is matched against the characters right before the period.
pub const PAPER_ABBREVIATIONS: &[&str] = &[
    " no", " No", " vol", " p", " pp", " page", " al", " ed", " eds", " 항", " 조", " 호",
    " 절", " 권", " 쪽",
];

/// Bracketed words that mark an editorial footnote, closing bracket included.
pub const FOOTNOTE_WORDS: &[&str] = &["편집]", "원본 편집]", "더 보기]", "스포일러]"];

/// Footnote prefix followed by a reference number.
pub const FOOTNOTE_REFERENCE: &str = "참고 ";

/// Word that turns a bracketed marker into a UI label rather than a footnote.
pub const BUTTON_WORD: &str = "버튼";

/// Characters that close a sentence rather than start the next one; the fast
/// splitter never cuts in front of them.
pub const NOT_ENDPOINT: &[char] = &[
    ',', ')', ']', '}', '）', '］', '｝', '〉', '》', '」', '』', '】', '〕', '\'', '"', '’', '”',
    '″', '`',
];
