//! Character classes used by the syllable preprocessor and postprocessor

/// Bracket pairs, opening then closing.
pub const BRACKETS: &[(char, char)] = &[
    ('(', ')'),
    ('（', '）'),
    ('〈', '〉'),
    ('<', '>'),
    ('《', '》'),
    ('[', ']'),
    ('［', '］'),
    ('〔', '〕'),
    ('【', '】'),
    ('{', '}'),
    ('｛', '｝'),
    ('「', '」'),
    ('『', '』'),
];

/// Directional quote pairs. Plain quotes are non-directional and handled by
/// the embracing processor instead.
pub const DIRECTIONAL_QUOTES: &[(char, char)] = &[('‘', '’'), ('“', '”')];

/// Quote marks whose direction cannot be told from the glyph.
pub const NON_DIRECTIONAL_QUOTES: &[char] = &['`', '\'', '"', '″'];

/// Symbols that force a boundary or stand on their own (`PF`).
const SPLIT_SYMBOLS: &str = "§※○●◎◇◆□■△▲▽▼→←↑↓↔◁◀▷▶♤♠♧♣⊙◈▣◐◑▒▤▥▨▧▦▩♨☏☎☜☞¶†‡↕↗↙↖↘㉿㈜№㏇㏂㏘℡ª*";

/// Footnote-style dagger marks.
const DAGGERS: &[char] = &['†', '‡'];

/// Decorations that trail a sentence like an emoji does.
const SUFFIX_SYMBOLS: &[char] = &['♡', '♥', '❤', '☆', '★', '♪', '♫', '♬'];

/// Emoticon faces masked before analysis.
pub const FACES: &[&str] = &[
    ":)", ":(", ":'(", "O:)", "&)", ">:(", "3:)", "<(\")", ":-)", ":-(", "◡̈",
];

/// Returns true for boundary-forcing symbols.
pub fn is_split_symbol(c: char) -> bool {
    SPLIT_SYMBOLS.contains(c)
}

/// Returns true for dagger marks.
pub fn is_dagger(c: char) -> bool {
    DAGGERS.contains(&c)
}

/// Returns true for trailing decoration symbols.
pub fn is_suffix_symbol(c: char) -> bool {
    SUFFIX_SYMBOLS.contains(&c)
}

/// Returns true for opening brackets.
pub fn is_bracket_open(c: char) -> bool {
    BRACKETS.iter().any(|&(open, _)| open == c)
}

/// Returns true for closing brackets.
pub fn is_bracket_close(c: char) -> bool {
    BRACKETS.iter().any(|&(_, close)| close == c)
}

/// Closing counterpart of an opening bracket.
pub fn bracket_close_for(open: char) -> Option<char> {
    BRACKETS.iter().find(|&&(o, _)| o == open).map(|&(_, c)| c)
}

/// Opening counterpart of a closing bracket.
pub fn bracket_open_for(close: char) -> Option<char> {
    BRACKETS.iter().find(|&&(_, c)| c == close).map(|&(o, _)| o)
}

/// Closing counterpart of a directional opening quote.
pub fn quote_close_for(open: char) -> Option<char> {
    DIRECTIONAL_QUOTES
        .iter()
        .find(|&&(o, _)| o == open)
        .map(|&(_, c)| c)
}

/// Opening counterpart of a directional closing quote.
pub fn quote_open_for(close: char) -> Option<char> {
    DIRECTIONAL_QUOTES
        .iter()
        .find(|&&(_, c)| c == close)
        .map(|&(o, _)| o)
}

/// Hangul compatibility jamo (ㄱ..ㆎ), used for laughter and emoticon runs.
pub fn is_jamo(c: char) -> bool {
    ('\u{3131}'..='\u{318E}').contains(&c)
}

/// Pictographic emoji blocks.
pub fn is_emoji(c: char) -> bool {
    matches!(c,
        '\u{1F000}'..='\u{1FAFF}'
        | '\u{2600}'..='\u{27BF}'
        | '\u{FE0F}'
        | '\u{200D}'
    )
}

/// Whitespace as the preprocessor sees it.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{200B}' | '\u{FEFF}')
}

/// Whitespace other than the plain space: newlines, tabs and friends.
pub fn is_raw_whitespace(c: char) -> bool {
    c != ' ' && is_space(c)
}
