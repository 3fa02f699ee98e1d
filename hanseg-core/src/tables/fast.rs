//! Character transition tables for the morpheme-free splitter
//!
//! Each table maps the character around a candidate ending to a set of
//! flags describing how the characters before and after it behave.

/// Character may precede the ending that opened the state.
pub const PREV: u8 = 1 << 0;
/// Character continues the current sentence (punctuation, jamo).
pub const CONT: u8 = 1 << 1;
/// Character following the ending keeps the sentence going.
pub const NEXT: u8 = 1 << 2;
/// Character may open the next sentence; decision deferred by one syllable.
pub const NEXT1: u8 = 1 << 3;
/// Character two positions on decides the boundary.
pub const NEXT2: u8 = 1 << 4;

/// Scanner states of the fast splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastState {
    /// No candidate ending seen
    Default,
    /// After `다`
    Da,
    /// After `요`
    Yo,
    /// After `죠` / `죵`
    Jyo,
    /// After sentence-final punctuation
    Sb,
}

const DA: &[(char, u8)] = &[
    ('갔', PREV),
    ('간', PREV),
    ('겠', PREV),
    ('겼', PREV),
    ('같', PREV),
    ('놨', PREV),
    ('녔', PREV),
    ('니', PREV),
    ('논', PREV),
    ('낸', PREV),
    ('냈', PREV),
    ('뒀', PREV),
    ('때', PREV),
    ('랐', PREV),
    ('럽', PREV),
    ('렵', PREV),
    ('렸', PREV),
    ('뤘', PREV),
    ('린', PREV),
    ('몄', PREV),
    ('밌', PREV),
    ('볐', PREV),
    ('볍', PREV),
    ('봤', PREV),
    ('섰', PREV),
    ('샜', PREV),
    ('셨', PREV),
    ('싼', PREV),
    ('싸', PREV),
    ('않', PREV),
    ('았', PREV),
    ('없', PREV),
    ('었', PREV),
    ('였', PREV),
    ('온', PREV),
    ('웠', PREV),
    ('이', PREV),
    ('인', PREV),
    ('있', PREV),
    ('진', PREV),
    ('졌', PREV),
    ('쳤', PREV),
    ('췄', PREV),
    ('챘', PREV),
    ('켰', PREV),
    ('켠', PREV),
    ('캔', PREV),
    ('팠', PREV),
    ('펐', PREV),
    ('폈', PREV),
    ('했', PREV),
    ('혔', PREV),
    ('한', NEXT),
    ('가', NEXT),
    ('고', NEXT | NEXT2),
    ('는', NEXT | NEXT2),
    ('라', NEXT),
    ('시', NEXT),
    ('던', NEXT),
    ('든', NEXT),
    ('지', NEXT2),
    ('를', NEXT),
    ('운', NEXT),
    ('만', NEXT),
    ('며', NEXT | NEXT2),
    ('면', NEXT | NEXT1 | NEXT2),
    ('서', PREV | NEXT2),
    ('싶', PREV | NEXT),
    ('죠', NEXT),
    ('죵', NEXT),
    ('쥬', NEXT),
    ('하', NEXT1),
    ('해', NEXT1),
    ('도', NEXT2),
];

const YO: &[(char, u8)] = &[
    ('겨', PREV),
    ('거', PREV),
    ('구', PREV),
    ('군', PREV),
    ('걸', PREV),
    ('까', PREV),
    ('께', PREV),
    ('껴', PREV),
    ('네', PREV),
    ('나', PREV),
    ('니', PREV),
    ('데', PREV),
    ('든', PREV),
    ('려', PREV),
    ('서', PREV),
    ('세', PREV),
    ('아', PREV),
    ('어', PREV),
    ('워', PREV),
    ('에', PREV),
    ('예', PREV),
    ('을', PREV),
    ('져', PREV),
    ('줘', PREV),
    ('지', PREV),
    ('춰', PREV),
    ('해', PREV),
    ('먼', PREV),
    ('만', PREV),
    ('고', NEXT2),
    ('는', NEXT),
    ('라', NEXT1),
    ('를', NEXT),
    ('즘', NEXT),
    ('소', NEXT),
    ('며', NEXT2),
    ('면', PREV | NEXT2),
    ('하', NEXT1),
];

const JYO: &[(char, u8)] = &[
    ('거', PREV),
    ('가', PREV),
    ('갔', PREV),
    ('겠', PREV),
    ('같', PREV),
    ('놨', PREV),
    ('녔', PREV),
    ('냈', PREV),
    ('니', PREV),
    ('뒀', PREV),
    ('르', PREV),
    ('랐', PREV),
    ('럽', PREV),
    ('렵', PREV),
    ('렸', PREV),
    ('맞', PREV),
    ('몄', PREV),
    ('밌', PREV),
    ('볐', PREV),
    ('볍', PREV),
    ('봤', PREV),
    ('서', PREV),
    ('섰', PREV),
    ('셨', PREV),
    ('샜', PREV),
    ('았', PREV),
    ('않', PREV),
    ('없', PREV),
    ('었', PREV),
    ('였', PREV),
    ('이', PREV),
    ('졌', PREV),
    ('쳤', PREV),
    ('챘', PREV),
    ('켰', PREV),
    ('팠', PREV),
    ('폈', PREV),
    ('펐', PREV),
    ('하', PREV),
    ('했', PREV),
    ('혔', PREV),
    ('고', PREV | NEXT2),
    ('는', NEXT),
    ('라', NEXT1),
    ('를', NEXT),
    ('며', NEXT2),
    ('면', PREV | NEXT2),
];

const SB: &[(char, u8)] = &[
    ('것', PREV),
    ('거', PREV),
    ('가', PREV),
    ('까', PREV),
    ('걸', PREV),
    ('껄', PREV),
    ('나', PREV),
    ('니', PREV),
    ('네', PREV),
    ('다', PREV),
    ('도', PREV),
    ('쎄', PREV),
    ('래', PREV),
    ('데', PREV),
    ('지', PREV),
    ('든', PREV),
    ('덩', PREV),
    ('등', PREV),
    ('랴', PREV),
    ('마', PREV),
    ('봐', PREV),
    ('서', PREV),
    ('셈', PREV),
    ('아', PREV),
    ('어', PREV),
    ('오', PREV),
    ('요', PREV),
    ('용', PREV),
    ('을', PREV),
    ('자', PREV),
    ('죠', PREV),
    ('쥬', PREV),
    ('죵', PREV),
    ('고', PREV | NEXT2),
    ('는', NEXT),
    ('라', PREV | NEXT),
    ('며', NEXT2),
    ('면', NEXT2),
    ('하', NEXT1),
];

const COMMON: &[(char, u8)] = &[
    ('ㄱ', CONT),
    ('ㄴ', CONT),
    ('ㄷ', CONT),
    ('ㄹ', CONT),
    ('ㅁ', CONT),
    ('ㅂ', CONT),
    ('ㅅ', CONT),
    ('ㅇ', CONT),
    ('ㅈ', CONT),
    ('ㅊ', CONT),
    ('ㅋ', CONT),
    ('ㅌ', CONT),
    ('ㅍ', CONT),
    ('ㅎ', CONT),
    ('ㅏ', CONT),
    ('ㅑ', CONT),
    ('ㅓ', CONT),
    ('ㅕ', CONT),
    ('ㅗ', CONT),
    ('ㅛ', CONT),
    ('ㅜ', CONT),
    ('ㅠ', CONT),
    ('ㅡ', CONT),
    ('ㅣ', CONT),
    ('^', CONT),
    (';', CONT),
    ('.', CONT),
    ('?', CONT),
    ('!', CONT),
    ('~', CONT),
    ('…', CONT),
];

fn lookup(table: &[(char, u8)], c: Option<char>) -> u8 {
    c.and_then(|c| table.iter().find(|&&(k, _)| k == c).map(|&(_, flags)| flags))
        .unwrap_or(0)
}

impl FastState {
    /// Flags of `c` in this state's table; `Default` has no table.
    pub fn flags(self, c: Option<char>) -> u8 {
        match self {
            FastState::Default => 0,
            FastState::Da => lookup(DA, c),
            FastState::Yo => lookup(YO, c),
            FastState::Jyo => lookup(JYO, c),
            FastState::Sb => lookup(SB, c),
        }
    }

    /// State opened by an ending character, if `prev` allows it.
    pub fn opened_by(c: char, prev: Option<char>) -> Option<FastState> {
        let state = match c {
            '.' | '!' | '?' | '…' | '~' => FastState::Sb,
            '다' => FastState::Da,
            '요' => FastState::Yo,
            '죠' | '죵' => FastState::Jyo,
            _ => return None,
        };
        (state.flags(prev) & PREV != 0).then_some(state)
    }
}

/// Flags of `c` in the shared continuation table.
pub fn common_flags(c: Option<char>) -> u8 {
    lookup(COMMON, c)
}
