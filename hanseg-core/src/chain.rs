//! Tagged syllable chain
//!
//! The chain stores one node per input character in a flat arena. Neighbour
//! access goes through [`Cursor`], whose position is a [`Link`]: either a
//! node index or the end of the chain. Every query on [`Link::End`] answers
//! `false` (or another `End`), so rule code walks the chain without null
//! checks. A cursor may carry a floor below which `prev` also answers `End`;
//! the segmenter uses it so look-behind never reaches into a sentence that
//! was already cut off.

/// A single character with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// The character
    pub text: char,
    /// Tag inherited from the morpheme, possibly rewritten by preprocessing
    pub tag: String,
}

impl Syllable {
    /// Create a syllable
    pub fn new(text: char, tag: impl Into<String>) -> Self {
        Self {
            text,
            tag: tag.into(),
        }
    }
}

/// Position in a chain: a node or one of the two ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// Before the first or after the last syllable
    End,
    /// Index of a syllable in the chain
    Node(usize),
}

/// Arena of syllables covering one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllableChain {
    syllables: Vec<Syllable>,
}

impl SyllableChain {
    /// Wrap already-tagged syllables.
    pub fn new(syllables: Vec<Syllable>) -> Self {
        Self { syllables }
    }

    /// Expand `morphemes` analysed from `text` into a tagged chain.
    ///
    /// See [`crate::preprocess::build_chain`].
    pub fn from_morphemes(text: &str, morphemes: &[crate::Morpheme]) -> Self {
        crate::preprocess::build_chain(text, morphemes)
    }

    /// Number of syllables
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// Whether the chain holds no syllables
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Syllable at `index`
    pub fn get(&self, index: usize) -> Option<&Syllable> {
        self.syllables.get(index)
    }

    /// All syllables in order
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    /// Indices of every syllable, in order.
    pub fn indices(&self) -> Vec<usize> {
        (0..self.syllables.len()).collect()
    }

    /// Cursor at `index`; out-of-range indices yield an end cursor.
    pub fn cursor(&self, index: usize) -> Cursor<'_> {
        let link = if index < self.syllables.len() {
            Link::Node(index)
        } else {
            Link::End
        };
        Cursor {
            chain: self,
            link,
            floor: 0,
        }
    }

    /// Cursor at `index` that treats `floor` as the first syllable when
    /// moving backwards.
    pub fn cursor_within(&self, index: usize, floor: usize) -> Cursor<'_> {
        Cursor {
            floor: floor.min(index),
            ..self.cursor(index)
        }
    }

    /// Concatenate the characters at `indices`.
    pub fn render(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .filter_map(|&i| self.syllables.get(i))
            .map(|s| s.text)
            .collect()
    }

    pub(crate) fn set_tag(&mut self, index: usize, tag: &str) {
        if let Some(syllable) = self.syllables.get_mut(index) {
            syllable.tag.clear();
            syllable.tag.push_str(tag);
        }
    }
}

/// Read-only view of one position in a [`SyllableChain`].
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    chain: &'a SyllableChain,
    link: Link,
    floor: usize,
}

impl<'a> Cursor<'a> {
    fn at(&self, link: Link) -> Cursor<'a> {
        Cursor {
            chain: self.chain,
            link,
            floor: self.floor,
        }
    }

    /// Current position
    pub fn link(&self) -> Link {
        self.link
    }

    /// Node index, if not at an end
    pub fn index(&self) -> Option<usize> {
        match self.link {
            Link::Node(i) => Some(i),
            Link::End => None,
        }
    }

    /// Whether the cursor is past either end
    pub fn is_end(&self) -> bool {
        self.link == Link::End
    }

    /// Syllable under the cursor
    pub fn syllable(&self) -> Option<&'a Syllable> {
        self.index().and_then(|i| self.chain.get(i))
    }

    /// Character under the cursor
    pub fn text(&self) -> Option<char> {
        self.syllable().map(|s| s.text)
    }

    /// Tag under the cursor; empty at the ends
    pub fn tag(&self) -> &'a str {
        self.syllable().map_or("", |s| s.tag.as_str())
    }

    /// Following syllable
    pub fn next(&self) -> Cursor<'a> {
        match self.link {
            Link::Node(i) if i + 1 < self.chain.len() => self.at(Link::Node(i + 1)),
            _ => self.at(Link::End),
        }
    }

    /// Preceding syllable
    pub fn prev(&self) -> Cursor<'a> {
        match self.link {
            Link::Node(i) if i > self.floor => self.at(Link::Node(i - 1)),
            _ => self.at(Link::End),
        }
    }

    /// True when the tag contains any of `tags` and none of `exclude`.
    pub fn has_tag(&self, tags: &[&str], exclude: &[&str]) -> bool {
        let tag = match self.syllable() {
            Some(s) => s.tag.as_str(),
            None => return false,
        };
        tags.iter().any(|t| tag.contains(t)) && !exclude.iter().any(|e| tag.contains(e))
    }

    /// True when the character equals `c`.
    pub fn is(&self, c: char) -> bool {
        self.text() == Some(c)
    }

    /// True when the character is one of `chars`.
    pub fn is_any(&self, chars: &[char]) -> bool {
        self.text().is_some_and(|c| chars.contains(&c))
    }

    /// First following syllable whose tag does not match.
    pub fn next_skip(&self, tags: &[&str], exclude: &[&str]) -> Cursor<'a> {
        self.next().next_skip_from_current(tags, exclude)
    }

    /// First preceding syllable whose tag does not match.
    pub fn prev_skip(&self, tags: &[&str], exclude: &[&str]) -> Cursor<'a> {
        self.prev().prev_skip_from_current(tags, exclude)
    }

    /// Like [`Cursor::next_skip`] but considers the current syllable too.
    pub fn next_skip_from_current(&self, tags: &[&str], exclude: &[&str]) -> Cursor<'a> {
        let mut cursor = *self;
        while cursor.has_tag(tags, exclude) {
            cursor = cursor.next();
        }
        cursor
    }

    /// Like [`Cursor::prev_skip`] but considers the current syllable too.
    pub fn prev_skip_from_current(&self, tags: &[&str], exclude: &[&str]) -> Cursor<'a> {
        let mut cursor = *self;
        while cursor.has_tag(tags, exclude) {
            cursor = cursor.prev();
        }
        cursor
    }

    /// True when the characters starting here spell `text`.
    pub fn starts_with_texts(&self, text: &str) -> bool {
        if self.is_end() {
            return false;
        }
        let mut cursor = *self;
        for c in text.chars() {
            if !cursor.is(c) {
                return false;
            }
            cursor = cursor.next();
        }
        true
    }

    /// True when the characters immediately before this one spell `text`.
    pub fn ends_before(&self, text: &str) -> bool {
        let mut cursor = *self;
        for _ in text.chars() {
            cursor = cursor.prev();
        }
        cursor.starts_with_texts(text)
    }
}
