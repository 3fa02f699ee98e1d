//! Quote balance tracking during the forward scan

use smallvec::SmallVec;

/// Quote family with its own stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteFamily {
    /// `'` and `` ` `` (also `‘’` for index tracking)
    Single,
    /// `"` and `″` (also `“”` for index tracking)
    Double,
}

impl QuoteFamily {
    /// Family whose stack `c` drives.
    fn driven_by(c: char) -> Option<Self> {
        match c {
            '\'' | '`' => Some(Self::Single),
            '"' | '″' => Some(Self::Double),
            _ => None,
        }
    }

    /// Family whose last-seen position `c` updates.
    fn member(c: char) -> Option<Self> {
        match c {
            '\'' | '`' | '‘' | '’' => Some(Self::Single),
            '"' | '″' | '“' | '”' => Some(Self::Double),
            _ => None,
        }
    }
}

/// Where realignment restarts for an unbalanced family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Which family is unbalanced
    pub family: QuoteFamily,
    /// Position of its last quote in the scanned sequence
    pub index: usize,
    /// Sentence that was open when that quote was seen
    pub sentence_index: usize,
}

#[derive(Debug, Clone, Default)]
struct FamilyState {
    stack: SmallVec<[char; 4]>,
    index: usize,
    sentence_index: usize,
}

impl FamilyState {
    fn record(&mut self, index: usize, sentence_index: usize) {
        self.index = index;
        self.sentence_index = sentence_index;
    }

    // Non-directional quotes close themselves.
    fn push_or_pop(&mut self, c: char) {
        if self.stack.last() == Some(&c) {
            self.stack.pop();
        } else {
            self.stack.push(c);
        }
    }
}

/// Two quote stacks plus the last position seen for each.
#[derive(Debug, Clone, Default)]
pub struct EmbracingProcessor {
    single: FamilyState,
    double: FamilyState,
}

impl EmbracingProcessor {
    /// Fresh processor with empty stacks.
    pub fn new() -> Self {
        Self::default()
    }

    fn state_mut(&mut self, family: QuoteFamily) -> &mut FamilyState {
        match family {
            QuoteFamily::Single => &mut self.single,
            QuoteFamily::Double => &mut self.double,
        }
    }

    /// True when no quote is open in either family.
    pub fn is_empty(&self) -> bool {
        self.single.stack.is_empty() && self.double.stack.is_empty()
    }

    /// Net open quotes in `family`.
    pub fn depth(&self, family: QuoteFamily) -> usize {
        match family {
            QuoteFamily::Single => self.single.stack.len(),
            QuoteFamily::Double => self.double.stack.len(),
        }
    }

    /// Push or pop for a non-directional quote at `index`.
    pub fn process(&mut self, index: usize, sentence_index: usize, c: char) {
        if let Some(family) = QuoteFamily::driven_by(c) {
            let state = self.state_mut(family);
            state.record(index, sentence_index);
            state.push_or_pop(c);
        }
    }

    /// Record the position of any quote of either family.
    pub fn update_index(&mut self, index: usize, sentence_index: usize, c: char) {
        if let Some(family) = QuoteFamily::member(c) {
            self.state_mut(family).record(index, sentence_index);
        }
    }

    /// The family to realign, single before double.
    pub fn unbalanced(&self) -> Option<Anchor> {
        [
            (QuoteFamily::Single, &self.single),
            (QuoteFamily::Double, &self.double),
        ]
        .into_iter()
        .find(|(_, state)| !state.stack.is_empty())
        .map(|(family, state)| Anchor {
            family,
            index: state.index,
            sentence_index: state.sentence_index,
        })
    }
}
