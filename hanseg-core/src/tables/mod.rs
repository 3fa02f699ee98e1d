//! Static character and lexicon tables
//!
//! Everything the classifier consults that is data rather than logic lives
//! here, so the rule modules read as guard chains over named sets.

pub mod fast;
pub mod lexicon;
pub mod symbols;

pub use symbols::{
    bracket_close_for, bracket_open_for, is_bracket_close, is_bracket_open, is_dagger, is_emoji,
    is_jamo, is_raw_whitespace, is_space, is_split_symbol, is_suffix_symbol, quote_close_for,
    quote_open_for, FACES,
};
