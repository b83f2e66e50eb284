//! Minimum token length filter.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that drops tokens shorter than a minimum number of characters.
///
/// Length is measured in characters, not bytes: a two-syllable Hangul form
/// is six bytes long but two characters, and it is the character count the
/// threshold is meant for.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_chars: usize,
}

impl LengthFilter {
    /// Create a new filter dropping tokens shorter than `min_chars`.
    pub fn new(min_chars: usize) -> Self {
        LengthFilter { min_chars }
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_chars = self.min_chars;
        let kept: Vec<Token> = tokens.filter(|t| t.char_len() >= min_chars).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
