//! Stop filter implementation.
//!
//! Removes stopwords from the token stream. Matching is against the surface
//! form, exact and case-sensitive. Ships a default Korean stopword list;
//! custom lists are supplied per corpus.
//!
//! # Examples
//!
//! ```
//! use winnower::analysis::token::Token;
//! use winnower::analysis::token_filter::{Filter, StopFilter};
//!
//! let filter = StopFilter::from_words(["하다", "되다"]);
//! let tokens = vec![
//!     Token::new("추천", "NNG", 0),
//!     Token::new("하다", "VV", 1),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "추천");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default Korean stop words list.
///
/// High-frequency function-adjacent words that survive POS filtering but
/// rarely carry meaning for topic or sentiment analysis.
const DEFAULT_KOREAN_STOP_WORDS: &[&str] = &[
    "있다", "없다", "되다", "하다", "그", "저", "이", "것", "등", "및", "수", "때", "년", "월",
    "일", "더", "또", "즉", "통해", "위해",
];

/// Default Korean stop words as a HashSet.
pub static DEFAULT_KOREAN_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_KOREAN_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default Korean stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_KOREAN_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(|s| s.into()).collect())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens.filter(|t| !self.is_stop_word(&t.text)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(["하다", "있다"]);
        let tokens = vec![
            Token::new("제품", "NNG", 0),
            Token::new("하다", "VV", 1),
            Token::new("추천", "NNG", 2),
            Token::new("있다", "VV", 3),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "제품");
        assert_eq!(result[1].text, "추천");
    }

    #[test]
    fn test_default_korean_list() {
        let filter = StopFilter::new();
        assert_eq!(filter.len(), 20);
        assert!(filter.is_stop_word("통해"));
        assert!(!filter.is_stop_word("제품"));
    }

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        let filter = StopFilter::from_words(["The"]);
        assert!(filter.is_stop_word("The"));
        assert!(!filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("Theater"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
