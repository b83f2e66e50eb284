//! Whitespace tokenizer with script-class tagging.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace and tags each token with a
/// coarse script class.
///
/// The tags (`NUM`, `HANGUL`, `CJK`, `ALPHANUM`, `PUNCT`, `OTHER`) stand in
/// for the part-of-speech labels a morphological analyzer would produce.
/// They are useful for pre-segmented corpora and for exercising the pipeline
/// without an external tagger; category-based filtering works the same way
/// against either vocabulary.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Classify a word by its dominant script.
    fn classify(word: &str) -> &'static str {
        if word.is_empty() {
            return "OTHER";
        }

        if word.chars().all(|c| c.is_ascii_digit()) {
            return "NUM";
        }

        if word
            .chars()
            .any(|c| matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' | '\u{3131}'..='\u{3163}'))
        {
            return "HANGUL";
        }

        // CJK Unified Ideographs plus Extension A
        if word
            .chars()
            .any(|c| matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}'))
        {
            return "CJK";
        }

        if word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return "ALPHANUM";
        }

        if word.chars().all(|c| c.is_ascii_punctuation()) {
            return "PUNCT";
        }

        "OTHER"
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| Token::new(word, Self::classify(word), position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_script_tags() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer
            .tokenize("제품 good 2024 漢字 ...")
            .unwrap()
            .collect();

        let tags: Vec<_> = tokens.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, vec!["HANGUL", "ALPHANUM", "NUM", "CJK", "PUNCT"]);
    }

    #[test]
    fn test_mixed_hangul_wins() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("1등급").unwrap().collect();

        assert_eq!(tokens[0].tag, "HANGUL");
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
