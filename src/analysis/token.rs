//! Token types for text analysis.
//!
//! A [`Token`] pairs a surface form with the grammatical category label the
//! tokenizer assigned to it. Category labels come from whatever tag
//! vocabulary the plugged-in tokenizer uses (POS tags such as `NNG`/`NNP`
//! from a morphological analyzer, or the script classes of the built-in
//! whitespace tokenizer); this crate only ever compares them for set
//! membership.
//!
//! # Examples
//!
//! ```
//! use winnower::analysis::token::Token;
//!
//! let token = Token::new("제품", "NNG", 0);
//! assert_eq!(token.text, "제품");
//! assert_eq!(token.tag, "NNG");
//! assert_eq!(token.position, 0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single tokenized unit: surface form, category tag, and stream position.
///
/// `position` is the token's index in the tokenizer's output for one
/// document. Filters remove tokens without renumbering, so surviving tokens
/// keep their original positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form of the token
    pub text: String,

    /// Grammatical category label, opaque to this crate
    pub tag: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>, T: Into<String>>(text: S, tag: T, position: usize) -> Self {
        Token {
            text: text.into(),
            tag: tag.into(),
            position,
        }
    }

    /// Check if the surface form is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Surface form length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
