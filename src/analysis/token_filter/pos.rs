//! Grammatical category filter.
//!
//! Keeps only tokens whose category tag is in an allow-set. With a
//! morphological tokenizer this is the knob that turns a token stream into
//! "nouns only" or "nouns plus adjectives"; the tags themselves are opaque
//! here.
//!
//! # Examples
//!
//! ```
//! use winnower::analysis::token::Token;
//! use winnower::analysis::token_filter::{Filter, PosFilter};
//!
//! let filter = PosFilter::from_tags(["NNG", "NNP"]);
//! let tokens = vec![
//!     Token::new("제품", "NNG", 0),
//!     Token::new("은", "JX", 1),
//!     Token::new("서울", "NNP", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "제품");
//! assert_eq!(result[1].text, "서울");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps tokens whose category tag is in the allow-set.
///
/// An empty allow-set keeps nothing; the set must name every category the
/// analysis should see.
#[derive(Clone, Debug)]
pub struct PosFilter {
    allowed: Arc<HashSet<String>>,
}

impl PosFilter {
    /// Create a new filter from an allow-set of category tags.
    pub fn new(allowed: HashSet<String>) -> Self {
        PosFilter {
            allowed: Arc::new(allowed),
        }
    }

    /// Create a new filter from a list of category tags.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(tags.into_iter().map(|t| t.into()).collect())
    }

    /// Check if a category tag is allowed through.
    pub fn is_allowed(&self, tag: &str) -> bool {
        self.allowed.contains(tag)
    }
}

impl Filter for PosFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens.filter(|t| self.is_allowed(&t.tag)).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "pos"
    }
}
