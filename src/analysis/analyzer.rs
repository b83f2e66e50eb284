//! Per-document analysis chain.
//!
//! [`TokenAnalyzer`] combines the normalizer, a tokenizer, and a chain of
//! token filters into the single-pass stage the pipeline runs once per
//! document:
//!
//! 1. Normalizer: strips URLs/emails/mentions/symbols from the raw text
//! 2. Tokenizer: splits the cleaned text into tagged tokens
//! 3. Token filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use winnower::analysis::analyzer::TokenAnalyzer;
//! use winnower::analysis::token_filter::{LengthFilter, PosFilter};
//! use winnower::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = TokenAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .unwrap()
//!     .add_filter(Arc::new(PosFilter::from_tags(["HANGUL"])))
//!     .add_filter(Arc::new(LengthFilter::new(2)));
//!
//! let forms = analyzer
//!     .analyze_forms(Some("좋은 제품입니다! visit http://x.co"))
//!     .unwrap();
//!
//! assert_eq!(forms, vec!["좋은", "제품입니다"]);
//! ```

use std::sync::Arc;

use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Normalizer → tokenizer → filter chain for one document.
#[derive(Clone)]
pub struct TokenAnalyzer {
    normalizer: TextNormalizer,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl TokenAnalyzer {
    /// Create a new analyzer around the given tokenizer, with the default
    /// normalizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        Ok(TokenAnalyzer {
            normalizer: TextNormalizer::new()?,
            tokenizer,
            filters: Vec::new(),
        })
    }

    /// Replace the normalizer.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Append a filter to the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Run the full chain over one document's raw text.
    ///
    /// Text that normalizes to the empty string short-circuits to an empty
    /// stream without invoking the tokenizer.
    pub fn analyze(&self, raw: Option<&str>) -> Result<TokenStream> {
        let clean = self.normalizer.normalize(raw);
        if clean.is_empty() {
            return Ok(Box::new(std::iter::empty()));
        }

        let mut tokens = self.tokenizer.tokenize(&clean)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    /// Like [`analyze`](Self::analyze), but collects the surviving surface
    /// forms in order.
    pub fn analyze_forms(&self, raw: Option<&str>) -> Result<Vec<String>> {
        Ok(self.analyze(raw)?.map(|token| token.text).collect())
    }
}

impl std::fmt::Debug for TokenAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
