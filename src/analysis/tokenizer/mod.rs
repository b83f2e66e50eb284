//! Tokenizer implementations for text analysis.
//!
//! Tokenization is a pluggable capability: the pipeline consumes anything
//! implementing [`Tokenizer`] and is agnostic to the tag vocabulary it
//! emits. Real morphological analyzers (kiwi, lindera with ko-dic, and the
//! like) slot in behind this trait; the built-in
//! [`whitespace::WhitespaceTokenizer`] covers pre-segmented corpora and
//! testing.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tagged tokens.
///
/// The `Send + Sync` bound is load-bearing: documents are tokenized from a
/// worker pool, so one tokenizer instance must be safely shareable across
/// concurrent calls. Output must be deterministic for identical input within
/// a pipeline run. A returned error counts against the single document being
/// tokenized, never the whole run.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
