//! Token filter implementations for token stream filtering.
//!
//! Filters only ever remove tokens; they never add, rewrite, or reorder
//! them. A document's filtered output is therefore always an in-order
//! subsequence of the tokenizer's output, which downstream positional
//! analysis relies on.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that remove tokens from a stream.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod length;
pub mod numeric;
pub mod pos;
pub mod stop;

// Re-export all filters for convenient access
pub use length::LengthFilter;
pub use numeric::NumericFilter;
pub use pos::PosFilter;
pub use stop::StopFilter;
