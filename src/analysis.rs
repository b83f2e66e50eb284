//! Text analysis: normalization, tokenization, and token filtering.
//!
//! This module holds the per-document half of the preprocessing pipeline.
//! Raw text flows through a [`normalizer::TextNormalizer`], a pluggable
//! [`tokenizer::Tokenizer`], and a chain of [`token_filter::Filter`]s, all
//! composed by [`analyzer::TokenAnalyzer`]:
//!
//! ```text
//! Raw Text → TextNormalizer → Tokenizer → Filter 1 → ... → Filter N
//! ```
//!
//! Corpus-wide document-frequency pruning lives in [`crate::prune`]; it runs
//! after every document has been analyzed.

pub mod analyzer;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
