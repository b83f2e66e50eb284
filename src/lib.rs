//! # Winnower
//!
//! A document preprocessing pipeline for text analysis. Raw free-text
//! records go in; cleaned, tokenized, vocabulary-pruned strings come out,
//! ready for topic modeling, sentiment scoring, or word-frequency
//! visualization.
//!
//! ## Features
//!
//! - Normalization: strips URLs, emails, mentions, and non-linguistic symbols
//! - Pluggable tokenization behind a trait (bring your own morphological analyzer)
//! - Token filtering by grammatical category, stopword list, length, and digit content
//! - Corpus-wide document-frequency pruning with an explicit two-pass contract
//! - Parallel per-document processing with order-stable output
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use winnower::analysis::tokenizer::WhitespaceTokenizer;
//! use winnower::corpus::Corpus;
//! use winnower::pipeline::{Pipeline, PipelineConfig};
//!
//! let config = PipelineConfig {
//!     allowed_tags: ["HANGUL"].into_iter().map(String::from).collect(),
//!     ..PipelineConfig::default()
//! };
//! let pipeline = Pipeline::new(config, Arc::new(WhitespaceTokenizer::new()))?;
//!
//! let corpus = Corpus::from_texts(["배송이 빨라요! http://shop.kr 추천해요"]);
//! let output = pipeline.run(&corpus)?;
//!
//! assert_eq!(output.texts, vec!["배송이 빨라요 추천해요"]);
//! # Ok::<(), winnower::error::WinnowerError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod pipeline;
pub mod prune;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
