//! Corpus pipeline orchestration.
//!
//! [`Pipeline`] drives a whole corpus through two stages:
//!
//! - **Stage 1** — normalize → tokenize → filter, independently per
//!   document, over a worker pool. Completion order is irrelevant; results
//!   are re-associated with their document index, so output order always
//!   equals corpus order.
//! - **Stage 2** — corpus-wide document-frequency pruning. This is a hard
//!   synchronization point: it needs every document's stage-1 output before
//!   it can filter any single one.
//!
//! Per-document failures (a tokenizer rejecting one document) are recorded
//! and the run continues; only an invalid [`PipelineConfig`] fails the whole
//! run, and it does so before any document is touched.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use winnower::corpus::Corpus;
//! use winnower::pipeline::{Pipeline, PipelineConfig};
//! use winnower::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let config = PipelineConfig {
//!     allowed_tags: ["HANGUL"].into_iter().map(String::from).collect(),
//!     ..PipelineConfig::default()
//! };
//! let pipeline = Pipeline::new(config, Arc::new(WhitespaceTokenizer::new())).unwrap();
//!
//! let corpus = Corpus::from_texts(["좋은 제품입니다!", ""]);
//! let output = pipeline.run(&corpus).unwrap();
//!
//! assert_eq!(output.texts, vec!["좋은 제품입니다".to_string(), String::new()]);
//! assert_eq!(output.error_count(), 0);
//! ```

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::TokenAnalyzer;
use crate::analysis::token_filter::stop::DEFAULT_KOREAN_STOP_WORDS_SET;
use crate::analysis::token_filter::{LengthFilter, NumericFilter, PosFilter, StopFilter};
use crate::analysis::tokenizer::Tokenizer;
use crate::corpus::Corpus;
use crate::error::{Result, WinnowerError};
use crate::prune::DocumentFrequencyPruner;

/// Configuration for one pipeline run.
///
/// Validated eagerly by [`Pipeline::new`]; nothing else is tunable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Grammatical category tags to keep. An empty set keeps nothing.
    pub allowed_tags: HashSet<String>,

    /// Surface forms to drop, matched exactly and case-sensitively.
    pub stopwords: HashSet<String>,

    /// Minimum surviving token length in characters.
    pub min_token_length: usize,

    /// Drop tokens consisting entirely of ASCII digits.
    pub exclude_numeric: bool,

    /// Minimum number of documents a form must appear in (≥ 1).
    pub min_doc_frequency: usize,

    /// Maximum proportion of documents a form may appear in, in (0, 1].
    pub max_doc_frequency_ratio: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            allowed_tags: HashSet::new(),
            stopwords: DEFAULT_KOREAN_STOP_WORDS_SET.clone(),
            min_token_length: 2,
            exclude_numeric: true,
            min_doc_frequency: 1,
            max_doc_frequency_ratio: 1.0,
        }
    }
}

impl PipelineConfig {
    /// Validate the frequency band bounds.
    pub fn validate(&self) -> Result<()> {
        if self.min_doc_frequency < 1 {
            return Err(WinnowerError::config(format!(
                "min_doc_frequency must be at least 1, got {}",
                self.min_doc_frequency
            )));
        }
        if !(self.max_doc_frequency_ratio > 0.0 && self.max_doc_frequency_ratio <= 1.0) {
            return Err(WinnowerError::config(format!(
                "max_doc_frequency_ratio must be in (0, 1], got {}",
                self.max_doc_frequency_ratio
            )));
        }
        Ok(())
    }
}

/// The result of one pipeline run.
///
/// `texts[i]` and `errors[i]` both belong to document `i` of the input
/// corpus. A document that failed has an empty output string and its error
/// recorded.
#[derive(Debug)]
pub struct PipelineOutput {
    /// One processed string per input document, in corpus order.
    pub texts: Vec<String>,

    /// Per-document errors, aligned with `texts`.
    pub errors: Vec<Option<WinnowerError>>,
}

impl PipelineOutput {
    /// Number of documents that failed.
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_some()).count()
    }
}

/// Two-stage corpus preprocessing pipeline.
pub struct Pipeline {
    analyzer: TokenAnalyzer,
    pruner: DocumentFrequencyPruner,
    pool: rayon::ThreadPool,
}

impl Pipeline {
    /// Create a pipeline with one worker per available core.
    pub fn new(config: PipelineConfig, tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        Self::with_thread_count(config, tokenizer, num_cpus::get())
    }

    /// Create a pipeline with an explicit worker count.
    pub fn with_thread_count(
        config: PipelineConfig,
        tokenizer: Arc<dyn Tokenizer>,
        threads: usize,
    ) -> Result<Self> {
        config.validate()?;

        let mut analyzer = TokenAnalyzer::new(tokenizer)?
            .add_filter(Arc::new(PosFilter::new(config.allowed_tags.clone())))
            .add_filter(Arc::new(StopFilter::with_stop_words(
                config.stopwords.clone(),
            )))
            .add_filter(Arc::new(LengthFilter::new(config.min_token_length)));
        if config.exclude_numeric {
            analyzer = analyzer.add_filter(Arc::new(NumericFilter::new()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| WinnowerError::other(format!("failed to build thread pool: {e}")))?;

        Ok(Pipeline {
            analyzer,
            pruner: DocumentFrequencyPruner::new(
                config.min_doc_frequency,
                config.max_doc_frequency_ratio,
            ),
            pool,
        })
    }

    /// Run the pipeline over a corpus.
    pub fn run(&self, corpus: &Corpus) -> Result<PipelineOutput> {
        self.execute(corpus, None)
    }

    /// Run the pipeline, checking `cancel` between documents in stage 1 and
    /// between the two pruning passes of stage 2.
    ///
    /// Cancellation is all-or-nothing at the corpus level: a cancelled run
    /// returns [`WinnowerError::OperationCancelled`] and emits no partial
    /// output.
    pub fn run_with_cancellation(
        &self,
        corpus: &Corpus,
        cancel: &AtomicBool,
    ) -> Result<PipelineOutput> {
        self.execute(corpus, Some(cancel))
    }

    /// Stage 1 only: per-document token sequences plus per-document errors,
    /// both in corpus order. A failed document contributes an empty
    /// sequence, which also keeps it out of pass-1 statistics downstream.
    pub fn analyze_documents(
        &self,
        corpus: &Corpus,
    ) -> (Vec<Vec<String>>, Vec<Option<WinnowerError>>) {
        self.pool.install(|| self.stage_one(corpus, None))
    }

    fn execute(&self, corpus: &Corpus, cancel: Option<&AtomicBool>) -> Result<PipelineOutput> {
        self.pool.install(|| {
            let (per_doc, errors) = self.stage_one(corpus, cancel);
            if is_cancelled(cancel) {
                return Err(WinnowerError::cancelled("pipeline run cancelled"));
            }

            let pruned = if self.pruner.is_noop() || per_doc.is_empty() {
                per_doc
            } else {
                let frequencies = DocumentFrequencyPruner::document_frequencies(&per_doc);
                if is_cancelled(cancel) {
                    return Err(WinnowerError::cancelled("pipeline run cancelled"));
                }
                self.pruner.apply_band(per_doc, &frequencies)
            };

            let texts = pruned
                .into_iter()
                .map(|forms| forms.join(" "))
                .collect();

            Ok(PipelineOutput { texts, errors })
        })
    }

    fn stage_one(
        &self,
        corpus: &Corpus,
        cancel: Option<&AtomicBool>,
    ) -> (Vec<Vec<String>>, Vec<Option<WinnowerError>>) {
        let results: Vec<(Vec<String>, Option<WinnowerError>)> = corpus
            .documents()
            .par_iter()
            .map(|document| {
                if is_cancelled(cancel) {
                    return (Vec::new(), None);
                }
                match self.analyzer.analyze_forms(document.text()) {
                    Ok(forms) => (forms, None),
                    Err(error) => (Vec::new(), Some(error)),
                }
            })
            .collect();

        let mut per_doc = Vec::with_capacity(results.len());
        let mut errors = Vec::with_capacity(results.len());
        for (forms, error) in results {
            per_doc.push(forms);
            errors.push(error);
        }
        (per_doc, errors)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("analyzer", &self.analyzer)
            .field("pruner", &self.pruner)
            .finish()
    }
}

fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::WhitespaceTokenizer;

    fn hangul_config() -> PipelineConfig {
        PipelineConfig {
            allowed_tags: ["HANGUL"].into_iter().map(String::from).collect(),
            stopwords: HashSet::new(),
            ..PipelineConfig::default()
        }
    }

    fn pipeline(config: PipelineConfig) -> Pipeline {
        Pipeline::new(config, Arc::new(WhitespaceTokenizer::new())).unwrap()
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let mut config = PipelineConfig::default();
        config.min_doc_frequency = 0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.max_doc_frequency_ratio = 0.0;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.max_doc_frequency_ratio = 1.5;
        assert!(config.validate().is_err());

        let mut config = PipelineConfig::default();
        config.max_doc_frequency_ratio = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_config_fails_before_processing() {
        let mut config = hangul_config();
        config.max_doc_frequency_ratio = 2.0;

        let result = Pipeline::new(config, Arc::new(WhitespaceTokenizer::new()));
        assert!(matches!(result, Err(WinnowerError::Config(_))));
    }

    #[test]
    fn test_output_matches_corpus_order_and_length() {
        let pipeline = pipeline(hangul_config());
        let corpus = Corpus::from_texts(["첫째 문서", "", "셋째 문서"]);

        let output = pipeline.run(&corpus).unwrap();

        assert_eq!(output.texts.len(), 3);
        assert_eq!(output.texts[0], "첫째 문서");
        assert_eq!(output.texts[1], "");
        assert_eq!(output.texts[2], "셋째 문서");
        assert_eq!(output.error_count(), 0);
    }

    #[test]
    fn test_pre_set_cancel_flag_aborts_run() {
        let pipeline = pipeline(hangul_config());
        let corpus = Corpus::from_texts(["문서 하나"]);
        let cancel = AtomicBool::new(true);

        let result = pipeline.run_with_cancellation(&corpus, &cancel);
        assert!(matches!(
            result,
            Err(WinnowerError::OperationCancelled(_))
        ));
    }

    #[test]
    fn test_single_thread_pipeline() {
        let config = hangul_config();
        let pipeline =
            Pipeline::with_thread_count(config, Arc::new(WhitespaceTokenizer::new()), 1).unwrap();
        let corpus = Corpus::from_texts(["배송 빠름", "배송 느림"]);

        let output = pipeline.run(&corpus).unwrap();
        assert_eq!(output.texts, vec!["배송 빠름", "배송 느림"]);
    }
}
