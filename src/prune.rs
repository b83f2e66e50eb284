//! Corpus-wide document-frequency pruning.
//!
//! After every document has gone through per-document analysis, forms that
//! are too rare or too common across the corpus carry little signal for
//! topic or frequency analysis. [`DocumentFrequencyPruner`] removes them
//! with a strict two-pass algorithm:
//!
//! 1. **Count**: each document contributes its *set* of distinct forms
//!    (repeats within a document count once) to a corpus-wide
//!    form → document-count table.
//! 2. **Filter**: every token occurrence is kept iff its form's count sits
//!    inside the closed band `[min_doc_frequency, max_doc_frequency_ratio ×
//!    total_docs]`, preserving repeats and order within each document.
//!
//! Pass 1 must complete over the whole corpus before pass 2 touches any
//! document; a streaming variant would prune early documents against
//! incomplete statistics. The counts table lives only for the duration of
//! one call and is never persisted.
//!
//! # Examples
//!
//! ```
//! use winnower::prune::DocumentFrequencyPruner;
//!
//! let pruner = DocumentFrequencyPruner::new(2, 1.0);
//! let docs = vec![
//!     vec!["apple".to_string(), "apple".into(), "banana".into()],
//!     vec!["banana".into(), "cherry".into()],
//!     vec!["cherry".into(), "cherry".into()],
//! ];
//!
//! let pruned = pruner.prune(docs);
//!
//! // "apple" appears in only one document and is dropped everywhere
//! assert_eq!(pruned[0], vec!["banana"]);
//! assert_eq!(pruned[1], vec!["banana", "cherry"]);
//! assert_eq!(pruned[2], vec!["cherry", "cherry"]);
//! ```

use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;

/// Removes forms outside a corpus-wide document-frequency band.
#[derive(Clone, Debug)]
pub struct DocumentFrequencyPruner {
    min_doc_frequency: usize,
    max_doc_frequency_ratio: f64,
}

impl DocumentFrequencyPruner {
    /// Create a pruner keeping forms whose document frequency is at least
    /// `min_doc_frequency` and at most `max_doc_frequency_ratio` of the
    /// corpus size.
    pub fn new(min_doc_frequency: usize, max_doc_frequency_ratio: f64) -> Self {
        DocumentFrequencyPruner {
            min_doc_frequency,
            max_doc_frequency_ratio,
        }
    }

    /// Whether the configured band cannot remove anything.
    ///
    /// Callers use this to skip the counting pass entirely instead of
    /// running it and filtering nothing.
    pub fn is_noop(&self) -> bool {
        self.min_doc_frequency <= 1 && self.max_doc_frequency_ratio >= 1.0
    }

    /// Pass 1: the number of distinct documents each form appears in.
    ///
    /// Accumulation is a merge of partial count maps, one per worker, which
    /// is safe because per-document contributions are commutative and
    /// associative.
    pub fn document_frequencies(docs: &[Vec<String>]) -> AHashMap<String, usize> {
        docs.par_iter()
            .fold(AHashMap::new, |mut counts, doc| {
                let distinct: AHashSet<&str> = doc.iter().map(String::as_str).collect();
                for form in distinct {
                    *counts.entry(form.to_string()).or_insert(0) += 1;
                }
                counts
            })
            .reduce(AHashMap::new, |mut merged, partial| {
                for (form, count) in partial {
                    *merged.entry(form).or_insert(0) += count;
                }
                merged
            })
    }

    /// Pass 2: filter every document against a fixed frequency table.
    ///
    /// `frequencies` must have been computed over exactly the `docs` being
    /// filtered; the table is read-only here, so documents are filtered in
    /// parallel.
    pub fn apply_band(
        &self,
        docs: Vec<Vec<String>>,
        frequencies: &AHashMap<String, usize>,
    ) -> Vec<Vec<String>> {
        let total_docs = docs.len();
        if total_docs == 0 {
            return docs;
        }
        let total_docs = total_docs as f64;

        docs.into_par_iter()
            .map(|doc| {
                doc.into_iter()
                    .filter(|form| {
                        let count = frequencies.get(form).copied().unwrap_or(0);
                        count >= self.min_doc_frequency
                            && count as f64 / total_docs <= self.max_doc_frequency_ratio
                    })
                    .collect()
            })
            .collect()
    }

    /// Run both passes. With a band that cannot remove anything, or an
    /// empty corpus, the input is returned untouched without counting.
    pub fn prune(&self, docs: Vec<Vec<String>>) -> Vec<Vec<String>> {
        if self.is_noop() || docs.is_empty() {
            return docs;
        }

        let frequencies = Self::document_frequencies(&docs);
        self.apply_band(docs, &frequencies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|doc| doc.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_min_frequency_band() {
        let pruner = DocumentFrequencyPruner::new(2, 1.0);
        let input = docs(&[
            &["apple", "apple", "banana"],
            &["banana", "cherry"],
            &["cherry", "cherry"],
        ]);

        let pruned = pruner.prune(input);

        assert_eq!(
            pruned,
            docs(&[&["banana"], &["banana", "cherry"], &["cherry", "cherry"]])
        );
    }

    #[test]
    fn test_repeats_count_once_per_document() {
        let input = docs(&[&["apple", "apple", "apple"], &["banana"]]);
        let frequencies = DocumentFrequencyPruner::document_frequencies(&input);

        assert_eq!(frequencies["apple"], 1);
        assert_eq!(frequencies["banana"], 1);
    }

    #[test]
    fn test_max_ratio_drops_ubiquitous_forms() {
        // "the" appears in 3/3 documents; a 0.67 cap removes it everywhere
        let pruner = DocumentFrequencyPruner::new(1, 0.67);
        let input = docs(&[
            &["the", "spear"],
            &["the", "shield"],
            &["the", "spear", "helm"],
        ]);

        let pruned = pruner.prune(input);

        assert_eq!(
            pruned,
            docs(&[&["spear"], &["shield"], &["spear", "helm"]])
        );
    }

    #[test]
    fn test_band_is_closed() {
        // count == min passes; ratio exactly at the cap passes
        let pruner = DocumentFrequencyPruner::new(2, 1.0);
        let input = docs(&[&["shared"], &["shared"]]);

        let pruned = pruner.prune(input);

        assert_eq!(pruned, docs(&[&["shared"], &["shared"]]));
    }

    #[test]
    fn test_noop_band_bypasses_counting() {
        let pruner = DocumentFrequencyPruner::new(1, 1.0);
        assert!(pruner.is_noop());

        let input = docs(&[&["unique"], &["another"]]);
        let pruned = pruner.prune(input.clone());

        assert_eq!(pruned, input);
    }

    #[test]
    fn test_empty_corpus_is_noop() {
        let pruner = DocumentFrequencyPruner::new(5, 0.5);
        assert!(!pruner.is_noop());

        let pruned = pruner.prune(Vec::new());
        assert!(pruned.is_empty());
    }

    #[test]
    fn test_empty_documents_survive_as_empty() {
        let pruner = DocumentFrequencyPruner::new(2, 1.0);
        let input = docs(&[&[], &["solo"], &[]]);

        let pruned = pruner.prune(input);

        assert_eq!(pruned, docs(&[&[], &[], &[]]));
    }

    #[test]
    fn test_order_and_repeats_preserved() {
        let pruner = DocumentFrequencyPruner::new(2, 1.0);
        let input = docs(&[&["b", "a", "b", "c", "a"], &["a", "b"]]);

        let pruned = pruner.prune(input);

        // "c" is rare; everything else keeps its order and multiplicity
        assert_eq!(pruned[0], vec!["b", "a", "b", "a"]);
        assert_eq!(pruned[1], vec!["a", "b"]);
    }
}
