//! Corpus and document types.
//!
//! A [`Corpus`] is an ordered collection of [`Document`]s. A document carries
//! its raw text (possibly missing) plus an opaque metadata map that the
//! pipeline passes through unchanged. The document's position in the corpus
//! is its identifier: pipeline output is re-associated with documents by
//! index, so corpus order is what makes runs reproducible.
//!
//! # Examples
//!
//! ```
//! use winnower::corpus::{Corpus, Document};
//!
//! let mut corpus = Corpus::new();
//! corpus.push(Document::new("첫 번째 문서"));
//! corpus.push(Document::empty());
//!
//! assert_eq!(corpus.len(), 2);
//! assert_eq!(corpus.get(0).unwrap().text(), Some("첫 번째 문서"));
//! assert_eq!(corpus.get(1).unwrap().text(), None);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single input record: raw text plus opaque metadata.
///
/// The raw text is never mutated by the pipeline; processed output is
/// attached alongside it by the output sink.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    #[serde(flatten)]
    metadata: HashMap<String, Value>,
}

impl Document {
    /// Create a document from raw text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Document {
            text: Some(text.into()),
            metadata: HashMap::new(),
        }
    }

    /// Create a document with no text. The pipeline treats it as empty
    /// input, not as a failure.
    pub fn empty() -> Self {
        Document::default()
    }

    /// Attach a metadata entry.
    pub fn with_metadata<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The raw text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The metadata map.
    pub fn metadata(&self) -> &HashMap<String, Value> {
        &self.metadata
    }
}

/// An ordered collection of documents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Corpus::default()
    }

    /// Build a corpus from plain texts, in order.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Corpus {
            documents: texts.into_iter().map(Document::new).collect(),
        }
    }

    /// Append a document at the end of the corpus.
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check whether the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The document at the given position.
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Iterate over documents in corpus order.
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// The documents as a slice, in corpus order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        Corpus {
            documents: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
