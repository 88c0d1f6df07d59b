//! In-memory TF-IDF search engine.
//!
//! Documents are appended with [`SearchEngine::add_document`] and queried with
//! [`SearchEngine::search`]. Nothing is ever updated or removed.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::index::{DocId, Document, InvertedIndex};
use crate::scoring;
use crate::tokenizer::tokenize;

/// A search hit together with its accumulated tf-idf score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument<'a> {
    pub document: &'a Document,
    pub score: f64,
}

#[derive(Debug, Default)]
pub struct SearchEngine {
    documents: Vec<Document>,
    index: InvertedIndex,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }

    /// Index `content` under the next sequential id and return that id.
    /// Any text is accepted, including the empty string.
    pub fn add_document(&mut self, content: impl Into<String>) -> DocId {
        let doc_id = self.documents.len();
        let doc = Document::new(doc_id, content.into());
        self.index.insert(&doc);
        tracing::debug!(doc_id, total_terms = doc.total_terms(), "indexed document");
        self.documents.push(doc);
        doc_id
    }

    /// Documents matching at least one query term, most relevant first.
    pub fn search(&self, query: &str) -> Vec<&Document> {
        self.search_scored(query).into_iter().map(|hit| hit.document).collect()
    }

    /// Like [`search`](Self::search) but keeps the scores.
    ///
    /// Each query token contributes once per occurrence, so repeating a term
    /// in the query weights it again. Equal scores are ordered by ascending id.
    pub fn search_scored(&self, query: &str) -> Vec<ScoredDocument<'_>> {
        let terms = tokenize(query);
        let mut scores: HashMap<DocId, f64> = HashMap::new();
        for term in &terms {
            let Some(postings) = self.index.postings(term) else { continue };
            for &doc_id in postings {
                let score = self.tf_idf(term, &self.documents[doc_id]);
                *scores.entry(doc_id).or_insert(0.0) += score;
            }
        }

        let mut scored: Vec<(DocId, f64)> = scores.into_iter().collect();
        scored.sort_by(|a, b| by_score_desc(a.1, b.1).then(a.0.cmp(&b.0)));
        tracing::trace!(query, terms = terms.len(), hits = scored.len(), "search");

        scored
            .into_iter()
            .map(|(doc_id, score)| ScoredDocument { document: &self.documents[doc_id], score })
            .collect()
    }

    /// tf-idf of `term` in `doc` against the current corpus.
    pub fn tf_idf(&self, term: &str, doc: &Document) -> f64 {
        scoring::tf_idf(
            doc.term_count(term),
            doc.total_terms(),
            self.index.document_frequency(term),
            self.documents.len(),
        )
    }

    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.documents.get(doc_id)
    }

    /// All documents in id order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.index.document_frequency(term)
    }

    pub fn postings(&self, term: &str) -> Option<&[DocId]> {
        self.index.postings(term)
    }

    pub fn num_terms(&self) -> usize { self.index.num_terms() }

    pub fn index(&self) -> &InvertedIndex { &self.index }
}

// Descending, NaN last.
fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
