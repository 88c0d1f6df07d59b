use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::tokenizer::tokenize;

pub type DocId = usize;

/// An indexed document. Built once by the engine and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    id: DocId,
    content: String,
    term_frequency: HashMap<String, u32>,
}

impl Document {
    pub(crate) fn new(id: DocId, content: String) -> Self {
        let mut term_frequency: HashMap<String, u32> = HashMap::new();
        for term in tokenize(&content) {
            *term_frequency.entry(term).or_insert(0) += 1;
        }
        Self { id, content, term_frequency }
    }

    pub fn id(&self) -> DocId { self.id }

    /// Original text, verbatim.
    pub fn content(&self) -> &str { &self.content }

    pub fn term_frequency(&self) -> &HashMap<String, u32> { &self.term_frequency }

    /// Raw occurrence count of `term`, 0 when absent.
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_frequency.get(term).copied().unwrap_or(0)
    }

    /// Number of tokens the content produced.
    pub fn total_terms(&self) -> u32 {
        self.term_frequency.values().sum()
    }

    pub(crate) fn unique_terms(&self) -> HashSet<&str> {
        self.term_frequency.keys().map(String::as_str).collect()
    }
}

/// Term -> ids of the documents containing it, in insertion order.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Records `doc` under each of its distinct terms. Callers must insert each
    /// document once, in id order, for posting lists to stay sorted and unique.
    pub fn insert(&mut self, doc: &Document) {
        for term in doc.unique_terms() {
            self.postings.entry(term.to_string()).or_default().push(doc.id());
        }
    }

    pub fn postings(&self, term: &str) -> Option<&[DocId]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, Vec::len)
    }

    pub fn contains(&self, term: &str) -> bool { self.postings.contains_key(term) }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_terms() {
        let doc = Document::new(0, "The brown fox jumped over the brown dog".to_string());
        assert_eq!(doc.term_count("brown"), 2);
        assert_eq!(doc.term_count("the"), 2);
        assert_eq!(doc.term_count("cat"), 0);
        assert_eq!(doc.total_terms(), 8);
    }

    #[test]
    fn empty_content_has_no_terms() {
        let doc = Document::new(3, String::new());
        assert_eq!(doc.id(), 3);
        assert_eq!(doc.total_terms(), 0);
        assert!(doc.term_frequency().is_empty());
    }

    #[test]
    fn insert_adds_one_posting_per_distinct_term() {
        let mut index = InvertedIndex::new();
        let d0 = Document::new(0, "dog dog dog".to_string());
        let d1 = Document::new(1, "dog cat".to_string());
        index.insert(&d0);
        index.insert(&d1);
        assert_eq!(index.postings("dog"), Some(&[0, 1][..]));
        assert_eq!(index.postings("cat"), Some(&[1][..]));
        assert_eq!(index.document_frequency("dog"), 2);
        assert_eq!(index.document_frequency("bird"), 0);
        assert!(index.postings("bird").is_none());
        assert_eq!(index.num_terms(), 2);
    }
}
