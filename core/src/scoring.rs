//! Classic TF-IDF weighting.
//!
//! Degenerate inputs are left to IEEE-754: a document with no terms gives a
//! NaN or infinite tf, and idf goes negative once a term is in more than
//! roughly half of the corpus.

/// Occurrences of a term normalized by the document's token count.
#[inline]
pub fn term_frequency(count: u32, total_terms: u32) -> f64 {
    f64::from(count) / f64::from(total_terms)
}

/// Smoothed idf: `ln(N / (df + 1))`.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn inverse_document_frequency(doc_freq: usize, total_docs: usize) -> f64 {
    (total_docs as f64 / (doc_freq + 1) as f64).ln()
}

#[inline]
pub fn tf_idf(count: u32, total_terms: u32, doc_freq: usize, total_docs: usize) -> f64 {
    term_frequency(count, total_terms) * inverse_document_frequency(doc_freq, total_docs)
}
