//! Term-weighted text index (TF-IDF) over the product corpus.
//!
//! This module provides the sparse vector-space model behind description
//! similarity:
//!
//! - Tokenization with Unicode support
//! - TF-IDF weight computation with smoothed IDF
//! - Cosine similarity between a query and every catalog document
//!
//! The implementation uses only basic string operations and hash maps
//! rather than external NLP libraries. Tokenization is deliberately
//! lenient: no stop-word filtering and no minimum token length, because
//! catalog descriptions are short and tier words like "high" and "low"
//! are significant terms in this domain.
//!
//! IDF is smoothed as `ln((1 + N) / (1 + df)) + 1`, so a term occurring
//! in every document still carries weight. With the unsmoothed form a
//! single-document corpus would zero out its entire vocabulary and no
//! query could ever match it.

use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Tokenizes text into normalized single-word tokens.
///
/// Splits on Unicode word boundaries, lower-cases, and strips characters
/// that are neither alphanumeric nor hyphens. Tokens that normalize to
/// the empty string are dropped; everything else is kept.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Normalizes a single token by lowercasing and removing non-alphanumeric
/// characters (hyphens kept).
fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_lowercase()
}

/// Computes relative term frequency for one document.
fn term_frequency(tokens: &[String]) -> HashMap<String, f64> {
    if tokens.is_empty() {
        return HashMap::new();
    }

    let total = tokens.len() as f64;
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / total))
        .collect()
}

/// Document-frequency statistics for the fitted corpus.
#[derive(Debug, Clone, Default)]
struct CorpusStats {
    /// Number of documents fitted.
    document_count: usize,
    /// Number of documents containing each term.
    document_frequencies: HashMap<String, usize>,
}

impl CorpusStats {
    /// Adds one document's tokens, counting each unique term once.
    fn add_document(&mut self, tokens: &[String]) {
        self.document_count += 1;

        let mut seen: Vec<&String> = tokens.iter().collect();
        seen.sort();
        seen.dedup();
        for term in seen {
            *self.document_frequencies.entry(term.clone()).or_insert(0) += 1;
        }
    }

    /// Smoothed inverse document frequency for a known term.
    ///
    /// Returns `None` for terms outside the fitted vocabulary; the
    /// vocabulary is fixed at fit time and unknown query terms contribute
    /// nothing.
    fn idf(&self, term: &str) -> Option<f64> {
        let df = *self.document_frequencies.get(term)?;
        let n = self.document_count as f64;
        Some(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
    }
}

/// A TF-IDF weighted document vector.
#[derive(Debug, Clone, Default)]
struct TermVector {
    weights: HashMap<String, f64>,
}

impl TermVector {
    /// Builds a weighted vector from tokens, restricted to the fitted
    /// vocabulary.
    fn from_tokens(tokens: &[String], stats: &CorpusStats) -> Self {
        let weights = term_frequency(tokens)
            .into_iter()
            .filter_map(|(term, freq)| stats.idf(&term).map(|idf| (term, freq * idf)))
            .collect();
        Self { weights }
    }

    /// L2 norm of the vector.
    fn magnitude(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Dot product with another vector.
    fn dot(&self, other: &TermVector) -> f64 {
        self.weights
            .iter()
            .filter_map(|(term, weight)| other.weights.get(term).map(|w| weight * w))
            .sum()
    }

    /// Cosine similarity in [0, 1] for non-negative vectors.
    ///
    /// Returns 0.0 if either vector has zero magnitude.
    fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let mag_self = self.magnitude();
        let mag_other = other.magnitude();

        if mag_self == 0.0 || mag_other == 0.0 {
            return 0.0;
        }

        self.dot(other) / (mag_self * mag_other)
    }
}

/// A fitted term-weighted index over one catalog corpus.
///
/// Fitting derives the vocabulary solely from the given corpus and is
/// deterministic: the same corpus always produces the same index.
/// Querying never mutates the index; re-fitting happens only when the
/// catalog itself is replaced.
#[derive(Debug, Clone, Default)]
pub struct TfidfIndex {
    stats: CorpusStats,
    documents: Vec<TermVector>,
}

impl TfidfIndex {
    /// Fits an index over the corpus, one document per catalog product.
    ///
    /// A degenerate corpus (empty, or all-empty documents) still fits
    /// successfully: the vocabulary is empty and every query yields
    /// all-zero similarities. That is an acceptable state, not an error.
    pub fn fit(corpus: &[String]) -> Self {
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|doc| tokenize(doc)).collect();

        let mut stats = CorpusStats::default();
        for tokens in &tokenized {
            stats.add_document(tokens);
        }

        let documents = tokenized
            .iter()
            .map(|tokens| TermVector::from_tokens(tokens, &stats))
            .collect();

        Self { stats, documents }
    }

    /// Number of documents the index was fitted over.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.stats.document_frequencies.len()
    }

    /// Computes cosine similarity of `text` against every fitted
    /// document, in catalog order.
    ///
    /// Query terms outside the fitted vocabulary contribute zero weight;
    /// a query with no known terms scores 0.0 everywhere.
    pub fn query_similarity(&self, text: &str) -> Vec<f64> {
        let query = TermVector::from_tokens(&tokenize(text), &self.stats);
        self.documents
            .iter()
            .map(|doc| query.cosine_similarity(doc))
            .collect()
    }
}
