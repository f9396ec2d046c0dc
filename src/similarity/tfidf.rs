use std::collections::{BTreeMap, HashMap, HashSet};

use ndarray::Array2;
use regex::Regex;

use crate::text::StopWords;

/// Words of two or more alphanumeric characters
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Strategy seam for the recommender: anything that can turn a batch of
/// documents into one feature vector per document can drive the ranking.
pub trait TextVectorizer {
    /// One row per document, in input order. Documents with no usable terms
    /// must produce an all-zero row rather than fail.
    fn vectorize(&self, documents: &[String]) -> Array2<f64>;
}

/// TF-IDF weighting over the whole document batch.
///
/// Terms are lowercased word tokens with stop words removed. Weights are
/// raw term counts scaled by a smoothed inverse document frequency,
/// `ln((1 + n) / (1 + df)) + 1`, and every row is L2-normalized. The
/// vocabulary is ordered alphabetically so repeated runs over the same
/// batch produce identical matrices.
pub struct TfidfVectorizer {
    stop_words: StopWords,
    token_pattern: Regex,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::with_stop_words(StopWords::english())
    }

    pub fn with_stop_words(stop_words: StopWords) -> Self {
        TfidfVectorizer {
            stop_words,
            token_pattern: Regex::new(TOKEN_PATTERN).expect("token pattern is valid"),
        }
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn vectorize(&self, documents: &[String]) -> Array2<f64> {
        let token_docs: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();

        // BTreeMap keeps the vocabulary order deterministic
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &token_docs {
            let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let vocab: HashMap<&str, usize> = doc_freq
            .keys()
            .enumerate()
            .map(|(idx, term)| (*term, idx))
            .collect();

        let n_docs = documents.len();
        let mut matrix = Array2::<f64>::zeros((n_docs, vocab.len()));

        for (row, tokens) in token_docs.iter().enumerate() {
            for token in tokens {
                if let Some(&col) = vocab.get(token.as_str()) {
                    matrix[[row, col]] += 1.0;
                }
            }
        }

        let idf: Vec<f64> = doc_freq
            .values()
            .map(|&df| ((1 + n_docs) as f64 / (1 + df) as f64).ln() + 1.0)
            .collect();

        for mut row in matrix.rows_mut() {
            for (value, idf_t) in row.iter_mut().zip(&idf) {
                *value *= idf_t;
            }
            let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                row.mapv_inplace(|v| v / norm);
            }
        }

        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_one_row_per_document() {
        let vectorizer = TfidfVectorizer::new();

        let matrix = vectorizer.vectorize(&docs(&["red shoe", "red shirt", "blue hat"]));

        assert_eq!(matrix.nrows(), 3);
        assert!(matrix.ncols() >= 5);
    }

    #[test]
    fn test_rows_are_l2_normalized() {
        let vectorizer = TfidfVectorizer::new();

        let matrix = vectorizer.vectorize(&docs(&["red shoe", "blue hat"]));

        for row in matrix.rows() {
            let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_document_is_zero_row() {
        let vectorizer = TfidfVectorizer::new();

        let matrix = vectorizer.vectorize(&docs(&["red shoe", ""]));

        assert!(matrix.row(1).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_stop_words_are_dropped() {
        let vectorizer = TfidfVectorizer::new();

        // "the" and "is" contribute nothing, so both docs collapse to "red"
        let matrix = vectorizer.vectorize(&docs(&["the red", "red is red"]));

        assert_eq!(matrix.ncols(), 1);
    }

    #[test]
    fn test_short_tokens_are_ignored() {
        let vectorizer = TfidfVectorizer::new();

        let matrix = vectorizer.vectorize(&docs(&["x y z"]));

        assert_eq!(matrix.ncols(), 0);
        assert_eq!(matrix.nrows(), 1);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let vectorizer = TfidfVectorizer::new();
        let batch = docs(&["red running shoe", "red cotton shirt", "blue hat"]);

        let first = vectorizer.vectorize(&batch);
        let second = vectorizer.vectorize(&batch);

        assert_eq!(first, second);
    }
}
