// file: src/vectorize/tfidf.rs
// description: TF-IDF term weighting fitted over an ad-hoc corpus
// reference: https://scikit-learn.org/stable/modules/feature_extraction.html#tfidf-term-weighting

use crate::error::{NlpError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

lazy_static! {
    // Two or more word characters
    static ref TERM: Regex = Regex::new(
        r"\b\w\w+\b"
    ).expect("TERM regex is valid");
}

/// Lowercased terms of at least two word characters, in text order.
pub fn tokenize_terms(text: &str) -> Vec<String> {
    TERM.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
}

/// Weights of one fit: one L2-normalised row per input text.
#[derive(Debug, Clone)]
pub struct TermWeightModel {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    /// Fits the vocabulary and idf over `texts` and weights every text.
    ///
    /// The vocabulary keeps the `max_features` terms with the highest total
    /// count across all texts (ties broken alphabetically) and is laid out in
    /// alphabetical order. Weights are raw counts times the smoothed idf
    /// `ln((1 + n) / (1 + df)) + 1`.
    pub fn fit_transform(&self, texts: &[&str]) -> Result<TermWeightModel> {
        let term_counts: Vec<HashMap<String, usize>> = texts
            .iter()
            .map(|text| {
                let mut counts = HashMap::new();
                for term in tokenize_terms(text) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut totals: HashMap<&str, usize> = HashMap::new();
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();
        for counts in &term_counts {
            for (term, count) in counts {
                *totals.entry(term.as_str()).or_insert(0) += count;
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if totals.is_empty() {
            return Err(NlpError::Vectorize(
                "empty vocabulary; texts contain no terms of two or more characters".to_string(),
            ));
        }

        let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| a.0.cmp(b.0));
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.max_features);

        let mut vocabulary: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        vocabulary.sort_unstable();

        let n = texts.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = document_frequency.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let rows = term_counts
            .iter()
            .map(|counts| {
                let mut row: Vec<f64> = vocabulary
                    .iter()
                    .zip(&idf)
                    .map(|(term, weight)| {
                        counts.get(*term).copied().unwrap_or(0) as f64 * weight
                    })
                    .collect();
                l2_normalize(&mut row);
                row
            })
            .collect();

        debug!(
            "Fitted TF-IDF over {} texts with {} terms",
            texts.len(),
            vocabulary.len()
        );

        Ok(TermWeightModel {
            vocabulary: vocabulary.into_iter().map(str::to_string).collect(),
            idf,
            rows,
        })
    }
}

impl TermWeightModel {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn row(&self, index: usize) -> Result<&[f64]> {
        self.rows.get(index).map(Vec::as_slice).ok_or_else(|| {
            NlpError::Vectorize(format!(
                "row {} out of range for {} fitted texts",
                index,
                self.rows.len()
            ))
        })
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        row.iter_mut().for_each(|x| *x /= norm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_terms() {
        assert_eq!(
            tokenize_terms("A quick, QUICK fox; x-ray 42"),
            vec!["quick", "quick", "fox", "ray", "42"]
        );
    }

    #[test]
    fn test_vocabulary_is_alphabetical() {
        let model = TfidfVectorizer::new(100)
            .fit_transform(&["zebra apple", "mango apple"])
            .unwrap();
        assert_eq!(model.vocabulary(), &["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_vocabulary_cap_keeps_most_frequent() {
        let model = TfidfVectorizer::new(2)
            .fit_transform(&["deploy deploy deploy build", "build review", "alpha"])
            .unwrap();
        assert_eq!(model.vocabulary(), &["build", "deploy"]);
    }

    #[test]
    fn test_vocabulary_cap_ties_alphabetical() {
        let model = TfidfVectorizer::new(2)
            .fit_transform(&["delta charlie bravo alpha"])
            .unwrap();
        assert_eq!(model.vocabulary(), &["alpha", "bravo"]);
    }

    #[test]
    fn test_smoothed_idf() {
        let model = TfidfVectorizer::new(100)
            .fit_transform(&["common rare", "common"])
            .unwrap();
        // common: df = 2 of 2, rare: df = 1 of 2
        assert!((model.idf()[0] - 1.0).abs() < 1e-12);
        assert!((model.idf()[1] - ((3.0_f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let model = TfidfVectorizer::new(100)
            .fit_transform(&["the release notes", "release the build", "nothing"])
            .unwrap();
        for index in 0..3 {
            let norm: f64 = model.row(index).unwrap().iter().map(|x| x * x).sum();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_text_without_vocabulary_terms_is_zero_row() {
        let model = TfidfVectorizer::new(100)
            .fit_transform(&["release notes", "a b c"])
            .unwrap();
        assert!(model.row(1).unwrap().iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        let result = TfidfVectorizer::new(100).fit_transform(&["a b", "!"]);
        assert!(matches!(result, Err(NlpError::Vectorize(_))));
    }

    #[test]
    fn test_row_out_of_range() {
        let model = TfidfVectorizer::new(100).fit_transform(&["hello"]).unwrap();
        assert!(model.row(1).is_err());
    }
}
