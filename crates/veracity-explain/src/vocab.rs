//! Frequency-capped n-gram vocabulary over the perturbation neighborhood
//!
//! The vocabulary is local to one explanation request: it is built from the
//! neighbor texts, capped to the most frequent n-grams, and discarded with
//! the request. Insertion (first-seen) order is preserved because it is the
//! ranker's tie-break order.

use crate::tokenize::Tokenizer;
use std::collections::HashMap;

/// Sparse count row: `(feature_index, count)` pairs in index order.
pub type SparseRow = Vec<(usize, f64)>;

/// Capped vocabulary of 1..=n token n-grams.
#[derive(Debug, Clone)]
pub struct NgramVocabulary {
    features: Vec<String>,
    index: HashMap<String, usize>,
    ngram_max: usize,
}

impl NgramVocabulary {
    /// Build a vocabulary from `texts`, keeping the `cap` most frequent
    /// n-grams of 1..=`ngram_max` tokens. Frequency ties keep the n-gram
    /// seen first; the retained set stays in first-seen order.
    pub fn build(tokenizer: &Tokenizer, texts: &[String], ngram_max: usize, cap: usize) -> Self {
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        let mut first_seen = 0usize;

        for text in texts {
            let tokens = tokenizer.tokenize(text);
            for n in 1..=ngram_max {
                for window in tokens.windows(n) {
                    let gram = window.join(" ");
                    let entry = counts.entry(gram).or_insert_with(|| {
                        let order = first_seen;
                        first_seen += 1;
                        (0, order)
                    });
                    entry.0 += 1;
                }
            }
        }

        let mut entries: Vec<(String, usize, usize)> = counts
            .into_iter()
            .map(|(gram, (count, order))| (gram, count, order))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        entries.truncate(cap);
        entries.sort_by_key(|(_, _, order)| *order);

        let features: Vec<String> = entries.into_iter().map(|(gram, _, _)| gram).collect();
        let index = features
            .iter()
            .enumerate()
            .map(|(i, gram)| (gram.clone(), i))
            .collect();

        Self {
            features,
            index,
            ngram_max,
        }
    }

    /// Number of retained features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the vocabulary retained nothing.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature text for an index, in first-seen order.
    pub fn feature(&self, index: usize) -> Option<&str> {
        self.features.get(index).map(String::as_str)
    }

    /// All retained features in first-seen order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Sparse count row for `text` over the retained vocabulary.
    pub fn row(&self, tokenizer: &Tokenizer, text: &str) -> SparseRow {
        let tokens = tokenizer.tokenize(text);
        let mut counts: HashMap<usize, f64> = HashMap::new();

        for n in 1..=self.ngram_max {
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&index) = self.index.get(&gram) {
                    *counts.entry(index).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut row: SparseRow = counts.into_iter().collect();
        row.sort_by_key(|(index, _)| *index);
        row
    }
}
