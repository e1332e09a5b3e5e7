//! Verdict summarization
//!
//! One batch-of-1 adapter call on the original document. Independent of the
//! explanation stages: a verdict is produced even when sampling or fitting
//! degrades.

use crate::scoring::score_batch;
use veracity_classifiers::TextClassifier;
use veracity_core::Confidence;

/// The classifier's view of the original document.
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictSummary {
    /// Label of the argmax class.
    pub label: String,

    /// Index of the argmax class in declared order. Ties keep the
    /// first-declared class.
    pub class_index: usize,

    /// The full probability row for the document.
    pub probabilities: Vec<f32>,
}

impl VerdictSummary {
    /// Per-class confidence in declared class order, formatted for the
    /// outbound report.
    pub fn confidence(&self, class_names: &[String]) -> Confidence {
        let mut confidence = Confidence::new();
        for (label, probability) in class_names.iter().zip(&self.probabilities) {
            confidence.insert(label, *probability);
        }
        confidence
    }
}

/// Score the original document and pick the argmax class.
///
/// Adapter failures surface as a uniform distribution (via the scoring
/// guard), never as an error.
pub async fn summarize(adapter: &dyn TextClassifier, document: &str) -> VerdictSummary {
    let texts = [document.to_string()];
    let rows = score_batch(adapter, &texts).await;
    let probabilities = rows.into_iter().next().unwrap_or_default();

    let class_names = adapter.class_names();
    let class_index = argmax(&probabilities);
    let label = class_names
        .get(class_index)
        .cloned()
        .unwrap_or_default();

    VerdictSummary {
        label,
        class_index,
        probabilities,
    }
}

/// Index of the maximum value; ties keep the earliest index. Zero for an
/// empty row.
fn argmax(row: &[f32]) -> usize {
    let mut best = 0usize;
    for (index, value) in row.iter().enumerate().skip(1) {
        if *value > row[best] {
            best = index;
        }
    }
    best
}
