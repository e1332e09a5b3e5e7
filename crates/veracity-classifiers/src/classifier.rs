//! Classifier adapter trait and probability-row helpers

use async_trait::async_trait;
use veracity_core::Result;

/// Batched adapter over an opaque text classifier.
///
/// Implementations wrap whatever actually produces probabilities (a loaded
/// model, a remote service, a lexicon) behind one pure batched call. Row `i`
/// of the output corresponds to `texts[i]`; column `j` corresponds to
/// `class_names()[j]`. Rows are non-negative and sum to 1.
///
/// Inputs an implementation cannot score (for example the empty string)
/// must yield a uniform row rather than an error, so downstream ranking
/// never sees an absent result.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Score a batch of texts, one probability row per input.
    async fn predict_proba(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Class labels in declared order.
    fn class_names(&self) -> &[String];

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Uniform probability row over `num_classes` classes.
///
/// The substitute for anything the adapter could not score.
pub fn uniform_row(num_classes: usize) -> Vec<f32> {
    if num_classes == 0 {
        return Vec::new();
    }
    vec![1.0 / num_classes as f32; num_classes]
}

/// Whether a row is usable as a probability vector: right width, finite,
/// non-negative, positive mass.
pub fn is_valid_row(row: &[f32], num_classes: usize) -> bool {
    row.len() == num_classes
        && row.iter().all(|p| p.is_finite() && *p >= 0.0)
        && row.iter().sum::<f32>() > 0.0
}
