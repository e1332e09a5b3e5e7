//! Guarded scoring through the classifier adapter
//!
//! Adapters are contracted to return one valid probability row per input,
//! but the pipeline never trusts that: a failed batch or a malformed row is
//! substituted with a uniform distribution so no downstream stage ever sees
//! an absent result.

use tracing::warn;
use veracity_classifiers::{is_valid_row, uniform_row, TextClassifier};

/// Score `texts` through the adapter in one batched call, substituting
/// uniform rows wherever the adapter misbehaves.
///
/// Always returns exactly `texts.len()` rows of `class_names().len()` width.
pub(crate) async fn score_batch(adapter: &dyn TextClassifier, texts: &[String]) -> Vec<Vec<f32>> {
    let num_classes = adapter.class_names().len();

    let mut rows = match adapter.predict_proba(texts).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(
                classifier = adapter.name(),
                batch = texts.len(),
                error = %e,
                "classifier batch failed, substituting uniform rows"
            );
            return vec![uniform_row(num_classes); texts.len()];
        }
    };

    if rows.len() != texts.len() {
        warn!(
            classifier = adapter.name(),
            expected = texts.len(),
            got = rows.len(),
            "classifier returned wrong row count, substituting uniform rows"
        );
        return vec![uniform_row(num_classes); texts.len()];
    }

    let mut substituted = 0usize;
    for row in &mut rows {
        if !is_valid_row(row, num_classes) {
            *row = uniform_row(num_classes);
            substituted += 1;
        }
    }
    if substituted > 0 {
        warn!(
            classifier = adapter.name(),
            substituted, "substituted uniform rows for malformed probability rows"
        );
    }

    rows
}
