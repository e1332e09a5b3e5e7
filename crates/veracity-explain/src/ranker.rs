//! Feature ranking over the fitted surrogate
//!
//! Coefficients are split into positive and negative contributions for the
//! target class, merged, and sorted by descending absolute weight. Exact
//! zeros are dropped: a coefficient the fit could not move off zero says
//! nothing about the prediction.

use crate::surrogate::SurrogateModel;
use crate::vocab::NgramVocabulary;
use std::cmp::Ordering;

/// A feature with its raw surrogate coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFeature {
    /// The n-gram text.
    pub feature: String,

    /// Surrogate coefficient for the target class.
    pub weight: f64,
}

/// Typed ranking result: positive and negative contributions, each ordered
/// by descending magnitude, plus the merged order used for top-K reporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureWeights {
    positive: Vec<RankedFeature>,
    negative: Vec<RankedFeature>,
    merged: Vec<RankedFeature>,
}

impl FeatureWeights {
    /// Rank the model's coefficients against the vocabulary.
    ///
    /// Equal magnitudes keep vocabulary insertion order (the sort is
    /// stable and the input is scanned in vocabulary order).
    pub fn from_model(model: &SurrogateModel, vocabulary: &NgramVocabulary) -> Self {
        let mut merged: Vec<RankedFeature> = model
            .coefficients()
            .iter()
            .enumerate()
            .filter(|(_, weight)| **weight != 0.0 && weight.is_finite())
            .filter_map(|(index, &weight)| {
                vocabulary.feature(index).map(|feature| RankedFeature {
                    feature: feature.to_string(),
                    weight,
                })
            })
            .collect();

        merged.sort_by(|a, b| {
            b.weight
                .abs()
                .partial_cmp(&a.weight.abs())
                .unwrap_or(Ordering::Equal)
        });

        let positive = merged.iter().filter(|f| f.weight > 0.0).cloned().collect();
        let negative = merged.iter().filter(|f| f.weight < 0.0).cloned().collect();

        Self {
            positive,
            negative,
            merged,
        }
    }

    /// Features pushing toward the target class, descending magnitude.
    pub fn positive(&self) -> &[RankedFeature] {
        &self.positive
    }

    /// Features pushing away from the target class, descending magnitude.
    pub fn negative(&self) -> &[RankedFeature] {
        &self.negative
    }

    /// Top `k` features across both groups by absolute weight.
    pub fn top_k(&self, k: usize) -> &[RankedFeature] {
        &self.merged[..k.min(self.merged.len())]
    }

    /// Whether no feature carried any weight.
    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}
