//! Perturbation sampling around a single document
//!
//! Neighbors are generated by randomly dropping word tokens: each token is
//! kept independently with probability 0.5, the retained tokens are joined
//! back in order, and the whole neighborhood is scored through the adapter
//! in one batched call.

use crate::scoring::score_batch;
use crate::tokenize::Tokenizer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use veracity_classifiers::TextClassifier;
use veracity_core::Result;

/// Per-token retention probability for the Bernoulli mask scheme.
const RETENTION_PROBABILITY: f64 = 0.5;

/// A perturbed variant of the document, before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct Perturbation {
    /// Which of the document's tokens were retained.
    pub mask: Vec<bool>,

    /// Retained tokens joined by single spaces, order preserved.
    pub text: String,

    /// Fraction of tokens retained; 1.0 for a token-less document.
    pub weight: f64,
}

/// A scored neighbor: a perturbation plus its probability row.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborSample {
    pub mask: Vec<bool>,
    pub text: String,
    pub weight: f64,
    pub probabilities: Vec<f32>,
}

/// Generates and scores the perturbation neighborhood of one document.
#[derive(Debug, Clone)]
pub struct PerturbationSampler {
    sample_count: usize,
    seed: Option<u64>,
    tokenizer: Tokenizer,
}

impl PerturbationSampler {
    pub fn new(sample_count: usize) -> Result<Self> {
        Ok(Self {
            sample_count,
            seed: None,
            tokenizer: Tokenizer::new()?,
        })
    }

    /// Fix the random seed. Identical seed, document and sample count
    /// reproduce bit-identical perturbations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate the unscored perturbation set for `document`.
    ///
    /// Documents with fewer than two tokens still yield the full sample
    /// count; their masks degenerate to all-kept/all-dropped.
    pub fn perturb(&self, document: &str) -> Vec<Perturbation> {
        let tokens = self.tokenizer.tokenize(document);
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        (0..self.sample_count)
            .map(|_| {
                let mask: Vec<bool> = tokens
                    .iter()
                    .map(|_| rng.gen_bool(RETENTION_PROBABILITY))
                    .collect();
                let retained: Vec<&str> = tokens
                    .iter()
                    .zip(&mask)
                    .filter(|(_, keep)| **keep)
                    .map(|(token, _)| token.as_str())
                    .collect();
                let weight = if tokens.is_empty() {
                    1.0
                } else {
                    retained.len() as f64 / tokens.len() as f64
                };
                Perturbation {
                    mask,
                    text: retained.join(" "),
                    weight,
                }
            })
            .collect()
    }

    /// Generate the neighborhood and score it through the adapter in one
    /// batched call.
    pub async fn sample(
        &self,
        adapter: &dyn TextClassifier,
        document: &str,
    ) -> Result<Vec<NeighborSample>> {
        let perturbations = self.perturb(document);
        let texts: Vec<String> = perturbations.iter().map(|p| p.text.clone()).collect();

        debug!(
            samples = texts.len(),
            classifier = adapter.name(),
            "scoring perturbation neighborhood"
        );
        let rows = score_batch(adapter, &texts).await;

        Ok(perturbations
            .into_iter()
            .zip(rows)
            .map(|(p, probabilities)| NeighborSample {
                mask: p.mask,
                text: p.text,
                weight: p.weight,
                probabilities,
            })
            .collect())
    }
}
