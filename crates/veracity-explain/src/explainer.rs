//! The explanation pipeline
//!
//! One linear flow per request: summarize → sample → fit → rank. Each stage
//! either produces output or a well-defined degenerate fallback; only an
//! invalid configuration is a hard failure, and the verdict never depends
//! on the explanation stages succeeding.

use crate::config::ExplainerConfig;
use crate::ranker::FeatureWeights;
use crate::sampler::{NeighborSample, PerturbationSampler};
use crate::surrogate::{fit_weighted_ridge, RidgeOptions};
use crate::tokenize::Tokenizer;
use crate::verdict::{self, VerdictSummary};
use crate::vocab::NgramVocabulary;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};
use veracity_classifiers::TextClassifier;
use veracity_core::{Explanation, Result, WordWeight};

/// Local surrogate explainer over an injected classifier adapter.
///
/// Stateless across requests: the sampler seed and parameters come from the
/// config, and every vocabulary and surrogate model is scoped to a single
/// `explain` call. The adapter is the only shared (read-only) collaborator,
/// so one explainer can serve concurrent requests.
pub struct TextExplainer {
    adapter: Arc<dyn TextClassifier>,
    config: ExplainerConfig,
    sampler: PerturbationSampler,
    tokenizer: Tokenizer,
    ridge: RidgeOptions,
}

impl TextExplainer {
    /// Create an explainer. Fails only on an invalid configuration.
    pub fn new(adapter: Arc<dyn TextClassifier>, config: ExplainerConfig) -> Result<Self> {
        config.validate()?;

        let mut sampler = PerturbationSampler::new(config.sample_count)?;
        if let Some(seed) = config.seed {
            sampler = sampler.with_seed(seed);
        }

        Ok(Self {
            adapter,
            sampler,
            tokenizer: Tokenizer::new()?,
            ridge: RidgeOptions::default(),
            config,
        })
    }

    /// The configuration this explainer runs with.
    pub fn config(&self) -> &ExplainerConfig {
        &self.config
    }

    /// Explain one document.
    ///
    /// The verdict and confidence come from a single adapter call on the
    /// original text. The ranked word list comes from the surrogate stages
    /// and degrades to empty on any stage failure or on deadline expiry.
    pub async fn explain(&self, document: &str) -> Result<Explanation> {
        let start = Instant::now();

        let summary = verdict::summarize(self.adapter.as_ref(), document).await;
        let confidence = summary.confidence(self.adapter.class_names());

        let words = match self.config.timeout() {
            Some(deadline) => {
                match tokio::time::timeout(deadline, self.ranked_words(document, &summary)).await {
                    Ok(words) => words,
                    Err(_) => {
                        warn!(
                            timeout_ms = self.config.timeout_ms,
                            "explanation stages timed out, returning verdict only"
                        );
                        Vec::new()
                    }
                }
            }
            None => self.ranked_words(document, &summary).await,
        };

        debug!(
            verdict = %summary.label,
            words = words.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "explanation complete"
        );

        Ok(Explanation {
            verdict: summary.label,
            confidence,
            words,
        })
    }

    /// Sample, fit and rank. Absorbs every failure into an empty list.
    async fn ranked_words(&self, document: &str, summary: &VerdictSummary) -> Vec<WordWeight> {
        if self.config.top_k == 0 {
            return Vec::new();
        }

        let samples = match self.sampler.sample(self.adapter.as_ref(), document).await {
            Ok(samples) => samples,
            Err(e) => {
                warn!(error = %e, "perturbation sampling failed, returning verdict only");
                return Vec::new();
            }
        };
        if samples.is_empty() {
            return Vec::new();
        }

        let texts: Vec<String> = samples.iter().map(|s| s.text.clone()).collect();
        let vocabulary = NgramVocabulary::build(
            &self.tokenizer,
            &texts,
            self.config.ngram_max,
            self.config.vocab_cap,
        );
        if vocabulary.is_empty() {
            debug!("no n-grams survived vocabulary construction");
            return Vec::new();
        }

        let model = self.fit_surrogate(&samples, &texts, &vocabulary, summary.class_index);
        let weights = FeatureWeights::from_model(&model, &vocabulary);
        if weights.is_empty() {
            debug!("surrogate carried no feature weight, returning verdict only");
        }

        weights
            .top_k(self.config.top_k)
            .iter()
            .map(|ranked| WordWeight::new(&ranked.feature, ranked.weight))
            .collect()
    }

    fn fit_surrogate(
        &self,
        samples: &[NeighborSample],
        texts: &[String],
        vocabulary: &NgramVocabulary,
        target_class: usize,
    ) -> crate::surrogate::SurrogateModel {
        let rows: Vec<_> = texts
            .iter()
            .map(|text| vocabulary.row(&self.tokenizer, text))
            .collect();
        let targets: Vec<f64> = samples
            .iter()
            .map(|s| f64::from(s.probabilities.get(target_class).copied().unwrap_or(0.0)))
            .collect();
        let similarity: Vec<f64> = samples.iter().map(|s| s.weight).collect();

        fit_weighted_ridge(&rows, &targets, &similarity, vocabulary.len(), &self.ridge)
    }
}
