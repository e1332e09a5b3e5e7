//! Veracity Explain
//!
//! Local surrogate explanations for opaque text classifiers.
//!
//! Given an adapter that maps a batch of texts to class probabilities and a
//! single document, the pipeline perturbs the document by dropping word
//! tokens, scores the neighborhood through the adapter in one batched call,
//! fits a similarity-weighted linear surrogate over a capped n-gram
//! vocabulary, and reports the top contributing n-grams alongside the
//! classifier's own verdict and confidence.
//!
//! ```no_run
//! use std::sync::Arc;
//! use veracity_classifiers::LexiconClassifier;
//! use veracity_explain::{ExplainerConfig, TextExplainer};
//!
//! # async fn run() -> veracity_core::Result<()> {
//! let adapter = Arc::new(LexiconClassifier::new()?);
//! let config = ExplainerConfig::default().with_seed(42);
//! let explainer = TextExplainer::new(adapter, config)?;
//!
//! let explanation = explainer
//!     .explain("Breaking: Scientists confirm the moon is fake")
//!     .await?;
//! println!("{} {:?}", explanation.verdict, explanation.words);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod explainer;
pub mod ranker;
pub mod sampler;
mod scoring;
pub mod surrogate;
pub mod tokenize;
pub mod verdict;
pub mod vocab;

pub use config::ExplainerConfig;
pub use explainer::TextExplainer;
pub use ranker::{FeatureWeights, RankedFeature};
pub use sampler::{NeighborSample, Perturbation, PerturbationSampler};
pub use surrogate::{fit_weighted_ridge, RidgeOptions, SurrogateModel};
pub use tokenize::Tokenizer;
pub use verdict::{summarize, VerdictSummary};
pub use vocab::{NgramVocabulary, SparseRow};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::ExplainerConfig;
    pub use crate::explainer::TextExplainer;
    pub use crate::ranker::{FeatureWeights, RankedFeature};
    pub use crate::sampler::{NeighborSample, PerturbationSampler};
    pub use crate::surrogate::SurrogateModel;
    pub use crate::verdict::VerdictSummary;
    pub use crate::vocab::NgramVocabulary;
}
