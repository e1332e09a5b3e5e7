//! Configuration for explanation requests

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use veracity_core::{Error, Result};

fn default_sample_count() -> usize {
    300
}

fn default_top_k() -> usize {
    10
}

fn default_ngram_max() -> usize {
    3
}

fn default_vocab_cap() -> usize {
    5000
}

/// Per-request explanation parameters.
///
/// A config is validated once when the explainer is constructed; a valid
/// config never fails inside the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainerConfig {
    /// Number of perturbation samples drawn around the document.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Number of ranked features reported. Zero is valid and yields an
    /// empty word list.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Longest n-gram (in tokens) admitted to the vocabulary.
    #[serde(default = "default_ngram_max")]
    pub ngram_max: usize,

    /// Maximum vocabulary size; the most frequent n-grams are kept.
    #[serde(default = "default_vocab_cap")]
    pub vocab_cap: usize,

    /// Random seed for the perturbation sampler. Identical seed, document
    /// and sample count reproduce identical samples.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Deadline for the explanation stages (sampling through ranking).
    /// Expiry degrades the result to verdict-only output.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            top_k: default_top_k(),
            ngram_max: default_ngram_max(),
            vocab_cap: default_vocab_cap(),
            seed: None,
            timeout_ms: None,
        }
    }
}

impl ExplainerConfig {
    /// Create a config with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the perturbation sample count.
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the number of reported features.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the longest admitted n-gram.
    pub fn with_ngram_max(mut self, ngram_max: usize) -> Self {
        self.ngram_max = ngram_max;
        self
    }

    /// Set the vocabulary cap.
    pub fn with_vocab_cap(mut self, vocab_cap: usize) -> Self {
        self.vocab_cap = vocab_cap;
        self
    }

    /// Set the sampler seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the explanation-stage deadline.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// The explanation-stage deadline as a `Duration`, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Reject configurations the pipeline cannot honor.
    ///
    /// The unsigned fields make negative values unrepresentable; zero is
    /// the rejected degenerate for each of them. `top_k == 0` stays valid:
    /// it asks for a verdict without ranked words.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(Error::config("sample_count must be non-zero"));
        }
        if self.ngram_max == 0 {
            return Err(Error::config("ngram_max must be non-zero"));
        }
        if self.vocab_cap == 0 {
            return Err(Error::config("vocab_cap must be non-zero"));
        }
        Ok(())
    }

    /// Load a config from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)
            .map_err(|e| Error::config(format!("Failed to parse explainer config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
