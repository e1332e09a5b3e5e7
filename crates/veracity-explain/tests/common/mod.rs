//! Mock classifier adapters shared by the integration tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use veracity_classifiers::TextClassifier;
use veracity_core::Result;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("veracity_explain=debug")
        .with_test_writer()
        .try_init();
}

fn fake_real_labels() -> Vec<String> {
    vec!["Fake News".to_string(), "Real News".to_string()]
}

/// Probability of the fake class rises with the presence of cue tokens, so
/// perturbations carry real signal: 0.2 base, +0.35 for "fake", +0.35 for
/// "moon". The unperturbed headline scores exactly [0.9, 0.1].
pub struct CueClassifier {
    class_names: Vec<String>,
    call_count: AtomicU32,
}

impl CueClassifier {
    pub fn new() -> Self {
        Self {
            class_names: fake_real_labels(),
            call_count: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    fn score_one(&self, text: &str) -> Vec<f32> {
        let lowered = text.to_lowercase();
        let mut fake = 0.2f32;
        if lowered.contains("fake") {
            fake += 0.35;
        }
        if lowered.contains("moon") {
            fake += 0.35;
        }
        vec![fake, 1.0 - fake]
    }
}

#[async_trait]
impl TextClassifier for CueClassifier {
    async fn predict_proba(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(texts.iter().map(|t| self.score_one(t)).collect())
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }

    fn name(&self) -> &str {
        "cue"
    }
}

/// Returns the same distribution for every input.
pub struct ConstantClassifier {
    class_names: Vec<String>,
    probabilities: Vec<f32>,
}

impl ConstantClassifier {
    pub fn new(probabilities: &[f32]) -> Self {
        Self {
            class_names: fake_real_labels(),
            probabilities: probabilities.to_vec(),
        }
    }
}

#[async_trait]
impl TextClassifier for ConstantClassifier {
    async fn predict_proba(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| self.probabilities.clone()).collect())
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }

    fn name(&self) -> &str {
        "constant"
    }
}

/// Fails every batch.
pub struct FailingClassifier {
    class_names: Vec<String>,
}

impl FailingClassifier {
    pub fn new() -> Self {
        Self {
            class_names: fake_real_labels(),
        }
    }
}

#[async_trait]
impl TextClassifier for FailingClassifier {
    async fn predict_proba(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Err(veracity_core::Error::classifier("simulated batch failure"))
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Returns rows one column short of the declared class count.
pub struct WrongShapeClassifier {
    class_names: Vec<String>,
}

impl WrongShapeClassifier {
    pub fn new() -> Self {
        Self {
            class_names: fake_real_labels(),
        }
    }
}

#[async_trait]
impl TextClassifier for WrongShapeClassifier {
    async fn predict_proba(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| vec![1.0]).collect())
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }

    fn name(&self) -> &str {
        "wrong-shape"
    }
}

/// Sleeps before answering, for deadline tests.
pub struct SlowClassifier {
    class_names: Vec<String>,
    delay: Duration,
}

impl SlowClassifier {
    pub fn new(delay: Duration) -> Self {
        Self {
            class_names: fake_real_labels(),
            delay,
        }
    }
}

#[async_trait]
impl TextClassifier for SlowClassifier {
    async fn predict_proba(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        tokio::time::sleep(self.delay).await;
        Ok(texts.iter().map(|_| vec![0.7, 0.3]).collect())
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }

    fn name(&self) -> &str {
        "slow"
    }
}
