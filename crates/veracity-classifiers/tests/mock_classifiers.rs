//! Mock classifiers for testing
//!
//! Provides configurable mock implementations of the TextClassifier trait
//! for testing the adapter contract and error handling.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use veracity_classifiers::{uniform_row, TextClassifier};
use veracity_core::Result;

/// A configurable mock classifier returning a fixed distribution
pub struct ConstantClassifier {
    name: String,
    class_names: Vec<String>,
    probabilities: Vec<f32>,
    call_count: AtomicU32,
}

impl ConstantClassifier {
    /// Create a mock returning `probabilities` for every input
    pub fn new(class_names: &[&str], probabilities: &[f32]) -> Self {
        Self {
            name: "constant".to_string(),
            class_names: class_names.iter().map(|s| s.to_string()).collect(),
            probabilities: probabilities.to_vec(),
            call_count: AtomicU32::new(0),
        }
    }

    /// Get the number of times predict_proba was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl TextClassifier for ConstantClassifier {
    async fn predict_proba(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(texts.iter().map(|_| self.probabilities.clone()).collect())
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A classifier that always fails - for testing error paths
pub struct FailingClassifier {
    name: String,
    class_names: Vec<String>,
    error_message: String,
}

impl FailingClassifier {
    pub fn new() -> Self {
        Self {
            name: "failing".to_string(),
            class_names: vec!["Fake News".to_string(), "Real News".to_string()],
            error_message: "Simulated classifier failure".to_string(),
        }
    }

    pub fn with_error(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}

impl Default for FailingClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextClassifier for FailingClassifier {
    async fn predict_proba(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Err(veracity_core::Error::classifier(&self.error_message))
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[tokio::test]
async fn test_constant_classifier_batches() {
    let classifier = ConstantClassifier::new(&["Fake News", "Real News"], &[0.9, 0.1]);

    let texts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let rows = classifier.predict_proba(&texts).await.unwrap();

    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row, &vec![0.9, 0.1]);
    }
    // One batched call, not one call per text.
    assert_eq!(classifier.call_count(), 1);
}

#[tokio::test]
async fn test_constant_classifier_class_order() {
    let classifier = ConstantClassifier::new(&["Fake News", "Real News"], &[0.9, 0.1]);
    assert_eq!(classifier.class_names()[0], "Fake News");
    assert_eq!(classifier.class_names()[1], "Real News");
}

#[tokio::test]
async fn test_failing_classifier() {
    let classifier = FailingClassifier::new().with_error("Custom error");

    let result = classifier.predict_proba(&["test".to_string()]).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Custom error"));
}

#[tokio::test]
async fn test_uniform_row_matches_class_count() {
    let classifier = FailingClassifier::new();
    let row = uniform_row(classifier.class_names().len());
    assert_eq!(row, vec![0.5, 0.5]);
}
