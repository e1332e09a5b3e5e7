//! Lightweight lexicon-based fake-news classifier
//!
//! This is a cue-phrase classifier used when no external model is wired in.

use crate::classifier::{uniform_row, TextClassifier};
use aho_corasick::AhoCorasick;
use async_trait::async_trait;
use veracity_core::Result;

/// How far a lexicon score may move from 0.5 per hit imbalance.
const SCORE_SPREAD: f32 = 0.45;

pub struct LexiconClassifier {
    name: String,
    class_names: Vec<String>,
    sensational: AhoCorasick,
    sober: AhoCorasick,
}

impl LexiconClassifier {
    pub fn new() -> Result<Self> {
        Self::with_name("lexicon")
    }

    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let sensational = vec![
            "shocking",
            "miracle",
            "exposed",
            "they don't want you to know",
            "secret cure",
            "hoax",
            "fake",
            "you won't believe",
            "wake up",
            "banned",
            "cover-up",
            "conspiracy",
        ];
        let sober = vec![
            "according to",
            "researchers",
            "study published",
            "officials said",
            "spokesperson",
            "data show",
            "confirmed by",
            "reported",
            "statement",
            "peer-reviewed",
        ];

        let sensational = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(sensational)
            .map_err(|e| {
                veracity_core::Error::classifier(format!(
                    "Failed to build sensational cue matcher: {e}"
                ))
            })?;

        let sober = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(sober)
            .map_err(|e| {
                veracity_core::Error::classifier(format!("Failed to build sober cue matcher: {e}"))
            })?;

        Ok(Self {
            name: name.into(),
            class_names: vec!["Fake News".to_string(), "Real News".to_string()],
            sensational,
            sober,
        })
    }

    fn score_one(&self, text: &str) -> Vec<f32> {
        let sensational_hits = self.sensational.find_iter(text).count() as f32;
        let sober_hits = self.sober.find_iter(text).count() as f32;
        let total = sensational_hits + sober_hits;

        if total == 0.0 {
            return uniform_row(self.class_names.len());
        }

        // Bounded in [0.05, 0.95]; cue-free text stays at 0.5.
        let fake = 0.5 + SCORE_SPREAD * (sensational_hits - sober_hits) / total;
        vec![fake, 1.0 - fake]
    }
}

#[async_trait]
impl TextClassifier for LexiconClassifier {
    async fn predict_proba(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|text| self.score_one(text)).collect())
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lexicon_sensational_text() {
        let classifier = LexiconClassifier::new().unwrap();

        let rows = classifier
            .predict_proba(&["SHOCKING miracle cure EXPOSED".to_string()])
            .await
            .unwrap();
        assert!(rows[0][0] > 0.5, "fake-class probability should dominate");
        assert!((rows[0][0] + rows[0][1] - 1.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_lexicon_sober_text() {
        let classifier = LexiconClassifier::new().unwrap();

        let rows = classifier
            .predict_proba(&[
                "According to researchers, the study published today was confirmed by officials"
                    .to_string(),
            ])
            .await
            .unwrap();
        assert!(rows[0][1] > 0.5, "real-class probability should dominate");
    }

    #[tokio::test]
    async fn test_lexicon_neutral_and_empty_text() {
        let classifier = LexiconClassifier::new().unwrap();

        let rows = classifier
            .predict_proba(&["the cat sat on the mat".to_string(), String::new()])
            .await
            .unwrap();
        assert_eq!(rows[0], vec![0.5, 0.5]);
        assert_eq!(rows[1], vec![0.5, 0.5]);
    }

    #[tokio::test]
    async fn test_lexicon_batched_rows_align() {
        let classifier = LexiconClassifier::new().unwrap();

        let texts = vec![
            "shocking hoax exposed".to_string(),
            "officials said in a statement".to_string(),
        ];
        let rows = classifier.predict_proba(&texts).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0][0] > rows[1][0]);
    }

    #[tokio::test]
    async fn test_lexicon_scores_bounded() {
        let classifier = LexiconClassifier::new().unwrap();

        let rows = classifier
            .predict_proba(&["fake fake fake hoax hoax shocking banned".to_string()])
            .await
            .unwrap();
        assert!(rows[0][0] <= 0.95 + 1e-6);
        assert!(rows[0][1] >= 0.05 - 1e-6);
    }
}
