//! Explanation result model
//!
//! The only artifact an explanation request returns to its caller: the
//! verdict label, per-class confidence, and the ranked word list. Everything
//! upstream (samples, vocabulary, surrogate model) is discarded with the
//! request.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single ranked n-gram and its surrogate weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordWeight {
    /// The n-gram feature text.
    pub word: String,

    /// Surrogate coefficient, formatted to 4 decimal places.
    pub weight: String,
}

impl WordWeight {
    /// Create a word entry from a raw coefficient, applying the reporting
    /// format.
    pub fn new(word: impl Into<String>, weight: f64) -> Self {
        Self {
            word: word.into(),
            weight: format!("{weight:.4}"),
        }
    }

    /// Parse the formatted weight back to a float.
    pub fn weight_value(&self) -> Option<f64> {
        self.weight.parse().ok()
    }
}

/// Per-class confidence: label mapped to a probability formatted to 2
/// decimal places.
///
/// Serializes as a JSON object whose entries keep the classifier's declared
/// class order instead of being re-sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Confidence {
    entries: Vec<(String, String)>,
}

impl Confidence {
    /// Create an empty confidence map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class probability, applying the reporting format.
    pub fn insert(&mut self, label: impl Into<String>, probability: f32) {
        self.entries.push((label.into(), format!("{probability:.2}")));
    }

    /// Look up the formatted probability for a label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in declared class order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Confidence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfidenceVisitor;

        impl<'de> Visitor<'de> for ConfidenceVisitor {
            type Value = Confidence;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of class label to probability string")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Confidence, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(Confidence { entries })
            }
        }

        deserializer.deserialize_map(ConfidenceVisitor)
    }
}

/// Complete explanation result for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// Label of the argmax class.
    pub verdict: String,

    /// Per-class confidence in declared class order.
    pub confidence: Confidence,

    /// Top-K contributing n-grams, sorted by descending absolute weight.
    pub words: Vec<WordWeight>,
}

impl Explanation {
    /// Create a verdict-only explanation (empty word list).
    ///
    /// Used when every explanation stage degraded; the verdict and
    /// confidence remain valid.
    pub fn verdict_only(verdict: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            verdict: verdict.into(),
            confidence,
            words: Vec::new(),
        }
    }

    /// Whether the explanation degraded to verdict + confidence only.
    pub fn is_verdict_only(&self) -> bool {
        self.words.is_empty()
    }
}
