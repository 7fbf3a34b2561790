//! Single-review verdict model

use serde::{Deserialize, Serialize};

/// Classification label, mutually exclusive and exhaustive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Fake,
    Genuine,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fake => "Fake",
            Label::Genuine => "Genuine",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Behavioral signals attached to a verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralFeatures {
    /// Deviation from the product's average rating, non-negative
    pub rating_deviation: f64,
    /// Raw character count of the submitted review, not the token count
    pub review_length: usize,
    /// Sentiment polarity in [0, 1]
    pub sentiment_score: f64,
    pub repetitive_patterns: bool,
}

/// One per-token confidence annotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapEntry {
    pub word: String,
    /// Token-level contribution in [0, 1]
    pub confidence: f64,
    /// Zero-based token index, strictly increasing across the heatmap
    pub position: usize,
}

/// Full classification result for one review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionVerdict {
    pub label: Label,
    /// Percentage in [0, 100]
    pub confidence: f64,
    pub suspicious_keywords: Vec<String>,
    pub behavioral_features: BehavioralFeatures,
    pub explanation: String,
    pub confidence_heatmap: Vec<HeatmapEntry>,
}

impl PredictionVerdict {
    /// Check the verdict contract against the review it claims to describe.
    ///
    /// Used to reject malformed responses from a remote inference backend
    /// before they reach callers: one heatmap entry per whitespace token in
    /// input order with gapless positions, reviewLength equal to the raw
    /// character count, and all confidences within their domains.
    pub fn validate_against(&self, text: &str) -> Result<(), String> {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        if self.confidence_heatmap.len() != tokens.len() {
            return Err(format!(
                "heatmap has {} entries for {} tokens",
                self.confidence_heatmap.len(),
                tokens.len()
            ));
        }

        for (index, (entry, token)) in self.confidence_heatmap.iter().zip(&tokens).enumerate() {
            if entry.position != index {
                return Err(format!(
                    "heatmap position {} at index {}",
                    entry.position, index
                ));
            }
            if entry.word != *token {
                return Err(format!(
                    "heatmap word {:?} does not match token {:?}",
                    entry.word, token
                ));
            }
            if !(0.0..=1.0).contains(&entry.confidence) {
                return Err(format!("heatmap confidence {} out of [0, 1]", entry.confidence));
            }
        }

        if !(0.0..=100.0).contains(&self.confidence) {
            return Err(format!("confidence {} out of [0, 100]", self.confidence));
        }

        let char_count = text.chars().count();
        if self.behavioral_features.review_length != char_count {
            return Err(format!(
                "reviewLength {} does not match character count {}",
                self.behavioral_features.review_length, char_count
            ));
        }

        if self.behavioral_features.rating_deviation < 0.0 {
            return Err("ratingDeviation is negative".to_string());
        }
        if !(0.0..=1.0).contains(&self.behavioral_features.sentiment_score) {
            return Err(format!(
                "sentimentScore {} out of [0, 1]",
                self.behavioral_features.sentiment_score
            ));
        }

        Ok(())
    }
}
