//! Mock analyzer
//!
//! Random-driven stand-in for the real model, kept behind the
//! [`ReviewAnalyzer`] seam so swapping in a live backend requires no
//! caller changes. Labels and confidences are sampled, but every
//! structural guarantee of the verdict contract is honored.

use rand::Rng;

use crate::error::AppResult;
use crate::models::{BehavioralFeatures, HeatmapEntry, Label, PredictionVerdict};

use super::analyzer::{ensure_non_empty, ReviewAnalyzer};

/// Terms the demo flags as suspicious marketing language
const SUSPICIOUS_KEYWORDS: [&str; 4] = ["amazing", "perfect", "best ever", "highly recommend"];

pub struct MockAnalyzer;

#[axum::async_trait]
impl ReviewAnalyzer for MockAnalyzer {
    async fn analyze(&self, text: &str) -> AppResult<PredictionVerdict> {
        build_verdict(text)
    }
}

fn build_verdict(text: &str) -> AppResult<PredictionVerdict> {
    ensure_non_empty(text)?;

    let mut rng = rand::thread_rng();
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let label = if rng.gen_bool(0.5) { Label::Fake } else { Label::Genuine };
    let confidence = rng.gen_range(70..=100) as f64;

    let suspicious_keywords = SUSPICIOUS_KEYWORDS
        .iter()
        .filter(|_| rng.gen_bool(0.5))
        .map(|kw| kw.to_string())
        .collect();

    let behavioral_features = BehavioralFeatures {
        rating_deviation: round_to(rng.gen_range(1.0..4.0), 1),
        review_length: text.chars().count(),
        sentiment_score: round_to(rng.gen_range(0.6..1.0), 2),
        repetitive_patterns: rng.gen_bool(0.4),
    };

    let pattern_kind = if rng.gen_bool(0.5) { "suspicious" } else { "normal" };
    let explanation = format!(
        "The model analyzed {} words and detected {} patterns in sentiment distribution and keyword usage.",
        tokens.len(),
        pattern_kind
    );

    let confidence_heatmap = tokens
        .iter()
        .enumerate()
        .map(|(position, word)| HeatmapEntry {
            word: word.to_string(),
            confidence: rng.gen_range(0.2..1.0),
            position,
        })
        .collect();

    Ok(PredictionVerdict {
        label,
        confidence,
        suspicious_keywords,
        behavioral_features,
        explanation,
        confidence_heatmap,
    })
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_heatmap_has_one_entry_per_token() {
        let text = "This   product is\tabsolutely great\nno complaints";
        let verdict = MockAnalyzer.analyze(text).await.unwrap();

        assert_eq!(
            verdict.confidence_heatmap.len(),
            text.split_whitespace().count()
        );
        for (index, entry) in verdict.confidence_heatmap.iter().enumerate() {
            assert_eq!(entry.position, index);
        }
    }

    #[tokio::test]
    async fn test_review_length_is_character_count() {
        let text = "héllo wörld 👍";
        let verdict = MockAnalyzer.analyze(text).await.unwrap();

        assert_eq!(verdict.behavioral_features.review_length, text.chars().count());
    }

    #[tokio::test]
    async fn test_confidence_is_integer_between_70_and_100() {
        for _ in 0..50 {
            let verdict = MockAnalyzer.analyze("decent enough purchase").await.unwrap();
            assert!((70.0..=100.0).contains(&verdict.confidence));
            assert_eq!(verdict.confidence.fract(), 0.0);
        }
    }

    #[tokio::test]
    async fn test_verdict_satisfies_contract() {
        let text = "Absolutely amazing, best ever purchase I made";
        let verdict = MockAnalyzer.analyze(text).await.unwrap();
        verdict.validate_against(text).unwrap();
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let err = MockAnalyzer.analyze("").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_whitespace_only_text_rejected() {
        let err = MockAnalyzer.analyze("   \t\n ").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
