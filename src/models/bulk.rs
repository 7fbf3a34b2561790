//! Bulk analysis summary model

use serde::{Deserialize, Serialize};

use super::verdict::Label;

/// Per-row classification inside a bulk summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowResult {
    /// 1-based row index in processing order
    pub id: usize,
    /// Review text, preview-truncated
    pub text: String,
    pub label: Label,
    pub confidence: f64,
}

/// Aggregate result of one CSV analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSummary {
    pub total_reviews: usize,
    pub fake_count: usize,
    pub genuine_count: usize,
    /// Mean of per-row confidences, rounded to one decimal
    pub average_confidence: f64,
    pub results: Vec<RowResult>,
    /// Elapsed wall-clock milliseconds for the request
    pub processing_time: u64,
    /// True when rows beyond the per-request cap were excluded
    pub truncated: bool,
}

impl BulkSummary {
    /// Derive every aggregate field from the results vector, so that
    /// `fake_count + genuine_count == total_reviews` holds by construction.
    pub fn from_results(results: Vec<RowResult>, truncated: bool, processing_time: u64) -> Self {
        let total_reviews = results.len();
        let fake_count = results.iter().filter(|r| r.label == Label::Fake).count();
        let genuine_count = total_reviews - fake_count;

        let average_confidence = if total_reviews == 0 {
            0.0
        } else {
            let sum: f64 = results.iter().map(|r| r.confidence).sum();
            (sum / total_reviews as f64 * 10.0).round() / 10.0
        };

        Self {
            total_reviews,
            fake_count,
            genuine_count,
            average_confidence,
            results,
            processing_time,
            truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: usize, label: Label, confidence: f64) -> RowResult {
        RowResult {
            id,
            text: format!("review {}", id),
            label,
            confidence,
        }
    }

    #[test]
    fn test_counts_derived_from_results() {
        let summary = BulkSummary::from_results(
            vec![
                row(1, Label::Fake, 80.0),
                row(2, Label::Genuine, 90.0),
                row(3, Label::Fake, 70.0),
            ],
            false,
            12,
        );

        assert_eq!(summary.total_reviews, 3);
        assert_eq!(summary.fake_count, 2);
        assert_eq!(summary.genuine_count, 1);
        assert_eq!(summary.fake_count + summary.genuine_count, summary.total_reviews);
    }

    #[test]
    fn test_average_confidence_rounded_to_one_decimal() {
        let summary = BulkSummary::from_results(
            vec![
                row(1, Label::Fake, 71.0),
                row(2, Label::Genuine, 72.0),
                row(3, Label::Genuine, 74.0),
            ],
            false,
            0,
        );

        // 217 / 3 = 72.333...
        assert_eq!(summary.average_confidence, 72.3);
    }

    #[test]
    fn test_truncation_flag_carried() {
        let summary = BulkSummary::from_results(vec![row(1, Label::Fake, 80.0)], true, 5);
        assert!(summary.truncated);
    }
}
