//! Prediction history model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::verdict::Label;
use super::truncate_preview;

/// One remembered prediction, newest kept first in the history record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    /// Preview-truncated review text
    pub review_text: String,
    pub classification: Label,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(review_text: &str, classification: Label, confidence: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            review_text: truncate_preview(review_text),
            classification,
            confidence,
            timestamp: Utc::now(),
        }
    }
}
