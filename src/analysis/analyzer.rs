//! Analyzer seam
//!
//! One trait in front of the inference backend so the mock and a real
//! remote model are interchangeable without caller changes.

use std::sync::Arc;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::PredictionVerdict;

use super::mock::MockAnalyzer;
use super::remote::RemoteAnalyzer;

/// Classifies a single review. Stateless per call: no side effects, no
/// mandatory latency, same contract for every implementation.
#[axum::async_trait]
pub trait ReviewAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> AppResult<PredictionVerdict>;
}

/// Reject empty-after-trim input before any classification work
pub(super) fn ensure_non_empty(text: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::InvalidInput("Review text is required".to_string()));
    }
    Ok(())
}

/// Pick the analyzer implementation from configuration: a configured
/// backend URL selects the remote client, otherwise the mock.
pub fn analyzer_from_config(config: &Config) -> Arc<dyn ReviewAnalyzer> {
    match &config.backend_url {
        Some(url) => {
            tracing::info!("Using remote inference backend at {}", url);
            Arc::new(RemoteAnalyzer::new(url.clone()))
        }
        None => {
            tracing::info!("No BACKEND_URL configured, using mock analyzer");
            Arc::new(MockAnalyzer)
        }
    }
}
