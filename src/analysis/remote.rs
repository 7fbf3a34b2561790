//! Remote analyzer
//!
//! HTTP client for a real inference backend speaking the same wire
//! contract as the mock: `POST {base}/predict` with `{"reviewText": ...}`,
//! a `PredictionVerdict` JSON body on 200, `{"error": ...}` otherwise.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::PredictionVerdict;

use super::analyzer::{ensure_non_empty, ReviewAnalyzer};

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct RemoteAnalyzer {
    base_url: String,
    http_client: reqwest::Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictRequest<'a> {
    review_text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl RemoteAnalyzer {
    pub fn new(base_url: String) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }
}

#[axum::async_trait]
impl ReviewAnalyzer for RemoteAnalyzer {
    async fn analyze(&self, text: &str) -> AppResult<PredictionVerdict> {
        ensure_non_empty(text)?;

        let url = format!("{}/predict", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .json(&PredictRequest { review_text: text })
            .send()
            .await
            .map_err(|e| AppError::BackendUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Missing or malformed error bodies fall back to a generic message
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(AppError::BackendError {
                status: status.as_u16(),
                message,
            });
        }

        let verdict: PredictionVerdict = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        // A 2xx body still has to honor the verdict contract
        verdict
            .validate_against(text)
            .map_err(AppError::MalformedResponse)?;

        Ok(verdict)
    }
}
