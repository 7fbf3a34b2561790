//! Single-review prediction handler

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::middleware::auth::UserContext;
use crate::models::PredictionVerdict;
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub review_text: String,
}

/// Classify one review. Works signed out; with a valid bearer token the
/// verdict is also captured into the prediction history.
pub async fn predict(
    State(state): State<AppState>,
    user: Option<UserContext>,
    Json(req): Json<PredictRequest>,
) -> AppResult<Json<PredictionVerdict>> {
    let verdict = state.analyzer.analyze(&req.review_text).await?;

    if user.is_some() {
        // History capture must not fail an otherwise successful prediction
        if let Err(e) = state
            .history
            .append(&req.review_text, verdict.label, verdict.confidence)
        {
            tracing::warn!("Failed to record prediction history: {}", e);
        }
    }

    Ok(Json(verdict))
}
