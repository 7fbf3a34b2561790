//! Prediction history handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::middleware::auth::UserContext;
use crate::models::HistoryEntry;
use crate::{AppResult, AppState};

/// List the recent predictions, newest first
pub async fn list(
    State(state): State<AppState>,
    _user: UserContext,
) -> AppResult<Json<Vec<HistoryEntry>>> {
    Ok(Json(state.history.list()?))
}

/// Clear the prediction history
pub async fn clear(
    State(state): State<AppState>,
    user: UserContext,
) -> AppResult<StatusCode> {
    state.history.clear()?;
    tracing::info!("History cleared by {}", user.email);
    Ok(StatusCode::NO_CONTENT)
}
