//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// Which analyzer backs /predict: "mock" or "remote"
    analyzer: &'static str,
    timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let analyzer = if state.config.backend_url.is_some() {
        "remote"
    } else {
        "mock"
    };

    Json(HealthResponse {
        status: "healthy",
        service: "reviewguard",
        version: env!("CARGO_PKG_VERSION"),
        analyzer,
        timestamp: chrono::Utc::now().timestamp(),
    })
}
