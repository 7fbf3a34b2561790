//! Bulk CSV prediction handler

use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::Json;

use crate::analysis::intake;
use crate::models::{truncate_preview, BulkSummary, RowResult};
use crate::{AppError, AppResult, AppState};

/// Classify every review in an uploaded CSV and return aggregate
/// statistics. Any row failure fails the whole request; there are no
/// partial results.
pub async fn bulk_predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<BulkSummary>> {
    let started = Instant::now();

    let (content_type, data) = read_file_field(&mut multipart).await?;

    match content_type.as_deref() {
        Some("text/csv") => {}
        _ => return Err(AppError::InvalidFormat("File must be a CSV".to_string())),
    }

    let csv_intake = intake::extract_review_rows(&data, state.config.bulk_row_cap)?;

    let mut results = Vec::with_capacity(csv_intake.rows.len());
    for (index, text) in csv_intake.rows.iter().enumerate() {
        let verdict = state.analyzer.analyze(text).await?;
        results.push(RowResult {
            id: index + 1,
            text: truncate_preview(text),
            label: verdict.label,
            confidence: verdict.confidence,
        });
    }

    let summary = BulkSummary::from_results(
        results,
        csv_intake.truncated,
        started.elapsed().as_millis() as u64,
    );

    tracing::info!(
        "Bulk analysis: {} reviews ({} fake, {} genuine) in {} ms",
        summary.total_reviews,
        summary.fake_count,
        summary.genuine_count,
        summary.processing_time
    );

    Ok(Json(summary))
}

/// Pull the `file` field out of the multipart form
async fn read_file_field(
    multipart: &mut Multipart,
) -> AppResult<(Option<String>, axum::body::Bytes)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidFormat(format!("Invalid multipart form: {}", e)))?
    {
        if field.name() == Some("file") {
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidFormat(format!("Could not read file: {}", e)))?;
            return Ok((content_type, data));
        }
    }

    Err(AppError::InvalidFormat("CSV file is required".to_string()))
}
