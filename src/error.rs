//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Input errors
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    InvalidFormat(String),
    #[error("{0}")]
    InsufficientData(String),
    #[error("{0}")]
    ValidationError(String),

    // Auth errors
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Token has expired")]
    TokenExpired,
    #[error("Invalid token")]
    TokenInvalid,
    #[error("Authentication required")]
    Unauthorized,

    // Resource errors
    #[error("{0}")]
    AlreadyExists(String),

    // Inference backend errors
    #[error("Inference backend unreachable: {0}")]
    BackendUnavailable(String),
    #[error("Inference backend returned {status}: {message}")]
    BackendError { status: u16, message: String },
    #[error("Inference backend returned a malformed verdict: {0}")]
    MalformedResponse(String),

    // Local store errors
    #[error("Storage error: {0}")]
    StorageError(String),

    // Generic errors
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidFormat(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InsufficientData(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::TokenInvalid => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::AlreadyExists(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::BackendUnavailable(msg) => {
                tracing::error!("Inference backend unreachable: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Analysis backend is unreachable. Please try again.".to_string(),
                )
            }
            AppError::BackendError { status, message } => {
                tracing::error!("Inference backend error {}: {}", status, message);
                (StatusCode::BAD_GATEWAY, message.clone())
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed verdict from backend: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Analysis backend returned an invalid response.".to_string(),
                )
            }
            AppError::StorageError(msg) => {
                tracing::error!("Storage error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error occurred".to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::TokenInvalid,
        }
    }
}
