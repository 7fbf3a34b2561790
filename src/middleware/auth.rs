//! Authentication middleware

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{decode, DecodingKey, Validation};
use uuid::Uuid;

use crate::handlers::auth::Claims;
use crate::{AppError, AppState};

/// User context extracted from JWT
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user_id: Uuid,
    pub email: String,
}

/// Middleware: Require user JWT authentication
pub async fn require_user_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&req).ok_or(AppError::Unauthorized)?;
    let user_ctx = decode_user(&token, &state.config.jwt_secret)?;

    req.extensions_mut().insert(user_ctx);

    Ok(next.run(req).await)
}

/// Middleware: Attach a user context when a valid bearer token is present.
/// Missing or invalid tokens leave the request anonymous instead of failing,
/// so prediction works signed out while history capture stays gated.
pub async fn attach_user_if_present(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_bearer_token(&req) {
        match decode_user(&token, &state.config.jwt_secret) {
            Ok(user_ctx) => {
                req.extensions_mut().insert(user_ctx);
            }
            Err(_) => {
                tracing::debug!("Ignoring invalid bearer token on public route");
            }
        }
    }

    next.run(req).await
}

fn decode_user(token: &str, secret: &str) -> Result<UserContext, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;

    let claims = token_data.claims;

    Ok(UserContext {
        user_id: Uuid::parse_str(&claims.sub).map_err(|_| AppError::TokenInvalid)?,
        email: claims.email,
    })
}

/// Extract bearer token from Authorization header
fn extract_bearer_token(req: &Request) -> Option<String> {
    let auth_header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    auth_header.strip_prefix("Bearer ").map(str::to_string)
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for UserContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions
            .get::<UserContext>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
