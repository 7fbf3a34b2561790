//! Authentication handlers

use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::middleware::auth::UserContext;
use crate::models::{Session, UserAccount};
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,      // User ID
    pub email: String,
    pub exp: usize,       // Expiration timestamp
    pub iat: usize,       // Issued at
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Session,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub status: &'static str,
}

/// Login endpoint
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let account = state.users.verify(&req.email, &req.password)?;

    let session = Session::started(&account);
    state.sessions.open(session.clone())?;

    let token = generate_jwt(&account, &state.config.jwt_secret, state.config.jwt_expiration_hours)?;

    tracing::info!("User logged in: {}", account.email);

    Ok(Json(AuthResponse { token, user: session }))
}

/// Signup endpoint
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> AppResult<Json<AuthResponse>> {
    req.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let account = state.users.register(&req.email, &req.password, &req.name)?;

    let session = Session::started(&account);
    state.sessions.open(session.clone())?;

    let token = generate_jwt(&account, &state.config.jwt_secret, state.config.jwt_expiration_hours)?;

    tracing::info!("New user registered: {}", account.email);

    Ok(Json(AuthResponse { token, user: session }))
}

/// Logout endpoint. Clears the session and the prediction history
/// together, so the caller observes one atomic sign-out.
pub async fn logout(
    State(state): State<AppState>,
    user: UserContext,
) -> AppResult<Json<LogoutResponse>> {
    state.sessions.close()?;
    state.history.clear()?;

    tracing::info!("User logged out: {}", user.email);

    Ok(Json(LogoutResponse { status: "logged_out" }))
}

/// Generate JWT token
fn generate_jwt(account: &UserAccount, secret: &str, expiration_hours: u64) -> AppResult<String> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiration_hours as i64);

    let claims = Claims {
        sub: account.id.to_string(),
        email: account.email.clone(),
        exp: exp.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    ).map_err(|e| AppError::InternalError(e.to_string()))
}
