//! ReviewGuard API Server
//!
//! Backend for the ReviewGuard fake-review detection demo.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    REVIEWGUARD SERVER                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐ │
//! │  │  API      │  │  Auth     │  │  Review Analysis        │ │
//! │  │  Gateway  │  │  Service  │  │  (mock / remote model)  │ │
//! │  │  (Axum)   │  │  (JWT)    │  │                         │ │
//! │  └─────┬─────┘  └─────┬─────┘  └────────────┬────────────┘ │
//! │        └──────────────┼──────────────────────┘              │
//! │                       ▼                                     │
//! │              ┌─────────────────┐                           │
//! │              │ JSON records    │                           │
//! │              │ (session/history)│                          │
//! │              └─────────────────┘                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod middleware;
mod error;
mod analysis;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use analysis::ReviewAnalyzer;
use store::{HistoryStore, KvStore, SessionManager, UserRegistry};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "reviewguard_server=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("ReviewGuard server starting...");
    tracing::info!("Data directory: {}", config.data_dir.display());

    if config.is_production() && config.uses_default_secret() {
        tracing::warn!("Running in production with the default JWT secret");
    }

    // Local stores: session and history are two JSON records
    let kv = Arc::new(KvStore::open(&config.data_dir)?);
    let sessions = Arc::new(SessionManager::new(kv.clone())?);
    let history = Arc::new(HistoryStore::new(kv, sessions.clone()));
    let users = Arc::new(UserRegistry::with_demo_user()?);

    // Analyzer seam: mock unless a backend URL is configured
    let analyzer = analysis::analyzer_from_config(&config);

    let state = AppState {
        config: config.clone(),
        analyzer,
        users,
        sessions,
        history,
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub analyzer: Arc<dyn ReviewAnalyzer>,
    pub users: Arc<UserRegistry>,
    pub sessions: Arc<SessionManager>,
    pub history: Arc<HistoryStore>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/auth/login", post(handlers::auth::login))
        .route("/api/v1/auth/signup", post(handlers::auth::signup))
        .route("/api/v1/bulk-predict", post(handlers::bulk::bulk_predict));

    // Prediction works signed out, but a valid token enables history capture
    let predict_routes = Router::new()
        .route("/api/v1/predict", post(handlers::predict::predict))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::attach_user_if_present,
        ));

    // Session-holder routes (user JWT auth)
    let session_routes = Router::new()
        .route("/api/v1/auth/logout", post(handlers::auth::logout))
        .route("/api/v1/history", get(handlers::history::list))
        .route("/api/v1/history", delete(handlers::history::clear))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_user_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(predict_routes)
        .merge(session_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
