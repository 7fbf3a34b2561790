//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// JWT secret key
    pub jwt_secret: String,

    /// JWT expiration in hours
    pub jwt_expiration_hours: u64,

    /// Directory holding the session and history records
    pub data_dir: PathBuf,

    /// Remote inference backend URL; unset means the built-in mock analyzer
    pub backend_url: Option<String>,

    /// Maximum number of CSV rows classified per bulk request
    pub bulk_row_cap: usize,

    /// Environment (development, production)
    pub environment: String,
}

const DEFAULT_JWT_SECRET: &str = "reviewguard-super-secret-key-change-in-production";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),

            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),

            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    dirs::data_local_dir()
                        .unwrap_or_else(|| PathBuf::from("."))
                        .join("reviewguard")
                }),

            backend_url: env::var("BACKEND_URL").ok().filter(|u| !u.is_empty()),

            bulk_row_cap: env::var("BULK_ROW_CAP")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(100),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// True when the JWT secret was never changed from the built-in default
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}
